//! REPL command handlers for the graphiz CLI.
//!
//! Each command is implemented as a separate function for maintainability.

use std::thread;
use std::time::Duration;

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use graphiz_core::graph::{EdgeId, GraphStore, Position, VertexId};
use graphiz_core::{Algorithm, GraphizConfig, HighlightState, PlaybackFrame, TraversalPlayback};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of a REPL command execution.
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Interactive session state shared by every command.
pub struct Session {
    pub store: GraphStore,
    pub config: GraphizConfig,
    /// Playback sleeps between frames only in interactive sessions.
    pub interactive: bool,
}

impl Session {
    /// Creates a session over an empty store.
    pub fn new(config: GraphizConfig, interactive: bool) -> Self {
        Self {
            store: GraphStore::new(),
            config,
            interactive,
        }
    }
}

/// Handle one REPL line.
pub fn handle_command(session: &mut Session, line: &str) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&cmd) = parts.first() else {
        return CommandResult::Continue;
    };

    match cmd.to_lowercase().as_str() {
        "quit" | "exit" | "q" => CommandResult::Quit,
        "help" | "h" => {
            print_help();
            CommandResult::Continue
        }
        "vertex" => cmd_vertex(session, &parts),
        "edge" => cmd_edge(session, &parts),
        "wedge" => cmd_wedge(session, &parts),
        "delete" => cmd_delete(session, &parts),
        "select" => cmd_select(session, &parts),
        "label" => cmd_label(session, &parts),
        "weight" => cmd_weight(session, &parts),
        "type" => cmd_type(session, &parts),
        "backspace" => cmd_backspace(session, &parts),
        "move" => cmd_move(session, &parts),
        "list" => cmd_list(session, &parts),
        "stats" => cmd_stats(session),
        "bfs" => cmd_traversal(session, Algorithm::Bfs, &parts),
        "dfs" => cmd_traversal(session, Algorithm::Dfs, &parts),
        "dijkstra" => cmd_dijkstra(session, &parts),
        "play" => cmd_play(session, &parts),
        _ => CommandResult::Error(format!("Unknown command: {cmd}")),
    }
}

fn parse_vertex_id(raw: &str) -> Option<VertexId> {
    raw.parse().ok().map(VertexId::new)
}

fn parse_edge_id(raw: &str) -> Option<EdgeId> {
    raw.parse().ok().map(EdgeId::new)
}

fn cmd_vertex(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: vertex <x> <y> [label]\n");
        return CommandResult::Continue;
    }
    let (Ok(x), Ok(y)) = (parts[1].parse::<f32>(), parts[2].parse::<f32>()) else {
        return CommandResult::Error(format!("Invalid coordinates: {} {}", parts[1], parts[2]));
    };
    let position = Position::new(x, y);
    let fill = session.config.vertex.fill;

    let id = match parts.get(3) {
        Some(label) => match session.store.create_vertex_labeled(position, fill, label) {
            Ok(id) => id,
            Err(e) => return CommandResult::Error(e.to_string()),
        },
        None => session.store.create_vertex(position, fill),
    };
    let label = session
        .store
        .vertex(id)
        .map_or_else(String::new, |v| v.label().to_string());
    println!("vertex {} \"{}\" at ({x}, {y})", id, label.green());
    CommandResult::Continue
}

fn cmd_edge(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: edge <from_id> <to_id>\n");
        return CommandResult::Continue;
    }
    let (Some(from), Some(to)) = (parse_vertex_id(parts[1]), parse_vertex_id(parts[2])) else {
        return CommandResult::Error(format!("Invalid vertex ids: {} {}", parts[1], parts[2]));
    };
    match session.store.create_edge(from, to) {
        Ok(id) => {
            println!("edge {}: {}", id, describe_edge(&session.store, from, to));
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_wedge(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 4 {
        println!("Usage: wedge <from_id> <to_id> <weight>\n");
        return CommandResult::Continue;
    }
    let (Some(from), Some(to)) = (parse_vertex_id(parts[1]), parse_vertex_id(parts[2])) else {
        return CommandResult::Error(format!("Invalid vertex ids: {} {}", parts[1], parts[2]));
    };
    let Ok(weight) = parts[3].parse::<i64>() else {
        return CommandResult::Error(format!("Invalid weight: {}", parts[3]));
    };
    match session.store.create_weighted_edge(from, to, Some(weight)) {
        Ok(id) => {
            println!(
                "edge {}: {} (weight {weight})",
                id,
                describe_edge(&session.store, from, to)
            );
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn describe_edge(store: &GraphStore, from: VertexId, to: VertexId) -> String {
    let label = |id| {
        store
            .vertex(id)
            .map_or_else(String::new, |v| v.label().to_string())
    };
    format!("{} -> {}", label(from).green(), label(to).green())
}

fn cmd_delete(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: delete vertex|edge <id>\n");
        return CommandResult::Continue;
    }
    match parts[1].to_lowercase().as_str() {
        "vertex" => {
            let Some(id) = parse_vertex_id(parts[2]) else {
                return CommandResult::Error(format!("Invalid vertex id: {}", parts[2]));
            };
            match session.store.delete_vertex(id) {
                Ok(cascaded) => {
                    println!("deleted vertex {id}, removed {cascaded} touching edge(s)");
                    CommandResult::Continue
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        "edge" => {
            let Some(id) = parse_edge_id(parts[2]) else {
                return CommandResult::Error(format!("Invalid edge id: {}", parts[2]));
            };
            match session.store.delete_edge(id) {
                Ok(()) => {
                    println!("deleted edge {id}");
                    CommandResult::Continue
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        other => CommandResult::Error(format!("Unknown target: {other}")),
    }
}

fn cmd_select(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: select vertex|edge <id>, or select none\n");
        return CommandResult::Continue;
    }
    match parts[1].to_lowercase().as_str() {
        "none" => {
            session.store.clear_selection();
            println!("selection cleared");
            CommandResult::Continue
        }
        "vertex" => {
            let Some(id) = parts.get(2).and_then(|raw| parse_vertex_id(raw)) else {
                return CommandResult::Error("Usage: select vertex <id>".to_string());
            };
            match session.store.select_vertex(id) {
                Ok(()) => {
                    println!("selected vertex {id}");
                    CommandResult::Continue
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        "edge" => {
            let Some(id) = parts.get(2).and_then(|raw| parse_edge_id(raw)) else {
                return CommandResult::Error("Usage: select edge <id>".to_string());
            };
            match session.store.select_edge(id) {
                Ok(()) => {
                    println!("selected edge {id}");
                    CommandResult::Continue
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        other => CommandResult::Error(format!("Unknown target: {other}")),
    }
}

fn cmd_label(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: label <vertex_id> <text>\n");
        return CommandResult::Continue;
    }
    let Some(id) = parse_vertex_id(parts[1]) else {
        return CommandResult::Error(format!("Invalid vertex id: {}", parts[1]));
    };
    let text = parts[2..].join(" ");
    match session.store.set_label(id, &text) {
        Ok(()) => {
            println!("vertex {} is now \"{}\"", id, text.green());
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_weight(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: weight <edge_id> <value>\n");
        return CommandResult::Continue;
    }
    let Some(id) = parse_edge_id(parts[1]) else {
        return CommandResult::Error(format!("Invalid edge id: {}", parts[1]));
    };
    let Ok(value) = parts[2].parse::<i64>() else {
        return CommandResult::Error(format!("Invalid weight: {}", parts[2]));
    };
    match session.store.set_weight(id, value) {
        Ok(()) => {
            println!("edge {id} weight set to {value}");
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_type(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 4 {
        println!("Usage: type vertex|edge <id> <keys>\n");
        return CommandResult::Continue;
    }
    let keys = parts[3..].join(" ");
    match parts[1].to_lowercase().as_str() {
        "vertex" => {
            let Some(id) = parse_vertex_id(parts[2]) else {
                return CommandResult::Error(format!("Invalid vertex id: {}", parts[2]));
            };
            for ch in keys.chars() {
                if let Err(e) = session.store.type_label_char(id, ch) {
                    return CommandResult::Error(e.to_string());
                }
            }
            let label = session
                .store
                .vertex(id)
                .map_or_else(String::new, |v| v.label().to_string());
            println!("vertex {} is now \"{}\"", id, label.green());
            CommandResult::Continue
        }
        "edge" => {
            let Some(id) = parse_edge_id(parts[2]) else {
                return CommandResult::Error(format!("Invalid edge id: {}", parts[2]));
            };
            for ch in keys.chars() {
                if let Err(e) = session.store.type_weight_char(id, ch) {
                    return CommandResult::Error(e.to_string());
                }
            }
            let text = session
                .store
                .edge(id)
                .and_then(|e| e.weight())
                .map_or_else(String::new, |w| w.text().to_string());
            println!("edge {id} weight text is now \"{text}\"");
            CommandResult::Continue
        }
        other => CommandResult::Error(format!("Unknown target: {other}")),
    }
}

fn cmd_backspace(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 3 {
        println!("Usage: backspace vertex|edge <id>\n");
        return CommandResult::Continue;
    }
    match parts[1].to_lowercase().as_str() {
        "vertex" => {
            let Some(id) = parse_vertex_id(parts[2]) else {
                return CommandResult::Error(format!("Invalid vertex id: {}", parts[2]));
            };
            match session.store.backspace_label(id) {
                Ok(()) => {
                    let label = session
                        .store
                        .vertex(id)
                        .map_or_else(String::new, |v| v.label().to_string());
                    println!("vertex {} is now \"{}\"", id, label.green());
                    CommandResult::Continue
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        "edge" => {
            let Some(id) = parse_edge_id(parts[2]) else {
                return CommandResult::Error(format!("Invalid edge id: {}", parts[2]));
            };
            match session.store.backspace_weight(id) {
                Ok(()) => {
                    let text = session
                        .store
                        .edge(id)
                        .and_then(|e| e.weight())
                        .map_or_else(String::new, |w| w.text().to_string());
                    println!("edge {id} weight text is now \"{text}\"");
                    CommandResult::Continue
                }
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        other => CommandResult::Error(format!("Unknown target: {other}")),
    }
}

fn cmd_move(session: &mut Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 4 {
        println!("Usage: move <vertex_id> <x> <y>\n");
        return CommandResult::Continue;
    }
    let Some(id) = parse_vertex_id(parts[1]) else {
        return CommandResult::Error(format!("Invalid vertex id: {}", parts[1]));
    };
    let (Ok(x), Ok(y)) = (parts[2].parse::<f32>(), parts[3].parse::<f32>()) else {
        return CommandResult::Error(format!("Invalid coordinates: {} {}", parts[2], parts[3]));
    };
    match session.store.set_position(id, Position::new(x, y)) {
        Ok(()) => {
            println!("vertex {id} moved to ({x}, {y})");
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_list(session: &Session, parts: &[&str]) -> CommandResult {
    if parts.get(1).copied() == Some("--json") {
        let payload = serde_json::json!({
            "vertices": session.store.vertex_views(),
            "edges": session.store.edge_views(),
        });
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => println!("{text}"),
            Err(e) => return CommandResult::Error(format!("Failed to serialize: {e}")),
        }
        return CommandResult::Continue;
    }

    let mut vertices = Table::new();
    vertices
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Label", "X", "Y", "Selected"]);
    for view in session.store.vertex_views() {
        vertices.add_row(vec![
            view.id.to_string(),
            view.label.clone(),
            format!("{:.0}", view.position.x),
            format!("{:.0}", view.position.y),
            if view.selected { "*" } else { "" }.to_string(),
        ]);
    }
    println!("{}", "Vertices".bold());
    println!("{vertices}");

    let mut edges = Table::new();
    edges
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "From", "To", "Weight", "Selected"]);
    for view in session.store.edge_views() {
        let label = |id| {
            session
                .store
                .vertex(id)
                .map_or_else(String::new, |v| v.label().to_string())
        };
        edges.add_row(vec![
            view.id.to_string(),
            label(view.from),
            label(view.to),
            view.weight.clone().unwrap_or_else(|| "-".to_string()),
            if view.selected { "*" } else { "" }.to_string(),
        ]);
    }
    println!("{}", "Edges".bold());
    println!("{edges}");
    CommandResult::Continue
}

fn cmd_stats(session: &Session) -> CommandResult {
    let stats = session.store.stats();
    println!("\n{}", "Graph Statistics".bold().underline());
    println!("  {} {}", "Vertices:".cyan(), stats.usable_vertices);
    println!(
        "  {} {} (including deleted)",
        "Created:".cyan(),
        stats.total_vertices
    );
    println!("  {} {}", "Edges:".cyan(), stats.edges);
    println!();
    CommandResult::Continue
}

fn start_label(session: &Session, parts: &[&str], index: usize) -> String {
    parts
        .get(index)
        .map_or_else(|| session.store.start_label(), ToString::to_string)
}

fn cmd_traversal(session: &Session, algorithm: Algorithm, parts: &[&str]) -> CommandResult {
    let start = start_label(session, parts, 1);
    let order = match algorithm {
        Algorithm::Bfs => session.store.run_bfs(&start),
        Algorithm::Dfs => session.store.run_dfs(&start),
        Algorithm::Dijkstra => return cmd_dijkstra(session, parts),
    };
    println!("\n{} from {}", algorithm.name().bold(), start.green());
    println!("  {}", order.join(" -> "));
    println!("  {} {}\n", "Complexity:".cyan(), algorithm.complexity());
    CommandResult::Continue
}

fn cmd_dijkstra(session: &Session, parts: &[&str]) -> CommandResult {
    let start = start_label(session, parts, 1);
    let run = match session.store.run_dijkstra(&start) {
        Ok(run) => run,
        Err(e) => return CommandResult::Error(e.to_string()),
    };

    println!("\nDijkstra from {}", start.green());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Vertex", "Distance"]);
    for (label, distance) in &run.distances {
        table.add_row(vec![label.clone(), distance.to_string()]);
    }
    println!("{table}");
    println!("  {} {} edge examinations", "Trace:".cyan(), run.trace.len());
    println!(
        "  {} {}\n",
        "Complexity:".cyan(),
        Algorithm::Dijkstra.complexity()
    );
    CommandResult::Continue
}

fn cmd_play(session: &Session, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Usage: play bfs|dfs|dijkstra [start]\n");
        return CommandResult::Continue;
    }
    let start = start_label(session, parts, 2);
    let mut playback = match parts[1].to_lowercase().as_str() {
        "bfs" => TraversalPlayback::from_visit_order(
            &session.store,
            Algorithm::Bfs,
            session.store.run_bfs(&start),
        ),
        "dfs" => TraversalPlayback::from_visit_order(
            &session.store,
            Algorithm::Dfs,
            session.store.run_dfs(&start),
        ),
        "dijkstra" => match session.store.run_dijkstra(&start) {
            Ok(run) => TraversalPlayback::from_dijkstra(&session.store, &run),
            Err(e) => return CommandResult::Error(e.to_string()),
        },
        other => return CommandResult::Error(format!("Unknown algorithm: {other}")),
    };

    println!(
        "\n{} from {} ({} frames)",
        playback.algorithm().name().bold(),
        start.green(),
        playback.len()
    );
    let delay = Duration::from_secs_f32(session.config.playback.step_seconds);
    while let Some(frame) = playback.step() {
        print_frame(&frame, &session.config);
        if session.interactive && !playback.is_finished() {
            thread::sleep(delay);
        }
    }
    println!(
        "  {} {}\n",
        "Complexity:".cyan(),
        playback.algorithm().complexity()
    );
    if session.interactive {
        thread::sleep(Duration::from_secs_f32(session.config.playback.hold_seconds));
    }
    CommandResult::Continue
}

fn print_frame(frame: &PlaybackFrame, config: &GraphizConfig) {
    let rendered: Vec<String> = frame
        .vertices
        .iter()
        .map(|vertex| {
            let color = match vertex.highlight {
                HighlightState::Current => Some(config.playback.current),
                HighlightState::Frontier => Some(config.playback.frontier),
                HighlightState::Visited => Some(config.playback.visited),
                HighlightState::Idle => None,
            };
            match color {
                Some(c) => vertex.label.truecolor(c.r, c.g, c.b).to_string(),
                None => vertex.label.clone(),
            }
        })
        .collect();
    println!(
        "  [{:>2}] {} | {}",
        frame.index,
        frame.current.bold(),
        rendered.join(" ")
    );
    if let Some(distances) = &frame.distances {
        let line: Vec<String> = distances
            .iter()
            .map(|(label, distance)| format!("{label}={distance}"))
            .collect();
        println!("       {}", line.join(" ").dimmed());
    }
}

/// Print help text for REPL commands.
pub fn print_help() {
    println!("\n{} v{VERSION}", "Graphiz Commands".bold().underline());
    println!();
    println!("  {}        Place a vertex", "vertex <x> <y> [label]".yellow());
    println!("  {}             Connect two vertices", "edge <from> <to>".yellow());
    println!("  {}     Connect with a weight", "wedge <from> <to> <w>".yellow());
    println!("  {}    Delete an entity", "delete vertex|edge <id>".yellow());
    println!("  {}    Select, or select none", "select vertex|edge <id>".yellow());
    println!("  {}          Rename a vertex", "label <id> <text>".yellow());
    println!("  {}         Set an edge weight", "weight <id> <value>".yellow());
    println!(
        "  {} Feed edit keystrokes",
        "type vertex|edge <id> <keys>".yellow()
    );
    println!(
        "  {}  Drop the last keystroke",
        "backspace vertex|edge <id>".yellow()
    );
    println!("  {}          Move a vertex", "move <id> <x> <y>".yellow());
    println!("  {}              Show the graph", "list [--json]".yellow());
    println!("  {}                      Graph counters", "stats".yellow());
    println!();
    println!("{}", "Algorithms".bold().underline());
    println!();
    println!("  {}                Breadth-first visit order", "bfs [start]".yellow());
    println!("  {}                Depth-first visit order", "dfs [start]".yellow());
    println!("  {}           Shortest paths from start", "dijkstra [start]".yellow());
    println!(
        "  {} Replay a run frame by frame",
        "play bfs|dfs|dijkstra [start]".yellow()
    );
    println!();
    println!("  Start defaults to the selected vertex, then to \"V0\".");
    println!();
    println!("  {}                       Show this help", "help".yellow());
    println!("  {}                       Exit", "quit".yellow());
    println!();
}
