//! Fuzz target for keystroke-driven label and weight editing.
//!
//! This target feeds arbitrary keystroke sequences into vertex label and
//! edge weight editing to find:
//! - Panics on unusual characters (control bytes, non-ASCII, surrogates)
//! - Labels escaping the printable ASCII range
//! - Weight text that stops parsing as an integer
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_keystroke_editing
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use graphiz_core::graph::{Color, GraphStore, Position};

/// One simulated keystroke aimed at an editable entity.
#[derive(Arbitrary, Debug)]
enum Keystroke {
    LabelChar(char),
    LabelBackspace,
    WeightChar(char),
    WeightBackspace,
}

fn printable(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

fuzz_target!(|keystrokes: Vec<Keystroke>| {
    let mut store = GraphStore::new();
    let a = store.create_vertex(Position::new(100.0, 100.0), Color::BLACK);
    let b = store.create_vertex(Position::new(300.0, 100.0), Color::BLACK);
    let edge = store
        .create_weighted_edge(a, b, None)
        .expect("fresh endpoints");

    for keystroke in keystrokes {
        match keystroke {
            Keystroke::LabelChar(ch) => {
                let _ = store.type_label_char(a, ch);
            }
            Keystroke::LabelBackspace => {
                let _ = store.backspace_label(a);
            }
            Keystroke::WeightChar(ch) => {
                let _ = store.type_weight_char(edge, ch);
            }
            Keystroke::WeightBackspace => {
                let _ = store.backspace_weight(edge);
            }
        }
    }

    // Labels accept only the printable ASCII range, whatever was typed.
    let label = store.vertex(a).expect("vertex survives editing").label();
    assert!(label.chars().all(printable), "label escaped: {label:?}");

    // Weight text stays an optional minus sign followed by digits.
    let weight = store
        .edge(edge)
        .and_then(|e| e.weight())
        .expect("edge stays weighted");
    let text = weight.text();
    let digits = text.strip_prefix('-').unwrap_or(text);
    assert!(
        digits.chars().all(|ch| ch.is_ascii_digit()),
        "weight text escaped: {text:?}"
    );

    // Reading the value never panics, even for empty or bare-minus text.
    let _ = weight.value();
});
