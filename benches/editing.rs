//! Benchmarks for the editing hot paths
//!
//! Run with: cargo bench editing

use vtmledit::editable::{lineize, EditConstraints, EditableState, MonospaceMeasure, TextDelta};
use vtmledit::syntax::{auto_complete, tokenize_lines};

fn main() {
    divan::main();
}

fn markup(paragraphs: usize) -> String {
    "<p><font color=\"#FFAA00\">Press <hotkey name=\"Jump\" /> to leap</font> over the gap.\n"
        .repeat(paragraphs)
}

fn wide_state(paragraphs: usize) -> EditableState {
    let constraints = EditConstraints::editor().with_box_width(320.0);
    let mut state = EditableState::with_text(&markup(paragraphs), constraints, MonospaceMeasure::default());
    state.focus_gained();
    state
}

#[divan::bench(args = [10, 100, 1000])]
fn lineize_wrapped(bencher: divan::Bencher, paragraphs: usize) {
    let text = markup(paragraphs);
    let measure = MonospaceMeasure::default();
    bencher.bench(|| lineize(divan::black_box(&text), &measure, Some(320.0)));
}

#[divan::bench(args = [10, 100, 1000])]
fn tokenize_display_lines(bencher: divan::Bencher, paragraphs: usize) {
    let lines = lineize(&markup(paragraphs), &MonospaceMeasure::default(), Some(320.0));
    bencher.bench(|| tokenize_lines(divan::black_box(&lines)));
}

#[divan::bench(args = [10, 100])]
fn type_character(bencher: divan::Bencher, paragraphs: usize) {
    bencher
        .with_inputs(|| wide_state(paragraphs))
        .bench_local_values(|mut state| {
            state.insert_char('x');
            state
        });
}

#[divan::bench(args = [10, 100])]
fn undo_after_typing(bencher: divan::Bencher, paragraphs: usize) {
    bencher
        .with_inputs(|| {
            let mut state = wide_state(paragraphs);
            state.insert_char('x');
            state
        })
        .bench_local_values(|mut state| {
            state.undo();
            state
        });
}

#[divan::bench(args = [100, 1000])]
fn compute_delta(bencher: divan::Bencher, paragraphs: usize) {
    let old = markup(paragraphs);
    let mid = old.len() / 2;
    let new = format!("{}<b>{}", &old[..mid], &old[mid..]);
    bencher.bench(|| TextDelta::compute(divan::black_box(&old), divan::black_box(&new)));
}

#[divan::bench(args = [10, 100, 1000])]
fn complete_tags(bencher: divan::Bencher, paragraphs: usize) {
    let text = markup(paragraphs);
    bencher.bench(|| auto_complete(divan::black_box(&text)));
}
