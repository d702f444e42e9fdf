//! Reactive Example - A live session with debounced rebuilds
//!
//! This example demonstrates the playground session:
//! - The initial build that fills both panes
//! - Editor buffers feeding the fragment store
//! - A burst of edits coalescing into one rebuild
//! - Toggling autorun
//!
//! Run with: cargo run --example reactive

use std::thread;
use std::time::Duration;

use spark_pen::{EditorBuffer, FragmentKind, Pane, Playground, ScratchBuffer, set_fragment};

fn main() {
    println!("=== spark-pen Reactive Example ===\n");

    let mut playground = Playground::new();
    println!("Initial build count: {}", playground.build_count());
    println!(
        "Desktop pane shows {} bytes\n",
        playground.document(Pane::Desktop).len()
    );

    // Attach an editor buffer for the style fragment
    let style_editor = ScratchBuffer::new("");
    playground.attach_editor(FragmentKind::Style, Box::new(style_editor.clone()));
    println!("Style editor seeded with {} bytes", style_editor.value().len());

    // A quick burst of edits - autorun coalesces them into one build
    println!("\n--- Typing a burst of edits ---\n");
    let mut typing = style_editor.clone();
    typing.set_value("h1 { color: tomato; }");
    typing.set_value("h1 { color: goldenrod; }");
    typing.set_value("h1 { color: steelblue; }");
    set_fragment(FragmentKind::Script, "console.log('reactive!');");

    // Drive the session until the quiet period elapses
    loop {
        if playground.tick() {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    println!("Build count after burst: {}", playground.build_count());
    println!(
        "Pane picked up the last edit: {}",
        playground.document(Pane::Mobile).contains("steelblue")
    );

    // With autorun off, edits pile up silently
    println!("\n--- Autorun off ---\n");
    playground.set_autorun(false);
    typing.set_value("h1 { color: silver; }");
    thread::sleep(Duration::from_millis(700));
    playground.tick();
    println!("Build count unchanged: {}", playground.build_count());

    // Toggling back on rebuilds immediately
    playground.set_autorun(true);
    println!("Build count after re-enable: {}", playground.build_count());
    println!(
        "Pane shows the silver rule: {}",
        playground.document(Pane::Mobile).contains("silver")
    );

    println!("\n=== Debounced reactivity works! ===");
}
