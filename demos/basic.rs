//! Basic Example - Composing fragments by hand
//!
//! This example demonstrates the composition core of spark-pen:
//! - Injecting style and script into a full page
//! - Head synthesis when the markup has none
//! - Bare fragments that still get their styling
//!
//! Run with: cargo run --example basic

use spark_pen::{ISOLATION_RULES, compose};

fn main() {
    println!("=== spark-pen Basic Example ===\n");

    // A complete page: style lands before </head>, script before </body>
    let full_page = "<!DOCTYPE html>\n<html>\n<head>\n  <title>Demo</title>\n</head>\n<body>\n  <p>Hi there</p>\n</body>\n</html>";
    let doc = compose(full_page, "p { color: rebeccapurple; }", "console.log('ready');");

    println!("--- Full page ---\n");
    println!("{doc}\n");

    // No head at all: one is synthesized right after the html open tag
    let headless = "<html lang=\"en\"><body><p>no head here</p></body></html>";
    let doc = compose(headless, "p { font-weight: bold; }", "");

    println!("--- Headless page (head synthesized) ---\n");
    println!("{doc}\n");

    // A bare fragment: head prepended, script appended
    let doc = compose("<h1>Hi</h1>", "h1 { color: red; }", "console.log(1);");

    println!("--- Bare fragment ---\n");
    println!("{doc}\n");

    // The isolation rules ride along exactly once in every document
    println!(
        "Isolation rules present once: {}",
        doc.match_indices(ISOLATION_RULES).count() == 1
    );

    println!("\n=== Composition is a pure function! ===");
}
