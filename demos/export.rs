//! Export Example - From fragments to files on disk
//!
//! This example demonstrates both export modes:
//! - Individual files, every fragment verbatim
//! - The zip archive with its rebuilt root document
//!
//! Run with: cargo run --example export

use std::fs;
use std::io::Cursor;

use spark_pen::{DirectorySaver, Playground, ZipPackager, export_archive_files, snapshot};

fn main() {
    let playground = Playground::new();

    println!("=== spark-pen Export Example ===\n");

    let dir = tempfile::tempdir().expect("temp dir");
    let saver = DirectorySaver::new(dir.path());

    // Individual files: what you typed is what you get
    println!("--- Individual files ---\n");
    playground.save_files(&saver).expect("save files");
    for name in ["index.html", "style.css", "script.js"] {
        let len = fs::metadata(dir.path().join(name)).expect("saved file").len();
        println!("  {name}: {len} bytes");
    }

    // Archive: root document rebuilt around the markup's body content
    println!("\n--- Archive root document ---\n");
    let files = export_archive_files(&snapshot());
    let root = files.get("index.html").expect("root document");
    println!("{}", root.content);

    println!("\n--- Packaged zip ---\n");
    playground
        .save_archive(&ZipPackager, &saver)
        .expect("save archive");

    let bytes = fs::read(dir.path().join("project.zip")).expect("read zip");
    println!("  project.zip: {} bytes", bytes.len());

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("open zip");
    for i in 0..archive.len() {
        let entry = archive.by_index(i).expect("zip entry");
        println!("    {} ({} bytes)", entry.name(), entry.size());
    }

    println!("\n=== Exports open with no tooling at all! ===");
}
