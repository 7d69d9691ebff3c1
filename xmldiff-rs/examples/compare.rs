//! Example: Compare two XML documents and print every output format
//!
//! Usage: cargo run --example compare <source.xml> <result.xml>

use std::env;

use xmldiff::{
    compare_documents, parse_file, HtmlRenderer, Renderer, TextRenderer, TransformRenderer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <source.xml> <result.xml>", args[0]);
        std::process::exit(1);
    }

    let source = parse_file(&args[1])?;
    let result = parse_file(&args[2])?;

    let diff = compare_documents(&source, &result)?;
    if !diff.is_changed() {
        eprintln!("Documents are identical.");
        return Ok(());
    }

    println!("{}", TextRenderer::new().render(&diff)?);
    println!("{}", HtmlRenderer::new().render(&diff)?);

    // The transform fails when the root needs both an attribute set and removal
    match TransformRenderer::new().render(&diff) {
        Ok(xdt) => println!("{}", xdt),
        Err(e) => eprintln!("No transform: {}", e),
    }

    Ok(())
}
