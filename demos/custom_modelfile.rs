//! Custom Modelfile generation example.
//!
//! This example demonstrates:
//! - Building a Modelfile with a custom persona
//! - Setting recognized inference options (range-validated)
//! - Passing an unrecognized option through verbatim
//! - Writing the rendered artifact to a temporary directory

use anyhow::Result;
use lora_primer::{write_text, Modelfile};
use tempfile::TempDir;

fn main() -> Result<()> {
    println!("=== Custom Modelfile Example ===\n");

    let modelfile = Modelfile::new(
        "llama3.2:1b",
        "You are a helpful tutor. Explain each answer step by step.",
    )
    .with_parameter("temperature", "0.7")?
    .with_parameter("top_p", "0.9")?
    .with_parameter("num_ctx", "2048")?
    // Not in the recognized set: passed through as-is for the runtime to interpret.
    .with_parameter("mirostat", "2")?
    .with_llama3_template();

    let text = modelfile.render();
    println!("{text}");

    // Write the artifact the way the demo command does
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("Modelfile");
    write_text(&path, &text)?;
    println!("Wrote {}", path.display());

    // Out-of-range values for recognized options are rejected up front
    let bad = Modelfile::new("llama3.2:1b", "persona").with_parameter("top_p", "1.5");
    println!("\ntop_p = 1.5 -> {:?}", bad.err().map(|e| e.to_string()));

    Ok(())
}
