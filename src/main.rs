//! lora-primer CLI
//!
//! Educational LoRA demonstration entry point.
//!
//! # Usage
//!
//! ```bash
//! # Run the full demo
//! lora-primer
//!
//! # Parameter-efficiency report only, with a rank override
//! lora-primer report --rank 8
//!
//! # Render the Modelfile to a file
//! lora-primer modelfile --output Modelfile
//!
//! # Use a custom demo configuration
//! lora-primer --config my_demo.json
//! ```

use clap::Parser;
use lora_primer::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
