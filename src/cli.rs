//! CLI surface: argument parsing, output gating, and command handlers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DemoConfig;
use crate::error::Result;
use crate::modelfile::Modelfile;
use crate::report::ParameterReport;
use crate::traits::Validate;
use crate::{dataset, io, walkthrough};

/// Log level for CLI output.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Normal output level.
    Normal,
    /// Verbose output with additional details.
    Verbose,
}

/// Log a message if the current level permits it.
fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// lora-primer: LoRA parameter-efficiency demonstrator
#[derive(Parser, Debug, Clone)]
#[command(name = "lora-primer")]
#[command(version)]
#[command(
    about = "Educational LoRA demo: parameter-efficiency reports and Ollama Modelfile generation"
)]
pub struct Cli {
    /// Subcommand to execute (defaults to the full demo)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a demo configuration JSON (defaults to the built-in demo)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the complete demonstration and write generated artifacts
    Demo(DemoArgs),

    /// Print the parameter-efficiency report only
    Report(ReportArgs),

    /// Render the Ollama Modelfile
    Modelfile(ModelfileArgs),
}

/// Arguments for the demo command
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Directory for generated artifacts
    #[arg(short, long, default_value = "demo-output")]
    pub out_dir: PathBuf,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Override the configured LoRA rank
    #[arg(short, long)]
    pub rank: Option<usize>,
}

/// Arguments for the modelfile command
#[derive(Parser, Debug, Clone)]
pub struct ModelfileArgs {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the parsed CLI command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an artifact cannot be
/// written; the caller maps this to a non-zero exit code.
pub fn run_command(cli: Cli) -> Result<()> {
    let level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    let config: DemoConfig = match &cli.config {
        Some(path) => io::load_config(path)?,
        None => DemoConfig::builtin(),
    };
    config.validate()?;

    match cli.command {
        None => run_demo(
            &config,
            &DemoArgs {
                out_dir: PathBuf::from("demo-output"),
            },
            level,
        ),
        Some(Command::Demo(args)) => run_demo(&config, &args, level),
        Some(Command::Report(args)) => run_report(&config, &args, level),
        Some(Command::Modelfile(args)) => run_modelfile(&config, &args, level),
    }
}

/// Build the Modelfile described by a demo configuration.
///
/// # Errors
///
/// Returns an error if a recognized inference option carries an invalid value.
pub fn build_modelfile(config: &DemoConfig) -> Result<Modelfile> {
    let mut modelfile = Modelfile::new(&config.base_model, &config.system_prompt);
    for (name, value) in &config.modelfile_parameters {
        modelfile = modelfile.with_parameter(name, value)?;
    }
    Ok(modelfile.with_llama3_template())
}

fn run_demo(config: &DemoConfig, args: &DemoArgs, level: LogLevel) -> Result<()> {
    let banner = "=".repeat(60);

    // Validate and compute everything before the first line of output, so a
    // bad configuration never produces a partial report.
    let report = ParameterReport::compute(&config.layers, &config.lora)?;
    let modelfile = build_modelfile(config)?;

    log(level, LogLevel::Normal, &banner);
    log(
        level,
        LogLevel::Normal,
        "LoRA (Low-Rank Adaptation) Fine-tuning Demo",
    );
    log(level, LogLevel::Normal, &banner);

    log(level, LogLevel::Normal, "\n1. CONCEPTUAL EXPLANATION:");
    log(level, LogLevel::Normal, walkthrough::concept_explanation());

    log(level, LogLevel::Normal, "\n2. PARAMETER EFFICIENCY:");
    log(level, LogLevel::Normal, &report.render());

    log(level, LogLevel::Normal, "\n3. SIMULATED TRAINING PROCESS:");
    log(
        level,
        LogLevel::Normal,
        &walkthrough::training_transcript(&config.base_model, config.lora.r, config.lora.alpha),
    );

    log(level, LogLevel::Normal, "\n4. GENERATED MODELFILE:");
    log(level, LogLevel::Normal, &modelfile.render());

    let modelfile_path = args.out_dir.join("Modelfile");
    io::write_text(&modelfile_path, &modelfile.render())?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Wrote {}", modelfile_path.display()),
    );

    let dataset_path = args.out_dir.join("demo_dataset.json");
    io::save_dataset(&dataset::builtin(), &dataset_path)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Wrote {}", dataset_path.display()),
    );

    log(
        level,
        LogLevel::Normal,
        &format!(
            "\n5. ARTIFACTS:\nModelfile and demo dataset written to {}",
            args.out_dir.display()
        ),
    );

    log(level, LogLevel::Normal, &format!("\n{banner}"));
    log(level, LogLevel::Normal, "Demo completed!");
    log(level, LogLevel::Normal, &banner);

    Ok(())
}

fn run_report(config: &DemoConfig, args: &ReportArgs, level: LogLevel) -> Result<()> {
    let mut lora = config.lora.clone();
    if let Some(rank) = args.rank {
        lora.r = rank;
    }

    let report = ParameterReport::compute(&config.layers, &lora)?;
    log(
        level,
        LogLevel::Verbose,
        &format!("{} layers, rank {}", config.layers.len(), lora.r),
    );
    log(level, LogLevel::Normal, &report.render());
    Ok(())
}

fn run_modelfile(config: &DemoConfig, args: &ModelfileArgs, level: LogLevel) -> Result<()> {
    let modelfile = build_modelfile(config)?;
    let text = modelfile.render();

    match &args.output {
        Some(path) => {
            io::write_text(path, &text)?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote {}", path.display()),
            );
        }
        None => log(level, LogLevel::Normal, &text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_modelfile_from_builtin() {
        let config = DemoConfig::builtin();
        let modelfile = build_modelfile(&config).unwrap();
        assert_eq!(modelfile.base_model(), "llama3.2:1b");
        assert_eq!(modelfile.parameters().len(), 3);
    }

    #[test]
    fn test_build_modelfile_rejects_bad_option() {
        let mut config = DemoConfig::builtin();
        config
            .modelfile_parameters
            .push(("temperature".into(), "3.5".into()));
        assert!(build_modelfile(&config).is_err());
    }

    #[test]
    fn test_cli_parses_no_args() {
        use clap::Parser as _;
        let cli = Cli::parse_from(["lora-primer"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parses_report_rank() {
        use clap::Parser as _;
        let cli = Cli::parse_from(["lora-primer", "report", "--rank", "8"]);
        match cli.command {
            Some(Command::Report(args)) => assert_eq!(args.rank, Some(8)),
            _ => panic!("expected report command"),
        }
    }
}
