//! # lora-primer
//!
//! Educational LoRA (Low-Rank Adaptation) demonstration library.
//!
//! This crate computes and reports the trainable-parameter savings of LoRA
//! fine-tuning versus full fine-tuning for a described stack of transformer
//! projections, and renders the Ollama Modelfile that would deploy the
//! resulting adapter. Everything is deterministic arithmetic and text
//! rendering over explicit configuration values: no tensors, no gradients,
//! and no model-runtime management.
//!
//! ## Quick Start
//!
//! ```rust
//! use lora_primer::{LayerDimensions, LoraConfig, ParameterReport};
//!
//! let layers = [
//!     LayerDimensions::new("q_proj", 4096, 4096),
//!     LayerDimensions::new("up_proj", 4096, 11008),
//! ];
//! let config = LoraConfig { r: 8, alpha: 16.0, ..Default::default() };
//!
//! let report = ParameterReport::compute(&layers, &config)?;
//! assert_eq!(report.lora_params, 186_368);
//! println!("{}", report.render());
//! # Ok::<(), lora_primer::PrimerError>(())
//! ```
//!
//! ## Architecture
//!
//! Configuration types implement the [`Validate`] trait; every entry point
//! validates before rendering, so a run either produces its full output or
//! fails with [`PrimerError::InvalidConfig`] before printing anything.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod modelfile;
pub mod report;
pub mod traits;
pub mod walkthrough;

pub use config::{DemoConfig, LayerDimensions, LoraConfig};
pub use dataset::DemoExample;
pub use error::{PrimerError, Result};
pub use io::{load_config, save_config, save_dataset, write_text};
pub use modelfile::{InferenceOption, Modelfile};
pub use report::{
    format_param_count, full_finetune_params, lora_params, reduction_percent, ParameterReport,
};
pub use traits::Validate;
