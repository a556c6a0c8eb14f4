//! Parameter-efficiency arithmetic and report rendering.
//!
//! This module provides functionality for:
//! - Counting trainable parameters for full fine-tuning vs. LoRA
//! - Deriving the parameter-reduction percentage
//! - Rendering a fixed-format human-readable comparison

// Allow u64 to f64 casts for percentage calculations - this is standard in ML code
#![allow(clippy::cast_precision_loss)]

use crate::config::{LayerDimensions, LoraConfig};
use crate::error::{PrimerError, Result};

/// Count trainable parameters for full fine-tuning of the given layers.
///
/// Sums `in_features * out_features` across all layers. Empty input yields 0.
#[must_use]
pub fn full_finetune_params(layers: &[LayerDimensions]) -> u64 {
    layers.iter().map(LayerDimensions::weight_params).sum()
}

/// Count trainable parameters for LoRA adaptation of the given layers.
///
/// Each layer contributes `r * (in_features + out_features)`, the combined
/// size of the decomposition matrices A (`in x r`) and B (`r x out`).
///
/// # Errors
///
/// Returns [`PrimerError::InvalidConfig`] if `r == 0` or `r` exceeds the
/// smaller dimension of any layer.
pub fn lora_params(layers: &[LayerDimensions], r: usize) -> Result<u64> {
    if r == 0 {
        return Err(PrimerError::InvalidConfig("rank must be > 0".into()));
    }
    let mut total = 0u64;
    for layer in layers {
        if r > layer.min_dim() {
            return Err(PrimerError::InvalidConfig(format!(
                "rank {} exceeds min dimension {} of layer {}",
                r,
                layer.min_dim(),
                layer.name
            )));
        }
        total += r as u64 * (layer.in_features as u64 + layer.out_features as u64);
    }
    Ok(total)
}

/// Percentage of trainable parameters saved by LoRA: `(1 - lora/full) * 100`.
///
/// Negative when the adapter is larger than the base weights it replaces.
///
/// # Errors
///
/// Returns [`PrimerError::InvalidConfig`] when `full == 0` (degenerate input).
pub fn reduction_percent(full: u64, lora: u64) -> Result<f64> {
    if full == 0 {
        return Err(PrimerError::InvalidConfig(
            "full fine-tune parameter count is zero".into(),
        ));
    }
    Ok((1.0 - lora as f64 / full as f64) * 100.0)
}

/// Deterministic comparison of full fine-tuning against LoRA adaptation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterReport {
    /// Trainable parameters under full fine-tuning.
    pub full_finetune_params: u64,

    /// Trainable parameters under LoRA.
    pub lora_params: u64,

    /// Percentage reduction in trainable parameters.
    pub reduction_percent: f64,
}

impl ParameterReport {
    /// Compute the report for the given layers and LoRA configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::InvalidConfig`] if the configuration is invalid
    /// for the layers or the layer set is degenerate (zero full-rank count).
    pub fn compute(layers: &[LayerDimensions], config: &LoraConfig) -> Result<Self> {
        config.validate_for_layers(layers)?;

        let full = full_finetune_params(layers);
        let lora = lora_params(layers, config.r)?;
        let reduction = reduction_percent(full, lora)?;

        Ok(Self {
            full_finetune_params: full,
            lora_params: lora,
            reduction_percent: reduction,
        })
    }

    /// Format as a fixed-order human-readable comparison.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Parameter Efficiency Comparison:\n  \
             Full fine-tune parameters: {} ({})\n  \
             LoRA adapter parameters:   {} ({})\n  \
             Reduction:                 {:.1}%",
            group_thousands(self.full_finetune_params),
            format_param_count(self.full_finetune_params),
            group_thousands(self.lora_params),
            format_param_count(self.lora_params),
            self.reduction_percent
        )
    }
}

/// Format a parameter count with appropriate units.
///
/// # Examples
///
/// Returns human-readable strings like `"12.35K"`, `"1.50M"`, `"2.10B"`.
#[must_use]
pub fn format_param_count(count: u64) -> String {
    if count >= 1_000_000_000 {
        format!("{:.2}B", count as f64 / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.2}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.2}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Group a count into thousands with comma separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
