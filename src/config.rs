//! Configuration types for the LoRA demonstration.
//!
//! All demo input lives in an explicit [`DemoConfig`] value passed into the
//! reporter, never in module-level state, so the arithmetic is unit-testable
//! with arbitrary dimensions.

use serde::{Deserialize, Serialize};

use crate::error::{PrimerError, Result};
use crate::traits::Validate;

/// Shape of one dense or attention projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDimensions {
    /// Module name (e.g., `layers.0.q_proj`).
    pub name: String,

    /// Input dimension.
    pub in_features: usize,

    /// Output dimension.
    pub out_features: usize,
}

impl LayerDimensions {
    /// Create dimensions for a named projection.
    pub fn new(name: impl Into<String>, in_features: usize, out_features: usize) -> Self {
        Self {
            name: name.into(),
            in_features,
            out_features,
        }
    }

    /// The smaller of the two dimensions. Upper bound for a valid LoRA rank.
    #[must_use]
    pub fn min_dim(&self) -> usize {
        self.in_features.min(self.out_features)
    }

    /// Number of parameters in the full weight matrix.
    #[must_use]
    pub fn weight_params(&self) -> u64 {
        self.in_features as u64 * self.out_features as u64
    }
}

impl Validate for LayerDimensions {
    fn validate(&self) -> Result<()> {
        if self.in_features == 0 || self.out_features == 0 {
            return Err(PrimerError::InvalidConfig(format!(
                "layer {} has zero-sized dimension ({} x {})",
                self.name, self.in_features, self.out_features
            )));
        }
        Ok(())
    }
}

/// Configuration for LoRA adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoraConfig {
    /// Rank of the low-rank decomposition.
    pub r: usize,

    /// Scaling factor (typically applied as `alpha / r`).
    pub alpha: f64,

    /// Target modules to apply LoRA to.
    #[serde(default = "default_target_modules")]
    pub target_modules: Vec<String>,
}

fn default_target_modules() -> Vec<String> {
    vec![
        "q_proj".into(),
        "k_proj".into(),
        "v_proj".into(),
        "o_proj".into(),
    ]
}

impl Default for LoraConfig {
    fn default() -> Self {
        Self {
            r: 16,
            alpha: 32.0,
            target_modules: default_target_modules(),
        }
    }
}

impl LoraConfig {
    /// Get the scaling factor `alpha / r`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scaling(&self) -> f64 {
        self.alpha / self.r as f64
    }

    /// Validate this configuration against the layers it will be applied to.
    ///
    /// A rank above a layer's smaller dimension makes the decomposition
    /// full-rank (or worse), defeating the efficiency claim, so it is
    /// rejected rather than silently accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::InvalidConfig`] if the base configuration is
    /// invalid, any layer is degenerate, or `r` exceeds `min(in, out)` of
    /// any layer.
    pub fn validate_for_layers(&self, layers: &[LayerDimensions]) -> Result<()> {
        self.validate()?;
        for layer in layers {
            layer.validate()?;
            if self.r > layer.min_dim() {
                return Err(PrimerError::InvalidConfig(format!(
                    "rank {} exceeds min dimension {} of layer {}",
                    self.r,
                    layer.min_dim(),
                    layer.name
                )));
            }
        }
        Ok(())
    }
}

impl Validate for LoraConfig {
    fn validate(&self) -> Result<()> {
        if self.r == 0 {
            return Err(PrimerError::InvalidConfig("rank must be > 0".into()));
        }
        if self.alpha <= 0.0 {
            return Err(PrimerError::InvalidConfig("alpha must be > 0".into()));
        }
        if self.target_modules.is_empty() {
            return Err(PrimerError::InvalidConfig(
                "target_modules cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level demo configuration: model description, LoRA settings, and the
/// persona/options used for the generated Modelfile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Base model reference understood by the external runtime.
    pub base_model: String,

    /// Projection shapes the adapter is applied to.
    pub layers: Vec<LayerDimensions>,

    /// LoRA hyperparameters.
    pub lora: LoraConfig,

    /// System prompt for the generated Modelfile.
    pub system_prompt: String,

    /// Inference options for the generated Modelfile, in render order.
    #[serde(default)]
    pub modelfile_parameters: Vec<(String, String)>,
}

impl DemoConfig {
    /// The built-in demo configuration: a 1B-class decoder with 32 blocks of
    /// hidden size 2048, adapting the four attention projections per block.
    #[must_use]
    pub fn builtin() -> Self {
        const NUM_BLOCKS: usize = 32;
        const HIDDEN_SIZE: usize = 2048;

        let lora = LoraConfig::default();
        let mut layers = Vec::with_capacity(NUM_BLOCKS * lora.target_modules.len());
        for block in 0..NUM_BLOCKS {
            for module in &lora.target_modules {
                layers.push(LayerDimensions::new(
                    format!("layers.{block}.{module}"),
                    HIDDEN_SIZE,
                    HIDDEN_SIZE,
                ));
            }
        }

        Self {
            base_model: "llama3.2:1b".into(),
            layers,
            lora,
            system_prompt: "You are an AI assistant specialized in explaining machine learning \
                            concepts clearly and concisely. You provide accurate, educational \
                            responses about ML topics."
                .into(),
            modelfile_parameters: vec![
                ("temperature".into(), "0.7".into()),
                ("top_p".into(), "0.9".into()),
                ("top_k".into(), "40".into()),
            ],
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        if self.base_model.is_empty() {
            return Err(PrimerError::InvalidConfig(
                "base_model cannot be empty".into(),
            ));
        }
        self.lora.validate_for_layers(&self.layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lora_config_default() {
        let config = LoraConfig::default();
        assert_eq!(config.r, 16);
        assert!((config.alpha - 32.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lora_config_invalid_rank() {
        let config = LoraConfig {
            r: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lora_config_invalid_alpha() {
        let config = LoraConfig {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lora_config_empty_targets() {
        let config = LoraConfig {
            target_modules: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scaling_factor() {
        let config = LoraConfig {
            r: 8,
            alpha: 16.0,
            ..Default::default()
        };
        assert!((config.scaling() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rank_bound_enforced() {
        let config = LoraConfig {
            r: 64,
            ..Default::default()
        };
        let layers = [LayerDimensions::new("q_proj", 32, 4096)];
        let err = config.validate_for_layers(&layers).unwrap_err();
        assert!(err.to_string().contains("exceeds min dimension"));
    }

    #[test]
    fn test_rank_at_bound_accepted() {
        let config = LoraConfig {
            r: 32,
            ..Default::default()
        };
        let layers = [LayerDimensions::new("q_proj", 32, 4096)];
        assert!(config.validate_for_layers(&layers).is_ok());
    }

    #[test]
    fn test_degenerate_layer_rejected() {
        let config = LoraConfig::default();
        let layers = [LayerDimensions::new("broken", 0, 4096)];
        assert!(config.validate_for_layers(&layers).is_err());
    }

    #[test]
    fn test_builtin_demo_config() {
        let config = DemoConfig::builtin();
        assert!(config.validate().is_ok());
        // 32 blocks x 4 projections
        assert_eq!(config.layers.len(), 128);
        assert_eq!(config.layers[0].name, "layers.0.q_proj");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = DemoConfig::builtin();
        let json = serde_json::to_string(&config).unwrap();
        let loaded: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.base_model, config.base_model);
        assert_eq!(loaded.layers.len(), config.layers.len());
        assert_eq!(loaded.lora.r, config.lora.r);
    }
}
