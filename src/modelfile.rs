//! Ollama Modelfile generation.
//!
//! A Modelfile is the textual deployment artifact consumed by the external
//! model runtime: a base-model reference, optional `PARAMETER` directives,
//! a `SYSTEM` persona block, and an optional `TEMPLATE` block. Rendering is
//! a pure function of the configuration; the runtime's lifecycle and health
//! are out of scope here.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{PrimerError, Result};

/// Inference options recognized by the runtime and range-validated here.
///
/// Option names outside this set are passed through verbatim; the runtime
/// itself is forward-compatible with unknown directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceOption {
    /// Sampling randomness, `0.0..=2.0`.
    Temperature,
    /// Nucleus-sampling cutoff, `0.0..=1.0`.
    TopP,
    /// Top-k sampling cutoff, positive integer.
    TopK,
    /// Context window size, positive integer.
    NumCtx,
}

impl InferenceOption {
    /// All recognized options.
    pub const ALL: [Self; 4] = [Self::Temperature, Self::TopP, Self::TopK, Self::NumCtx];

    /// Directive name as it appears in the Modelfile.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::TopP => "top_p",
            Self::TopK => "top_k",
            Self::NumCtx => "num_ctx",
        }
    }

    /// Look up a recognized option by directive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.name() == name)
    }

    /// Check a raw directive value against this option's expected type and range.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::InvalidConfig`] if the value does not parse or
    /// is out of range.
    pub fn check_value(self, value: &str) -> Result<()> {
        let invalid = |msg: &str| {
            PrimerError::InvalidConfig(format!("{} = {value}: {msg}", self.name()))
        };
        match self {
            Self::Temperature => {
                let v: f64 = value.parse().map_err(|_| invalid("expected a float"))?;
                if !(0.0..=2.0).contains(&v) {
                    return Err(invalid("must be between 0 and 2"));
                }
            }
            Self::TopP => {
                let v: f64 = value.parse().map_err(|_| invalid("expected a float"))?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid("must be between 0 and 1"));
                }
            }
            Self::TopK | Self::NumCtx => {
                let v: u64 = value
                    .parse()
                    .map_err(|_| invalid("expected a positive integer"))?;
                if v == 0 {
                    return Err(invalid("must be > 0"));
                }
            }
        }
        Ok(())
    }
}

/// Chat template for llama3-style base models.
const LLAMA3_TEMPLATE: &str = r#"{{ if .System }}<|start_header_id|>system<|end_header_id|>

{{ .System }}<|eot_id|>{{ end }}{{ if .Prompt }}<|start_header_id|>user<|end_header_id|>

{{ .Prompt }}<|eot_id|>{{ end }}<|start_header_id|>assistant<|end_header_id|>

"#;

/// An Ollama Modelfile: base model, system prompt, and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modelfile {
    base_model: String,
    system_prompt: String,
    parameters: Vec<(String, String)>,
    template: Option<String>,
}

impl Modelfile {
    /// Create a Modelfile for the given base model and persona.
    pub fn new(base_model: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            base_model: base_model.into(),
            system_prompt: system_prompt.into(),
            parameters: Vec::new(),
            template: None,
        }
    }

    /// Append a `PARAMETER` directive.
    ///
    /// Recognized option names are validated against their expected type and
    /// range; unrecognized names are passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::InvalidConfig`] if a recognized option carries
    /// an out-of-range or malformed value.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        if let Some(opt) = InferenceOption::from_name(&name) {
            opt.check_value(&value)?;
        }
        self.parameters.push((name, value));
        Ok(self)
    }

    /// Attach the llama3-style chat template block.
    #[must_use]
    pub fn with_llama3_template(mut self) -> Self {
        self.template = Some(LLAMA3_TEMPLATE.to_string());
        self
    }

    /// Base model reference.
    #[must_use]
    pub fn base_model(&self) -> &str {
        &self.base_model
    }

    /// Parameter directives in render order.
    #[must_use]
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Render the Modelfile text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Ollama Modelfile generated by lora-primer");
        let _ = writeln!(out, "FROM {}", self.base_model);

        if !self.parameters.is_empty() {
            let _ = writeln!(out);
            for (name, value) in &self.parameters {
                let _ = writeln!(out, "PARAMETER {name} {value}");
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "SYSTEM \"\"\"{}\"\"\"", self.system_prompt);

        if let Some(template) = &self.template {
            let _ = writeln!(out);
            let _ = writeln!(out, "TEMPLATE \"\"\"{template}\"\"\"");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_block() {
        let modelfile = Modelfile::new("llama3.2:1b", "You are a helpful tutor.")
            .with_parameter("temperature", "0.7")
            .unwrap()
            .with_parameter("num_ctx", "2048")
            .unwrap();

        let text = modelfile.render();
        assert!(text.contains("FROM llama3.2:1b"));
        assert!(text.contains("SYSTEM \"\"\"You are a helpful tutor.\"\"\""));

        // Parameter directives appear in insertion order.
        let temp_pos = text.find("PARAMETER temperature 0.7").unwrap();
        let ctx_pos = text.find("PARAMETER num_ctx 2048").unwrap();
        assert!(temp_pos < ctx_pos);
    }

    #[test]
    fn test_render_idempotent() {
        let modelfile = Modelfile::new("llama3.2:1b", "persona")
            .with_parameter("top_p", "0.9")
            .unwrap();
        assert_eq!(modelfile.render(), modelfile.render());
    }

    #[test]
    fn test_unknown_parameter_passthrough() {
        let modelfile = Modelfile::new("llama3.2:1b", "persona")
            .with_parameter("mirostat", "2")
            .unwrap();
        assert!(modelfile.render().contains("PARAMETER mirostat 2"));
    }

    #[test]
    fn test_recognized_option_range_checked() {
        let result = Modelfile::new("llama3.2:1b", "persona").with_parameter("top_p", "1.5");
        assert!(result.is_err());

        let result = Modelfile::new("llama3.2:1b", "persona").with_parameter("num_ctx", "0");
        assert!(result.is_err());

        let result =
            Modelfile::new("llama3.2:1b", "persona").with_parameter("temperature", "warm");
        assert!(result.is_err());
    }

    #[test]
    fn test_option_name_lookup() {
        assert_eq!(
            InferenceOption::from_name("num_ctx"),
            Some(InferenceOption::NumCtx)
        );
        assert_eq!(InferenceOption::from_name("mirostat"), None);
    }

    #[test]
    fn test_template_block() {
        let modelfile = Modelfile::new("llama3.2:1b", "persona").with_llama3_template();
        let text = modelfile.render();
        assert!(text.contains("TEMPLATE \"\"\""));
        assert!(text.contains("<|start_header_id|>assistant<|end_header_id|>"));
    }
}
