//! Instruction-tuning demo dataset.
//!
//! Five synthetic Q&A records about core ML concepts. They exist to make the
//! fine-tuning walkthrough concrete; no training ever consumes them.

use serde::{Deserialize, Serialize};

/// One instruction-tuning record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoExample {
    /// Task instruction shown to the model.
    pub instruction: String,

    /// Optional additional input context.
    pub input: String,

    /// Expected model output.
    pub output: String,
}

impl DemoExample {
    fn new(instruction: &str, output: &str) -> Self {
        Self {
            instruction: instruction.into(),
            input: String::new(),
            output: output.into(),
        }
    }
}

/// The built-in demonstration dataset.
#[must_use]
pub fn builtin() -> Vec<DemoExample> {
    vec![
        DemoExample::new(
            "Explain what a neural network is",
            "A neural network is a computational model inspired by biological neural \
             networks. It consists of interconnected nodes (neurons) organized in layers \
             that process information through weighted connections.",
        ),
        DemoExample::new(
            "What is machine learning?",
            "Machine learning is a subset of artificial intelligence that enables computers \
             to learn and improve from experience without being explicitly programmed for \
             every task.",
        ),
        DemoExample::new(
            "Define deep learning",
            "Deep learning is a subset of machine learning that uses neural networks with \
             multiple hidden layers to model and understand complex patterns in data.",
        ),
        DemoExample::new(
            "Explain gradient descent",
            "Gradient descent is an optimization algorithm used to minimize the loss \
             function in machine learning by iteratively adjusting parameters in the \
             direction of steepest descent.",
        ),
        DemoExample::new(
            "What is overfitting?",
            "Overfitting occurs when a machine learning model learns the training data too \
             well, including noise and irrelevant patterns, leading to poor performance on \
             new, unseen data.",
        ),
    ]
}
