//! Basic parameter-efficiency report example.
//!
//! This example demonstrates:
//! - Describing a transformer layer stack
//! - Creating a LoRA configuration
//! - Computing the full-vs-LoRA parameter comparison
//! - Inspecting the breakdown for a single projection

use anyhow::Result;
use lora_primer::{full_finetune_params, LayerDimensions, LoraConfig, ParameterReport};

fn main() -> Result<()> {
    println!("=== Basic Parameter Efficiency Example ===\n");

    // Two llama-7B-style projections
    let layers = [
        LayerDimensions::new("q_proj", 4096, 4096),
        LayerDimensions::new("up_proj", 4096, 11008),
    ];

    // Create LoRA configuration
    // - r: rank of low-rank decomposition (smaller = fewer parameters)
    // - alpha: scaling factor (alpha/r ratio determines adaptation strength)
    let config = LoraConfig {
        r: 8,
        alpha: 16.0,
        ..Default::default()
    };

    println!("LoRA Configuration:");
    println!("  Rank (r): {}", config.r);
    println!("  Alpha: {}", config.alpha);
    println!("  Scaling factor: {}\n", config.scaling());

    // Per-projection breakdown for the first layer
    let first = &layers[0];
    println!("Layer Information ({}):", first.name);
    println!("  Input features: {}", first.in_features);
    println!("  Output features: {}", first.out_features);
    println!(
        "  Parameter breakdown: A({} x {}) + B({} x {}) = {} + {} = {}",
        first.in_features,
        config.r,
        config.r,
        first.out_features,
        first.in_features * config.r,
        config.r * first.out_features,
        config.r * (first.in_features + first.out_features),
    );
    println!(
        "  Full weight matrix: {} parameters\n",
        full_finetune_params(std::slice::from_ref(first))
    );

    // Full comparison across the stack
    let report = ParameterReport::compute(&layers, &config)?;
    println!("{}", report.render());

    Ok(())
}
