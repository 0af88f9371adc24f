//! # Freeform - Graph-Based Neural Networks
//!
//! Freeform is a Rust library for neural networks whose connectivity is an
//! explicit neuron/connection graph rather than a fixed per-layer rule.
//! Neurons and weighted connections live in arenas addressed by stable
//! integer ids, so irregular and even cyclic topologies are representable,
//! and every whole-graph operation is cycle-safe via a per-call visited set.
//!
//! ## Key Features
//!
//! - **Explicit graph model**: Layers, neurons, connections and per-neuron
//!   input summations as plain data, arena-owned and index-addressed
//! - **Flexible construction**: Build layers and connect them explicitly,
//!   use the fluent builder, or convert a fixed layered network verbatim
//! - **Recursive evaluation**: Outputs are computed by walking backward
//!   through each neuron's input summation
//! - **Generic traversal**: One cycle-safe visitor underlies weight
//!   initialization and training-buffer management alike
//! - **Reproducible weights**: Seeded uniform weight reset over [-1, 1]
//!
//! ## Quick Start
//!
//! ```rust
//! use freeform::network::FreeformNetwork;
//! use freeform::activations::Activation;
//! use ndarray::array;
//!
//! let mut network = FreeformNetwork::new();
//! let input = network.create_input_layer(2);
//! let output = network.create_output_layer(1);
//! network.connect_layers(input, output, Activation::Sigmoid, 1.0, false);
//!
//! network.reset_seeded(42);
//! let result = network.compute(array![0.5, -0.5].view());
//! assert_eq!(result.len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions (Tanh, Sigmoid, ReLU, etc.)
//! - [`builders`] - Builder pattern for convenient network construction
//! - [`error`] - Error types and result handling
//! - [`graph`] - The graph data model (layers, neurons, connections)
//! - [`layered`] - Layered-network source trait and conversion input
//! - [`network`] - The freeform network itself

pub mod activations;
pub mod builders;
pub mod error;
pub mod graph;
pub mod layered;
pub mod network;
