//! # Activation Functions Module
//!
//! Scalar activation functions applied by an input summation after combining
//! its weighted inputs. Freeform neurons carry a single activation value, so
//! every function here maps one `f64` to one `f64`.
//!
//! ## Available Activations
//!
//! - **Linear**: Identity function - No transformation
//! - **ReLU** (Rectified Linear Unit): `max(0, x)`
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Tanh**: Hyperbolic tangent - Outputs between -1 and 1
//! - **LeakyReLU**: ReLU with small negative slope - Prevents dead neurons
//!
//! Tanh is the default used by [`crate::network::FreeformNetwork::connect_layers_default`].

pub mod functions;

pub use functions::Activation;
