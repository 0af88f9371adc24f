//! # Graph Model Module
//!
//! The data structures behind a freeform network: layers, neurons,
//! connections and per-neuron input summations.
//!
//! Neurons and connections live in arenas owned by
//! [`crate::network::FreeformNetwork`] and are addressed by stable integer
//! ids. A [`Layer`] is an ordered list of neuron ids; a neuron's outgoing
//! list and a summation's incoming list hold connection ids, so neither
//! endpoint owns the connection itself.

pub mod connection;
pub mod layer;
pub mod neuron;
pub mod summation;

pub use connection::Connection;
pub use layer::Layer;
pub use neuron::Neuron;
pub use summation::InputSummation;

/// Index of a neuron in the network's neuron arena.
pub type NeuronId = usize;

/// Index of a connection in the network's connection arena.
pub type ConnectionId = usize;

/// Index of a layer in the network's layer table.
pub type LayerId = usize;
