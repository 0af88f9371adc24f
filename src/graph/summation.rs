use serde::{Serialize, Deserialize};

use crate::activations::Activation;
use super::ConnectionId;

/// Aggregates a neuron's incoming connections.
///
/// Owned exclusively by its neuron. The network combines weight times
/// source activation over the incoming list, adds the bias term, and runs
/// the result through the activation function to produce the neuron's new
/// activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSummation {
    incoming: Vec<ConnectionId>,
    activation: Activation,
    bias: f64,
}

impl InputSummation {
    pub fn new(activation: Activation) -> Self {
        InputSummation {
            incoming: Vec::new(),
            activation,
            bias: 0.0,
        }
    }

    /// Register an incoming connection.
    pub fn add(&mut self, connection: ConnectionId) {
        self.incoming.push(connection);
    }

    /// Incoming connections, in registration order.
    pub fn incoming(&self) -> &[ConnectionId] {
        &self.incoming
    }

    pub fn activation_function(&self) -> Activation {
        self.activation
    }

    /// Additive bias term applied before the activation function.
    /// Zero by default; a bias neuron wired as a regular input is the more
    /// common way to supply an offset.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}
