use serde::{Serialize, Deserialize};

use super::summation::InputSummation;
use super::ConnectionId;

/// A single neuron in a freeform network.
///
/// A neuron without an input summation is a leaf: either an input-layer
/// neuron whose activation is set from the input vector, or a bias neuron
/// holding a constant activation. The outgoing list is a set of non-owning
/// references into the network's connection arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    /// Current activation value.
    pub activation: f64,
    summation: Option<InputSummation>,
    outputs: Vec<ConnectionId>,
    temp_training: Vec<f64>,
}

impl Neuron {
    /// Create a neuron with the given input summation, or a leaf if `None`.
    pub fn new(summation: Option<InputSummation>) -> Self {
        Neuron {
            activation: 0.0,
            summation,
            outputs: Vec::new(),
            temp_training: Vec::new(),
        }
    }

    /// The input summation, if this neuron has incoming connections.
    pub fn summation(&self) -> Option<&InputSummation> {
        self.summation.as_ref()
    }

    pub fn summation_mut(&mut self) -> Option<&mut InputSummation> {
        self.summation.as_mut()
    }

    /// Replace the input summation. Used when a layer is wired as a
    /// connection target.
    pub fn set_summation(&mut self, summation: InputSummation) {
        self.summation = Some(summation);
    }

    /// Register an outgoing connection.
    pub fn add_output(&mut self, connection: ConnectionId) {
        self.outputs.push(connection);
    }

    /// Outgoing connections, in registration order.
    pub fn outputs(&self) -> &[ConnectionId] {
        &self.outputs
    }

    /// Allocate a zeroed temp-training buffer of the given size, replacing
    /// any previous buffer.
    pub fn allocate_temp_training(&mut self, size: usize) {
        self.temp_training = vec![0.0; size];
    }

    /// Release the temp-training buffer.
    pub fn clear_temp_training(&mut self) {
        self.temp_training = Vec::new();
    }

    /// The temp-training buffer; empty outside a training session.
    pub fn temp_training(&self) -> &[f64] {
        &self.temp_training
    }

    pub fn set_temp_training(&mut self, index: usize, value: f64) {
        self.temp_training[index] = value;
    }

    pub fn add_temp_training(&mut self, index: usize, value: f64) {
        self.temp_training[index] += value;
    }
}
