use serde::{Serialize, Deserialize};

use super::NeuronId;

/// A directed, weighted edge between two neurons.
///
/// Connections are owned by the network's connection arena; the source
/// neuron's outgoing list and the target's input summation both refer to a
/// connection by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub source: NeuronId,
    pub target: NeuronId,
    pub weight: f64,
    /// Marks a recurrent edge. Stored for trainers and future evaluation
    /// modes; forward evaluation does not consult it.
    pub recurrent: bool,
    temp_training: Vec<f64>,
}

impl Connection {
    /// Create a connection with a default weight of zero. Weights are
    /// assigned later by a reset or a trainer.
    pub fn new(source: NeuronId, target: NeuronId) -> Self {
        Connection {
            source,
            target,
            weight: 0.0,
            recurrent: false,
            temp_training: Vec::new(),
        }
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
