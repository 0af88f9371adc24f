use serde::{Serialize, Deserialize};

use super::NeuronId;

/// An ordered group of neurons inside a freeform network.
///
/// Layers are a construction convenience: connectivity lives entirely on
/// the neurons and connections. A layer holds at most one bias neuron, and
/// the bias neuron is always the last element, so it never disturbs the
/// positional indexing of the regular neurons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layer {
    neurons: Vec<NeuronId>,
    has_bias: bool,
}

impl Layer {
    pub fn new() -> Self {
        Layer {
            neurons: Vec::new(),
            has_bias: false,
        }
    }

    /// Append a regular neuron. Must not be called after a bias neuron has
    /// been appended.
    pub fn push(&mut self, neuron: NeuronId) {
        debug_assert!(!self.has_bias, "regular neurons must precede the bias neuron");
        self.neurons.push(neuron);
    }

    /// Append the layer's bias neuron as the last element.
    pub fn push_bias(&mut self, neuron: NeuronId) {
        debug_assert!(!self.has_bias, "a layer holds at most one bias neuron");
        self.neurons.push(neuron);
        self.has_bias = true;
    }

    /// Neuron ids in positional order; the bias neuron, if any, is last.
    pub fn neurons(&self) -> &[NeuronId] {
        &self.neurons
    }

    /// Total neuron count, bias included.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Neuron count excluding the bias neuron.
    pub fn size_non_bias(&self) -> usize {
        self.neurons.len() - usize::from(self.has_bias)
    }

    pub fn is_biased(&self) -> bool {
        self.has_bias
    }
}
