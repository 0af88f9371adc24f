use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use serde::{Serialize, Deserialize};

use crate::activations::Activation;

/// A fixed, fully connected layered network readable by the freeform
/// conversion builder.
///
/// Layer indices run from the input layer (0) to the output layer.
/// `weight(from_layer, source_index, target_index)` addresses the weight
/// from neuron `source_index` of `from_layer` to neuron `target_index` of
/// `from_layer + 1`, where `source_index` ranges over the source layer
/// *including* its bias row (the bias row comes after the regular rows).
pub trait LayeredSource {
    fn layer_count(&self) -> usize;

    /// Neuron count of the given layer, bias excluded.
    fn layer_neuron_count(&self, layer: usize) -> usize;

    /// Activation function applied by the given layer (layers >= 1).
    fn activation(&self, layer: usize) -> Activation;

    /// Whether the given layer carries a bias neuron feeding the next layer.
    fn is_layer_biased(&self, layer: usize) -> bool;

    /// Constant activation of the layer's bias neuron.
    fn layer_bias_activation(&self, layer: usize) -> f64;

    fn weight(&self, from_layer: usize, source_index: usize, target_index: usize) -> f64;
}

/// A minimal concrete [`LayeredSource`]: a feed-forward network with one
/// weight table per layer pair. Every layer except the output layer is
/// biased with a bias activation of 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayeredNetwork {
    layer_sizes: Vec<usize>,
    activations: Vec<Activation>,
    weights: Vec<Array2<f64>>,
}

impl LayeredNetwork {
    /// Create a layered network with the given per-layer sizes and one
    /// activation per non-input layer. Weights are initialized with random
    /// values from a uniform distribution between -1 and 1.
    pub fn new(layer_sizes: &[usize], activations: &[Activation]) -> Self {
        assert_eq!(
            layer_sizes.len().saturating_sub(1),
            activations.len(),
            "need exactly one activation per non-input layer"
        );

        let weights = layer_sizes
            .windows(2)
            .map(|window| {
                // bias row sits below the regular rows
                Array2::random((window[0] + 1, window[1]), Uniform::new(-1.0, 1.0))
            })
            .collect();

        LayeredNetwork {
            layer_sizes: layer_sizes.to_vec(),
            activations: activations.to_vec(),
            weights,
        }
    }

    /// Replace the weight table between `from_layer` and the next layer.
    /// The table must have one row per source neuron (bias row last) and
    /// one column per target neuron.
    pub fn with_layer_weights(mut self, from_layer: usize, weights: Array2<f64>) -> Self {
        assert_eq!(weights.dim(), self.weights[from_layer].dim());
        self.weights[from_layer] = weights;
        self
    }

    /// The weight table between `from_layer` and the next layer.
    pub fn layer_weights(&self, from_layer: usize) -> &Array2<f64> {
        &self.weights[from_layer]
    }
}

impl LayeredSource for LayeredNetwork {
    fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    fn layer_neuron_count(&self, layer: usize) -> usize {
        self.layer_sizes[layer]
    }

    fn activation(&self, layer: usize) -> Activation {
        self.activations[layer - 1]
    }

    fn is_layer_biased(&self, layer: usize) -> bool {
        layer + 1 < self.layer_sizes.len()
    }

    fn layer_bias_activation(&self, _layer: usize) -> f64 {
        1.0
    }

    fn weight(&self, from_layer: usize, source_index: usize, target_index: usize) -> f64 {
        self.weights[from_layer][(source_index, target_index)]
    }
}
