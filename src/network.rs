use ndarray::{Array1, ArrayView1};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use std::fs;
use std::io::{Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use bincode::{serialize, deserialize};

use crate::activations::Activation;
use crate::error::{FreeformError, Result};
use crate::graph::{Connection, ConnectionId, InputSummation, Layer, LayerId, Neuron, NeuronId};
use crate::layered::LayeredSource;

/// Bias activations at or below this magnitude are treated as "no bias".
const BIAS_EPSILON: f64 = 1e-7;

/// A neural network whose connectivity is an explicit neuron/connection
/// graph rather than a fixed per-layer rule.
///
/// Neurons and connections are stored in arenas and addressed by stable
/// integer ids; layers are ordered id lists used during construction and
/// when copying inputs/outputs. The graph is not assumed acyclic, so every
/// whole-graph operation walks it with a per-call visited set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeformNetwork {
    neurons: Vec<Neuron>,
    connections: Vec<Connection>,
    layers: Vec<Layer>,
    input_layer: Option<LayerId>,
    output_layer: Option<LayerId>,
}

impl FreeformNetwork {
    /// Create an empty network. Layers and connections are added with the
    /// `create_*` and `connect_layers` methods.
    pub fn new() -> Self {
        FreeformNetwork {
            neurons: Vec::new(),
            connections: Vec::new(),
            layers: Vec::new(),
            input_layer: None,
            output_layer: None,
        }
    }

    /// Convert a fixed layered network into freeform graph form, copying
    /// its weight tables verbatim.
    ///
    /// Fails with [`FreeformError::InsufficientLayers`] if the source has
    /// fewer than two layers.
    pub fn from_layered<S: LayeredSource>(source: &S) -> Result<Self> {
        if source.layer_count() < 2 {
            return Err(FreeformError::insufficient_layers(2, source.layer_count()));
        }

        let mut network = FreeformNetwork::new();
        let mut previous: Option<LayerId> = None;

        for layer_index in 0..source.layer_count() {
            let layer_id = network.layers.len();
            network.layers.push(Layer::new());

            if network.input_layer.is_none() {
                network.input_layer = Some(layer_id);
            }

            // Regular neurons; non-input layers get a summation using the
            // layer's declared activation function.
            for _ in 0..source.layer_neuron_count(layer_index) {
                let summation = previous
                    .map(|_| InputSummation::new(source.activation(layer_index)));
                let neuron_id = network.push_neuron(Neuron::new(summation));
                network.layers[layer_id].push(neuron_id);
            }

            if let Some(previous_id) = previous {
                network.connect_from_layered(source, layer_index - 1, previous_id, layer_id);
            }

            // The bias is added after connections so it has no inputs and
            // cannot shift the positional weight indexing.
            if source.is_layer_biased(layer_index) {
                let mut bias = Neuron::new(None);
                bias.activation = source.layer_bias_activation(layer_index);
                let neuron_id = network.push_neuron(bias);
                network.layers[layer_id].push_bias(neuron_id);
            }

            previous = Some(layer_id);
        }

        network.output_layer = previous;
        Ok(network)
    }

    /// Create a layer of `count` input-free neurons.
    pub fn create_layer(&mut self, count: usize) -> LayerId {
        let layer_id = self.layers.len();
        let mut layer = Layer::new();
        for _ in 0..count {
            let neuron_id = self.push_neuron(Neuron::new(None));
            layer.push(neuron_id);
        }
        self.layers.push(layer);
        layer_id
    }

    /// Create a layer and register it as the network's input layer.
    pub fn create_input_layer(&mut self, count: usize) -> LayerId {
        let layer_id = self.create_layer(count);
        self.input_layer = Some(layer_id);
        layer_id
    }

    /// Create a layer and register it as the network's output layer.
    pub fn create_output_layer(&mut self, count: usize) -> LayerId {
        let layer_id = self.create_layer(count);
        self.output_layer = Some(layer_id);
        layer_id
    }

    /// Fully connect `source` to `target`: every target neuron gets an
    /// input summation using `activation` and one connection from every
    /// source neuron. Weights are left at zero for a later reset or
    /// trainer.
    ///
    /// If `bias_activation` is above a near-zero epsilon, a constant bias
    /// neuron is appended to `source` before the connections are created,
    /// so it feeds `target` like any other source neuron. A layer holds at
    /// most one bias neuron; a second biased connect from the same source
    /// layer reuses the existing one.
    pub fn connect_layers(
        &mut self,
        source: LayerId,
        target: LayerId,
        activation: Activation,
        bias_activation: f64,
        recurrent: bool,
    ) {
        if bias_activation > BIAS_EPSILON && !self.layers[source].is_biased() {
            let mut bias = Neuron::new(None);
            bias.activation = bias_activation;
            let neuron_id = self.push_neuron(bias);
            self.layers[source].push_bias(neuron_id);
        }

        let source_ids = self.layers[source].neurons().to_vec();
        let target_ids = self.layers[target].neurons().to_vec();

        for &target_id in &target_ids {
            self.neurons[target_id].set_summation(InputSummation::new(activation));

            for &source_id in &source_ids {
                let mut connection = Connection::new(source_id, target_id);
                connection.recurrent = recurrent;
                let connection_id = self.connections.len();
                self.connections.push(connection);

                self.neurons[source_id].add_output(connection_id);
                if let Some(summation) = self.neurons[target_id].summation_mut() {
                    summation.add(connection_id);
                }
            }
        }
    }

    /// Connect with the defaults of the reference behavior: Tanh
    /// activation, bias activation 1.0, non-recurrent.
    pub fn connect_layers_default(&mut self, source: LayerId, target: LayerId) {
        self.connect_layers(source, target, Activation::Tanh, 1.0, false);
    }

    fn connect_from_layered<S: LayeredSource>(
        &mut self,
        source_network: &S,
        from_layer: usize,
        source: LayerId,
        target: LayerId,
    ) {
        for target_index in 0..self.layers[target].size() {
            for source_index in 0..self.layers[source].size() {
                let source_id = self.layers[source].neurons()[source_index];
                let target_id = self.layers[target].neurons()[target_index];

                // neurons with no summation (future bias placeholders)
                // receive no incoming connections
                if self.neurons[target_id].summation().is_none() {
                    continue;
                }

                let mut connection = Connection::new(source_id, target_id);
                connection.weight = source_network.weight(from_layer, source_index, target_index);
                let connection_id = self.connections.len();
                self.connections.push(connection);

                self.neurons[source_id].add_output(connection_id);
                if let Some(summation) = self.neurons[target_id].summation_mut() {
                    summation.add(connection_id);
                }
            }
        }
    }

    /// Input width: the input layer's neuron count, bias excluded.
    pub fn input_count(&self) -> usize {
        self.input_layer
            .map(|layer| self.layers[layer].size_non_bias())
            .unwrap_or(0)
    }

    /// Output width: the output layer's neuron count, bias excluded.
    pub fn output_count(&self) -> usize {
        self.output_layer
            .map(|layer| self.layers[layer].size_non_bias())
            .unwrap_or(0)
    }

    /// Compute the output activations for the given input vector.
    ///
    /// Input values are copied into the input-layer neurons by position
    /// (a bias neuron in that layer keeps its constant value), then every
    /// output neuron is evaluated recursively backward through its input
    /// summation. Leaves return their current activation; shared ancestors
    /// may be recomputed along different paths, which is redundant but
    /// deterministic. The subgraph reachable backward from the outputs
    /// must be acyclic.
    ///
    /// Panics if the network has no input/output layer yet or if the input
    /// length does not match [`FreeformNetwork::input_count`].
    pub fn compute(&mut self, input: ArrayView1<f64>) -> Array1<f64> {
        let input_layer = self.input_layer
            .expect("compute called before an input layer was created");
        let output_layer = self.output_layer
            .expect("compute called before an output layer was created");
        assert_eq!(
            input.len(),
            self.layers[input_layer].size_non_bias(),
            "input length must match the input layer's non-bias neuron count"
        );

        for (position, &value) in input.iter().enumerate() {
            let neuron_id = self.layers[input_layer].neurons()[position];
            self.neurons[neuron_id].activation = value;
        }

        let output_ids = self.layers[output_layer].neurons().to_vec();
        let mut result = Array1::zeros(output_ids.len());
        for (position, &neuron_id) in output_ids.iter().enumerate() {
            self.perform_calculation(neuron_id);
            result[position] = self.neurons[neuron_id].activation;
        }
        result
    }

    /// Classify by computing the outputs and returning the index of the
    /// largest one.
    pub fn classify(&mut self, input: ArrayView1<f64>) -> usize {
        let output = self.compute(input);
        let mut best = 0;
        for (index, &value) in output.iter().enumerate() {
            if value > output[best] {
                best = index;
            }
        }
        best
    }

    fn perform_calculation(&mut self, neuron_id: NeuronId) {
        // Leaves (input and bias neurons) keep their current activation.
        let (incoming, activation, bias) = match self.neurons[neuron_id].summation() {
            Some(summation) => (
                summation.incoming().to_vec(),
                summation.activation_function(),
                summation.bias(),
            ),
            None => return,
        };

        // Bring every source neuron up to date first.
        for &connection_id in &incoming {
            let source = self.connections[connection_id].source;
            self.perform_calculation(source);
        }

        let mut sum = bias;
        for &connection_id in &incoming {
            let connection = &self.connections[connection_id];
            sum += connection.weight * self.neurons[connection.source].activation;
        }
        self.neurons[neuron_id].activation = activation.apply(sum);
    }

    /// Run `task` once for every neuron reachable backward from the output
    /// layer.
    ///
    /// The walk is depth-first from every output neuron over a single
    /// shared visited set, so the callback fires at most once per neuron no
    /// matter how many paths reach it, and cycles are never re-entered.
    pub fn perform_neuron_task<F: FnMut(&mut Neuron)>(&mut self, mut task: F) {
        let Some(output_layer) = self.output_layer else { return };
        let mut visited = vec![false; self.neurons.len()];
        let output_ids = self.layers[output_layer].neurons().to_vec();
        for neuron_id in output_ids {
            if !visited[neuron_id] {
                self.neuron_task_inner(&mut visited, neuron_id, &mut task);
            }
        }
    }

    fn neuron_task_inner<F: FnMut(&mut Neuron)>(
        &mut self,
        visited: &mut [bool],
        neuron_id: NeuronId,
        task: &mut F,
    ) {
        visited[neuron_id] = true;
        task(&mut self.neurons[neuron_id]);

        let incoming = match self.neurons[neuron_id].summation() {
            Some(summation) => summation.incoming().to_vec(),
            None => return,
        };
        for connection_id in incoming {
            let source = self.connections[connection_id].source;
            if !visited[source] {
                self.neuron_task_inner(visited, source, task);
            }
        }
    }

    /// Run `task` exactly once for every connection reachable backward from
    /// the output layer.
    ///
    /// Connections are visited on the edge into a neuron; the visited set
    /// only gates recursion past a neuron already seen, so each distinct
    /// connection fires once even when its source is shared.
    pub fn perform_connection_task<F: FnMut(&mut Connection)>(&mut self, mut task: F) {
        let Some(output_layer) = self.output_layer else { return };
        let mut visited = vec![false; self.neurons.len()];
        let output_ids = self.layers[output_layer].neurons().to_vec();
        for neuron_id in output_ids {
            if !visited[neuron_id] {
                self.connection_task_inner(&mut visited, neuron_id, &mut task);
            }
        }
    }

    fn connection_task_inner<F: FnMut(&mut Connection)>(
        &mut self,
        visited: &mut [bool],
        neuron_id: NeuronId,
        task: &mut F,
    ) {
        visited[neuron_id] = true;

        let incoming = match self.neurons[neuron_id].summation() {
            Some(summation) => summation.incoming().to_vec(),
            None => return,
        };
        for connection_id in incoming {
            task(&mut self.connections[connection_id]);
            let source = self.connections[connection_id].source;
            if !visited[source] {
                self.connection_task_inner(visited, source, task);
            }
        }
    }

    /// Randomize every weight with a seed derived from the current time.
    pub fn reset(&mut self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        self.reset_seeded(seed);
    }

    /// Randomize every weight from a seeded uniform distribution over
    /// [-1, 1]. The same seed on the same topology always produces the
    /// same weight assignment, because values are drawn in traversal
    /// order.
    pub fn reset_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let range = Uniform::new_inclusive(-1.0, 1.0);
        self.perform_connection_task(|connection| {
            connection.weight = range.sample(&mut rng);
        });
    }

    /// Allocate temp-training buffers: one of `neuron_size` on every
    /// reachable neuron and one of `connection_size` on every reachable
    /// connection. Must be paired with [`FreeformNetwork::temp_training_clear`]
    /// around a training session.
    pub fn temp_training_allocate(&mut self, neuron_size: usize, connection_size: usize) {
        self.perform_neuron_task(|neuron| neuron.allocate_temp_training(neuron_size));
        self.perform_connection_task(|connection| {
            connection.allocate_temp_training(connection_size)
        });
    }

    /// Release every temp-training buffer.
    pub fn temp_training_clear(&mut self) {
        self.perform_neuron_task(|neuron| neuron.clear_temp_training());
        self.perform_connection_task(|connection| connection.clear_temp_training());
    }

    pub fn input_layer(&self) -> Option<LayerId> {
        self.input_layer
    }

    pub fn output_layer(&self) -> Option<LayerId> {
        self.output_layer
    }

    pub fn layer(&self, layer: LayerId) -> &Layer {
        &self.layers[layer]
    }

    pub fn neuron(&self, neuron: NeuronId) -> &Neuron {
        &self.neurons[neuron]
    }

    pub fn neuron_mut(&mut self, neuron: NeuronId) -> &mut Neuron {
        &mut self.neurons[neuron]
    }

    pub fn connection(&self, connection: ConnectionId) -> &Connection {
        &self.connections[connection]
    }

    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn push_neuron(&mut self, neuron: Neuron) -> NeuronId {
        let neuron_id = self.neurons.len();
        self.neurons.push(neuron);
        neuron_id
    }

    /// Save the network's state to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let serialized = serialize(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(&serialized)?;
        Ok(())
    }

    /// Load a network from a file previously written by
    /// [`FreeformNetwork::save`].
    pub fn load(path: &str) -> Result<Self> {
        let mut file = fs::File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        let deserialized: Self = deserialize(&buffer)?;
        Ok(deserialized)
    }
}

impl Default for FreeformNetwork {
    fn default() -> Self {
        Self::new()
    }
}
