use freeform::{
    activations::Activation,
    builders::FreeformNetworkBuilder,
    layered::{LayeredNetwork, LayeredSource},
    network::FreeformNetwork,
};
use ndarray::array;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_end_to_end_seeded_compute() {
    let mut network = FreeformNetwork::new();
    let input = network.create_input_layer(2);
    let output = network.create_output_layer(1);
    network.connect_layers(input, output, Activation::Linear, 1.0, false);

    network.reset_seeded(42);

    // The reset draws in traversal order: the output neuron's incoming
    // connections were registered source-first, so the first three draws
    // land on (input 0 -> out), (input 1 -> out), (bias -> out).
    let mut rng = StdRng::seed_from_u64(42);
    let range = Uniform::new_inclusive(-1.0, 1.0);
    let w0: f64 = range.sample(&mut rng);
    let w1: f64 = range.sample(&mut rng);
    let w2: f64 = range.sample(&mut rng);

    let result = network.compute(array![1.0, 2.0].view());
    let expected = w0 * 1.0 + w1 * 2.0 + w2 * 1.0;
    assert!((result[0] - expected).abs() < 1e-12);
}

#[test]
fn test_seed_reproducibility_across_fresh_networks() {
    let build = || {
        FreeformNetworkBuilder::new()
            .input_layer(3)
            .hidden_layer(5, Activation::Tanh)
            .output_layer(2, Activation::Linear)
            .build()
            .unwrap()
    };

    let mut first = build();
    let mut second = build();
    first.reset_seeded(1234);
    second.reset_seeded(1234);

    let input = array![0.1, -0.4, 0.9];
    assert_eq!(first.compute(input.view()), second.compute(input.view()));
}

#[test]
fn test_conversion_preserves_counts() {
    let source = LayeredNetwork::new(&[3, 4, 2], &[Activation::Tanh, Activation::Linear]);
    let mut network = FreeformNetwork::from_layered(&source).unwrap();

    assert_eq!(network.input_count(), 3);
    assert_eq!(network.output_count(), 2);

    let output = network.compute(array![0.0, 0.0, 0.0].view());
    assert_eq!(output.len(), 2);
}

#[test]
fn test_conversion_round_trip_weights() {
    // 2 regular rows plus the bias row, 2 target columns
    let table = array![[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]];
    let source = LayeredNetwork::new(&[2, 2], &[Activation::Linear])
        .with_layer_weights(0, table.clone());
    let mut network = FreeformNetwork::from_layered(&source).unwrap();

    let mut found: Vec<(usize, usize, f64)> = Vec::new();
    let mut edges: Vec<(usize, usize, f64)> = Vec::new();
    network.perform_connection_task(|connection| {
        edges.push((connection.source, connection.target, connection.weight));
    });

    // map arena ids back to positional indices within their layers
    let input_layer = network.layer(network.input_layer().unwrap());
    let output_layer = network.layer(network.output_layer().unwrap());
    for (source_id, target_id, weight) in edges {
        let source_index = input_layer
            .neurons()
            .iter()
            .position(|&id| id == source_id)
            .unwrap();
        let target_index = output_layer
            .neurons()
            .iter()
            .position(|&id| id == target_id)
            .unwrap();
        found.push((source_index, target_index, weight));
    }

    let mut expected: Vec<(usize, usize, f64)> = Vec::new();
    for source_index in 0..3 {
        for target_index in 0..2 {
            expected.push((source_index, target_index, table[(source_index, target_index)]));
        }
    }

    found.sort_by(|a, b| a.partial_cmp(b).unwrap());
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(found, expected);
}

#[test]
fn test_diamond_traversal_counts_each_entity_once() {
    // input(1) -> hidden(2) -> output(2), no bias: both outputs share both
    // hidden neurons, which share the single input neuron.
    let mut network = FreeformNetwork::new();
    let input = network.create_input_layer(1);
    let hidden = network.create_layer(2);
    let output = network.create_output_layer(2);
    network.connect_layers(input, hidden, Activation::Tanh, 0.0, false);
    network.connect_layers(hidden, output, Activation::Linear, 0.0, false);

    let mut neuron_visits = 0;
    network.perform_neuron_task(|_| neuron_visits += 1);
    assert_eq!(neuron_visits, 5);

    let mut connection_visits = 0;
    network.perform_connection_task(|_| connection_visits += 1);
    assert_eq!(connection_visits, 6);
    assert_eq!(network.connection_count(), 6);
}

#[test]
fn test_temp_training_buffer_lifecycle() {
    let mut network = FreeformNetworkBuilder::new()
        .input_layer(2)
        .hidden_layer(3, Activation::Tanh)
        .output_layer(1, Activation::Linear)
        .build()
        .unwrap();

    network.temp_training_allocate(4, 2);

    let mut neuron_buffers = Vec::new();
    network.perform_neuron_task(|neuron| neuron_buffers.push(neuron.temp_training().len()));
    assert!(!neuron_buffers.is_empty());
    assert!(neuron_buffers.iter().all(|&len| len == 4));

    let mut connection_buffers = Vec::new();
    network.perform_connection_task(|connection| {
        connection_buffers.push(connection.temp_training().len())
    });
    assert_eq!(connection_buffers.len(), network.connection_count());
    assert!(connection_buffers.iter().all(|&len| len == 2));

    network.temp_training_clear();
    network.perform_neuron_task(|neuron| assert!(neuron.temp_training().is_empty()));
    network.perform_connection_task(|connection| {
        assert!(connection.temp_training().is_empty())
    });
}

#[test]
fn test_bias_neuron_has_no_incoming_connections() {
    let mut network = FreeformNetwork::new();
    let input = network.create_input_layer(2);
    let output = network.create_output_layer(1);
    network.connect_layers(input, output, Activation::Tanh, 1.0, false);

    let input_layer = network.layer(input);
    assert!(input_layer.is_biased());
    let bias_id = *input_layer.neurons().last().unwrap();
    assert!(network.neuron(bias_id).summation().is_none());

    // the bias keeps its constant activation across compute calls
    network.reset_seeded(5);
    network.compute(array![0.0, 0.0].view());
    assert_eq!(network.neuron(bias_id).activation, 1.0);
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.bin");
    let path = path.to_str().unwrap();

    let mut network = FreeformNetworkBuilder::new()
        .input_layer(2)
        .hidden_layer(4, Activation::Sigmoid)
        .output_layer(2, Activation::Linear)
        .build()
        .unwrap();
    network.reset_seeded(77);

    let input = array![0.25, -0.75];
    let before = network.compute(input.view());

    network.save(path).unwrap();
    let mut restored = FreeformNetwork::load(path).unwrap();
    let after = restored.compute(input.view());

    assert_eq!(before, after);
}

#[test]
fn test_layered_source_trait_counts() {
    let source = LayeredNetwork::new(&[5, 3], &[Activation::Sigmoid]);
    assert_eq!(source.layer_count(), 2);
    assert_eq!(source.layer_neuron_count(0), 5);
    assert!(source.is_layer_biased(0));
    assert!(!source.is_layer_biased(1));
    assert_eq!(source.layer_bias_activation(0), 1.0);
}
