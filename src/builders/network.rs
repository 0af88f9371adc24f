use crate::activations::Activation;
use crate::error::{FreeformError, Result};
use crate::network::FreeformNetwork;

/// Builder for constructing feed-forward freeform networks with a fluent API
pub struct FreeformNetworkBuilder {
    input_size: Option<usize>,
    hidden: Vec<(usize, Activation)>,
    output: Option<(usize, Activation)>,
    bias_activation: f64,
}

impl FreeformNetworkBuilder {
    /// Create a new network builder
    pub fn new() -> Self {
        FreeformNetworkBuilder {
            input_size: None,
            hidden: Vec::new(),
            output: None,
            bias_activation: 1.0,
        }
    }

    /// Set the input layer size
    pub fn input_layer(mut self, size: usize) -> Self {
        self.input_size = Some(size);
        self
    }

    /// Append a fully connected hidden layer
    pub fn hidden_layer(mut self, size: usize, activation: Activation) -> Self {
        self.hidden.push((size, activation));
        self
    }

    /// Set the output layer size and activation
    pub fn output_layer(mut self, size: usize, activation: Activation) -> Self {
        self.output = Some((size, activation));
        self
    }

    /// Set the bias activation used for every connected layer pair.
    /// Defaults to 1.0; zero disables bias neurons entirely.
    pub fn bias_activation(mut self, bias_activation: f64) -> Self {
        self.bias_activation = bias_activation;
        self
    }

    /// Build the freeform network
    pub fn build(self) -> Result<FreeformNetwork> {
        let input_size = self.input_size.ok_or_else(|| FreeformError::InvalidParameter {
            name: "input_layer".to_string(),
            reason: "Input layer not specified".to_string(),
        })?;

        let (output_size, output_activation) =
            self.output.ok_or_else(|| FreeformError::InvalidParameter {
                name: "output_layer".to_string(),
                reason: "Output layer not specified".to_string(),
            })?;

        let mut network = FreeformNetwork::new();
        let mut previous = network.create_input_layer(input_size);

        for (size, activation) in self.hidden {
            let layer = network.create_layer(size);
            network.connect_layers(previous, layer, activation, self.bias_activation, false);
            previous = layer;
        }

        let output = network.create_output_layer(output_size);
        network.connect_layers(previous, output, output_activation, self.bias_activation, false);

        Ok(network)
    }
}

impl Default for FreeformNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_builder() {
        let network = FreeformNetworkBuilder::new()
            .input_layer(4)
            .hidden_layer(8, Activation::Tanh)
            .output_layer(2, Activation::Linear)
            .build()
            .unwrap();

        assert_eq!(network.input_count(), 4);
        assert_eq!(network.output_count(), 2);
        // (4 + bias) * 8 + (8 + bias) * 2
        assert_eq!(network.connection_count(), 58);
    }

    #[test]
    fn test_builder_without_bias() {
        let network = FreeformNetworkBuilder::new()
            .input_layer(3)
            .output_layer(1, Activation::Sigmoid)
            .bias_activation(0.0)
            .build()
            .unwrap();

        assert_eq!(network.connection_count(), 3);
        assert!(!network.layer(network.input_layer().unwrap()).is_biased());
    }

    #[test]
    fn test_builder_errors() {
        // No input layer
        let result = FreeformNetworkBuilder::new()
            .output_layer(1, Activation::Linear)
            .build();
        assert!(result.is_err());

        // No output layer
        let result = FreeformNetworkBuilder::new().input_layer(2).build();
        assert!(result.is_err());
    }
}
