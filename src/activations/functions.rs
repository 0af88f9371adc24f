use serde::{Serialize, Deserialize};

/// An enumeration of the possible activation functions that can be attached
/// to an input summation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    #[default]
    Tanh,
    LeakyRelu { alpha: f64 },
}

impl Activation {
    /// Apply the activation function to a single weighted sum.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::LeakyRelu { alpha } => {
                if x > 0.0 { x } else { alpha * x }
            }
        }
    }

    /// Compute the derivative of the activation function at `x`.
    /// Trainers that consume the temp-training buffers need this to
    /// propagate error terms; evaluation itself never calls it.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Linear => 1.0,
            Activation::Relu => {
                if x > 0.0 { 1.0 } else { 0.0 }
            }
            Activation::Sigmoid => {
                let sigmoid = 1.0 / (1.0 + (-x).exp());
                sigmoid * (1.0 - sigmoid)
            }
            Activation::Tanh => {
                let tanh_x = x.tanh();
                1.0 - tanh_x * tanh_x
            }
            Activation::LeakyRelu { alpha } => {
                if x > 0.0 { 1.0 } else { *alpha }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Activation::Linear.apply(-3.5), -3.5);
        assert_eq!(Activation::Linear.derivative(42.0), 1.0);
    }

    #[test]
    fn test_relu() {
        assert_eq!(Activation::Relu.apply(2.0), 2.0);
        assert_eq!(Activation::Relu.apply(-2.0), 0.0);
        assert_eq!(Activation::Relu.derivative(-1.0), 0.0);
    }

    #[test]
    fn test_sigmoid_bounds() {
        for x in [-50.0, -1.0, 0.0, 1.0, 50.0] {
            let y = Activation::Sigmoid.apply(x);
            assert!((0.0..=1.0).contains(&y));
        }
        assert!((Activation::Sigmoid.apply(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_tanh_matches_std() {
        assert_eq!(Activation::Tanh.apply(0.3), 0.3f64.tanh());
    }

    #[test]
    fn test_leaky_relu_slope() {
        let act = Activation::LeakyRelu { alpha: 0.01 };
        assert_eq!(act.apply(-2.0), -0.02);
        assert_eq!(act.derivative(-2.0), 0.01);
        assert_eq!(act.apply(3.0), 3.0);
    }
}
