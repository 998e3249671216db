use crate::error::ModelError;
use crate::neural_network::activation::Activation;
use crate::neural_network::neural_network_trait::Layer;

/// Element-wise activation layer.
///
/// Applies an [`Activation`] to every element of the input, preserving its
/// length. The raw input is cached so that `backward` can evaluate the
/// derivative at the pre-activation values. The layer has no parameters, so
/// the learning rate passed to `backward` is unused.
///
/// # Fields
///
/// - `activation` - Nonlinearity applied by the layer
/// - `input_cache` - Raw input of the last forward pass, consumed by the next backward pass
///
/// # Examples
///
/// ```rust
/// use neuralnet::neural_network::*;
///
/// let mut layer = ActivationLayer::new(Activation::ReLU);
/// let output = layer.forward(&[-1.0, 2.0]).unwrap();
/// assert_eq!(output, vec![0.0, 2.0]);
///
/// let grad = layer.backward(&[1.0, 1.0], 0.1).unwrap();
/// assert_eq!(grad, vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationLayer {
    activation: Activation,
    input_cache: Option<Vec<f64>>,
}

impl ActivationLayer {
    /// Creates a new activation layer.
    ///
    /// # Parameters
    ///
    /// * `activation` - Nonlinearity applied element-wise
    ///
    /// # Returns
    ///
    /// * `Self` - A new `ActivationLayer` instance
    pub fn new(activation: Activation) -> Self {
        Self {
            activation,
            input_cache: None,
        }
    }

    /// Creates a sigmoid activation layer.
    pub fn sigmoid() -> Self {
        Self::new(Activation::Sigmoid)
    }

    /// Creates a ReLU activation layer.
    pub fn relu() -> Self {
        Self::new(Activation::ReLU)
    }

    /// Creates a leaky ReLU activation layer.
    ///
    /// # Parameters
    ///
    /// * `alpha` - Slope applied to non-positive inputs
    pub fn leaky_relu(alpha: f64) -> Self {
        Self::new(Activation::LeakyReLU { alpha })
    }

    /// Creates a tanh activation layer.
    pub fn tanh() -> Self {
        Self::new(Activation::Tanh)
    }

    /// Nonlinearity applied by this layer
    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Layer for ActivationLayer {
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>, ModelError> {
        let output = input.iter().map(|&x| self.activation.apply(x)).collect();
        self.input_cache = Some(input.to_vec());
        Ok(output)
    }

    fn backward(
        &mut self,
        grad_output: &[f64],
        _learning_rate: f64,
    ) -> Result<Vec<f64>, ModelError> {
        let input = match self.input_cache.as_ref() {
            Some(input) => input,
            None => Err(ModelError::ProcessingError(String::from(
                "Forward pass has not been run",
            )))?,
        };

        if grad_output.len() != input.len() {
            return Err(ModelError::InputValidationError(format!(
                "Gradient length {} does not match cached input length {}",
                grad_output.len(),
                input.len()
            )));
        }

        let grad_input = input
            .iter()
            .zip(grad_output)
            .map(|(&x, &g)| self.activation.derivative(x) * g)
            .collect();
        self.input_cache = None;

        Ok(grad_input)
    }

    fn duplicate(&self) -> Box<dyn Layer> {
        Box::new(self.clone())
    }

    fn layer_type(&self) -> &str {
        self.activation.name()
    }

    fn output_shape(&self) -> String {
        String::from("Same as input")
    }
}
