use crate::error::{IoError, ModelError};
use crate::math::random_weight;
use crate::neural_network::layer::TrainingParameters;
use crate::neural_network::layer::layer_weight::{DenseLayerWeight, LayerWeight};
use crate::neural_network::layer::serialize_weight::SerializableLayerWeight;
use crate::neural_network::neural_network_trait::{Layer, Optimizer};
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// Dense (Fully Connected) layer implementation for neural networks.
///
/// This layer performs the affine transformation `output = W · input + b` on a
/// single input vector. Weights and biases are initialized uniformly in
/// \[-1, 1\].
///
/// Without an optimizer, `backward` applies plain gradient descent with the
/// learning rate it is given. After [`Layer::set_optimizer`] the layer owns two
/// independent optimizer instances, one for the row-major flattened weight
/// matrix and one for the bias vector, and the passed learning rate is ignored.
///
/// # Dimensions
///
/// - Input length: input_size
/// - Output length: output_size
///
/// # Fields
/// ## Core fields
/// - `input_size` - Input dimension size
/// - `output_size` - Output dimension size
/// - `weights` - Weight matrix with shape (output_size, input_size)
/// - `bias` - Bias vector with length output_size
///
/// ## Cache
/// - `input_cache` - Input of the last forward pass, consumed by the next backward pass
///
/// ## Optimizers
/// - `weight_optimizer` - Optimizer applied to the flattened weight matrix
/// - `bias_optimizer` - Optimizer applied to the bias vector
///
/// # Example
/// ```rust
/// use neuralnet::neural_network::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut dense = Dense::with_rng(3, 2, &mut rng).unwrap();
///
/// let output = dense.forward(&[0.5, -0.5, 1.0]).unwrap();
/// assert_eq!(output.len(), 2);
///
/// let grad_input = dense.backward(&[1.0, 0.0], 0.1).unwrap();
/// assert_eq!(grad_input.len(), 3);
/// ```
#[derive(Clone)]
pub struct Dense {
    input_size: usize,
    output_size: usize,
    weights: Array2<f64>,
    bias: Array1<f64>,
    input_cache: Option<Array1<f64>>,
    weight_optimizer: Option<Box<dyn Optimizer>>,
    bias_optimizer: Option<Box<dyn Optimizer>>,
}

impl Dense {
    /// Creates a new dense layer whose parameters are drawn from the thread-local RNG.
    ///
    /// # Parameters
    ///
    /// - `input_size` - Number of inputs
    /// - `output_size` - Number of outputs
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new Dense layer instance with specified dimensions
    /// - `Err(ModelError::InputValidationError)` - If either size is zero
    pub fn new(input_size: usize, output_size: usize) -> Result<Self, ModelError> {
        Self::with_rng(input_size, output_size, &mut rand::rng())
    }

    /// Creates a new dense layer whose parameters are drawn from `rng`.
    ///
    /// The generator is only borrowed for the duration of initialization, so a
    /// seeded generator gives reproducible layers.
    ///
    /// # Parameters
    ///
    /// - `input_size` - Number of inputs
    /// - `output_size` - Number of outputs
    /// - `rng` - Random number generator owned by the caller
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new Dense layer instance with specified dimensions
    /// - `Err(ModelError::InputValidationError)` - If either size is zero
    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        validate_dimensions(input_size, output_size)?;

        let weights =
            Array2::from_shape_simple_fn((output_size, input_size), || random_weight(&mut *rng));
        let bias = Array1::from_shape_simple_fn(output_size, || random_weight(&mut *rng));

        Ok(Self::from_parts(weights, bias))
    }

    /// Creates a dense layer from explicit parameters.
    ///
    /// # Parameters
    ///
    /// - `weights` - Weight matrix with shape (output_size, input_size)
    /// - `bias` - Bias vector with length output_size
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new Dense layer holding the given parameters
    /// - `Err(ModelError::InputValidationError)` - If the shapes are empty or inconsistent
    pub fn from_weights(weights: Array2<f64>, bias: Array1<f64>) -> Result<Self, ModelError> {
        let (output_size, input_size) = weights.dim();
        validate_dimensions(input_size, output_size)?;
        validate_bias(output_size, &bias)?;

        Ok(Self::from_parts(
            weights.as_standard_layout().into_owned(),
            bias.as_standard_layout().into_owned(),
        ))
    }

    fn from_parts(weights: Array2<f64>, bias: Array1<f64>) -> Self {
        let (output_size, input_size) = weights.dim();
        Self {
            input_size,
            output_size,
            weights,
            bias,
            input_cache: None,
            weight_optimizer: None,
            bias_optimizer: None,
        }
    }

    /// Replaces the layer parameters, keeping the layer dimensions.
    ///
    /// # Parameters
    ///
    /// - `weights` - Weight matrix with shape (output_size, input_size)
    /// - `bias` - Bias vector with length output_size
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Parameters replaced
    /// - `Err(ModelError::InputValidationError)` - If the shapes differ from the layer's
    pub fn set_weights(&mut self, weights: Array2<f64>, bias: Array1<f64>) -> Result<(), ModelError> {
        if weights.dim() != (self.output_size, self.input_size) {
            return Err(ModelError::InputValidationError(format!(
                "Weight matrix shape {:?} does not match layer shape ({}, {})",
                weights.dim(),
                self.output_size,
                self.input_size
            )));
        }
        validate_bias(self.output_size, &bias)?;

        self.weights = weights.as_standard_layout().into_owned();
        self.bias = bias.as_standard_layout().into_owned();
        Ok(())
    }

    /// Weight matrix with shape (output_size, input_size)
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Bias vector with length output_size
    pub fn bias(&self) -> &Array1<f64> {
        &self.bias
    }

    /// Returns the input dimension of the layer
    pub fn get_input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the output dimension of the layer
    pub fn get_output_size(&self) -> usize {
        self.output_size
    }

    /// Returns `true` when both parameter optimizers are attached
    pub fn has_optimizer(&self) -> bool {
        self.weight_optimizer.is_some() && self.bias_optimizer.is_some()
    }

    /// Optimizer updating the flattened weight matrix, if attached
    pub fn weight_optimizer(&self) -> Option<&dyn Optimizer> {
        self.weight_optimizer.as_deref()
    }

    /// Optimizer updating the bias vector, if attached
    pub fn bias_optimizer(&self) -> Option<&dyn Optimizer> {
        self.bias_optimizer.as_deref()
    }
}

impl Layer for Dense {
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>, ModelError> {
        if input.len() != self.input_size {
            return Err(ModelError::InputValidationError(format!(
                "Dense layer expects {} inputs, got {}",
                self.input_size,
                input.len()
            )));
        }

        let input = Array1::from(input.to_vec());
        let output = self.weights.dot(&input) + &self.bias;
        self.input_cache = Some(input);

        Ok(output.to_vec())
    }

    fn backward(
        &mut self,
        grad_output: &[f64],
        learning_rate: f64,
    ) -> Result<Vec<f64>, ModelError> {
        if grad_output.len() != self.output_size {
            return Err(ModelError::InputValidationError(format!(
                "Dense layer expects a gradient of length {}, got {}",
                self.output_size,
                grad_output.len()
            )));
        }

        let input = self.input_cache.take().ok_or_else(|| {
            ModelError::ProcessingError(String::from("Forward pass has not been run"))
        })?;

        let grad = ArrayView1::from(grad_output);

        // Propagated with the weights as they were before this update
        let grad_input = self.weights.t().dot(&grad);

        // Outer product grad ⊗ input, built in standard layout so it flattens
        // row-major like the weight matrix
        let grad_weights =
            Array2::from_shape_fn((self.output_size, self.input_size), |(i, j)| {
                grad[i] * input[j]
            });

        match (
            self.weight_optimizer.as_mut(),
            self.bias_optimizer.as_mut(),
        ) {
            (Some(weight_optimizer), Some(bias_optimizer)) => {
                let weights = self.weights.as_slice_mut().ok_or_else(|| {
                    ModelError::ProcessingError(String::from(
                        "Weight matrix is not stored contiguously",
                    ))
                })?;
                let flat_grad_weights = grad_weights.as_slice().ok_or_else(|| {
                    ModelError::ProcessingError(String::from(
                        "Weight gradient is not stored contiguously",
                    ))
                })?;
                weight_optimizer.update(weights, flat_grad_weights)?;

                let bias = self.bias.as_slice_mut().ok_or_else(|| {
                    ModelError::ProcessingError(String::from(
                        "Bias vector is not stored contiguously",
                    ))
                })?;
                bias_optimizer.update(bias, grad_output)?;
            }
            _ => {
                self.weights.scaled_add(-learning_rate, &grad_weights);
                self.bias.scaled_add(-learning_rate, &grad);
            }
        }

        Ok(grad_input.to_vec())
    }

    fn duplicate(&self) -> Box<dyn Layer> {
        Box::new(self.clone())
    }

    fn layer_type(&self) -> &str {
        "Dense"
    }

    fn output_shape(&self) -> String {
        format!("(None, {})", self.output_size)
    }

    fn input_size(&self) -> Option<usize> {
        Some(self.input_size)
    }

    fn output_size(&self) -> Option<usize> {
        Some(self.output_size)
    }

    fn param_count(&self) -> TrainingParameters {
        TrainingParameters::Trainable(self.input_size * self.output_size + self.output_size)
    }

    fn set_optimizer(&mut self, optimizer: &dyn Optimizer) {
        // weights and biases never share momentum or moment estimates
        self.weight_optimizer = Some(optimizer.duplicate());
        self.bias_optimizer = Some(optimizer.duplicate());
    }

    fn get_weights(&self) -> LayerWeight<'_> {
        LayerWeight::Dense(DenseLayerWeight {
            weight: &self.weights,
            bias: &self.bias,
        })
    }

    fn apply_weights(&mut self, weights: &SerializableLayerWeight) -> Result<(), IoError> {
        match weights {
            SerializableLayerWeight::Dense(w) => {
                let (weight, bias) = w.to_arrays()?;
                self.set_weights(weight, bias)
                    .map_err(|e| IoError::invalid_data(e.to_string()))
            }
            SerializableLayerWeight::Empty => Err(IoError::invalid_data(
                "Dense layer cannot be loaded from an empty weight entry",
            )),
        }
    }
}

fn validate_dimensions(input_size: usize, output_size: usize) -> Result<(), ModelError> {
    if input_size == 0 || output_size == 0 {
        return Err(ModelError::InputValidationError(format!(
            "Dense layer dimensions must be positive, got input_size={} output_size={}",
            input_size, output_size
        )));
    }
    Ok(())
}

fn validate_bias(output_size: usize, bias: &Array1<f64>) -> Result<(), ModelError> {
    if bias.len() != output_size {
        return Err(ModelError::InputValidationError(format!(
            "Bias length {} does not match output size {}",
            bias.len(),
            output_size
        )));
    }
    Ok(())
}
