use crate::error::{IoError, ModelError};
use crate::neural_network::layer::TrainingParameters;
use crate::neural_network::layer::layer_weight::LayerWeight;
use crate::neural_network::layer::serialize_weight::SerializableLayerWeight;

/// Defines the interface for neural network layers.
///
/// A layer maps a single input vector to an output vector and, during
/// training, maps the gradient of its output back to the gradient of its
/// input. The input seen by the most recent `forward` call is cached and
/// consumed by the next `backward` call.
pub trait Layer {
    /// Performs forward propagation through the layer.
    ///
    /// # Parameters
    ///
    /// * `input` - The input vector to the layer
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - The output vector after forward computation
    /// - `Err(ModelError::InputValidationError)` - If the input length does not match the layer
    fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>, ModelError>;

    /// Performs backward propagation through the layer, updating its parameters.
    ///
    /// # Parameters
    ///
    /// - `grad_output` - Gradient of the loss with respect to this layer's output
    /// - `learning_rate` - Step size for plain gradient descent. Layers with an
    ///   attached optimizer ignore it and use the optimizer's own learning rate.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Gradient with respect to this layer's input
    /// - `Err(ModelError::ProcessingError)` - If no forward pass preceded this call
    /// - `Err(ModelError::InputValidationError)` - If `grad_output` has the wrong length
    fn backward(&mut self, grad_output: &[f64], learning_rate: f64)
    -> Result<Vec<f64>, ModelError>;

    /// Returns an independent deep copy of this layer.
    ///
    /// # Returns
    ///
    /// * `Box<dyn Layer>` - A layer sharing no state with `self`
    fn duplicate(&self) -> Box<dyn Layer>;

    /// Returns the type name of the layer (e.g. "Dense").
    ///
    /// # Returns
    ///
    /// * `&str` - A string slice representing the layer type
    fn layer_type(&self) -> &str;

    /// Returns a description of the output shape of the layer.
    ///
    /// # Returns
    ///
    /// * `String` - A string describing the output dimensions
    fn output_shape(&self) -> String {
        "Unknown".to_string()
    }

    /// Number of inputs the layer requires, if the layer fixes it
    fn input_size(&self) -> Option<usize> {
        None
    }

    /// Number of outputs the layer produces, if the layer fixes it
    fn output_size(&self) -> Option<usize> {
        None
    }

    /// Returns the total number of trainable parameters in the layer.
    ///
    /// # Returns
    ///
    /// * `TrainingParameters` - The count of parameters as an enum variant
    fn param_count(&self) -> TrainingParameters {
        TrainingParameters::NoTrainable
    }

    /// Attaches an optimizer to the layer's parameters.
    ///
    /// Layers without parameters ignore this call.
    ///
    /// # Parameters
    ///
    /// * `_optimizer` - Prototype optimizer; the layer stores its own duplicates
    fn set_optimizer(&mut self, _optimizer: &dyn Optimizer) {}

    /// Returns a reference to all weights in the layer.
    ///
    /// # Returns
    ///
    /// * `LayerWeight<'_>` - `LayerWeight::Dense` for dense layers, `LayerWeight::Empty` otherwise
    fn get_weights(&self) -> LayerWeight<'_> {
        LayerWeight::Empty
    }

    /// Replaces the layer's weights with deserialized values.
    ///
    /// # Parameters
    ///
    /// * `weights` - Weights previously produced from [`Layer::get_weights`]
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Weights applied
    /// - `Err(IoError::StdIoError)` - If the weights do not fit this layer
    fn apply_weights(&mut self, weights: &SerializableLayerWeight) -> Result<(), IoError> {
        match weights {
            SerializableLayerWeight::Empty => Ok(()),
            _ => Err(IoError::invalid_data(format!(
                "Layer '{}' has no trainable weights to load",
                self.layer_type()
            ))),
        }
    }
}

impl Clone for Box<dyn Layer> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

/// Defines the interface for loss functions used in neural network training.
///
/// This trait provides methods to compute both the loss value and its gradient
/// with respect to the predicted values.
pub trait LossFunction {
    /// Computes the loss between predicted and actual values.
    ///
    /// # Parameters
    ///
    /// - `predicted` - Output of the network
    /// - `actual` - Ground truth values
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - The scalar loss value
    /// - `Err(ModelError::InputValidationError)` - If the lengths differ
    fn compute_loss(&self, predicted: &[f64], actual: &[f64]) -> Result<f64, ModelError>;

    /// Computes the gradient of the loss with respect to the predictions.
    ///
    /// # Parameters
    ///
    /// - `predicted` - Output of the network
    /// - `actual` - Ground truth values
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Gradient of the loss with respect to predictions
    /// - `Err(ModelError::InputValidationError)` - If the lengths differ
    fn compute_grad(&self, predicted: &[f64], actual: &[f64]) -> Result<Vec<f64>, ModelError>;

    /// Returns an independent copy of this loss function.
    fn duplicate(&self) -> Box<dyn LossFunction>;

    /// Returns the name of the loss function (e.g. "MeanSquaredError").
    fn loss_type(&self) -> &str;
}

impl Clone for Box<dyn LossFunction> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

/// Defines the interface for optimization algorithms.
///
/// An optimizer turns a gradient into an in-place update of a flat parameter
/// vector. Any auxiliary state (velocity, moment estimates) is owned by the
/// optimizer instance and sized lazily from the first vector it sees.
pub trait Optimizer {
    /// Updates `weights` in place using `gradients`.
    ///
    /// # Parameters
    ///
    /// - `weights` - Parameters to update
    /// - `gradients` - Gradient of the loss with respect to `weights`
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Parameters updated
    /// - `Err(ModelError::InputValidationError)` - If the two slices differ in length
    fn update(&mut self, weights: &mut [f64], gradients: &[f64]) -> Result<(), ModelError>;

    /// Returns an independent deep copy, including all accumulated state.
    fn duplicate(&self) -> Box<dyn Optimizer>;

    /// Learning rate used by this optimizer.
    fn learning_rate(&self) -> f64;

    /// Returns the name of the optimizer (e.g. "SGD").
    fn optimizer_type(&self) -> &str;
}

impl Clone for Box<dyn Optimizer> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}
