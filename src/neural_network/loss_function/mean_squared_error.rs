use crate::error::ModelError;
use crate::neural_network::neural_network_trait::LossFunction;

/// Mean Squared Error loss function
///
/// `loss = mean((predicted[i] - actual[i])^2)` and
/// `grad[i] = 2 * (predicted[i] - actual[i]) / n`.
///
/// Both methods reject inputs of different lengths. Empty inputs produce a
/// loss of `0.0` and an empty gradient.
///
/// # Example
///
/// ```rust
/// use neuralnet::neural_network::*;
///
/// let mse = MeanSquaredError::new();
///
/// let predicted = [1.1, 2.2, 2.8];
/// let actual = [1.0, 2.0, 3.0];
///
/// let loss = mse.compute_loss(&predicted, &actual).unwrap();
/// assert!((loss - 0.03).abs() < 1e-9);
///
/// let gradients = mse.compute_grad(&predicted, &actual).unwrap();
/// assert_eq!(gradients.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    /// Creates a new instance of MeanSquaredError
    ///
    /// # Returns
    ///
    /// - `MeanSquaredError` - Returns a unit-like struct `MeanSquaredError`
    pub fn new() -> Self {
        Self {}
    }
}

fn validate_lengths(predicted: &[f64], actual: &[f64]) -> Result<(), ModelError> {
    if predicted.len() != actual.len() {
        return Err(ModelError::InputValidationError(format!(
            "Size mismatch: predicted has {} values, actual has {}",
            predicted.len(),
            actual.len()
        )));
    }
    Ok(())
}

impl LossFunction for MeanSquaredError {
    fn compute_loss(&self, predicted: &[f64], actual: &[f64]) -> Result<f64, ModelError> {
        validate_lengths(predicted, actual)?;
        if predicted.is_empty() {
            return Ok(0.0);
        }

        let sum: f64 = predicted
            .iter()
            .zip(actual)
            .map(|(p, a)| (p - a) * (p - a))
            .sum();

        Ok(sum / predicted.len() as f64)
    }

    fn compute_grad(&self, predicted: &[f64], actual: &[f64]) -> Result<Vec<f64>, ModelError> {
        validate_lengths(predicted, actual)?;

        let n = predicted.len() as f64;
        Ok(predicted
            .iter()
            .zip(actual)
            .map(|(p, a)| 2.0 * (p - a) / n)
            .collect())
    }

    fn duplicate(&self) -> Box<dyn LossFunction> {
        Box::new(*self)
    }

    fn loss_type(&self) -> &str {
        "MeanSquaredError"
    }
}
