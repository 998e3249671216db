use super::input_validation_function::{
    validate_decay_rate, validate_learning_rate, validate_update_lengths,
};
use crate::error::ModelError;
use crate::neural_network::neural_network_trait::Optimizer;
use ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip};

/// Stochastic Gradient Descent (SGD) optimizer with momentum.
///
/// For every parameter `i`:
///
/// ```text
/// velocity[i] = momentum * velocity[i] - learning_rate * gradient[i]
/// weight[i]  += velocity[i]
/// ```
///
/// With `momentum = 0` this is plain gradient descent. The velocity vector is
/// zero-initialized and sized from the first update; it persists across calls
/// and is copied verbatim by [`Optimizer::duplicate`].
///
/// # Fields
///
/// - `learning_rate` - Learning rate controlling the size of parameter updates
/// - `momentum` - Fraction of the previous velocity carried into the next step
/// - `velocity` - Accumulated update direction, one entry per parameter
///
/// # Example
/// ```rust
/// use neuralnet::neural_network::*;
///
/// let mut sgd = SGD::new(0.1, 0.0).unwrap();
/// let mut weights = vec![1.0, 2.0];
/// sgd.update(&mut weights, &[1.0, -1.0]).unwrap();
/// assert!((weights[0] - 0.9).abs() < 1e-12);
/// assert!((weights[1] - 2.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SGD {
    learning_rate: f64,
    momentum: f64,
    velocity: Array1<f64>,
}

impl SGD {
    /// Creates a new SGD optimizer.
    ///
    /// # Parameters
    ///
    /// - `learning_rate` - Step size for parameter updates
    /// - `momentum` - Momentum coefficient in \[0, 1)
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new SGD optimizer instance
    /// - `Err(ModelError::InputValidationError)` - If a hyperparameter is out of range
    pub fn new(learning_rate: f64, momentum: f64) -> Result<Self, ModelError> {
        validate_learning_rate(learning_rate)?;
        validate_decay_rate(momentum, "momentum")?;

        Ok(Self {
            learning_rate,
            momentum,
            velocity: Array1::zeros(0),
        })
    }

    /// Momentum coefficient in \[0, 1)
    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Current velocity; empty until the first update.
    pub fn velocity(&self) -> &Array1<f64> {
        &self.velocity
    }
}

impl Optimizer for SGD {
    fn update(&mut self, weights: &mut [f64], gradients: &[f64]) -> Result<(), ModelError> {
        validate_update_lengths(weights, gradients)?;

        if self.velocity.len() != weights.len() {
            self.velocity = Array1::zeros(weights.len());
        }

        let momentum = self.momentum;
        let learning_rate = self.learning_rate;
        Zip::from(&mut self.velocity)
            .and(ArrayViewMut1::from(weights))
            .and(ArrayView1::from(gradients))
            .for_each(|v, w, &g| {
                *v = momentum * *v - learning_rate * g;
                *w += *v;
            });

        Ok(())
    }

    fn duplicate(&self) -> Box<dyn Optimizer> {
        Box::new(self.clone())
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn optimizer_type(&self) -> &str {
        "SGD"
    }
}
