use super::input_validation_function::{
    validate_decay_rate, validate_epsilon, validate_learning_rate, validate_update_lengths,
};
use crate::error::ModelError;
use crate::neural_network::neural_network_trait::Optimizer;
use ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip};

/// Adam optimizer implementation.
///
/// An optimization algorithm that computes individual adaptive learning
/// rates for different parameters from estimates of first and second moments
/// of the gradients. Every call to `update` increments the timestep `t` once,
/// then for each parameter:
///
/// ```text
/// m = beta1 * m + (1 - beta1) * g
/// v = beta2 * v + (1 - beta2) * g^2
/// m_hat = m / (1 - beta1^t)
/// v_hat = v / (1 - beta2^t)
/// w -= learning_rate * m_hat / (sqrt(v_hat) + epsilon)
/// ```
///
/// The moment vectors are zero-initialized and sized from the first update.
/// [`Optimizer::duplicate`] copies `t`, `m` and `v`, so a copy resumes the
/// bias-correction schedule exactly where the original left off.
#[derive(Debug, Clone, PartialEq)]
pub struct Adam {
    /// Learning rate controlling the size of parameter updates.
    learning_rate: f64,
    /// Exponential decay rate for the first moment estimates.
    beta1: f64,
    /// Exponential decay rate for the second moment estimates.
    beta2: f64,
    /// Small constant added for numerical stability.
    epsilon: f64,
    /// First moment estimates.
    m: Array1<f64>,
    /// Second moment estimates.
    v: Array1<f64>,
    /// Current timestep, incremented with each update.
    t: u64,
}

impl Adam {
    /// Creates a new Adam optimizer with the specified parameters.
    ///
    /// # Parameters
    ///
    /// - `learning_rate` - Step size for parameter updates
    /// - `beta1` - Decay rate for the first moment estimates (typically 0.9)
    /// - `beta2` - Decay rate for the second moment estimates (typically 0.999)
    /// - `epsilon` - Small constant for numerical stability (typically 1e-8)
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new Adam optimizer instance
    /// - `Err(ModelError::InputValidationError)` - If a hyperparameter is out of range
    pub fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Result<Self, ModelError> {
        validate_learning_rate(learning_rate)?;
        validate_decay_rate(beta1, "beta1")?;
        validate_decay_rate(beta2, "beta2")?;
        validate_epsilon(epsilon)?;

        Ok(Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            m: Array1::zeros(0),
            v: Array1::zeros(0),
            t: 0,
        })
    }

    /// Creates an Adam optimizer with the given learning rate and
    /// `beta1 = 0.9`, `beta2 = 0.999`, `epsilon = 1e-8`.
    pub fn with_learning_rate(learning_rate: f64) -> Result<Self, ModelError> {
        Self::new(learning_rate, 0.9, 0.999, 1e-8)
    }

    /// Number of updates applied so far
    pub fn timestep(&self) -> u64 {
        self.t
    }

    /// First moment estimates; empty until the first update
    pub fn first_moment(&self) -> &Array1<f64> {
        &self.m
    }

    /// Second moment estimates; empty until the first update
    pub fn second_moment(&self) -> &Array1<f64> {
        &self.v
    }
}

impl Default for Adam {
    fn default() -> Self {
        Self {
            learning_rate: 0.001,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            m: Array1::zeros(0),
            v: Array1::zeros(0),
            t: 0,
        }
    }
}

impl Optimizer for Adam {
    fn update(&mut self, weights: &mut [f64], gradients: &[f64]) -> Result<(), ModelError> {
        validate_update_lengths(weights, gradients)?;

        if self.m.len() != weights.len() {
            self.m = Array1::zeros(weights.len());
            self.v = Array1::zeros(weights.len());
        }

        self.t += 1;

        let (beta1, beta2) = (self.beta1, self.beta2);
        let (learning_rate, epsilon) = (self.learning_rate, self.epsilon);
        let t = i32::try_from(self.t).unwrap_or(i32::MAX);
        let bias_correction1 = 1.0 - beta1.powi(t);
        let bias_correction2 = 1.0 - beta2.powi(t);

        Zip::from(&mut self.m)
            .and(&mut self.v)
            .and(ArrayViewMut1::from(weights))
            .and(ArrayView1::from(gradients))
            .for_each(|m, v, w, &g| {
                *m = beta1 * *m + (1.0 - beta1) * g;
                *v = beta2 * *v + (1.0 - beta2) * g * g;
                let m_hat = *m / bias_correction1;
                let v_hat = *v / bias_correction2;
                *w -= learning_rate * m_hat / (v_hat.sqrt() + epsilon);
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
        "Adam"
    }
}
