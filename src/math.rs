use rand::Rng;
use std::ops::RangeInclusive;

/// Default slope used by leaky ReLU for negative inputs.
pub const DEFAULT_LEAKY_RELU_ALPHA: f64 = 0.01;

/// Range that freshly initialized weights and biases are drawn from.
pub const WEIGHT_INIT_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// Computes the logistic sigmoid for a scalar input.
///
/// The sigmoid maps any real number into (0, 1). Inputs beyond ±500 are
/// saturated to exactly 1.0 / 0.0 instead of going through `exp`.
///
/// # Parameters
///
/// - `x` - Input value to transform
///
/// # Returns
///
/// - `f64` - Sigmoid output
///
/// # Examples
/// ```rust
/// use neuralnet::math::sigmoid;
///
/// let value = sigmoid(0.0);
/// assert!((value - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    const MAX_SIGMOID_INPUT: f64 = 500.0;
    const MIN_SIGMOID_INPUT: f64 = -500.0;

    if x > MAX_SIGMOID_INPUT {
        return 1.0;
    } else if x < MIN_SIGMOID_INPUT {
        return 0.0;
    }

    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid evaluated at the raw input `x`: `s(x) * (1 - s(x))`.
#[inline]
pub fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// Rectified linear unit: `max(x, 0)`.
#[inline]
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Derivative of ReLU. The boundary at zero maps to 0.
#[inline]
pub fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

/// Leaky ReLU: `x` for positive inputs, `alpha * x` otherwise.
///
/// # Parameters
///
/// - `x` - Input value
/// - `alpha` - Slope for non-positive inputs (see [`DEFAULT_LEAKY_RELU_ALPHA`])
#[inline]
pub fn leaky_relu(x: f64, alpha: f64) -> f64 {
    if x > 0.0 { x } else { alpha * x }
}

/// Derivative of leaky ReLU: 1 for positive inputs, `alpha` otherwise.
#[inline]
pub fn leaky_relu_derivative(x: f64, alpha: f64) -> f64 {
    if x > 0.0 { 1.0 } else { alpha }
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh evaluated at the raw input `x`: `1 - tanh(x)^2`.
#[inline]
pub fn tanh_derivative(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

/// Applies softmax to `values` in place.
///
/// The maximum is subtracted before exponentiation to keep `exp` from
/// overflowing. An empty slice is left untouched.
///
/// # Parameters
///
/// * `values` - Logits to normalize; overwritten with probabilities summing to 1
///
/// # Examples
/// ```rust
/// use neuralnet::math::softmax;
///
/// let mut values = vec![1.0, 2.0, 3.0];
/// softmax(&mut values);
/// let total: f64 = values.iter().sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// assert!(values[2] > values[1] && values[1] > values[0]);
/// ```
pub fn softmax(values: &mut [f64]) {
    if values.is_empty() {
        return;
    }

    let max_val = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut sum_exp = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max_val).exp();
        sum_exp += *v;
    }

    if sum_exp > 0.0 {
        values.iter_mut().for_each(|v| *v /= sum_exp);
    }
}

/// Draws a single weight uniformly from [`WEIGHT_INIT_RANGE`].
///
/// The generator is borrowed from the caller so that seeded runs stay
/// reproducible and no two components share hidden random state.
///
/// # Parameters
///
/// * `rng` - Random number generator owned by the caller
///
/// # Examples
/// ```rust
/// use neuralnet::math::random_weight;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let w = random_weight(&mut rng);
/// assert!((-1.0..=1.0).contains(&w));
/// ```
#[inline]
pub fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(WEIGHT_INIT_RANGE)
}
