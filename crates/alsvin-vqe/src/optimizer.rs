//! Classical optimizer for the variational loop.
//!
//! Gradients come from the central parameter-shift rule, which is exact for
//! costs that are trigonometric in each rotation angle (as the layered
//! ansatz is); the update rule is Adam.

use anyhow::Result;
use std::f64::consts::FRAC_PI_2;

/// Adam optimizer over a flat parameter vector.
pub struct AdamOptimizer {
    /// Learning rate.
    step_size: f64,
    /// Exponential decay rate for the first moment.
    beta1: f64,
    /// Exponential decay rate for the second moment.
    beta2: f64,
    /// Division guard.
    epsilon: f64,
    /// Running first-moment estimate.
    first_moment: Vec<f64>,
    /// Running second-moment estimate.
    second_moment: Vec<f64>,
    /// Steps taken, for bias correction.
    step_count: u32,
}

impl AdamOptimizer {
    /// Create a new optimizer with the given step size.
    pub fn new(step_size: f64) -> Self {
        Self {
            step_size,
            beta1: 0.9,
            beta2: 0.99,
            epsilon: 1e-8,
            first_moment: vec![],
            second_moment: vec![],
            step_count: 0,
        }
    }

    /// Set the moment decay rates.
    pub fn with_betas(mut self, beta1: f64, beta2: f64) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    /// Take one optimization step.
    ///
    /// Evaluates the cost at `params`, estimates the gradient with the
    /// parameter-shift rule, and returns the updated parameters together
    /// with the pre-step cost.
    pub fn step_and_cost<F>(&mut self, mut cost: F, params: &[f64]) -> Result<(Vec<f64>, f64)>
    where
        F: FnMut(&[f64]) -> Result<f64>,
    {
        let previous_cost = cost(params)?;
        let gradient = parameter_shift_gradient(&mut cost, params)?;

        if self.first_moment.len() != params.len() {
            self.first_moment = vec![0.0; params.len()];
            self.second_moment = vec![0.0; params.len()];
            self.step_count = 0;
        }
        self.step_count += 1;
        let t = f64::from(self.step_count);

        let mut next = Vec::with_capacity(params.len());
        for (i, (&p, &g)) in params.iter().zip(&gradient).enumerate() {
            self.first_moment[i] = self.beta1 * self.first_moment[i] + (1.0 - self.beta1) * g;
            self.second_moment[i] = self.beta2 * self.second_moment[i] + (1.0 - self.beta2) * g * g;

            let m_hat = self.first_moment[i] / (1.0 - self.beta1.powf(t));
            let v_hat = self.second_moment[i] / (1.0 - self.beta2.powf(t));

            next.push(p - self.step_size * m_hat / (v_hat.sqrt() + self.epsilon));
        }

        Ok((next, previous_cost))
    }
}

/// Central parameter-shift gradient of `cost` at `params`.
///
/// Each component is (f(θ + π/2·eᵢ) − f(θ − π/2·eᵢ)) / 2, i.e. two cost
/// evaluations per parameter.
pub fn parameter_shift_gradient<F>(cost: &mut F, params: &[f64]) -> Result<Vec<f64>>
where
    F: FnMut(&[f64]) -> Result<f64>,
{
    let mut gradient = Vec::with_capacity(params.len());
    let mut shifted = params.to_vec();

    for i in 0..params.len() {
        let original = shifted[i];

        shifted[i] = original + FRAC_PI_2;
        let plus = cost(&shifted)?;

        shifted[i] = original - FRAC_PI_2;
        let minus = cost(&shifted)?;

        shifted[i] = original;
        gradient.push((plus - minus) / 2.0);
    }

    Ok(gradient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_parameter_shift_gradient_of_cosine() {
        // d/dθ cos(θ) = -sin(θ), exactly recovered by the shift rule.
        let mut cost = |p: &[f64]| Ok(p[0].cos());

        let grad = parameter_shift_gradient(&mut cost, &[FRAC_PI_2]).unwrap();
        assert_relative_eq!(grad[0], -1.0, epsilon = 1e-12);

        let grad = parameter_shift_gradient(&mut cost, &[0.0]).unwrap();
        assert_relative_eq!(grad[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gradient_is_per_component() {
        let mut cost = |p: &[f64]| Ok(p[0].cos() + p[1].sin());
        let grad = parameter_shift_gradient(&mut cost, &[0.0, 0.0]).unwrap();
        assert_relative_eq!(grad[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(grad[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_returns_pre_step_cost() {
        let mut optimizer = AdamOptimizer::new(0.1);
        let (_, cost) = optimizer
            .step_and_cost(|p: &[f64]| Ok(p[0].cos()), &[0.5])
            .unwrap();
        assert_relative_eq!(cost, 0.5_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_adam_minimizes_cosine() {
        // cos(θ) has its minimum -1 at θ = ±π.
        let mut optimizer = AdamOptimizer::new(0.1).with_betas(0.9, 0.99);
        let mut params = vec![1.0];

        for _ in 0..200 {
            let (next, _) = optimizer
                .step_and_cost(|p: &[f64]| Ok(p[0].cos()), &params)
                .unwrap();
            params = next;
        }

        assert!(
            (params[0].abs() - PI).abs() < 0.1,
            "expected θ near ±π, got {}",
            params[0]
        );
        assert!(params[0].cos() < -0.995);
    }

    #[test]
    fn test_cost_errors_propagate() {
        let mut optimizer = AdamOptimizer::new(0.1);
        let result = optimizer.step_and_cost(|_: &[f64]| anyhow::bail!("backend down"), &[0.0]);
        assert!(result.is_err());
    }
}
