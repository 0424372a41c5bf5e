//! Euler-integrated Lorenz attractors with fixed parameter sets.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Parameters of one Lorenz system: `(gamma, theta, beta, delta_t)`.
///
/// `gamma` is the Prandtl number σ, `theta` the Rayleigh number ρ and
/// `delta_t` the Euler step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    pub gamma: f64,
    pub theta: f64,
    pub beta: f64,
    pub delta_t: f64,
}

const fn params(gamma: f64, theta: f64, beta: f64, delta_t: f64) -> LorenzParams {
    LorenzParams {
        gamma,
        theta,
        beta,
        delta_t,
    }
}

/// The twenty chaotic configurations used by the key stream, in seeding order.
pub const LORENZ_PARAMS: [LorenzParams; 20] = [
    params(6.59, 11.786, 18.221, 0.095),
    params(6.828, 9.165, 15.026, 0.114),
    params(0.809, 18.829, 8.121, 0.099),
    params(8.474, 10.71, 18.602, 0.092),
    params(7.922, 5.877, 3.537, 0.158),
    params(3.715, 10.253, 15.055, 0.119),
    params(6.526, 4.926, 14.138, 0.15),
    params(0.64, 10.369, 7.046, 0.169),
    params(0.857, 7.938, 5.852, 0.222),
    params(16.23, 10.249, 6.669, 0.079),
    params(9.851, 6.467, 14.491, 0.121),
    params(4.118, 13.165, 16.705, 0.098),
    params(7.924, 7.757, 13.565, 0.124),
    params(8.939, 5.713, 2.194, 0.151),
    params(12.286, 14.222, 4.263, 0.041),
    params(8.034, 6.607, 3.268, 0.137),
    params(11.092, 5.897, 2.887, 0.132),
    params(2.675, 5.639, 1.403, 0.181),
    params(4.939, 4.324, 1.923, 0.253),
    params(9.124, 8.905, 17.614, 0.101),
];

/// Coordinates beyond this magnitude are replaced by their reciprocal.
const DIVERGENCE_LIMIT: f64 = 100.0;

/// One Lorenz trajectory.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LorenzAttractor {
    x: f64,
    y: f64,
    z: f64,
    gamma: f64,
    theta: f64,
    beta: f64,
    delta_t: f64,
}

impl LorenzAttractor {
    /// Creates an attractor at the origin with the given parameters.
    pub fn new(params: LorenzParams) -> Self {
        LorenzAttractor {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            gamma: params.gamma,
            theta: params.theta,
            beta: params.beta,
            delta_t: params.delta_t,
        }
    }

    pub fn set_point(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn point(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// One Euler step, folding any coordinate that leaves `[-100, 100]`.
    pub fn step(&mut self) {
        let (xo, yo, zo) = (self.x, self.y, self.z);

        self.x = xo + (self.gamma * (yo - xo)) * self.delta_t;
        self.y = yo + (xo * (self.theta - zo) - yo) * self.delta_t;
        self.z = zo + (xo * yo - self.beta * zo) * self.delta_t;

        for coord in [&mut self.x, &mut self.y, &mut self.z] {
            if coord.abs() > DIVERGENCE_LIMIT {
                *coord = 1.0 / *coord;
            }
        }
    }

    /// Takes `steps` Euler steps.
    pub fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_origin() {
        let attractor = LorenzAttractor::new(LORENZ_PARAMS[0]);
        assert_eq!(attractor.point(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let mut attractor = LorenzAttractor::new(LORENZ_PARAMS[3]);
        attractor.advance(50);
        assert_eq!(attractor.point(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_step_matches_euler_formula() {
        let p = LORENZ_PARAMS[1];
        let mut attractor = LorenzAttractor::new(p);
        attractor.set_point(1.0, 2.0, 3.0);
        attractor.step();
        let x = 1.0 + (p.gamma * (2.0 - 1.0)) * p.delta_t;
        let y = 2.0 + (1.0 * (p.theta - 3.0) - 2.0) * p.delta_t;
        let z = 3.0 + (1.0 * 2.0 - p.beta * 3.0) * p.delta_t;
        assert_eq!(attractor.point(), [x, y, z]);
    }

    #[test]
    fn test_step_deterministic() {
        let mut a = LorenzAttractor::new(LORENZ_PARAMS[7]);
        let mut b = LorenzAttractor::new(LORENZ_PARAMS[7]);
        a.set_point(10.0, -4.0, 22.0);
        b.set_point(10.0, -4.0, 22.0);
        for _ in 0..100 {
            a.step();
            b.step();
            assert_eq!(a.point(), b.point());
        }
    }

    #[test]
    fn test_divergence_folding() {
        let mut attractor = LorenzAttractor::new(LORENZ_PARAMS[0]);
        attractor.set_point(200.0, 200.0, 200.0);
        attractor.step();
        for coord in attractor.point() {
            assert!(coord.abs() <= DIVERGENCE_LIMIT, "coordinate {coord} escaped");
        }
    }

    #[test]
    fn test_parameter_table_is_positive() {
        for p in LORENZ_PARAMS {
            assert!(p.gamma > 0.0 && p.theta > 0.0 && p.beta > 0.0 && p.delta_t > 0.0);
        }
    }
}
