//! Fixed-step projectile integration under gravity with optional linear drag.

use crate::trajectory::{LaunchParameters, Trajectory};
use glam::DVec2;
use thiserror::Error;

/// Standard gravitational acceleration, m/s^2
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Default integration step, seconds
pub const DEFAULT_DT: f64 = 0.01;

/// Hard bound on integration steps for one run
pub const MAX_STEPS: usize = 10_000_000;

/// Error raised when a simulation cannot run
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
    #[error("projectile did not reach the ground within {steps} steps")]
    StepLimitExceeded { steps: usize },
}

impl SimulationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Projectile simulator owning the physical constants
///
/// The fields are plain and mutable between runs; `simulate` reads them for
/// the whole duration of one call, so a shared instance must not be
/// reconfigured while a call is in flight.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Gravitational acceleration magnitude, m/s^2 (must be positive)
    pub gravity: f64,
    /// Linear drag coefficient; zero disables drag entirely
    pub drag_coeff: f64,
    /// Integration time step, seconds (must be positive)
    pub dt: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            drag_coeff: 0.0,
            dt: DEFAULT_DT,
        }
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check configuration and launch parameters before integrating
    fn validate(&self, params: &LaunchParameters) -> Result<(), SimulationError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SimulationError::invalid(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !self.drag_coeff.is_finite() || self.drag_coeff < 0.0 {
            return Err(SimulationError::invalid(format!(
                "drag coefficient cannot be negative, got {}",
                self.drag_coeff
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::invalid(format!(
                "time step must be positive, got {}",
                self.dt
            )));
        }
        if !params.v0.is_finite() || params.v0 <= 0.0 {
            return Err(SimulationError::invalid(format!(
                "initial velocity must be positive, got {}",
                params.v0
            )));
        }
        if !params.theta_deg.is_finite() || !(0.0..=90.0).contains(&params.theta_deg) {
            return Err(SimulationError::invalid(format!(
                "launch angle must be within [0, 90] degrees, got {}",
                params.theta_deg
            )));
        }
        if !params.x0.is_finite() {
            return Err(SimulationError::invalid(format!(
                "initial x position must be finite, got {}",
                params.x0
            )));
        }
        if !params.y0.is_finite() || params.y0 < 0.0 {
            return Err(SimulationError::invalid(format!(
                "initial height cannot be negative, got {}",
                params.y0
            )));
        }
        Ok(())
    }

    /// Integrate the flight path from launch until ground impact
    ///
    /// Semi-implicit Euler with a fixed step: velocities are updated first
    /// (drag, then gravity), positions advance with the new velocities. The
    /// trajectory starts at `(x0, y0)` and ends at the first stepped sample
    /// with `y <= 0`; no interpolation back to the exact zero crossing.
    pub fn simulate(&self, params: &LaunchParameters) -> Result<Trajectory, SimulationError> {
        self.validate(params)?;

        let mut vel = params.velocity_components();
        let mut pos = DVec2::new(params.x0, params.y0);

        let mut trajectory = Trajectory::new(self.dt);
        trajectory.push(pos);

        for _ in 0..MAX_STEPS {
            // Linear-in-component drag, applied before gravity
            if self.drag_coeff > 0.0 {
                vel -= vel * self.drag_coeff * self.dt;
            }
            vel.y -= self.gravity * self.dt;
            pos += vel * self.dt;
            trajectory.push(pos);

            if pos.y <= 0.0 {
                return Ok(trajectory);
            }
        }

        Err(SimulationError::StepLimitExceeded { steps: MAX_STEPS })
    }
}
