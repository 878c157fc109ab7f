use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Initial conditions for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters {
    /// Initial speed, m/s
    pub v0: f64,
    /// Launch angle in degrees from horizontal, [0, 90]
    pub theta_deg: f64,
    /// Initial x position, meters
    pub x0: f64,
    /// Initial y position, meters
    pub y0: f64,
}

impl LaunchParameters {
    pub fn new(v0: f64, theta_deg: f64, x0: f64, y0: f64) -> Self {
        Self {
            v0,
            theta_deg,
            x0,
            y0,
        }
    }

    /// Decompose the launch speed into horizontal and vertical components
    pub fn velocity_components(&self) -> DVec2 {
        let theta = self.theta_deg.to_radians();
        DVec2::new(self.v0 * theta.cos(), self.v0 * theta.sin())
    }
}

/// Ordered flight positions; sample `i` was taken at time `i * dt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<DVec2>,
    dt: f64,
}

impl Trajectory {
    pub(crate) fn new(dt: f64) -> Self {
        Self {
            points: Vec::new(),
            dt,
        }
    }

    pub(crate) fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    /// The integration step this trajectory was produced with, seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<DVec2> {
        self.points.get(index).copied()
    }

    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// Simulated time of sample `index`
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    /// Playback interval between animation frames, one sample per frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.dt)
    }

    /// Frames for step-by-step playback: each sample paired with its instant
    pub fn frames(&self) -> impl Iterator<Item = (Duration, DVec2)> + '_ {
        let dt = self.dt;
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (Duration::from_secs_f64(i as f64 * dt), *p))
    }
}
