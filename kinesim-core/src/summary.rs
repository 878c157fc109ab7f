//! Scalar observables extracted from a finished trajectory.

use crate::trajectory::Trajectory;
use glam::DVec2;

/// Headline numbers and marker positions for one flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSummary {
    /// Highest y reached over the flight, meters
    pub max_height: f64,
    /// Horizontal distance covered from the launch point, meters
    pub range: f64,
    /// Simulated time from launch to ground impact, seconds
    pub time_of_flight: f64,
    /// Position of the highest sample
    pub apex: DVec2,
    /// Terminal sample, the first with `y <= 0`
    pub impact: DVec2,
}

impl FlightSummary {
    /// Derive the summary from a trajectory; `None` only for an empty one
    pub fn from_trajectory(trajectory: &Trajectory) -> Option<FlightSummary> {
        let first = trajectory.first()?;
        let impact = trajectory.last()?;

        let mut apex = first;
        let mut max_x = first.x;
        for p in trajectory.iter() {
            if p.y > apex.y {
                apex = p;
            }
            if p.x > max_x {
                max_x = p.x;
            }
        }

        Some(FlightSummary {
            max_height: apex.y,
            range: max_x - first.x,
            time_of_flight: trajectory.len() as f64 * trajectory.dt(),
            apex,
            impact,
        })
    }
}
