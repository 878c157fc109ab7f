//! Saving, loading, and exporting simulation runs.

use crate::trajectory::{LaunchParameters, Trajectory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// File-level failure while saving, loading, or exporting a run
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed run file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One completed run: the inputs together with the trajectory they produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRun {
    pub params: LaunchParameters,
    pub gravity: f64,
    pub drag_coeff: f64,
    pub trajectory: Trajectory,
}

/// Write a run to a JSON file
pub fn save_json(run: &SavedRun, path: &Path) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(run)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a run back from a JSON file
pub fn load_json(path: &Path) -> Result<SavedRun, PersistError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write `time,x,y` rows, one per trajectory sample
pub fn export_csv<W: Write>(trajectory: &Trajectory, mut out: W) -> Result<(), PersistError> {
    writeln!(out, "time,x,y")?;
    for (i, p) in trajectory.iter().enumerate() {
        writeln!(out, "{:.4},{:.6},{:.6}", trajectory.time_at(i), p.x, p.y)?;
    }
    Ok(())
}

/// Export CSV rows to a file
pub fn export_csv_path(trajectory: &Trajectory, path: &Path) -> Result<(), PersistError> {
    let file = fs::File::create(path)?;
    export_csv(trajectory, io::BufWriter::new(file))
}
