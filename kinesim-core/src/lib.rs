pub mod persist;
pub mod simulator;
pub mod summary;
pub mod trajectory;

pub use persist::{export_csv, export_csv_path, load_json, save_json, PersistError, SavedRun};
pub use simulator::{SimulationError, Simulator, DEFAULT_DT, DEFAULT_GRAVITY, MAX_STEPS};
pub use summary::FlightSummary;
pub use trajectory::{LaunchParameters, Trajectory};
