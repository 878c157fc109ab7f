use clap::{Args, Parser, Subcommand};
use kinesim_core::{
    export_csv_path, load_json, save_json, FlightSummary, LaunchParameters, SavedRun, Simulator,
    Trajectory,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kinesim")]
#[command(about = "Kinesim - a projectile motion simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the flight summary
    Simulate(SimulateArgs),
    /// Print the flight summary of a saved run
    Summary {
        /// Path to a saved run (JSON)
        file: PathBuf,
    },
    /// Export a saved run as (time, x, y) CSV rows
    Export {
        /// Path to a saved run (JSON)
        file: PathBuf,
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct SimulateArgs {
    /// Initial speed in m/s
    #[arg(short, long)]
    velocity: f64,
    /// Launch angle in degrees from horizontal
    #[arg(short, long)]
    angle: f64,
    /// Initial x position in meters
    #[arg(long, default_value_t = 0.0)]
    x0: f64,
    /// Initial y position in meters
    #[arg(long, default_value_t = 0.0)]
    y0: f64,
    /// Gravitational acceleration in m/s^2
    #[arg(long, default_value_t = kinesim_core::DEFAULT_GRAVITY)]
    gravity: f64,
    /// Linear drag coefficient (zero disables drag)
    #[arg(long, default_value_t = 0.0)]
    drag: f64,
    /// Integration time step in seconds
    #[arg(long, default_value_t = kinesim_core::DEFAULT_DT)]
    dt: f64,
    /// Print every trajectory sample
    #[arg(long)]
    points: bool,
    /// Save the run to a JSON file
    #[arg(long)]
    save: Option<PathBuf>,
    /// Export (time, x, y) rows to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate(args) => run_simulate(args),
        Commands::Summary { file } => run_summary(&file),
        Commands::Export { file, output } => run_export(&file, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_simulate(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sim = Simulator {
        gravity: args.gravity,
        drag_coeff: args.drag,
        dt: args.dt,
    };
    let params = LaunchParameters::new(args.velocity, args.angle, args.x0, args.y0);
    let trajectory = sim.simulate(&params)?;

    if args.points {
        for p in trajectory.iter() {
            println!("({:.2}, {:.2})", p.x, p.y);
        }
    }
    print_summary(&trajectory);

    if let Some(path) = &args.save {
        let run = SavedRun {
            params,
            gravity: sim.gravity,
            drag_coeff: sim.drag_coeff,
            trajectory: trajectory.clone(),
        };
        save_json(&run, path)?;
        println!("Saved run to {}", path.display());
    }

    if let Some(path) = &args.csv {
        export_csv_path(&trajectory, path)?;
        println!("Exported CSV to {}", path.display());
    }

    Ok(())
}

fn run_summary(file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let run = load_json(file)?;

    println!(
        "launch: v0 = {} m/s, angle = {} deg, from ({}, {})",
        run.params.v0, run.params.theta_deg, run.params.x0, run.params.y0
    );
    println!(
        "config: gravity = {} m/s^2, drag = {}",
        run.gravity, run.drag_coeff
    );
    print_summary(&run.trajectory);

    Ok(())
}

fn run_export(file: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let run = load_json(file)?;
    export_csv_path(&run.trajectory, output)?;
    println!(
        "Exported {} samples to {}",
        run.trajectory.len(),
        output.display()
    );
    Ok(())
}

fn print_summary(trajectory: &Trajectory) {
    if let Some(summary) = FlightSummary::from_trajectory(trajectory) {
        println!("max height     = {:.2} m", summary.max_height);
        println!("range          = {:.2} m", summary.range);
        println!("time of flight = {:.3} s", summary.time_of_flight);
        println!(
            "apex           = ({:.2}, {:.2})",
            summary.apex.x, summary.apex.y
        );
        println!(
            "impact         = ({:.2}, {:.2})",
            summary.impact.x, summary.impact.y
        );
    }
}
