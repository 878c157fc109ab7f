//! Flight summary derivation tests

use kinesim_core::tests::test_helpers::{approx_eq, simulate_case};
use kinesim_core::FlightSummary;

#[test]
fn test_apex_is_the_highest_sample() {
    let trajectory = simulate_case(20.0, 45.0, 0.0, 0.0).expect("simulation failed");
    let summary = FlightSummary::from_trajectory(&trajectory).expect("empty trajectory");

    assert_eq!(summary.max_height, summary.apex.y);
    for p in trajectory.iter() {
        assert!(p.y <= summary.apex.y);
    }
}

#[test]
fn test_impact_is_the_terminal_sample() {
    let trajectory = simulate_case(20.0, 45.0, 0.0, 0.0).expect("simulation failed");
    let summary = FlightSummary::from_trajectory(&trajectory).expect("empty trajectory");

    assert_eq!(summary.impact, trajectory.last().unwrap());
    assert!(summary.impact.y <= 0.0);
}

#[test]
fn test_range_is_measured_from_the_launch_x() {
    // Shifting the launch point horizontally must not change the range
    let origin = simulate_case(20.0, 45.0, 0.0, 0.0).expect("simulation failed");
    let shifted = simulate_case(20.0, 45.0, 100.0, 0.0).expect("simulation failed");

    let origin_summary = FlightSummary::from_trajectory(&origin).unwrap();
    let shifted_summary = FlightSummary::from_trajectory(&shifted).unwrap();

    assert!(approx_eq(origin_summary.range, shifted_summary.range, 1e-9));
}

#[test]
fn test_vertical_launch_has_zero_range() {
    let trajectory = simulate_case(15.0, 90.0, 0.0, 0.0).expect("simulation failed");
    let summary = FlightSummary::from_trajectory(&trajectory).expect("empty trajectory");

    assert!(approx_eq(summary.range, 0.0, 1e-9));
}

#[test]
fn test_time_of_flight_counts_all_samples() {
    let trajectory = simulate_case(20.0, 45.0, 0.0, 0.0).expect("simulation failed");
    let summary = FlightSummary::from_trajectory(&trajectory).expect("empty trajectory");

    assert_eq!(
        summary.time_of_flight,
        trajectory.len() as f64 * trajectory.dt()
    );
}

#[test]
fn test_flat_elevated_launch_peaks_at_the_launch_height() {
    // theta = 0 from a ledge: y only ever decreases, so the apex is the
    // launch point itself
    let trajectory = simulate_case(10.0, 0.0, 0.0, 10.0).expect("simulation failed");
    let summary = FlightSummary::from_trajectory(&trajectory).expect("empty trajectory");

    assert_eq!(summary.max_height, 10.0);
    assert_eq!(summary.apex, trajectory.first().unwrap());
}
