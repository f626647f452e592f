//! Serialization of solved systems (requires the `serde` feature)
#![cfg(feature = "serde")]

use echelon::prelude::*;
use echelon::present::PresentMode;

mod common;

#[test]
fn test_solution_json_shape() {
    let solution = solve(common::no_solution());
    let json = serde_json::to_value(&solution).unwrap();

    assert_eq!(json["classification"], "NoSolution");
    assert_eq!(json["trace"]["marker"], "NoSolution");
    assert_eq!(json["trace"]["steps"][0]["description"], "Use R1 to eliminate column.");
    assert_eq!(json["matrix"].as_array().unwrap().len(), 4);
    assert_eq!(json["matrix"][3], serde_json::json!([0.0, 0.0, 0.0, 1496.0]));
}

#[test]
fn test_solution_round_trip() {
    let solution = solve(common::unique_with_swap());
    let json = serde_json::to_string(&solution).unwrap();
    let back: Solution<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);
}

#[test]
fn test_mode_is_lowercase() {
    assert_eq!(serde_json::to_string(&PresentMode::Source).unwrap(), "\"source\"");
}

#[test]
fn test_matrix_rejects_malformed_shapes() {
    let ragged = serde_json::from_str::<Matrix<f64>>("[[1.0, 2.0, 3.0], [4.0, 5.0]]");
    assert!(ragged.unwrap_err().to_string().contains("Ragged row 2"));

    let narrow = serde_json::from_str::<Matrix<f64>>("[[1.0], [2.0]]");
    assert!(narrow.unwrap_err().to_string().contains("Too few columns"));

    let empty = serde_json::from_str::<Matrix<f64>>("[]");
    assert!(empty.unwrap_err().to_string().contains("Empty matrix"));

    // The old struct layout is no longer accepted
    let raw = serde_json::from_str::<Matrix<f64>>(r#"{"data":[1.0,2.0],"rows":3,"cols":2}"#);
    assert!(raw.is_err());
}

#[test]
fn test_malformed_snapshot_rejects_whole_solution() {
    let solution = solve(common::infinite());
    let mut json = serde_json::to_value(&solution).unwrap();
    json["trace"]["steps"][0]["snapshot"][1] = serde_json::json!([0.0]);

    assert!(serde_json::from_value::<Solution<f64>>(json).is_err());
}
