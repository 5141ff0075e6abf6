// Integration tests for the binary using assert_cmd.
// These tests shell out the compiled binary and validate observable behavior.

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

const BIN: &str = "ant_forage";

#[test]
fn prints_summary_after_a_short_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "--width", "60",
        "--height", "60",
        "--ticks", "200",
        "--ants", "30",
        "--cap", "60",
        "--seed", "42",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("==="))
        .stdout(contains("Simulation Latency"))
        .stdout(contains("ticks=200"))
        .stdout(contains("food_left="));

    Ok(())
}

#[test]
fn zero_tick_run_reports_initial_state() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "--ticks", "0",
        "--width", "50",
        "--height", "50",
        "-n", "25",
        "--seed", "7",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("ticks=0"))
        .stdout(contains("ants=25"))
        .stdout(contains("deaths=0"));

    Ok(())
}

#[test]
fn same_seed_gives_identical_colony_state() -> Result<(), Box<dyn std::error::Error>> {
    let args = [
        "--width", "60",
        "--height", "60",
        "--ticks", "300",
        "--ants", "40",
        "--seed", "123",
        "--suppress-events",
    ];

    let run = |args: &[&str]| -> Result<String, Box<dyn std::error::Error>> {
        let out = Command::cargo_bin(BIN)?.args(args).output()?;
        let stdout = String::from_utf8(out.stdout)?;
        // drop the timing figure, keep the colony counters
        Ok(stdout
            .split_whitespace()
            .filter(|tok| tok.contains('='))
            .collect::<Vec<_>>()
            .join(" "))
    };

    assert_eq!(run(&args)?, run(&args)?);
    Ok(())
}
