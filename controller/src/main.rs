mod batch;
mod csv_writer;

use anyhow::{bail, Context, Result};
use batch::{evaluate_request, TimingRequest};
use csv_writer::write_timing_csv;
use fuzzy::{FuzzyEngine, InferenceMode, SegmentReading};
use log::info;
use std::env;
use std::fs;

fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    info!("Signal timing controller starting...");

    let args: Vec<String> = env::args().collect();

    let mode = match args.iter().find_map(|arg| arg.strip_prefix("--mode=")) {
        Some("weighted") => InferenceMode::WeightedSum,
        Some("mamdani") | None => InferenceMode::Mamdani,
        Some(other) => bail!("unknown mode '{other}', expected 'mamdani' or 'weighted'"),
    };

    let mut request = match args.iter().find_map(|arg| arg.strip_prefix("--input=")) {
        Some(path) => {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read request {path}"))?;
            serde_json::from_str(&contents).with_context(|| format!("parse request {path}"))?
        }
        None => demo_request(),
    };

    if args.contains(&"--emergency".to_string()) {
        request.emergency = true;
    }

    info!("Running {} inference for {} segments", mode, request.segments.len());

    let engine = FuzzyEngine::new(mode);
    let mut rng = rand::thread_rng();
    let report = evaluate_request(&engine, &request, &mut rng)?;

    let filename = write_timing_csv(&request, &report, mode)?;
    if !filename.is_empty() {
        info!("CSV report: {}", filename);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// Sample intersection: one congested approach, one stalled, one clear, one
// gridlocked. Used when no request file is given.
fn demo_request() -> TimingRequest {
    TimingRequest {
        segments: vec![
            SegmentReading { density: 100.0, speed: 35.0, wait: 75.0, incidents: 3.0 },
            SegmentReading { density: 150.0, speed: 20.0, wait: 110.0, incidents: 1.0 },
            SegmentReading { density: 30.0, speed: 60.0, wait: 10.0, incidents: 0.0 },
            SegmentReading { density: 200.0, speed: 5.0, wait: 140.0, incidents: 5.0 },
        ],
        emergency: false,
    }
}
