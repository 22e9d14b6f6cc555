//! geoscape-run: headless geoscape driver.
//!
//! Usage:
//!   geoscape-run run scenarios/north_atlantic.toml --save-dir saves --slot day1
//!   geoscape-run resume --save-dir saves --slot day1 --duration 43200
//!   geoscape-run list --save-dir saves

use std::path::{Path, PathBuf};
use std::process;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use geoscape_campaign::{from_save_data, list_saves, load_from_file, save_to_file, to_save_data};
use geoscape_core::commands::GeoscapeCommand;
use geoscape_core::enums::ClockState;
use geoscape_core::events::GeoscapeEvent;
use geoscape_sim::scenario::{RunSettings, Scenario};
use geoscape_sim::GeoscapeEngine;

const DEFAULT_FILTER: &str = "geoscape_sim=info,geoscape_campaign=info,geoscape_run=info";

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "resume" => cmd_resume(&args[2..]),
        "list" => cmd_list(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        error!(%err, "geoscape-run failed");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "geoscape-run: headless geoscape radar simulation\n\
         \n\
         Commands:\n\
         \n\
         run <scenario.toml>   Build the scenario and run its clock\n\
         \n\
           --save-dir <dir>    Write a save slot when the run ends (optional)\n\
           --slot <name>       Slot name (default: autosave)\n\
           --snapshot <path>   Write the final snapshot as JSON (optional)\n\
         \n\
         resume                Continue a saved campaign\n\
         \n\
           --save-dir <dir>    Save directory\n\
           --slot <name>       Slot to load and overwrite (default: autosave)\n\
           --duration <secs>   Simulated seconds to run (default: 86400)\n\
           --step <secs>       Seconds per tick (default: 1800)\n\
         \n\
         list                  List saves, newest first\n\
         \n\
           --save-dir <dir>    Save directory\n\
         \n\
         Logging follows RUST_LOG (default: {DEFAULT_FILTER}).\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_secs(args: &[String], flag: &str, default: f64) -> Result<f64, String> {
    match flag_value(args, flag) {
        None => Ok(default),
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
            _ => Err(format!("{flag} expects a positive number of seconds, got {raw}")),
        },
    }
}

fn require_save_dir(args: &[String]) -> Result<PathBuf, String> {
    flag_value(args, "--save-dir")
        .map(PathBuf::from)
        .ok_or_else(|| "--save-dir <dir> is required".to_string())
}

// --- Run command ---

fn cmd_run(args: &[String]) -> Result<(), String> {
    let Some(path) = args.first().filter(|a| !a.starts_with("--")) else {
        return Err("run needs a scenario file".to_string());
    };
    let scenario = Scenario::load(Path::new(path)).map_err(|e| e.to_string())?;
    let mut engine = scenario.build_engine().map_err(|e| e.to_string())?;

    run_clock(&mut engine, &scenario.run);

    if let Some(snapshot_path) = flag_value(args, "--snapshot") {
        let json = serde_json::to_string_pretty(&engine.snapshot()).map_err(|e| e.to_string())?;
        std::fs::write(snapshot_path, json).map_err(|e| e.to_string())?;
        info!(path = snapshot_path, "snapshot written");
    }
    if let Some(dir) = flag_value(args, "--save-dir") {
        let slot = flag_value(args, "--slot").unwrap_or("autosave");
        save(&engine, Path::new(dir), slot)?;
    }
    Ok(())
}

// --- Resume command ---

fn cmd_resume(args: &[String]) -> Result<(), String> {
    let dir = require_save_dir(args)?;
    let slot = flag_value(args, "--slot").unwrap_or("autosave");
    let defaults = RunSettings::default();
    let settings = RunSettings {
        duration_secs: parse_secs(args, "--duration", defaults.duration_secs)?,
        step_secs: parse_secs(args, "--step", defaults.step_secs)?,
    };

    let data = load_from_file(&dir, slot).map_err(|e| e.to_string())?;
    let mut engine = from_save_data(data).map_err(|e| e.to_string())?;
    run_clock(&mut engine, &settings);
    save(&engine, &dir, slot)
}

// --- List command ---

fn cmd_list(args: &[String]) -> Result<(), String> {
    let dir = require_save_dir(args)?;
    let saves = list_saves(&dir);
    if saves.is_empty() {
        println!("no saves in {}", dir.display());
    }
    for save in saves {
        println!(
            "{:<16} day {:>4}  {:>3} sites  {:>3} contacts  saved at {}",
            save.slot_name, save.day, save.sites, save.contacts, save.timestamp
        );
    }
    Ok(())
}

fn save(engine: &GeoscapeEngine, dir: &Path, slot: &str) -> Result<(), String> {
    save_to_file(dir, slot, &to_save_data(engine, slot)).map_err(|e| e.to_string())
}

/// Tick the engine through `settings`, resuming whenever a new contact halts the clock.
fn run_clock(engine: &mut GeoscapeEngine, settings: &RunSettings) {
    let steps = (settings.duration_secs / settings.step_secs).ceil().max(0.0) as u64;
    let mut detections = 0;

    for _ in 0..steps {
        let snapshot = engine.tick(settings.step_secs);
        for event in &snapshot.events {
            if matches!(event, GeoscapeEvent::ContactDetected { .. }) {
                detections += 1;
            }
            log_event(event);
        }
        if snapshot.clock == ClockState::Paused {
            engine.queue_command(GeoscapeCommand::Resume);
        }
    }

    let snapshot = engine.snapshot();
    let tracked = snapshot
        .contacts
        .iter()
        .filter(|c| snapshot.radars.iter().any(|r| r.sensored.contains(&c.id)))
        .count();
    info!(
        day = snapshot.time.day(),
        passes = snapshot.time.detection_passes,
        contacts = snapshot.contacts.len(),
        tracked,
        detections,
        "run finished"
    );
}

fn log_event(event: &GeoscapeEvent) {
    match event {
        GeoscapeEvent::ContactDetected {
            contact,
            position,
            sensored_by,
        } => info!(%contact, %position, radars = sensored_by.len(), "ufo detected"),
        GeoscapeEvent::ContactLost { contact } => info!(%contact, "ufo lost"),
        GeoscapeEvent::ContactArrived { contact } => info!(%contact, "ufo reached destination"),
        GeoscapeEvent::ContactRemoved { contact, destroyed } => {
            info!(%contact, destroyed, "ufo left geoscape")
        }
        GeoscapeEvent::ClockHalted { contact } => {
            warn!(%contact, "clock halted on new contact, resuming")
        }
        GeoscapeEvent::AircraftLanded { site } => info!(%site, "aircraft landed"),
        GeoscapeEvent::RadarOverlayEnabled
        | GeoscapeEvent::RadarOverlayDisabled
        | GeoscapeEvent::StaticCoverageRebuilt => debug!(?event, "display"),
    }
}
