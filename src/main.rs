use std::env;
use std::path::PathBuf;

use chrono::Local;
use projectile_lab::core::animator::{LaunchAnimator, LaunchControl, PositionSink, StepResult};
use projectile_lab::core::export::{default_export_path, export_chart};
use projectile_lab::core::kinematics::{
    DEFAULT_GRAVITY_MPS2, KinematicsResult, LaunchParameters, evaluate,
};
use projectile_lab::core::report::ResultsPanel;
use projectile_lab::core::sampler::{SamplerConfig, TrajectorySample, sample_trajectory};
use projectile_lab::core::window::AxisBounds;
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
struct CliOptions {
    params: LaunchParameters,
    animate: bool,
    export_dir: Option<PathBuf>,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut positional = Vec::new();
    let mut animate = false;
    let mut export_dir = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--animate" => animate = true,
            "--export" => {
                let dir = iter
                    .next()
                    .ok_or_else(|| "--export needs a directory.".to_string())?;
                export_dir = Some(PathBuf::from(dir));
            }
            _ => positional.push(arg.as_str()),
        }
    }

    if !(2..=3).contains(&positional.len()) {
        return Err(
            "Expected 2 or 3 arguments: <velocity_mps> <angle_deg> [gravity_mps2].".to_string(),
        );
    }

    let speed_mps = parse_f64(positional[0], "velocity")?;
    if speed_mps < 0.0 {
        return Err("Velocity cannot be negative.".to_string());
    }
    let angle_deg = parse_f64(positional[1], "angle")?;
    let gravity_text = positional.get(2).copied().unwrap_or("");

    Ok(CliOptions {
        params: LaunchParameters::from_inputs(speed_mps, angle_deg, gravity_text),
        animate,
        export_dir,
    })
}

fn print_results(result: &KinematicsResult, samples: usize) {
    println!();
    for (label, value) in ResultsPanel::from_result(result).rows() {
        println!("{label}: {value}");
    }

    let bounds = AxisBounds::for_result(result);
    println!(
        "Trajectory: {samples} points, chart {:.0} m x {:.0} m",
        bounds.max_distance_m, bounds.max_height_m
    );
}

struct ConsoleRenderer {
    frame: u32,
    last_position: Option<TrajectorySample>,
}

impl PositionSink for ConsoleRenderer {
    fn show_position(&mut self, sample: TrajectorySample) {
        if self.frame % 10 == 0 {
            println!(
                "frame {:>3}: x = {:>8.2} m, y = {:>8.2} m",
                self.frame, sample.distance_m, sample.height_m
            );
        }
        self.frame += 1;
        self.last_position = Some(sample);
    }

    fn rest_at(&mut self, sample: TrajectorySample) {
        println!(
            "landed: x = {:.2} m, y = {:.2} m",
            sample.distance_m, sample.height_m
        );
        self.last_position = Some(sample);
    }
}

struct NoControl;

impl LaunchControl for NoControl {
    fn set_launch_enabled(&mut self, _enabled: bool) {}
}

fn animate(samples: &[TrajectorySample]) -> Option<TrajectorySample> {
    let mut animator = LaunchAnimator::new();
    let mut renderer = ConsoleRenderer {
        frame: 0,
        last_position: None,
    };
    let mut control = NoControl;

    let mut token = animator.start(samples.to_vec(), &mut renderer, &mut control);
    while let Some(current) = token {
        token = match animator.step(current, &mut renderer, &mut control) {
            StepResult::Continue(next) => Some(next),
            StepResult::Finished | StepResult::Cancelled => None,
        };
    }
    renderer.last_position
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} <velocity_mps> <angle_deg> [gravity_mps2] [--animate] [--export <dir>]");
    println!();
    println!("Gravity defaults to {DEFAULT_GRAVITY_MPS2} m/s^2 when missing or not a number.");
    println!();
    println!("Examples:");
    println!("  {program} 20 45");
    println!("  {program} 30 60 1.62 --animate --export charts");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let options = parse_args(&args)?;
    info!(params = ?options.params, "evaluating launch");

    let result = evaluate(options.params);
    let samples = sample_trajectory(&result, SamplerConfig::default());
    print_results(&result, samples.len());

    let marker = if options.animate {
        println!();
        animate(&samples)
    } else {
        None
    };

    if let Some(dir) = options.export_dir {
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Could not create '{}': {e}", dir.display()))?;
        let path = default_export_path(&dir, &Local::now());
        export_chart(&path, &samples, AxisBounds::for_result(&result), marker)?;
        println!("\nChart written to {}", path.display());
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
