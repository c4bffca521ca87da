#![deny(unsafe_code)]
//! CLI binary for the particle-fields simulation.
//!
//! Subcommands:
//! - `run` : simulate N ticks with fields from the command line, write PNG
//! - `scene <file>` : replay a scene file, write PNG
//! - `params` : print the config schema

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use particle_fields_core::{InputEvent, Scene, ScheduledEvent, SimConfig, Simulation};
use particle_fields_raster::snapshot::write_png;
use particle_fields_raster::RasterSurface;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "particle-fields", about = "Particle fountain bent by gravitational fields")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N ticks and write a PNG of the last frame.
    Run {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of ticks (frames) to simulate.
        #[arg(short, long, default_value_t = 300)]
        ticks: u64,

        /// RNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Place a field before the first tick, as "x,y". Repeatable.
        #[arg(short, long = "field", value_name = "X,Y")]
        fields: Vec<String>,

        /// Mass given to every --field (overrides the config's default_mass).
        #[arg(short, long, allow_negative_numbers = true)]
        mass: Option<f64>,

        /// JSON config file; missing keys keep their defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Also write the equivalent scene file for later replay.
        #[arg(long)]
        save_scene: Option<PathBuf>,
    },
    /// Replay a scene file and write a PNG of the last frame.
    Scene {
        /// Scene JSON file.
        file: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Print the schema of every config parameter.
    Params,
}

/// Parses `"x,y"` into a field placement.
fn parse_field(arg: &str) -> Result<InputEvent, CliError> {
    let bad = || CliError::Input(format!("invalid --field {arg:?}: expected \"x,y\""));
    let (x, y) = arg.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(bad());
    }
    Ok(InputEvent::PlaceField { x, y })
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))
}

fn load_config(path: Option<&Path>) -> Result<SimConfig, CliError> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let value: serde_json::Value = serde_json::from_str(&read_text(path)?)
        .map_err(|e| CliError::Input(format!("invalid config JSON: {e}")))?;
    Ok(SimConfig::from_json(&value)?)
}

/// Plays `scene`, writes the last frame to `output` and reports the result.
fn render_scene(scene: &Scene, output: &Path, json: bool) -> Result<(), CliError> {
    log::info!(
        "simulating {} ticks on {}x{} (seed {}, {} events)",
        scene.ticks,
        scene.width,
        scene.height,
        scene.seed,
        scene.events.len()
    );
    let mut surface = RasterSurface::new(scene.width, scene.height)?;
    let sim: Simulation = scene.play(&mut surface)?;
    write_png(&surface, output)?;

    if json {
        let mut info = sim.summary();
        info["output"] = output.display().to_string().into();
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "simulated {} ticks: {} particles, {} fields -> {}",
            sim.ticks(),
            sim.particles().len(),
            sim.fields().len(),
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Params => {
            println!("{}", serde_json::to_string_pretty(&SimConfig::param_schema())?);
        }
        Command::Run {
            width,
            height,
            ticks,
            seed,
            fields,
            mass,
            config,
            output,
            save_scene,
        } => {
            let mut scene = Scene::new(width, height, seed);
            scene.ticks = ticks;
            scene.config = load_config(config.as_deref())?;
            if let Some(mass) = mass {
                scene.config.default_mass = mass;
            }
            scene.events = fields
                .iter()
                .map(|f| {
                    parse_field(f).map(|event| ScheduledEvent { tick: 0, event })
                })
                .collect::<Result<_, _>>()?;
            scene.validate()?;

            if let Some(path) = save_scene {
                fs::write(&path, serde_json::to_string_pretty(&scene)?)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                log::info!("scene written to {}", path.display());
            }

            render_scene(&scene, &output, cli.json)?;
        }
        Command::Scene { file, output } => {
            let scene = Scene::from_json_str(&read_text(&file)?)?;
            render_scene(&scene, &output, cli.json)?;
        }
    }

    Ok(())
}

/// The message printed to stderr for a fatal error, independent of the log level.
fn error_report(e: &CliError, json: bool) -> String {
    if json {
        let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
        serde_json::to_string_pretty(&j).unwrap_or_default()
    } else {
        format!("error: {e}")
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        eprintln!("{}", error_report(&e, json_mode));
        process::exit(e.exit_code());
    }
}
