//! Voice QA command-line front end
//!
//! Thin wrapper over [`vqa_engine::Engine`]: reads audio files, runs one
//! engine operation and writes the result to a file or stdout.

pub mod config;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vqa_engine::{Engine, EngineConfig, GenerationParameters, NoiseProfile};

#[derive(Parser, Debug)]
#[command(name = "vqa")]
#[command(about = "Degrade clean speech recordings with realistic noise for ASR testing", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./vqa.toml when present)
    #[arg(short, long, global = true, env = "VQA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fixed RNG seed, overriding the configuration
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List noise profile keys
    Profiles {
        /// Only profiles in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// List noise categories
    Categories,
    /// Show a profile and its generation parameters as JSON
    Profile {
        key: String,
    },
    /// Show difficulty metrics for a profile as JSON
    Metrics {
        key: String,
        /// Also list sweep points at this spacing in dB
        #[arg(long)]
        step: Option<f64>,
    },
    /// Synthesize profile noise to an audio file
    Generate {
        key: String,
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,
        /// Sample rate in Hz (defaults to the configured rate)
        #[arg(short, long)]
        rate: Option<u32>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Mix profile noise into a recording at a target SNR
    Degrade {
        input: PathBuf,
        #[arg(short, long)]
        profile: String,
        #[arg(short, long, allow_hyphen_values = true)]
        snr: f64,
        #[arg(short, long)]
        rate: Option<u32>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Degrade a recording at every point of a profile's recommended SNR range
    Sweep {
        input: PathBuf,
        #[arg(short, long)]
        profile: String,
        #[arg(long, default_value_t = 5.0)]
        step: f64,
        /// Directory for the degraded files
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Add white Gaussian noise at a target SNR (always writes WAV)
    FlatNoise {
        input: PathBuf,
        #[arg(short, long, allow_hyphen_values = true)]
        snr: f64,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Decode to mono PCM at a target rate
    Convert {
        input: PathBuf,
        #[arg(short, long)]
        rate: Option<u32>,
        /// Headerless 16-bit little-endian PCM instead of a container
        #[arg(long)]
        raw: bool,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Check whether a file decodes as audio
    Validate {
        input: PathBuf,
    },
    /// Print the duration of an audio file in seconds
    Duration {
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct ProfileReport<'a> {
    #[serde(flatten)]
    profile: &'a NoiseProfile,
    parameters: GenerationParameters,
}

/// Load configuration and apply command-line overrides
pub fn build_engine(cli: &Cli) -> anyhow::Result<Engine> {
    let mut config: EngineConfig = config::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(Engine::new(config)?)
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Run one command against `engine`, writing text results to `out`
pub fn run<W: Write>(engine: &Engine, command: Commands, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Profiles { category } => {
            for key in engine.list_noise_profiles(category.as_deref()) {
                writeln!(out, "{}", key)?;
            }
        }
        Commands::Categories => {
            for category in engine.list_noise_categories() {
                writeln!(out, "{}", category)?;
            }
        }
        Commands::Profile { key } => {
            let profile = engine.get_noise_profile(&key);
            if profile.is_unknown() {
                warn!(key = %key, "profile not in catalog, showing placeholder");
            }
            let report = ProfileReport {
                profile,
                parameters: engine.get_profile_parameters(&key),
            };
            print_json(out, &report)?;
        }
        Commands::Metrics { key, step } => {
            let metrics = engine.get_profile_metrics(&key);
            match step {
                Some(step) => {
                    let points = engine.sweep_points(&key, step)?;
                    let mut value = serde_json::to_value(&metrics)?;
                    value["sweep_points"] = serde_json::to_value(points)?;
                    print_json(out, &value)?;
                }
                None => print_json(out, &metrics)?,
            }
        }
        Commands::Generate {
            key,
            duration,
            rate,
            output,
        } => {
            let noise = engine.generate_noise(&key, duration, rate)?;
            write_output(&output, &engine.encode_signal(&noise, rate)?)?;
        }
        Commands::Degrade {
            input,
            profile,
            snr,
            rate,
            output,
        } => {
            let clean = engine.decode_signal(&read_input(&input)?, rate)?;
            let rate = Some(clean.sample_rate.as_hz());
            let degraded = engine.apply_profile_noise(&clean.samples, &profile, snr, rate)?;
            write_output(&output, &engine.encode_signal(&degraded, rate)?)?;
        }
        Commands::Sweep {
            input,
            profile,
            step,
            output,
        } => {
            let clean = engine.decode_signal(&read_input(&input)?, None)?;
            let rate = Some(clean.sample_rate.as_hz());
            fs::create_dir_all(&output)
                .with_context(|| format!("failed to create {}", output.display()))?;

            let extension = engine.output_format().extension();
            for (snr, degraded) in engine.degrade_sweep(&clean.samples, &profile, step, rate)? {
                let path = output.join(format!("{}_{:+}db.{}", profile, snr, extension));
                write_output(&path, &engine.encode_signal(&degraded, rate)?)?;
                writeln!(out, "{}", path.display())?;
            }
        }
        Commands::FlatNoise { input, snr, output } => {
            let noisy = engine.add_flat_noise(&read_input(&input)?, snr)?;
            write_output(&output, &noisy)?;
        }
        Commands::Convert {
            input,
            rate,
            raw,
            output,
        } => {
            let bytes = engine.decode_to_pcm(&read_input(&input)?, rate, raw)?;
            write_output(&output, &bytes)?;
        }
        Commands::Validate { input } => {
            let valid = engine.is_valid_audio(&read_input(&input)?);
            writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
            if !valid {
                bail!("{} is not valid audio", input.display());
            }
        }
        Commands::Duration { input } => {
            let seconds = engine.duration_seconds(&read_input(&input)?)?;
            writeln!(out, "{:.3}", seconds)?;
        }
    }
    Ok(())
}
