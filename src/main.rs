//! Entrain CLI - render and inspect entrainment sessions.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use entrain::analysis;
use entrain::buffer;
use entrain::SessionRenderer;

#[derive(Parser)]
#[command(name = "entrain")]
#[command(about = "Brainwave entrainment session synthesizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a session to a WAV file
    Render {
        /// Session mode: focus, relax, sleep, or meditate
        #[arg(short, long, default_value = "focus")]
        mode: String,

        /// Session length in seconds (10-600)
        #[arg(short, long, default_value = "60")]
        duration: u32,

        /// Output WAV path (default: <mode>_session.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze a rendered WAV file
    Analyze {
        /// WAV file to inspect
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            mode,
            duration,
            output,
        } => {
            // Same bound the delivery layer enforces on session requests.
            if !(10..=600).contains(&duration) {
                eprintln!("duration must be between 10 and 600 seconds");
                std::process::exit(1);
            }

            let output = output.unwrap_or_else(|| PathBuf::from(format!("{mode}_session.wav")));
            let renderer = SessionRenderer::new();
            match renderer.render(&mode, duration) {
                Ok(bytes) => {
                    if let Err(e) = std::fs::write(&output, &bytes) {
                        eprintln!("failed to write {}: {e}", output.display());
                        std::process::exit(1);
                    }
                    println!(
                        "Rendered {duration} s {mode} session to {} ({} bytes)",
                        output.display(),
                        bytes.len()
                    );
                }
                Err(e) => {
                    eprintln!("render failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Analyze { file } => {
            if let Err(e) = analyze(&file) {
                eprintln!("Error analyzing {}: {e}", file.display());
                std::process::exit(2);
            }
        }
    }
}

fn analyze(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().map(|s| s.unwrap_or(0.0)).collect(),
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.unwrap_or(0) as f32 / max_val)
                .collect()
        }
    };

    // Mix down to mono for analysis.
    let mono: Vec<f32> = if spec.channels > 1 {
        samples
            .chunks(spec.channels as usize)
            .map(|frame| frame.iter().sum::<f32>() / spec.channels as f32)
            .collect()
    } else {
        samples
    };

    let frames = mono.len();
    let secs = frames as f32 / spec.sample_rate as f32;
    let mod_freq = analysis::modulation_frequency(&mono, spec.sample_rate);

    println!("=== Session Analysis: {} ===", path.display());
    println!("Duration:   {secs:.3} s ({frames} frames)");
    println!("Channels:   {}", spec.channels);
    println!("Peak:       {:.3}", buffer::peak(&mono));
    println!("RMS:        {:.3}", buffer::rms(&mono));
    println!("Modulation: {mod_freq:.2} Hz");

    Ok(())
}
