//! Generate test telemetry frames.
//!
//! Builds frames the way the field devices do: either the canonical flat
//! snapshot every register holds for the whole window (pure RLE frames), or
//! random-walk traces that exercise the delta path.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use wattframe::{append_crc, encode, SampleMatrix};

/// Canonical register snapshot: vac1, iac1, fac1, vpv1, vpv2, ipv1, ipv2,
/// temperature, export_power, output_power (scaled fixed-point)
const BENCH_VALUES: [u16; 10] = [2300, 150, 5000, 3800, 4200, 80, 95, 450, 85, 3500];

#[derive(Parser)]
#[command(name = "wf-gen")]
#[command(about = "Generate test telemetry frames")]
#[command(after_help = "EXAMPLES:\n  \
    wf-gen frame.bin                          # 5x10 random-walk frame\n  \
    wf-gen frame.bin --flat                   # the producer's canonical flat frame\n  \
    wf-gen frame.bin -s 288 -r 4 --seed 7     # reproducible 24h window\n  \
    wf-gen frame.bin --no-crc                 # bare frame, no trailer")]
struct Args {
    /// Output file path
    output: PathBuf,

    /// Number of samples per register
    #[arg(short, long, default_value = "5")]
    samples: u16,

    /// Number of registers
    #[arg(short, long, default_value = "10")]
    registers: u8,

    /// Hold every register flat at its initial value (pure RLE frame)
    #[arg(long)]
    flat: bool,

    /// Largest random-walk step per sample
    #[arg(long, default_value = "8")]
    step: u16,

    /// Seed for reproducible frames
    #[arg(long)]
    seed: Option<u64>,

    /// Set the aggregated flag
    #[arg(long)]
    aggregated: bool,

    /// Skip the trailing CRC16
    #[arg(long)]
    no_crc: bool,
}

/// Per-register traces, flat or random walk, starting from the canonical
/// snapshot (cycled past 10 registers)
fn generate_rows(args: &Args, rng: &mut StdRng) -> Vec<Vec<u16>> {
    let mut current: Vec<u16> = (0..args.registers as usize)
        .map(|r| BENCH_VALUES[r % BENCH_VALUES.len()])
        .collect();

    let mut rows = Vec::with_capacity(args.samples as usize);
    for sample in 0..args.samples {
        if sample > 0 && !args.flat {
            let step = i32::from(args.step);
            for value in &mut current {
                let next = i32::from(*value) + rng.gen_range(-step..=step);
                *value = next.clamp(0, i32::from(u16::MAX)) as u16;
            }
        }
        rows.push(current.clone());
    }
    rows
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rows = generate_rows(&args, &mut rng);
    let matrix =
        SampleMatrix::from_rows(&rows).ok_or_else(|| "matrix dimensions out of range".to_string())?;

    let bare = encode(&matrix, args.aggregated).map_err(|e| e.to_string())?;
    let frame = if args.no_crc {
        bare.clone()
    } else {
        append_crc(bare.clone())
    };

    let mut file = File::create(&args.output)
        .map_err(|e| format!("failed to create {}: {e}", args.output.display()))?;
    file.write_all(&frame)
        .map_err(|e| format!("failed to write {}: {e}", args.output.display()))?;

    println!("Frame breakdown:");
    println!("  Header (6 bytes): {}", hex(&bare[..6]));
    println!("  Payload ({} bytes): {}", bare.len() - 6, hex(&bare[6..]));
    if !args.no_crc {
        println!("  CRC (2 bytes): {}", hex(&frame[frame.len() - 2..]));
    }
    println!("  Total: {} bytes -> {}", frame.len(), args.output.display());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
