//! Decode a compressed telemetry frame from a file or pasted bytes.

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use wattframe::{decode, validate_crc};

#[derive(Parser)]
#[command(name = "wf-decode")]
#[command(about = "Decode a compressed telemetry frame into its sample matrix")]
#[command(after_help = "INPUT FORMAT:\n  \
    With a file argument the frame is read as raw binary (use --text for a\n  \
    text file). Without one, paste the frame on stdin as text: either\n  \
    whitespace-separated byte values (decimal, or hex with an 0x prefix) or\n  \
    one unbroken hex string.\n\n\
EXAMPLES:\n  \
    wf-decode frame.bin --check-crc\n  \
    wf-gen frame.bin --flat && wf-decode frame.bin --json\n  \
    echo '00 00 01 01 00 02 08 fc' | wf-decode -")]
struct Args {
    /// Frame file; `-` or omitted reads stdin
    input: Option<PathBuf>,

    /// Parse the input as text bytes instead of raw binary
    #[arg(long)]
    text: bool,

    /// Validate and strip the trailing CRC16 before decoding
    #[arg(long)]
    check_crc: bool,

    /// Print the decoded frame as JSON
    #[arg(long)]
    json: bool,
}

/// Parse pasted text: byte tokens, or one unbroken hex string
fn parse_text_bytes(text: &str) -> Result<Vec<u8>, String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err("no bytes in input".into());
    }

    // A single long token is a hex dump without separators
    if tokens.len() == 1 && tokens[0].len() > 2 && !tokens[0].starts_with("0x") {
        let hex = tokens[0];
        if hex.len() % 2 != 0 {
            return Err(format!("hex string has odd length {}", hex.len()));
        }
        return (0..hex.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|e| format!("invalid hex byte '{}': {e}", &hex[i..i + 2]))
            })
            .collect();
    }

    tokens
        .iter()
        .map(|token| {
            if let Some(hex) = token.strip_prefix("0x") {
                u8::from_str_radix(hex, 16).map_err(|e| format!("invalid byte '{token}': {e}"))
            } else if token.chars().all(|c| c.is_ascii_digit()) {
                token
                    .parse()
                    .map_err(|e| format!("invalid byte '{token}': {e}"))
            } else {
                u8::from_str_radix(token, 16).map_err(|e| format!("invalid byte '{token}': {e}"))
            }
        })
        .collect()
}

fn read_frame(args: &Args) -> Result<Vec<u8>, String> {
    let from_stdin = args
        .input
        .as_deref()
        .map_or(true, |p| p.as_os_str() == "-");
    let raw = if from_stdin {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        buf
    } else {
        let path = args.input.as_ref().unwrap();
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?
    };

    // Pasted stdin is text; files are binary unless --text says otherwise
    if args.text || (from_stdin && !looks_binary(&raw)) {
        let text = String::from_utf8(raw).map_err(|_| "input is not valid text".to_string())?;
        parse_text_bytes(&text)
    } else {
        Ok(raw)
    }
}

/// Piped stdin may carry a raw binary frame; treat it as text only when
/// every byte is printable ASCII or whitespace
fn looks_binary(raw: &[u8]) -> bool {
    raw.iter()
        .any(|&b| b != b'\n' && b != b'\r' && b != b'\t' && b != b' ' && !b.is_ascii_graphic())
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let frame = read_frame(&args)?;

    let body = if args.check_crc {
        validate_crc(&frame).map_err(|e| e.to_string())?
    } else {
        &frame[..]
    };

    let decoded = decode(body).map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&decoded)
            .map_err(|e| format!("failed to serialize: {e}"))?;
        println!("{json}");
    } else {
        println!("Aggregated: {}", if decoded.aggregated { "YES" } else { "NO" });
        println!("Samples   : {}", decoded.sample_count());
        println!("Registers : {}", decoded.register_count());
        print!("{}", decoded.samples);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
