use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glob::glob;

use adar_core::{DecodedFrame, make_report};

#[derive(Parser, Debug)]
#[command(name = "adar")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("ADAR_BUILD_COMMIT"), " ", env!("ADAR_BUILD_DATE"), ")"
))]
#[command(
    about = "Offline decoder for ADAR radar telemetry frames (CoAP payload dumps).",
    long_about = None,
    after_help = "Examples:\n  adar frame point-cloud payload.bin -o report.json\n  adar frame status status.hex --stdout\n  adar frame statistics stats.bin --stdout --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on captured frame payloads (offline-first).
    Frame {
        #[command(subcommand)]
        command: FrameCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FrameCommands {
    /// Decode a point cloud payload (timestamp + status + points).
    #[command(alias = "pointcloud")]
    PointCloud(DecodeArgs),
    /// Decode an 8-byte device status word.
    Status(DecodeArgs),
    /// Decode a cumulative statistics block.
    #[command(alias = "stats")]
    Statistics(DecodeArgs),
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Path to a .bin, .raw, or .hex payload dump
    input: PathBuf,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Frame { command } => match command {
            FrameCommands::PointCloud(args) => cmd_frame_decode(FrameKind::PointCloud, args),
            FrameCommands::Status(args) => cmd_frame_decode(FrameKind::Status, args),
            FrameCommands::Statistics(args) => cmd_frame_decode(FrameKind::Statistics, args),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FrameKind {
    PointCloud,
    Status,
    Statistics,
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_frame_decode(kind: FrameKind, args: DecodeArgs) -> Result<(), CliError> {
    let DecodeArgs {
        input,
        report,
        stdout,
        pretty,
        compact,
        quiet,
    } = args;

    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let payload = read_payload(&resolved_input)?;

    let report_path = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    let frame = decode_frame(kind, &payload)?;
    let rep = make_report(
        &resolved_input.display().to_string(),
        payload.len() as u64,
        frame,
    );
    let json = serialize_report(&rep, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let report_path = report_path.expect("report required when not using stdout");
    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report_path, json)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;

    if !quiet {
        eprintln!("OK: report written -> {}", report_path.display());
    }
    Ok(())
}

fn decode_frame(kind: FrameKind, payload: &[u8]) -> Result<DecodedFrame, CliError> {
    let decoded = match kind {
        FrameKind::PointCloud => adar_core::parse_point_cloud(payload)
            .map(|point_cloud| DecodedFrame::PointCloud { point_cloud }),
        FrameKind::Status => {
            adar_core::parse_device_status(payload).map(|status| DecodedFrame::DeviceStatus {
                status,
            })
        }
        FrameKind::Statistics => adar_core::parse_statistics(payload)
            .map(|statistics| DecodedFrame::Statistics { statistics }),
    };
    decoded.map_err(|err| {
        CliError::new(
            format!("decode failed: {}", err),
            Some("check that the dump matches the selected frame kind".to_string()),
        )
    })
}

fn serialize_report(
    rep: &adar_core::Report,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn read_payload(input: &PathBuf) -> Result<Vec<u8>, CliError> {
    let ext = extension_of(input);
    if ext == "hex" {
        let text = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input file: {}", input.display()))?;
        return parse_hex_payload(&text);
    }
    fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
        .map_err(Into::into)
}

fn parse_hex_payload(text: &str) -> Result<Vec<u8>, CliError> {
    let mut digits = Vec::new();
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }
        let digit = c.to_digit(16).ok_or_else(|| {
            CliError::new(
                format!("invalid character '{}' in hex input", c),
                Some("only hex digits and whitespace are allowed".to_string()),
            )
        })?;
        digits.push(digit as u8);
    }
    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            format!("hex input has an odd number of digits ({})", digits.len()),
            Some("each payload byte needs two hex digits".to_string()),
        ));
    }
    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

fn extension_of(input: &PathBuf) -> String {
    input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .bin, .raw, or .hex payload dump".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .bin, .raw, or .hex payload dump".to_string()),
        ));
    }
    let ext = extension_of(input);
    if ext != "bin" && ext != "raw" && ext != "hex" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .bin, .raw, or .hex file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .bin, .raw, or .hex".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single payload dump, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
