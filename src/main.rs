use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use cmake2meson::converter::{ConversionReport, Converter};
use cmake2meson::fs::{FileSystem, OsFs, OverlayFs};
use cmake2meson::preview::{format_listing, format_unified_diff};

const USAGE: &str = "Usage: cmake2meson <CMake project root>";

#[derive(Parser)]
#[command(name = "cmake2meson")]
#[command(about = "Translate a CMake project tree into Meson build files")]
#[command(version)]
struct Cli {
    /// Print the generated files instead of writing them
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Print a unified diff against the current output files instead of writing them
    #[arg(long = "diff")]
    diff: bool,

    /// Print a JSON summary of the conversion
    #[arg(long = "json", conflicts_with_all = ["dry_run", "diff"])]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Directory holding the top-level CMakeLists.txt
    #[arg()]
    root: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", USAGE);
                std::process::exit(1);
            }
        },
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let report = if cli.dry_run || cli.diff {
        preview(cli)?
    } else {
        Converter::new(OsFs::new()).convert(&cli.root)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Convert through an overlay so nothing reaches the disk.
fn preview(cli: &Cli) -> Result<ConversionReport, Box<dyn std::error::Error>> {
    let mut converter = Converter::new(OverlayFs::new(OsFs::new()));
    let report = converter.convert(&cli.root)?;
    let overlay = converter.fs();

    for output in report.outputs() {
        let generated = overlay.read_file(output)?;
        if cli.diff {
            let current = match overlay.lower().read_file(output) {
                Ok(text) => text,
                Err(e) if e.is_not_found() => String::new(),
                Err(e) => return Err(e.into()),
            };
            let label = output.display().to_string();
            print!(
                "{}",
                format_unified_diff(&label, &format!("{} (generated)", label), &current, &generated)
            );
        } else {
            print!("{}", format_listing(output, &generated));
        }
    }
    Ok(report)
}
