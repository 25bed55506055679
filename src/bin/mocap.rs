//! Command-line interface for mocap-text
//! Parses a BVH hierarchy or VPD pose file and prints the result.
//!
//! Usage:
//!   mocap `<path>`                          - Format inferred from the .bvh / .vpd extension
//!   mocap `<path>` --format `<bvh|vpd>`     - Force the input format
//!   mocap `<path>` --output json            - Print JSON instead of the text listing / tree
//!   mocap `<path>` --any-owner              - Accept any `.osm` owner file in VPD headers
//!
//! Set RUST_LOG (e.g. `RUST_LOG=debug`) for parser diagnostics on stderr.

use clap::{Arg, ArgAction, Command};
use mocap_text::formats::{to_json_str, to_listing_str, to_tree_str, FORMATS};
use mocap_text::{parse_hierarchy, parse_pose_data_with, OwnerFileRule, ParseOptions};
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Hierarchy,
    Pose,
}

impl FileKind {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bvh" => Some(FileKind::Hierarchy),
            "vpd" => Some(FileKind::Pose),
            _ => None,
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("mocap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse BVH hierarchy and VPD pose files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the .bvh or .vpd file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Input format (default: inferred from the file extension)")
                .value_parser(["bvh", "vpd"]),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output format")
                .value_parser(FORMATS.to_vec())
                .default_value("text"),
        )
        .arg(
            Arg::new("any-owner")
                .long("any-owner")
                .help("Accept any '.osm' owner file in VPD headers, not only miku.osm")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = Path::new(
        matches
            .get_one::<String>("path")
            .expect("path is a required argument"),
    );
    let output = matches
        .get_one::<String>("output")
        .expect("output has a default value");

    let kind = match matches.get_one::<String>("format") {
        Some(name) => FileKind::from_name(name),
        None => FileKind::from_path(path),
    }
    .unwrap_or_else(|| {
        eprintln!(
            "Error: cannot tell the format of '{}'; pass --format bvh or --format vpd",
            path.display()
        );
        std::process::exit(1);
    });

    let mut options = ParseOptions::default();
    if matches.get_flag("any-owner") {
        options = options.with_owner_file(OwnerFileRule::AnyOsm);
    }

    let source = read_source(path, kind).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match handle_parse_command(&source, kind, &options, output) {
        Ok(formatted) => print!("{}", formatted),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// VPD files are Shift_JIS (code page 932); BVH files are read as UTF-8.
fn read_source(path: &Path, kind: FileKind) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), ?kind, "read input");

    let text = match kind {
        FileKind::Pose => {
            let (text, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&bytes);
            if had_errors {
                warn!(path = %path.display(), "input is not valid Shift_JIS, some characters were replaced");
            }
            text.into_owned()
        }
        FileKind::Hierarchy => String::from_utf8_lossy(&bytes).into_owned(),
    };
    Ok(text)
}

fn handle_parse_command(
    source: &str,
    kind: FileKind,
    options: &ParseOptions,
    output: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let formatted = match (kind, output) {
        (FileKind::Hierarchy, "json") => to_json_str(&parse_hierarchy(source)?)?,
        (FileKind::Hierarchy, _) => to_tree_str(&parse_hierarchy(source)?),
        (FileKind::Pose, "json") => to_json_str(&parse_pose_data_with(source, options)?)?,
        (FileKind::Pose, _) => to_listing_str(&parse_pose_data_with(source, options)?),
    };
    Ok(formatted)
}
