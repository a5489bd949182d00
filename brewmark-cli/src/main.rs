//! Command-line interface for brewmark
//! Converts sourcebook markup to and from the document tree formats.
//!
//! Usage:
//!   brewmark convert `<path|->` [--from `<format>`] [--to `<format>`] [--normalize] [--config `<file>`]
//!   brewmark normalize `<path|->` [--from `<format>`]   - Run the footnote pass, write JSON
//!   brewmark check `<path|->`                           - Parse markup and list recoveries
//!   brewmark list-formats                             - List available formats

use brewmark::{normalize, parse_document_with_report, FormatRegistry};
use brewmark_config::{BrewConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fmt::Display;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("convert", sub)) => handle_convert_command(sub),
        Some(("normalize", sub)) => handle_normalize_command(sub),
        Some(("check", sub)) => handle_check_command(sub),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Input file, or - for stdin")
            .required(true)
            .index(1)
    };
    let config_arg = || {
        Arg::new("config")
            .long("config")
            .short('c')
            .help("TOML file layered over the built-in defaults")
    };

    Command::new("brewmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert sourcebook markup to and from document trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser decisions and recoveries to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document between formats")
                .arg(path_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format")
                        .default_value("markup"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("normalize")
                        .long("normalize")
                        .help("Run the footnote normalization pass before writing")
                        .action(ArgAction::SetTrue),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("normalize")
                .about("Normalize a document tree and write it as JSON")
                .arg(path_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Input format")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse markup and report every recovered condition")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available formats"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| fail(format!("reading stdin: {}", e)));
        return source;
    }
    std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("reading {}: {}", path, e)))
}

fn load_config(matches: &ArgMatches) -> BrewConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("normalize") {
        loader = loader
            .set_override("convert.normalize", true)
            .unwrap_or_else(|e| fail(e));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(format!("loading configuration: {}", e)))
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) {
    let path = required(matches, "path");
    let from = required(matches, "from");
    let to = required(matches, "to");
    let config = load_config(matches);
    let registry = FormatRegistry::with_serialize_rules(config.serialize_rules());
    tracing::debug!(from, to, normalize = config.convert.normalize, "convert");

    let source = read_input(path);
    let mut doc = registry.parse(&source, from).unwrap_or_else(|e| fail(e));
    if config.convert.normalize {
        doc = normalize(doc);
    }
    let output = registry.serialize(&doc, to).unwrap_or_else(|e| fail(e));
    println!("{}", output.trim_end_matches('\n'));
}

/// Handle the normalize command
fn handle_normalize_command(matches: &ArgMatches) {
    let path = required(matches, "path");
    let from = required(matches, "from");
    let registry = FormatRegistry::with_defaults();

    let source = read_input(path);
    let doc = registry.parse(&source, from).unwrap_or_else(|e| fail(e));
    let json = serde_json::to_string_pretty(&normalize(doc)).unwrap_or_else(|e| fail(e));
    println!("{}", json);
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) {
    let source = read_input(required(matches, "path"));
    let report = parse_document_with_report(&source);
    println!(
        "{} blocks, {} recoveries",
        report.document.block_count(),
        report.recoveries.len()
    );
    for recovery in &report.recoveries {
        println!("  {}: {}", recovery.kind(), recovery);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("parse");
        }
        if format.supports_serialization() {
            modes.push("serialize");
        }
        println!("  {:<8} {} ({})", name, format.description(), modes.join(", "));
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("missing argument <{}>", name)))
}
