//! Command-line interface for uclass
//! This binary parses utility class tokens, from the command line or from a
//! source file, and prints the structured candidates in different formats.
//!
//! Usage:
//!   uclass parse `<token>`... [--format `<format>`]   - Parse tokens given as arguments
//!   uclass scan `<path>` [--format `<format>`]        - Extract and parse tokens from a file
//!   uclass formats                                  - List all available output formats

use clap::{Arg, Command};

use uclass::uclass::processor::{format_outcomes, CandidateParser, OutputFormat};
use uclass::uclass::ParseConfig;

fn main() {
    let matches = Command::new("uclass")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting utility class tokens")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse tokens given as arguments")
                .arg(
                    Arg::new("tokens")
                        .help("Raw utility class tokens to parse")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true),
                )
                .arg(separator_arg())
                .arg(prefix_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("scan")
                .about("Extract and parse tokens from a source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file to scan")
                        .required(true)
                        .index(1),
                )
                .arg(separator_arg())
                .arg(prefix_arg())
                .arg(format_arg()),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let tokens: Vec<String> = parse_matches
                .get_many::<String>("tokens")
                .unwrap()
                .cloned()
                .collect();
            let format = parse_matches.get_one::<String>("format").unwrap();
            let mut parser = build_parser(parse_matches);
            let outcomes = tokens
                .iter()
                .map(|token| (token.clone(), parser.parse(token)))
                .collect::<Vec<_>>();
            print_outcomes(&outcomes, format);
        }
        Some(("scan", scan_matches)) => {
            let path = scan_matches.get_one::<String>("path").unwrap();
            let format = scan_matches.get_one::<String>("format").unwrap();
            let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading file: {}", e);
                std::process::exit(1);
            });
            let mut parser = build_parser(scan_matches);
            let outcomes = parser.parse_source(&source);
            print_outcomes(&outcomes, format);
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        _ => unreachable!(),
    }
}

fn separator_arg() -> Arg {
    Arg::new("separator")
        .long("separator")
        .short('s')
        .help("Variant separator")
        .default_value(":")
}

fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .long("prefix")
        .short('p')
        .help("Configured utility name prefix")
        .default_value("")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (e.g., 'simple', 'json', 'yaml')")
        .default_value("simple")
}

fn build_parser(matches: &clap::ArgMatches) -> CandidateParser {
    let separator = matches.get_one::<String>("separator").unwrap();
    let prefix = matches.get_one::<String>("prefix").unwrap();
    CandidateParser::new(ParseConfig::new(separator.clone(), prefix.clone())).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn print_outcomes(
    outcomes: &[(String, Option<uclass::uclass::Candidate>)],
    format: &str,
) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let output = format_outcomes(outcomes, &format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::available() {
        println!("  {}", format);
    }
}
