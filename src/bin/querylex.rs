//! Command-line interface for querylex
//! This binary tokenizes Lucene-style query strings and prints the token
//! stream in different formats.
//!
//! Usage:
//!   querylex tokenize `<query>` [--format `<format>`] [--ignore-case]  - Tokenize a query string
//!   querylex file `<path>` [--format `<format>`] [--ignore-case]       - Tokenize the contents of a file
//!   querylex list-formats                                          - List all available formats

use clap::{Arg, ArgAction, Command};
use querylex::query::lexer::LexerOptions;
use querylex::query::processor::{available_formats, process_file, process_query, ProcessingSpec};

fn main() {
    let matches = Command::new("querylex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing Lucene-style query strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a query string")
                .arg(
                    Arg::new("query")
                        .help("The query string to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-json', 'token-simple')")
                        .default_value("token-json-pretty"),
                )
                .arg(
                    Arg::new("ignore-case")
                        .long("ignore-case")
                        .help("Recognize conjunction keywords in any capitalization")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("file")
                .about("Tokenize the contents of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the file containing the query")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-json', 'token-simple')")
                        .default_value("token-json-pretty"),
                )
                .arg(
                    Arg::new("ignore-case")
                        .long("ignore-case")
                        .help("Recognize conjunction keywords in any capitalization")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("tokenize", sub_matches)) => {
            let query = sub_matches.get_one::<String>("query").unwrap();
            let format = sub_matches.get_one::<String>("format").unwrap();
            let options = lexer_options(sub_matches.get_flag("ignore-case"));
            let spec = parse_spec(format);
            match process_query(query, &spec, &options) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(("file", sub_matches)) => {
            let path = sub_matches.get_one::<String>("path").unwrap();
            let format = sub_matches.get_one::<String>("format").unwrap();
            let options = lexer_options(sub_matches.get_flag("ignore-case"));
            let spec = parse_spec(format);
            match process_file(path, &spec, &options) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(("list-formats", _)) => {
            println!("Available formats:\n");
            for format in available_formats() {
                println!("  {}", format);
            }
        }
        _ => unreachable!(),
    }
}

fn parse_spec(format: &str) -> ProcessingSpec {
    ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn lexer_options(ignore_case: bool) -> LexerOptions {
    if ignore_case {
        LexerOptions::ignore_keyword_case()
    } else {
        LexerOptions::default()
    }
}
