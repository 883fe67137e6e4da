//! Processing API for query strings.
//!
//! This module provides the serialization surface consumed by external
//! tooling: a query (or a file containing one) is tokenized and rendered
//! in one of several output formats. The format string syntax is
//! `<stage>-<format>`, e.g. `token-json`.

use crate::query::lexer::LexerOptions;
use crate::query::parse_with_options;
use crate::query::token::Token;
use std::fmt;
use std::fs;
use std::path::Path;

/// The processing stage (what data to extract).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
}

/// The output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    JsonPretty,
}

/// A complete processing specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-json" or "token-json-pretty".
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "json-pretty" => OutputFormat::JsonPretty,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// All supported processing specifications.
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::JsonPretty,
            },
        ]
    }
}

/// Errors that can occur during processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Io(String),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Tokenize a query string and render it according to the specification.
pub fn process_query(
    query: &str,
    spec: &ProcessingSpec,
    options: &LexerOptions,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = parse_with_options(query, options);
            format_tokens(&tokens, spec.format)
        }
    }
}

/// Tokenize the contents of a file and render it according to the
/// specification.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &LexerOptions,
) -> Result<String, ProcessingError> {
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::Io(e.to_string()))?;
    process_query(&content, spec, options)
}

/// Format a token stream according to the output format.
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&format!("{}\n", token));
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

/// All supported format strings.
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Token => "token",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::JsonPretty => "json-pretty",
                }
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_from_string() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Json);

        let spec = ProcessingSpec::from_string("token-json-pretty").unwrap();
        assert_eq!(spec.format, OutputFormat::JsonPretty);
    }

    #[test]
    fn test_spec_from_string_rejects_unknown() {
        assert_eq!(
            ProcessingSpec::from_string("nodash"),
            Err(ProcessingError::InvalidFormat("nodash".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-json"),
            Err(ProcessingError::InvalidStage("ast".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("token-xml"),
            Err(ProcessingError::InvalidFormatType("xml".to_string()))
        );
    }

    #[test]
    fn test_available_formats_round_trip() {
        for format in available_formats() {
            assert!(ProcessingSpec::from_string(&format).is_ok(), "{}", format);
        }
    }

    #[test]
    fn test_process_query_simple() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_query("a:b", &spec, &LexerOptions::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "field \"a\" 1:1..1:2");
        assert_eq!(lines[3], "eof \"\" 1:5..1:5");
    }

    #[test]
    fn test_process_query_json_is_an_array() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        let output = process_query("a:b", &spec, &LexerOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(4));
    }

    #[test]
    fn test_process_missing_file_reports_io_error() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        let result = process_file(
            "no/such/query.txt",
            &spec,
            &LexerOptions::default(),
        );
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
