//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::ValidationError;
use crate::storage::StoreError;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints a user-facing notice that is not an error (text only)
    pub fn notice(&self, message: &str) {
        if self.is_text() {
            println!("{}", message);
        }
    }

    /// Prints structured data as compact JSON
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }

    /// Reports a failed command on stderr
    ///
    /// Text mode lists any schema violations before the `Error:` line.
    /// JSON mode emits exactly one object, so stderr stays parseable.
    pub fn failure(&self, error: &anyhow::Error) {
        let violations: &[ValidationError] = match error.downcast_ref::<StoreError>() {
            Some(StoreError::Validation { errors, .. }) => errors.as_slice(),
            _ => &[],
        };

        match self.format {
            OutputFormat::Text => {
                if !violations.is_empty() {
                    eprintln!("Validation failed:");
                    for (idx, violation) in violations.iter().enumerate() {
                        eprintln!("  {}. {}", idx + 1, violation);
                    }
                }
                eprintln!("Error: {:#}", error);
            }
            OutputFormat::Json => {
                let mut body = serde_json::json!({
                    "success": false,
                    "error": format!("{:#}", error),
                });
                if !violations.is_empty() {
                    body["validation_errors"] = violations
                        .iter()
                        .map(|v| {
                            serde_json::json!({
                                "location": v.location,
                                "message": v.message,
                            })
                        })
                        .collect();
                }
                eprintln!("{}", body);
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if using text format
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
