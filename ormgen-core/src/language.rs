//! Target languages for generated model classes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// PHP
    Php,
    /// Rust
    Rust,
    /// TypeScript
    TypeScript,
    /// Go
    Go,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 4] = [
        Language::Php,
        Language::Rust,
        Language::TypeScript,
        Language::Go,
    ];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Php => "php",
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
            Language::Go => "go",
        }
    }

    /// Conventional source file extension, with the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Php => ".php",
            Language::Rust => ".rs",
            Language::TypeScript => ".ts",
            Language::Go => ".go",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "php" => Ok(Language::Php),
            "rust" | "rs" => Ok(Language::Rust),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "go" | "golang" => Ok(Language::Go),
            _ => Err(format!(
                "unknown language '{}', expected 'php', 'rust', 'typescript' or 'go'",
                s
            )),
        }
    }
}
