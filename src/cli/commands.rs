//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::idl::EntityKind;

/// idlview - Browse Solana program IDLs and generate client snippets
#[derive(Debug, Parser)]
#[command(name = "idlview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// IDL file path or URL
    /// Accepts: local file path (./idl.json) or URL (https://...)
    /// GitHub URLs are auto-converted to raw URLs
    #[arg(short, long, global = true)]
    pub idl: Option<String>,

    /// Print the normalized program as JSON instead of formatted sections
    #[arg(long, global = true)]
    pub json: bool,

    /// Hide doc comments (overrides config)
    #[arg(long, global = true)]
    pub no_docs: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Represents where the IDL should be loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdlSource {
    /// Load from local file
    File(String),
    /// Fetch from URL
    Url(String),
}

/// Convert GitHub blob URLs to raw.githubusercontent.com URLs
fn normalize_github_url(url: &str) -> String {
    if url.contains("github.com") && url.contains("/blob/") {
        url.replace("github.com", "raw.githubusercontent.com")
            .replace("/blob/", "/")
    } else {
        url.to_string()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show program overview
    Inspect,

    /// List all accounts with their fields
    Accounts,

    /// List all instructions in the program
    Instructions,

    /// Show details for a specific instruction
    Instruction {
        /// Instruction name
        name: String,
    },

    /// List all defined types
    Types,

    /// List all error codes defined by the program
    Errors,

    /// List all events with their fields
    Events,

    /// Generate a client snippet for an account, instruction or event
    Snippet {
        /// Entity kind
        #[arg(value_enum)]
        kind: SnippetKind,

        /// Entity name
        name: String,
    },

    /// Manage idlview configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Entity kinds that snippets can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnippetKind {
    Account,
    Instruction,
    Event,
}

impl From<SnippetKind> for EntityKind {
    fn from(kind: SnippetKind) -> Self {
        match kind {
            SnippetKind::Account => EntityKind::Account,
            SnippetKind::Instruction => EntityKind::Instruction,
            SnippetKind::Event => EntityKind::Event,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration values
    Set {
        /// Print doc comments
        #[arg(long)]
        show_docs: Option<bool>,

        /// Colored output
        #[arg(long)]
        color: Option<bool>,

        /// URL fetch timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Determine the IDL source based on --idl flag
    pub fn idl_source(&self) -> Option<IdlSource> {
        self.idl.as_ref().map(|path| {
            if path.starts_with("http://") || path.starts_with("https://") {
                IdlSource::Url(normalize_github_url(path))
            } else {
                IdlSource::File(path.clone())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_blob_url_is_rewritten() {
        assert_eq!(
            normalize_github_url("https://github.com/org/repo/blob/main/idl.json"),
            "https://raw.githubusercontent.com/org/repo/main/idl.json"
        );
        assert_eq!(
            normalize_github_url("https://example.com/idl.json"),
            "https://example.com/idl.json"
        );
    }

    #[test]
    fn test_idl_source_detection() {
        let cli = Cli::parse_from(["idlview", "--idl", "./target/idl/vault.json", "inspect"]);
        assert_eq!(
            cli.idl_source(),
            Some(IdlSource::File("./target/idl/vault.json".into()))
        );

        let cli = Cli::parse_from(["idlview", "errors", "--idl", "https://example.com/idl.json"]);
        assert_eq!(
            cli.idl_source(),
            Some(IdlSource::Url("https://example.com/idl.json".into()))
        );

        let cli = Cli::parse_from(["idlview", "config", "show"]);
        assert_eq!(cli.idl_source(), None);
    }

    #[test]
    fn test_snippet_command_parses_kind() {
        let cli = Cli::parse_from(["idlview", "-i", "idl.json", "snippet", "instruction", "deposit"]);
        match cli.command {
            Commands::Snippet { kind, name } => {
                assert_eq!(EntityKind::from(kind), EntityKind::Instruction);
                assert_eq!(name, "deposit");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
