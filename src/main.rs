use anyhow::{anyhow, Result};

use idlview::cli::{Cli, Commands, ConfigCommands};
use idlview::config::Config;
use idlview::display::{
    display_accounts, display_error, display_errors_list, display_events,
    display_instruction_detail, display_instructions_list, display_not_found,
    display_program_overview, display_snippet, display_types, DisplayOptions,
};
use idlview::idl::{load_program, EntityKind, Program};
use idlview::snippet::{generate, SnippetTarget};
use idlview::ViewerError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let result = run(cli).await;

    if let Err(e) = &result {
        display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config { action } = &cli.command {
        return cmd_config(action.clone());
    }

    let config = Config::load_validated().unwrap_or_else(|e| {
        log::warn!("ignoring invalid config: {}", e);
        Config::default()
    });
    if !config.color {
        colored::control::set_override(false);
    }
    let options = DisplayOptions {
        show_docs: config.show_docs && !cli.no_docs,
    };

    let program = fetch_program(&cli, &config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&program)?);
        return Ok(());
    }

    match &cli.command {
        Commands::Inspect => display_program_overview(&program),
        Commands::Accounts => display_accounts(&program, options),
        Commands::Instructions => display_instructions_list(&program),
        Commands::Instruction { name } => cmd_instruction(&program, name, options)?,
        Commands::Types => display_types(&program, options),
        Commands::Errors => display_errors_list(&program, options),
        Commands::Events => display_events(&program, options),
        Commands::Snippet { kind, name } => cmd_snippet(&program, (*kind).into(), name)?,
        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

// ============================================================================
// Command handlers
// ============================================================================

/// Handle `instruction` command - show specific instruction details
fn cmd_instruction(program: &Program, name: &str, options: DisplayOptions) -> Result<()> {
    match program.find_instruction(name) {
        Some(ix) => {
            display_instruction_detail(ix, options);
            Ok(())
        }
        None => {
            display_not_found(
                EntityKind::Instruction,
                name,
                &program.names(EntityKind::Instruction),
            );
            Err(anyhow!("Instruction '{}' not found", name))
        }
    }
}

/// Handle `snippet` command - print client boilerplate for one entity
fn cmd_snippet(program: &Program, kind: EntityKind, name: &str) -> Result<()> {
    let target = match SnippetTarget::find(program, kind, name) {
        Ok(target) => target,
        Err(e @ ViewerError::EntityNotFound { .. }) => {
            display_not_found(kind, name, &program.names(kind));
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let snippet = generate(target, program);
    display_snippet(target, &snippet);
    Ok(())
}

/// Handle `config` subcommands
fn cmd_config(action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = Config::load()?;
            let config_path = Config::file_path()?;
            let exists = Config::exists();

            println!();
            println!("idlview Configuration:");
            println!("  Config file: {}", config_path.display());
            println!("  File exists: {}", if exists { "yes" } else { "no (using defaults)" });
            println!();
            println!("  show_docs: {}", config.show_docs);
            println!("  color: {}", config.color);
            println!("  http_timeout_secs: {}", config.http_timeout_secs);
            println!();
            Ok(())
        }
        ConfigCommands::Set {
            show_docs,
            color,
            timeout,
        } => {
            if show_docs.is_none() && color.is_none() && timeout.is_none() {
                println!("No value provided to set.");
                println!("Usage: idlview config set [--show-docs <BOOL>] [--color <BOOL>] [--timeout <SECS>]");
                return Ok(());
            }

            let mut config = Config::load()?;
            if let Some(show_docs) = show_docs {
                config.show_docs = show_docs;
            }
            if let Some(color) = color {
                config.color = color;
            }
            if let Some(timeout) = timeout {
                config.http_timeout_secs = timeout;
            }

            config.validate()?;
            config.save()?;

            println!("Saved configuration to {}", Config::file_path()?.display());
            Ok(())
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Load and normalize the IDL named by --idl
async fn fetch_program(cli: &Cli, config: &Config) -> Result<Program> {
    let source = cli
        .idl_source()
        .ok_or_else(|| anyhow!("No IDL given. Use --idl <PATH|URL> to choose one."))?;

    let program = load_program(source, config.http_timeout_secs).await?;
    Ok(program)
}
