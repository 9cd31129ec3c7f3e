#![forbid(unsafe_code)]
//! SPARC Generator Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sparc::commands::{
    execute_command, execute_diff, execute_document, execute_fields, execute_generate,
    execute_interactive, CommandOptions, ConfigOverrides, DiffOptions, DocumentOptions,
    FieldsOptions, GenerateOptions, InteractiveOptions,
};

#[derive(Parser)]
#[command(name = "sparc")]
#[command(about = "Generate claude-sparc.sh commands and SPARC workflow prompts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Preset file (JSON or YAML) to start from instead of the defaults
    #[arg(short, long, global = true, env = "SPARC_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Field assignments shared by the generating commands
#[derive(Args, Clone, Debug, Default)]
struct SetArgs {
    /// Set a field, e.g. --set coverageTarget=80 (repeatable)
    #[arg(short, long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the claude-sparc.sh command
    Command {
        #[command(flatten)]
        fields: SetArgs,
    },

    /// Print the SPARC prompt
    Document {
        #[command(flatten)]
        fields: SetArgs,

        /// Only print these sections (research, specification, pseudocode,
        /// architecture, refinement, completion, methodology, success)
        #[arg(long = "section", value_name = "ID")]
        sections: Vec<String>,

        /// Output sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print both the command and the prompt
    Generate {
        #[command(flatten)]
        fields: SetArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Write the prompt to a file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show what the --set overrides change compared to the base configuration
    Diff {
        #[command(flatten)]
        fields: SetArgs,

        /// Lines of context around each change
        #[arg(long, default_value = "2")]
        context: usize,
    },

    /// List configurable fields
    Fields {
        #[command(flatten)]
        fields: SetArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a prompt for each field, then print both artifacts
    Interactive {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SPARC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("sparc={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = |fields: SetArgs| ConfigOverrides {
        preset: cli.config.clone(),
        assignments: fields.set,
    };

    match cli.command {
        Commands::Command { fields } => {
            execute_command(CommandOptions {
                overrides: overrides(fields),
            })?;
        }

        Commands::Document {
            fields,
            sections,
            json,
        } => {
            execute_document(DocumentOptions {
                overrides: overrides(fields),
                sections,
                json,
            })?;
        }

        Commands::Generate { fields, json, out } => {
            execute_generate(GenerateOptions {
                overrides: overrides(fields),
                json,
                out,
            })?;
        }

        Commands::Diff { fields, context } => {
            execute_diff(DiffOptions {
                overrides: overrides(fields),
                context,
            })?;
        }

        Commands::Fields { fields, json } => {
            execute_fields(FieldsOptions {
                overrides: overrides(fields),
                json,
            })?;
        }

        Commands::Interactive { json } => {
            execute_interactive(InteractiveOptions {
                overrides: overrides(SetArgs::default()),
                json,
            })?;
        }
    }

    Ok(())
}
