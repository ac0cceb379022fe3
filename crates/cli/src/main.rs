mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Detached ed25519 signature checker.
#[derive(Parser)]
#[command(
    name = "sigcheck",
    version,
    about = "Check detached ed25519 signatures of executables"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the <executable>.ed25519 signature of each executable is valid
    Check {
        /// The public key file to use to verify the signatures
        #[arg(
            long = "public-key",
            visible_alias = "pub",
            default_value = sigcheck_core::DEFAULT_PUBLIC_KEY
        )]
        public_key: PathBuf,
        /// An executable to check before the positional ones
        #[arg(long, visible_alias = "exe")]
        executable: Option<PathBuf>,
        /// Further executables to check, in order
        executables: Vec<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            public_key,
            executable,
            executables,
        } => {
            commands::check::cmd_check(
                &public_key,
                executable.as_deref(),
                &executables,
                cli.output,
                cli.quiet,
            );
        }
    }
}

pub(crate) fn report_error(msg: &str, kind: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg, "kind": kind }));
        }
    }
}
