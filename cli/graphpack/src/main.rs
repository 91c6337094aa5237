//! graphpack CLI — encode weighted undirected edge lists into degree-ordered
//! binary streams and decode them back.

mod commands;
mod config;
mod exit;

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use graphpack_codec::EncodingMode;

use commands::inspect::ExportFormat;
use config::GraphpackConfig;
use exit::{exit_code_for_error, CliExitCode};

#[derive(Debug, Parser)]
#[command(
    name = "graphpack",
    version,
    about = "Degree-ordered binary codec for weighted undirected graphs"
)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: graphpack.toml from the working directory upward)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode a text edge list into a binary stream
    #[command(alias = "serialize")]
    Encode {
        /// Text edge list of `from to weight` rows
        #[arg(short, long)]
        input: PathBuf,
        /// Binary stream to write
        #[arg(short, long)]
        output: PathBuf,
        /// Stream layout (greedy, clustered)
        #[arg(long)]
        mode: Option<EncodingMode>,
    },
    /// Decode a binary stream into a text edge list
    #[command(alias = "deserialize")]
    Decode {
        /// Binary stream to read
        #[arg(short, long)]
        input: PathBuf,
        /// Text edge list to write
        #[arg(short, long)]
        output: PathBuf,
        /// Stream layout the input was encoded with (greedy, clustered)
        #[arg(long)]
        mode: Option<EncodingMode>,
    },
    /// Summarize a binary stream
    Inspect {
        /// Binary stream to read
        #[arg(short, long)]
        input: PathBuf,
        /// Stream layout the input was encoded with (greedy, clustered)
        #[arg(long)]
        mode: Option<EncodingMode>,
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        export: ExportFormat,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", usage_diagnostic(&e));
                process::exit(CliExitCode::InvalidArguments.into());
            }
        },
    };

    init_logging(cli.verbose);

    let code = match run(cli) {
        Ok(()) => CliExitCode::Success,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for_error(&e)
        }
    };
    process::exit(code.into());
}

/// One-line form of a clap usage error.
fn usage_diagnostic(err: &clap::Error) -> String {
    if err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand {
        return "error: no command given (try --help)".to_string();
    }
    let rendered = err.render().to_string();
    rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("error: invalid arguments")
        .to_string()
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode {
            input,
            output,
            mode,
        } => {
            let mode = mode.unwrap_or_else(|| config.mode());
            commands::encode::run(&input, &output, mode)?;
        }

        Commands::Decode {
            input,
            output,
            mode,
        } => {
            let mode = mode.unwrap_or_else(|| config.mode());
            commands::decode::run(&input, &output, mode, config.delimiter())?;
        }

        Commands::Inspect {
            input,
            mode,
            export,
        } => {
            let mode = mode.unwrap_or_else(|| config.mode());
            println!("{}", commands::inspect::run(&input, mode, export)?);
        }
    }

    Ok(())
}

/// Load the configuration named on the command line, or discover one from the
/// working directory upward. No file means defaults.
fn load_config(explicit: Option<&std::path::Path>) -> anyhow::Result<GraphpackConfig> {
    if let Some(path) = explicit {
        return Ok(GraphpackConfig::load(path)?);
    }
    let Ok(cwd) = std::env::current_dir() else {
        return Ok(GraphpackConfig::default());
    };
    match GraphpackConfig::find_and_load(&cwd)? {
        Some((config, dir)) => {
            tracing::debug!(dir = %dir.display(), "using graphpack.toml");
            Ok(config)
        }
        None => Ok(GraphpackConfig::default()),
    }
}
