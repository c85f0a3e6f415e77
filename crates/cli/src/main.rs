mod cmd;
mod input;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fleethash_lib::Kind;
use tracing_subscriber::EnvFilter;

use cmd::{cmd_canon, cmd_diff, cmd_hash, cmd_kinds, cmd_normalize};
use output::{OutputFormat, print_error};

/// fleethash - structural fingerprints for fleet configuration
#[derive(Parser)]
#[command(name = "fleethash")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(long, global = true, value_enum, default_value = "text")]
  format: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the configuration kinds that can be fingerprinted
  Kinds,

  /// Print the canonical string of each record
  Canon {
    /// Kind the records belong to
    #[arg(short, long)]
    kind: Kind,

    /// YAML or JSON file holding one record or a list of records
    file: PathBuf,
  },

  /// Print the fingerprint of each record
  Hash {
    /// Kind the records belong to
    #[arg(short, long)]
    kind: Kind,

    /// YAML or JSON file holding one record or a list of records
    file: PathBuf,
  },

  /// Print the normalized form of an embedded configuration document
  Normalize {
    /// Text file to normalize
    file: PathBuf,
  },

  /// Show the pool changes between current and desired pools
  Diff {
    /// Machine pool kind of both files
    #[arg(short, long)]
    kind: Kind,

    /// Pools as they are now
    current: PathBuf,

    /// Pools as they should be
    desired: PathBuf,
  },
}

fn init_tracing(verbose: bool) {
  let filter = if verbose && std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Kinds => cmd_kinds(cli.format),
    Commands::Canon { kind, file } => cmd_canon(kind, &file, cli.format),
    Commands::Hash { kind, file } => cmd_hash(kind, &file, cli.format),
    Commands::Normalize { file } => cmd_normalize(&file, cli.format),
    Commands::Diff { kind, current, desired } => cmd_diff(kind, &current, &desired, cli.verbose, cli.format),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}
