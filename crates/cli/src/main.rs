mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use instpack_lib::artifact::Variant;
use instpack_lib::bootstrap::WaitPolicy;
use instpack_lib::bundle::BundleOptions;
use instpack_lib::consts::{APP_NAME, DEFAULT_ARTIFACT_NAME, DEFAULT_EXTENSION, DEFAULT_TOOLING_DIR};

use crate::output::OutputFormat;

/// instpack - Bundle host scripts into a self-installing artifact
#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Bundle the source tree into an installer artifact
  Bundle {
    /// Relative paths of the files to include (default: every matching file)
    files: Vec<String>,

    /// Source tree to bundle; the artifact is written here
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Artifact file name, written directly under the root
    #[arg(short, long, default_value = DEFAULT_ARTIFACT_NAME)]
    output: String,

    /// Only bundle files with this suffix
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Top-level directory that is never walked
    #[arg(long, default_value = DEFAULT_TOOLING_DIR)]
    tooling_dir: String,

    /// Bootstrap routine to embed
    #[arg(long, value_enum, default_value_t = VariantArg::SelfUpdate)]
    variant: VariantArg,

    /// How long wait mode polls for a replacement
    #[arg(long, value_parser = humantime::parse_duration, default_value = "10s")]
    wait_deadline: Duration,

    /// Pause between two polls in wait mode
    #[arg(long, value_parser = humantime::parse_duration, default_value = "100ms")]
    poll_interval: Duration,
  },

  /// List the files embedded in an artifact
  Inspect {
    /// Path to the artifact
    artifact: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Replay an artifact onto a local directory
  Install {
    /// Path to the artifact
    artifact: PathBuf,

    /// Directory standing in for the host file system
    #[arg(short, long)]
    target: PathBuf,

    /// Arguments passed to the installer (after `--`)
    #[arg(last = true)]
    args: Vec<String>,
  },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
  Plain,
  SkipUnchanged,
  SelfUpdate,
}

impl From<VariantArg> for Variant {
  fn from(arg: VariantArg) -> Self {
    match arg {
      VariantArg::Plain => Variant::Plain,
      VariantArg::SkipUnchanged => Variant::SkipUnchanged,
      VariantArg::SelfUpdate => Variant::SelfUpdate,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli.command) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      output::print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(command: Commands) -> Result<()> {
  match command {
    Commands::Bundle {
      files,
      root,
      output,
      extension,
      tooling_dir,
      variant,
      wait_deadline,
      poll_interval,
    } => cmd::cmd_bundle(&BundleOptions {
      root,
      output_name: output,
      extension,
      tooling_dir: Some(tooling_dir),
      variant: variant.into(),
      requested: files,
      wait: WaitPolicy {
        deadline: wait_deadline,
        poll_interval,
      },
    }),
    Commands::Inspect { artifact, format } => cmd::cmd_inspect(&artifact, format),
    Commands::Install { artifact, target, args } => cmd::cmd_install(&artifact, &target, args),
  }
}
