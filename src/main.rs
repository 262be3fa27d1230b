use clap::{Parser, Subcommand};
use kedgify::{config, output};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `VERSION (COMMIT)`, commit is `HEAD` outside a git checkout.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT"), ")");

#[derive(Parser)]
#[command(name = "kedgify")]
#[command(about = "Kedgify: Generate Kedge from Kubernetes")]
#[command(long_about = "\
Kedgify: Generate Kedge from Kubernetes

Reads Kubernetes manifests and splits multi-document YAML files into
individual resources.

Inputs can be files or directories:

  kedgify inspect deploy/ extra/service.json

  deploy/
  ├── web.yml          # picked up (*.yml first)
  ├── db.yaml          # picked up (*.yaml second)
  ├── README.md        # ignored
  └── nested/          # not descended into

Files named explicitly are read whatever their extension. Each file is cut
into documents at `---` lines; blank documents are skipped.

Run 'kedgify gen-config' to generate a documented kedgify.toml.")]
#[command(version = VERSION)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./kedgify.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load manifests and list the documents found in them
    Inspect {
        /// Manifest files or directories containing *.yml / *.yaml files
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print documents as JSON regardless of config
        #[arg(long)]
        json: bool,
    },
    /// Print the version of Kedgify
    Version,
    /// Print a stock kedgify.toml with all options documented
    GenConfig,
}

/// Initialize tracing on stderr so stdout carries only command output.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "kedgify=debug" } else { "kedgify=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Inspect { paths, json } => {
            let mut settings = match &cli.config {
                Some(path) => config::load_config_file(path)?,
                None => config::load_config(&std::env::current_dir()?)?,
            };
            if json {
                settings.output.format = config::OutputFormat::Json;
            }
            let documents = kedgify::load(&paths)?;
            output::print_documents(&documents, &settings.output)?;
        }
        Command::Version => {
            println!("{}", VERSION);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
