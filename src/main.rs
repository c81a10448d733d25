use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{ArgAction, Args, Parser, Subcommand};

use relkit::audit::{AuditOptions, DependencyAuditor};
use relkit::cargo::ProcessRunner;
use relkit::config::ToolConfig;
use relkit::report::{self, OutputFormat};
use relkit::version::registries::{KojiCatalog, Release};
use relkit::workflow::{self, Environment, Toolchain};
use relkit::{logging, test_config};

#[derive(Parser)]
#[command(name = "relkit")]
#[command(version, about = "Release-engineering and dependency-auditing tools")]
struct Cli {
    /// Configuration file (defaults to <config dir>/relkit/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write JSON logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare dependency versions with the versions Fedora packages
    Compare {
        #[command(flatten)]
        target: ManifestArgs,

        /// Fedora release: "rawhide" or f<n>
        #[arg(long, default_value = "rawhide")]
        release: Release,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
    /// Check that every resolved version satisfies its declared requirement
    Check {
        #[command(flatten)]
        target: ManifestArgs,
    },
    /// Update a tracked version in a CI workflow file
    Workflow {
        #[command(subcommand)]
        action: WorkflowCommand,
    },
    /// Generate or read a destructive test configuration
    TestConfig {
        #[command(subcommand)]
        action: TestConfigCommand,
    },
}

#[derive(Args)]
struct ManifestArgs {
    /// Path to Cargo.toml; Cargo discovers it when omitted
    #[arg(long)]
    manifest_path: Option<PathBuf>,

    /// Leave out dependencies that point at a local path
    #[arg(long)]
    skip_path: bool,
}

#[derive(Subcommand)]
enum WorkflowCommand {
    /// Change a Rust toolchain version
    Rust {
        /// The toolchain to change
        #[arg(value_enum)]
        toolchain: Toolchain,

        #[command(flatten)]
        edit: EditArgs,
    },
    /// Change a Fedora environment version
    Fedora {
        /// The environment to change
        #[arg(value_enum)]
        environment: Environment,

        #[command(flatten)]
        edit: EditArgs,
    },
}

#[derive(Args)]
struct EditArgs {
    /// The configuration file to read
    file: PathBuf,
    /// The configuration file to write
    outfile: PathBuf,
    /// The old version
    old_version: String,
    /// The new version
    new_version: String,
}

#[derive(Subcommand)]
enum TestConfigCommand {
    /// Print a test configuration naming the given devices
    Generate { devices: Vec<String> },
    /// Print the devices named by a test configuration, comma-separated
    Parse { path: PathBuf },
}

fn auditor(config: &ToolConfig) -> anyhow::Result<DependencyAuditor> {
    let runner = match &config.cargo.program {
        Some(program) => ProcessRunner::new(program),
        None => ProcessRunner::from_env(),
    };
    let catalog = KojiCatalog::new(
        &config.catalog.base_url,
        Duration::from_millis(config.catalog.timeout_ms),
    )
    .context("Failed to create HTTP client")?;

    Ok(DependencyAuditor::new(Arc::new(runner), Arc::new(catalog)))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(cli.verbose, cli.log_file)?;
    let config =
        ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Compare {
            target,
            release,
            format,
        } => {
            let options = AuditOptions {
                manifest_path: target.manifest_path.as_deref(),
                skip_path: target.skip_path || config.cargo.skip_path,
            };
            let report = auditor(&config)?.drift(options, &release).await?;

            match format {
                OutputFormat::Human => {
                    print!("{}", report::render_drift(&report, &release.to_string()))
                }
                OutputFormat::Json => println!("{}", report::render_drift_json(&report)?),
            }
        }
        Command::Check { target } => {
            let options = AuditOptions {
                manifest_path: target.manifest_path.as_deref(),
                skip_path: target.skip_path || config.cargo.skip_path,
            };
            let violations = auditor(&config)?.check(options).await?;

            print!("{}", report::render_violations(&violations));
            if !violations.is_empty() {
                bail!(
                    "{} declared requirements are not satisfied by the resolved tree",
                    violations.len()
                );
            }
        }
        Command::Workflow { action } => {
            let (marker, edit) = match &action {
                WorkflowCommand::Rust { toolchain, edit } => (toolchain.marker(), edit),
                WorkflowCommand::Fedora { environment, edit } => (environment.marker(), edit),
            };
            workflow::update_file(
                &edit.file,
                &edit.outfile,
                marker,
                &edit.old_version,
                &edit.new_version,
            )?;
        }
        Command::TestConfig { action } => match action {
            TestConfigCommand::Generate { devices } => {
                println!("{}", test_config::generate(&devices)?);
            }
            TestConfigCommand::Parse { path } => {
                println!("{}", test_config::parse(&path)?.join(","));
            }
        },
    }

    Ok(())
}
