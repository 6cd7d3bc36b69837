use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oav_runner::{render_json, render_text, RenderOptions, Runner};

/// Exit status when the engine could not run at all.
const ENGINE_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "oav", version, about = "Run the validator on resolved API descriptions")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Resolved OpenAPI/Swagger documents (JSON or YAML)
    files: Vec<PathBuf>,

    /// Print the rule that caught each error/warning
    #[arg(short = 'v', long)]
    print_validator_modules: bool,

    /// Ignore any config file and run in default mode
    #[arg(short = 'd', long)]
    default_mode: bool,

    /// Report the frequency of each occurring error/warning
    #[arg(short = 's', long)]
    report_statistics: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize/reset the config file in the current directory
    Init,
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir()?;

    if let Some(Command::Init) = cli.cmd {
        let path = Runner::init_repo(&cwd)?;
        println!("Wrote default config to {}", path.display());
        return Ok(0);
    }

    if cli.files.is_empty() {
        bail!("no files given; run `oav --help` for usage");
    }

    let runner = Runner::open(&cwd, cli.default_mode)?;
    tracing::debug!(files = cli.files.len(), rules = ?runner.rule_ids(), "validating");
    let report = runner.run(&cli.files)?;

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        let opts = RenderOptions {
            print_rule_ids: cli.print_validator_modules,
            report_statistics: cli.report_statistics,
        };
        print!("{}", render_text(&report, opts));
    }

    Ok(report.exit_code())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(ENGINE_FAILURE)
        }
    }
}
