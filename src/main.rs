use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use modeler_launch::args::{build_launch_plan, ArgumentResolver, LaunchPlan};
use modeler_launch::config::Config;
use modeler_launch::logging::init_tracing;

/// Program token prepended to the forwarded argv; the resolver skips it.
const PROGRAM_TOKEN: &str = "modeler";

#[derive(Debug, Parser)]
#[command(
    name = "modeler-launch",
    version,
    about = "Resolve file arguments and feature flags for a modeler launch"
)]
struct Cli {
    /// Directory relative file arguments are resolved against
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Print the launch plan as JSON
    #[arg(long)]
    json: bool,

    /// Extra flag applied after configured and command-line flags (repeatable)
    #[arg(long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
    flags: Vec<String>,

    /// Launch arguments: files and flags, after `--`
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<OsString>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load().context("loading configuration")?;

    let cwd = match cli.cwd.or_else(|| config.cwd.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().context("reading current directory")?,
    };

    let raw_args = std::iter::once(OsString::from(PROGRAM_TOKEN)).chain(cli.args);
    let plan = build_launch_plan(
        &ArgumentResolver::new(),
        raw_args,
        &cwd,
        &config.flags,
        cli.flags,
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan(&plan));
    }
    Ok(())
}

fn render_plan(plan: &LaunchPlan) -> String {
    let mut out = String::new();

    out.push_str("files:\n");
    for file in &plan.files {
        out.push_str(&format!("  {}\n", file.display()));
    }

    out.push_str("flags:\n");
    for flag in &plan.effective_flags {
        out.push_str(&format!("  {}\n", flag));
    }

    if !plan.skipped.is_empty() {
        out.push_str("skipped:\n");
        for skipped in &plan.skipped {
            out.push_str(&format!("  {} ({})\n", skipped.token, skipped.reason));
        }
    }
    out
}
