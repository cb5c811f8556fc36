//! Walks Langton's ant from the center of a square grid to its edge.
//!
//! Writes the trail to `ant_<size>.png` and prints the number of colored
//! cells.
//!
//!   `cargo run -p ant-escape`                       - 1024x1024, prints the count
//!   `cargo run -p ant-escape -- --size 256`         - smaller grid
//!   `cargo run -p ant-escape -- --json -o trail.png` - JSON report, custom path

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use unshape_ant::{DEFAULT_SIZE, RunReport, SimulationConfig};

#[derive(Parser, Debug)]
#[command(
    name = "ant-escape",
    version,
    about = "Run Langton's ant until it reaches the grid edge"
)]
struct Cli {
    /// Grid width and height in cells.
    #[arg(short, long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    /// Image path (defaults to ant_<size>.png).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the full run report as JSON instead of the bare count.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let config = SimulationConfig::new(self.size);
        match &self.output {
            Some(path) => config.with_output(path),
            None => config,
        }
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if size == 0 {
        return Err("size must be positive".to_string());
    }
    Ok(size)
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let report = unshape_ant::run(&config)
        .with_context(|| format!("simulate {}x{} grid", config.size, config.size))?;
    info!(
        steps = report.steps,
        colored = report.colored,
        output = %report.output().display(),
        "done"
    );

    println!("{}", render(&report, cli.json)?);
    Ok(())
}

fn render(report: &RunReport, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(report).context("serialize run report")
    } else {
        Ok(report.colored.to_string())
    }
}
