use anyhow::Context;
use clap::Parser;
use generator::profile::build_session_from_config;
use lcdash::views::FocusMatch;
use lcdash::SessionData;
use publish::Publisher;
use std::fs;
use std::path::{Path, PathBuf};
use workflow::config::ReplayConfig;
use workflow::runner::{load_script, Runner};

mod generator;
mod publish;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Replays widget events through the run dashboard")]
struct Args {
    /// Load a replay config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Exported run data (`{"all_data": .., "viz_data": ..}` JSON)
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Events script, one widget state or `focus <model>` per line
    #[arg(long)]
    events: Option<PathBuf>,
    /// Write JSON lines here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, default_value_t = 3)]
    models: usize,
    #[arg(long, default_value_t = 20)]
    steps: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    base_year: Option<i64>,
    /// Match remembered focus by name prefix instead of exact name
    #[arg(long, default_value_t = false)]
    prefix_focus: bool,
}

fn load_dataset(path: &Path) -> anyhow::Result<SessionData> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing dataset {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = args.config.as_ref() {
        ReplayConfig::load(path)?
    } else {
        ReplayConfig::from_args(args.models, args.steps, args.seed)
    };
    config.dataset = args.dataset.or(config.dataset);
    config.events = args.events.or(config.events);
    config.output = args.output.or(config.output);
    if let Some(base_year) = args.base_year {
        config.session.base_year = base_year;
    }
    if args.prefix_focus {
        config.session.focus_match = FocusMatch::Prefix;
    }

    let data = match config.dataset.as_ref() {
        Some(path) => load_dataset(path)?,
        None => build_session_from_config(&config.generator)?,
    };
    let events = match config.events.as_ref() {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    let mut publisher = match config.output.as_ref() {
        Some(path) => Publisher::to_file(path)?,
        None => Publisher::stdout(),
    };

    publisher.publish_status(&format!(
        "replaying {} events over {} models",
        events.len(),
        data.dataset().len()
    ));
    let mut runner = Runner::new(data, config.session.clone());
    let metrics = runner.execute(&events, &mut publisher)?;
    let published = publisher.finish()?;

    eprintln!(
        "Replay -> frames {}, redraws {}, focus changes {}, empty comparisons {}, hidden inspectors {}",
        published,
        metrics.redraws,
        metrics.focus_changes,
        metrics.empty_comparisons,
        metrics.hidden_inspectors
    );

    Ok(())
}
