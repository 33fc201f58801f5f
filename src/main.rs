use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use explorer_results::actions::{DesktopHost, SystemShell, UnavailableIndexingService};
use explorer_results::indexer::walk_entities;
use explorer_results::paths::{is_volume_root, normalize_windows_path};
use explorer_results::search::{rank_entities, SkimScorer};
use explorer_results::{
    ActionDispatcher, ExplorerSettings, Modifiers, QueryContext, ResultFactory, ResultRecord,
    VolumeUsage,
};

#[derive(Parser, Debug)]
#[command(name = "explorer-results")]
#[command(about = "Turn filesystem matches into launcher results")]
struct Args {
    #[arg(default_value = "")]
    query: String,
    #[arg(long, default_value = ".")]
    root: PathBuf,
    #[arg(long, default_value_t = 20)]
    limit: usize,
    /// Keyword the query was invoked with; empty for global queries.
    #[arg(long, default_value = "")]
    action_keyword: String,
    /// Explorer settings JSON file.
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    no_dirs: bool,
    /// Print full result records as JSON lines.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Invoke the result at this position (0-based).
    #[arg(long)]
    invoke: Option<usize>,
    #[arg(long, default_value_t = false)]
    ctrl: bool,
    #[arg(long, default_value_t = false)]
    shift: bool,
}

fn load_settings(args: &Args) -> Result<ExplorerSettings> {
    match &args.settings {
        Some(path) => Ok(ExplorerSettings::load(path)?),
        None => Ok(ExplorerSettings::default()),
    }
}

fn print_record(record: &ResultRecord, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(record).context("failed to serialize result")?;
        println!("{line}");
    } else {
        println!(
            "[{:6}] {}\t{}\t{}",
            record.score, record.title, record.subtitle, record.autocomplete_text
        );
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args)?;
    let query = QueryContext::new(args.query.trim(), args.action_keyword.clone());
    let limit = args.limit.min(1000);

    let entities = walk_entities(&args.root, true, !args.no_dirs)?;
    let scorer = SkimScorer::new();
    let ranked = rank_entities(&scorer, &query.search, entities, limit);
    info!(count = ranked.len(), query = %query.search, "ranked matches");

    let host = Arc::new(DesktopHost);
    let factory = ResultFactory::new(host.as_ref(), &scorer);
    let mut records = Vec::with_capacity(ranked.len() + 1);
    let root = normalize_windows_path(
        args.root
            .canonicalize()
            .with_context(|| format!("failed to canonicalize root {}", args.root.display()))?,
    );
    if is_volume_root(&root) {
        let usage = VolumeUsage::for_path(&root)?;
        records.push(factory.create_volume_space_result(
            &root.to_string_lossy(),
            usage,
            false,
            &settings,
        ));
    }
    records.extend(
        ranked
            .iter()
            .map(|entity| factory.create_result(&query, entity, &settings)),
    );

    let Some(index) = args.invoke else {
        for record in &records {
            print_record(record, args.json)?;
        }
        return Ok(());
    };

    let Some(record) = records.get(index) else {
        bail!("no result at position {index} ({} results)", records.len());
    };
    let modifiers = Modifiers {
        secondary: args.ctrl,
        tertiary: args.shift,
    };
    let dispatcher = ActionDispatcher::new(
        host,
        Arc::new(SystemShell),
        Arc::new(UnavailableIndexingService),
    );
    let keep_open = dispatcher.execute(record, modifiers, &settings);
    dispatcher.join_background();
    info!(keep_open, path = %record.context.full_path, "invoked result");
    Ok(())
}

fn main() -> Result<()> {
    explorer_results::logging::init()?;
    let args = Args::parse();
    run(&args)
}
