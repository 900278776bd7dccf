#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use srcviz::cli::Args;
use srcviz::crawl::{build_ignore_set, CrawlConfig, WalkdirCrawler};
use srcviz::state::{CrawlOutcome, CrawlRequest, SharedState};
use srcviz::{event_loop, output, watcher};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("srcviz: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(args.log_level());

    // A root that cannot be resolved is reported by the crawl itself.
    let path = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());

    let own_output = args
        .output
        .as_deref()
        .map(|out| output::self_written_paths(&path, out))
        .unwrap_or_default();
    let mut ignore = args.ignore.clone();
    ignore.extend(output::relative_globs(&path, &own_output));

    let config = CrawlConfig {
        follow_symlinks: args.follow_symlinks,
        ignore_patterns: build_ignore_set(&ignore),
    };
    let request = CrawlRequest::parse(path.to_string_lossy(), &args.exts)?;
    let state = SharedState::default();

    let outcome = state.crawl(&request, &WalkdirCrawler, &config);
    report(&outcome);
    anyhow::ensure!(outcome.is_success(), "{}", outcome.status);
    output::write_snapshot(&state, args.output.as_deref(), args.pretty)?;

    if !args.watch {
        return Ok(());
    }

    // The handle must stay alive for notifications to keep flowing.
    let (_watch_handle, fs_rx) = watcher::start_watcher(&path, args.debounce_ms, &own_output)
        .context("failed to start watcher")?;
    let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })
    .context("failed to install Ctrl-C handler")?;

    info!(root = %path.display(), debounce_ms = args.debounce_ms, "watching");
    let exit = event_loop::run(
        &state,
        &request,
        &WalkdirCrawler,
        &config,
        &fs_rx,
        &stop_rx,
        |state, outcome| {
            report(outcome);
            if !outcome.is_success() {
                return;
            }
            if let Err(e) = output::write_snapshot(state, args.output.as_deref(), args.pretty) {
                error!("{e:#}");
            }
        },
    );
    info!(?exit, "watch stopped");
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn report(outcome: &CrawlOutcome) {
    if outcome.is_success() {
        info!("{}", outcome.title);
    } else {
        error!("{}", outcome.title);
    }
}
