#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use harmoniq_drag::cli::{CliArgs, OutputFormat, StartupConfig, StartupMode};
use harmoniq_drag::config::DragConfig;
use harmoniq_drag::config_paths;
use harmoniq_drag::runtime::{App, TracingNotifier};
use harmoniq_drag::script::Script;
use harmoniq_drag::store::MemoryStore;

fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    harmoniq_drag::tracing::init();

    match &startup.mode {
        StartupMode::InitConfig => init_config(&startup),
        StartupMode::Replay(path) => replay(path, &startup),
    }
}

/// Write the default config where it will be picked up next time
fn init_config(startup: &StartupConfig) -> Result<()> {
    let path = match &startup.config_path {
        Some(path) => path.clone(),
        None => config_paths::config_file().context("No config directory available")?,
    };
    DragConfig::default()
        .save_to(&path)
        .map_err(|e| anyhow!(e))?;
    println!("{}", path.display());
    Ok(())
}

/// Replay a script against an in-memory store and print the final snapshot
fn replay(path: &Path, startup: &StartupConfig) -> Result<()> {
    let config = startup.load_drag_config().map_err(|e| anyhow!(e))?;
    let script = Script::load(path).map_err(|e| anyhow!(e))?;

    let model = script.build_model(config);
    let store = Arc::new(MemoryStore::from_board(&model.board));
    store.set_failing(startup.fail_persist);

    let mut app = App::new(model, store, Box::new(TracingNotifier));
    script
        .replay(&mut app)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Replaying {}", path.display()))?;

    let snapshot = app.model().snapshot();
    let output = match startup.format {
        OutputFormat::Yaml => serde_yaml::to_string(&snapshot)?,
        OutputFormat::Json => serde_json::to_string_pretty(&snapshot)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
