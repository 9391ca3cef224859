use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use sheet_widgets::SheetConfig;

use crate::error::{HarnessError, Result};
use crate::script::{Script, run_script};

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// JSON script to replay.
    pub script: PathBuf,

    /// Simulated frame length in milliseconds.
    #[arg(long = "frame-ms", default_value_t = 16)]
    pub frame_ms: u64,

    /// TOML or JSON sheet config; overrides the script's `config`.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn load_script(path: &Path) -> Result<Script> {
    let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Script::from_json_str(&text).map_err(|source| HarnessError::Script {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<SheetConfig> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        SheetConfig::from_json_file(path)?
    } else {
        SheetConfig::from_toml_file(path)?
    };
    Ok(config)
}

pub fn run_replay(args: ReplayArgs, out: &mut impl Write) -> Result<()> {
    if args.frame_ms == 0 {
        return Err(HarnessError::invalid("--frame-ms must be > 0"));
    }
    let script = load_script(&args.script)?;
    let config = args.config.as_deref().map(load_config).transpose()?;

    tracing::info!(
        script = %args.script.display(),
        steps = script.steps.len(),
        frame_ms = args.frame_ms,
        "replay.start"
    );
    let records = run_script(&script, config, Duration::from_millis(args.frame_ms))?;
    for record in &records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
