use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use shapeboard::config::EditorConfig;
use shapeboard::engine::{EngineCore, Snapshot};
use shapeboard::error::EditorError;
use shapeboard::script::{Script, replay_to_snapshot};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script {path}: {source}")]
    ReadScript { path: String, source: io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

#[derive(Parser, Debug)]
#[command(name = "shapeboard", about = "Replay a rectangle editing session and print the final scene")]
struct Cli {
    /// Script file to replay, or `-` to read from stdin.
    script: PathBuf,

    /// Pretty-print the snapshot.
    #[arg(long, env = "SHAPEBOARD_PRETTY")]
    pretty: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = EditorConfig::from_env()?;
    let script = load_script(&cli.script)?;
    info!(steps = script.steps.len(), "replaying script");

    let mut core = EngineCore::with_config(config);
    let snapshot = replay_to_snapshot(&mut core, &script);
    print_snapshot(&snapshot, cli.pretty)
}

fn load_script(path: &Path) -> Result<Script, CliError> {
    let display = path.display().to_string();
    let raw = if display == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::ReadScript { path: display.clone(), source })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::ReadScript { path: display.clone(), source })?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn print_snapshot(snapshot: &Snapshot, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty { serde_json::to_string_pretty(snapshot)? } else { serde_json::to_string(snapshot)? };
    println!("{rendered}");
    Ok(())
}
