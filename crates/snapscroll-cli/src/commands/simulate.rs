use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use snapscroll_core::replay::{Replay, Script, TraceEntry};

pub fn run(path: &Path, pretty: bool) -> Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let trace = replay(&json)?;

    tracing::info!(events = trace.len(), "Script replayed");

    let output = if pretty {
        serde_json::to_string_pretty(&trace)?
    } else {
        serde_json::to_string(&trace)?
    };
    println!("{}", output);

    Ok(())
}

fn replay(json: &str) -> Result<Vec<TraceEntry>> {
    let script = Script::from_json(json)?;
    Ok(Replay::run(&script)?)
}
