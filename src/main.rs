//! JSON-lines reward driver.
//!
//! Reads one [`RewardRequest`] per stdin line and writes one result per stdout
//! line. Logs go to stderr.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Context;
use mimalloc::MiMalloc;
use serde_json::json;

use title_reward::{Config, RewardEngine, RewardRequest};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let engine = RewardEngine::from_config(&config)?;

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut failures = 0usize;
    let mut scored = 0usize;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line_no = index + 1;
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = serde_json::from_str::<RewardRequest>(&line)
            .map_err(anyhow::Error::from)
            .and_then(|request| request.evaluate(&engine).map_err(anyhow::Error::from));

        let record = match result {
            Ok(breakdown) => {
                scored += 1;
                json!({ "line": line_no, "reward": breakdown.total, "breakdown": breakdown })
            }
            Err(e) => {
                failures += 1;
                tracing::warn!(line = line_no, error = %e, "Failed to score request");
                json!({ "line": line_no, "error": e.to_string() })
            }
        };

        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    tracing::info!(scored, failures, "Scoring finished");

    if failures > 0 {
        anyhow::bail!("{failures} request(s) failed");
    }
    Ok(())
}
