//! The `essaygrade serve` command.
//!
//! Each stdin line is one request body; each stdout line is the matching
//! `{"status": ..., "body": ...}` reply.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use essaygrade_api::{handle_body, load_config_from, ROUTE};

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::info!(route = ROUTE, "serving grade requests on stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut handled = 0usize;
    let mut rejected = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read request from stdin")?
    {
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_body(&line, &config);
        if !reply.is_success() {
            rejected += 1;
        }
        handled += 1;

        let mut out = serde_json::to_string(&reply)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("stdin closed: {handled} request(s), {rejected} rejected");
    Ok(())
}
