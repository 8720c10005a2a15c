//! The `essaygrade grade` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use essaygrade_api::{handle_body, load_config_from};

/// Exit code when the request is rejected.
const EXIT_REJECTED: i32 = 2;

pub fn execute(input: Option<PathBuf>, pretty: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let body = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    let reply = handle_body(&body, &config);

    let output = if pretty || config.pretty {
        serde_json::to_string_pretty(&reply.body)?
    } else {
        serde_json::to_string(&reply.body)?
    };
    println!("{output}");

    if !reply.is_success() {
        std::process::exit(EXIT_REJECTED);
    }

    Ok(())
}
