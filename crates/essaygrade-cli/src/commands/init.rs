//! The `essaygrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("essaygrade.toml").exists() {
        println!("essaygrade.toml already exists, skipping.");
    } else {
        std::fs::write("essaygrade.toml", SAMPLE_CONFIG)?;
        println!("Created essaygrade.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit essaygrade.toml to taste");
    println!("  2. Run: essaygrade demo");
    println!("  3. Run: echo '{{\"jawaban_siswa\": \"...\", \"kunci_jawaban\": \"...\"}}' | essaygrade grade");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# essaygrade configuration

# Reported as `id_soal` when a request does not carry one.
default_question_id = "unspecified"

# Longest accepted answer, in characters. 0 disables the limit.
max_answer_chars = 20000

# Pretty-print JSON from `essaygrade grade`.
pretty = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = essaygrade_api::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, essaygrade_api::EssaygradeConfig::default());
    }
}
