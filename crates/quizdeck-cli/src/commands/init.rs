//! The `quizdeck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizdeck.toml").exists() {
        println!("quizdeck.toml already exists, skipping.");
    } else {
        std::fs::write("quizdeck.toml", SAMPLE_CONFIG)?;
        println!("Created quizdeck.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizdeck host unlock <code>");
    println!("  2. Run: quizdeck add --question \"2+2?\" --answer 4 --points 1");
    println!("  3. Run: quizdeck play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizdeck configuration

# Where questions and the host flag are stored.
data_file = "quizdeck-data.json"

[settings]
lock_order = false
show_questions = true
reveal_answers = true

# Count down think_time_secs, then auto_reveal_secs, then show the answer.
auto_reveal = false
auto_reveal_secs = 10
think_time_secs = 15

# Move on auto_next_secs after the answer is shown.
auto_next = false
auto_next_secs = 5

report_title = "Quiz Questions"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config = quizdeck_core::settings::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.settings.think_time_secs, 15);
        assert!(!config.settings.auto_reveal);
    }
}
