//! The `quizdeck settings` command.

use anyhow::{Context, Result};

use super::GlobalOpts;

pub fn execute(opts: &GlobalOpts) -> Result<()> {
    let config = opts.load_config()?;
    let rendered =
        toml::to_string_pretty(&config).context("failed to render settings as TOML")?;
    println!("{rendered}");
    Ok(())
}
