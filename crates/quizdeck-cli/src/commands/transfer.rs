//! The `quizdeck import`, `export` and `report` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizdeck_report::{write_report, ReportFormat};

use super::GlobalOpts;

pub fn import(opts: &GlobalOpts, file: PathBuf) -> Result<()> {
    let mut app = opts.open_app()?;
    let bytes = std::fs::read(&file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;
    let count = app.import_json(&bytes)?;
    println!("Imported {count} questions from {}", file.display());
    Ok(())
}

pub fn export(opts: &GlobalOpts, output: PathBuf) -> Result<()> {
    let app = opts.open_app()?;

    if output.as_os_str() == "-" {
        println!("{}", app.export_json()?);
        return Ok(());
    }

    quizdeck_core::transfer::write_export(app.questions(), &output)
        .with_context(|| format!("failed to write export to {}", output.display()))?;
    println!(
        "Exported {} questions to {}",
        app.questions().len(),
        output.display()
    );
    Ok(())
}

pub fn report(opts: &GlobalOpts, output: Option<PathBuf>, format: String) -> Result<()> {
    let format: ReportFormat = format.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let app = opts.open_app()?;
    let path = output.unwrap_or_else(|| PathBuf::from(format.default_file_name()));

    write_report(
        &app.settings().report_title,
        app.questions(),
        format,
        &path,
    )?;
    println!("{format} report: {}", path.display());
    Ok(())
}
