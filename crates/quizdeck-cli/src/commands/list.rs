//! The `quizdeck list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::GlobalOpts;

pub fn execute(opts: &GlobalOpts, json: bool) -> Result<()> {
    let app = opts.open_app()?;

    if json {
        println!("{}", app.export_json()?);
        return Ok(());
    }

    let questions = app.questions();
    if questions.is_empty() {
        println!("No questions yet. Add one with `quizdeck add`.");
        return Ok(());
    }

    let settings = app.settings();
    if !settings.show_questions {
        println!(
            "{} question(s); listing is off (show_questions = false).",
            questions.len()
        );
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["#", "ID", "Question", "Points"];
    if settings.reveal_answers {
        header.push("Answer");
    }
    table.set_header(header);

    for (i, q) in questions.iter().enumerate() {
        let mut row = vec![
            Cell::new(format!("Q{}", i + 1)),
            Cell::new(q.id),
            Cell::new(&q.question),
            Cell::new(format!("{} pts", q.points)),
        ];
        if settings.reveal_answers {
            row.push(Cell::new(&q.answer));
        }
        table.add_row(row);
    }

    println!("{table}");
    if app.store().is_locked() {
        println!("Order is locked.");
    }
    Ok(())
}
