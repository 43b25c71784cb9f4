//! List-editing commands: add, edit, remove, move, shuffle, clear.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use quizdeck_core::model::{QuestionDraft, QuestionId};
use quizdeck_core::store::Confirmation;

use super::GlobalOpts;

fn parse_id(id: &str) -> Result<QuestionId> {
    id.parse()
        .with_context(|| format!("invalid question id: '{id}'"))
}

pub fn add(opts: &GlobalOpts, question: String, answer: String, points: String) -> Result<()> {
    let mut app = opts.open_app()?;
    let draft = QuestionDraft::new(question, answer, points);
    // Incomplete drafts are dropped without a message.
    let added = app.editor()?.add(draft);
    if let Some(id) = added {
        println!("Added question {id} (Q{})", app.questions().len());
    }
    Ok(())
}

pub fn edit(
    opts: &GlobalOpts,
    id: &str,
    question: Option<String>,
    answer: Option<String>,
    points: Option<String>,
) -> Result<()> {
    let id = parse_id(id)?;
    let mut app = opts.open_app()?;
    let editor = app.editor()?;

    let Some(existing) = editor.get(id) else {
        anyhow::bail!("no question with id {id}");
    };
    let mut draft = QuestionDraft::from_question(existing);
    if let Some(q) = question {
        draft.question = q;
    }
    if let Some(a) = answer {
        draft.answer = a;
    }
    if let Some(p) = points {
        draft.points = Some(p.into());
    }

    if editor.update(id, draft) {
        println!("Updated question {id}");
    }
    Ok(())
}

pub fn remove(opts: &GlobalOpts, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let mut app = opts.open_app()?;
    if app.editor()?.remove(id) {
        println!("Removed question {id}");
    } else {
        println!("No question with id {id}; nothing removed.");
    }
    Ok(())
}

pub fn move_question(opts: &GlobalOpts, from: usize, to: usize) -> Result<()> {
    let mut app = opts.open_app()?;
    let editor = app.editor()?;
    if editor.is_locked() {
        println!("Order is locked; nothing moved.");
        return Ok(());
    }
    let len = editor.len();
    anyhow::ensure!(
        (1..=len).contains(&from) && (1..=len).contains(&to),
        "position out of range (1..={len})"
    );
    editor.reorder(from - 1, to - 1);
    println!("Moved Q{from} to Q{to}");
    Ok(())
}

pub fn shuffle(opts: &GlobalOpts) -> Result<()> {
    let mut app = opts.open_app()?;
    let shuffled = app.editor()?.randomize();
    if shuffled {
        println!("Shuffled {} questions", app.questions().len());
    } else {
        println!("Order is locked; nothing shuffled.");
    }
    Ok(())
}

pub fn clear(opts: &GlobalOpts, yes: bool) -> Result<()> {
    let mut app = opts.open_app()?;
    let count = app.questions().len();
    // Check host mode before prompting.
    app.editor()?;

    let confirmation = if yes {
        Confirmation::Confirmed
    } else {
        prompt_confirmation(&format!("Delete all {count} questions? [y/N] "))?
    };

    if app.clear_all(confirmation)? {
        println!("Cleared {count} questions");
    } else {
        println!("Aborted.");
    }
    Ok(())
}

fn prompt_confirmation(message: &str) -> Result<Confirmation> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(Confirmation::from(answer == "y" || answer == "yes"))
}
