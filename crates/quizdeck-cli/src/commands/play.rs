//! The `quizdeck play` command: interactive quiz playback.
//!
//! Input lines and timer polls are multiplexed on one task, so a tick and a
//! keypress never interleave inside a transition.

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use quizdeck_core::clock::{Metronome, SystemClock};
use quizdeck_core::playback::{PlaybackController, PlaybackEvent};
use quizdeck_core::timer::Phase;

use super::GlobalOpts;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const HELP: &str = "Commands: [a] show/hide answer  [n] next question  [p] pause/resume  [q] quit";

pub async fn execute(
    opts: &GlobalOpts,
    auto_reveal: Option<u32>,
    auto_next: Option<u32>,
    think_time: Option<u32>,
) -> Result<()> {
    let mut app = opts.open_app()?;

    if auto_reveal.is_some() || auto_next.is_some() || think_time.is_some() {
        let mut settings = app.settings().clone();
        if let Some(secs) = auto_reveal {
            settings = settings.with_auto_reveal(secs);
        }
        if let Some(secs) = auto_next {
            settings = settings.with_auto_next(secs);
        }
        if let Some(secs) = think_time {
            settings = settings.with_think_time(secs);
        }
        app.update_settings(settings)?;
    }

    let session = app.start_quiz()?;
    println!("{HELP}");
    render_question(session);
    let mut last_phase = render_phase(session, None);

    let clock = SystemClock::new();
    let mut metronome = Metronome::new(&clock);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut poll = tokio::time::interval(POLL_INTERVAL);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                let events = session.catch_up(&mut metronome, &clock);
                render_events(session, &events);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.trim() {
                    "a" => {
                        let events = session.toggle_answer();
                        render_events(session, &events);
                    }
                    "n" => {
                        let events = session.skip();
                        if events.is_empty() {
                            println!("This is the last question.");
                        }
                        render_events(session, &events);
                    }
                    "p" => {
                        let events = session.toggle_pause();
                        if events.contains(&PlaybackEvent::Resumed) {
                            // Count the next second from the moment of resuming.
                            metronome.restart(&clock);
                        }
                        render_events(session, &events);
                    }
                    "q" => break,
                    "" => render_question(session),
                    _ => println!("{HELP}"),
                }
            }
        }
        last_phase = render_phase(session, last_phase);
    }

    app.exit_quiz();
    println!("Quiz ended.");
    Ok(())
}

fn render_question(session: &PlaybackController) {
    let view = session.view();
    println!();
    println!(
        "Question {} / {} ({} pts)",
        view.number, view.total, view.points
    );
    println!("{}", view.question);
    if let Some(answer) = view.answer {
        println!("Answer: {answer}");
    }
}

fn render_events(session: &PlaybackController, events: &[PlaybackEvent]) {
    for event in events {
        match event {
            PlaybackEvent::AnswerShown => {
                if let Some(answer) = session.view().answer {
                    println!("Answer: {answer}");
                }
            }
            PlaybackEvent::AnswerHidden => println!("(answer hidden)"),
            PlaybackEvent::Advanced(_) => render_question(session),
            PlaybackEvent::Paused => println!("Paused."),
            PlaybackEvent::Resumed => println!("Resumed."),
        }
    }
}

/// Print the countdown indicator whenever it changes.
fn render_phase(session: &PlaybackController, last: Option<Phase>) -> Option<Phase> {
    let phase = session.phase();
    if Some(phase) != last && phase.remaining().is_some() {
        println!("  {phase}");
    }
    Some(phase)
}
