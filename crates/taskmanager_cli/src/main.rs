//! Headless task list driver.
//!
//! # Responsibility
//! - Read one command per stdin line and forward it to the core store.
//! - Print the rendered list after each mutating command.
//!
//! Commands: `type <text>`, `add`, `toggle <id>`, `delete <id>`, `show`,
//! `help`, `quit`.

use log::{info, warn};
use std::io::{self, BufRead, Write};
use taskmanager_core::{default_log_level, Gesture, TaskId, TaskListStore, TaskListView};

const LOG_DIR_ENV: &str = "TASKMANAGER_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TASKMANAGER_LOG_LEVEL";
const USAGE: &str = "commands: type <text> | add | toggle <id> | delete <id> | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Gesture(Gesture),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    match word {
        // Draft text is kept verbatim so leading/trailing spaces survive.
        "type" => Ok(Command::Gesture(Gesture::TextChanged(rest.to_string()))),
        "add" => Ok(Command::Gesture(Gesture::AddButtonPressed)),
        "toggle" => parse_id(rest).map(|id| Command::Gesture(Gesture::TaskPressed(id))),
        "delete" => parse_id(rest).map(|id| Command::Gesture(Gesture::DeletePressed(id))),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn parse_id(raw: &str) -> Result<TaskId, String> {
    raw.parse::<TaskId>().map_err(|err| err.to_string())
}

fn render(view: &TaskListView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", view.header_title)?;
    if let Some(message) = view.empty_message {
        writeln!(out, "  {message}")?;
    }
    for row in &view.rows {
        let mark = if row.completed { "x" } else { " " };
        writeln!(out, "  [{mark}] #{} {}", row.key, row.text)?;
    }
    if view.draft_text.is_empty() {
        writeln!(out, "> ({})", view.input_placeholder)
    } else {
        writeln!(out, "> {}", view.draft_text)
    }
}

fn run(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut store = TaskListStore::new();
    render(&TaskListView::from_snapshot(&store.snapshot()), out)?;

    for line in input.lines() {
        match parse_command(&line?) {
            Ok(Command::Gesture(gesture)) => {
                let outcome = store.dispatch(gesture);
                if !outcome.is_applied() {
                    writeln!(out, "(nothing changed)")?;
                }
                render(&TaskListView::from_snapshot(&store.snapshot()), out)?;
            }
            Ok(Command::Show) => render(&TaskListView::from_snapshot(&store.snapshot()), out)?,
            Ok(Command::Help) => writeln!(out, "{USAGE}")?,
            Ok(Command::Quit) => break,
            Err(message) => writeln!(out, "{message}; {USAGE}")?,
        }
    }
    Ok(())
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    match taskmanager_core::init_logging(&level, &log_dir) {
        Ok(()) => info!("event=cli_start module=cli status=ok"),
        Err(err) => eprintln!("logging disabled: {err}"),
    }
}

fn main() -> io::Result<()> {
    init_logging_from_env();
    println!(
        "taskmanager_core ping={} version={}",
        taskmanager_core::ping(),
        taskmanager_core::core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(stdin.lock(), &mut stdout.lock());
    if let Err(err) = &result {
        warn!("event=cli_exit module=cli status=error error={err}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, Command};
    use taskmanager_core::Gesture;

    #[test]
    fn parse_command_keeps_draft_verbatim() {
        assert_eq!(
            parse_command("type  two spaces "),
            Ok(Command::Gesture(Gesture::TextChanged(
                " two spaces ".to_string()
            )))
        );
        assert_eq!(
            parse_command("type"),
            Ok(Command::Gesture(Gesture::TextChanged(String::new())))
        );
    }

    #[test]
    fn parse_command_rejects_bad_ids_and_unknown_words() {
        assert!(parse_command("toggle nope").is_err());
        assert!(parse_command("delete 0").is_err());
        assert!(parse_command("launch").is_err());
        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn scripted_session_renders_final_state() {
        let script = "type a\nadd\ntype b\nadd\ntoggle 1\ndelete 2\nadd\nquit\ntype ignored\n";
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).expect("in-memory run should succeed");
        let text = String::from_utf8(out).expect("output should be UTF-8");

        assert!(text.starts_with("== Task Manager ==\n  No tasks added yet.\n"));
        assert!(text.contains("(nothing changed)"));
        let last_frame = text
            .rsplit("== Task Manager ==")
            .next()
            .expect("at least one frame");
        assert!(last_frame.contains("[x] #1 a"));
        assert!(!last_frame.contains("#2"));
        assert!(!text.contains("ignored"));
    }
}
