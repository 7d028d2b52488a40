//! Read-eval loop driving a `FormModel` from line input.

use std::io::{self, BufRead, Write};

use signup_lib::{FormModel, SubmitOutcome};

use crate::command::{Command, HELP};
use crate::console::{render_form, render_record};

/// Run commands from `input` until it ends or `quit` is read.
pub fn run(input: impl BufRead, out: &mut impl Write, form: &mut FormModel) -> io::Result<()> {
    writeln!(out, "{}", HELP)?;
    for line in input.lines() {
        let line = line?;
        if !execute(Command::parse(&line), out, form)? {
            break;
        }
    }
    Ok(())
}

/// Apply one command. Returns `false` when the shell should stop.
fn execute(command: Command, out: &mut impl Write, form: &mut FormModel) -> io::Result<bool> {
    match command {
        Command::Empty => {}
        Command::Set { key, value } => {
            if !form.set_field_by_key(&key, value) {
                writeln!(out, "unknown field '{}'", key)?;
            }
        }
        Command::Show => render_form(out, form)?,
        Command::Submit => {
            // Same gate as a disabled submit button.
            if !form.is_complete() {
                writeln!(out, "every field must be filled in before submitting")?;
            } else if form.submit() == SubmitOutcome::Rejected {
                render_form(out, form)?;
            }
        }
        Command::Saved => match form.records().load() {
            Ok(Some(user)) => render_record(out, &user)?,
            Ok(None) => writeln!(out, "no user registered yet")?,
            Err(e) => writeln!(out, "could not read the registered user: {}", e)?,
        },
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
