use colored::*;
use gcalc::format::to_fixed;
use gcalc::{evaluate, DISPLAY_DIGITS};
use rustyline::{error::ReadlineError, Config, DefaultEditor};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct RGBValues {
    pub message: (u8, u8, u8),
    pub result: (u8, u8, u8),
    pub error: (u8, u8, u8),
}

pub const COLOURS: RGBValues = RGBValues {
    message: (0x00, 0xC8, 0xC8), // Cyan
    result: (0xE6, 0xD2, 0x32),  // Yellow
    error: (0xDC, 0x3C, 0x32),   // Red
};

/// Formats the outcome of one line the way the shell prints it.
pub fn render(line: &str, colours: &RGBValues) -> ColoredString {
    match evaluate(line) {
        Ok(value) => format!("Result: {}", to_fixed(&value, DISPLAY_DIGITS)).truecolor(
            colours.result.0,
            colours.result.1,
            colours.result.2,
        ),
        Err(err) => format!("Error: {}", err).truecolor(
            colours.error.0,
            colours.error.1,
            colours.error.2,
        ),
    }
}

fn message(text: &str, colours: &RGBValues) {
    println!(
        "{}",
        text.truecolor(colours.message.0, colours.message.1, colours.message.2)
    );
}

/// Line history file, `~/.gcalc_history`.
pub fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gcalc_history"))
}

/// Runs the interactive loop until `q`, Ctrl-C, Ctrl-D or a read error.
pub fn run(history: Option<PathBuf>) -> rustyline::Result<()> {
    let colours = &COLOURS;
    message("Welcome to gcalc, the command-line calculator!", colours);
    message(
        "Enter an expression (+, -, *, / and parentheses), or 'q' to quit.",
        colours,
    );
    message("Use the left and right arrow keys to move the cursor.", colours);

    let config = Config::builder().auto_add_history(false).build();
    let mut rl = DefaultEditor::with_config(config)?;
    if let Some(path) = &history {
        if let Err(err) = rl.load_history(path) {
            debug!(path = %path.display(), %err, "no history loaded");
        }
    }

    let outcome = session(&mut rl, colours);

    if let Some(path) = &history {
        if let Err(err) = rl.save_history(path) {
            warn!(path = %path.display(), %err, "failed to save history");
        }
    }
    message("Thanks for using gcalc, goodbye!", colours);
    outcome
}

fn session(rl: &mut DefaultEditor, colours: &RGBValues) -> rustyline::Result<()> {
    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => {
                debug!(%err, "readline failed");
                return Ok(());
            }
        };
        let line = line.trim();
        if line == "q" {
            return Ok(());
        }
        if !line.is_empty() {
            rl.add_history_entry(line)?;
        }

        debug!(input = line, "evaluating");
        println!("{}", render(line, colours));
    }
}
