//! Learner input. The session only talks to [`Prompter`], so tests can
//! script a whole run without a terminal.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub trait Prompter {
    /// Next answer line, or `None` once input is exhausted.
    fn answer(&mut self) -> Option<String>;

    /// Ask a yes/no question. Anything other than `y`/`yes` is a no.
    fn confirm(&mut self, question: &str) -> bool;

    /// Wait for the learner before moving on.
    fn pause(&mut self);
}

pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for ReadlinePrompter {
    fn answer(&mut self) -> Option<String> {
        loop {
            match self.editor.readline("answer> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(&line).ok();
                    }
                    return Some(line);
                }
                Err(ReadlineError::Interrupted) => {
                    eprintln!("(Use Ctrl+D or quit to exit)");
                }
                Err(ReadlineError::Eof) => return None,
                Err(e) => {
                    eprintln!("\x1B[31mreadline error: {e}\x1B[0m");
                    return None;
                }
            }
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        match self.editor.readline(&format!("{question} (y/n) ")) {
            Ok(line) => is_yes(&line),
            Err(_) => false,
        }
    }

    fn pause(&mut self) {
        let _ = self.editor.readline("Press Enter to continue...");
    }
}

pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
