//! Interactive REPL for the Lambda language.
//!
//! A thin [`Host`] realisation over a rustyline editor: the driver loop in
//! `lambda-interp` stays in charge, this crate only supplies prompting,
//! line editing, history, and the blank line printed after every result or
//! diagnostic for visual separation.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lambda_eval::BindingTable;
use lambda_interp::{continuation_prefix, Host, IncludeSet, Interpreter};

/// Prompt configuration.
pub struct ReplConfig {
    /// The primary prompt (default: `>>> `).
    pub prompt: String,
    /// The prompt shown for backslash-continued lines (default: `... `).
    pub continuation: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            continuation: "... ".to_string(),
        }
    }
}

/// The rustyline-backed [`Host`].
pub struct Repl {
    editor: DefaultEditor,
    config: ReplConfig,
    exhausted: bool,
}

impl Repl {
    pub fn new(config: ReplConfig) -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            config,
            exhausted: false,
        })
    }
}

impl Host for Repl {
    fn read(&mut self) -> String {
        let mut source = String::new();
        let mut prompt = self.config.prompt.as_str();

        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    source.push_str(&line);
                    match continuation_prefix(&source) {
                        Some(prefix) => {
                            let keep = prefix.len();
                            source.truncate(keep);
                            prompt = self.config.continuation.as_str();
                        }
                        None => break,
                    }
                }
                // Ctrl-C abandons the current line; it reads as a comment.
                Err(ReadlineError::Interrupted) => {
                    source.clear();
                    break;
                }
                // Ctrl-D or a broken terminal ends the session.
                Err(_) => {
                    self.exhausted = true;
                    break;
                }
            }
        }

        if !source.is_empty() {
            let _ = self.editor.add_history_entry(source.as_str());
        }
        source
    }

    fn print(&mut self, message: &str) {
        println!("{message}\n");
    }

    fn print_error(&mut self, message: &str) {
        eprintln!("{message}\n");
    }

    fn at_end(&mut self) -> bool {
        self.exhausted
    }
}

/// Run an interactive session seeded with `bindings` and `includes`;
/// returns the final binding table when the user ends the session.
pub fn run_repl(
    config: ReplConfig,
    bindings: BindingTable,
    includes: IncludeSet,
) -> rustyline::Result<BindingTable> {
    let repl = Repl::new(config)?;
    let mut session = Interpreter::with_seed(repl, bindings, includes);
    Ok(session.run())
}
