//! REPL (Read-Eval-Print Loop) for an interactive duel session

use crate::display::ConsoleDisplay;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use duel_application::{HttpFetcher, TriggerController};
use duel_domain::vote::ParseSideError;
use duel_domain::{Control, OutputFormat, Side};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Lines kept in the history file
const HISTORY_CAPACITY: usize = 500;

/// Whether session chatter must stay off stdout for `format`.
///
/// JSON output keeps stdout a pure event stream.
fn chatter_to_stderr(format: OutputFormat) -> bool {
    format == OutputFormat::Json
}

/// A parsed REPL input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Generate,
    Cat,
    Jumbotron,
    Vote(Side),
    Score,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "generate" | "g" => Self::Generate,
            "cat" => Self::Cat,
            "jumbotron" | "j" => Self::Jumbotron,
            "vote" | "v" => {
                let side = words
                    .next()
                    .ok_or_else(|| "usage: vote dog|cat".to_string())?;
                Self::Vote(side.parse().map_err(|e: ParseSideError| e.to_string())?)
            }
            "score" | "s" => Self::Score,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(format!(
                    "Unknown command: {}\nType help for available commands",
                    other
                ));
            }
        };

        if words.next().is_some() {
            return Err(format!("{}: too many arguments", head));
        }
        Ok(Some(command))
    }
}

/// Interactive session REPL
pub struct DuelRepl<F: HttpFetcher + 'static> {
    controller: Arc<TriggerController<F, ConsoleDisplay>>,
    display: Arc<ConsoleDisplay>,
}

impl<F: HttpFetcher + 'static> DuelRepl<F> {
    pub fn new(
        controller: Arc<TriggerController<F, ConsoleDisplay>>,
        display: Arc<ConsoleDisplay>,
    ) -> Self {
        Self {
            controller,
            display,
        }
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("pet-duel").join("history.txt"))
    }

    fn editor() -> Reedline {
        let editor = Reedline::create();
        let Some(path) = Self::history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(_) => editor,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> io::Result<()> {
        let mut editor = Self::editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("pet-duel".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.controller.initialize();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match ReplCommand::parse(&line) {
                    Ok(Some(ReplCommand::Quit)) => {
                        self.say("Bye!");
                        break;
                    }
                    Ok(Some(command)) => self.dispatch(command).await,
                    Ok(None) => continue,
                    Err(message) => self.say(&message),
                },
                Signal::CtrlC => {
                    self.say("^C");
                    continue;
                }
                Signal::CtrlD => {
                    self.say("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    async fn dispatch(&self, command: ReplCommand) {
        let result = match command {
            ReplCommand::Generate => self.controller.on_trigger().await.map(|_| ()),
            ReplCommand::Cat => self.controller.on_generate_cat().await.map(|_| ()),
            ReplCommand::Jumbotron => self.controller.on_load_text().await.map(|_| ()),
            ReplCommand::Vote(side) => {
                // The clear runs in the background while the prompt waits
                let _receipt = self.controller.on_vote(side);
                Ok(())
            }
            ReplCommand::Score => {
                println!(
                    "{}",
                    ConsoleFormatter::format_tally(&self.controller.tally(), self.display.format())
                );
                Ok(())
            }
            ReplCommand::Help => {
                self.print_help();
                Ok(())
            }
            ReplCommand::Quit => Ok(()),
        };

        if let Err(e) = result {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
        }
    }

    fn label(&self, control: Control) -> String {
        self.display
            .control_view(control)
            .filter(|view| view.visible)
            .map(|view| view.label)
            .unwrap_or_else(|| "(unavailable)".dimmed().to_string())
    }

    /// Print free text where it cannot corrupt the event stream
    fn say(&self, text: &str) {
        if chatter_to_stderr(self.display.format()) {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    fn print_welcome(&self) {
        self.say(&welcome_text());
    }

    fn print_help(&self) {
        self.say(&help_text(|control| self.label(control)));
    }
}

fn welcome_text() -> String {
    [
        "",
        "╭─────────────────────────────────────────────╮",
        "│            pet-duel - Cat vs Dog            │",
        "╰─────────────────────────────────────────────╯",
        "",
        "Type help for available commands",
        "",
    ]
    .join("\n")
}

fn help_text(label: impl Fn(Control) -> String) -> String {
    [
        String::new(),
        "Commands:".to_string(),
        format!("  generate, g      - {}", label(Control::DuelButton)),
        format!("  cat              - {}", label(Control::CatButton)),
        format!("  jumbotron, j     - {}", label(Control::JumbotronButton)),
        "  vote dog|cat     - Vote for a picture".to_string(),
        "  score, s         - Show the score".to_string(),
        "  help, h, ?       - Show this help".to_string(),
        "  quit, exit, q    - Exit".to_string(),
        String::new(),
    ]
    .join("\n")
}
