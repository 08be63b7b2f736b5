use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, Write};
use uuid::Uuid;

use crate::application::{AppError, DeleteTarget, Intent, LedgerView, Outcome, Session};
use crate::domain::format_currency;
use crate::io::Exporter;

const PROMPT: &str = "> ";
const NAME_WIDTH: usize = 24;

const HELP: &str = "\
Commands:
  add <name> <cost>          Add a subscription (cost is the last word)
  delete <position|id>       Remove a subscription (alias: rm)
  reset                      Remove every subscription (alias: clear)
  list                       Show subscriptions (alias: ls)
  totals                     Show monthly, annual and 5-year totals
  export <entries|totals|full> [file]
                             Write CSV (entries, totals) or JSON (full)
  help                       Show this help
  quit                       End the session (alias: exit)";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Intent(Intent),
    List,
    Totals,
    Export { kind: String, path: Option<String> },
    Help,
    Quit,
}

/// Parse a line of user input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, AppError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => return Ok(None),
        "add" => {
            // Cost is the last word; everything before it is the name.
            let (name, cost) = rest
                .rsplit_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            Command::Intent(Intent::Add {
                name: name.trim().to_string(),
                cost: cost.to_string(),
            })
        }
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err(AppError::InvalidInput(
                    "usage: delete <position|id>".to_string(),
                ));
            }
            let target = match Uuid::parse_str(rest) {
                Ok(id) => DeleteTarget::Id(id),
                Err(_) => DeleteTarget::Position(rest.to_string()),
            };
            Command::Intent(Intent::Delete(target))
        }
        "reset" | "clear" => Command::Intent(Intent::Reset),
        "list" | "ls" => Command::List,
        "totals" => Command::Totals,
        "export" => {
            if rest.is_empty() {
                return Err(AppError::InvalidInput(
                    "usage: export <entries|totals|full> [file]".to_string(),
                ));
            }
            // Everything after the kind is the path, spaces included.
            let (kind, path) = match rest.split_once(char::is_whitespace) {
                Some((kind, path)) => (kind, Some(path.trim().to_string())),
                None => (rest, None),
            };
            Command::Export {
                kind: kind.to_lowercase(),
                path,
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command '{}' (type 'help')",
                other
            )));
        }
    };

    Ok(Some(command))
}

/// Line-oriented front-end over a [`Session`].
pub struct Repl {
    session: Session,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands until `quit` or end of input. The session is dropped
    /// with the REPL; nothing is saved.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "Subscription tracker. Type 'help' for commands.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut output)?,
                Ok(None) => {}
                Err(error) => writeln!(output, "{}", error)?,
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Execute one command. Only failures writing to `output` are returned.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Intent(intent) => match self.session.apply(intent) {
                Ok(outcome) => {
                    self.report_outcome(&outcome, output)?;
                    let view = self.session.view();
                    render_list(&view, output)?;
                    render_totals(&view, output)?;
                }
                Err(AppError::Validation(error)) => {
                    writeln!(
                        output,
                        "Please enter a valid service name and a monthly cost greater than {}0.",
                        self.session.currency_symbol()
                    )?;
                    writeln!(output, "  ({})", error)?;
                }
                Err(error) => writeln!(output, "{}", error)?,
            },
            Command::List => render_list(&self.session.view(), output)?,
            Command::Totals => render_totals(&self.session.view(), output)?,
            Command::Export { kind, path } => {
                if let Err(error) = self.export(&kind, path.as_deref(), output) {
                    writeln!(output, "Export failed: {:#}", error)?;
                }
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn report_outcome<W: Write>(&self, outcome: &Outcome, output: &mut W) -> Result<()> {
        let symbol = self.session.currency_symbol();
        match outcome {
            Outcome::Added(entry) => writeln!(
                output,
                "Added {} ({}/month)",
                entry.name,
                format_currency(entry.cost, symbol)
            )?,
            Outcome::Removed(entry) => writeln!(output, "Removed {}", entry.name)?,
            Outcome::Cleared(count) => writeln!(output, "Cleared {} subscription(s)", count)?,
        }
        Ok(())
    }

    fn export<W: Write>(&self, kind: &str, path: Option<&str>, output: &mut W) -> Result<()> {
        if !matches!(kind, "entries" | "totals" | "full") {
            anyhow::bail!(invalid_export_kind(kind));
        }
        let exporter = Exporter::new(&self.session);

        match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path))?;
                match kind {
                    "entries" => {
                        let count = exporter.export_entries_csv(file)?;
                        writeln!(output, "Exported {} subscriptions to {}", count, path)?;
                    }
                    "totals" => {
                        exporter.export_totals_csv(file)?;
                        writeln!(output, "Exported totals to {}", path)?;
                    }
                    "full" => {
                        let snapshot = exporter.export_full_json(file)?;
                        writeln!(
                            output,
                            "Exported {} subscriptions and totals to {}",
                            snapshot.entries.len(),
                            path
                        )?;
                    }
                    _ => anyhow::bail!(invalid_export_kind(kind)),
                }
            }
            None => match kind {
                "entries" => {
                    exporter.export_entries_csv(&mut *output)?;
                }
                "totals" => exporter.export_totals_csv(&mut *output)?,
                "full" => {
                    exporter.export_full_json(&mut *output)?;
                }
                _ => anyhow::bail!(invalid_export_kind(kind)),
            },
        }
        Ok(())
    }
}

fn invalid_export_kind(kind: &str) -> String {
    format!(
        "Invalid export type '{}'. Valid types: entries, totals, full",
        kind
    )
}

/// One row per subscription: position, name and formatted monthly cost.
pub fn render_list<W: Write>(view: &LedgerView, output: &mut W) -> Result<()> {
    if view.is_empty() {
        writeln!(output, "No subscriptions yet.")?;
        return Ok(());
    }

    writeln!(output, "{:>3}  {:<NAME_WIDTH$} {:>12}", "#", "SERVICE", "MONTHLY")?;
    writeln!(output, "{}", "-".repeat(NAME_WIDTH + 18))?;
    for row in &view.entries {
        writeln!(
            output,
            "{:>3}  {:<NAME_WIDTH$} {:>12}",
            row.index,
            truncate(&row.name, NAME_WIDTH),
            row.cost_display
        )?;
    }
    Ok(())
}

pub fn render_totals<W: Write>(view: &LedgerView, output: &mut W) -> Result<()> {
    for (label, value) in view.totals.lines() {
        writeln!(output, "{:<8} {:>14}", format!("{}:", label), value)?;
    }
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
