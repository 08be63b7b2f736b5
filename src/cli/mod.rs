mod repl;

pub use repl::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, Write};

use crate::application::{AppError, LedgerView, Session, SessionConfig};
use crate::io::write_totals_csv;

/// Subtally - Subscription Cost Tracker
#[derive(Parser)]
#[command(name = "subtally")]
#[command(about = "Track recurring subscriptions and see their monthly, annual and five-year cost")]
#[command(version)]
pub struct Cli {
    /// Currency symbol shown in front of every amount
    #[arg(long, global = true, default_value = "$")]
    pub currency: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to an interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (the list is discarded on exit)
    Session,

    /// Compute totals for a fixed set of subscriptions
    Calc {
        /// Subscription as NAME=COST (e.g., "Netflix=15.99"); repeatable
        #[arg(short, long = "sub", value_name = "NAME=COST", required = true)]
        subs: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            currency_symbol: self.currency.clone(),
        }
    }

    pub fn run(self) -> Result<()> {
        let config = self.session_config();

        match self.command {
            None | Some(Commands::Session) => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                let mut repl = Repl::new(Session::new(config));
                repl.run(stdin.lock(), stdout.lock())?;
            }

            Some(Commands::Calc {
                subs,
                format,
                output,
            }) => {
                let session = session_from_pairs(config, &subs)?;

                let writer: Box<dyn Write> = match &output {
                    Some(path) => {
                        let file = File::create(path)
                            .with_context(|| format!("Failed to create output file: {}", path))?;
                        Box::new(file)
                    }
                    None => Box::new(io::stdout()),
                };
                write_calc_report(&session.view(), format, writer)?;

                if let Some(path) = output {
                    eprintln!("Wrote totals for {} subscriptions to {}", subs.len(), path);
                }
            }
        }

        Ok(())
    }
}

/// Split `NAME=COST` on the last `=` so names may contain one.
pub fn parse_pair(pair: &str) -> Result<(&str, &str), AppError> {
    pair.rsplit_once('=').ok_or_else(|| {
        AppError::InvalidInput(format!("'{}' is not in NAME=COST form", pair))
    })
}

/// Build a session from `NAME=COST` pairs, failing on the first invalid one.
pub fn session_from_pairs(config: SessionConfig, pairs: &[String]) -> Result<Session> {
    let mut session = Session::new(config);
    for pair in pairs {
        let (name, cost) = parse_pair(pair)?;
        session
            .add(name, cost)
            .with_context(|| format!("Rejected subscription '{}'", pair))?;
    }
    Ok(session)
}

pub fn write_calc_report<W: Write>(
    view: &LedgerView,
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            render_list(view, &mut writer)?;
            writeln!(writer)?;
            render_totals(view, &mut writer)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, view)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => write_totals_csv(view, writer)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("Netflix=15.99").unwrap(), ("Netflix", "15.99"));
        assert_eq!(parse_pair("A=B=3").unwrap(), ("A=B", "3"));
        assert!(matches!(
            parse_pair("Netflix"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_session_from_pairs_rejects_invalid() {
        let pairs = vec!["Netflix=15.99".to_string(), "Gym=0".to_string()];
        let err = session_from_pairs(SessionConfig::default(), &pairs)
            .err()
            .unwrap();
        assert!(err.to_string().contains("Gym=0"));
    }

    #[test]
    fn test_calc_csv_report() {
        let pairs = vec!["A=10".to_string(), "B=20".to_string()];
        let session = session_from_pairs(SessionConfig::default(), &pairs).unwrap();
        let mut buffer = Vec::new();

        write_calc_report(&session.view(), OutputFormat::Csv, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "period,amount\nmonthly,30.00\nannual,360.00\nfive_year,1800.00\n"
        );
    }

    #[test]
    fn test_cli_parses_calc() {
        let cli = Cli::try_parse_from([
            "subtally",
            "--currency",
            "€",
            "calc",
            "--sub",
            "Netflix=15.99",
            "-s",
            "Gym=30",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.session_config().currency_symbol, "€");
        match cli.command {
            Some(Commands::Calc { subs, format, .. }) => {
                assert_eq!(subs.len(), 2);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected calc command"),
        }
    }

    #[test]
    fn test_cli_defaults_to_session() {
        let cli = Cli::try_parse_from(["subtally"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.currency, "$");
    }
}
