use tracing::{debug, info, warn};

use crate::domain::{EntryId, Ledger, SubscriptionEntry, Totals, parse_index};

use super::{AppError, LedgerView};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}

/// A user action forwarded by the presentation layer, still as typed.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Add { name: String, cost: String },
    Delete(DeleteTarget),
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    /// Position as shown in the last rendered list.
    Position(String),
    Id(EntryId),
}

/// What a successful intent changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(SubscriptionEntry),
    Removed(SubscriptionEntry),
    Cleared(usize),
}

/// Owns the one ledger for the lifetime of a session.
/// This is the primary interface for any front-end (REPL, one-shot CLI, tests).
pub struct Session {
    ledger: Ledger,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            ledger: Ledger::new(),
            config,
        }
    }

    /// Apply one user intent. On error nothing has changed.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, AppError> {
        match intent {
            Intent::Add { name, cost } => self.add(&name, &cost),
            Intent::Delete(DeleteTarget::Position(raw)) => self.delete_at(&raw),
            Intent::Delete(DeleteTarget::Id(id)) => self.delete(id),
            Intent::Reset => Ok(self.reset()),
        }
    }

    pub fn add(&mut self, name: &str, cost: &str) -> Result<Outcome, AppError> {
        match self.ledger.add_raw(name, cost) {
            Ok(entry) => {
                info!(name = %entry.name, cost = entry.cost, id = %entry.id, "subscription added");
                Ok(Outcome::Added(entry.clone()))
            }
            Err(error) => {
                debug!(%error, name, cost, "subscription rejected");
                Err(error.into())
            }
        }
    }

    /// Delete by position. Index errors are logged and returned, never fatal.
    pub fn delete_at(&mut self, raw_index: &str) -> Result<Outcome, AppError> {
        let result = parse_index(raw_index).and_then(|index| self.ledger.remove_at(index));
        match result {
            Ok(entry) => {
                info!(name = %entry.name, id = %entry.id, "subscription removed");
                Ok(Outcome::Removed(entry))
            }
            Err(error) => {
                warn!(%error, len = self.ledger.len(), "ignoring delete request");
                Err(error.into())
            }
        }
    }

    pub fn delete(&mut self, id: EntryId) -> Result<Outcome, AppError> {
        match self.ledger.remove(id) {
            Ok(entry) => {
                info!(name = %entry.name, id = %entry.id, "subscription removed");
                Ok(Outcome::Removed(entry))
            }
            Err(error) => {
                warn!(%error, "ignoring delete request");
                Err(error.into())
            }
        }
    }

    pub fn reset(&mut self) -> Outcome {
        let removed = self.ledger.reset();
        info!(removed, "ledger reset");
        Outcome::Cleared(removed)
    }

    pub fn totals(&self) -> Totals {
        self.ledger.compute_totals()
    }

    pub fn view(&self) -> LedgerView {
        LedgerView::build(&self.ledger, &self.config.currency_symbol)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
