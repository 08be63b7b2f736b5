use serde::{Deserialize, Serialize};

use super::{
    EntryId, IndexError, MONTHS_PER_FIVE_YEARS, MONTHS_PER_YEAR, SubscriptionEntry,
    ValidationError, parse_cost, validate_name,
};

/// Totals derived from the current entries. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub monthly: f64,
    pub annual: f64,
    pub five_year: f64,
}

impl Totals {
    pub fn from_monthly(monthly: f64) -> Self {
        Self {
            monthly,
            annual: monthly * MONTHS_PER_YEAR,
            five_year: monthly * MONTHS_PER_FIVE_YEARS,
        }
    }
}

/// Ordered list of subscriptions for one session.
///
/// Entries keep insertion order and duplicate names are allowed. Every entry
/// has a non-empty name and a finite cost above zero; anything else is
/// rejected before it reaches the list.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    entries: Vec<SubscriptionEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscription. The ledger is untouched on error.
    pub fn add(&mut self, name: &str, cost: f64) -> Result<&SubscriptionEntry, ValidationError> {
        let entry = SubscriptionEntry::new(name, cost)?;
        let index = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    /// Same as [`Ledger::add`], with the cost still as typed text.
    pub fn add_raw(
        &mut self,
        name: &str,
        cost: &str,
    ) -> Result<&SubscriptionEntry, ValidationError> {
        validate_name(name)?;
        let cost = parse_cost(cost)?;
        self.add(name, cost)
    }

    /// Remove the entry currently at `index`; later entries shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<SubscriptionEntry, IndexError> {
        if index >= self.entries.len() {
            return Err(IndexError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Remove by stable id, independent of the entry's current position.
    pub fn remove(&mut self, id: EntryId) -> Result<SubscriptionEntry, IndexError> {
        let index = self
            .position(id)
            .ok_or(IndexError::UnknownId(id))?;
        Ok(self.entries.remove(index))
    }

    /// Drop every entry. Returns how many were removed.
    pub fn reset(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn compute_totals(&self) -> Totals {
        Totals::from_monthly(self.monthly_total())
    }

    /// Sum in insertion order, so the result is stable for a given list.
    /// Costs are individually finite but the sum (or its annual and five-year
    /// multiples) may still overflow to infinity; it is reported as is.
    pub fn monthly_total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.cost).sum()
    }

    pub fn entries(&self) -> &[SubscriptionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SubscriptionEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a list position as typed by the user.
pub fn parse_index(input: &str) -> Result<usize, IndexError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| IndexError::NotAnInteger(trimmed.to_string()))
}
