use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{EntryId, Ledger, SubscriptionEntry, Totals, format_currency};

/// Everything the presentation layer needs to redraw after a mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerView {
    pub currency_symbol: String,
    pub entries: Vec<EntryRow>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRow {
    /// Position to hand back for deletion; only valid for this snapshot.
    pub index: usize,
    pub id: EntryId,
    pub name: String,
    pub cost: f64,
    pub cost_display: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsView {
    pub monthly: f64,
    pub annual: f64,
    pub five_year: f64,
    pub monthly_display: String,
    pub annual_display: String,
    pub five_year_display: String,
}

impl LedgerView {
    pub fn build(ledger: &Ledger, currency_symbol: &str) -> Self {
        let entries = ledger
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRow::build(index, entry, currency_symbol))
            .collect();

        Self {
            currency_symbol: currency_symbol.to_string(),
            entries,
            totals: TotalsView::build(ledger.compute_totals(), currency_symbol),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryRow {
    fn build(index: usize, entry: &SubscriptionEntry, currency_symbol: &str) -> Self {
        Self {
            index,
            id: entry.id,
            name: entry.name.clone(),
            cost: entry.cost,
            cost_display: format_currency(entry.cost, currency_symbol),
            added_at: entry.added_at,
        }
    }
}

impl TotalsView {
    pub fn build(totals: Totals, currency_symbol: &str) -> Self {
        Self {
            monthly: totals.monthly,
            annual: totals.annual,
            five_year: totals.five_year,
            monthly_display: format_currency(totals.monthly, currency_symbol),
            annual_display: format_currency(totals.annual, currency_symbol),
            five_year_display: format_currency(totals.five_year, currency_symbol),
        }
    }

    /// Label/value pairs in display order.
    pub fn lines(&self) -> [(&'static str, &str); 3] {
        [
            ("Monthly", self.monthly_display.as_str()),
            ("Annual", self.annual_display.as_str()),
            ("5-Year", self.five_year_display.as_str()),
        ]
    }
}
