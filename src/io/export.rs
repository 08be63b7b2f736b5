use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::{LedgerView, Session};
use crate::domain::{SubscriptionEntry, Totals};

pub const SNAPSHOT_VERSION: &str = "1";

/// Point-in-time copy of a session, written out as a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub currency_symbol: String,
    pub entries: Vec<SubscriptionEntry>,
    pub totals: Totals,
}

/// Exporter for writing the current session to CSV or JSON
pub struct Exporter<'a> {
    session: &'a Session,
}

impl<'a> Exporter<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Export the subscription list to CSV format
    pub fn export_entries_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["index", "id", "name", "monthly_cost", "added_at"])?;

        let entries = self.session.ledger().entries();
        for (index, entry) in entries.iter().enumerate() {
            csv_writer.write_record(&[
                index.to_string(),
                entry.id.to_string(),
                entry.name.clone(),
                format!("{:.2}", entry.cost),
                entry.added_at.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(entries.len())
    }

    /// Export monthly, annual and five-year totals to CSV format
    pub fn export_totals_csv<W: Write>(&self, writer: W) -> Result<()> {
        let view = self.session.view();
        write_totals_csv(&view, writer)
    }

    /// Export entries and totals as one JSON document
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<SessionSnapshot> {
        let snapshot = SessionSnapshot {
            version: SNAPSHOT_VERSION.to_string(),
            exported_at: Utc::now(),
            currency_symbol: self.session.currency_symbol().to_string(),
            entries: self.session.ledger().entries().to_vec(),
            totals: self.session.totals(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }
}

/// Totals as `period,amount` rows, shared with the one-shot calculator.
pub fn write_totals_csv<W: Write>(view: &LedgerView, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["period", "amount"])?;
    let rows = [
        ("monthly", view.totals.monthly),
        ("annual", view.totals.annual),
        ("five_year", view.totals.five_year),
    ];
    for (period, amount) in rows {
        csv_writer.write_record([period.to_string(), format!("{:.2}", amount)])?;
    }

    csv_writer.flush()?;
    Ok(())
}
