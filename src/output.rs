//! Output sinks for sweep records: console table, CSV, JSON.
//!
//! The engine never formats anything itself; callers pick a sink here.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sweep::{COLUMNS, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed console table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array keyed by column name
    Json,
}

/// Row subset selection. Never reorders or alters records.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowFilter {
    pub k: Option<f64>,
    pub z: Option<i64>,
    pub fame: Option<i64>,
}

impl RowFilter {
    pub fn matches(&self, r: &Record) -> bool {
        self.k.is_none_or(|k| (r.k - k).abs() < 1e-6)
            && self.z.is_none_or(|z| r.z == z)
            && self.fame.is_none_or(|x| r.x_current == x)
    }

    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).copied().collect()
    }
}

pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Csv => Ok(render_csv(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

fn cells(r: &Record) -> [String; 8] {
    [
        format!("{:.1}", r.k),
        format!("{:.1}", r.k_total),
        r.z.to_string(),
        r.x_current.to_string(),
        r.y_gained.to_string(),
        r.y_lost.to_string(),
        format!("{:.2}", r.score_won),
        format!("{:.2}", r.score_loss),
    ]
}

pub fn render_table(records: &[Record]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(COLUMNS);
    for r in records {
        table.add_row(cells(r));
    }
    for col in table.column_iter_mut() {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table.to_string()
}

pub fn render_csv(records: &[Record]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for r in records {
        out.push_str(&cells(r).join(","));
        out.push('\n');
    }
    out
}

#[cfg(feature = "system-career_sim")]
pub fn render_trajectory(report: &crate::systems::career_sim::CareerReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["duel", "result", "fame before", "fame after", "score"]);
    for d in &report.trajectory {
        table.add_row([
            d.index.to_string(),
            if d.won { "won".to_string() } else { "lost".to_string() },
            d.fame_before.to_string(),
            d.fame_after.to_string(),
            format!("{:.2}", d.score),
        ]);
    }
    table.to_string()
}
