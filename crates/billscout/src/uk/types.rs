use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One bill card from a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillCard {
    pub title: String,
    /// Parliamentary session the bill belongs to, e.g. "2019-2021".
    pub session: String,
    /// House the bill originated in.
    pub originated: String,
    /// Name of the next stage, e.g. "2nd reading".
    pub next_stage: String,
    /// House and sitting information for the next stage.
    pub next_stage_detail: String,
    pub last_updated: NaiveDateTime,
    /// Categorical bill type as the card advertises it, e.g.
    /// "Government Bill".
    pub bill_type: String,
}

impl Display for BillCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌─ {}", self.title)?;
        writeln!(f, "│  Session:    {}", self.session)?;
        writeln!(f, "│  Originated: {}", self.originated)?;
        write!(f, "│  Next stage: {}", self.next_stage)?;
        if !self.next_stage_detail.is_empty() {
            write!(f, " ({})", self.next_stage_detail)?;
        }
        writeln!(f)?;
        writeln!(f, "│  Type:       {}", self.bill_type)?;
        write!(
            f,
            "└─ Last updated {}",
            self.last_updated.format("%d %B %Y %H:%M")
        )
    }
}
