use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::catalog::{Catalog, CatalogError, FacetCatalog};

use super::catalogs::BillType;

/// One result row from the bill browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRow {
    pub bill_type: BillType,
    /// The bill's number within its designator, e.g. "1234" for H.R. 1234.
    pub number: String,
    pub title: String,
    pub url: String,
    pub introduced: NaiveDate,
    pub current_status: String,
    pub status_date: Option<NaiveDate>,
    pub cosponsor_count: u32,
    /// Party breakdown of the cosponsors, e.g. ["10D", "2R"].
    pub cosponsor_parties: Vec<String>,
    /// Percentage-style progression indicator, when the row carries one.
    pub progression: Option<String>,
}

impl BillRow {
    /// Canonical designation, e.g. "H.R. 1234".
    pub fn designation(&self) -> String {
        format!("{} {}", self.bill_type.value(), self.number)
    }
}

impl Display for BillRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌─ {}: {}", self.designation(), self.title)?;
        writeln!(f, "│  Introduced: {}", self.introduced)?;
        write!(f, "│  Status:     {}", self.current_status)?;
        if let Some(date) = self.status_date {
            write!(f, " ({})", date)?;
        }
        writeln!(f)?;
        write!(f, "│  Cosponsors: {}", self.cosponsor_count)?;
        if !self.cosponsor_parties.is_empty() {
            write!(f, " ({})", self.cosponsor_parties.join(", "))?;
        }
        writeln!(f)?;
        if let Some(progression) = &self.progression {
            writeln!(f, "│  Progress:   {}", progression)?;
        }
        write!(f, "└─ {}", self.url)
    }
}

/// One meeting of Congress as the browse form's congress filter lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongressTerm {
    /// The filter token, e.g. "118".
    pub congress: String,
    pub start_year: u16,
    pub end_year: u16,
    pub bill_count: Option<u32>,
}

impl Display for CongressTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}-{}", self.congress, self.start_year, self.end_year)?;
        if let Some(count) = self.bill_count {
            write!(f, " ({} bills)", count)?;
        }
        Ok(())
    }
}

/// The filter option lists the browse form only publishes inside the form
/// page itself, harvested in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFacets {
    pub congresses: Vec<CongressTerm>,
    pub committees: FacetCatalog,
    pub subjects: FacetCatalog,
    pub statuses: FacetCatalog,
}

impl SearchFacets {
    /// Look up a congress by its number, e.g. "118".
    pub fn congress(&self, number: &str) -> Result<&CongressTerm, CatalogError> {
        self.congresses
            .iter()
            .find(|term| term.congress == number.trim())
            .ok_or_else(|| CatalogError::NotFound {
                catalog: "congress",
                key: number.to_string(),
            })
    }
}
