use crate::catalog::{Catalog, FacetCatalog};
use crate::query::{QueryError, QueryString, encode};

use super::catalogs::{BillType, Party, SortOrder};
use super::types::CongressTerm;

/// Builder for a govtrack.us bill browser URL.
///
/// Static filters take typed catalog options. Filters whose option lists
/// only exist inside the form page (congress, committee, subject, status)
/// resolve caller-supplied strings against harvested [`FacetCatalog`]s and
/// reject anything outside them.
#[derive(Debug, Clone)]
pub struct BillSearch {
    query: QueryString,
}

impl BillSearch {
    pub fn new() -> Self {
        Self {
            query: QueryString::new(super::BASE_URL),
        }
    }

    pub fn term(mut self, term: &str) -> Self {
        self.query.set("text", encode(term.trim()));
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.query.set("sort", order.value());
        self
    }

    pub fn congress(mut self, term: &CongressTerm) -> Self {
        self.query.set("congress", term.congress.clone());
        self
    }

    pub fn bill_type(mut self, bill_type: BillType) -> Self {
        self.query.set("bill_type", bill_type.value());
        self
    }

    pub fn party(mut self, party: Party) -> Self {
        self.query.set("sponsor_party", party.value());
        self
    }

    pub fn committee(
        mut self,
        committees: &FacetCatalog,
        committee: &str,
    ) -> Result<Self, QueryError> {
        let option = committees
            .resolve(committee)
            .map_err(|_| QueryError::InvalidFilter {
                filter: "committees",
                value: committee.to_string(),
            })?;
        self.query.set("committees", option.value.clone());
        Ok(self)
    }

    pub fn subject(mut self, subjects: &FacetCatalog, subject: &str) -> Result<Self, QueryError> {
        let option = subjects
            .resolve(subject)
            .map_err(|_| QueryError::InvalidFilter {
                filter: "terms",
                value: subject.to_string(),
            })?;
        self.query.set("terms", option.value.clone());
        Ok(self)
    }

    pub fn status(mut self, statuses: &FacetCatalog, status: &str) -> Result<Self, QueryError> {
        let option = statuses
            .resolve(status)
            .map_err(|_| QueryError::InvalidFilter {
                filter: "current_status",
                value: status.to_string(),
            })?;
        self.query.set("current_status", option.value.clone());
        Ok(self)
    }

    /// Filter by sponsoring member; GovTrack identifies members by a
    /// numeric person id.
    pub fn sponsor(mut self, person_id: &str) -> Result<Self, QueryError> {
        let id = numeric_id("sponsor", person_id)?;
        self.query.set("sponsor", id);
        Ok(self)
    }

    pub fn cosponsor(mut self, person_id: &str) -> Result<Self, QueryError> {
        let id = numeric_id("cosponsors", person_id)?;
        self.query.set("cosponsors", id);
        Ok(self)
    }

    pub fn build(&self) -> String {
        self.query.build()
    }
}

impl Default for BillSearch {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_id(filter: &'static str, id: &str) -> Result<String, QueryError> {
    let id = id.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(QueryError::InvalidFilter {
            filter,
            value: id.to_string(),
        });
    }
    Ok(id.to_string())
}
