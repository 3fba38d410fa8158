use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No option matching '{key}' in the {catalog} catalog")]
    NotFound { catalog: &'static str, key: String },
}

/// A single selectable search-filter option: the human-readable label and
/// the literal token the remote search endpoint expects for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl Display for SearchOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} [{}]", self.label, self.value)
        }
    }
}

/// A fixed set of search-filter options known at compile time.
///
/// Lookups never fall back to a default: a miss is a [`CatalogError`].
pub trait Catalog: Copy + Sized + 'static {
    const NAME: &'static str;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
    fn value(&self) -> &'static str;

    fn option(&self) -> SearchOption {
        SearchOption {
            label: self.label(),
            value: self.value(),
        }
    }

    /// Case-insensitive lookup by display label.
    fn by_label(label: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|opt| opt.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| CatalogError::NotFound {
                catalog: Self::NAME,
                key: label.to_string(),
            })
    }

    /// Exact lookup by the endpoint's parameter token.
    fn by_value(value: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|opt| opt.value() == value)
            .ok_or_else(|| CatalogError::NotFound {
                catalog: Self::NAME,
                key: value.to_string(),
            })
    }
}

/// An option harvested from a search form at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
    pub bill_count: Option<u32>,
}

impl Display for FacetOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.label, self.value)?;
        if let Some(count) = self.bill_count {
            write!(f, " ({} bills)", count)?;
        }
        Ok(())
    }
}

/// An order-preserving catalog built from options scraped out of a search
/// form page. Same lookup contract as [`Catalog`], immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCatalog {
    name: &'static str,
    options: Vec<FacetOption>,
}

impl FacetCatalog {
    pub fn new(name: &'static str, options: Vec<FacetOption>) -> Self {
        Self { name, options }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn all(&self) -> &[FacetOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn by_label(&self, label: &str) -> Result<&FacetOption, CatalogError> {
        self.options
            .iter()
            .find(|opt| opt.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| CatalogError::NotFound {
                catalog: self.name,
                key: label.to_string(),
            })
    }

    pub fn by_value(&self, value: &str) -> Result<&FacetOption, CatalogError> {
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .ok_or_else(|| CatalogError::NotFound {
                catalog: self.name,
                key: value.to_string(),
            })
    }

    /// Lookup by label first, then by value, for caller-supplied strings
    /// that could reasonably be either.
    pub fn resolve(&self, key: &str) -> Result<&FacetOption, CatalogError> {
        self.by_label(key).or_else(|_| self.by_value(key))
    }
}
