//! Filter catalogs for the govtrack.us bill browser.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Bill designators as they prefix a result row title, e.g. `H.R. 1234`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillType {
    All,
    HouseBill,
    SenateBill,
    HouseResolution,
    SenateResolution,
    HouseJointResolution,
    SenateJointResolution,
    HouseConcurrentResolution,
    SenateConcurrentResolution,
}

impl Catalog for BillType {
    const NAME: &'static str = "bill type";
    const ALL: &'static [Self] = &[
        BillType::All,
        BillType::HouseBill,
        BillType::SenateBill,
        BillType::HouseResolution,
        BillType::SenateResolution,
        BillType::HouseJointResolution,
        BillType::SenateJointResolution,
        BillType::HouseConcurrentResolution,
        BillType::SenateConcurrentResolution,
    ];

    fn label(&self) -> &'static str {
        match self {
            BillType::All => "All Bills",
            BillType::HouseBill => "House Bill",
            BillType::SenateBill => "Senate Bill",
            BillType::HouseResolution => "House Resolution",
            BillType::SenateResolution => "Senate Resolution",
            BillType::HouseJointResolution => "House Joint Resolution",
            BillType::SenateJointResolution => "Senate Joint Resolution",
            BillType::HouseConcurrentResolution => "House Concurrent Resolution",
            BillType::SenateConcurrentResolution => "Senate Concurrent Resolution",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            BillType::All => "All",
            BillType::HouseBill => "H.R.",
            BillType::SenateBill => "S.",
            BillType::HouseResolution => "H.Res.",
            BillType::SenateResolution => "S.Res.",
            BillType::HouseJointResolution => "H.J.Res.",
            BillType::SenateJointResolution => "S.J.Res.",
            BillType::HouseConcurrentResolution => "H.Con.Res.",
            BillType::SenateConcurrentResolution => "S.Con.Res.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    ProScore,
    NewestFirst,
    OldestFirst,
    LastMajorAction,
    MostCosponsors,
    FewestCosponsors,
}

impl Catalog for SortOrder {
    const NAME: &'static str = "sort order";
    const ALL: &'static [Self] = &[
        SortOrder::Relevance,
        SortOrder::ProScore,
        SortOrder::NewestFirst,
        SortOrder::OldestFirst,
        SortOrder::LastMajorAction,
        SortOrder::MostCosponsors,
        SortOrder::FewestCosponsors,
    ];

    fn label(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance of Title/Text",
            SortOrder::ProScore => "Secret Sauce",
            SortOrder::NewestFirst => "Introduced Date (Newest First)",
            SortOrder::OldestFirst => "Introduced Date (Oldest First)",
            SortOrder::LastMajorAction => "Last Major Action (Recent First)",
            SortOrder::MostCosponsors => "Cosponsors (Most First)",
            SortOrder::FewestCosponsors => "Cosponsors (Fewest First)",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::ProScore => "-proscore",
            SortOrder::NewestFirst => "-introduced_date",
            SortOrder::OldestFirst => "introduced_date",
            SortOrder::LastMajorAction => "-current_status_date",
            SortOrder::MostCosponsors => "-cosponsor_count",
            SortOrder::FewestCosponsors => "cosponsor_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Democrat,
    Republican,
    Independent,
}

impl Catalog for Party {
    const NAME: &'static str = "sponsor party";
    const ALL: &'static [Self] = &[Party::Democrat, Party::Republican, Party::Independent];

    fn label(&self) -> &'static str {
        match self {
            Party::Democrat => "Democrat",
            Party::Republican => "Republican",
            Party::Independent => "Independent",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            Party::Democrat => "Democrat",
            Party::Republican => "Republican",
            Party::Independent => "Independent",
        }
    }
}
