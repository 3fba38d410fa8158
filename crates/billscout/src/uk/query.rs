use crate::catalog::Catalog;
use crate::query::{QueryString, encode};

use super::catalogs::{BillStage, BillType, CurrentHouse, Session, SortOrder};

/// Builder for a bills.parliament.uk search URL.
///
/// Parameter names match the search form's field ids, so a built URL is
/// exactly what submitting the form would request. Filters are typed
/// catalog options; only the search term is free text.
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
        self.query.set("SearchTerm", encode(term.trim()));
        self
    }

    pub fn session(mut self, session: Session) -> Self {
        self.query.set("Session", session.value());
        self
    }

    pub fn stage(mut self, stage: BillStage) -> Self {
        self.query.set("BillStage", stage.value());
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.query.set("BillSortOrder", order.value());
        self
    }

    pub fn bill_type(mut self, bill_type: BillType) -> Self {
        self.query.set("BillType", bill_type.value());
        self
    }

    pub fn house(mut self, house: CurrentHouse) -> Self {
        self.query.set("CurrentHouse", house.value());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.query.set("page", page.to_string());
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_is_bare_base_url() {
        let search = BillSearch::new();
        assert_eq!(search.build(), "https://bills.parliament.uk");
    }

    #[test]
    fn test_term_is_space_encoded() {
        let search = BillSearch::new().term("European Union");
        assert_eq!(
            search.build(),
            "https://bills.parliament.uk?SearchTerm=European+Union"
        );
    }

    #[test]
    fn test_filters_serialize_in_setter_order() {
        let search = BillSearch::new()
            .term("Agriculture Act")
            .session(Session::S2019_21)
            .stage(BillStage::FirstReading)
            .bill_type(BillType::Hybrid);
        assert_eq!(
            search.build(),
            "https://bills.parliament.uk?SearchTerm=Agriculture+Act&Session=35&BillStage=6,1&BillType=4"
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let search = BillSearch::new()
            .house(CurrentHouse::Neither)
            .sort(SortOrder::Oldest);
        assert_eq!(search.build(), search.build());
        assert_eq!(
            search.build(),
            "https://bills.parliament.uk?CurrentHouse=3&BillSortOrder=2"
        );
    }

    #[test]
    fn test_page_parameter() {
        let search = BillSearch::new().session(Session::S2017_19).page(3);
        assert_eq!(
            search.build(),
            "https://bills.parliament.uk?Session=30&page=3"
        );
    }
}
