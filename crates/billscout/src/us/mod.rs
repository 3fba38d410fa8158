pub mod catalogs;
pub mod parser;
pub mod query;
pub mod scraper;
pub mod types;

pub use query::BillSearch;
pub use scraper::{ScraperError, WebScraper};

pub(crate) const BASE_URL: &str = "https://www.govtrack.us/congress/bills/browse";
