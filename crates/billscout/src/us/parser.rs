use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::catalog::{Catalog, FacetCatalog, FacetOption};

use super::catalogs::BillType;
use super::types::{BillRow, CongressTerm, SearchFacets};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Missing expected element: {0}")]
    MissingElement(&'static str),
    #[error("Missing expected attribute: {0}")]
    MissingAttribute(&'static str),
    #[error("Malformed {field}: {text}")]
    Malformed { field: &'static str, text: String },
    #[error("Failed to parse date: {0}")]
    DateParse(String),
    #[error("Expected a number for {field}: {text}")]
    NumberParse { field: &'static str, text: String },
    #[error("Unrecognized bill designator: {0}")]
    UnknownDesignator(String),
}

static RE_CONGRESS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*:\s*(\d{4})-(\d{4})(?:\s*\(([\d,]+)\s*bills?\))?\s*$")
        .expect("invalid regex: congress label")
});

static RE_FACET_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*\(([\d,]+)(?:\s*bills?)?\)\s*$").expect("invalid regex: facet count")
});

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text of each text node in a cell; `<br>` breaks show up as
/// node boundaries, so a two-line cell comes out as two entries.
fn cell_lines(cell: ElementRef) -> Vec<String> {
    cell.text()
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .collect()
}

fn extract_parenthesized(text: &str) -> Option<String> {
    let start = text.find('(')?;
    let end = text.rfind(')')?;
    (end > start).then(|| text[start + 1..end].trim().to_string())
}

fn parse_count(text: &str) -> Option<u32> {
    text.replace(',', "").parse().ok()
}

fn parse_short_date(text: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(text, "%b %d, %Y")
        .map_err(|_| ParseError::DateParse(text.to_string()))
}

/// Extract one result-row fragment into a [`BillRow`].
pub fn extract_row(row: ElementRef) -> Result<BillRow, ParseError> {
    let link_sel = Selector::parse("a[href]").unwrap();
    let td_sel = Selector::parse("table td").unwrap();

    let link = row
        .select(&link_sel)
        .next()
        .ok_or(ParseError::MissingElement("title link"))?;
    let url = link
        .value()
        .attr("href")
        .map(str::to_string)
        .ok_or(ParseError::MissingAttribute("href"))?;

    let heading = normalize_whitespace(&elem_text(link));
    // Split on the first colon only; bill titles may contain their own.
    let (designation, title) = heading.split_once(':').ok_or_else(|| ParseError::Malformed {
        field: "title",
        text: heading.clone(),
    })?;
    let title = title.trim().to_string();

    let mut designation_parts = designation.split_whitespace();
    let prefix = designation_parts
        .next()
        .ok_or_else(|| ParseError::Malformed {
            field: "bill designation",
            text: designation.to_string(),
        })?;
    let number = designation_parts
        .next()
        .ok_or_else(|| ParseError::Malformed {
            field: "bill designation",
            text: designation.to_string(),
        })?
        .to_string();
    let bill_type = BillType::by_value(prefix)
        .map_err(|_| ParseError::UnknownDesignator(prefix.to_string()))?;

    let cells: Vec<ElementRef> = row.select(&td_sel).collect();
    if cells.len() < 3 {
        return Err(ParseError::MissingElement("status table cells"));
    }

    let introduced_lines = cell_lines(cells[0]);
    let introduced = parse_short_date(introduced_lines.get(1).ok_or_else(|| {
        ParseError::Malformed {
            field: "introduced cell",
            text: introduced_lines.join(" | "),
        }
    })?)?;

    let status_lines = cell_lines(cells[1]);
    let current_status = status_lines
        .first()
        .cloned()
        .ok_or_else(|| ParseError::Malformed {
            field: "status cell",
            text: String::new(),
        })?;
    let status_date = status_lines
        .get(1)
        .map(|line| parse_short_date(line))
        .transpose()?;

    let cosponsor_lines = cell_lines(cells[2]);
    let cosponsor_detail = cosponsor_lines.get(1).ok_or_else(|| ParseError::Malformed {
        field: "cosponsor cell",
        text: cosponsor_lines.join(" | "),
    })?;
    let count_token =
        cosponsor_detail
            .split_whitespace()
            .next()
            .ok_or_else(|| ParseError::Malformed {
                field: "cosponsor cell",
                text: cosponsor_detail.clone(),
            })?;
    let cosponsor_count = count_token
        .parse::<u32>()
        .map_err(|_| ParseError::NumberParse {
            field: "cosponsor count",
            text: count_token.to_string(),
        })?;
    let cosponsor_parties = extract_parenthesized(cosponsor_detail)
        .map(|inner| {
            inner
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let progression = cells
        .get(3)
        .map(|cell| cell_lines(*cell))
        .and_then(|lines| lines.into_iter().nth(1));

    Ok(BillRow {
        bill_type,
        number,
        title,
        url,
        introduced,
        current_status,
        status_date,
        cosponsor_count,
        cosponsor_parties,
        progression,
    })
}

/// Lazily extract a sequence of row fragments; one fragment's failure
/// does not stop the remaining ones.
pub fn extract_all<'a>(
    fragments: impl IntoIterator<Item = ElementRef<'a>>,
) -> impl Iterator<Item = Result<BillRow, ParseError>> {
    fragments.into_iter().map(extract_row)
}

/// Parse every result row on a browse page; the first malformed row
/// aborts with its error.
pub fn parse_browse_results(html: &str) -> Result<Vec<BillRow>, ParseError> {
    let document = Html::parse_document(html);
    let row_sel = Selector::parse("div.result_item").unwrap();
    extract_all(document.select(&row_sel)).collect()
}

/// Parse every result row on a browse page, skipping malformed rows with
/// a warning.
pub fn parse_browse_results_lossy(html: &str) -> Vec<BillRow> {
    let document = Html::parse_document(html);
    let row_sel = Selector::parse("div.result_item").unwrap();

    extract_all(document.select(&row_sel))
        .filter_map(|result| match result {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("Skipping result row: {}", e);
                None
            }
        })
        .collect()
}

/// Harvest every filter option list the browse form publishes inside the
/// page: congress terms, committees, subjects and status choices.
pub fn parse_search_facets(html: &str) -> Result<SearchFacets, ParseError> {
    let document = Html::parse_document(html);

    Ok(SearchFacets {
        congresses: parse_congress_options(&document)?,
        committees: parse_committee_options(&document)?,
        subjects: parse_subject_options(&document)?,
        statuses: parse_status_choices(&document)?,
    })
}

fn parse_congress_options(document: &Html) -> Result<Vec<CongressTerm>, ParseError> {
    let select_sel = Selector::parse("select#searchform_field_congress").unwrap();
    let option_sel = Selector::parse("option").unwrap();

    let select = document
        .select(&select_sel)
        .next()
        .ok_or(ParseError::MissingElement("congress select"))?;

    let mut terms = Vec::new();
    for option in select.select(&option_sel) {
        let value = option.value().attr("value").unwrap_or("");
        if value == "__ALL__" || value.is_empty() {
            continue;
        }

        let label = normalize_whitespace(&elem_text(option));
        let Some(caps) = RE_CONGRESS_LABEL.captures(&label) else {
            log::warn!("Skipping congress option '{}'", label);
            continue;
        };

        let start_year = caps[2].parse().map_err(|_| ParseError::NumberParse {
            field: "congress start year",
            text: caps[2].to_string(),
        })?;
        let end_year = caps[3].parse().map_err(|_| ParseError::NumberParse {
            field: "congress end year",
            text: caps[3].to_string(),
        })?;

        terms.push(CongressTerm {
            congress: caps[1].to_string(),
            start_year,
            end_year,
            bill_count: caps.get(4).and_then(|m| parse_count(m.as_str())),
        });
    }

    Ok(terms)
}

fn parse_committee_options(document: &Html) -> Result<FacetCatalog, ParseError> {
    let select_sel = Selector::parse("select#searchform_field_committees").unwrap();
    let option_sel = Selector::parse("option").unwrap();

    let select = document
        .select(&select_sel)
        .next()
        .ok_or(ParseError::MissingElement("committees select"))?;

    let mut options = Vec::new();
    for option in select.select(&option_sel) {
        let value = option.value().attr("value").unwrap_or("");
        if value == "__ALL__" || value.is_empty() {
            continue;
        }

        let full_label = normalize_whitespace(&elem_text(option));
        let (label, bill_count) = match RE_FACET_COUNT.captures(&full_label) {
            Some(caps) => (caps[1].to_string(), parse_count(&caps[2])),
            None => (full_label, None),
        };

        options.push(FacetOption {
            label,
            value: value.to_string(),
            bill_count,
        });
    }

    Ok(FacetCatalog::new("committees", options))
}

fn parse_subject_options(document: &Html) -> Result<FacetCatalog, ParseError> {
    let select_sel = Selector::parse("select#searchform_field_terms").unwrap();
    let option_sel = Selector::parse("option").unwrap();

    let select = document
        .select(&select_sel)
        .next()
        .ok_or(ParseError::MissingElement("subjects select"))?;

    let options = select
        .select(&option_sel)
        .filter_map(|option| {
            let value = option.value().attr("value").unwrap_or("");
            if value == "__ALL__" || value.is_empty() {
                return None;
            }
            let label = normalize_whitespace(&elem_text(option));
            if label.is_empty() {
                return None;
            }
            Some(FacetOption {
                label,
                value: value.to_string(),
                bill_count: None,
            })
        })
        .collect();

    Ok(FacetCatalog::new("subjects", options))
}

fn parse_status_choices(document: &Html) -> Result<FacetCatalog, ParseError> {
    let container_sel = Selector::parse("#searchform_field_current_status").unwrap();
    let choice_sel = Selector::parse(".choices").unwrap();
    let input_sel = Selector::parse("input").unwrap();
    let name_sel = Selector::parse(".name").unwrap();
    let count_sel = Selector::parse(".count").unwrap();

    let container = document
        .select(&container_sel)
        .next()
        .ok_or(ParseError::MissingElement("current status choices"))?;

    let mut options = Vec::new();
    for choice in container.select(&choice_sel) {
        let Some(value) = choice
            .select(&input_sel)
            .next()
            .and_then(|input| input.value().attr("value"))
        else {
            log::warn!("Skipping status choice without an input value");
            continue;
        };

        let label = match choice.select(&name_sel).next() {
            Some(name) => normalize_whitespace(&elem_text(name)),
            None => {
                log::warn!("Skipping status choice without a name");
                continue;
            }
        };

        let bill_count = choice
            .select(&count_sel)
            .next()
            .map(|count| elem_text(count))
            .as_deref()
            .and_then(extract_parenthesized_or_plain);

        options.push(FacetOption {
            label,
            value: value.to_string(),
            bill_count,
        });
    }

    Ok(FacetCatalog::new("statuses", options))
}

fn extract_parenthesized_or_plain(text: &str) -> Option<u32> {
    let inner = extract_parenthesized(text).unwrap_or_else(|| text.trim().to_string());
    parse_count(&inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_ROW: &str = r#"
        <div class="result_item">
            <div class="checkbox-col"></div>
            <div class="info-col">
                <div class="heading">
                    <a href="/congress/bills/117/hr1234">H.R. 1234: Agricultural Resilience Act</a>
                </div>
                <div class="details">
                    <table><tr>
                        <td>Introduced<br>Jan 3, 2023</td>
                        <td>Ordered Reported<br>Jun 14, 2023</td>
                        <td>Cosponsors<br>12 (10D, 2R)</td>
                        <td>Progress<br>25%</td>
                    </tr></table>
                </div>
            </div>
        </div>
    "#;

    fn first_row(html: &str) -> Result<BillRow, ParseError> {
        let document = Html::parse_document(html);
        let row_sel = Selector::parse("div.result_item").unwrap();
        let row = document
            .select(&row_sel)
            .next()
            .expect("test HTML should contain a row");
        extract_row(row)
    }

    #[test]
    fn test_extract_well_formed_row() {
        let row = first_row(RESULT_ROW).expect("row should extract");

        assert_eq!(row.bill_type, BillType::HouseBill);
        assert_eq!(row.number, "1234");
        assert_eq!(row.title, "Agricultural Resilience Act");
        assert_eq!(row.url, "/congress/bills/117/hr1234");
        assert_eq!(row.introduced, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
        assert_eq!(row.current_status, "Ordered Reported");
        assert_eq!(
            row.status_date,
            Some(NaiveDate::from_ymd_opt(2023, 6, 14).unwrap())
        );
        assert_eq!(row.cosponsor_count, 12);
        assert_eq!(row.cosponsor_parties, vec!["10D", "2R"]);
        assert_eq!(row.progression.as_deref(), Some("25%"));
        assert_eq!(row.designation(), "H.R. 1234");
    }

    #[test]
    fn test_title_keeps_text_after_later_colons() {
        let html = RESULT_ROW.replace(
            "H.R. 1234: Agricultural Resilience Act",
            "S. 7: Emergency Relief: Second Installment",
        );
        let row = first_row(&html).expect("row should extract");
        assert_eq!(row.bill_type, BillType::SenateBill);
        assert_eq!(row.number, "7");
        assert_eq!(row.title, "Emergency Relief: Second Installment");
    }

    #[test]
    fn test_three_cell_row_has_no_progression() {
        let html = RESULT_ROW.replace("<td>Progress<br>25%</td>", "");
        let row = first_row(&html).expect("row should extract");
        assert_eq!(row.progression, None);
    }

    #[test]
    fn test_cosponsors_without_party_breakdown() {
        let html = RESULT_ROW.replace("12 (10D, 2R)", "3");
        let row = first_row(&html).expect("row should extract");
        assert_eq!(row.cosponsor_count, 3);
        assert!(row.cosponsor_parties.is_empty());
    }

    #[test]
    fn test_non_numeric_cosponsor_count_is_an_error() {
        let html = RESULT_ROW.replace("12 (10D, 2R)", "several");
        let err = first_row(&html).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NumberParse {
                field: "cosponsor count",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_designator_is_an_error() {
        let html = RESULT_ROW.replace("H.R. 1234:", "X.Y. 1234:");
        let err = first_row(&html).unwrap_err();
        assert!(matches!(err, ParseError::UnknownDesignator(_)));
    }

    #[test]
    fn test_missing_title_link_is_an_error() {
        let html = RESULT_ROW.replace(
            r#"<a href="/congress/bills/117/hr1234">H.R. 1234: Agricultural Resilience Act</a>"#,
            "H.R. 1234: Agricultural Resilience Act",
        );
        let err = first_row(&html).unwrap_err();
        assert!(matches!(err, ParseError::MissingElement("title link")));
    }

    #[test]
    fn test_status_without_date() {
        let html = RESULT_ROW.replace(
            "<td>Ordered Reported<br>Jun 14, 2023</td>",
            "<td>Introduced</td>",
        );
        let row = first_row(&html).expect("row should extract");
        assert_eq!(row.current_status, "Introduced");
        assert_eq!(row.status_date, None);
    }

    #[test]
    fn test_lossy_batch_keeps_well_formed_rows() {
        let broken = RESULT_ROW.replace("12 (10D, 2R)", "several");
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            RESULT_ROW,
            broken,
            RESULT_ROW.replace("1234", "5678")
        );

        let rows = parse_browse_results_lossy(&html);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, "1234");
        assert_eq!(rows[1].number, "5678");

        assert!(parse_browse_results(&html).is_err());
    }

    const SEARCH_FORM: &str = r#"
        <form>
            <select id="searchform_field_congress">
                <option value="__ALL__">All</option>
                <option value="118">118: 2023-2025 (19,234 bills)</option>
                <option value="117">117: 2021-2023 (17,817 bills)</option>
            </select>
            <select id="searchform_field_committees">
                <option value="__ALL__">All</option>
                <option value="2650">House Agriculture (104 bills)</option>
                <option value="2651">House Armed Services (88 bills)</option>
            </select>
            <select id="searchform_field_terms">
                <option value="__ALL__">All</option>
                <option value="5816">Agriculture and food</option>
                <option value="5840">Armed forces and national security</option>
            </select>
            <div id="searchform_field_current_status">
                <div class="choices">
                    <input type="checkbox" value="28"><label><span class="name">Introduced</span> <span class="count">(11,423)</span></label>
                </div>
                <div class="choices">
                    <input type="checkbox" value="32"><label><span class="name">Enacted — Signed by the President</span> <span class="count">(214)</span></label>
                </div>
            </div>
        </form>
    "#;

    #[test]
    fn test_parse_search_facets() {
        let facets = parse_search_facets(SEARCH_FORM).expect("facets should parse");

        assert_eq!(facets.congresses.len(), 2);
        let first = &facets.congresses[0];
        assert_eq!(first.congress, "118");
        assert_eq!(first.start_year, 2023);
        assert_eq!(first.end_year, 2025);
        assert_eq!(first.bill_count, Some(19234));

        assert_eq!(facets.committees.len(), 2);
        let agriculture = facets.committees.by_label("House Agriculture").unwrap();
        assert_eq!(agriculture.value, "2650");
        assert_eq!(agriculture.bill_count, Some(104));

        assert_eq!(facets.subjects.len(), 2);
        assert_eq!(
            facets.subjects.by_value("5816").unwrap().label,
            "Agriculture and food"
        );

        assert_eq!(facets.statuses.len(), 2);
        let introduced = facets.statuses.by_label("Introduced").unwrap();
        assert_eq!(introduced.value, "28");
        assert_eq!(introduced.bill_count, Some(11423));
    }

    #[test]
    fn test_all_sentinel_is_skipped() {
        let facets = parse_search_facets(SEARCH_FORM).unwrap();
        assert!(facets.congress("__ALL__").is_err());
        assert!(facets.committees.by_value("__ALL__").is_err());
    }

    #[test]
    fn test_congress_lookup_by_number() {
        let facets = parse_search_facets(SEARCH_FORM).unwrap();
        assert_eq!(facets.congress("117").unwrap().start_year, 2021);
        assert!(facets.congress("90").is_err());
    }

    #[test]
    fn test_missing_form_section_is_an_error() {
        let html = SEARCH_FORM.replace("searchform_field_congress", "something_else");
        let err = parse_search_facets(&html).unwrap_err();
        assert!(matches!(err, ParseError::MissingElement("congress select")));
    }
}
