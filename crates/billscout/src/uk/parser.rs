use chrono::{NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};

use super::types::BillCard;

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
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of an element with every text node normalized and joined by a
/// single space, so `<br>`-separated lines come out as one line.
fn joined_text(element: ElementRef) -> String {
    element
        .text()
        .map(normalize_whitespace)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a literal label prefix (case-insensitive) if present.
fn strip_label_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => text[prefix.len()..].trim_start(),
        _ => text,
    }
}

fn parse_last_updated(text: &str) -> Result<NaiveDateTime, ParseError> {
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%d %B %Y at %H:%M") {
        return Ok(stamp);
    }

    // Older cards omit the time of day.
    NaiveDate::parse_from_str(text, "%d %B %Y")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ParseError::DateParse(text.to_string()))
}

/// Extract one bill card fragment into a [`BillCard`].
///
/// Every field is located by a fixed class-keyed selector relative to the
/// fragment root; an absent element or attribute is an error, never a
/// default.
pub fn extract_card(card: ElementRef) -> Result<BillCard, ParseError> {
    let title_sel = Selector::parse(".content .primary-info").unwrap();
    let session_sel = Selector::parse(".secondary-info").unwrap();
    let item_sel = Selector::parse(".infographic .item").unwrap();
    let label_sel = Selector::parse(".label").unwrap();
    let value_sel = Selector::parse(".item-value").unwrap();
    let updated_sel = Selector::parse(".info .indicators-left").unwrap();
    let indicator_sel = Selector::parse(".info .indicators-right .indicator").unwrap();

    let title = card
        .select(&title_sel)
        .next()
        .map(|e| normalize_whitespace(&elem_text(e)))
        .ok_or(ParseError::MissingElement("primary-info"))?;

    let session = card
        .select(&session_sel)
        .next()
        .map(|e| normalize_whitespace(&elem_text(e)))
        .ok_or(ParseError::MissingElement("secondary-info"))?;

    let items: Vec<ElementRef> = card.select(&item_sel).collect();

    let originated = items
        .first()
        .ok_or(ParseError::MissingElement("origination item"))?
        .select(&value_sel)
        .next()
        .map(joined_text)
        .ok_or(ParseError::MissingElement("origination value"))?;

    let stage_item = items
        .get(1)
        .ok_or(ParseError::MissingElement("next stage item"))?;

    let next_stage = stage_item
        .select(&label_sel)
        .next()
        .map(|e| {
            let label = normalize_whitespace(&elem_text(e));
            strip_label_prefix(&label, "Next stage:").to_string()
        })
        .ok_or(ParseError::MissingElement("next stage label"))?;

    let next_stage_detail = stage_item
        .select(&value_sel)
        .next()
        .map(joined_text)
        .ok_or(ParseError::MissingElement("next stage value"))?;

    let updated_text = card
        .select(&updated_sel)
        .next()
        .map(joined_text)
        .ok_or(ParseError::MissingElement("indicators-left"))?;
    let last_updated = parse_last_updated(strip_label_prefix(&updated_text, "Last updated:"))?;

    let bill_type = card
        .select(&indicator_sel)
        .next()
        .ok_or(ParseError::MissingElement("bill type indicator"))?
        .value()
        .attr("data-help-title")
        .map(|t| t.trim().to_string())
        .ok_or(ParseError::MissingAttribute("data-help-title"))?;

    if bill_type.is_empty() {
        return Err(ParseError::Malformed {
            field: "bill type",
            text: "empty data-help-title".to_string(),
        });
    }

    Ok(BillCard {
        title,
        session,
        originated,
        next_stage,
        next_stage_detail,
        last_updated,
        bill_type,
    })
}

/// Lazily extract a sequence of card fragments, one result per fragment.
/// A failed fragment does not stop the remaining ones; collection policy
/// belongs to the caller.
pub fn extract_all<'a>(
    fragments: impl IntoIterator<Item = ElementRef<'a>>,
) -> impl Iterator<Item = Result<BillCard, ParseError>> {
    fragments.into_iter().map(extract_card)
}

/// Parse every bill card on a results page; the first malformed card
/// aborts with its error.
pub fn parse_search_results(html: &str) -> Result<Vec<BillCard>, ParseError> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse("div.card-bill").unwrap();
    extract_all(document.select(&card_sel)).collect()
}

/// Parse every bill card on a results page, skipping malformed cards with
/// a warning.
pub fn parse_search_results_lossy(html: &str) -> Vec<BillCard> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse("div.card-bill").unwrap();

    extract_all(document.select(&card_sel))
        .filter_map(|result| match result {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("Skipping bill card: {}", e);
                None
            }
        })
        .collect()
}
