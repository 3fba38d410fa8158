use crate::uk::types::BillCard;

/// Client-side narrowing of a fetched card batch.
#[derive(Debug, Default)]
pub struct CardFilter {
    pub session: Option<String>,
    pub bill_type: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl CardFilter {
    pub fn apply(self, mut cards: Vec<BillCard>) -> Vec<BillCard> {
        if let Some(session) = self.session {
            cards.retain(|c| c.session == session);
        }
        if let Some(bill_type) = self.bill_type {
            cards.retain(|c| c.bill_type.eq_ignore_ascii_case(&bill_type));
        }
        if let Some(off) = self.offset {
            cards = cards.into_iter().skip(off).collect();
        }
        if let Some(lim) = self.limit {
            cards.truncate(lim);
        }
        cards
    }

    pub fn validate(self) -> Result<Self, String> {
        if self.offset.is_some_and(|o| o == 0) {
            return Err("Offset must be greater than 0".to_string());
        }
        if self.limit.is_some_and(|l| l == 0) {
            return Err("Limit must be greater than 0".to_string());
        }
        Ok(self)
    }
}

#[derive(Debug)]
pub struct CardStats {
    pub commons: usize,
    pub lords: usize,
    pub other: usize,
    pub total: usize,
}

impl CardStats {
    pub fn from_cards(cards: &[BillCard]) -> CardStats {
        let commons = cards
            .iter()
            .filter(|c| c.originated.contains("Commons"))
            .count();
        let lords = cards
            .iter()
            .filter(|c| c.originated.contains("Lords"))
            .count();
        CardStats {
            commons,
            lords,
            other: cards.len() - commons - lords,
            total: cards.len(),
        }
    }
}

impl std::fmt::Display for CardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nStatistics:")?;
        writeln!(f, "  Originated in the Commons: {}", self.commons)?;
        writeln!(f, "  Originated in the Lords:   {}", self.lords)?;
        if self.other > 0 {
            writeln!(f, "  Other origination:         {}", self.other)?;
        }
        writeln!(f, "  Total:                     {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn card(title: &str, session: &str, originated: &str, bill_type: &str) -> BillCard {
        BillCard {
            title: title.to_string(),
            session: session.to_string(),
            originated: originated.to_string(),
            next_stage: "2nd reading".to_string(),
            next_stage_detail: String::new(),
            last_updated: NaiveDate::from_ymd_opt(2020, 7, 21)
                .unwrap()
                .and_hms_opt(17, 30, 0)
                .unwrap(),
            bill_type: bill_type.to_string(),
        }
    }

    fn sample() -> Vec<BillCard> {
        vec![
            card("A", "2019-2021", "House of Commons", "Government Bill"),
            card("B", "2017-2019", "House of Lords", "Private"),
            card("C", "2019-2021", "House of Commons", "Hybrid"),
            card("D", "2019-2021", "House of Lords", "Government Bill"),
        ]
    }

    #[test]
    fn test_filter_by_session() {
        let filtered = CardFilter {
            session: Some("2019-2021".to_string()),
            ..Default::default()
        }
        .apply(sample());
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|c| c.session == "2019-2021"));
    }

    #[test]
    fn test_filter_by_type_is_case_insensitive() {
        let filtered = CardFilter {
            bill_type: Some("government bill".to_string()),
            ..Default::default()
        }
        .apply(sample());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_offset_applies_before_limit() {
        let filtered = CardFilter {
            offset: Some(1),
            limit: Some(2),
            ..Default::default()
        }
        .apply(sample());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "B");
        assert_eq!(filtered[1].title, "C");
    }

    #[test]
    fn test_validate_rejects_zero_bounds() {
        assert!(
            CardFilter {
                limit: Some(0),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            CardFilter {
                offset: Some(0),
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            CardFilter {
                limit: Some(1),
                offset: Some(2),
                ..Default::default()
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_stats_count_by_origination() {
        let stats = CardStats::from_cards(&sample());
        assert_eq!(stats.commons, 2);
        assert_eq!(stats.lords, 2);
        assert_eq!(stats.other, 0);
        assert_eq!(stats.total, 4);
    }
}
