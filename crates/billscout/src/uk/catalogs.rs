//! Filter catalogs for the bills.parliament.uk search form.
//!
//! Parameter values are the literal tokens the form submits; several map a
//! single choice to a comma-separated id list because the site groups
//! multiple internal kinds under one public option.

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    All,
    S2019_21,
    S2019_19,
    S2017_19,
    S2016_17,
    S2015_16,
    S2013_14,
    S2012_13,
    S2010_12,
    S2009_10,
    S2008_09,
    S2007_08,
    S2006_07,
    S2005_06,
    S2004_05,
}

impl Catalog for Session {
    const NAME: &'static str = "session";
    const ALL: &'static [Self] = &[
        Session::All,
        Session::S2019_21,
        Session::S2019_19,
        Session::S2017_19,
        Session::S2016_17,
        Session::S2015_16,
        Session::S2013_14,
        Session::S2012_13,
        Session::S2010_12,
        Session::S2009_10,
        Session::S2008_09,
        Session::S2007_08,
        Session::S2006_07,
        Session::S2005_06,
        Session::S2004_05,
    ];

    fn label(&self) -> &'static str {
        match self {
            Session::All => "All",
            Session::S2019_21 => "2019-2021",
            Session::S2019_19 => "2019-2019",
            Session::S2017_19 => "2017-2019",
            Session::S2016_17 => "2016-2017",
            Session::S2015_16 => "2015-2016",
            Session::S2013_14 => "2013-2014",
            Session::S2012_13 => "2012-2013",
            Session::S2010_12 => "2010-2012",
            Session::S2009_10 => "2009-2010",
            Session::S2008_09 => "2008-2009",
            Session::S2007_08 => "2007-2008",
            Session::S2006_07 => "2006-2007",
            Session::S2005_06 => "2005-2006",
            Session::S2004_05 => "2004-2005",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            Session::All => "0",
            Session::S2019_21 => "35",
            Session::S2019_19 => "34",
            Session::S2017_19 => "30",
            Session::S2016_17 => "29",
            Session::S2015_16 => "28",
            Session::S2013_14 => "27",
            Session::S2012_13 => "25",
            Session::S2010_12 => "24",
            Session::S2009_10 => "23",
            Session::S2008_09 => "22",
            Session::S2007_08 => "21",
            Session::S2006_07 => "20",
            Session::S2005_06 => "19",
            Session::S2004_05 => "18",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillType {
    All,
    Hybrid,
    Private,
    Public,
    Government,
    TenMinuteRule,
    Ballot,
    Presentation,
    StartingInLords,
}

impl Catalog for BillType {
    const NAME: &'static str = "bill type";
    const ALL: &'static [Self] = &[
        BillType::All,
        BillType::Hybrid,
        BillType::Private,
        BillType::Public,
        BillType::Government,
        BillType::TenMinuteRule,
        BillType::Ballot,
        BillType::Presentation,
        BillType::StartingInLords,
    ];

    fn label(&self) -> &'static str {
        match self {
            BillType::All => "All",
            BillType::Hybrid => "Hybrid",
            BillType::Private => "Private",
            BillType::Public => "Public",
            BillType::Government => "Government Bill",
            BillType::TenMinuteRule => "Private Members' Bill (under the Ten Minute Rule)",
            BillType::Ballot => "Private Members' Bill (Ballot Bill)",
            BillType::Presentation => "Private Members' Bill (Presentation Bill)",
            BillType::StartingInLords => "Private Members' Bill (Starting in the House of Lords)",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            BillType::All => "",
            BillType::Hybrid => "4",
            BillType::Private => "6",
            BillType::Public => "1,5,7,8,2,3",
            BillType::Government => "1",
            BillType::TenMinuteRule => "5",
            BillType::Ballot => "7",
            BillType::Presentation => "8",
            BillType::StartingInLords => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStage {
    All,
    Active,
    FirstReading,
    SecondReading,
    CommitteeStage,
    ReportStage,
    ThirdReading,
    RoyalAssent,
}

impl Catalog for BillStage {
    const NAME: &'static str = "bill stage";
    const ALL: &'static [Self] = &[
        BillStage::All,
        BillStage::Active,
        BillStage::FirstReading,
        BillStage::SecondReading,
        BillStage::CommitteeStage,
        BillStage::ReportStage,
        BillStage::ThirdReading,
        BillStage::RoyalAssent,
    ];

    fn label(&self) -> &'static str {
        match self {
            BillStage::All => "All",
            BillStage::Active => "Currently active",
            BillStage::FirstReading => "1st Reading",
            BillStage::SecondReading => "2nd Reading",
            BillStage::CommitteeStage => "Committee Stage",
            BillStage::ReportStage => "Report Stage",
            BillStage::ThirdReading => "3rd Reading",
            BillStage::RoyalAssent => "Royal Assent",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            BillStage::All => "",
            BillStage::Active => "-1",
            BillStage::FirstReading => "6,1",
            BillStage::SecondReading => "7,2",
            BillStage::CommitteeStage => "8,3",
            BillStage::ReportStage => "9,4",
            BillStage::ThirdReading => "10,5",
            BillStage::RoyalAssent => "11",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentHouse {
    All,
    Commons,
    Lords,
    Neither,
}

impl Catalog for CurrentHouse {
    const NAME: &'static str = "current house";
    const ALL: &'static [Self] = &[
        CurrentHouse::All,
        CurrentHouse::Commons,
        CurrentHouse::Lords,
        CurrentHouse::Neither,
    ];

    fn label(&self) -> &'static str {
        match self {
            CurrentHouse::All => "All",
            CurrentHouse::Commons => "House of Commons",
            CurrentHouse::Lords => "House of Lords",
            CurrentHouse::Neither => "Not before either House",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            CurrentHouse::All => "",
            CurrentHouse::Commons => "1",
            CurrentHouse::Lords => "2",
            CurrentHouse::Neither => "3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    ByTitle,
    Newest,
    Oldest,
}

impl Catalog for SortOrder {
    const NAME: &'static str = "sort order";
    const ALL: &'static [Self] = &[SortOrder::ByTitle, SortOrder::Newest, SortOrder::Oldest];

    fn label(&self) -> &'static str {
        match self {
            SortOrder::ByTitle => "Title",
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            SortOrder::ByTitle => "0",
            SortOrder::Newest => "1",
            SortOrder::Oldest => "2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_lookup_is_case_insensitive() {
        assert_eq!(
            BillStage::by_label("1st reading").unwrap(),
            BillStage::FirstReading
        );
        assert_eq!(
            BillStage::by_label("ROYAL ASSENT").unwrap(),
            BillStage::RoyalAssent
        );
    }

    #[test]
    fn test_unknown_stage_is_not_found() {
        let err = BillStage::by_label("Not A Real Stage").unwrap_err();
        assert!(err.to_string().contains("Not A Real Stage"));
    }

    #[test]
    fn test_label_value_round_trip() {
        for stage in BillStage::ALL {
            let by_name = BillStage::by_label(stage.label()).unwrap();
            assert_eq!(BillStage::by_value(by_name.value()).unwrap(), by_name);
        }
        for session in Session::ALL {
            let by_name = Session::by_label(session.label()).unwrap();
            assert_eq!(Session::by_value(by_name.value()).unwrap(), by_name);
        }
    }

    #[test]
    fn test_session_tokens() {
        assert_eq!(Session::by_label("2019-2021").unwrap().value(), "35");
        assert_eq!(Session::by_label("2004-2005").unwrap().value(), "18");
    }

    #[test]
    fn test_no_catalog_has_duplicate_labels() {
        fn assert_unique<C: Catalog>() {
            for (i, a) in C::ALL.iter().enumerate() {
                for b in &C::ALL[i + 1..] {
                    assert!(
                        !a.label().eq_ignore_ascii_case(b.label()),
                        "duplicate label '{}' in {}",
                        a.label(),
                        C::NAME
                    );
                }
            }
        }
        assert_unique::<Session>();
        assert_unique::<BillType>();
        assert_unique::<BillStage>();
        assert_unique::<CurrentHouse>();
        assert_unique::<SortOrder>();
    }

    #[test]
    fn test_grouped_type_tokens() {
        assert_eq!(BillType::Public.value(), "1,5,7,8,2,3");
        assert_eq!(BillStage::FirstReading.value(), "6,1");
    }
}
