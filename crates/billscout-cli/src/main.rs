use std::process;

use billscout::catalog::Catalog;
use billscout::uk;
use billscout::uk::catalogs::{
    BillStage, BillType as UkBillType, CurrentHouse, Session, SortOrder as UkSortOrder,
};
use billscout::us;
use billscout::us::catalogs::{BillType as UsBillType, Party, SortOrder as UsSortOrder};
use billscout::utils::{CardFilter, CardStats};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "billscout")]
#[command(about = "Search UK and US legislative bills from the command line", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        global = true,
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Search bills before the UK Parliament
    Uk {
        #[arg(long, help = "Free-text search term")]
        term: Option<String>,

        #[arg(
            long,
            value_parser = parse_session,
            help = "Parliamentary session, e.g. '2019-2021'"
        )]
        session: Option<Session>,

        #[arg(
            long,
            value_parser = parse_stage,
            help = "Bill stage, e.g. '1st Reading'"
        )]
        stage: Option<BillStage>,

        #[arg(
            long = "bill-type",
            value_parser = parse_uk_bill_type,
            help = "Bill type, e.g. 'Government Bill'"
        )]
        bill_type: Option<UkBillType>,

        #[arg(
            long,
            value_parser = parse_house,
            help = "House the bill is currently before"
        )]
        house: Option<CurrentHouse>,

        #[arg(
            long,
            value_parser = parse_uk_sort,
            help = "Sort order: Title, Newest or Oldest"
        )]
        sort: Option<UkSortOrder>,

        #[arg(long, help = "Maximum number of results to print")]
        limit: Option<usize>,

        #[arg(long, help = "Number of results to skip from the beginning")]
        offset: Option<usize>,

        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Output format"
        )]
        format: OutputFormat,
    },
    /// List every UK search filter and the token it submits
    UkOptions,
    /// Browse bills before the US Congress
    Us {
        #[arg(long, help = "Free-text search term")]
        term: Option<String>,

        #[arg(long, help = "Congress number, e.g. '118'")]
        congress: Option<String>,

        #[arg(long, help = "Committee name or id")]
        committee: Option<String>,

        #[arg(long, help = "Subject area name or id")]
        subject: Option<String>,

        #[arg(long, help = "Current status, e.g. 'Introduced'")]
        status: Option<String>,

        #[arg(long, value_parser = parse_party, help = "Sponsor party")]
        party: Option<Party>,

        #[arg(
            long = "bill-type",
            value_parser = parse_us_bill_type,
            help = "Bill type, e.g. 'House Bill'"
        )]
        bill_type: Option<UsBillType>,

        #[arg(long, help = "Sponsor person id (numeric)")]
        sponsor: Option<String>,

        #[arg(long, help = "Cosponsor person id (numeric)")]
        cosponsor: Option<String>,

        #[arg(
            long,
            value_parser = parse_us_sort,
            help = "Sort order, e.g. 'Introduced Date (Newest First)'"
        )]
        sort: Option<UsSortOrder>,

        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Output format"
        )]
        format: OutputFormat,
    },
    /// Fetch and list the US filter options, including the form-harvested ones
    UsOptions,
}

fn parse_session(s: &str) -> Result<Session, String> {
    Session::by_label(s).map_err(|e| e.to_string())
}

fn parse_stage(s: &str) -> Result<BillStage, String> {
    BillStage::by_label(s).map_err(|e| e.to_string())
}

fn parse_uk_bill_type(s: &str) -> Result<UkBillType, String> {
    UkBillType::by_label(s).map_err(|e| e.to_string())
}

fn parse_house(s: &str) -> Result<CurrentHouse, String> {
    CurrentHouse::by_label(s).map_err(|e| e.to_string())
}

fn parse_uk_sort(s: &str) -> Result<UkSortOrder, String> {
    UkSortOrder::by_label(s).map_err(|e| e.to_string())
}

fn parse_party(s: &str) -> Result<Party, String> {
    Party::by_label(s).map_err(|e| e.to_string())
}

fn parse_us_bill_type(s: &str) -> Result<UsBillType, String> {
    UsBillType::by_label(s).map_err(|e| e.to_string())
}

fn parse_us_sort(s: &str) -> Result<UsSortOrder, String> {
    UsSortOrder::by_label(s).map_err(|e| e.to_string())
}

fn serialize_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}

fn print_catalog<C: Catalog>(title: &str) {
    println!("{}:", title);
    for option in C::ALL {
        println!("  {}", option.option());
    }
    println!();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    match cli.command {
        Commands::Uk {
            term,
            session,
            stage,
            bill_type,
            house,
            sort,
            limit,
            offset,
            format,
        } => {
            let filter = CardFilter {
                session: None,
                bill_type: None,
                limit,
                offset,
            }
            .validate()
            .unwrap_or_else(|e| {
                log::error!("Invalid args: {e}");
                process::exit(1);
            });

            let mut search = uk::BillSearch::new();
            if let Some(term) = &term {
                search = search.term(term);
            }
            if let Some(session) = session {
                search = search.session(session);
            }
            if let Some(stage) = stage {
                search = search.stage(stage);
            }
            if let Some(bill_type) = bill_type {
                search = search.bill_type(bill_type);
            }
            if let Some(house) = house {
                search = search.house(house);
            }
            if let Some(sort) = sort {
                search = search.sort(sort);
            }

            let scraper = uk::WebScraper::new().unwrap_or_else(|e| {
                log::error!("Error creating scraper: {}", e);
                process::exit(1);
            });

            let cards = scraper.search(&search).await.unwrap_or_else(|e| {
                log::error!("Error fetching bills: {}", e);
                process::exit(1);
            });

            let cards = filter.apply(cards);

            match format {
                OutputFormat::Json => serialize_json(&cards),
                OutputFormat::Text => {
                    if cards.is_empty() {
                        println!("No bills matched.");
                    } else {
                        for (i, card) in cards.iter().enumerate() {
                            println!("{:>3}. {}", i + 1, card);
                        }
                        print!("{}", CardStats::from_cards(&cards));
                    }
                }
            }
        }

        Commands::UkOptions => {
            print_catalog::<Session>("Sessions");
            print_catalog::<UkBillType>("Bill types");
            print_catalog::<BillStage>("Bill stages");
            print_catalog::<CurrentHouse>("Current house");
            print_catalog::<UkSortOrder>("Sort orders");
        }

        Commands::Us {
            term,
            congress,
            committee,
            subject,
            status,
            party,
            bill_type,
            sponsor,
            cosponsor,
            sort,
            format,
        } => {
            let scraper = us::WebScraper::new().unwrap_or_else(|e| {
                log::error!("Error creating scraper: {}", e);
                process::exit(1);
            });

            let mut search = us::BillSearch::new();
            if let Some(term) = &term {
                search = search.term(term);
            }
            if let Some(sort) = sort {
                search = search.sort(sort);
            }
            if let Some(party) = party {
                search = search.party(party);
            }
            if let Some(bill_type) = bill_type {
                search = search.bill_type(bill_type);
            }

            let needs_facets = congress.is_some()
                || committee.is_some()
                || subject.is_some()
                || status.is_some();

            if needs_facets {
                let facets = scraper.fetch_facets().await.unwrap_or_else(|e| {
                    log::error!("Error fetching search facets: {}", e);
                    process::exit(1);
                });

                if let Some(congress) = &congress {
                    let congress_term = facets.congress(congress).unwrap_or_else(|e| {
                        log::error!("Invalid args: {e}");
                        process::exit(1);
                    });
                    search = search.congress(congress_term);
                }
                if let Some(committee) = &committee {
                    search = search
                        .committee(&facets.committees, committee)
                        .unwrap_or_else(|e| {
                            log::error!("Invalid args: {e}");
                            process::exit(1);
                        });
                }
                if let Some(subject) = &subject {
                    search = search
                        .subject(&facets.subjects, subject)
                        .unwrap_or_else(|e| {
                            log::error!("Invalid args: {e}");
                            process::exit(1);
                        });
                }
                if let Some(status) = &status {
                    search = search
                        .status(&facets.statuses, status)
                        .unwrap_or_else(|e| {
                            log::error!("Invalid args: {e}");
                            process::exit(1);
                        });
                }
            }

            if let Some(sponsor) = &sponsor {
                search = search.sponsor(sponsor).unwrap_or_else(|e| {
                    log::error!("Invalid args: {e}");
                    process::exit(1);
                });
            }
            if let Some(cosponsor) = &cosponsor {
                search = search.cosponsor(cosponsor).unwrap_or_else(|e| {
                    log::error!("Invalid args: {e}");
                    process::exit(1);
                });
            }

            let rows = scraper.browse(&search).await.unwrap_or_else(|e| {
                log::error!("Error fetching bills: {}", e);
                process::exit(1);
            });

            match format {
                OutputFormat::Json => serialize_json(&rows),
                OutputFormat::Text => {
                    if rows.is_empty() {
                        println!("No bills matched.");
                    } else {
                        for (i, row) in rows.iter().enumerate() {
                            println!("{:>3}. {}", i + 1, row);
                        }
                        println!("\n{} bill(s)", rows.len());
                    }
                }
            }
        }

        Commands::UsOptions => {
            print_catalog::<UsBillType>("Bill types");
            print_catalog::<UsSortOrder>("Sort orders");
            print_catalog::<Party>("Sponsor party");

            let scraper = us::WebScraper::new().unwrap_or_else(|e| {
                log::error!("Error creating scraper: {}", e);
                process::exit(1);
            });

            let facets = scraper.fetch_facets().await.unwrap_or_else(|e| {
                log::error!("Error fetching search facets: {}", e);
                process::exit(1);
            });

            println!("Congresses:");
            for term in &facets.congresses {
                println!("  {}", term);
            }
            println!();

            for catalog in [&facets.committees, &facets.subjects, &facets.statuses] {
                println!("{} ({} options):", catalog.name(), catalog.len());
                for option in catalog.all() {
                    println!("  {}", option);
                }
                println!();
            }
        }
    }
}
