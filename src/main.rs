//! credit-compare CLI
//!
//! Compare mortgage credit offers from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Compare the built-in catalog for a request
//! credit-compare compare --price 100000 --down-payment 20 --term-years 20
//!
//! # Output as JSON, with a custom-rate row added
//! credit-compare compare --price 100000 --down-payment 20 --term-months 240 \
//!     --rate 7.5 --format json
//!
//! # Show the offer catalog
//! credit-compare catalog
//!
//! # Render a written report for a client
//! credit-compare report --price 100000 --down-payment 20 --term-years 20 \
//!     --client "Ana Pérez" --advisor "J. Gómez" --project "Torre Norte" \
//!     --output informe.txt
//! ```

use chrono::{Local, NaiveDate};
use credit_compare::core::lender::{LenderId, LenderOffer, OfferCatalog, ProductType};
use credit_compare::core::request::{IncomeType, LoanRequest, LoanTerm};
use credit_compare::engine::comparison::ComparisonEngine;
use credit_compare::report::summary::{ClientDetails, CreditReport};
use rust_decimal::Decimal;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"credit-compare — mortgage credit comparison and installment estimation

USAGE:
    credit-compare <COMMAND> [OPTIONS]

COMMANDS:
    compare     Rank lender offers for a loan request
    catalog     Show the lender offer catalog
    report      Render a written comparative report
    help        Show this message

OPTIONS (compare, report):
    --price <N>          Property price
    --down-payment <PCT> Down payment percent (clamped to 0-100, default: 20)
    --term-years <Y>     Loan term in years (clamped to 5-30)
    --term-months <M>    Loan term in months (clamped to 1-360)
    --rate <PCT>         Add a custom-rate offer as an extra comparison row
    --catalog <FILE>     Load offers from a JSON file instead of the built-ins
    --income <TYPE>      public | private | monotributista | registered
    --prefer <PRODUCT>   fixed | uva | mixed

OPTIONS (compare, catalog):
    --format <FORMAT>    Output format: text (default) or json

OPTIONS (report):
    --client <NAME>      Borrower name
    --advisor <NAME>     Advisor name
    --project <NAME>     Project name
    --date <YYYY-MM-DD>  Report date (default: today)
    --output <FILE>      Write to file instead of stdout

EXAMPLES:
    credit-compare compare --price 100000 --down-payment 20 --term-years 20
    credit-compare compare --price 100000 --term-months 240 --format json
    credit-compare catalog --format json
    credit-compare report --price 100000 --term-years 20 --client "Ana Pérez""#
    );
}

/// JSON schema for catalog files.
#[derive(serde::Deserialize)]
struct OfferInput {
    lender: String,
    #[serde(default = "default_product")]
    product: String,
    annual_rate_pct: String,
    #[serde(default = "default_max_term")]
    max_term_years: u32,
}

fn default_product() -> String {
    "fixed".to_string()
}

fn default_max_term() -> u32 {
    30
}

#[derive(serde::Deserialize)]
struct CatalogFile {
    offers: Vec<OfferInput>,
}

fn load_catalog(path: &str) -> OfferCatalog {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: CatalogFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "offers": [
    {{ "lender": "Banco Nación", "product": "uva", "annual_rate_pct": "3.5", "max_term_years": 30 }}
  ]
}}"#
        );
        process::exit(1);
    });

    let mut catalog = OfferCatalog::new();
    for input in file.offers {
        let rate: Decimal = input.annual_rate_pct.parse().unwrap_or_else(|e| {
            eprintln!("Invalid rate '{}': {}", input.annual_rate_pct, e);
            process::exit(1);
        });
        let product = ProductType::parse(&input.product).unwrap_or_else(|| {
            eprintln!(
                "Unknown product '{}': expected fixed, uva, or mixed",
                input.product
            );
            process::exit(1);
        });
        catalog.add(LenderOffer::new(
            LenderId::new(&input.lender),
            product,
            rate,
            input.max_term_years,
        ));
    }
    log::debug!("Loaded {} offers from '{}'", catalog.len(), path);
    catalog
}

/// Options shared by `compare` and `report`.
#[derive(Default)]
struct RequestOptions {
    price: Option<Decimal>,
    down_payment: Option<Decimal>,
    term: Option<LoanTerm>,
    custom_rate: Option<Decimal>,
    catalog_path: Option<String>,
    income: Option<IncomeType>,
    prefer: Option<ProductType>,
    format: String,
    client: String,
    advisor: String,
    project: String,
    date: Option<NaiveDate>,
    output: Option<String>,
}

fn parse_decimal_arg(args: &[String], i: usize, flag: &str) -> Decimal {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{} requires a numeric value", flag);
            process::exit(1);
        })
}

fn parse_u32_arg(args: &[String], i: usize, flag: &str) -> u32 {
    args.get(i)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{} requires an integer value", flag);
            process::exit(1);
        })
}

fn parse_string_arg(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

fn parse_request_options(args: &[String]) -> RequestOptions {
    let mut opts = RequestOptions {
        format: "text".to_string(),
        ..Default::default()
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--price" => {
                i += 1;
                opts.price = Some(parse_decimal_arg(args, i, "--price"));
            }
            "--down-payment" => {
                i += 1;
                opts.down_payment = Some(parse_decimal_arg(args, i, "--down-payment"));
            }
            "--term-years" => {
                i += 1;
                // Input-boundary clamp; the engine only sees months >= 1.
                let years = parse_u32_arg(args, i, "--term-years").clamp(5, 30);
                opts.term = Some(LoanTerm::Years(years));
            }
            "--term-months" => {
                i += 1;
                let months = parse_u32_arg(args, i, "--term-months").clamp(1, 360);
                opts.term = Some(LoanTerm::Months(months));
            }
            "--rate" => {
                i += 1;
                opts.custom_rate = Some(parse_decimal_arg(args, i, "--rate"));
            }
            "--catalog" => {
                i += 1;
                opts.catalog_path = Some(parse_string_arg(args, i, "--catalog"));
            }
            "--income" => {
                i += 1;
                let label = parse_string_arg(args, i, "--income");
                opts.income = Some(IncomeType::parse(&label).unwrap_or_else(|| {
                    eprintln!("Unknown income type '{}'", label);
                    process::exit(1);
                }));
            }
            "--prefer" => {
                i += 1;
                let label = parse_string_arg(args, i, "--prefer");
                opts.prefer = Some(ProductType::parse(&label).unwrap_or_else(|| {
                    eprintln!("Unknown product '{}': expected fixed, uva, or mixed", label);
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                opts.format = parse_string_arg(args, i, "--format");
            }
            "--client" => {
                i += 1;
                opts.client = parse_string_arg(args, i, "--client");
            }
            "--advisor" => {
                i += 1;
                opts.advisor = parse_string_arg(args, i, "--advisor");
            }
            "--project" => {
                i += 1;
                opts.project = parse_string_arg(args, i, "--project");
            }
            "--date" => {
                i += 1;
                let raw = parse_string_arg(args, i, "--date");
                opts.date = Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").unwrap_or_else(
                    |e| {
                        eprintln!("Invalid date '{}': {}", raw, e);
                        process::exit(1);
                    },
                ));
            }
            "--output" => {
                i += 1;
                opts.output = Some(parse_string_arg(args, i, "--output"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }
    opts
}

fn build_request(opts: &RequestOptions) -> LoanRequest {
    let price = opts.price.unwrap_or_else(|| {
        eprintln!("Error: --price <N> is required");
        process::exit(1);
    });
    if price < Decimal::ZERO {
        eprintln!("Error: --price must be non-negative");
        process::exit(1);
    }
    // Input-boundary clamp per the engine contract.
    let down_payment = opts
        .down_payment
        .unwrap_or_else(|| Decimal::from(20))
        .clamp(Decimal::ZERO, Decimal::from(100));
    let term = opts.term.unwrap_or_else(|| {
        eprintln!("Error: --term-years <Y> or --term-months <M> is required");
        process::exit(1);
    });

    let mut request = LoanRequest::new(price, down_payment, term);
    if let Some(income) = opts.income {
        request = request.with_income_type(income);
    }
    if let Some(product) = opts.prefer {
        request = request.with_preferred_product(product);
    }
    request
}

fn build_catalog(opts: &RequestOptions) -> OfferCatalog {
    let mut catalog = match &opts.catalog_path {
        Some(path) => load_catalog(path),
        None => OfferCatalog::argentina(),
    };
    if let Some(rate) = opts.custom_rate {
        if rate < Decimal::ZERO {
            eprintln!("Error: --rate must be non-negative");
            process::exit(1);
        }
        catalog.add(LenderOffer::custom(rate));
    }
    catalog
}

fn cmd_compare(args: &[String]) {
    let opts = parse_request_options(args);
    let request = build_request(&opts);
    let catalog = build_catalog(&opts);

    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap_or_else(|e| {
        eprintln!("Comparison failed: {}", e);
        process::exit(1);
    });

    if opts.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        println!("{}", result);
    }
}

fn cmd_catalog(args: &[String]) {
    let opts = parse_request_options(args);
    let catalog = build_catalog(&opts);

    if opts.format == "json" {
        println!("{}", serde_json::to_string_pretty(&catalog).unwrap());
    } else {
        println!("=== Offer Catalog ===");
        for offer in catalog.offers() {
            println!(
                "{} — {} — {}% annual — up to {} years",
                offer.lender(),
                offer.product(),
                offer.annual_rate_pct(),
                offer.max_term_years()
            );
        }
    }
}

fn cmd_report(args: &[String]) {
    let opts = parse_request_options(args);
    let request = build_request(&opts);
    let catalog = build_catalog(&opts);

    let result = ComparisonEngine::compare_request(&request, &catalog).unwrap_or_else(|e| {
        eprintln!("Comparison failed: {}", e);
        process::exit(1);
    });

    let date = opts.date.unwrap_or_else(|| Local::now().date_naive());
    let details = ClientDetails::new(&opts.client, &opts.advisor, &opts.project).with_date(date);
    let report = CreditReport::new(details, request, result);

    let rendered = if opts.format == "json" {
        serde_json::to_string_pretty(&report).unwrap()
    } else {
        report.to_string()
    };

    if let Some(path) = opts.output {
        fs::write(&path, &rendered).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Report {} → {}", report.id(), path);
    } else {
        println!("{}", rendered);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "compare" => cmd_compare(rest),
        "catalog" => cmd_catalog(rest),
        "report" => cmd_report(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
