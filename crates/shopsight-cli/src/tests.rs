use shopsight_core::{BrandRecord, Product};

use super::*;

#[test]
fn parses_fetch_with_defaults() {
    let cli = Cli::try_parse_from(["shopsight-cli", "fetch", "https://shop.example.com"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Fetch {
            url,
            strategy,
            compact,
        } => {
            assert_eq!(url, "https://shop.example.com");
            assert!(strategy.is_none());
            assert!(!compact);
        }
        Commands::Config => panic!("expected fetch command"),
    }
}

#[test]
fn parses_fetch_with_strategy_and_compact() {
    let cli = Cli::try_parse_from([
        "shopsight-cli",
        "fetch",
        "https://shop.example.com",
        "--strategy",
        "concurrent",
        "--compact",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Fetch {
            strategy: Some(FetchStrategy::Concurrent),
            compact: true,
            ..
        }
    ));
}

#[test]
fn rejects_unknown_strategy() {
    let result = Cli::try_parse_from([
        "shopsight-cli",
        "fetch",
        "https://shop.example.com",
        "--strategy",
        "parallel",
    ]);
    assert!(result.is_err());
}

#[test]
fn fetch_requires_url() {
    assert!(Cli::try_parse_from(["shopsight-cli", "fetch"]).is_err());
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["shopsight-cli", "config"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["shopsight-cli"]).is_err());
}

#[test]
fn render_record_compact_is_single_line() {
    let record = BrandRecord {
        brand_name: Some("Acme".to_string()),
        product_catalog: vec![Product::from_link(
            "Cap".to_string(),
            "https://shop.example.com/products/cap".to_string(),
        )],
        ..BrandRecord::default()
    };

    let compact = fetch::render_record(&record, true).expect("render");
    assert!(!compact.contains('\n'));
    let pretty = fetch::render_record(&record, false).expect("render");
    assert!(pretty.contains('\n'));

    let parsed: BrandRecord = serde_json::from_str(&compact).expect("parse");
    assert_eq!(parsed, record);
}
