//! Property-based tests for request path construction.
//!
//! Paths must be fully determined by the table and ticker, whatever text the
//! user typed into the ticker field.

use esg_explorer::api::{
    EsgClient, EsgClientConfig, QueryMode, QueryParams, TableName, Ticker,
};
use proptest::prelude::*;

fn any_table() -> impl Strategy<Value = TableName> {
    prop::sample::select(TableName::ALL.to_vec())
}

/// Ticker-like text: letters, digits and the punctuation real symbols use.
fn ticker_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.\\-]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn all_sources_path_shape(raw in ticker_text()) {
        let Some(ticker) = Ticker::new(&raw) else {
            return Ok(());
        };
        let params = QueryParams::AllSources { ticker: ticker.clone() };
        prop_assert_eq!(
            params.endpoint().to_string(),
            format!("/esg_api/all_tables/{}", ticker)
        );
        prop_assert_eq!(params.mode(), QueryMode::AllSources);
    }

    #[test]
    fn table_ticker_path_shape(table in any_table(), raw in ticker_text()) {
        let Some(ticker) = Ticker::new(&raw) else {
            return Ok(());
        };
        let params = QueryParams::TableTicker { table, ticker: ticker.clone() };
        prop_assert_eq!(
            params.endpoint().to_string(),
            format!("/esg_api/{}/{}", table.as_str(), ticker)
        );
        prop_assert_eq!(params.table(), Some(table));
        prop_assert_eq!(params.ticker(), Some(&ticker));
    }

    #[test]
    fn table_path_has_two_segments(table in any_table()) {
        let path = QueryParams::Table { table }.endpoint();
        prop_assert_eq!(path.segments().len(), 2);
        prop_assert_eq!(path.segments()[1].as_str(), table.as_str());
    }

    #[test]
    fn ticker_is_trimmed_and_uppercased(raw in "\\PC{0,20}") {
        match Ticker::new(&raw) {
            Some(ticker) => {
                prop_assert_eq!(ticker.as_str(), raw.trim().to_uppercase());
                prop_assert!(!ticker.as_str().is_empty());
            }
            None => prop_assert!(raw.trim().chars().all(|c| c == '.')),
        }
    }

    #[test]
    fn request_url_keeps_every_segment(table in any_table(), raw in ticker_text()) {
        let Some(ticker) = Ticker::new(&raw) else {
            return Ok(());
        };
        let url = client().url_for(&QueryParams::TableTicker { table, ticker }.endpoint());
        let segments: Vec<&str> = url.path_segments().expect("http URL").collect();
        prop_assert_eq!(segments.len(), 3, "{} lost a segment", url);
        prop_assert_eq!(segments[1], table.as_str());
        prop_assert!(!segments[2].is_empty());
    }

    #[test]
    fn ticker_never_splits_into_extra_segments(table in any_table(), raw in "\\PC{1,20}") {
        if let Some(ticker) = Ticker::new(&raw) {
            let path = QueryParams::TableTicker { table, ticker }.endpoint();
            prop_assert_eq!(path.segments().len(), 3);
        }
    }
}

fn client() -> EsgClient {
    EsgClient::new(EsgClientConfig::default()).expect("default config is valid")
}

#[test]
fn dot_tickers_cannot_reach_another_route() {
    assert!(Ticker::new(".").is_none());
    assert!(Ticker::new("..").is_none());

    let ticker = Ticker::new("..a").expect("not dots only");
    let params = QueryParams::TableTicker {
        table: TableName::Msci,
        ticker,
    };
    let url = client().url_for(&params.endpoint());
    assert_eq!(url.path(), "/esg_api/msci_table/..A");
}

#[test]
fn table_names_parse_from_path_identifiers() {
    for table in TableName::ALL {
        assert_eq!(table.as_str().parse::<TableName>().ok(), Some(table));
    }
    assert!("users_table".parse::<TableName>().is_err());
}
