//! HTTP client tests against a mock ESG API server.

use esg_explorer::api::{
    EsgClient, EsgClientConfig, EsgTransport, Payload, QueryParams, TableName, Ticker,
};
use esg_explorer::error::FetchErrorKind;
use esg_explorer::query::{execute, failure_message};
use httpmock::prelude::*;
use std::time::Duration;

fn client_for(server: &MockServer) -> EsgClient {
    EsgClient::new(EsgClientConfig {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
    })
    .expect("valid base URL")
}

fn ticker(s: &str) -> Ticker {
    Ticker::new(s).expect("non-blank ticker")
}

#[test]
fn table_ticker_rows_are_decoded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/esg_api/msci_table/AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"Score":72,"Date":null}]"#);
    });

    let params = QueryParams::TableTicker {
        table: TableName::Msci,
        ticker: ticker("aapl"),
    };
    let payload = execute(&client_for(&server), &params).expect("fetch succeeds");

    mock.assert_hits(1);
    let Payload::Rows(rows) = payload else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 1);
    assert!(rows.rows()[0]["Date"].is_null());
    assert_eq!(rows.rows()[0]["Score"].to_string(), "72");
}

#[test]
fn all_sources_scores_keep_source_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esg_api/all_tables/MSFT");
        then.status(200)
            .body(r#"{"yahoo":{"total":21.5},"msci":{"rating":"AA"},"lseg":58}"#);
    });

    let params = QueryParams::AllSources {
        ticker: ticker("MSFT"),
    };
    let Payload::Scores(scores) = execute(&client_for(&server), &params).expect("fetch succeeds")
    else {
        panic!("expected scores");
    };
    let sources: Vec<&str> = scores.iter().map(|(source, _)| source).collect();
    assert_eq!(sources, vec!["yahoo", "msci", "lseg"]);
}

#[test]
fn error_status_ignores_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esg_api/all_tables/NOPE");
        then.status(404).body(r#"{"error":"Company not found"}"#);
    });

    let params = QueryParams::AllSources {
        ticker: ticker("NOPE"),
    };
    let err = execute(&client_for(&server), &params).expect_err("404 is an error");
    assert_eq!(err.fetch_kind(), Some(&FetchErrorKind::Status(404)));
    assert_eq!(failure_message(params.mode(), &err), "Failed to fetch company data");
}

#[test]
fn server_error_on_table_fetch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esg_api/lseg_table");
        then.status(500);
    });

    let params = QueryParams::Table {
        table: TableName::Lseg,
    };
    let err = execute(&client_for(&server), &params).expect_err("500 is an error");
    assert_eq!(failure_message(params.mode(), &err), "Failed to fetch table data");
}

#[test]
fn invalid_json_is_reported_as_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esg_api/yahoo_table");
        then.status(200).body("<html>oops</html>");
    });

    let params = QueryParams::Table {
        table: TableName::Yahoo,
    };
    let err = execute(&client_for(&server), &params).expect_err("not JSON");
    assert!(matches!(
        err.fetch_kind(),
        Some(FetchErrorKind::InvalidJson(_))
    ));
    assert_eq!(failure_message(params.mode(), &err), "Received malformed table data");
}

#[test]
fn wrong_shape_is_rejected_before_rendering() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esg_api/spglobal_table/IBM");
        then.status(200).body(r#"{"Score":72}"#);
    });

    let params = QueryParams::TableTicker {
        table: TableName::Spglobal,
        ticker: ticker("IBM"),
    };
    let err = execute(&client_for(&server), &params).expect_err("object is not rows");
    assert!(matches!(
        err.fetch_kind(),
        Some(FetchErrorKind::UnexpectedShape(_))
    ));
}

#[test]
fn empty_table_is_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/esg_api/csrhub_table");
        then.status(200).body("[]");
    });

    let params = QueryParams::Table {
        table: TableName::Csrhub,
    };
    let payload = execute(&client_for(&server), &params).expect("empty array is valid");
    assert!(matches!(payload, Payload::Rows(rows) if rows.is_empty()));
}

#[test]
fn base_url_path_prefix_is_kept() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/proxy/esg_api/msci_table");
        then.status(200).body("[]");
    });

    let client = EsgClient::new(EsgClientConfig {
        base_url: format!("{}/proxy/", server.base_url()),
        timeout: Duration::from_secs(5),
    })
    .expect("valid base URL");
    let params = QueryParams::Table {
        table: TableName::Msci,
    };
    client.get(&params.endpoint()).expect("fetch succeeds");
    mock.assert();
}

#[test]
fn ticker_segment_is_escaped() {
    let client = EsgClient::new(EsgClientConfig::default()).expect("default config is valid");
    let params = QueryParams::TableTicker {
        table: TableName::Msci,
        ticker: ticker("a/b c"),
    };
    let url = client.url_for(&params.endpoint());
    assert_eq!(url.path(), "/esg_api/msci_table/A%2FB%20C");
}

#[test]
fn unreachable_server_is_a_network_error() {
    let client = EsgClient::new(EsgClientConfig {
        // Port 9 (discard) is closed on test machines
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
    })
    .expect("valid base URL");
    let params = QueryParams::Table {
        table: TableName::Msci,
    };
    let err = client.get(&params.endpoint()).expect_err("connection refused");
    assert!(matches!(err.fetch_kind(), Some(FetchErrorKind::Network(_))));
}
