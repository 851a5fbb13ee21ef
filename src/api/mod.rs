//! ESG API access: request parameters, endpoint paths, transport and payloads.
//!
//! # Example
//!
//! ```no_run
//! use esg_explorer::api::{EsgClient, EsgClientConfig, EsgTransport, QueryParams, TableName};
//!
//! let client = EsgClient::new(EsgClientConfig::default()).unwrap();
//! let params = QueryParams::Table { table: TableName::Msci };
//! let body = client.get(&params.endpoint()).unwrap();
//! ```

mod client;
mod endpoint;
mod payload;
mod traits;

pub use client::{EsgClient, EsgClientConfig};
pub use endpoint::{
    ALL_TABLES, API_ROOT, EndpointPath, QueryMode, QueryParams, TableName, Ticker,
};
pub use payload::{format_number, CellValue, CompanyScores, Payload, Row, RowSet};
pub use traits::EsgTransport;
