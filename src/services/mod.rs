//! Adapter layer: filesystem record store, HTTP image client, report output.

pub mod csv_record_store;
pub mod image_client_http;
pub mod report;

pub use csv_record_store::{CsvRecordStore, DEFAULT_STORE_FILE};
pub use image_client_http::{API_KEY_ENV, HttpImageClient};
pub use report::DEFAULT_REPORT_FILE;
