pub mod image_client;
pub mod record_store;

pub use image_client::{ImageClient, ImageRef, ImageRequest, MockImageClient};
pub use record_store::RecordStore;
