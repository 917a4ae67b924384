pub mod client;
pub mod error;

pub use client::NplaceClient;
pub use error::{extract_detail, ClientError};
