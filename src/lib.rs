pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod reader;
pub mod traits;
pub mod utils;

pub use config::{Cli, Config, FragmentPolicy};
pub use endpoints::page::PageRenderer;
pub use endpoints::server::TrafficServer;
pub use error::TrafficError;
pub use models::view::{BoundingBox, MapViewRequest};
