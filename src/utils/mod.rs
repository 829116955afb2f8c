pub mod status;
pub mod urls;
