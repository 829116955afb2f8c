use crate::error::TrafficError;
use async_trait::async_trait;

/// Supplies the shared header/branding markup inlined at the top of the page.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    async fn load(&self) -> Result<String, TrafficError>;
}
