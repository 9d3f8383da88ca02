use async_trait::async_trait;
use mosaico_core::ports::{ActivityReporter, CatalogRequest};

/// An `ActivityReporter` that turns catalog activity into log events.
///
/// The view reads loading/error state from the session snapshot; this is
/// the side channel for whoever is watching the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

#[async_trait]
impl ActivityReporter for TracingReporter {
  async fn started(&self, request: &CatalogRequest) {
    tracing::info!(%request, "catalog request started");
  }

  async fn succeeded(&self, request: &CatalogRequest, albums: usize) {
    tracing::info!(%request, albums, "catalog request finished");
  }

  async fn failed(&self, request: &CatalogRequest, error: &str) {
    tracing::warn!(%request, error, "catalog request failed");
  }
}
