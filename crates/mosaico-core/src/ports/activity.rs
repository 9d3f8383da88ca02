use async_trait::async_trait;

use crate::ports::catalog::CatalogRequest;

// Puerto de salida: quien muestre la UI implementa esto para reflejar
// "cargando…" y deshabilitar el control que disparó la petición.
#[async_trait]
pub trait ActivityReporter: Send + Sync {
  async fn started(&self, request: &CatalogRequest);
  async fn succeeded(&self, request: &CatalogRequest, albums: usize);
  async fn failed(&self, request: &CatalogRequest, error: &str);
}

/// Reporter que descarta todo.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

#[async_trait]
impl ActivityReporter for NoopReporter {
  async fn started(&self, _request: &CatalogRequest) {}

  async fn succeeded(&self, _request: &CatalogRequest, _albums: usize) {}

  async fn failed(&self, _request: &CatalogRequest, _error: &str) {}
}
