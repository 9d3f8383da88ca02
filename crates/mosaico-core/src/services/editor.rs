use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use crate::CoreError;
use crate::domain::{Album, DragPayload, GridConfig, Period, Slots, SourceContext};
use crate::ports::{ActivityReporter, AlbumCatalog, CatalogError, CatalogRequest};
use crate::services::layout::{GridLayout, TitleListing, fill_slots, pad_slots};
use crate::services::reconciler::reconcile_drop;

/// Mensaje que ve el usuario cuando falla la importación.
pub const IMPORT_ERROR_MESSAGE: &str = "could not load albums";

/// Foto inmutable del estado del editor.
///
/// Es lo que se entrega a la vista; los cambios solo se piden a través de
/// los métodos de [`EditorSession`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditorSnapshot {
  /// Ranuras de la cuadrícula del editor.
  pub slots: Slots,
  /// Configuración de la cuadrícula del editor.
  pub grid: GridConfig,
  /// Resultado de la última búsqueda.
  pub search_results: Vec<Album>,
  pub search_loading: bool,
  pub search_error: Option<String>,
  pub import_loading: bool,
  pub import_error: Option<String>,
}

impl EditorSnapshot {
  /// Geometría de la cuadrícula del editor para estas ranuras.
  pub fn grid_layout(&self) -> GridLayout {
    GridLayout::compute(&self.grid, self.slots.len())
  }

  pub fn title_listing(&self) -> TitleListing {
    TitleListing::build(&self.slots, &self.grid)
  }
}

/// Controlador del editor: dueño único de todo el estado de la página.
///
/// El estado vive detrás de un `Mutex` que nunca se mantiene tomado durante
/// un `.await`, así que una búsqueda y una importación pueden estar en vuelo
/// a la vez.
///
/// No hay control de generación de peticiones: si una petición lenta termina
/// después de otra más nueva, su resultado pisa al de la nueva. Evitar
/// peticiones duplicadas desde el mismo control queda en manos de la vista
/// (con `search_loading` / `import_loading`).
pub struct EditorSession<C, R>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  catalog: C,
  reporter: R,
  state: Mutex<EditorSnapshot>,
}

impl<C, R> EditorSession<C, R>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  pub fn new(catalog: C, reporter: R) -> Self {
    Self::with_grid(catalog, reporter, GridConfig::default())
  }

  pub fn with_grid(catalog: C, reporter: R, grid: GridConfig) -> Self {
    let slots = fill_slots(Vec::new(), grid.capacity(0));
    let state = EditorSnapshot { slots, grid, ..EditorSnapshot::default() };
    Self { catalog, reporter, state: Mutex::new(state) }
  }

  // -------- QUERY (read) --------

  pub fn snapshot(&self) -> EditorSnapshot {
    self.lock().clone()
  }

  pub fn slots(&self) -> Slots {
    self.lock().slots.clone()
  }

  pub fn grid_config(&self) -> GridConfig {
    self.lock().grid.clone()
  }

  pub fn grid_layout(&self) -> GridLayout {
    self.lock().grid_layout()
  }

  pub fn title_listing(&self) -> TitleListing {
    self.lock().title_listing()
  }

  // -------- COMMANDS (write) --------

  /// Busca álbumes y reemplaza los resultados de búsqueda.
  ///
  /// Una consulta en blanco no hace nada. Si la petición falla, los
  /// resultados quedan vacíos y `search_error` guarda el mensaje.
  pub async fn search(&self, query: &str) -> Vec<Album> {
    if query.trim().is_empty() {
      return Vec::new();
    }

    self.update(|s| {
      s.search_loading = true;
      s.search_error = None;
    });

    let request = CatalogRequest::Search { query: query.to_string() };

    match self.run_request(&request).await {
      Ok(albums) => {
        self.update(|s| {
          s.search_results = albums.clone();
          s.search_loading = false;
        });
        albums
      }
      Err(err) => {
        warn!(%request, error = %err, "album search failed");
        self.update(|s| {
          s.search_results.clear();
          s.search_error = Some(err.to_string());
          s.search_loading = false;
        });
        Vec::new()
      }
    }
  }

  /// Importa los álbumes más escuchados de un usuario a la cuadrícula.
  ///
  /// Un usuario en blanco no hace nada. En caso de error la cuadrícula queda
  /// vacía y `import_error` guarda [`IMPORT_ERROR_MESSAGE`].
  pub async fn import_top_albums(&self, username: &str, period: Period) -> Vec<Album> {
    if username.trim().is_empty() {
      return Vec::new();
    }

    self.update(|s| {
      s.import_loading = true;
      s.import_error = None;
    });

    let request = CatalogRequest::TopAlbums { username: username.to_string(), period };

    let (albums, error) = match self.run_request(&request).await {
      Ok(albums) => (albums, None),
      Err(err) => {
        warn!(%request, error = %err, "top albums import failed");
        (Vec::new(), Some(IMPORT_ERROR_MESSAGE.to_string()))
      }
    };

    self.update(|s| {
      s.slots = fill_slots(albums.clone(), s.grid.capacity(albums.len()));
      s.import_error = error;
      s.import_loading = false;
    });

    albums
  }

  /// Reemplaza el contenido de la cuadrícula por `albums`.
  pub fn replace_albums(&self, albums: Vec<Album>) {
    self.update(|s| {
      let capacity = s.grid.capacity(albums.len());
      s.slots = fill_slots(albums, capacity);
    });
  }

  /// Aplica una suelta sobre la ranura `target_index` de la cuadrícula.
  ///
  /// Desde la búsqueda solo se puede soltar sobre una ranura existente; un
  /// índice fuera de la cuadrícula se rechaza sin tocar el estado. Desde el
  /// editor un índice grande inserta al final.
  pub fn drop_album(&self, payload: DragPayload, target_index: usize) -> Result<(), CoreError> {
    let mut state = self.lock();

    let slots = state.slots.len().max(state.grid.capacity(state.slots.len()));
    if payload.source == SourceContext::Search && target_index >= slots {
      warn!(target_index, slots, "drop outside the grid rejected");
      return Err(CoreError::SlotOutOfRange { index: target_index, slots });
    }

    let next = reconcile_drop(&state.slots, &payload.album, target_index, payload.source);

    debug!(
      album = %payload.album.name,
      source = %payload.source,
      target_index,
      changed = next != state.slots,
      "album dropped"
    );

    state.slots = next;
    Ok(())
  }

  /// Actualiza la configuración a partir de la anterior.
  ///
  /// Si la nueva cuadrícula es más grande se agregan ranuras vacías; si es
  /// más chica los álbumes sobrantes se conservan fuera de la vista.
  pub fn update_grid_config(&self, f: impl FnOnce(&mut GridConfig)) -> GridConfig {
    let mut state = self.lock();
    f(&mut state.grid);

    let capacity = state.grid.capacity(state.slots.len());
    pad_slots(&mut state.slots, capacity);

    state.grid.clone()
  }

  // -------- internos --------

  async fn run_request(&self, request: &CatalogRequest) -> Result<Vec<Album>, CatalogError> {
    self.reporter.started(request).await;

    let result = self.catalog.fetch(request).await;

    match &result {
      Ok(albums) => self.reporter.succeeded(request, albums.len()).await,
      Err(err) => self.reporter.failed(request, &err.to_string()).await,
    }

    result
  }

  fn update(&self, f: impl FnOnce(&mut EditorSnapshot)) {
    f(&mut self.lock());
  }

  fn lock(&self) -> MutexGuard<'_, EditorSnapshot> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
