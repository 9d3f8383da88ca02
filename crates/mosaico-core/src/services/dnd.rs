use crate::domain::{Album, DragPayload, SourceContext};
use crate::ports::{ActivityReporter, AlbumCatalog, DragSource, DropTarget};
use crate::services::editor::EditorSession;

/// Un resultado de búsqueda como origen de arrastre.
pub struct SearchResultSource<'a> {
  results: &'a [Album],
  index: usize,
}

impl<'a> SearchResultSource<'a> {
  pub fn new(results: &'a [Album], index: usize) -> Self {
    Self { results, index }
  }
}

impl DragSource for SearchResultSource<'_> {
  fn begin_drag(&self) -> Option<DragPayload> {
    let album = self.results.get(self.index)?;
    Some(DragPayload::new(album.clone(), SourceContext::Search))
  }
}

/// Una ranura de la cuadrícula del editor como origen de arrastre.
///
/// Una ranura vacía no se puede arrastrar.
pub struct GridSlotSource<'a> {
  slots: &'a [Option<Album>],
  index: usize,
}

impl<'a> GridSlotSource<'a> {
  pub fn new(slots: &'a [Option<Album>], index: usize) -> Self {
    Self { slots, index }
  }
}

impl DragSource for GridSlotSource<'_> {
  fn begin_drag(&self) -> Option<DragPayload> {
    let album = self.slots.get(self.index)?.as_ref()?;
    Some(DragPayload::new(album.clone(), SourceContext::Editor))
  }
}

/// Una ranura de la cuadrícula del editor como destino de suelta.
pub struct GridSlotTarget<'a, C, R>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  session: &'a EditorSession<C, R>,
  index: usize,
}

impl<'a, C, R> GridSlotTarget<'a, C, R>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  pub fn new(session: &'a EditorSession<C, R>, index: usize) -> Self {
    Self { session, index }
  }
}

impl<C, R> DropTarget for GridSlotTarget<'_, C, R>
where
  C: AlbumCatalog,
  R: ActivityReporter,
{
  /// Una suelta fuera de la cuadrícula se descarta; la sesión ya la registra.
  fn on_drop(&self, payload: DragPayload) {
    let _ = self.session.drop_album(payload, self.index);
  }
}
