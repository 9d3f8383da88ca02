use crate::domain::DragPayload;

/// Algo que se puede arrastrar.
///
/// Devuelve `None` cuando no hay nada que arrastrar (por ejemplo, una
/// ranura vacía), lo que equivale a `canDrag = false`.
pub trait DragSource {
  fn begin_drag(&self) -> Option<DragPayload>;
}

/// Algo sobre lo que se puede soltar un [`DragPayload`].
pub trait DropTarget {
  fn on_drop(&self, payload: DragPayload);
}
