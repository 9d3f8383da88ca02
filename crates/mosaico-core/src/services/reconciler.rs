use crate::domain::{Album, SourceContext, Slots};

/// Calcula la nueva secuencia de ranuras tras soltar `dropped` en `target_index`.
///
/// Es una función pura: `slots` no se modifica y quien llama decide cuándo
/// confirmar el resultado.
///
/// - Si el álbum no tiene identificador no hay nada que hacer y se devuelve
///   una copia de la entrada.
/// - [`SourceContext::Search`]: la ranura destino se sobrescribe, descartando
///   lo que hubiera. No se buscan duplicados en el resto de la cuadrícula.
///   Si el índice cae fuera, la secuencia se rellena con ranuras vacías
///   (`usize::MAX` no cabe y deja la secuencia igual).
/// - [`SourceContext::Editor`]: se quita el álbum de su posición actual
///   (buscándolo por identificador) y se inserta en `target_index`,
///   desplazando lo que sigue. Un índice mayor que la longitud inserta al
///   final. Si el álbum no está en la cuadrícula solo se inserta.
///
/// `target_index` se interpreta sobre la secuencia *después* de quitar el
/// álbum, así que al mover hacia la derecha el álbum queda detrás del que
/// ocupaba el destino, que se corrió una posición a la izquierda.
pub fn reconcile_drop(slots: &[Option<Album>], dropped: &Album, target_index: usize, source: SourceContext) -> Slots {
  let Some(dropped_id) = dropped.id else {
    return slots.to_vec();
  };

  let mut next = slots.to_vec();

  match source {
    SourceContext::Search => {
      let Some(len) = target_index.checked_add(1) else {
        return next;
      };
      if len > next.len() {
        next.resize(len, None);
      }
      next[target_index] = Some(dropped.clone());
    }
    SourceContext::Editor => {
      let current = next.iter().position(|slot| slot.as_ref().and_then(|a| a.id) == Some(dropped_id));

      if let Some(current) = current {
        next.remove(current);
      }

      let at = target_index.min(next.len());
      next.insert(at, Some(dropped.clone()));
    }
  }

  next
}
