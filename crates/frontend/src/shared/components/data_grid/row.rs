use super::value::CellValue;

/// Field access by column key, the only capability the grid needs from an
/// entity type.
///
/// An unknown key must return [`CellValue::Empty`] rather than panic; a bad
/// column key degrades that column, not the whole table.
pub trait GridRecord: Clone + PartialEq + Send + Sync + 'static {
    fn field(&self, key: &str) -> CellValue;
}

/// An entity stamped with its row identity.
///
/// The key comes from the entity's own identifier field, so it stays stable
/// across re-renders of the same logical item and is never regenerated per
/// render.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub key: String,
    pub entity: T,
}
