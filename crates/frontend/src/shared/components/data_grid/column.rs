use std::sync::Arc;

use leptos::prelude::*;

/// Reserved key for the synthetic state-toggle column.
pub const COL_ESTADO: &str = "estado";
/// Reserved key for the synthetic actions column.
pub const COL_ACCIONES: &str = "acciones";

/// Custom cell renderer. Must be a pure function of the entity: the grid
/// calls it as often as it re-renders, never for filtering or sorting.
pub type CellRender<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Declarative description of one table column: which field to read, how to
/// label it, and whether it takes part in sorting and free-text search.
///
/// A column is plain configuration and never executes side effects itself;
/// all interactive affordances live in the grid's own synthetic-cell
/// rendering.
pub struct Column<T> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub filterable: bool,
    pub render: Option<CellRender<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            render: self.render.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: false,
            render: None,
        }
    }

    /// Header clicks re-sort by this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// The raw field value takes part in free-text search.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Replace the default cell formatting with a custom renderer.
    pub fn render(mut self, f: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(f));
        self
    }
}

/// Append the synthetic `estado` and `acciones` columns when requested.
///
/// A caller-supplied column already using a reserved key owns it: the grid
/// never injects a duplicate. Synthetic columns always go after the caller's
/// columns, estado first.
pub fn augment_columns<T>(
    mut columns: Vec<Column<T>>,
    with_estado: bool,
    with_acciones: bool,
) -> Vec<Column<T>> {
    if with_estado && !columns.iter().any(|c| c.key == COL_ESTADO) {
        columns.push(Column::new(COL_ESTADO, "Estado").sortable());
    }
    if with_acciones && !columns.iter().any(|c| c.key == COL_ACCIONES) {
        columns.push(Column::new(COL_ACCIONES, "Acciones"));
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nombre_col() -> Column<()> {
        Column::new("nombre", "Nombre").sortable().filterable()
    }

    #[test]
    fn inyecta_estado_y_acciones_al_final() {
        let cols = augment_columns(vec![nombre_col()], true, true);
        let keys: Vec<&str> = cols.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["nombre", COL_ESTADO, COL_ACCIONES]);
    }

    #[test]
    fn no_duplica_una_columna_estado_del_llamante() {
        let propia = Column::<()>::new(COL_ESTADO, "Situación");
        let cols = augment_columns(vec![nombre_col(), propia], true, true);
        let estados = cols.iter().filter(|c| c.key == COL_ESTADO).count();
        assert_eq!(estados, 1);
        // The caller's label wins.
        assert_eq!(
            cols.iter().find(|c| c.key == COL_ESTADO).unwrap().label,
            "Situación"
        );
    }

    #[test]
    fn sin_peticion_no_se_inyecta_nada() {
        let cols = augment_columns(vec![nombre_col()], false, false);
        assert_eq!(cols.len(), 1);
    }
}
