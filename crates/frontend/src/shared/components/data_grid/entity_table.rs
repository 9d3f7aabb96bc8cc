use leptos::prelude::*;

use super::column::Column;
use super::row::{GridRecord, Row};
use super::state::SortDirection;
use super::{DataGrid, GridTheme};

/// Stamp each entity with its row key, read from `id_field`.
///
/// The factory does not validate uniqueness; a non-unique identifier field
/// is a caller bug and produces unstable list identity, not an error.
pub fn stamp_rows<T: GridRecord>(items: &[T], id_field: &str) -> Vec<Row<T>> {
    items
        .iter()
        .map(|entity| Row {
            key: entity.field(id_field).as_key(),
            entity: entity.clone(),
        })
        .collect()
}

/// Display options for [`EntityTable`], merged over the house defaults:
/// six rows per page, active records first, both synthetic columns on.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub page_size: usize,
    pub sort_field: Option<String>,
    pub sort_dir: SortDirection,
    pub with_estado: bool,
    pub with_acciones: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: 6,
            sort_field: Some(super::COL_ESTADO.to_string()),
            sort_dir: SortDirection::Desc,
            with_estado: true,
            with_acciones: true,
        }
    }
}

/// Standard table for an entity collection.
///
/// Thin composition step over [`DataGrid`]: stamps row identity from the
/// entity's identifier field, applies the default display options and
/// delegates. Holds no state of its own, so it is safe to build on every
/// render.
#[component]
pub fn EntityTable<T: GridRecord>(
    /// Raw entity collection, as fetched from the backend.
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Column model for this entity.
    columns: Vec<Column<T>>,
    /// Field whose value becomes the row key. Must be unique in the input.
    id_field: &'static str,
    /// Toggles the record's estado; enables the synthetic estado column.
    #[prop(optional_no_strip)]
    on_toggle_estado: Option<Callback<T>>,
    /// Opens the record for editing; enables the synthetic acciones column.
    #[prop(optional_no_strip)]
    on_edit: Option<Callback<T>>,
    #[prop(optional)] options: Option<TableOptions>,
    #[prop(optional)] theme: GridTheme,
) -> impl IntoView {
    let options = options.unwrap_or_default();
    let rows = Signal::derive(move || stamp_rows(&items.get(), id_field));

    view! {
        <DataGrid
            rows=rows
            columns=columns
            on_toggle_estado=on_toggle_estado
            on_edit=on_edit
            sort_field=options.sort_field
            sort_dir=options.sort_dir
            page_size=options.page_size
            with_estado=options.with_estado
            with_acciones=options.with_acciones
            theme=theme
        />
    }
}

#[cfg(test)]
mod tests {
    use super::super::value::CellValue;
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Aula {
        codigo: String,
        planta: i32,
    }

    impl GridRecord for Aula {
        fn field(&self, key: &str) -> CellValue {
            match key {
                "codigo" => self.codigo.as_str().into(),
                "planta" => self.planta.into(),
                _ => CellValue::Empty,
            }
        }
    }

    #[test]
    fn estampa_la_clave_desde_el_campo_identificador() {
        let aulas = vec![
            Aula {
                codigo: "T-1".to_string(),
                planta: 1,
            },
            Aula {
                codigo: "T-2".to_string(),
                planta: 2,
            },
        ];

        let rows = stamp_rows(&aulas, "codigo");
        let claves: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(claves, vec!["T-1", "T-2"]);
        assert_eq!(rows[1].entity, aulas[1]);
    }

    #[test]
    fn la_clave_numerica_se_convierte_en_texto() {
        let aulas = vec![Aula {
            codigo: "T-1".to_string(),
            planta: 3,
        }];
        let rows = stamp_rows(&aulas, "planta");
        assert_eq!(rows[0].key, "3");
    }

    #[test]
    fn las_opciones_por_defecto_son_las_de_la_casa() {
        let options = TableOptions::default();
        assert_eq!(options.page_size, 6);
        assert_eq!(options.sort_field.as_deref(), Some("estado"));
        assert_eq!(options.sort_dir, SortDirection::Desc);
        assert!(options.with_estado);
        assert!(options.with_acciones);
    }

    #[test]
    fn las_opciones_del_llamante_se_superponen_a_las_por_defecto() {
        let options = TableOptions {
            sort_field: Some("codigo".to_string()),
            sort_dir: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(options.page_size, 6);
        assert_eq!(options.sort_field.as_deref(), Some("codigo"));
    }
}
