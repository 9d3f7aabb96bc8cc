//! Generic data grid.
//!
//! One parametric component takes an entity collection plus a column model
//! and renders a filtered, sorted, paginated table, optionally augmented
//! with the synthetic `estado` (toggle) and `acciones` (edit) columns.
//! Every entity screen goes through [`EntityTable`], the composition helper
//! that stamps row identity and applies the house defaults.

mod column;
mod entity_table;
mod pipeline;
mod row;
mod state;
mod value;

pub use column::{augment_columns, CellRender, Column, COL_ACCIONES, COL_ESTADO};
pub use entity_table::{stamp_rows, EntityTable, TableOptions};
pub use pipeline::{clamp_page, filter_rows, paginate, sort_rows, total_pages};
pub use row::{GridRecord, Row};
pub use state::{GridState, SortDirection};
pub use value::CellValue;

use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;

/// Rendering context of the grid, passed in explicitly so the component
/// stays testable without any app-level theme plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTheme {
    pub striped: bool,
    pub compact: bool,
}

impl GridTheme {
    fn table_class(&self) -> String {
        let mut class = "table__data".to_string();
        if self.striped {
            class.push_str(" table--striped");
        }
        if self.compact {
            class.push_str(" table--compact");
        }
        class
    }
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            striped: true,
            compact: false,
        }
    }
}

/// Indicator appended to a sortable header label.
fn get_sort_indicator(current: Option<&str>, field: &str, dir: SortDirection) -> &'static str {
    if current == Some(field) {
        if dir.is_asc() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

fn get_sort_class(current: Option<&str>, field: &str) -> &'static str {
    if current == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Generic table over any [`GridRecord`] collection.
///
/// Owns its view state (filter, sort, page); every interaction re-derives
/// the visible slice synchronously through `filter → sort → paginate`. The
/// `on_toggle_estado` / `on_edit` handlers are opaque: the grid invokes
/// them and neither awaits nor tracks their outcome.
#[component]
pub fn DataGrid<T: GridRecord>(
    /// Rows, already stamped with list identity.
    #[prop(into)]
    rows: Signal<Vec<Row<T>>>,
    /// Caller-supplied column model; synthetic columns are appended after.
    columns: Vec<Column<T>>,
    #[prop(optional_no_strip)] on_toggle_estado: Option<Callback<T>>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<T>>,
    /// Initial sort column; `None` keeps the input order.
    #[prop(optional_no_strip)]
    sort_field: Option<String>,
    #[prop(optional)] sort_dir: SortDirection,
    #[prop(optional, default = 12)] page_size: usize,
    /// Whether to inject the estado column when its handler is present.
    #[prop(optional, default = true)]
    with_estado: bool,
    /// Whether to inject the acciones column when its handler is present.
    #[prop(optional, default = true)]
    with_acciones: bool,
    #[prop(optional_no_strip)] page_size_options: Option<Vec<usize>>,
    #[prop(optional)] theme: GridTheme,
) -> impl IntoView {
    let columns = augment_columns(
        columns,
        with_estado && on_toggle_estado.is_some(),
        with_acciones && on_edit.is_some(),
    );
    let filter_keys: Vec<String> = columns
        .iter()
        .filter(|c| c.filterable)
        .map(|c| c.key.clone())
        .collect();
    let col_count = columns.len().to_string();

    let state = RwSignal::new(GridState::new(sort_field, sort_dir, page_size));

    // Filter and sort always run over the full collection; the page is a
    // window over the result.
    let processed = Memo::new(move |_| {
        let (query, sort_field, sort_dir) =
            state.with(|s| (s.filter.clone(), s.sort_field.clone(), s.sort_dir));
        let mut derived = filter_rows(&rows.get(), &filter_keys, &query);
        sort_rows(&mut derived, sort_field.as_deref(), sort_dir);
        derived
    });

    let total_count = Memo::new(move |_| processed.with(|r| r.len()));
    let pages = Memo::new(move |_| total_pages(total_count.get(), state.with(|s| s.page_size)));
    // Clamped on every recompute: a shrinking collection must not leave the
    // view stuck on a page past the end.
    let current_page = Memo::new(move |_| clamp_page(state.with(|s| s.page), pages.get()));
    let page_rows = Memo::new(move |_| {
        let page = current_page.get();
        let size = state.with(|s| s.page_size);
        processed.with(|rows| paginate(rows, page, size))
    });

    let filter_value = Signal::derive(move || state.with(|s| s.filter.clone()));
    let page_size_value = Signal::derive(move || state.with(|s| s.page_size));

    let header_cells: Vec<AnyView> = columns
        .iter()
        .map(|col| header_cell(col, state))
        .collect();

    let body_columns = columns;

    view! {
        <div class="table">
            <div class="table__toolbar">
                <SearchInput
                    value=filter_value
                    on_change=Callback::new(move |query: String| {
                        state.update(|s| s.set_filter(query))
                    })
                />
                <PaginationControls
                    current_page=current_page
                    total_pages=pages
                    total_count=total_count
                    page_size=page_size_value
                    on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
                    on_page_size_change=Callback::new(move |size| {
                        state.update(|s| s.set_page_size(size))
                    })
                    page_size_options=page_size_options
                />
            </div>
            <table class=theme.table_class()>
                <thead class="table__head">
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>
                    {move || {
                        let visibles = page_rows.get();
                        if visibles.is_empty() {
                            return view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--empty" colspan=col_count.clone()>
                                        "No hay registros"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        visibles
                            .into_iter()
                            .map(|row| {
                                let cells: Vec<AnyView> = body_columns
                                    .iter()
                                    .map(|col| render_cell(col, &row, on_toggle_estado, on_edit))
                                    .collect();
                                view! { <tr class="table__row">{cells}</tr> }.into_any()
                            })
                            .collect::<Vec<_>>()
                            .into_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn header_cell<T: GridRecord>(col: &Column<T>, state: RwSignal<GridState>) -> AnyView {
    let label = col.label.clone();

    if !col.sortable {
        return view! { <th class="table__header-cell">{label}</th> }.into_any();
    }

    let key_for_click = col.key.clone();
    let key_for_class = col.key.clone();
    let key_for_indicator = col.key.clone();

    view! {
        <th class="table__header-cell table__header-cell--sortable">
            <div
                class="table__sortable-header"
                on:click=move |_| state.update(|s| s.toggle_sort(&key_for_click))
            >
                {label}
                <span class=move || {
                    state.with(|s| get_sort_class(s.sort_field.as_deref(), &key_for_class))
                }>
                    {move || {
                        state.with(|s| {
                            get_sort_indicator(s.sort_field.as_deref(), &key_for_indicator, s.sort_dir)
                        })
                    }}
                </span>
            </div>
        </th>
    }
    .into_any()
}

fn render_cell<T: GridRecord>(
    col: &Column<T>,
    row: &Row<T>,
    on_toggle_estado: Option<Callback<T>>,
    on_edit: Option<Callback<T>>,
) -> AnyView {
    if let Some(render) = &col.render {
        return view! { <td class="table__cell">{render(&row.entity)}</td> }.into_any();
    }

    if col.key == COL_ESTADO {
        if let Some(on_toggle) = on_toggle_estado {
            return estado_cell(row, on_toggle);
        }
    }
    if col.key == COL_ACCIONES {
        if let Some(on_edit) = on_edit {
            return acciones_cell(row, on_edit);
        }
    }

    view! { <td class="table__cell">{row.entity.field(&col.key).display()}</td> }.into_any()
}

/// Binary toggle reflecting the row's estado field. The click stays inside
/// the cell so it never bubbles into row-level handlers.
fn estado_cell<T: GridRecord>(row: &Row<T>, on_toggle: Callback<T>) -> AnyView {
    let activo = matches!(row.entity.field(COL_ESTADO), CellValue::Bool(true));
    let entity = row.entity.clone();

    view! {
        <td class="table__cell table__cell--estado" on:click=|e| e.stop_propagation()>
            <button
                class=if activo { "estado-toggle estado-toggle--activo" } else { "estado-toggle" }
                title=if activo { "Desactivar" } else { "Activar" }
                on:click=move |_| on_toggle.run(entity.clone())
            >
                {if activo { "Activo" } else { "Inactivo" }}
            </button>
        </td>
    }
    .into_any()
}

fn acciones_cell<T: GridRecord>(row: &Row<T>, on_edit: Callback<T>) -> AnyView {
    let entity = row.entity.clone();

    view! {
        <td class="table__cell table__cell--acciones" on:click=|e| e.stop_propagation()>
            <button
                class="button button--icon"
                title="Editar"
                on:click=move |_| on_edit.run(entity.clone())
            >
                {icon("edit")}
            </button>
        </td>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicador_de_orden_segun_columna_activa() {
        assert_eq!(
            get_sort_indicator(Some("nombre"), "nombre", SortDirection::Asc),
            " ▲"
        );
        assert_eq!(
            get_sort_indicator(Some("nombre"), "nombre", SortDirection::Desc),
            " ▼"
        );
        assert_eq!(
            get_sort_indicator(Some("nombre"), "cantidad", SortDirection::Asc),
            " ⇅"
        );
        assert_eq!(get_sort_indicator(None, "nombre", SortDirection::Asc), " ⇅");
    }

    #[test]
    fn clase_del_indicador_marca_la_columna_activa() {
        assert_eq!(
            get_sort_class(Some("nombre"), "nombre"),
            "table__sort-indicator table__sort-indicator--active"
        );
        assert_eq!(get_sort_class(None, "nombre"), "table__sort-indicator");
    }

    #[test]
    fn el_tema_compone_las_clases_bem() {
        assert_eq!(GridTheme::default().table_class(), "table__data table--striped");
        let plano = GridTheme {
            striped: false,
            compact: true,
        };
        assert_eq!(plano.table_class(), "table__data table--compact");
    }
}
