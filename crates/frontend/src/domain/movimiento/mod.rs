pub mod ui;

use contracts::domain::Movimiento;
use contracts::enums::TipoMovimiento;
use leptos::prelude::*;

use crate::shared::components::data_grid::{CellValue, Column, GridRecord};

impl GridRecord for Movimiento {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "material" => self.material.as_str().into(),
            "tipo" => self.tipo.display_name().into(),
            "cantidad" => self.cantidad.into(),
            "usuario" => self.usuario.as_str().into(),
            "fecha" => self.fecha.into(),
            "estado" => self.estado.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Column model of the movements register.
///
/// The register is read-only, so it supplies its own `estado` column (a
/// válido/anulado badge) instead of the grid's toggle.
pub fn columnas() -> Vec<Column<Movimiento>> {
    vec![
        Column::new("fecha", "Fecha").sortable().filterable(),
        Column::new("material", "Material").sortable().filterable(),
        Column::new("tipo", "Tipo").sortable().render(|m: &Movimiento| {
            let clase = match m.tipo {
                TipoMovimiento::Entrada => "badge badge--entrada",
                TipoMovimiento::Salida => "badge badge--salida",
            };
            view! { <span class=clase>{m.tipo.display_name()}</span> }.into_any()
        }),
        Column::new("cantidad", "Cantidad").sortable(),
        Column::new("usuario", "Usuario").sortable().filterable(),
        Column::new("estado", "Estado").render(|m: &Movimiento| {
            if m.estado {
                view! { <span class="badge">"Válido"</span> }.into_any()
            } else {
                view! { <span class="badge badge--anulado">"Anulado"</span> }.into_any()
            }
        }),
    ]
}
