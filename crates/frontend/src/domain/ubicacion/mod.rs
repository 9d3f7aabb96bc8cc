pub mod ui;

use contracts::domain::Ubicacion;
use leptos::prelude::*;

use crate::shared::components::data_grid::{CellValue, Column, GridRecord};

impl GridRecord for Ubicacion {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "nombre" => self.nombre.as_str().into(),
            "descripcion" => self.descripcion.clone().into(),
            "es_aula" => self.es_aula.into(),
            "estado" => self.estado.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Column model of the locations list.
pub fn columnas() -> Vec<Column<Ubicacion>> {
    vec![
        Column::new("nombre", "Nombre").sortable().filterable(),
        Column::new("descripcion", "Descripción").filterable(),
        Column::new("es_aula", "Aula")
            .sortable()
            .render(|u: &Ubicacion| {
                view! { <span>{if u.es_aula { "Sí" } else { "No" }}</span> }.into_any()
            }),
    ]
}
