pub mod ui;

use contracts::domain::Usuario;
use leptos::prelude::*;

use crate::shared::components::data_grid::{CellValue, Column, GridRecord};

impl GridRecord for Usuario {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "nombre" => self.nombre.as_str().into(),
            "apellidos" => self.apellidos.as_str().into(),
            "email" => self.email.as_str().into(),
            // The role filters and sorts by its display name, not the code.
            "rol" => self.rol.display_name().into(),
            "fecha_alta" => self.fecha_alta.into(),
            "estado" => self.estado.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Column model of the users list.
pub fn columnas() -> Vec<Column<Usuario>> {
    vec![
        Column::new("nombre", "Nombre").sortable().filterable(),
        Column::new("apellidos", "Apellidos").sortable().filterable(),
        Column::new("email", "Email").filterable(),
        Column::new("rol", "Rol").sortable().render(|u: &Usuario| {
            view! { <span class="badge">{u.rol.display_name()}</span> }.into_any()
        }),
        Column::new("fecha_alta", "Fecha de alta")
            .sortable()
            .filterable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Rol;

    #[test]
    fn el_rol_se_expone_con_su_nombre_legible() {
        let usuario = Usuario::nuevo(
            "Ana".to_string(),
            "García".to_string(),
            "ana@centro.es".to_string(),
            Rol::Almacen,
        );
        assert_eq!(usuario.field("rol"), CellValue::Text("Almacén".to_string()));
    }
}
