pub mod ui;

use contracts::domain::Material;

use crate::shared::components::data_grid::{CellValue, Column, GridRecord};

impl GridRecord for Material {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "nombre" => self.nombre.as_str().into(),
            "descripcion" => self.descripcion.clone().into(),
            "cantidad" => self.cantidad.into(),
            "ubicacion" => self.ubicacion.clone().into(),
            "fecha_alta" => self.fecha_alta.into(),
            "estado" => self.estado.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Column model of the materials list.
pub fn columnas() -> Vec<Column<Material>> {
    vec![
        Column::new("nombre", "Nombre").sortable().filterable(),
        Column::new("descripcion", "Descripción").filterable(),
        Column::new("cantidad", "Cantidad").sortable(),
        Column::new("ubicacion", "Ubicación").sortable().filterable(),
        Column::new("fecha_alta", "Fecha de alta")
            .sortable()
            .filterable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expone_sus_campos_por_clave() {
        let material = Material::nuevo("Taladro".to_string(), None, 3, None);
        assert_eq!(
            material.field("nombre"),
            CellValue::Text("Taladro".to_string())
        );
        assert_eq!(material.field("cantidad"), CellValue::Number(3.0));
        assert_eq!(material.field("estado"), CellValue::Bool(true));
        assert_eq!(material.field("descripcion"), CellValue::Empty);
        assert_eq!(material.field("desconocido"), CellValue::Empty);
    }

    #[test]
    fn la_clave_de_fila_es_el_uuid() {
        let material = Material::nuevo("Taladro".to_string(), None, 3, None);
        assert_eq!(material.field("id").as_key(), material.id.to_string());
    }
}
