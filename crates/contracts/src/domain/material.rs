use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Material inventariable (herramienta, consumible, equipo didáctico).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub cantidad: i32,
    /// Referencia a la ubicación donde se almacena.
    pub ubicacion_id: Option<Uuid>,
    /// Nombre de la ubicación, desnormalizado para listados.
    pub ubicacion: Option<String>,
    pub fecha_alta: DateTime<Utc>,
    pub estado: bool,
}

impl Material {
    /// Crear un material nuevo para insertar en el backend.
    pub fn nuevo(
        nombre: String,
        descripcion: Option<String>,
        cantidad: i32,
        ubicacion_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            nombre,
            descripcion,
            cantidad,
            ubicacion_id,
            ubicacion: None,
            fecha_alta: Utc::now(),
            estado: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializa_con_nombres_camel_case() {
        let material = Material::nuevo("Taladro".to_string(), None, 3, None);
        let json = serde_json::to_value(&material).unwrap();

        assert!(json.get("fechaAlta").is_some());
        assert!(json.get("ubicacionId").is_some());
        assert!(json.get("fecha_alta").is_none());
    }

    #[test]
    fn nuevo_material_queda_activo() {
        let material = Material::nuevo("Llave inglesa".to_string(), None, 1, None);
        assert!(material.estado);
        assert_eq!(material.cantidad, 1);
    }
}
