use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ubicación física del centro: almacén, taller o aula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ubicacion {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Las aulas admiten préstamo directo de material.
    pub es_aula: bool,
    pub estado: bool,
}

impl Ubicacion {
    pub fn nueva(nombre: String, descripcion: Option<String>, es_aula: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            nombre,
            descripcion,
            es_aula,
            estado: true,
        }
    }
}
