use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::Rol;

/// Usuario de la aplicación de administración.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: Uuid,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub rol: Rol,
    pub fecha_alta: DateTime<Utc>,
    pub estado: bool,
}

impl Usuario {
    pub fn nuevo(nombre: String, apellidos: String, email: String, rol: Rol) -> Self {
        Self {
            id: Uuid::new_v4(),
            nombre,
            apellidos,
            email,
            rol,
            fecha_alta: Utc::now(),
            estado: true,
        }
    }

    /// Nombre completo para listados y cabeceras.
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nombre_completo_concatena_nombre_y_apellidos() {
        let usuario = Usuario::nuevo(
            "Ana".to_string(),
            "García Pérez".to_string(),
            "ana.garcia@centro.es".to_string(),
            Rol::Profesor,
        );
        assert_eq!(usuario.nombre_completo(), "Ana García Pérez");
    }
}
