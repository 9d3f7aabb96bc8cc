use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::TipoMovimiento;

/// Movimiento de almacén: entrada o salida de un material.
///
/// `estado = false` marca el movimiento como anulado; el registro nunca se
/// borra del histórico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movimiento {
    pub id: Uuid,
    pub material_id: Uuid,
    /// Nombre del material, desnormalizado para listados.
    pub material: String,
    pub tipo: TipoMovimiento,
    pub cantidad: i32,
    /// Nombre del usuario que registró el movimiento.
    pub usuario: String,
    pub fecha: DateTime<Utc>,
    pub estado: bool,
}

impl Movimiento {
    pub fn nuevo(
        material_id: Uuid,
        material: String,
        tipo: TipoMovimiento,
        cantidad: i32,
        usuario: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_id,
            material,
            tipo,
            cantidad,
            usuario,
            fecha: Utc::now(),
            estado: true,
        }
    }
}
