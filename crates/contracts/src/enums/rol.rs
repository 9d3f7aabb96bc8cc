use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Rol de un usuario dentro de la aplicación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Administrador,
    Profesor,
    Almacen,
}

impl Rol {
    pub fn code(&self) -> &'static str {
        match self {
            Rol::Administrador => "administrador",
            Rol::Profesor => "profesor",
            Rol::Almacen => "almacen",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rol::Administrador => "Administrador",
            Rol::Profesor => "Profesor",
            Rol::Almacen => "Almacén",
        }
    }

    pub fn all() -> [Rol; 3] {
        [Rol::Administrador, Rol::Profesor, Rol::Almacen]
    }
}

impl FromStr for Rol {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrador" => Ok(Rol::Administrador),
            "profesor" => Ok(Rol::Profesor),
            "almacen" => Ok(Rol::Almacen),
            other => bail!("rol desconocido: {other}"),
        }
    }
}
