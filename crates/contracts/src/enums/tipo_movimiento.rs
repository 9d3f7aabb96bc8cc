use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Tipo de movimiento de almacén.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoMovimiento {
    Entrada,
    Salida,
}

impl TipoMovimiento {
    /// Código estable usado en la API y en los formularios.
    pub fn code(&self) -> &'static str {
        match self {
            TipoMovimiento::Entrada => "entrada",
            TipoMovimiento::Salida => "salida",
        }
    }

    /// Nombre legible para la interfaz.
    pub fn display_name(&self) -> &'static str {
        match self {
            TipoMovimiento::Entrada => "Entrada",
            TipoMovimiento::Salida => "Salida",
        }
    }

    pub fn all() -> [TipoMovimiento; 2] {
        [TipoMovimiento::Entrada, TipoMovimiento::Salida]
    }
}

impl FromStr for TipoMovimiento {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrada" => Ok(TipoMovimiento::Entrada),
            "salida" => Ok(TipoMovimiento::Salida),
            other => bail!("tipo de movimiento desconocido: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_acepta_los_codigos_de_la_api() {
        assert_eq!(
            "entrada".parse::<TipoMovimiento>().unwrap(),
            TipoMovimiento::Entrada
        );
        assert_eq!(
            "salida".parse::<TipoMovimiento>().unwrap(),
            TipoMovimiento::Salida
        );
        assert!("prestamo".parse::<TipoMovimiento>().is_err());
    }

    #[test]
    fn serializa_en_minusculas() {
        let json = serde_json::to_string(&TipoMovimiento::Salida).unwrap();
        assert_eq!(json, "\"salida\"");
    }
}
