use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::date_utils::{format_fecha, format_fecha_iso, format_iso, parse_iso_timestamp};

/// Typed value of one cell, as exposed by [`GridRecord::field`].
///
/// [`GridRecord::field`]: super::GridRecord::field
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Date(DateTime<Utc>),
    Bool(bool),
    Number(f64),
    /// Structured leftovers; serialised best-effort when displayed.
    Json(serde_json::Value),
    Empty,
}

impl CellValue {
    /// Default cell formatting, used when the column has no custom renderer.
    ///
    /// ISO timestamp strings come out as `dd/MM/yyyy`; structured values are
    /// serialised instead of leaking a debug representation; missing values
    /// render as an empty string.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => format_fecha_iso(s),
            CellValue::Date(dt) => format_fecha(dt),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Json(v) => serde_json::to_string(v).unwrap_or_default(),
            CellValue::Empty => String::new(),
        }
    }

    /// Form of the value the free-text filter matches against.
    ///
    /// Timestamps match both in their raw ISO form and as `dd/MM/yyyy`, so a
    /// user can search by the date they see on screen.
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Text(s) => match parse_iso_timestamp(s) {
                Some(dt) => format!("{} {}", s, format_fecha(&dt)),
                None => s.clone(),
            },
            CellValue::Date(dt) => format!("{} {}", format_iso(dt), format_fecha(dt)),
            other => other.display(),
        }
    }

    /// Stable textual identity: stamps row keys and feeds the comparator's
    /// string fallback.
    pub fn as_key(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Date(dt) => format_iso(dt),
            other => other.display(),
        }
    }

    /// Column comparator:
    /// 1. two strings compare case-insensitively;
    /// 2. two dates compare by instant;
    /// 3. anything else is stringified first, so numbers order textually
    ///    ("10" before "2").
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => compare_text(a, b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => compare_text(&self.as_key(), &other.as_key()),
        }
    }
}

/// Case-insensitive ordering with a deterministic tie-break on the raw text.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Date(value)
    }
}

impl From<Uuid> for CellValue {
    fn from(value: Uuid) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        CellValue::Json(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texto(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn compara_textos_sin_distinguir_mayusculas() {
        // Equal ignoring case, so the raw text breaks the tie deterministically.
        assert_eq!(texto("taladro").compare(&texto("TALADRO")), Ordering::Greater);
        assert_eq!(texto("alicates").compare(&texto("Brocas")), Ordering::Less);
    }

    #[test]
    fn compara_fechas_por_instante() {
        let antes = parse_iso_timestamp("2024-03-15T00:00:00Z").unwrap();
        let despues = parse_iso_timestamp("2024-03-15T00:00:01Z").unwrap();
        assert_eq!(
            CellValue::from(antes).compare(&CellValue::from(despues)),
            Ordering::Less
        );
    }

    #[test]
    fn los_numeros_ordenan_como_texto() {
        // Intentional carry-over from the reference behavior: the fallback
        // comparator stringifies, so "10" sorts before "2".
        assert_eq!(
            CellValue::from(10).compare(&CellValue::from(2)),
            Ordering::Less
        );
    }

    #[test]
    fn display_formatea_fechas_iso() {
        assert_eq!(texto("2024-03-15T00:00:00.000Z").display(), "15/03/2024");
        assert_eq!(texto("martillo").display(), "martillo");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn display_serializa_objetos() {
        let v = serde_json::json!({"aula": "T-3"});
        assert_eq!(CellValue::from(v).display(), "{\"aula\":\"T-3\"}");
    }

    #[test]
    fn busqueda_incluye_ambas_formas_de_fecha() {
        let s = texto("2024-03-15T00:00:00.000Z").search_text();
        assert!(s.contains("2024-03-15"));
        assert!(s.contains("15/03/2024"));
    }
}
