//! Pure derivation pipeline of the grid: `rows → filter → sort → paginate`.
//!
//! Filtering and sorting always run over the full collection; the visible
//! page is a window over the derived sequence. Inputs are never mutated in
//! place, every step returns a fresh sequence.

use super::row::{GridRecord, Row};
use super::state::SortDirection;

/// Keep the rows where any filterable column matches the query,
/// case-insensitively, as a substring.
///
/// An empty (or whitespace-only) query is the identity filter.
pub fn filter_rows<T: GridRecord>(
    rows: &[Row<T>],
    filter_keys: &[String],
    query: &str,
) -> Vec<Row<T>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            filter_keys.iter().any(|key| {
                row.entity
                    .field(key)
                    .search_text()
                    .to_lowercase()
                    .contains(&query)
            })
        })
        .cloned()
        .collect()
}

/// Sort in place by the given column. `None` leaves the filtered order as is.
pub fn sort_rows<T: GridRecord>(
    rows: &mut [Row<T>],
    sort_field: Option<&str>,
    sort_dir: SortDirection,
) {
    let Some(field) = sort_field else {
        return;
    };

    rows.sort_by(|a, b| {
        let ord = a.entity.field(field).compare(&b.entity.field(field));
        match sort_dir {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Number of pages for `count` rows; 0 when the collection is empty.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a 1-based page number into the valid range, so a shrinking
/// collection can never leave the view on a blank page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// The contiguous slice `[(page-1)*size, page*size)` of the derived rows.
pub fn paginate<T: Clone>(rows: &[Row<T>], page: usize, page_size: usize) -> Vec<Row<T>> {
    let start = page.saturating_sub(1) * page_size;
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::super::value::CellValue;
    use super::*;
    use crate::shared::date_utils::parse_iso_timestamp;

    #[derive(Debug, Clone, PartialEq)]
    struct Articulo {
        id: i32,
        nombre: String,
        referencia: String,
        alta: String,
        estado: bool,
    }

    impl GridRecord for Articulo {
        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "nombre" => self.nombre.as_str().into(),
                "referencia" => self.referencia.as_str().into(),
                "alta" => self.alta.as_str().into(),
                "estado" => self.estado.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn articulos() -> Vec<Row<Articulo>> {
        let datos = [
            (1, "Taladro", "REF-10", "2024-03-15T00:00:00.000Z", true),
            (2, "Brocas", "REF-2", "2024-01-20T00:00:00.000Z", false),
            (3, "Alicates", "REF-7", "2024-06-01T00:00:00.000Z", true),
            (4, "Martillo", "REF-31", "2023-11-05T00:00:00.000Z", false),
            (5, "Sierra", "REF-19", "2024-02-28T00:00:00.000Z", true),
        ];
        datos
            .into_iter()
            .map(|(id, nombre, referencia, alta, estado)| Row {
                key: id.to_string(),
                entity: Articulo {
                    id,
                    nombre: nombre.to_string(),
                    referencia: referencia.to_string(),
                    alta: alta.to_string(),
                    estado,
                },
            })
            .collect()
    }

    fn claves_filtrables() -> Vec<String> {
        vec!["nombre".to_string(), "alta".to_string()]
    }

    fn nombres(rows: &[Row<Articulo>]) -> Vec<&str> {
        rows.iter().map(|r| r.entity.nombre.as_str()).collect()
    }

    #[test]
    fn el_filtro_vacio_es_la_identidad() {
        let rows = articulos();
        assert_eq!(filter_rows(&rows, &claves_filtrables(), ""), rows);
        assert_eq!(filter_rows(&rows, &claves_filtrables(), "   "), rows);
    }

    #[test]
    fn el_filtro_es_idempotente() {
        let rows = articulos();
        let una_vez = filter_rows(&rows, &claves_filtrables(), "ta");
        let dos_veces = filter_rows(&una_vez, &claves_filtrables(), "ta");
        assert_eq!(una_vez, dos_veces);
    }

    #[test]
    fn el_filtro_devuelve_un_subconjunto() {
        let rows = articulos();
        let filtradas = filter_rows(&rows, &claves_filtrables(), "mart");
        assert!(filtradas.iter().all(|r| rows.contains(r)));
        assert_eq!(nombres(&filtradas), vec!["Martillo"]);
    }

    #[test]
    fn el_filtro_ignora_mayusculas() {
        let rows = articulos();
        let filtradas = filter_rows(&rows, &claves_filtrables(), "TALADRO");
        assert_eq!(nombres(&filtradas), vec!["Taladro"]);
    }

    #[test]
    fn el_filtro_no_mira_columnas_no_filtrables() {
        let rows = articulos();
        // "referencia" is not in the filterable key set.
        let filtradas = filter_rows(&rows, &claves_filtrables(), "REF-10");
        assert!(filtradas.is_empty());
    }

    #[test]
    fn una_fecha_se_encuentra_en_iso_y_en_formato_de_pantalla() {
        let rows = articulos();
        let por_iso = filter_rows(&rows, &claves_filtrables(), "2024-03-15");
        let por_pantalla = filter_rows(&rows, &claves_filtrables(), "15/03/2024");
        assert_eq!(nombres(&por_iso), vec!["Taladro"]);
        assert_eq!(por_iso, por_pantalla);
    }

    #[test]
    fn ordena_texto_ascendente_y_descendente() {
        let mut rows = articulos();
        sort_rows(&mut rows, Some("nombre"), SortDirection::Asc);
        assert_eq!(
            nombres(&rows),
            vec!["Alicates", "Brocas", "Martillo", "Sierra", "Taladro"]
        );

        let ascendente = rows.clone();
        sort_rows(&mut rows, Some("nombre"), SortDirection::Desc);
        let invertida: Vec<_> = ascendente.into_iter().rev().collect();
        assert_eq!(rows, invertida);
    }

    #[test]
    fn sin_columna_de_orden_se_conserva_el_orden_de_entrada() {
        let mut rows = articulos();
        let original = rows.clone();
        sort_rows(&mut rows, None, SortDirection::Desc);
        assert_eq!(rows, original);
    }

    #[test]
    fn ordenar_por_estado_descendente_pone_los_activos_primero() {
        let mut rows = articulos();
        sort_rows(&mut rows, Some("estado"), SortDirection::Desc);
        let estados: Vec<bool> = rows.iter().map(|r| r.entity.estado).collect();
        assert_eq!(estados, vec![true, true, true, false, false]);
    }

    #[test]
    fn la_paginacion_recompone_el_conjunto_completo() {
        let mut rows = articulos();
        sort_rows(&mut rows, Some("nombre"), SortDirection::Asc);

        let page_size = 2;
        let paginas = total_pages(rows.len(), page_size);
        assert_eq!(paginas, 3);

        let mut reunidas = Vec::new();
        for pagina in 1..=paginas {
            reunidas.extend(paginate(&rows, pagina, page_size));
        }
        assert_eq!(reunidas, rows);
    }

    #[test]
    fn una_pagina_fuera_de_rango_devuelve_vacio() {
        let rows = articulos();
        assert!(paginate(&rows, 9, 2).is_empty());
    }

    #[test]
    fn clamp_page_corrige_paginas_colgadas() {
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(2, 4), 2);
    }

    #[test]
    fn total_pages_redondea_hacia_arriba() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn escenario_basico_estado_descendente_una_fila_por_pagina() {
        let mut rows: Vec<Row<Articulo>> = articulos().into_iter().take(2).collect();
        rows[1].entity.estado = false;

        let filtradas = filter_rows(&rows, &claves_filtrables(), "");
        let mut ordenadas = filtradas;
        sort_rows(&mut ordenadas, Some("estado"), SortDirection::Desc);

        let pagina_1 = paginate(&ordenadas, 1, 1);
        let pagina_2 = paginate(&ordenadas, 2, 1);
        assert_eq!(pagina_1[0].entity.id, 1);
        assert_eq!(pagina_2[0].entity.id, 2);
    }

    #[test]
    fn escenario_sin_resultados() {
        let rows = articulos();
        let filtradas = filter_rows(&rows, &claves_filtrables(), "zzz");
        assert!(filtradas.is_empty());
        assert_eq!(total_pages(filtradas.len(), 6), 0);
    }

    #[test]
    fn las_fechas_tipadas_ordenan_cronologicamente() {
        #[derive(Debug, Clone, PartialEq)]
        struct Hito {
            fecha: chrono::DateTime<chrono::Utc>,
        }
        impl GridRecord for Hito {
            fn field(&self, key: &str) -> CellValue {
                match key {
                    "fecha" => self.fecha.into(),
                    _ => CellValue::Empty,
                }
            }
        }

        let mut rows: Vec<Row<Hito>> = [
            "2024-06-01T00:00:00Z",
            "2023-11-05T00:00:00Z",
            "2024-01-20T00:00:00Z",
        ]
        .into_iter()
        .map(|iso| Row {
            key: iso.to_string(),
            entity: Hito {
                fecha: parse_iso_timestamp(iso).unwrap(),
            },
        })
        .collect();

        sort_rows(&mut rows, Some("fecha"), SortDirection::Asc);
        let claves: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            claves,
            vec![
                "2023-11-05T00:00:00Z",
                "2024-01-20T00:00:00Z",
                "2024-06-01T00:00:00Z"
            ]
        );
    }
}
