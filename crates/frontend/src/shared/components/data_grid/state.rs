/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_asc(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// View state of one grid instance. Local to the component, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Free-text filter. Empty matches everything.
    pub filter: String,
    /// Active sort column; `None` preserves the filtered order.
    pub sort_field: Option<String>,
    pub sort_dir: SortDirection,
    /// Current page, 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl GridState {
    pub fn new(sort_field: Option<String>, sort_dir: SortDirection, page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort_field,
            sort_dir,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Header click: same column flips the direction, a new column starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        match &self.sort_field {
            Some(actual) if actual == field => self.sort_dir = self.sort_dir.flip(),
            _ => {
                self.sort_field = Some(field.to_string());
                self.sort_dir = SortDirection::Asc;
            }
        }
    }

    /// Changing the filter goes back to page 1 so the view never lands on a
    /// page that no longer exists.
    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.page = 1;
    }

    /// Changing the page size also goes back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(None, SortDirection::Asc, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternar_sobre_la_misma_columna_invierte() {
        let mut state = GridState::default();
        state.toggle_sort("nombre");
        assert_eq!(state.sort_field.as_deref(), Some("nombre"));
        assert_eq!(state.sort_dir, SortDirection::Asc);

        state.toggle_sort("nombre");
        assert_eq!(state.sort_dir, SortDirection::Desc);

        state.toggle_sort("cantidad");
        assert_eq!(state.sort_field.as_deref(), Some("cantidad"));
        assert_eq!(state.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn cambiar_filtro_vuelve_a_la_primera_pagina() {
        let mut state = GridState::default();
        state.set_page(4);
        state.set_filter("taladro".to_string());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn cambiar_tamano_de_pagina_vuelve_a_la_primera_pagina() {
        let mut state = GridState::default();
        state.set_page(3);
        state.set_page_size(24);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 24);
    }

    #[test]
    fn el_tamano_de_pagina_nunca_baja_de_uno() {
        let mut state = GridState::default();
        state.set_page_size(0);
        assert_eq!(state.page_size, 1);
    }
}
