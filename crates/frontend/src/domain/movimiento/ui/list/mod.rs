use contracts::domain::Movimiento;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::movimiento::columnas;
use crate::shared::api_utils::{api_base, cache_buster};
use crate::shared::components::data_grid::{EntityTable, SortDirection, TableOptions};
use crate::shared::icons::icon;

/// Read-only register of warehouse movements: no toggle, no editing, just
/// the filtered and sorted history with the most recent entries first.
#[component]
pub fn MovimientoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Movimiento>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match fetch_movimientos().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("error cargando movimientos: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Movimientos"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <EntityTable
                items=items
                columns=columnas()
                id_field="id"
                options=TableOptions {
                    page_size: 12,
                    sort_field: Some("fecha".to_string()),
                    sort_dir: SortDirection::Desc,
                    ..Default::default()
                }
            />
        </div>
    }
}

async fn fetch_movimientos() -> Result<Vec<Movimiento>, String> {
    let url = format!("{}/api/movimientos?_ts={}", api_base(), cache_buster());
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Movimiento>>()
        .await
        .map_err(|e| format!("respuesta no válida: {e}"))
}
