use contracts::domain::Ubicacion;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::ubicacion::columnas;
use crate::domain::ubicacion::ui::details::UbicacionDetails;
use crate::shared::api_utils::{api_base, cache_buster};
use crate::shared::components::data_grid::EntityTable;
use crate::shared::icons::icon;

#[component]
pub fn UbicacionList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Ubicacion>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<Ubicacion>>(None);

    let fetch = move || {
        spawn_local(async move {
            match fetch_ubicaciones().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("error cargando ubicaciones: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    let on_toggle = Callback::new(move |ubicacion: Ubicacion| {
        spawn_local(async move {
            if let Err(e) = cambiar_estado(&ubicacion).await {
                log::error!("error cambiando el estado de la ubicación: {e}");
                set_error.set(Some(e));
            }
            fetch();
        });
    });

    let on_edit = Callback::new(move |ubicacion: Ubicacion| {
        set_editing.set(Some(ubicacion));
        set_show_modal.set(true);
    });

    let handle_create = move |_| {
        set_editing.set(None);
        set_show_modal.set(true);
    };

    let on_saved = Callback::new(move |_: ()| {
        set_show_modal.set(false);
        fetch();
    });
    let on_cancel = Callback::new(move |_: ()| set_show_modal.set(false));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Ubicaciones"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "Nueva ubicación"
                    </button>
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
                on_toggle_estado=Some(on_toggle)
                on_edit=Some(on_edit)
            />

            <Show when=move || show_modal.get()>
                {move || view! {
                    <UbicacionDetails
                        ubicacion=editing.get()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }}
            </Show>
        </div>
    }
}

async fn fetch_ubicaciones() -> Result<Vec<Ubicacion>, String> {
    let url = format!("{}/api/ubicaciones?_ts={}", api_base(), cache_buster());
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Ubicacion>>()
        .await
        .map_err(|e| format!("respuesta no válida: {e}"))
}

async fn cambiar_estado(ubicacion: &Ubicacion) -> Result<(), String> {
    let mut payload = ubicacion.clone();
    payload.estado = !payload.estado;

    let url = format!("{}/api/ubicaciones/{}", api_base(), payload.id);
    let response = Request::put(&url)
        .json(&payload)
        .map_err(|e| format!("petición no válida: {e}"))?
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
