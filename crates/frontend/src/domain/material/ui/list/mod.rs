use contracts::domain::Material;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::material::columnas;
use crate::domain::material::ui::details::MaterialDetails;
use crate::shared::api_utils::{api_base, cache_buster};
use crate::shared::components::data_grid::EntityTable;
use crate::shared::icons::icon;

#[component]
pub fn MaterialList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Material>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<Material>>(None);

    let fetch = move || {
        spawn_local(async move {
            match fetch_materiales().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("error cargando materiales: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    let on_toggle = Callback::new(move |material: Material| {
        spawn_local(async move {
            if let Err(e) = cambiar_estado(&material).await {
                log::error!("error cambiando el estado del material: {e}");
                set_error.set(Some(e));
            }
            fetch();
        });
    });

    let on_edit = Callback::new(move |material: Material| {
        set_editing.set(Some(material));
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
                    <h1 class="header__title">"Materiales"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "Nuevo material"
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
                    <MaterialDetails
                        material=editing.get()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }}
            </Show>
        </div>
    }
}

async fn fetch_materiales() -> Result<Vec<Material>, String> {
    let url = format!("{}/api/materiales?_ts={}", api_base(), cache_buster());
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Material>>()
        .await
        .map_err(|e| format!("respuesta no válida: {e}"))
}

/// The toggle sends the full record with the estado flipped; the list is
/// refreshed afterwards regardless of the outcome.
async fn cambiar_estado(material: &Material) -> Result<(), String> {
    let mut payload = material.clone();
    payload.estado = !payload.estado;

    let url = format!("{}/api/materiales/{}", api_base(), payload.id);
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
