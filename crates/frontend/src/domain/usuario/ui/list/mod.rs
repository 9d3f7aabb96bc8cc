use contracts::domain::Usuario;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::usuario::columnas;
use crate::domain::usuario::ui::details::UsuarioDetails;
use crate::shared::api_utils::{api_base, cache_buster};
use crate::shared::components::data_grid::EntityTable;
use crate::shared::icons::icon;

#[component]
pub fn UsuarioList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Usuario>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<Usuario>>(None);

    let fetch = move || {
        spawn_local(async move {
            match fetch_usuarios().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("error cargando usuarios: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    let on_toggle = Callback::new(move |usuario: Usuario| {
        spawn_local(async move {
            if let Err(e) = cambiar_estado(&usuario).await {
                log::error!("error cambiando el estado del usuario: {e}");
                set_error.set(Some(e));
            }
            fetch();
        });
    });

    let on_edit = Callback::new(move |usuario: Usuario| {
        set_editing.set(Some(usuario));
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
                    <h1 class="header__title">"Usuarios"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "Nuevo usuario"
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
                    <UsuarioDetails
                        usuario=editing.get()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }}
            </Show>
        </div>
    }
}

async fn fetch_usuarios() -> Result<Vec<Usuario>, String> {
    let url = format!("{}/api/usuarios?_ts={}", api_base(), cache_buster());
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Usuario>>()
        .await
        .map_err(|e| format!("respuesta no válida: {e}"))
}

async fn cambiar_estado(usuario: &Usuario) -> Result<(), String> {
    let mut payload = usuario.clone();
    payload.estado = !payload.estado;

    let url = format!("{}/api/usuarios/{}", api_base(), payload.id);
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
