use contracts::domain::Ubicacion;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;

#[component]
pub fn UbicacionDetails(
    /// `None` creates a new location.
    ubicacion: Option<Ubicacion>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let es_nueva = ubicacion.is_none();
    let titulo = if es_nueva {
        "Nueva ubicación"
    } else {
        "Editar ubicación"
    };

    let (nombre, set_nombre) = signal(
        ubicacion
            .as_ref()
            .map(|u| u.nombre.clone())
            .unwrap_or_default(),
    );
    let (descripcion, set_descripcion) = signal(
        ubicacion
            .as_ref()
            .and_then(|u| u.descripcion.clone())
            .unwrap_or_default(),
    );
    let (es_aula, set_es_aula) = signal(ubicacion.as_ref().map(|u| u.es_aula).unwrap_or(false));
    let (error, set_error) = signal::<Option<String>>(None);
    let (guardando, set_guardando) = signal(false);

    let original = StoredValue::new(ubicacion);

    let handle_save = move |_| {
        let nombre_val = nombre.get().trim().to_string();
        if nombre_val.is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        let descripcion_val = {
            let d = descripcion.get().trim().to_string();
            if d.is_empty() {
                None
            } else {
                Some(d)
            }
        };

        let payload = match original.get_value() {
            Some(mut u) => {
                u.nombre = nombre_val;
                u.descripcion = descripcion_val;
                u.es_aula = es_aula.get();
                u
            }
            None => Ubicacion::nueva(nombre_val, descripcion_val, es_aula.get()),
        };

        set_guardando.set(true);
        spawn_local(async move {
            let resultado = guardar_ubicacion(&payload, es_nueva).await;
            set_guardando.set(false);
            match resultado {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("error guardando ubicación: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=|e| e.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{titulo}</h2>
                    <button class="button button--icon" title="Cerrar" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="modal__body">
                    <label class="form-field">
                        <span class="form-field__label">"Nombre"</span>
                        <input
                            type="text"
                            class="form-field__input"
                            prop:value=move || nombre.get()
                            on:input=move |ev| set_nombre.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Descripción"</span>
                        <textarea
                            class="form-field__input"
                            prop:value=move || descripcion.get()
                            on:input=move |ev| set_descripcion.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="form-field form-field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || es_aula.get()
                            on:change=move |ev| set_es_aula.set(event_target_checked(&ev))
                        />
                        <span class="form-field__label">"Es un aula"</span>
                    </label>
                </div>

                <div class="modal__footer">
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || guardando.get()
                        on:click=handle_save
                    >
                        {move || if guardando.get() { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

async fn guardar_ubicacion(ubicacion: &Ubicacion, es_nueva: bool) -> Result<(), String> {
    let builder = if es_nueva {
        Request::post(&format!("{}/api/ubicaciones", api_base()))
    } else {
        Request::put(&format!("{}/api/ubicaciones/{}", api_base(), ubicacion.id))
    };

    let response = builder
        .json(ubicacion)
        .map_err(|e| format!("petición no válida: {e}"))?
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
