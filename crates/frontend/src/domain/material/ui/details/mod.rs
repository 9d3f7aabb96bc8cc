use contracts::domain::Material;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;

/// Compact create/edit form, shown as a modal over the list.
#[component]
pub fn MaterialDetails(
    /// `None` creates a new material.
    material: Option<Material>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let es_nuevo = material.is_none();
    let titulo = if es_nuevo {
        "Nuevo material"
    } else {
        "Editar material"
    };

    let (nombre, set_nombre) = signal(
        material
            .as_ref()
            .map(|m| m.nombre.clone())
            .unwrap_or_default(),
    );
    let (descripcion, set_descripcion) = signal(
        material
            .as_ref()
            .and_then(|m| m.descripcion.clone())
            .unwrap_or_default(),
    );
    let (cantidad, set_cantidad) = signal(
        material
            .as_ref()
            .map(|m| m.cantidad.to_string())
            .unwrap_or_else(|| "0".to_string()),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (guardando, set_guardando) = signal(false);

    let original = StoredValue::new(material);

    let handle_save = move |_| {
        let nombre_val = nombre.get().trim().to_string();
        if nombre_val.is_empty() {
            set_error.set(Some("El nombre es obligatorio".to_string()));
            return;
        }
        let cantidad_val = match cantidad.get().trim().parse::<i32>() {
            Ok(v) => v,
            Err(_) => {
                set_error.set(Some("La cantidad debe ser un número entero".to_string()));
                return;
            }
        };
        let descripcion_val = {
            let d = descripcion.get().trim().to_string();
            if d.is_empty() {
                None
            } else {
                Some(d)
            }
        };

        let payload = match original.get_value() {
            Some(mut m) => {
                m.nombre = nombre_val;
                m.descripcion = descripcion_val;
                m.cantidad = cantidad_val;
                m
            }
            None => Material::nuevo(nombre_val, descripcion_val, cantidad_val, None),
        };

        set_guardando.set(true);
        spawn_local(async move {
            let resultado = guardar_material(&payload, es_nuevo).await;
            set_guardando.set(false);
            match resultado {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("error guardando material: {e}");
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
                    <label class="form-field">
                        <span class="form-field__label">"Cantidad"</span>
                        <input
                            type="number"
                            class="form-field__input"
                            prop:value=move || cantidad.get()
                            on:input=move |ev| set_cantidad.set(event_target_value(&ev))
                        />
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

async fn guardar_material(material: &Material, es_nuevo: bool) -> Result<(), String> {
    let builder = if es_nuevo {
        Request::post(&format!("{}/api/materiales", api_base()))
    } else {
        Request::put(&format!("{}/api/materiales/{}", api_base(), material.id))
    };

    let response = builder
        .json(material)
        .map_err(|e| format!("petición no válida: {e}"))?
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
