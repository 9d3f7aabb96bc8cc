use contracts::domain::Usuario;
use contracts::enums::Rol;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;

#[component]
pub fn UsuarioDetails(
    /// `None` creates a new user.
    usuario: Option<Usuario>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let es_nuevo = usuario.is_none();
    let titulo = if es_nuevo {
        "Nuevo usuario"
    } else {
        "Editar usuario"
    };

    let (nombre, set_nombre) = signal(
        usuario
            .as_ref()
            .map(|u| u.nombre.clone())
            .unwrap_or_default(),
    );
    let (apellidos, set_apellidos) = signal(
        usuario
            .as_ref()
            .map(|u| u.apellidos.clone())
            .unwrap_or_default(),
    );
    let (email, set_email) = signal(
        usuario
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let (rol, set_rol) = signal(
        usuario
            .as_ref()
            .map(|u| u.rol.code().to_string())
            .unwrap_or_else(|| Rol::Profesor.code().to_string()),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (guardando, set_guardando) = signal(false);

    let original = StoredValue::new(usuario);

    let handle_save = move |_| {
        let nombre_val = nombre.get().trim().to_string();
        let apellidos_val = apellidos.get().trim().to_string();
        let email_val = email.get().trim().to_string();
        if nombre_val.is_empty() || apellidos_val.is_empty() {
            set_error.set(Some("Nombre y apellidos son obligatorios".to_string()));
            return;
        }
        if !email_val.contains('@') {
            set_error.set(Some("El email no es válido".to_string()));
            return;
        }
        let rol_val = match rol.get().parse::<Rol>() {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let payload = match original.get_value() {
            Some(mut u) => {
                u.nombre = nombre_val;
                u.apellidos = apellidos_val;
                u.email = email_val;
                u.rol = rol_val;
                u
            }
            None => Usuario::nuevo(nombre_val, apellidos_val, email_val, rol_val),
        };

        set_guardando.set(true);
        spawn_local(async move {
            let resultado = guardar_usuario(&payload, es_nuevo).await;
            set_guardando.set(false);
            match resultado {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("error guardando usuario: {e}");
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
                        <span class="form-field__label">"Apellidos"</span>
                        <input
                            type="text"
                            class="form-field__input"
                            prop:value=move || apellidos.get()
                            on:input=move |ev| set_apellidos.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Email"</span>
                        <input
                            type="email"
                            class="form-field__input"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Rol"</span>
                        <select
                            class="form-field__input"
                            on:change=move |ev| set_rol.set(event_target_value(&ev))
                            prop:value=move || rol.get()
                        >
                            {Rol::all().into_iter().map(|r| {
                                view! {
                                    <option value={r.code()} selected=move || rol.get() == r.code()>
                                        {r.display_name()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
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

async fn guardar_usuario(usuario: &Usuario, es_nuevo: bool) -> Result<(), String> {
    let builder = if es_nuevo {
        Request::post(&format!("{}/api/usuarios", api_base()))
    } else {
        Request::put(&format!("{}/api/usuarios/{}", api_base(), usuario.id))
    };

    let response = builder
        .json(usuario)
        .map_err(|e| format!("petición no válida: {e}"))?
        .send()
        .await
        .map_err(|e| format!("error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
