use leptos::prelude::*;

use crate::domain::material::ui::list::MaterialList;
use crate::domain::movimiento::ui::list::MovimientoList;
use crate::domain::ubicacion::ui::list::UbicacionList;
use crate::domain::usuario::ui::list::UsuarioList;
use crate::shared::icons::icon;

/// Sections of the application. Navigation is state-driven: the sidebar
/// swaps the active section, there are no URL routes.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Seccion {
    Materiales,
    Movimientos,
    Ubicaciones,
    Usuarios,
}

impl Seccion {
    fn titulo(self) -> &'static str {
        match self {
            Seccion::Materiales => "Materiales",
            Seccion::Movimientos => "Movimientos",
            Seccion::Ubicaciones => "Ubicaciones",
            Seccion::Usuarios => "Usuarios",
        }
    }

    fn icono(self) -> &'static str {
        match self {
            Seccion::Materiales => "materiales",
            Seccion::Movimientos => "movimientos",
            Seccion::Ubicaciones => "ubicaciones",
            Seccion::Usuarios => "usuarios",
        }
    }

    fn all() -> [Seccion; 4] {
        [
            Seccion::Materiales,
            Seccion::Movimientos,
            Seccion::Ubicaciones,
            Seccion::Usuarios,
        ]
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (seccion, set_seccion) = signal(Seccion::Materiales);

    view! {
        <div class="shell">
            <aside class="sidebar">
                <div class="sidebar__brand">"Inventario"</div>
                <nav class="sidebar__nav">
                    {Seccion::all().into_iter().map(|s| {
                        view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || seccion.get() == s
                                on:click=move |_| set_seccion.set(s)
                            >
                                {icon(s.icono())}
                                <span>{s.titulo()}</span>
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </aside>
            <main class="shell__content">
                {move || match seccion.get() {
                    Seccion::Materiales => view! { <MaterialList /> }.into_any(),
                    Seccion::Movimientos => view! { <MovimientoList /> }.into_any(),
                    Seccion::Ubicaciones => view! { <UbicacionList /> }.into_any(),
                    Seccion::Usuarios => view! { <UsuarioList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
