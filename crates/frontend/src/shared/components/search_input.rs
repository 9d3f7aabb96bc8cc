use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Debounce delay for the free-text filter, in milliseconds.
const DEBOUNCE_MS: u32 = 300;

/// Free-text search box with debounce and a clear button.
///
/// Any non-empty text filters; the callback fires once the user stops
/// typing for [`DEBOUNCE_MS`].
#[component]
pub fn SearchInput(
    /// Current filter value (used to style the active state)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired with the debounced filter text
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounced callback.
    let (input_value, set_input_value) = signal(String::new());

    // Each keystroke bumps the generation; only the latest timer fires.
    let debounce_gen = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let generation = debounce_gen.get_value() + 1;
        debounce_gen.set_value(generation);

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_gen.get_value() == generation {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        debounce_gen.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Limpiar"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
