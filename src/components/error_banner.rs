//! Error Banner Component
//!
//! Shows the last storage failure until dismissed.

use leptos::prelude::*;

use crate::context::TodoContext;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    view! {
        <Show when=move || ctx.error.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span>{move || ctx.error.get().unwrap_or_default()}</span>
                <button class="dismiss-button" on:click=move |_| ctx.dismiss_error()>"×"</button>
            </div>
        </Show>
    }
}
