//! Loading spinner component.

use yew::prelude::*;

/// Centered spinner shown while a fetch is in flight.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}
