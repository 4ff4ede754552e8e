//! Access-denied page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Access-denied page component.
#[function_component(DeniedPage)]
pub fn denied_page() -> Html {
    html! {
        <div class="card">
            <h1>{"Access Denied"}</h1>
            <p class="text-secondary" style="margin-bottom: 1rem;">
                {"You need to be signed in as an instructor to view that page."}
            </p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
