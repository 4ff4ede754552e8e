//! Top navigation bar component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::session::Session;

/// Top navigation bar with brand, links, and session actions.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_context::<Session>().expect("session context missing");

    let on_sign_out = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| sign_out.emit(()))
    };

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes="nav-brand">
                {"Classboard"}
            </Link<Route>>
            <div class="nav-links">
                <Link<Route> to={Route::Dashboard} classes="nav-link">
                    {"Dashboard"}
                </Link<Route>>
                if session.user.is_some() {
                    <button class="btn btn-secondary" onclick={on_sign_out}>
                        {"Sign Out"}
                    </button>
                }
            </div>
        </nav>
    }
}
