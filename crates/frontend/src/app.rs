//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::pages::{DashboardPage, DeniedPage, HomePage};
use crate::session::SessionProvider;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/denied")]
    Denied,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Denied => html! { <DeniedPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div class="app-container">
                    <Navbar />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}
