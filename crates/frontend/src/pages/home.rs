//! Marketing home page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div>
            <div class="hero">
                <h1>{"Classboard"}</h1>
                <p class="text-secondary" style="margin-bottom: 2rem;">
                    {"Every class you teach, organized in one place."}
                </p>
                <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                    {"Go to Dashboard"}
                </Link<Route>>
            </div>

            <div class="feature-grid">
                <div class="card feature-card">
                    <h3>{"Create classes in seconds"}</h3>
                    <p class="text-secondary">
                        {"Name a class, add an optional description, and it's ready for your students."}
                    </p>
                </div>
                <div class="card feature-card">
                    <h3>{"Always up to date"}</h3>
                    <p class="text-secondary">
                        {"Your dashboard reflects exactly what's stored on the server, newest first."}
                    </p>
                </div>
                <div class="card feature-card">
                    <h3>{"Built for instructors"}</h3>
                    <p class="text-secondary">
                        {"Only you can see and manage the classes you own."}
                    </p>
                </div>
            </div>
        </div>
    }
}
