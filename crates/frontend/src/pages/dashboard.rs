//! Instructor dashboard page component.

use uuid::Uuid;
use web_types::NewClass;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{ClassCard, CreateClassModal, Loading};
use crate::data;
use crate::session::Session;
use crate::store::{ClassListStore, CreateClassForm};

/// Instructor dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_context::<Session>().expect("session context missing");
    let store = use_state(ClassListStore::new);
    let form = use_state(|| None::<CreateClassForm>);

    let user_id = session.user.as_ref().map(|u| u.id);

    // Fetch this instructor's classes once the identity is known
    {
        let store = store.clone();

        use_effect_with(user_id, move |uid: &Option<Uuid>| {
            if let Some(uid) = *uid {
                wasm_bindgen_futures::spawn_local(async move {
                    match data::fetch_classes(uid).await {
                        Ok(rows) => store.set(store.replace_all(rows)),
                        Err(e) => {
                            gloo_timers::callback::Timeout::new(0, move || {
                                web_sys::console::error_1(
                                    &format!("Failed to fetch classes: {}", e).into(),
                                );
                            })
                            .forget();
                            store.set(store.settle());
                        }
                    }
                });
            }
        });
    }

    if !session.ready {
        return html! { <Loading /> };
    }

    if session.user.is_none() {
        return html! { <Redirect<Route> to={Route::Denied} /> };
    }

    let on_open_create = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            // Opening while already open keeps the same form state
            if form.is_none() {
                form.set(Some(CreateClassForm::default()));
            }
        })
    };

    let on_cancel_create = {
        let form = form.clone();
        Callback::from(move |_: ()| form.set(None))
    };

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut fields = (*form).clone().unwrap_or_default();
            fields.name = input.value();
            form.set(Some(fields));
        })
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut fields = (*form).clone().unwrap_or_default();
            fields.description = area.value();
            form.set(Some(fields));
        })
    };

    let on_submit_create = {
        let store = store.clone();
        let form = form.clone();

        Callback::from(move |_: ()| {
            let Some(uid) = user_id else {
                return;
            };
            let fields = (*form).clone().unwrap_or_default();

            // An empty trimmed name is a silent no-op: no request, no
            // state change
            let Some(new_class) = NewClass::from_input(&fields.name, &fields.description, uid)
            else {
                return;
            };

            let store = store.clone();
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match data::insert_class(&new_class).await {
                    Ok(row) => {
                        store.set(store.prepend(row));
                        form.set(None);
                    }
                    Err(e) => {
                        // Leave the form open with the fields intact so
                        // the instructor can retry
                        gloo_timers::callback::Timeout::new(0, move || {
                            web_sys::console::error_1(
                                &format!("Failed to create class: {}", e).into(),
                            );
                        })
                        .forget();
                    }
                }
            });
        })
    };

    html! {
        <div>
            <div class="page-header">
                <h1>{"My Classes"}</h1>
                <button class="btn btn-primary" onclick={on_open_create}>
                    {"New Class"}
                </button>
            </div>

            if store.loading {
                <Loading />
            } else if store.is_empty() {
                <div class="card">
                    <p>{"No classes yet. Create your first class to get started."}</p>
                </div>
            } else {
                <div class="class-list">
                    { for store.classes.iter().map(|class| {
                        html! { <ClassCard class={class.clone()} /> }
                    })}
                </div>
            }

            if let Some(fields) = (*form).clone() {
                <CreateClassModal
                    name={fields.name}
                    description={fields.description}
                    on_name_input={on_name_input}
                    on_description_input={on_description_input}
                    on_submit={on_submit_create}
                    on_cancel={on_cancel_create}
                />
            }
        </div>
    }
}
