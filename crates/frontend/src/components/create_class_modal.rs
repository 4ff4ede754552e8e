//! Create-class modal component.

use yew::prelude::*;

/// Properties for CreateClassModal component.
#[derive(Properties, PartialEq)]
pub struct CreateClassModalProps {
    pub name: String,
    pub description: String,
    pub on_name_input: Callback<InputEvent>,
    pub on_description_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal dialog for creating a class; fully controlled by the dashboard.
#[function_component(CreateClassModal)]
pub fn create_class_modal(props: &CreateClassModalProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal card">
                <div class="card-header">
                    <h2 class="card-title">{"Create Class"}</h2>
                </div>
                <form onsubmit={on_submit}>
                    <label class="form-label" for="class-name">{"Name"}</label>
                    <input
                        id="class-name"
                        type="text"
                        class="form-input"
                        placeholder="e.g. Algebra I"
                        value={props.name.clone()}
                        oninput={props.on_name_input.clone()}
                    />
                    <label class="form-label" for="class-description">{"Description"}</label>
                    <textarea
                        id="class-description"
                        class="form-input"
                        placeholder="Optional description..."
                        value={props.description.clone()}
                        oninput={props.on_description_input.clone()}
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Create"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
