//! Class list card component.

use web_types::Class;
use yew::prelude::*;

/// Properties for ClassCard component.
#[derive(Properties, PartialEq)]
pub struct ClassCardProps {
    pub class: Class,
}

/// Class list card component.
#[function_component(ClassCard)]
pub fn class_card(props: &ClassCardProps) -> Html {
    let class = &props.class;

    let status_class = if class.is_active {
        "class-status active"
    } else {
        "class-status inactive"
    };

    html! {
        <div class="class-item">
            <div class={status_class}></div>
            <div class="class-info">
                <div class="class-name">{ &class.name }</div>
                <div class="class-description">
                    { class.description.as_deref().unwrap_or("No description") }
                </div>
            </div>
            <div class="class-created">
                { class.created_at.format("%b %e, %Y").to_string() }
            </div>
            <button class="btn btn-secondary">{"Manage Class"}</button>
        </div>
    }
}
