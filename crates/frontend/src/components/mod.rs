//! Reusable UI components.

mod class_card;
mod create_class_modal;
mod loading;
mod navbar;

pub use class_card::ClassCard;
pub use create_class_modal::CreateClassModal;
pub use loading::Loading;
pub use navbar::Navbar;
