//! UI Components
//!
//! Leptos view components. They read the app store and context and dispatch
//! through the `store_*` helpers.

mod icon;
mod navbar;
mod hero;
mod exercise_menu;
mod summary;
mod saying_hello;
mod counting_characters;
mod quote_card;
mod quote_form_modal;
mod printing_quotes;

pub use navbar::Navbar;
pub use hero::Hero;
pub use exercise_menu::ExerciseMenu;
pub use summary::ExercisesSummary;
pub use saying_hello::SayingHello;
pub use counting_characters::CountingCharacters;
pub use printing_quotes::PrintingQuotes;

use wasm_bindgen::JsCast;

/// Current value of the `<textarea>` an input event came from
pub(crate) fn textarea_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        .map(|textarea| textarea.value())
}
