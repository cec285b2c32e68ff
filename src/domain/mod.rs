//! Domain Layer
//!
//! Framework-free state for the portfolio: the quote collection, the quote
//! form controller, navbar menu visibility and the exercise catalog.
//! Nothing in here depends on Leptos, so it is tested natively.

mod entity;
mod quote;
mod collection;
mod quote_form;
mod menu;
mod exercise;
mod text;

pub use entity::Entity;
pub use quote::Quote;
pub use collection::{QuoteCollection, QuoteEntry, QuoteId, QuoteSink};
pub use quote_form::{DraftQuote, QuoteForm};
pub use menu::MenuVisibility;
pub use exercise::{Exercise, EXERCISE_SECTIONS};
pub use text::{character_count_label, greeting};
