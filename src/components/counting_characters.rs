//! Counting Characters Exercise

use leptos::prelude::*;

use crate::components::textarea_value;
use crate::domain::character_count_label;

#[component]
pub fn CountingCharacters() -> impl IntoView {
    let (text, set_text) = signal(String::new());

    view! {
        <h1 class="title">"Counting Characters"</h1>
        <textarea
            class="textarea"
            placeholder="Enter some text"
            prop:value=move || text.get()
            on:input=move |ev| {
                if let Some(value) = textarea_value(&ev) {
                    set_text.set(value);
                }
            }
        ></textarea>
        <p class="help">{move || text.with(|t| character_count_label(t))}</p>
    }
}
