//! Saying Hello Exercise
//!
//! Reads a name and shows a greeting in a modal.

use leptos::prelude::*;

use crate::domain::greeting;

#[component]
pub fn SayingHello() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (shown_greeting, set_shown_greeting) = signal::<Option<String>>(None);

    let greet = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_shown_greeting.set(Some(greeting(&name.get())));
    };

    view! {
        <h1 class="title">"Saying Hello"</h1>
        <form on:submit=greet>
            <div class="field">
                <label for="name" class="label">"Name"</label>
                <div class="control">
                    <input
                        id="name"
                        type="text"
                        class="input"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="field">
                <div class="control">
                    <button type="submit" class="button is-link">"Greet Me"</button>
                </div>
            </div>
        </form>
        <GreetingModal
            greeting=shown_greeting
            on_close=Callback::new(move |_: ()| set_shown_greeting.set(None))
        />
    }
}

/// Modal showing the greeting; open while `greeting` is `Some`
#[component]
fn GreetingModal(greeting: ReadSignal<Option<String>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class=move || if greeting.read().is_some() { "modal is-active" } else { "modal" }>
            <div class="modal-background" on:click=move |_| on_close.run(())></div>
            <div class="modal-content">
                <div class="box has-text-centered">
                    <h1 class="title">{move || greeting.get().unwrap_or_default()}</h1>
                </div>
            </div>
            <button class="modal-close is-large" aria-label="close" on:click=move |_| on_close.run(())></button>
        </div>
    }
}
