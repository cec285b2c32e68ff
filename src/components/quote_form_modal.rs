//! Quote Form Modal
//!
//! Renders a `QuoteForm` controller as a Bulma modal card. Field edits go to
//! the controller's draft; submit hands the finished quote to `on_submit`.

use leptos::prelude::*;

use crate::components::textarea_value;
use crate::domain::{Quote, QuoteForm};

#[component]
pub fn QuoteFormModal(form: RwSignal<QuoteForm>, on_submit: Callback<Quote>) -> impl IntoView {
    let submit = move || {
        let mut sink = on_submit;
        form.update(|f| {
            f.submit(&mut sink);
        });
    };
    let cancel = move || form.update(QuoteForm::cancel);

    let draft_text = move || form.with(|f| f.draft().map(|d| d.text.clone()).unwrap_or_default());
    let draft_author = move || form.with(|f| f.draft().map(|d| d.author.clone()).unwrap_or_default());

    view! {
        <div class=move || if form.with(QuoteForm::is_open) { "modal is-active" } else { "modal" }>
            // Clicking outside the card cancels
            <div class="modal-background" on:click=move |_| cancel()></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p class="modal-card-title">{move || form.with(QuoteForm::title)}</p>
                </header>
                <section class="modal-card-body">
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                        <div class="field">
                            <label class="label" for="text">"Text"</label>
                            <div class="control">
                                <textarea
                                    id="text"
                                    class="textarea"
                                    placeholder="What is the quote (without quotations)?"
                                    prop:value=draft_text
                                    on:input=move |ev| {
                                        if let Some(value) = textarea_value(&ev) {
                                            form.update(|f| f.update_text(value));
                                        }
                                    }
                                ></textarea>
                            </div>
                        </div>
                        <div class="field">
                            <label class="label" for="author">"Author"</label>
                            <div class="control">
                                <input
                                    id="author"
                                    class="input"
                                    placeholder="Who said it?"
                                    prop:value=draft_author
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.update_author(value));
                                    }
                                />
                            </div>
                        </div>
                    </form>
                </section>
                <footer class="modal-card-foot">
                    <button class="button is-link" on:click=move |_| submit()>"Submit"</button>
                    <button class="button" on:click=move |_| cancel()>"Cancel"</button>
                </footer>
            </div>
        </div>
    }
}
