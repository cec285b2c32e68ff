//! Hero Banner

use leptos::prelude::*;

use crate::config::{SITE_SUBTITLE, SITE_TITLE};
use crate::context::AppContext;
use crate::domain::Exercise;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="hero is-dark mb-5">
            <div class="hero-body">
                <div class="container">
                    <h1 class="title">{SITE_TITLE}</h1>
                    <h2 class="subtitle">{SITE_SUBTITLE}</h2>
                </div>
            </div>
            <div class="hero-foot">
                <nav class="tabs is-boxed is-centered">
                    <ul>
                        // Every page lives under the exercises section
                        <li class="is-active">
                            <a
                                href=Exercise::Summary.href()
                                on:click=move |_| ctx.navigate(Exercise::Summary)
                            >
                                "Exercises for Programmers"
                            </a>
                        </li>
                    </ul>
                </nav>
            </div>
        </section>
    }
}
