//! Navbar Component
//!
//! Burger button and collapsible menu of social links.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSize, IconStyle};
use crate::config::SOCIAL_LINKS;
use crate::store::{use_app_store, store_close_menu, store_toggle_menu, AppStateStoreFields};

const MENU_ID: &str = "navbar-menu";

/// Top navigation bar
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar is-spaced" role="navigation" aria-label="main navigation">
            <div class="container">
                <div class="navbar-brand">
                    <NavbarBurger menu_id=MENU_ID />
                </div>
                <NavbarMenu menu_id=MENU_ID />
            </div>
        </nav>
    }
}

/// Burger button that toggles the menu on narrow screens
#[component]
fn NavbarBurger(menu_id: &'static str) -> impl IntoView {
    let store = use_app_store();
    let hidden = move || store.navbar_menu().read().is_hidden();

    view! {
        <a
            href="/#"
            role="button"
            class=move || if hidden() { "navbar-burger" } else { "navbar-burger is-active" }
            aria-label="menu"
            aria-expanded=move || if hidden() { "false" } else { "true" }
            data-target=menu_id
            on:click=move |ev| {
                ev.prevent_default();
                store_toggle_menu(&store);
            }
        >
            <span aria-hidden="true"></span>
            <span aria-hidden="true"></span>
            <span aria-hidden="true"></span>
        </a>
    }
}

#[component]
fn NavbarMenu(menu_id: &'static str) -> impl IntoView {
    let store = use_app_store();
    let menu_class = move || {
        if store.navbar_menu().read().is_hidden() {
            "navbar-menu"
        } else {
            "navbar-menu is-active"
        }
    };

    view! {
        <div id=menu_id class=menu_class>
            <div class="navbar-end">
                {SOCIAL_LINKS.iter().map(|(icon, url)| view! {
                    <a
                        class="navbar-item"
                        href=*url
                        target="_blank"
                        rel="noreferrer"
                        on:click=move |_| store_close_menu(&store)
                    >
                        <Icon name=*icon icon_style=IconStyle::Brands size=IconSize::Large />
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
