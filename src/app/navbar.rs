use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::app::ThemeContext;
use crate::content::{NAVIGATION, PERSONAL_INFO};
use crate::theme::Theme;

const SCROLLED_OFFSET: f64 = 50.0;
const MENU_OPEN_CLASS: &str = "menu-open";

/// Adds or removes `class` on `<body>`.
fn toggle_body_class(class: &str, on: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(e) = result {
        log::warn!("couldn't update body class {class}: {e:?}");
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    // locks page scroll behind the mobile menu
    Effect::new(move |_| toggle_body_class(MENU_OPEN_CLASS, menu_open.get()));

    let links = move |class: &'static str| {
        NAVIGATION
            .iter()
            .map(|item| {
                view! {
                    <li>
                        <a href=item.href() class=class on:click=move |_| set_menu_open.set(false)>
                            {item.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if scroll_y.get() > SCROLLED_OFFSET { "navbar scrolled" } else { "navbar" }
        }>
            <nav class="navbar-container container">
                <a
                    href="#inicio"
                    class="navbar-logo"
                    aria-label="Ir al inicio"
                    on:click=move |_| set_menu_open.set(false)
                >
                    <span class="logo-text">{PERSONAL_INFO.initials}</span>
                </a>

                <ul class="navbar-links hide-mobile">{links("nav-link")}</ul>

                <div class="navbar-actions">
                    <button
                        type="button"
                        class="theme-toggle"
                        aria-label=move || match theme.get() {
                            Theme::Dark => "Cambiar a modo claro",
                            Theme::Light => "Cambiar a modo oscuro",
                        }
                        on:click=move |_| theme.toggle()
                    >
                        {move || match theme.get() {
                            Theme::Dark => "☀",
                            Theme::Light => "☾",
                        }}
                    </button>
                    <button
                        type="button"
                        class="menu-toggle hide-desktop"
                        aria-label=move || if menu_open.get() { "Cerrar menú" } else { "Abrir menú" }
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <ul class="mobile-menu-links">{links("mobile-nav-link")}</ul>
                </div>
            </Show>
        </header>
    }
}
