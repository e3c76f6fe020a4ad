mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use crate::content::seo;
use crate::theme::{
    apply_theme, system_theme_hint, LocalThemeStorage, Subscription, Theme, ThemeStore,
};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Page-wide theme, provided once by [`App`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    store: StoredValue<ThemeStore<LocalThemeStorage>>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.store.with_value(|store| {
            store.toggle();
        });
    }
}

fn provide_theme() -> ThemeContext {
    let store = ThemeStore::init(LocalThemeStorage, system_theme_hint());
    // server and first client render both use the default so hydration matches
    let (theme, set_theme) = signal(Theme::default());
    let subscription: Subscription = store.subscribe(move |t| set_theme.set(t));
    // released with the owner, which unsubscribes
    StoredValue::new(subscription);
    let store = StoredValue::new(store);

    Effect::new(move |_| set_theme.set(store.with_value(|s| s.current())));
    Effect::new(move |_| apply_theme(theme.get()));

    let ctx = ThemeContext { theme, store };
    provide_context(ctx);
    ctx
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    let site = match SiteConfig::global() {
        Ok(site) => {
            provide_context(site.clone());
            Some(site)
        }
        Err(e) => {
            log::error!("{e}");
            None
        }
    };

    view! {
        <Title formatter=|title: String| seo::title(&title) />
        <Meta name="description" content=seo::DESCRIPTION />
        <Meta name="keywords" content={seo::KEYWORDS.join(", ")} />
        <Meta property="og:title" content=seo::DEFAULT_TITLE />
        <Meta property="og:description" content=seo::DESCRIPTION />
        <Meta property="og:image" content=seo::OG_IMAGE />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:creator" content=seo::TWITTER_HANDLE />
        {site
            .map(|site| {
                view! {
                    <Meta property="og:site_name" content=site.app_name.clone() />
                    <Meta property="og:url" content=site.app_url.clone() />
                }
            })}

        <Router>
            <div class="bg-gradient-radial" />
            <Navbar />
            <main id="main-content">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Inicio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
    }
}
