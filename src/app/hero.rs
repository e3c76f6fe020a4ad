use leptos::prelude::*;

use crate::content::PERSONAL_INFO;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="inicio" class="hero">
            <div class="hero-bg-decoration" />
            <div class="container hero-container">
                <div class="hero-content">
                    <div class="hero-photo-wrapper">
                        <div class="hero-photo-glow" />
                        <div class="hero-photo">
                            <img src=PERSONAL_INFO.photo alt=PERSONAL_INFO.short_name />
                        </div>
                    </div>

                    <p class="hero-greeting">"¡Hola! 👋 Soy"</p>
                    <h1 class="hero-title">
                        <span class="gradient-text">{PERSONAL_INFO.name}</span>
                    </h1>
                    <h2 class="hero-subtitle">{PERSONAL_INFO.role}</h2>
                    <p class="hero-description">{PERSONAL_INFO.short_bio}</p>

                    <div class="hero-cta">
                        <a href="#proyectos" class="btn btn-primary">
                            "Ver mis proyectos"
                        </a>
                        <a href=PERSONAL_INFO.resume class="btn btn-secondary" download="">
                            "Descargar CV"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
