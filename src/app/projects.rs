use leptos::prelude::*;

use super::gallery::GalleryModal;
use super::reveal::Reveal;
use crate::content::{Project, PROJECTS};
use crate::gallery::GalleryState;
use crate::reveal::RevealOptions;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="proyectos" class="projects section">
            <div class="container">
                <Reveal class="section-title">
                    <h2>"Mis " <span class="gradient-text">"Proyectos"</span></h2>
                    <p>"Proyectos destacados en los que he trabajado"</p>
                </Reveal>

                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! { <ProjectCard project=project delay_ms={i as u32 * 150} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let gallery = RwSignal::new(GalleryState::new(project.images.len()));

    view! {
        <Reveal
            class="project-card glass-card"
            options=RevealOptions::card()
            delay_ms=delay_ms
        >
            <div style={format!("--project-color: {}", project.color)}>
                <div class="project-header">
                    <div class="project-indicator" />
                    <div class="project-period">
                        <span>{project.period}</span>
                    </div>
                </div>

                <div class="project-content">
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>

                    <div class="project-technologies">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                            .collect_view()}
                    </div>

                    <button
                        type="button"
                        class="features-toggle"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| set_expanded.update(|e| *e = !*e)
                    >
                        <span>"Ver funcionalidades"</span>
                        <span class=move || {
                            if expanded.get() { "chevron open" } else { "chevron" }
                        }>"›"</span>
                    </button>

                    <div class=move || {
                        if expanded.get() { "project-features expanded" } else { "project-features" }
                    }>
                        <ul>
                            {project
                                .features
                                .iter()
                                .map(|feature| view! { <li>{*feature}</li> })
                                .collect_view()}
                        </ul>
                        {project
                            .impact
                            .map(|impact| {
                                view! {
                                    <p class="project-impact">
                                        <strong>"Impacto:"</strong>
                                        " "
                                        {impact}
                                    </p>
                                }
                            })}
                    </div>
                </div>

                <div class="project-actions">
                    {(!project.images.is_empty())
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-secondary project-btn"
                                    on:click=move |_| gallery.update(|g| g.open())
                                >
                                    "Ver Galería"
                                </button>
                            }
                        })}
                    {project
                        .demo_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-primary project-btn"
                                >
                                    "Ver Demo"
                                </a>
                            }
                        })}
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-secondary project-btn"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </Reveal>

        <GalleryModal
            gallery=gallery
            images={project.image_urls().collect::<Vec<_>>()}
            title=project.title
        />
    }
}
