use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{
    ABOUT_PARAGRAPHS, COMPLEMENTARY_EDUCATION, EDUCATION, HIGHLIGHTS, PERSONAL_INFO,
};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre-mi" class="about section">
            <div class="container">
                <Reveal class="section-title">
                    <h2>"Sobre " <span class="gradient-text">"mí"</span></h2>
                    <p>"Conoce un poco más sobre mi trayectoria y lo que me apasiona"</p>
                </Reveal>

                <div class="about-grid">
                    <Reveal class="about-content glass-card" delay_ms=100>
                        <div class="about-text">
                            {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                        <div class="about-location">
                            <span>{PERSONAL_INFO.location}</span>
                        </div>
                    </Reveal>

                    <div class="about-sidebar">
                        <Reveal class="about-highlights glass-card" delay_ms=200>
                            <h3>"Datos Clave"</h3>
                            <div class="highlights-grid">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <div class="highlight-item">
                                                <span class="highlight-value">{h.value}</span>
                                                <span class="highlight-label">{h.label}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>

                        <Reveal class="about-education glass-card" delay_ms=300>
                            <h3>"Formación Académica"</h3>
                            <div class="education-list">
                                {EDUCATION
                                    .iter()
                                    .map(|edu| {
                                        view! {
                                            <div class="education-item">
                                                <div class="education-year">
                                                    {edu.year}
                                                    {edu
                                                        .current
                                                        .then(|| {
                                                            view! { <span class="current-badge">"En curso"</span> }
                                                        })}
                                                </div>
                                                <div class="education-content">
                                                    <h4>{edu.title}</h4>
                                                    <p>{edu.institution}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                </div>

                <Reveal class="complementary-education glass-card" delay_ms=400>
                    <h3>"Formación Complementaria"</h3>
                    <div class="complementary-grid">
                        {COMPLEMENTARY_EDUCATION
                            .iter()
                            .map(|course| {
                                view! {
                                    <div class="complementary-item">
                                        <div class="complementary-header">
                                            <h4>{course.title}</h4>
                                            <span class="complementary-year">{course.year}</span>
                                        </div>
                                        <p class="complementary-institution">{course.institution}</p>
                                        <div class="complementary-hours">
                                            <span>{format!("{} horas", course.hours)}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
