use leptos::prelude::*;

use super::reveal::Reveal;
use crate::app::ThemeContext;
use crate::content::{SkillCategory, SKILL_CATEGORIES, SOFT_SKILLS};
use crate::reveal::RevealOptions;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="habilidades" class="skills section">
            <div class="container">
                <Reveal class="section-title">
                    <h2>"Mis " <span class="gradient-text">"Habilidades"</span></h2>
                    <p>"Tecnologías y herramientas con las que trabajo"</p>
                </Reveal>

                <div class="skills-grid">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| view! { <SkillCard category=category delay_ms={i as u32 * 100} /> })
                        .collect_view()}
                </div>

                <Reveal
                    class="soft-skills glass-card"
                    options=RevealOptions::default()
                    delay_ms=300
                >
                    <h3>"Soft Skills"</h3>
                    <div class="soft-skills-list">
                        {SOFT_SKILLS
                            .iter()
                            .map(|s| view! { <span class="soft-skill-tag">{*s}</span> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory, delay_ms: u32) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <Reveal class="skill-category glass-card" options=RevealOptions::card() delay_ms=delay_ms>
            <h3>{category.title}</h3>
            <div class="skill-icons-grid">
                {category
                    .icons
                    .iter()
                    .map(|icon| {
                        let name = icon.display_name();
                        view! {
                            <div class="skill-icon">
                                <img
                                    src=move || icon.icon_url(theme.get().as_str())
                                    alt=name
                                    loading="lazy"
                                />
                                <span class="skill-tooltip">{name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
