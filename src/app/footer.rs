use leptos::prelude::*;

use crate::content::{NAVIGATION, PERSONAL_INFO};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <a href="#inicio" class="footer-logo">
                            <span>{PERSONAL_INFO.initials}</span>
                        </a>
                        <p class="footer-description">
                            {PERSONAL_INFO.role}
                            " apasionado por crear soluciones digitales impactantes y experiencias de usuario excepcionales."
                        </p>
                    </div>

                    <div class="footer-links">
                        <h4>"Enlaces Rápidos"</h4>
                        <ul>
                            {NAVIGATION
                                .iter()
                                .map(|item| view! { <li><a href=item.href()>{item.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="copyright">{format!("© {BUILD_YEAR} {}", PERSONAL_INFO.name)}</p>
                    <a href="#inicio" class="scroll-top-btn" aria-label="Volver arriba">
                        "↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
