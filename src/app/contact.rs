use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use super::reveal::Reveal;
use crate::clipboard::{CopyFeedback, NavigatorClipboard};
use crate::config::{EmailJsCredentials, SiteConfig};
use crate::contact::{ContactController, ContactSnapshot, Field, Subject, SubmissionStatus};
use crate::content::{mask_email, mask_phone, EMAIL_VISIBLE_CHARS, PERSONAL_INFO};
use crate::timer::WindowScheduler;
use crate::transport::EmailJsTransport;

type Controller = ContactController<EmailJsTransport, WindowScheduler>;

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_context::<SiteConfig>();

    view! {
        <section id="contacto" class="contact section">
            <div class="container">
                <Reveal class="section-title">
                    <h2><span class="gradient-text">"Contacto"</span></h2>
                    <p>"¿Quieres saber más o ponerte en contacto conmigo? ¡Hablemos!"</p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal class="contact-info" delay_ms=100>
                        <div class="qr-section glass-card">
                            <div class="qr-code">
                                <img src="/qr-code.png" alt="QR Code" />
                            </div>
                            <p class="qr-description">
                                "Escanea el código QR para ver mis datos de contacto"
                            </p>
                        </div>
                        <ContactDetails />
                    </Reveal>

                    <Reveal class="contact-form-wrapper glass-card" delay_ms=200>
                        <h3>"Envíame un mensaje"</h3>
                        {match site {
                            Some(site) => Either::Left(view! { <ContactForm credentials=site.emailjs /> }),
                            None => Either::Right(view! {
                                <p class="form-status error">
                                    "El formulario no está disponible en este momento."
                                </p>
                            }),
                        }}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="contact-details glass-card">
            <h3>"Información de contacto"</h3>

            <div class="contact-item">
                <div class="contact-content">
                    <span class="contact-label">"Email"</span>
                    <span class="contact-value">
                        {mask_email(PERSONAL_INFO.email, EMAIL_VISIBLE_CHARS)}
                    </span>
                </div>
                <CopyButton value=PERSONAL_INFO.email label="Copiar email" />
            </div>

            <div class="contact-item">
                <div class="contact-content">
                    <span class="contact-label">"Email alternativo"</span>
                    <span class="contact-value">
                        {mask_email(PERSONAL_INFO.secondary_email, EMAIL_VISIBLE_CHARS)}
                    </span>
                </div>
                <CopyButton value=PERSONAL_INFO.secondary_email label="Copiar email alternativo" />
            </div>

            <div class="contact-item">
                <div class="contact-content">
                    <span class="contact-label">"Teléfono"</span>
                    <span class="contact-value">{mask_phone(PERSONAL_INFO.phone)}</span>
                </div>
                <CopyButton value=PERSONAL_INFO.phone label="Copiar teléfono" />
            </div>

            <div class="contact-item">
                <div class="contact-content">
                    <span class="contact-label">"Ubicación"</span>
                    <span class="contact-value">{PERSONAL_INFO.location}</span>
                </div>
            </div>

            <div class="social-links">
                <a
                    href=PERSONAL_INFO.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    aria-label="GitHub"
                >
                    "GitHub"
                </a>
                <a
                    href=PERSONAL_INFO.linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    aria-label="LinkedIn"
                >
                    "LinkedIn"
                </a>
            </div>
        </div>
    }
}

/// Copies the unmasked `value`; shows a check mark for two seconds after.
#[component]
fn CopyButton(value: &'static str, label: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let feedback = CopyFeedback::new(NavigatorClipboard, WindowScheduler)
        .on_change(move |c| set_copied.set(c));
    let teardown = feedback.clone();
    on_cleanup(move || teardown.dispose());
    let feedback = StoredValue::new(feedback);

    view! {
        <button
            type="button"
            class="copy-btn"
            aria-label=label
            on:click=move |_| {
                let feedback = feedback.get_value();
                spawn_local(async move {
                    feedback.copy(value).await;
                });
            }
        >
            {move || if copied.get() { "✓" } else { "⧉" }}
        </button>
    }
}

#[component]
fn ContactForm(credentials: EmailJsCredentials) -> impl IntoView {
    let (snapshot, set_snapshot) = signal(ContactSnapshot {
        form: Default::default(),
        status: SubmissionStatus::Idle,
    });
    let controller: Controller =
        ContactController::new(credentials, EmailJsTransport::default(), WindowScheduler)
            .on_change(move |s| set_snapshot.set(s.clone()));
    let teardown = controller.clone();
    on_cleanup(move || teardown.dispose());
    let controller = StoredValue::new(controller);

    let value_of = move |field: Field| move || snapshot.with(|s| s.form.get(field).to_string());
    // every control reports under its `name` attribute
    let on_input = move |ev: Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        match name.parse::<Field>() {
            Ok(field) => {
                controller.with_value(|c| c.update_field(field, event_target_value(&ev)))
            }
            Err(e) => log::warn!("{e}"),
        }
    };
    let status = move || snapshot.with(|s| s.status);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match controller.with_value(|c| c.submit()) {
            Ok(pending) => spawn_local(async move {
                let status = pending.await;
                log::debug!("contact submission settled as {status:?}");
            }),
            Err(e) => log::debug!("contact submit blocked: {e}"),
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Nombre"</label>
                <input
                    type="text"
                    id="name"
                    name=Field::Name.as_str()
                    required
                    placeholder="Tu nombre"
                    prop:value=value_of(Field::Name)
                    on:input=on_input
                />
            </div>

            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name=Field::Email.as_str()
                    required
                    placeholder="tu@email.com"
                    prop:value=value_of(Field::Email)
                    on:input=on_input
                />
            </div>

            <div class="form-group">
                <label for="subject">"Asunto"</label>
                <select
                    id="subject"
                    name=Field::Subject.as_str()
                    required
                    prop:value=value_of(Field::Subject)
                    on:change=on_input
                >
                    <option value="" disabled>"Selecciona un motivo"</option>
                    {Subject::ALL
                        .iter()
                        .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="message">"Mensaje"</label>
                <textarea
                    id="message"
                    name=Field::Message.as_str()
                    required
                    rows="5"
                    placeholder="Cuéntame sobre tu proyecto..."
                    prop:value=value_of(Field::Message)
                    on:input=on_input
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled=move || status().is_pending()
            >
                {move || {
                    if status().is_pending() {
                        Either::Left(view! { <span class="loading-spinner" /> })
                    } else {
                        Either::Right("Enviar mensaje")
                    }
                }}
            </button>

            {move || match status() {
                SubmissionStatus::Success => Some(view! {
                    <p class="form-status success">
                        "¡Mensaje enviado correctamente! Te responderé pronto."
                    </p>
                }.into_any()),
                SubmissionStatus::Error => Some(view! {
                    <p class="form-status error">
                        "Hubo un error al enviar el mensaje. Inténtalo de nuevo."
                    </p>
                }.into_any()),
                SubmissionStatus::Idle | SubmissionStatus::Pending => None,
            }}
        </form>
    }
}
