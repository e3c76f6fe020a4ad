use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::gallery::{GalleryAction, GalleryState};

/// Screenshot overlay for one project. Keyboard navigation is bound to the
/// window for as long as the owning card is mounted.
#[component]
pub fn GalleryModal(
    gallery: RwSignal<GalleryState>,
    images: Vec<String>,
    title: &'static str,
) -> impl IntoView {
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if !gallery.with_untracked(|g| g.is_open()) {
            return;
        }
        let key = ev.key();
        let action = gallery
            .try_update(|g| g.handle_key(&key))
            .unwrap_or(GalleryAction::Ignored);
        if action != GalleryAction::Ignored {
            ev.prevent_default();
        }
    });

    let images = StoredValue::new(images);
    let close = move |_| gallery.update(|g| g.close());

    view! {
        <Show when=move || gallery.with(|g| g.is_open())>
            <div class="gallery-backdrop" on:click=close>
                <div class="gallery-content" on:click=|ev| ev.stop_propagation()>
                    <div class="gallery-header">
                        <h3>{title}</h3>
                        <button type="button" class="close-btn" aria-label="Cerrar" on:click=close>
                            "✕"
                        </button>
                    </div>

                    <div class="gallery-image-container">
                        {move || {
                            let (index, len) = gallery.with(|g| (g.index(), g.len()));
                            if len == 0 {
                                return Either::Left(
                                    view! {
                                        <div class="no-images">
                                            <p>"No hay imágenes disponibles para este proyecto"</p>
                                        </div>
                                    },
                                );
                            }
                            let src = images.with_value(|imgs| imgs[index].clone());
                            Either::Right(
                                view! {
                                    <img
                                        class="gallery-image"
                                        src=src
                                        alt={format!("{title} - demo {}", index + 1)}
                                    />
                                    <Show when=move || { len > 1 }>
                                        <button
                                            type="button"
                                            class="nav-btn prev"
                                            aria-label="Anterior"
                                            on:click=move |_| gallery.update(|g| g.prev())
                                        >
                                            "‹"
                                        </button>
                                        <button
                                            type="button"
                                            class="nav-btn next"
                                            aria-label="Siguiente"
                                            on:click=move |_| gallery.update(|g| g.next())
                                        >
                                            "›"
                                        </button>
                                        <div class="gallery-dots">
                                            {(0..len)
                                                .map(|i| {
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class=if i == index { "dot active" } else { "dot" }
                                                            on:click=move |_| gallery.update(|g| g.select(i))
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                },
                            )
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
