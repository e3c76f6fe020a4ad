use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{RevealOptions, RevealTrigger};

/// Wraps `children` and adds the `revealed` class once the block scrolls into
/// view. A `once` block disconnects its observer after the first reveal; any
/// other observer is released with the component's owner.
#[component]
pub fn Reveal(
    #[prop(optional)] options: Option<RevealOptions>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let options = options.unwrap_or_else(RevealOptions::section);
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let trigger = StoredValue::new(RevealTrigger::new(options));

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            let changed = trigger
                .try_update_value(|t| t.observe(intersecting))
                .unwrap_or(false);
            if changed {
                set_revealed.set(trigger.with_value(|t| t.is_revealed()));
            }
            if trigger.with_value(|t| t.is_settled()) {
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().root_margin(options.margin.to_string()),
    );

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() { format!("reveal revealed {class}") } else { format!("reveal {class}") }
            }
            style={format!("transition-delay: {delay_ms}ms")}
        >
            {children()}
        </div>
    }
}
