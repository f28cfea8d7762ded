use leptos::prelude::*;
use videogen_types::content::{FaqEntry, FAQ_ENTRIES};

/// Single-open, collapsible accordion over the fixed FAQ entries.
#[component]
pub fn FaqAccordion() -> impl IntoView {
    let (open, set_open) = signal(Option::<&'static str>::None);

    view! {
        <div class="accordion">
            {FAQ_ENTRIES
                .iter()
                .map(|entry| view! { <FaqItem entry=*entry open=open set_open=set_open/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FaqItem(
    entry: FaqEntry,
    open: ReadSignal<Option<&'static str>>,
    set_open: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let id = entry.id;
    let is_open = move || open.get() == Some(id);
    let toggle = move |_| {
        set_open.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        })
    };

    view! {
        <div class="accordion-item" class:open=is_open>
            <h3 class="accordion-header">
                <button
                    class="accordion-trigger"
                    aria-expanded=move || is_open().to_string()
                    aria-controls=format!("{id}-content")
                    on:click=toggle
                >
                    {entry.question}
                    <span class="accordion-chevron" aria-hidden="true">"⌄"</span>
                </button>
            </h3>
            <Show when=is_open>
                <div id=format!("{id}-content") class="accordion-content" role="region">
                    {entry.answer}
                </div>
            </Show>
        </div>
    }
}
