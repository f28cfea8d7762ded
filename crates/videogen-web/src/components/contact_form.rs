use std::rc::Rc;

use leptos::prelude::*;
use videogen_core::{ContactForm, ContactSubmission, SharedSink, TracingSink};
use videogen_types::content::{ContactField, FieldKind, EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD};

use crate::components::toaster::Toaster;

#[component]
fn FieldInput(field: ContactField, value: RwSignal<String>) -> impl IntoView {
    let control = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=field.id
                class="textarea"
                placeholder=field.placeholder
                required=field.required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <input
                id=field.id
                type=field.kind.input_type()
                class="input"
                placeholder=field.placeholder
                required=field.required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label for=field.id>{field.label}</label>
            {control}
        </div>
    }
}

/// Contact form. Submitting shows a confirmation and sends nothing.
#[component]
pub fn ContactCard() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let sink: SharedSink = Rc::new(TracingSink::new(toaster));
    let contact = StoredValue::new_local(ContactForm::new(sink));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = contact.with_value(|c| c.submit(submission)) {
            tracing::warn!(error = %e, "contact submission bypassed native validation");
        }
    };

    view! {
        <div class="card">
            <div class="card-content">
                <form class="form" on:submit=on_submit>
                    <div class="form-row">
                        <FieldInput field=NAME_FIELD value=name/>
                        <FieldInput field=EMAIL_FIELD value=email/>
                    </div>
                    <FieldInput field=MESSAGE_FIELD value=message/>
                    <button type="submit" class="btn btn-gradient btn-block">
                        <span class="btn-content">
                            <span class="icon" aria-hidden="true">"✉"</span>
                            "Send message"
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
