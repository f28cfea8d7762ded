use leptos::prelude::*;
use videogen_types::GenerationState;

#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use videogen_core::{PromptForm, SharedSink, TracingSink};
#[cfg(feature = "hydrate")]
use videogen_types::GeneratorTimings;

/// "Generating..." row and bar, bound to the driver's progress.
#[component]
pub fn ProgressBar(state: ReadSignal<GenerationState>) -> impl IntoView {
    view! {
        <div class="progress fade-in">
            <div class="progress-row">
                <span class="progress-label">"Generating..."</span>
                <span class="progress-value">{move || format!("{}%", state.get().progress)}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style:width=move || state.get().width_percent()></div>
            </div>
        </div>
    }
}

/// Prompt textarea and generate button.
///
/// The simulated cycle only exists in the browser: the server renders the
/// idle form and hydration attaches the driver.
#[component]
pub fn GeneratorCard() -> impl IntoView {
    let (prompt, set_prompt) = signal(String::new());
    #[allow(unused_variables)]
    let (state, set_state) = signal(GenerationState::IDLE);

    #[cfg(feature = "hydrate")]
    let form = {
        use crate::browser::BrowserScheduler;
        use crate::components::toaster::Toaster;

        let toaster = expect_context::<Toaster>();
        let timings = use_context::<GeneratorTimings>().unwrap_or_default();
        let sink: SharedSink = Rc::new(TracingSink::new(toaster));
        let form = PromptForm::with_timings(BrowserScheduler, timings, sink.clone())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default generator timings");
                PromptForm::open(BrowserScheduler, sink)
            });
        form.driver().on_change(move |s| set_state.set(s));

        // Timers die with the component, whichever way it is torn down.
        let form = StoredValue::new_local(form);
        on_cleanup(move || {
            form.try_with_value(|f| f.dispose());
        });
        form
    };

    let on_generate = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        form.with_value(|f| {
            if let Err(e) = f.submit() {
                tracing::debug!(error = %e, "generate rejected");
            }
        });
    };

    let generating = move || state.get().is_generating;

    view! {
        <section class="section">
            <div class="card card-glow">
                <div class="card-header">
                    <h2 class="card-title">
                        <span class="icon" aria-hidden="true">"✨"</span>
                        "Video generator"
                    </h2>
                    <p class="card-description">
                        "Describe what you want to see and the AI will create a realistic video"
                    </p>
                </div>
                <div class="card-content">
                    <div class="field">
                        <label for="prompt" class="label-lg">"Video description"</label>
                        <textarea
                            id="prompt"
                            class="textarea"
                            placeholder="For example: a beautiful sunset on the ocean shore, waves crashing against the rocks, seagulls flying..."
                            prop:value=move || prompt.get()
                            disabled=generating
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                #[cfg(feature = "hydrate")]
                                form.with_value(|f| f.set_prompt(text.clone()));
                                set_prompt.set(text);
                            }
                        />
                    </div>

                    <Show when=generating>
                        <ProgressBar state=state/>
                    </Show>

                    <button
                        class="btn btn-gradient btn-block"
                        disabled=generating
                        on:click=on_generate
                    >
                        {move || if generating() {
                            view! {
                                <span class="btn-content">
                                    <span class="spinner" aria-hidden="true"></span>
                                    "Creating video..."
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <span class="btn-content">
                                    <span class="icon" aria-hidden="true">"▶"</span>
                                    "Generate video"
                                </span>
                            }.into_any()
                        }}
                    </button>
                </div>
            </div>
        </section>
    }
}
