use leptos::prelude::*;

use crate::components::contact_form::ContactCard;
use crate::components::faq::FaqAccordion;
use crate::components::generator::GeneratorCard;

/// The whole site: hero, generator, FAQ, contact, footer.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <Hero/>
                <GeneratorCard/>

                <section class="section">
                    <h2 class="section-title gradient-text">"Frequently asked questions"</h2>
                    <div class="card">
                        <div class="card-content">
                            <FaqAccordion/>
                        </div>
                    </div>
                </section>

                <section class="section">
                    <h2 class="section-title gradient-text">"Contact us"</h2>
                    <ContactCard/>
                </section>

                <footer class="footer">
                    <p>"© 2025 VideoGen AI. Built with cutting-edge AI technology"</p>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero fade-in">
            <h1 class="hero-title gradient-text">"VideoGen AI"</h1>
            <p class="hero-tagline">
                "Create realistic videos up to an hour long from a single line"
            </p>
        </header>
    }
}
