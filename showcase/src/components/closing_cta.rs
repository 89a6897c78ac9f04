use leptos::prelude::*;

/// Closing call-to-action heading.
pub const CTA_HEADING: &str = "Blend these liquid transitions into your velocity stack";
/// Closing call-to-action copy.
pub const CTA_COPY: &str = "Ship the future of immersive interfaces. Combine the demos above with scroll-driven motion, subtle parallax, and audio-reactive shaders to produce full-sensory brand moments ready to deploy on Vercel.";

/// Footer block rendered after the last card.
#[component]
pub fn ClosingCta() -> impl IntoView {
    view! {
        <footer class="closing-cta">
            <h2 class="cta-title">{CTA_HEADING}</h2>
            <p class="cta-copy">{CTA_COPY}</p>
        </footer>
    }
}
