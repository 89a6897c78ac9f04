use leptos::prelude::*;

/// Call-to-action whose `.wave` layer rises on `:hover` and settles back on exit.
#[component]
pub fn LiquidButtonDemo() -> impl IntoView {
    view! {
        <section class="liquid-demo tidal-stage">
            <h3 class="liquid-title">"Hover-controlled tidal surge."</h3>
            <p class="liquid-copy">
                "Use on primary CTAs to signal progression depth. The passing wave paints light and returns to calm equilibrium."
            </p>
            <button class="liquid-button" type="button">
                <span>"Request Access"</span>
                <div class="wave"></div>
            </button>
        </section>
    }
}
