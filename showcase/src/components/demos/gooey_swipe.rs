use leptos::prelude::*;

/// Hero surface with a blurred conic gradient sweeping behind the copy.
#[component]
pub fn GooeySwipeDemo() -> impl IntoView {
    view! {
        <section class="liquid-demo gooey-swipe">
            <div class="liquid-badge">"Hero Section"</div>
            <h3 class="liquid-title">"Slipstream brightness with gooey gradients."</h3>
            <p class="liquid-copy">
                "Saturate the fold with flowing light. Blend additive hues to simulate molten glass sliding across the hero canvas."
            </p>
            <button class="liquid-cta" type="button">
                "Launch Experience"
            </button>
        </section>
    }
}
