use leptos::prelude::*;

/// Gradient "image" behind a veil whose clip-path cycles circle, ellipse, circle.
#[component]
pub fn PulseMaskDemo() -> impl IntoView {
    view! {
        <section class="liquid-demo pulse-mask">
            <div class="mask-frame">
                <div class="mask-image"></div>
                <div class="mask"></div>
            </div>
            <div class="copy">
                <h3 class="liquid-title">"Liquid aperture reveal."</h3>
                <p class="liquid-copy">
                    "Introduce depth with a morphing veil that exposes content using refracted, nebula-grade blur."
                </p>
            </div>
        </section>
    }
}
