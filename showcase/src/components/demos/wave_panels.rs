use leptos::prelude::*;

const PANELS: [(&str, &str); 3] = [
    ("Adaptive Surfaces", "Liquid shaders for immersive hero moments."),
    ("Velocity Overlays", "Chromatic ripples mapped to user journey."),
    ("Signal Trails", "Reactive particles with additive light."),
];

/// Three static panels under a header with an oscillating masked shimmer.
#[component]
pub fn WavePanelsDemo() -> impl IntoView {
    view! {
        <section class="wave-panels">
            <header>
                <span>"Experience Stack"</span>
                <h3>"Modulate momentum across surfaces."</h3>
            </header>
            <div class="panel-grid">
                {PANELS
                    .iter()
                    .map(|(title, copy)| {
                        view! {
                            <article class="panel">
                                <h4>{*title}</h4>
                                <p>{*copy}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
