use leptos::prelude::*;

/// Idle ink spill: a radial circle that grows from the center and fades out.
#[component]
pub fn InkRippleDemo() -> impl IntoView {
    view! {
        <section class="ink-ripple">
            <div class="ripple-layer"></div>
            <div class="content">
                <h3>"Immersive switcher."</h3>
                <p>"Flood the next view with an expanding ink spill routed from the cursor origin."</p>
                <button type="button">"Trigger Ripple"</button>
            </div>
        </section>
    }
}
