use leptos::prelude::*;

/// Eyebrow label above the hero heading.
pub const HERO_EYEBROW: &str = "Liquid Transitions Index";
/// Hero heading.
pub const HERO_HEADING: &str = "Elevate hero moments with premium-grade liquid motion recipes";
/// Hero subheading.
pub const HERO_SUBHEADING: &str = "Each section below pairs an interactive preview with a production-ready code fragment and a tactical note on when to deploy it. Layer these transitions to sculpt immersive, next-gen product surfaces.";

/// Opening banner; independent of the catalog.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <span class="hero-eyebrow">{HERO_EYEBROW}</span>
            <h1 class="hero-title">{HERO_HEADING}</h1>
            <p class="hero-description">{HERO_SUBHEADING}</p>
        </section>
    }
}
