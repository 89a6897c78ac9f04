//! # liquid-showcase
//!
//! Leptos SSR renderer for the liquid transitions showcase page.
//!
//! The page presents five decorative "liquid motion" transitions. Each card
//! pairs a live demo with its name, a short description, a collapsible view of
//! the illustrative markup/style snippet and a deployment note. A hero banner
//! opens the page and a call-to-action closes it.
//!
//! ## Features
//!
//! - **Zero JavaScript** - pure SSR, native `<details>` for code disclosure
//! - **CSS-only motion** - keyframes, blend modes and clip-path masks live in
//!   [`styles`], the browser runs the timeline
//! - **Fixed catalog** - an immutable, ordered array of entries in [`catalog`]
//!
//! ## Quick Start
//!
//! ```rust
//! use liquid_showcase::{catalog, render_page, RenderOptions};
//!
//! let html = render_page(catalog::catalog(), &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - the showcase entries and the [`catalog::Demo`] variants
//! - [`disclosure`] - per-card open/closed state for the code viewers
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering goes through Leptos 0.8's `RenderHtml::to_html`; no reactive
//! runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod disclosure;
pub mod styles;

use catalog::ShowcaseEntry;
use components::{ShowcaseCards, ShowcaseDocument};
use disclosure::DisclosureState;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Default document title.
pub const DEFAULT_TITLE: &str = "Liquid Transitions Index";

/// Page-level rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Contents of `<title>`
    pub title: String,
    /// Append the `prefers-reduced-motion` guard stylesheet
    pub reduced_motion: bool,
    /// Which cards start with their code expanded
    pub disclosure: DisclosureState,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            reduced_motion: true,
            disclosure: DisclosureState::collapsed(),
        }
    }
}

/// Render the complete showcase page.
///
/// Emits the hero, one card per entry in the given order, and the closing
/// call-to-action. The output depends only on `entries` and `options`, so
/// rendering twice yields identical documents.
///
/// # Example
///
/// ```rust
/// use liquid_showcase::{catalog, render_page, RenderOptions};
/// use liquid_showcase::disclosure::DisclosureState;
///
/// let options = RenderOptions {
///     disclosure: DisclosureState::with_open(["ink-ripple"]),
///     ..Default::default()
/// };
/// let html = render_page(catalog::catalog(), &options);
/// assert!(html.contains("data-showcase-id=\"ink-ripple\""));
/// ```
pub fn render_page(entries: &[ShowcaseEntry], options: &RenderOptions) -> String {
    let doc = view! {
        <ShowcaseDocument entries=entries.to_vec() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the card list, for embedding in another page.
pub fn render_cards(entries: &[ShowcaseEntry], disclosure: &DisclosureState) -> String {
    view! {
        <ShowcaseCards entries=entries.to_vec() disclosure=disclosure.clone() />
    }
    .to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn renders_full_document() {
        let html = render_page(&CATALOG, &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Liquid Transitions Index</title>"));
        assert!(html.contains("@keyframes gooeySwipe"));
        assert!(html.contains("prefers-reduced-motion"));
    }

    #[test]
    fn reduced_motion_guard_is_optional() {
        let options = RenderOptions {
            reduced_motion: false,
            ..Default::default()
        };
        let html = render_page(&CATALOG, &options);
        assert!(!html.contains("prefers-reduced-motion"));
    }

    #[test]
    fn custom_title_is_used() {
        let options = RenderOptions {
            title: "Motion Lab".into(),
            ..Default::default()
        };
        let html = render_page(&CATALOG, &options);
        assert!(html.contains("<title>Motion Lab</title>"));
    }

    #[test]
    fn empty_catalog_still_has_hero_and_footer() {
        let html = render_page(&[], &RenderOptions::default());
        assert!(html.contains("hero-title"));
        assert!(html.contains("closing-cta"));
        assert!(!html.contains("showcase-card"));
    }

    #[test]
    fn cards_fragment_has_no_document_shell() {
        let html = render_cards(&CATALOG, &DisclosureState::collapsed());
        assert!(!html.contains("<html"));
        assert_eq!(html.matches("class=\"showcase-card\"").count(), 5);
    }
}
