//! Showcase catalog - the fixed, ordered list of liquid transitions.
//!
//! The catalog is declared once as a literal array and never mutated. Its
//! order is the display order on the page, and each entry's `id` is the
//! stable key used for anchors, disclosure state and CLI lookups.
//!
//! # Example
//!
//! ```rust
//! use liquid_showcase::catalog::{self, Demo};
//!
//! let entry = catalog::find("liquid-button").unwrap();
//! assert_eq!(entry.name, "Tidal Button Hover");
//! assert_eq!(entry.demo, Demo::LiquidButton);
//! assert_eq!(catalog::catalog().len(), 5);
//! ```

use serde::Serialize;

/// The closed set of live demonstrations, one per catalog entry.
///
/// Each variant maps to a zero-prop component in
/// [`crate::components::demos`]; dispatch happens in
/// [`Demo::render`](crate::components::demos).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    /// Blurred conic gradient sliding across a hero surface
    GooeySwipe,
    /// Clip-path veil morphing between three shapes
    PulseMask,
    /// Radial highlight rising through a button on hover
    LiquidButton,
    /// Shimmer band oscillating under a panel header
    WavePanels,
    /// Expanding, fading ink circle
    InkRipple,
}

impl Demo {
    /// Duration of one motion cycle, in seconds, as declared in the stylesheet.
    ///
    /// For the hover-driven button this is the transform transition length.
    pub fn period_secs(&self) -> f32 {
        match self {
            Demo::GooeySwipe => 9.0,
            Demo::PulseMask => 8.0,
            Demo::LiquidButton => 0.6,
            Demo::WavePanels => 5.0,
            Demo::InkRipple => 6.0,
        }
    }

    /// Whether the motion loops on its own (as opposed to waiting for hover).
    pub fn is_autoplay(&self) -> bool {
        !matches!(self, Demo::LiquidButton)
    }

    /// Name of the `@keyframes` rule driving a looping demo.
    pub fn keyframes(&self) -> Option<&'static str> {
        match self {
            Demo::GooeySwipe => Some("gooeySwipe"),
            Demo::PulseMask => Some("pulseMask"),
            Demo::LiquidButton => None,
            Demo::WavePanels => Some("shimmer"),
            Demo::InkRipple => Some("idleRipple"),
        }
    }

    /// Value for the card's `data-motion-trigger` attribute.
    pub fn trigger(&self) -> &'static str {
        if self.is_autoplay() { "loop" } else { "hover" }
    }
}

/// One showcase record: a live demo plus its text and illustrative snippet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShowcaseEntry {
    /// Unique, stable token (list key and anchor)
    pub id: &'static str,
    /// Display name shown as the card heading
    pub name: &'static str,
    /// One or two sentences shown under the heading
    pub description: &'static str,
    /// Live demonstration rendered inside the card
    pub demo: Demo,
    /// Markup + style fragment, displayed verbatim and never executed
    pub code: &'static str,
}

/// Lightweight view of an entry for listings (no snippet body).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogSummary {
    /// Entry id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Card description
    pub description: &'static str,
    /// Demo variant
    pub demo: Demo,
    /// Motion cycle (or hover transition) length in seconds
    pub period_secs: f32,
    /// Loops on its own rather than waiting for hover
    pub autoplay: bool,
    /// Keyframes rule name, absent for hover-driven demos
    pub keyframes: Option<&'static str>,
    /// Snippet length in lines
    pub code_lines: usize,
}

impl From<&ShowcaseEntry> for CatalogSummary {
    fn from(entry: &ShowcaseEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            description: entry.description,
            demo: entry.demo,
            period_secs: entry.demo.period_secs(),
            autoplay: entry.demo.is_autoplay(),
            keyframes: entry.demo.keyframes(),
            code_lines: entry.code.lines().count(),
        }
    }
}

/// The whole catalog, in display order.
pub fn catalog() -> &'static [ShowcaseEntry] {
    &CATALOG
}

/// Look up an entry by id.
pub fn find(id: &str) -> Option<&'static ShowcaseEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

/// Entry ids in display order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.id)
}

/// Summaries of every entry, in display order.
pub fn summaries() -> Vec<CatalogSummary> {
    CATALOG.iter().map(CatalogSummary::from).collect()
}

/// The reference catalog.
pub static CATALOG: [ShowcaseEntry; 5] = [
    ShowcaseEntry {
        id: "gooey-swipe",
        name: "Gooey Gradient Swipe",
        description: "A cinematic hero pattern where a blurred gradient river slides across the surface, leaving behind shimmering highlights.",
        demo: Demo::GooeySwipe,
        code: GOOEY_SWIPE_CODE,
    },
    ShowcaseEntry {
        id: "pulse-mask",
        name: "Nebula Mask Reveal",
        description: "A morphing clip-path veil that exposes imagery the way liquid crystals warp across a display.",
        demo: Demo::PulseMask,
        code: PULSE_MASK_CODE,
    },
    ShowcaseEntry {
        id: "liquid-button",
        name: "Tidal Button Hover",
        description: "Reactive call-to-action where a refracted wave rushes across the surface on hover, leaving subtle caustics.",
        demo: Demo::LiquidButton,
        code: LIQUID_BUTTON_CODE,
    },
    ShowcaseEntry {
        id: "wave-panels",
        name: "Chromatic Wave Panels",
        description: "Stacked content cards wrapped in a liquid shimmer header, perfect for showcasing product suites.",
        demo: Demo::WavePanels,
        code: WAVE_PANELS_CODE,
    },
    ShowcaseEntry {
        id: "ink-ripple",
        name: "Ink Ripple Overlay",
        description: "A page transition tile that soaks the canvas with expanding liquid ink driven by pointer position.",
        demo: Demo::InkRipple,
        code: INK_RIPPLE_CODE,
    },
];

const GOOEY_SWIPE_CODE: &str = r##"<section class="liquid-demo gooey-swipe">
  <div class="badge">Hero Section</div>
  <h3>Slipstream brightness with gooey gradients</h3>
  <p>Saturate the fold with flowing light that responds like molten glass.</p>
  <button class="liquid-cta">Launch Experience</button>
</section>

.gooey-swipe::before {
  content: "";
  position: absolute;
  inset: -40% -60%;
  background: conic-gradient(from 90deg, #38bdf8, #a855f7, #f97316, #38bdf8);
  filter: blur(70px) saturate(130%);
  animation: gooeySwipe 9s linear infinite;
}

@keyframes gooeySwipe {
  0% { transform: translateX(-30%) rotate(-8deg); }
  50% { transform: translateX(25%) rotate(6deg); }
  100% { transform: translateX(-30%) rotate(-8deg); }
}"##;

const PULSE_MASK_CODE: &str = r##"<section class="liquid-demo pulse-mask">
  <div class="mask-frame">
    <img src="/neon-city.jpg" alt="Neon city" />
    <div class="mask"></div>
  </div>
  <div class="copy">
    <h3>Liquid Aperture Reveal</h3>
    <p>Progressive disclosure with fluid refraction and depth.</p>
  </div>
</section>

.pulse-mask .mask {
  position: absolute;
  inset: 0;
  background: radial-gradient(circle at 20% 20%, transparent 40%, rgba(15,23,42,.78));
  animation: pulseMask 8s ease-in-out infinite;
  mix-blend-mode: lighten;
}

@keyframes pulseMask {
  0%, 100% { clip-path: circle(20% at 20% 40%); }
  40% { clip-path: ellipse(45% 55% at 70% 50%); }
  70% { clip-path: circle(30% at 50% 80%); }
}"##;

const LIQUID_BUTTON_CODE: &str = r##"<button class="liquid-button">
  <span>Request Access</span>
  <div class="wave"></div>
</button>

.liquid-button {
  position: relative;
  border-radius: 9999px;
  background: linear-gradient(120deg, #0ea5e9, #6366f1);
  overflow: hidden;
}

.liquid-button .wave {
  position: absolute;
  inset: -120%;
  background: radial-gradient(circle, rgba(255,255,255,0.45), transparent 55%);
  transform: translateY(65%);
  transition: transform .6s ease, opacity .4s ease;
}

.liquid-button:hover .wave {
  transform: translateY(0%);
  opacity: 0.85;
}"##;

const WAVE_PANELS_CODE: &str = r##"<section class="wave-panels">
  <header>
    <span>Experience Stack</span>
    <h3>Modulate momentum across surfaces</h3>
  </header>
  <div class="panel-grid">
    <article class="panel">
      <h4>Adaptive Surfaces</h4>
      <p>Liquid shaders for immersive hero moments.</p>
    </article>
    <article class="panel">
      <h4>Velocity Overlays</h4>
      <p>Chromatic ripples mapped to user journey.</p>
    </article>
    <article class="panel">
      <h4>Signal Trails</h4>
      <p>Reactive particles with additive light.</p>
    </article>
  </div>
</section>

.wave-panels header::after {
  content: "";
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, rgba(14,165,233,.6), rgba(236,72,153,.6));
  animation: shimmer 5s ease-in-out infinite;
  mask: radial-gradient(120% 65% at 50% 0%, #000 40%, transparent 72%);
}

@keyframes shimmer {
  0%, 100% { transform: translateX(-10%); }
  50% { transform: translateX(12%); }
}"##;

const INK_RIPPLE_CODE: &str = r##"<div class="ink-ripple">
  <div class="ripple-layer"></div>
  <div class="content">
    <h3>Immersive Switcher</h3>
    <p>Trigger the transition to flood the interface.</p>
    <button>Trigger Ripple</button>
  </div>
</div>

.ink-ripple {
  position: relative;
  overflow: hidden;
  background: #020617;
}

.ink-ripple .ripple-layer {
  position: absolute;
  width: 40vmax;
  aspect-ratio: 1 / 1;
  background: radial-gradient(circle, rgba(59,130,246,0.75), transparent 70%);
  border-radius: 50%;
  transform: translate(-50%, -50%) scale(0.2);
  animation: idleRipple 6s cubic-bezier(.62,.01,.41,1) infinite;
}

@keyframes idleRipple {
  0% { transform: translate(-50%, -50%) scale(0.2); opacity: 0.4; }
  40% { opacity: 0.85; }
  100% { transform: translate(-50%, -50%) scale(1.3); opacity: 0; }
}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_five_entries_in_reference_order() {
        let ids: Vec<_> = ids().collect();
        assert_eq!(
            ids,
            vec![
                "gooey-swipe",
                "pulse-mask",
                "liquid-button",
                "wave-panels",
                "ink-ripple"
            ]
        );
    }

    #[test]
    fn entries_are_complete_and_ids_unique() {
        let mut seen = HashSet::new();
        for entry in catalog() {
            assert!(!entry.id.is_empty());
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.code.is_empty());
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn demos_follow_catalog_order() {
        let demos: Vec<_> = catalog().iter().map(|e| e.demo).collect();
        assert_eq!(
            demos,
            vec![
                Demo::GooeySwipe,
                Demo::PulseMask,
                Demo::LiquidButton,
                Demo::WavePanels,
                Demo::InkRipple
            ]
        );
    }

    #[test]
    fn snippets_mention_their_keyframes() {
        assert!(find("gooey-swipe").unwrap().code.contains("@keyframes gooeySwipe"));
        assert!(find("pulse-mask").unwrap().code.contains("@keyframes pulseMask"));
        assert!(find("wave-panels").unwrap().code.contains("@keyframes shimmer"));
        assert!(find("ink-ripple").unwrap().code.contains("@keyframes idleRipple"));
        assert!(find("liquid-button").unwrap().code.contains(":hover .wave"));
    }

    #[test]
    fn find_unknown_id_is_none() {
        assert!(find("lava-lamp").is_none());
    }

    #[test]
    fn only_button_waits_for_hover() {
        let hover: Vec<_> = catalog()
            .iter()
            .map(|e| e.demo)
            .filter(|d| !d.is_autoplay())
            .collect();
        assert_eq!(hover, vec![Demo::LiquidButton]);
        assert_eq!(Demo::LiquidButton.keyframes(), None);
        assert_eq!(Demo::LiquidButton.trigger(), "hover");
        assert_eq!(Demo::InkRipple.trigger(), "loop");
    }

    #[test]
    fn summary_serializes_demo_as_kebab_case() {
        let json = serde_json::to_value(summaries()).unwrap();
        assert_eq!(json[3]["demo"], "wave-panels");
        assert_eq!(json[0]["code_lines"], 21);
        assert_eq!(json[0]["period_secs"], 9.0);
        assert_eq!(json[0]["keyframes"], "gooeySwipe");
        assert_eq!(json[2]["autoplay"], false);
        assert!(json[2]["keyframes"].is_null());
    }
}
