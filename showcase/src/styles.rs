//! CSS for the showcase page.
//!
//! Every animation on the page is declared here. The Rust side only emits
//! class names; timing, keyframes, blend modes and masks belong to the
//! browser's styling engine.
//!
//! # Customization
//!
//! ```rust
//! use liquid_showcase::styles::SHOWCASE_CSS;
//!
//! let my_css = ".showcase-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", SHOWCASE_CSS, my_css);
//! assert!(combined.contains("@keyframes gooeySwipe"));
//! ```

/// Complete CSS for the page - deep slate theme with liquid demos.
///
/// Keyframes and periods:
/// - `gooeySwipe` 9s linear, conic gradient field
/// - `pulseMask` 8s ease-in-out, clip-path circle / ellipse / circle
/// - `shimmer` 5s ease-in-out, header-only masked band
/// - `idleRipple` 6s cubic-bezier, expanding ink circle
///
/// The tidal button uses a hover transition (.6s transform, .4s opacity).
pub const SHOWCASE_CSS: &str = r#"
:root {
    --bg-page: #020617;
    --bg-card: rgba(15, 23, 42, 0.3);
    --bg-panel: rgba(15, 23, 42, 0.6);
    --text-bright: #f8fafc;
    --text-body: #cbd5e1;
    --text-accent: #bae6fd;
    --border-subtle: rgba(255, 255, 255, 0.1);
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 64rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg-page);
    color: #f1f5f9;
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
}

/* ---------- Page shell ---------- */

.page-shell {
    position: relative;
    min-height: 100vh;
}

.backdrop {
    position: absolute;
    inset: 0;
    z-index: -1;
    overflow: hidden;
}

.glow {
    position: absolute;
    left: 0;
    right: 0;
    height: 600px;
    pointer-events: none;
}

.glow-top {
    top: -30%;
    transform: translateY(-40%);
    background: radial-gradient(ellipse at top, rgba(56, 189, 248, 0.15), rgba(15, 23, 42, 0));
}

.glow-bottom {
    bottom: -30%;
    transform: translateY(30%);
    background: radial-gradient(ellipse at bottom, rgba(147, 51, 234, 0.18), rgba(15, 23, 42, 0));
}

.page-main {
    margin: 0 auto;
    max-width: var(--container-max);
    display: flex;
    flex-direction: column;
    gap: 5rem;
    padding: 6rem 1.5rem;
}

/* ---------- Hero ---------- */

.hero {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.hero-eyebrow {
    display: inline-flex;
    width: fit-content;
    align-items: center;
    gap: 0.5rem;
    border: 1px solid var(--border-subtle);
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.05);
    padding: 0.25rem 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--text-accent);
    backdrop-filter: blur(8px);
}

.hero-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 600;
    line-height: 1.2;
    color: var(--text-bright);
}

.hero-description {
    margin: 0;
    max-width: 48rem;
    font-size: 1rem;
    color: var(--text-body);
}

/* ---------- Cards ---------- */

.showcase-card {
    border: 1px solid var(--border-subtle);
    border-radius: 1.5rem;
    background: var(--bg-card);
    padding: 1.5rem;
    box-shadow: 0 20px 70px rgba(15, 23, 42, 0.55);
    backdrop-filter: blur(24px);
}

.card-grid {
    display: flex;
    flex-direction: column;
    gap: 2.5rem;
}

.card-demo {
    min-height: 260px;
}

.card-info {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.card-title {
    margin: 0 0 0.5rem;
    font-size: 1.5rem;
    font-weight: 600;
    color: #ffffff;
}

.card-description {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-body);
}

/* ---------- Code disclosure ---------- */

.code-disclosure {
    width: 100%;
    overflow: hidden;
    border: 1px solid var(--border-subtle);
    border-radius: 1rem;
    background: var(--bg-panel);
    transition: box-shadow 0.3s ease;
}

.code-disclosure[open] {
    box-shadow: 0 12px 45px rgba(14, 165, 233, 0.18);
}

.code-summary {
    display: flex;
    align-items: center;
    justify-content: space-between;
    cursor: pointer;
    list-style: none;
    padding: 1rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 500;
    letter-spacing: 0.025em;
    color: rgba(186, 230, 253, 0.9);
}

.code-summary::-webkit-details-marker {
    display: none;
}

.code-summary:hover {
    color: #e0f2fe;
}

.summary-caret {
    transition: transform 0.3s ease;
}

.code-disclosure[open] .summary-caret {
    transform: rotate(180deg);
}

.code-body {
    border-top: 1px solid var(--border-subtle);
    background: rgba(0, 0, 0, 0.4);
    padding: 1rem;
}

.code-block {
    margin: 0;
    overflow-x: auto;
    white-space: pre-wrap;
    overflow-wrap: break-word;
    font-family: var(--font-mono);
    font-size: 12px;
    line-height: 1.625;
    color: rgba(226, 232, 240, 0.9);
}

/* ---------- Deployment note ---------- */

.deployment-note {
    border: 1px solid var(--border-subtle);
    border-radius: 1rem;
    background: rgba(15, 23, 42, 0.5);
    padding: 1.25rem;
    font-size: 0.75rem;
    color: var(--text-body);
}

.note-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin: 0;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.28em;
    color: var(--text-accent);
}

.note-body {
    margin: 0.5rem 0 0;
}

/* ---------- Closing CTA ---------- */

.closing-cta {
    border: 1px solid var(--border-subtle);
    border-radius: 1.5rem;
    background: rgba(15, 23, 42, 0.4);
    padding: 2.5rem;
    text-align: center;
    color: var(--text-body);
    box-shadow: 0 20px 60px rgba(2, 6, 23, 0.6);
    backdrop-filter: blur(24px);
}

.cta-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 600;
    color: #ffffff;
}

.cta-copy {
    margin: 1rem auto 0;
    max-width: 42rem;
    font-size: 0.875rem;
}

/* ---------- Shared demo surface ---------- */

.liquid-demo {
    position: relative;
    overflow: hidden;
    isolation: isolate;
    min-height: 260px;
    border-radius: 1.5rem;
    border: 1px solid var(--border-subtle);
    background: rgba(2, 6, 23, 0.7);
    padding: 2rem;
}

.liquid-badge {
    display: inline-block;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.1);
    padding: 0.25rem 0.75rem;
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--text-accent);
}

.liquid-title {
    margin: 1rem 0 0.5rem;
    font-size: 1.25rem;
    font-weight: 600;
    color: #ffffff;
}

.liquid-copy {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-body);
}

.liquid-cta {
    margin-top: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.1);
    padding: 0.6rem 1.4rem;
    color: #ffffff;
    font-weight: 500;
    mix-blend-mode: screen;
}

/* ---------- Gooey Gradient Swipe ---------- */

.gooey-swipe::before {
    content: "";
    position: absolute;
    inset: -40% -60%;
    z-index: -1;
    background: conic-gradient(from 90deg, #38bdf8, #a855f7, #f97316, #38bdf8);
    filter: blur(70px) saturate(130%);
    opacity: 0.55;
    animation: gooeySwipe 9s linear infinite;
}

@keyframes gooeySwipe {
    0% { transform: translateX(-30%) rotate(-8deg); }
    50% { transform: translateX(25%) rotate(6deg); }
    100% { transform: translateX(-30%) rotate(-8deg); }
}

/* ---------- Nebula Mask Reveal ---------- */

.pulse-mask {
    display: grid;
    gap: 1.5rem;
}

.pulse-mask .mask-frame {
    position: relative;
    height: 160px;
    overflow: hidden;
    border-radius: 1rem;
}

.pulse-mask .mask-image {
    position: absolute;
    inset: 0;
    background:
        radial-gradient(circle at 30% 30%, rgba(236, 72, 153, 0.8), transparent 45%),
        radial-gradient(circle at 70% 60%, rgba(56, 189, 248, 0.8), transparent 50%),
        linear-gradient(135deg, #1e1b4b, #0f172a);
}

.pulse-mask .mask {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at 20% 20%, transparent 40%, rgba(15, 23, 42, 0.78));
    animation: pulseMask 8s ease-in-out infinite;
    mix-blend-mode: lighten;
}

@keyframes pulseMask {
    0%, 100% { clip-path: circle(20% at 20% 40%); }
    40% { clip-path: ellipse(45% 55% at 70% 50%); }
    70% { clip-path: circle(30% at 50% 80%); }
}

/* ---------- Tidal Button Hover ---------- */

.tidal-stage {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 1.5rem;
    background: rgba(15, 23, 42, 0.4);
}

.tidal-stage .liquid-title {
    margin: 0;
}

.tidal-stage .liquid-copy {
    max-width: 28rem;
}

.liquid-button {
    position: relative;
    border: none;
    border-radius: 9999px;
    background: linear-gradient(120deg, #0ea5e9, #6366f1);
    overflow: hidden;
    padding: 0.9rem 2rem;
    color: #ffffff;
    font-weight: 600;
    cursor: pointer;
}

.liquid-button span {
    position: relative;
    z-index: 1;
}

.liquid-button .wave {
    position: absolute;
    inset: -120%;
    background: radial-gradient(circle, rgba(255, 255, 255, 0.45), transparent 55%);
    transform: translateY(65%);
    opacity: 0.4;
    transition: transform 0.6s ease, opacity 0.4s ease;
}

.liquid-button:hover .wave {
    transform: translateY(0%);
    opacity: 0.85;
}

/* ---------- Chromatic Wave Panels ---------- */

.wave-panels {
    overflow: hidden;
    border: 1px solid var(--border-subtle);
    border-radius: 1.5rem;
    background: rgba(2, 6, 23, 0.7);
}

.wave-panels header {
    position: relative;
    overflow: hidden;
    padding: 1.5rem 2rem;
}

.wave-panels header::after {
    content: "";
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, rgba(14, 165, 233, 0.6), rgba(236, 72, 153, 0.6));
    animation: shimmer 5s ease-in-out infinite;
    -webkit-mask: radial-gradient(120% 65% at 50% 0%, #000 40%, transparent 72%);
    mask: radial-gradient(120% 65% at 50% 0%, #000 40%, transparent 72%);
    pointer-events: none;
}

.wave-panels header span {
    position: relative;
    z-index: 1;
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.25em;
    color: var(--text-accent);
}

.wave-panels header h3 {
    position: relative;
    z-index: 1;
    margin: 0.5rem 0 0;
    color: #ffffff;
}

@keyframes shimmer {
    0%, 100% { transform: translateX(-10%); }
    50% { transform: translateX(12%); }
}

.panel-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
    gap: 1rem;
    padding: 1.5rem 2rem 2rem;
}

.panel {
    border: 1px solid var(--border-subtle);
    border-radius: 1rem;
    background: rgba(15, 23, 42, 0.6);
    padding: 1rem;
}

.panel h4 {
    margin: 0 0 0.4rem;
    color: #ffffff;
}

.panel p {
    margin: 0;
    font-size: 0.8rem;
    color: var(--text-body);
}

/* ---------- Ink Ripple Overlay ---------- */

.ink-ripple {
    position: relative;
    overflow: hidden;
    min-height: 260px;
    border-radius: 1.5rem;
    background: #020617;
    padding: 2rem;
}

.ink-ripple .ripple-layer {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 40vmax;
    aspect-ratio: 1 / 1;
    background: radial-gradient(circle, rgba(59, 130, 246, 0.75), transparent 70%);
    border-radius: 50%;
    transform: translate(-50%, -50%) scale(0.2);
    animation: idleRipple 6s cubic-bezier(0.62, 0.01, 0.41, 1) infinite;
}

.ink-ripple .content {
    position: relative;
    z-index: 1;
}

.ink-ripple h3 {
    margin: 0 0 0.5rem;
    color: #ffffff;
}

.ink-ripple p {
    margin: 0 0 1.5rem;
    color: var(--text-body);
}

.ink-ripple button {
    border: 1px solid rgba(255, 255, 255, 0.25);
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.08);
    padding: 0.6rem 1.4rem;
    color: #ffffff;
}

@keyframes idleRipple {
    0% { transform: translate(-50%, -50%) scale(0.2); opacity: 0.4; }
    40% { opacity: 0.85; }
    100% { transform: translate(-50%, -50%) scale(1.3); opacity: 0; }
}

/* ---------- Responsive ---------- */

@media (min-width: 768px) {
    .page-main {
        gap: 7rem;
        padding: 6rem 2.5rem;
    }
    .hero-title { font-size: 3.75rem; }
    .hero-description { font-size: 1.125rem; }
    .showcase-card { padding: 2.5rem; }
    .card-title, .cta-title { font-size: 1.875rem; }
    .card-description, .cta-copy { font-size: 1rem; }
    .code-summary { font-size: 1rem; }
    .code-body { padding: 1rem 1.5rem; }
    .code-block { font-size: 13px; }
    .deployment-note { font-size: 0.875rem; }
}

@media (min-width: 1024px) {
    .card-grid {
        display: grid;
        grid-template-columns: minmax(0, 1.3fr) minmax(0, 1fr);
    }
}
"#;

/// Reduced-motion guard: freezes every keyframe animation and hover
/// transition when the visitor asks the OS for less motion.
pub const REDUCED_MOTION_CSS: &str = r#"
@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
        scroll-behavior: auto !important;
    }
}
"#;

/// Content Security Policy for the generated page: inline styles and data
/// images only, no scripts, no network.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src data:; font-src 'self' data:; script-src 'none'; connect-src 'none';";
