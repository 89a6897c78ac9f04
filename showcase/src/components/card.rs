//! Showcase card - one per catalog entry.
//!
//! Two-column layout: the live demo on the left, and on the right the entry's
//! heading, description, code disclosure and deployment note.

use super::{CodeDisclosure, DeploymentNote};
use crate::catalog::ShowcaseEntry;
use leptos::prelude::*;

/// A complete card for one showcase entry.
#[component]
pub fn ShowcaseCard(
    entry: ShowcaseEntry,
    /// Whether the code disclosure starts expanded
    #[prop(default = false)]
    code_open: bool,
) -> impl IntoView {
    let anchor = format!("showcase-{}", entry.id);
    let period = format!("{}s", entry.demo.period_secs());

    view! {
        <section
            id=anchor
            class="showcase-card"
            data-showcase-id=entry.id
            data-motion-trigger=entry.demo.trigger()
            data-motion-period=period
        >
            <div class="card-grid">
                <div class="card-demo">{entry.demo.render()}</div>
                <div class="card-info">
                    <header class="card-header">
                        <h2 class="card-title">{entry.name}</h2>
                        <p class="card-description">{entry.description}</p>
                    </header>
                    <CodeDisclosure code=entry.code open=code_open />
                    <DeploymentNote />
                </div>
            </div>
        </section>
    }
}
