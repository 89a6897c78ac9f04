//! Root document component - the complete HTML page
//!
//! Background glow layers, then a single `<main>` column: hero, one card per
//! catalog entry in catalog order, closing call-to-action.

use super::{ClosingCta, Hero, ShowcaseCard};
use crate::RenderOptions;
use crate::catalog::ShowcaseEntry;
use crate::disclosure::DisclosureState;
use crate::styles::{CSP, REDUCED_MOTION_CSS, SHOWCASE_CSS};
use leptos::prelude::*;

/// The complete HTML document for the showcase
#[component]
pub fn ShowcaseDocument(entries: Vec<ShowcaseEntry>, options: RenderOptions) -> impl IntoView {
    let RenderOptions {
        title,
        reduced_motion,
        disclosure,
    } = options;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{SHOWCASE_CSS}</style>
                {reduced_motion.then(|| view! { <style>{REDUCED_MOTION_CSS}</style> })}
            </head>
            <body>
                <div class="page-shell">
                    <div class="backdrop" aria-hidden="true">
                        <div class="glow glow-top"></div>
                        <div class="glow glow-bottom"></div>
                    </div>
                    <main class="page-main">
                        <Hero />
                        <ShowcaseCards entries=entries disclosure=disclosure />
                        <ClosingCta />
                    </main>
                </div>
            </body>
        </html>
    }
}

/// Cards for every entry, in the order given.
#[component]
pub fn ShowcaseCards(entries: Vec<ShowcaseEntry>, disclosure: DisclosureState) -> impl IntoView {
    entries
        .into_iter()
        .map(|entry| {
            let code_open = disclosure.is_open(entry.id);
            view! { <ShowcaseCard entry=entry code_open=code_open /> }
        })
        .collect::<Vec<_>>()
}
