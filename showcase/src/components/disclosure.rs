//! Collapsible code viewer built on native `<details>`.

use super::{Icon, ICON_CARET_DOWN};
use leptos::prelude::*;

/// Fixed summary label for every code disclosure.
pub const DISCLOSURE_LABEL: &str = "View implementation code";

/// Native disclosure holding one entry's snippet as preformatted text.
///
/// The snippet is emitted as a text node, so the renderer escapes markup
/// characters and a browser shows the original bytes, whitespace included.
#[component]
pub fn CodeDisclosure(
    /// Snippet shown verbatim in the expanded body
    code: &'static str,
    /// Render expanded (`open` attribute present)
    #[prop(default = false)]
    open: bool,
) -> impl IntoView {
    view! {
        <details class="code-disclosure" open=open>
            <summary class="code-summary">
                <span class="summary-label">{DISCLOSURE_LABEL}</span>
                <Icon path=ICON_CARET_DOWN size="16" class="summary-caret" />
            </summary>
            <div class="code-body">
                <pre class="code-block"><code>{code}</code></pre>
            </div>
        </details>
    }
}
