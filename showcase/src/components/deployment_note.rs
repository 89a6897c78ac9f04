use super::{Icon, ICON_LIGHTNING};
use leptos::prelude::*;

/// Heading of the per-card guidance block.
pub const DEPLOYMENT_NOTE_TITLE: &str = "Deployment note";

/// Guidance copy, identical on every card.
pub const DEPLOYMENT_NOTE: &str = "Pair with scroll-jacked narratives, onboarding flows, or high-impact landing nodes. Keep motion durations under 9s and offer reduced-motion fallbacks by gating animations with the user's preference.";

/// Static deployment guidance shown under each card's code viewer.
#[component]
pub fn DeploymentNote() -> impl IntoView {
    view! {
        <div class="deployment-note">
            <p class="note-title">
                <Icon path=ICON_LIGHTNING size="14" class="icon-sm" />
                {DEPLOYMENT_NOTE_TITLE}
            </p>
            <p class="note-body">{DEPLOYMENT_NOTE}</p>
        </div>
    }
}
