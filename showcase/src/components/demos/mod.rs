//! Live demonstrations, one zero-prop component per [`Demo`] variant.
//!
//! Each component emits only markup and class names; all motion lives in
//! [`crate::styles::SHOWCASE_CSS`] as keyframes or hover transitions. Nothing
//! here schedules, listens or keeps state.

mod gooey_swipe;
mod ink_ripple;
mod liquid_button;
mod pulse_mask;
mod wave_panels;

pub use gooey_swipe::GooeySwipeDemo;
pub use ink_ripple::InkRippleDemo;
pub use liquid_button::LiquidButtonDemo;
pub use pulse_mask::PulseMaskDemo;
pub use wave_panels::WavePanelsDemo;

use crate::catalog::Demo;
use leptos::prelude::*;

impl Demo {
    /// Render this demonstration.
    pub fn render(self) -> AnyView {
        match self {
            Demo::GooeySwipe => view! { <GooeySwipeDemo /> }.into_any(),
            Demo::PulseMask => view! { <PulseMaskDemo /> }.into_any(),
            Demo::LiquidButton => view! { <LiquidButtonDemo /> }.into_any(),
            Demo::WavePanels => view! { <WavePanelsDemo /> }.into_any(),
            Demo::InkRipple => view! { <InkRippleDemo /> }.into_any(),
        }
    }
}
