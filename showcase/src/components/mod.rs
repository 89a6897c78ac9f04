//! Leptos UI components for rendering the showcase page.
//!
//! # Component Hierarchy
//!
//! ```text
//! ShowcaseDocument
//! ├── Hero
//! ├── ShowcaseCards
//! │   └── ShowcaseCard (per catalog entry)
//! │       ├── Demo::render -> one of demos::*
//! │       ├── CodeDisclosure
//! │       └── DeploymentNote
//! └── ClosingCta
//! ```
//!
//! Components are normally driven through [`crate::render_page`], but can be
//! composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use liquid_showcase::catalog::CATALOG;
//! use liquid_showcase::components::ShowcaseCard;
//!
//! view! { <ShowcaseCard entry=CATALOG[0] code_open=true /> }
//! ```

mod card;
mod closing_cta;
mod deployment_note;
pub mod demos;
mod disclosure;
mod document;
mod hero;
mod icons;

pub use card::ShowcaseCard;
pub use closing_cta::{CTA_COPY, CTA_HEADING, ClosingCta};
pub use deployment_note::{DEPLOYMENT_NOTE, DEPLOYMENT_NOTE_TITLE, DeploymentNote};
pub use disclosure::{CodeDisclosure, DISCLOSURE_LABEL};
pub use document::{ShowcaseCards, ShowcaseDocument};
pub use hero::{HERO_EYEBROW, HERO_HEADING, HERO_SUBHEADING, Hero};
pub use icons::*;
