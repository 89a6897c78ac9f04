//! Render the showcase page to disk.
//!
//! Run with: `cargo run --example render_page`

use liquid_showcase::{catalog, disclosure::DisclosureState, render_page, RenderOptions};

fn main() {
    // Open the first card's code so the page shows a snippet on load
    let options = RenderOptions {
        disclosure: DisclosureState::with_open(["gooey-swipe"]),
        ..Default::default()
    };

    let html = render_page(catalog::catalog(), &options);

    let output_path = "liquid_showcase.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
