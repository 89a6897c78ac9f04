//! Subcommand handlers.

use crate::config::{OutputTarget, RenderOverrides, ShowcaseConfig, resolve_render};
use crate::error::ShowcaseError;
use anyhow::{Context, Result};
use liquid_showcase::{catalog, render_page};
use std::io::Write;
use tracing::{debug, info};

/// Compose the page and write it to the resolved target.
pub fn render(config: &ShowcaseConfig, overrides: &RenderOverrides) -> Result<()> {
    let resolved = resolve_render(config, overrides)?;
    debug!(
        output = ?resolved.target,
        title = %resolved.options.title,
        open = ?resolved.options.disclosure.open_ids().collect::<Vec<_>>(),
        "resolved render parameters"
    );

    let entries = catalog::catalog();
    let html = render_page(entries, &resolved.options);

    match resolved.target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("failed to write page to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| ShowcaseError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, &html).map_err(|source| ShowcaseError::Write {
                path: path.clone(),
                source,
            })?;
            info!(
                "Rendered {} cards ({} bytes) to {}",
                entries.len(),
                html.len(),
                path.display()
            );
        }
    }
    Ok(())
}

/// Print the catalog, one `id<TAB>name` line per entry or as JSON.
pub fn list(json: bool) -> Result<()> {
    if json {
        let body = serde_json::to_string_pretty(&catalog::summaries())
            .context("failed to serialize catalog")?;
        println!("{}", body);
    } else {
        for entry in catalog::catalog() {
            println!("{}\t{}", entry.id, entry.name);
        }
    }
    Ok(())
}

/// Print one entry's snippet exactly as stored.
pub fn snippet(id: &str) -> Result<()> {
    let entry = catalog::find(id).ok_or_else(|| ShowcaseError::unknown_entry(id))?;
    println!("{}", entry.code);
    Ok(())
}
