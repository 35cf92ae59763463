//! Manifest inventory rendering for `chefkit show`.

use std::fmt::Write as _;

use chefkit_core::{CATEGORY_TABLE, CookbookManifest};

/// Render the files a manifest lists, grouped by category in table order.
///
/// Empty categories are omitted.
pub fn format_inventory(manifest: &CookbookManifest) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} {})",
        manifest.name, manifest.cookbook_name, manifest.version
    );

    for entry in &CATEGORY_TABLE {
        let items = (entry.items)(manifest);
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", entry.category);
        for item in items {
            let _ = writeln!(out, "  {}", item.name);
        }
    }

    let _ = write!(out, "{} file(s)", manifest.total_files());
    out
}
