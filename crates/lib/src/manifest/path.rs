//! Host-independent path keys.
//!
//! Files directly under the bundle root are addressed by bare name (`hack.js`).
//! Nested files keep their directory prefix behind a leading separator
//! (`/lib/heap.js`), which is how the host runtime names nested scripts.

use std::path::{Component, Path};

/// Compute the manifest key for a path relative to the bundle root.
///
/// Returns `None` for an empty path (the root itself).
pub fn relative_key(relative: &Path) -> Option<String> {
  let parts: Vec<String> = relative
    .components()
    .filter_map(|c| match c {
      Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
      _ => None,
    })
    .collect();
  join_parts(&parts)
}

/// Normalize a user-supplied name so it compares equal to a manifest key.
///
/// Accepts either separator and an optional `./` or `/` prefix, so
/// `dir/b.js`, `./dir/b.js` and `/dir/b.js` all name `/dir/b.js`.
pub fn normalize_requested(name: &str) -> String {
  let parts: Vec<String> = name
    .split(['/', '\\'])
    .filter(|part| !part.is_empty() && *part != ".")
    .map(str::to_string)
    .collect();
  join_parts(&parts).unwrap_or_default()
}

fn join_parts(parts: &[String]) -> Option<String> {
  match parts {
    [] => None,
    [name] => Some(name.clone()),
    nested => Some(format!("/{}", nested.join("/"))),
  }
}
