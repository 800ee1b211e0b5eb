//! Package and dependency renames across member manifests
//!
//! Used when a project is instantiated from the plugin-manager template: the
//! template's placeholder package name has to be replaced in every member
//! manifest that defines or depends on it.

use toml::Value;

use crate::document::Manifest;

/// Dependency table sections a rename has to visit.
pub const DEPENDENCY_SECTIONS: &[&str] =
    &["dependencies", "dev-dependencies", "build-dependencies"];

/// Set `package.name` to `to` when it currently equals `from`.
///
/// Returns whether the document changed. Manifests without a `[package]`
/// table, or with a different package name, are left untouched.
pub fn rename_package(manifest: &mut Manifest, from: &str, to: &str) -> bool {
    let package = match manifest
        .document_mut()
        .get_mut("package")
        .and_then(Value::as_table_mut)
    {
        Some(package) => package,
        None => return false,
    };

    if package.get("name").and_then(Value::as_str) != Some(from) {
        return false;
    }

    package.insert("name".to_string(), Value::from(to));
    true
}

/// Re-key the dependency `from` to `to` in the given section, keeping the
/// entry's value (version requirement, path, features) as-is.
///
/// Returns whether the document changed.
pub fn rename_dependency(manifest: &mut Manifest, section: &str, from: &str, to: &str) -> bool {
    let table = match manifest
        .document_mut()
        .get_mut(section)
        .and_then(Value::as_table_mut)
    {
        Some(table) => table,
        None => return false,
    };

    match table.remove(from) {
        Some(entry) => {
            table.insert(to.to_string(), entry);
            true
        }
        None => false,
    }
}
