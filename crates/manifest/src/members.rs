//! Workspace membership updates
//!
//! The one mutation the tool performs on the workspace manifest: make sure a
//! fixed set of sub-project paths is listed in `workspace.members`.

use toml::Value;

use crate::document::Manifest;
use crate::error::{Error, Result};

/// Outcome of a single required member check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberOutcome {
    /// The entry was already listed in `workspace.members`.
    AlreadyPresent,
    /// The entry was appended to `workspace.members`.
    Added,
}

/// Per-entry outcomes of an [`ensure_members`] run, in required-entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberReport {
    entries: Vec<(String, MemberOutcome)>,
}

impl MemberReport {
    /// Iterate over `(member, outcome)` pairs in required-entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MemberOutcome)> + '_ {
        self.entries
            .iter()
            .map(|(member, outcome)| (member.as_str(), *outcome))
    }

    /// Number of entries that were appended.
    pub fn added(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == MemberOutcome::Added)
            .count()
    }

    /// True when at least one entry was appended.
    pub fn changed(&self) -> bool {
        self.added() > 0
    }
}

/// Ensure every entry of `required` is listed in `workspace.members`.
///
/// Entries already present are left untouched; missing entries are appended
/// to the end of the list in the order given. Membership is exact string
/// equality, with no path normalization of any kind.
///
/// Returns [`Error::Schema`] if `workspace.members` does not resolve to an
/// array of strings. The document is not modified on that path.
pub fn ensure_members(manifest: &mut Manifest, required: &[&str]) -> Result<MemberReport> {
    let members = workspace_members_mut(manifest.document_mut())?;

    let mut entries = Vec::with_capacity(required.len());
    for member in required {
        if members.iter().any(|entry| entry.as_str() == Some(*member)) {
            entries.push(((*member).to_string(), MemberOutcome::AlreadyPresent));
        } else {
            members.push(Value::from(*member));
            entries.push(((*member).to_string(), MemberOutcome::Added));
        }
    }

    let report = MemberReport { entries };
    tracing::debug!(
        "Checked {} required member(s), appended {}",
        required.len(),
        report.added()
    );

    Ok(report)
}

/// Resolve `workspace.members` as a mutable string array.
fn workspace_members_mut(document: &mut Value) -> Result<&mut Vec<Value>> {
    let workspace = document
        .get_mut("workspace")
        .ok_or_else(|| Error::Schema("missing [workspace] table".to_string()))?
        .as_table_mut()
        .ok_or_else(|| Error::Schema("workspace must be a table".to_string()))?;

    let members = workspace
        .get_mut("members")
        .ok_or_else(|| Error::Schema("missing workspace.members".to_string()))?
        .as_array_mut()
        .ok_or_else(|| Error::Schema("workspace.members must be an array".to_string()))?;

    if let Some(entry) = members.iter().find(|entry| !entry.is_str()) {
        return Err(Error::Schema(format!(
            "workspace.members must contain only strings, found a {}",
            entry.type_str()
        )));
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_from(raw: &str) -> (tempfile::TempDir, Manifest) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        std::fs::write(&path, raw).unwrap();
        let manifest = Manifest::load(&path).unwrap();
        (dir, manifest)
    }

    fn member_list(manifest: &Manifest) -> Vec<String> {
        manifest.document()["workspace"]["members"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn appends_missing_members_in_order() {
        let (_dir, mut manifest) = manifest_from("[workspace]\nmembers = [\"a\", \"b\"]\n");

        let report = ensure_members(&mut manifest, &["a", "x", "y"]).unwrap();

        assert_eq!(member_list(&manifest), vec!["a", "b", "x", "y"]);
        let outcomes: Vec<_> = report.iter().collect();
        assert_eq!(
            outcomes,
            vec![
                ("a", MemberOutcome::AlreadyPresent),
                ("x", MemberOutcome::Added),
                ("y", MemberOutcome::Added),
            ]
        );
    }

    #[test]
    fn duplicate_required_entry_is_appended_once() {
        let (_dir, mut manifest) = manifest_from("[workspace]\nmembers = []\n");

        let report = ensure_members(&mut manifest, &["p", "p"]).unwrap();

        assert_eq!(member_list(&manifest), vec!["p"]);
        let outcomes: Vec<_> = report.iter().collect();
        assert_eq!(
            outcomes,
            vec![
                ("p", MemberOutcome::Added),
                ("p", MemberOutcome::AlreadyPresent),
            ]
        );
    }

    #[test]
    fn unchanged_report_when_all_present() {
        let (_dir, mut manifest) = manifest_from("[workspace]\nmembers = [\"a\", \"b\"]\n");

        let report = ensure_members(&mut manifest, &["b", "a"]).unwrap();

        assert!(!report.changed());
        assert_eq!(report.added(), 0);
        assert_eq!(member_list(&manifest), vec!["a", "b"]);
    }

    #[test]
    fn rejects_missing_members_key() {
        let (_dir, mut manifest) = manifest_from("[workspace]\nresolver = \"2\"\n");

        let err = ensure_members(&mut manifest, &["a"]).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn rejects_non_array_members() {
        let (_dir, mut manifest) = manifest_from("[workspace]\nmembers = \"a\"\n");

        let err = ensure_members(&mut manifest, &["a"]).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn rejects_non_string_member_entries() {
        let (_dir, mut manifest) = manifest_from("[workspace]\nmembers = [\"a\", 3]\n");

        let err = ensure_members(&mut manifest, &["a"]).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }
}
