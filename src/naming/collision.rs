// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Assigns unique final names to a batch of proposed names

use std::collections::HashSet;
use tracing::debug;

/// A proposed name and, for a file being renamed, the name it holds now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchName<'a> {
    pub current: Option<&'a str>,
    pub proposed: &'a str,
}

/// Resolve collisions in input order.
///
/// A proposed name is kept when neither an earlier entry of the batch nor
/// a name in `existing` holds it; otherwise `-2`, `-3`, ... is inserted
/// before the extension until the name is free.
pub fn resolve<S: AsRef<str>>(proposed: &[S], existing: &HashSet<String>) -> Vec<String> {
    let batch: Vec<BatchName<'_>> = proposed
        .iter()
        .map(|p| BatchName {
            current: None,
            proposed: p.as_ref(),
        })
        .collect();
    resolve_batch(&batch, existing, |idx, counter| {
        numbered(batch[idx].proposed, counter)
    })
}

/// Resolve a batch of renames that will be applied in order.
///
/// The current names of batch files stay taken until their own entry has
/// been renamed away, so no entry targets a file that is still in place
/// when its rename runs. An entry may always keep its own current name.
/// `variant(idx, counter)` builds the numbered alternative for entry `idx`.
pub fn resolve_batch<F>(batch: &[BatchName<'_>], existing: &HashSet<String>, variant: F) -> Vec<String>
where
    F: Fn(usize, u64) -> String,
{
    let mut used: HashSet<String> = existing.clone();
    used.extend(batch.iter().filter_map(|b| b.current).map(str::to_string));

    let mut resolved = Vec::with_capacity(batch.len());
    for (idx, entry) in batch.iter().enumerate() {
        let is_free = |name: &str| entry.current == Some(name) || !used.contains(name);

        let final_name = if is_free(entry.proposed) {
            entry.proposed.to_string()
        } else {
            let unique = (2u64..)
                .map(|counter| variant(idx, counter))
                .find(|candidate| is_free(candidate))
                .unwrap_or_else(|| variant(idx, u64::MAX));
            debug!("Name collision: {} -> {}", entry.proposed, unique);
            unique
        };

        if let Some(current) = entry.current {
            if current != final_name {
                used.remove(current);
            }
        }
        used.insert(final_name.clone());
        resolved.push(final_name);
    }

    resolved
}

/// `Report.txt` with counter 2 -> `Report-2.txt`
pub fn numbered(name: &str, counter: u64) -> String {
    let (stem, extension) = split_extension(name);
    format!("{}-{}{}", stem, counter, extension)
}

/// Split `name` into stem and extension (with its dot). A leading dot is
/// part of the stem.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_three_identical_names() {
        let out = resolve(&["Report", "Report", "Report"], &HashSet::new());
        assert_eq!(out, vec!["Report", "Report-2", "Report-3"]);
    }

    #[test]
    fn test_suffix_goes_before_extension() {
        let out = resolve(
            &["2024-01-15 - Report.txt", "2024-01-15 - Report.txt"],
            &HashSet::new(),
        );
        assert_eq!(out, vec!["2024-01-15 - Report.txt", "2024-01-15 - Report-2.txt"]);
    }

    #[test]
    fn test_existing_names_are_avoided() {
        let existing = set(&["report.pdf", "report-2.pdf"]);
        let out = resolve(&["report.pdf", "summary.pdf"], &existing);
        assert_eq!(out, vec!["report-3.pdf", "summary.pdf"]);
    }

    #[test]
    fn test_different_extensions_do_not_collide() {
        let out = resolve(&["Meeting-Notes.txt", "Meeting-Notes.md"], &HashSet::new());
        assert_eq!(out, vec!["Meeting-Notes.txt", "Meeting-Notes.md"]);
    }

    #[test]
    fn test_names_without_extension() {
        let out = resolve(&["README", "README"], &HashSet::new());
        assert_eq!(out, vec!["README", "README-2"]);
    }

    #[test]
    fn test_suffixed_name_already_proposed_later() {
        let out = resolve(&["Report", "Report", "Report-2"], &HashSet::new());
        assert_eq!(out, vec!["Report", "Report-2", "Report-2-2"]);
        let unique: HashSet<&String> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let proposed = ["a.txt", "b.txt", "a.txt", "a.txt", "b.txt"];
        let existing = set(&["a-2.txt"]);
        assert_eq!(resolve(&proposed, &existing), resolve(&proposed, &existing));
        assert_eq!(
            resolve(&proposed, &existing),
            vec!["a.txt", "b.txt", "a-3.txt", "a-4.txt", "b-2.txt"]
        );
    }

    #[test]
    fn test_batch_file_keeps_its_own_name() {
        let batch = [BatchName {
            current: Some("2024-01-15 - Report.txt"),
            proposed: "2024-01-15 - Report.txt",
        }];
        let out = resolve_batch(&batch, &HashSet::new(), |i, n| numbered(batch[i].proposed, n));
        assert_eq!(out, vec!["2024-01-15 - Report.txt"]);
    }

    #[test]
    fn test_earlier_entry_never_takes_a_later_files_name() {
        let batch = [
            BatchName {
                current: Some("1.txt"),
                proposed: "2024-01-15 - Report.txt",
            },
            BatchName {
                current: Some("2024-01-15 - Report.txt"),
                proposed: "2024-01-15 - Report.txt",
            },
        ];
        let out = resolve_batch(&batch, &HashSet::new(), |i, n| numbered(batch[i].proposed, n));
        assert_eq!(out, vec!["2024-01-15 - Report-2.txt", "2024-01-15 - Report.txt"]);
    }

    #[test]
    fn test_name_released_once_renamed_away() {
        // b.txt is renamed before the last entry runs, so its old name is free
        let batch = [
            BatchName {
                current: Some("b.txt"),
                proposed: "c.txt",
            },
            BatchName {
                current: Some("a.txt"),
                proposed: "b.txt",
            },
        ];
        let out = resolve_batch(&batch, &HashSet::new(), |i, n| numbered(batch[i].proposed, n));
        assert_eq!(out, vec!["c.txt", "b.txt"]);
    }

    #[test]
    fn test_variant_builder_is_used() {
        let batch = [
            BatchName { current: None, proposed: "Long-Name.txt" },
            BatchName { current: None, proposed: "Long-Name.txt" },
        ];
        let out = resolve_batch(&batch, &HashSet::new(), |_, n| format!("Long-{}.txt", n));
        assert_eq!(out, vec!["Long-Name.txt", "Long-2.txt"]);
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("Report.txt"), ("Report", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".gitignore"), (".gitignore", ""));
    }
}
