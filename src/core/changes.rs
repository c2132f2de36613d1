//! Change-list parsing, pairing, filtering, and selector indexing.
//!
//! The fetched list is one token per line: line 2k is an old class
//! name, line 2k+1 the replacement. Only pairs that differ and involve
//! underscore/hyphen naming are acted on — the tool targets a
//! naming-convention migration and must not touch unrelated renames.

use std::collections::HashMap;

/// One rename directive from the change list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub old_class: String,
    pub new_class: String,
}

/// Lookup from a class selector (`.old-name`) to its rename directive.
/// Last-write-wins when an old class name repeats in the list.
pub type SelectorIndex = HashMap<String, ChangeEntry>;

/// Splits raw change-list text into trimmed, non-empty lines.
pub fn parse_entries(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pairs consecutive entries into rename directives. A trailing
/// unpaired entry (odd-length list) is silently dropped.
pub fn pair_entries(entries: &[String]) -> Vec<ChangeEntry> {
    entries
        .chunks_exact(2)
        .map(|pair| ChangeEntry {
            old_class: pair[0].clone(),
            new_class: pair[1].clone(),
        })
        .collect()
}

/// A pair is relevant iff the names differ and at least one of them
/// contains an underscore or hyphen.
pub fn is_relevant(entry: &ChangeEntry) -> bool {
    entry.old_class != entry.new_class
        && (contains_separator(&entry.old_class) || contains_separator(&entry.new_class))
}

fn contains_separator(name: &str) -> bool {
    name.contains('_') || name.contains('-')
}

/// Keeps only relevant pairs, preserving list order.
pub fn filter_relevant(entries: Vec<ChangeEntry>) -> Vec<ChangeEntry> {
    entries.into_iter().filter(is_relevant).collect()
}

/// Builds the selector index, keyed by `"." + old_class`.
pub fn build_selector_index(entries: &[ChangeEntry]) -> SelectorIndex {
    entries
        .iter()
        .map(|entry| (format!(".{}", entry.old_class), entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let parsed = parse_entries("  old_one \n\nnew-one\n   \nfoo\n");
        assert_eq!(parsed, entries(&["old_one", "new-one", "foo"]));
    }

    #[test]
    fn pairing_even_length_list() {
        let pairs = pair_entries(&entries(&["a_1", "b-1", "c_2", "d-2"]));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].old_class, "a_1");
        assert_eq!(pairs[0].new_class, "b-1");
        assert_eq!(pairs[1].old_class, "c_2");
        assert_eq!(pairs[1].new_class, "d-2");
    }

    #[test]
    fn pairing_drops_trailing_unpaired_entry() {
        let pairs = pair_entries(&entries(&["a_1", "b-1", "stray"]));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].old_class, "a_1");
    }

    #[test]
    fn pairing_empty_list() {
        assert!(pair_entries(&[]).is_empty());
    }

    #[test]
    fn identical_pair_is_not_relevant() {
        let entry = ChangeEntry {
            old_class: "same_name".to_string(),
            new_class: "same_name".to_string(),
        };
        assert!(!is_relevant(&entry));
    }

    #[test]
    fn pair_without_separators_is_not_relevant() {
        let entry = ChangeEntry {
            old_class: "foo".to_string(),
            new_class: "bar".to_string(),
        };
        assert!(!is_relevant(&entry));
    }

    #[test]
    fn separator_on_either_side_is_relevant() {
        let underscore_old = ChangeEntry {
            old_class: "foo_bar".to_string(),
            new_class: "foobar".to_string(),
        };
        let hyphen_new = ChangeEntry {
            old_class: "foobar".to_string(),
            new_class: "foo-bar".to_string(),
        };
        assert!(is_relevant(&underscore_old));
        assert!(is_relevant(&hyphen_new));
    }

    #[test]
    fn index_keys_are_dot_prefixed_old_names() {
        let pairs = vec![ChangeEntry {
            old_class: "foo_bar".to_string(),
            new_class: "foo-bar".to_string(),
        }];
        let index = build_selector_index(&pairs);

        assert_eq!(index.len(), 1);
        assert_eq!(index[".foo_bar"].new_class, "foo-bar");
        assert!(!index.contains_key("foo_bar"));
    }

    #[test]
    fn index_duplicate_old_name_last_write_wins() {
        let pairs = vec![
            ChangeEntry {
                old_class: "foo_bar".to_string(),
                new_class: "first-target".to_string(),
            },
            ChangeEntry {
                old_class: "foo_bar".to_string(),
                new_class: "second-target".to_string(),
            },
        ];
        let index = build_selector_index(&pairs);

        assert_eq!(index.len(), 1);
        assert_eq!(index[".foo_bar"].new_class, "second-target");
    }

    #[test]
    fn filter_keeps_order() {
        let pairs = pair_entries(&entries(&[
            "old_one", "new-one", // relevant
            "foo", "foo", // identical
            "foo", "bar", // no separators
            "a_b", "ab", // relevant
        ]));
        let relevant = filter_relevant(pairs);

        assert_eq!(relevant.len(), 2);
        assert_eq!(relevant[0].old_class, "old_one");
        assert_eq!(relevant[1].old_class, "a_b");
    }
}
