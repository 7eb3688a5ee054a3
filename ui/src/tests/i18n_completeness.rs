use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{Locale, MessageKey, DOMAIN};

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Simple parser: extract message IDs from a Fluent file.
/// We treat any line that starts (after optional whitespace) with:
///    <identifier> =
/// as a message definition. Comments, terms (-prefix), blank lines ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect every `MessageKey::<Variant>` mentioned in `src/`, except in the
/// key table itself.
///
/// NOTE: keys reached only through helper tables (e.g. audience points) are
/// still found, since those tables name the variants directly.
fn referenced_variants(src_root: &Path) -> HashSet<String> {
    let needle = "MessageKey::";
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs")
            || path.file_name().and_then(|s| s.to_str()) == Some("keys.rs")
        {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let variant: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if variant.starts_with(|c: char| c.is_ascii_uppercase()) {
                found.insert(variant);
            }
        }
    }

    found
}

fn locale_keys(i18n_root: &Path, locale: Locale) -> BTreeSet<String> {
    let path = i18n_root.join(locale.code()).join(format!("{DOMAIN}.ftl"));
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn every_message_key_is_defined_in_every_locale() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);

    let mut report = String::new();
    for locale in Locale::ALL {
        let keys = locale_keys(&i18n_root, locale);
        assert!(!keys.is_empty(), "no message ids parsed for {}", locale.code());

        let missing: Vec<&str> = MessageKey::ALL
            .iter()
            .map(|key| key.id())
            .filter(|id| !keys.contains(*id))
            .collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {} ({} missing)\n", locale.code(), missing.len()));
            for id in missing {
                report.push_str(&format!("    {id}\n"));
            }
        }
    }

    if !report.is_empty() {
        panic!("Locales with missing translations:\n{report}");
    }
}

#[test]
fn every_fluent_message_has_a_key() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    let known: HashSet<&str> = MessageKey::ALL.iter().map(|key| key.id()).collect();

    let default_keys = locale_keys(&i18n_root, Locale::default());
    let orphans: Vec<&String> = default_keys
        .iter()
        .filter(|id| !known.contains(id.as_str()))
        .collect();

    assert!(
        orphans.is_empty(),
        "Fluent messages without a MessageKey variant ({}):\n{}",
        orphans.len(),
        orphans
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn unused_keys_are_reported() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_variants(&src_root);
    assert!(!referenced.is_empty(), "no MessageKey references found under src/");

    let unused: Vec<String> = MessageKey::ALL
        .iter()
        .map(|key| format!("{key:?}"))
        .filter(|name| !referenced.contains(name))
        .collect();

    // Only printed; copy for upcoming sections may land before its view.
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} message keys unused in Rust sources:\n{}",
            unused.len(),
            unused.join(", ")
        );
    }
}
