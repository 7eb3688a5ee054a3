use std::collections::{BTreeSet, HashSet};

/// Translation parity test.
/// Ensures every locale defines exactly the same message ids as the default
/// locale (`sv`), with no id defined twice.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<code>/liahub-ui.ftl`
/// 2. Copy all keys from `sv/liahub-ui.ftl`
/// 3. Register the file below and in `Locale::ALL`
#[test]
fn all_locales_define_the_same_keys() {
    const SV: &str = include_str!("../i18n/sv/liahub-ui.ftl");
    const EN: &str = include_str!("../i18n/en/liahub-ui.ftl");

    let default_keys = extract_keys(SV);
    assert!(!default_keys.is_empty(), "Default locale (sv) contains no keys.");
    assert_no_dup_keys(SV, "sv");

    let locales: &[(&str, &str)] = &[
        ("en", EN),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);

        let missing: BTreeSet<&String> = default_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }

        let extra: BTreeSet<&String> = keys.difference(&default_keys).collect();
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to sv:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation parity check failed:\n\n{}\n\nHint: keep ids identical across locales, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn placeholders_match_across_locales() {
    const SV: &str = include_str!("../i18n/sv/liahub-ui.ftl");
    const EN: &str = include_str!("../i18n/en/liahub-ui.ftl");

    for key in ["how-step-counter", "footer-copyright"] {
        assert_eq!(
            placeholders(SV, key),
            placeholders(EN, key),
            "placeholder mismatch for {key}"
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        if let Some(key) = key_of(line) {
            keys.insert(key.to_string());
        }
    }

    keys
}

fn key_of(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let plausible = !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@');
    plausible.then_some(key)
}

/// `$variables` used in the value of `key`.
fn placeholders(src: &str, key: &str) -> BTreeSet<String> {
    src.lines()
        .find(|line| key_of(line) == Some(key))
        .map(|line| {
            line.split('$')
                .skip(1)
                .map(|rest| {
                    rest.chars()
                        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                        .collect()
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = key_of(raw) {
            if !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
