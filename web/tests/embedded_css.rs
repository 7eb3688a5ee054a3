#![cfg(test)]
//! The shared theme and navbar stylesheets are bundled through `asset!` and
//! inlined in release native builds. A truncated or moved file only shows up
//! at runtime, so fail here instead.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_files_are_not_empty() {
    assert!(!THEME_CSS.trim().is_empty(), "theme stylesheet is empty");
    assert!(!NAVBAR_CSS.trim().is_empty(), "navbar stylesheet is empty");
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "body {", ".button--primary", ".demo-form"];
    for token in required {
        assert!(
            THEME_CSS.contains(token),
            "Expected token `{token}` missing from theme CSS"
        );
    }
}

#[test]
fn navbar_css_covers_the_navbar_markup() {
    let required = [
        ".navbar__inner",
        ".navbar__brand",
        ".navbar__brand-mark",
        ".navbar__brand-subtitle",
        ".navbar__menu-toggle",
        ".navbar__links",
        ".navbar__links--open",
        ".navbar__link",
        ".navbar__controls",
        ".navbar__locale",
        ".navbar__theme",
    ];
    let missing: Vec<_> = required
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(*sel))
        .collect();
    assert!(missing.is_empty(), "navbar.css is missing {missing:?}");
}
