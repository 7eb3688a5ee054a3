#![cfg(test)]
/*!
Theme selector lint.

Checks that the selectors the shared components render against stay present in
`ui/assets/theme/main.css`. This is a substring check, not a CSS parser.

If a selector is renamed on purpose, update the component markup and
REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "[data-theme=\"dark\"]",
    "body {",
    ".app {",
    ".page {",
    ".icon {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Accents
    ".accent--blue",
    ".accent--green",
    ".accent--purple",
    ".accent--orange",
    ".accent--teal",
    // Landing sections
    ".hero__headline",
    ".hero__scroll-hint",
    ".features__grid",
    ".feature-card",
    ".audiences__tab--active",
    ".audience-card",
    ".audience-card--open",
    ".how__step--active",
    ".how__panel",
    ".how__dot[data-active=\"true\"]",
    ".types__grid",
    ".type-card",
    // Pages
    ".page-lia__grid",
    ".page-demo__learn-more",
    ".page-not-found",
    // Demo form
    ".demo-form__field",
    ".demo-form__field--invalid",
    ".demo-form__error",
    ".demo-form__summary",
    ".demo-form__banner",
    ".demo-form__consent",
    ".demo-form__submit",
    ".demo-form--submitted",
    // Chrome
    ".floating-cta",
    ".floating-cta__button",
    ".footer__grid",
    ".footer__link",
    ".footer__select",
    ".footer__bottom",
    ".footer__legal",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn dark_block_overrides_every_surface_token() {
    let Some((_, dark)) = THEME_CSS.split_once("[data-theme=\"dark\"] {") else {
        panic!("dark token block missing");
    };
    let dark = dark.split('}').next().unwrap_or_default();
    for token in ["--color-bg:", "--color-surface:", "--color-text:", "--color-border:"] {
        assert!(dark.contains(token), "dark block does not override {token}");
    }
}
