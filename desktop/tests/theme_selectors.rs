#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the layout selectors used by `DesktopShell` and the shared views stay
present in the unified theme (`ui/assets/theme/main.css`). A substring check
is enough as an early warning; if you rename a selector, update the markup
and `REQUIRED_SELECTORS` together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".app-shell {",
    ".app-shell__content {",
    ".page {",
    ".page-not-found__path",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn narrow_layout_block_matches_sidebar_breakpoint() {
    // One pixel below the width from which the sidebar is pinned.
    let narrow = format!("@media (max-width: {}px)", ui::sidebar::WIDE_BREAKPOINT_PX - 1);
    assert!(
        THEME_CSS.contains(&narrow),
        "Theme narrow-layout block drifted from the sidebar breakpoint (expected `{narrow}`)"
    );
}
