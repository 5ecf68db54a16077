//! Theme stylesheet generation.
//!
//! The interactive widget is CSS-only: each panel is hidden by default and
//! one selector per slot ordinal reveals the panel whose radio is checked.
//! Selectors key on `data-slot-index` rather than element ids, so one
//! build-wide table covers every group, sized to the largest group seen.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use ftabs_config::{DEFAULT_COLLAPSIBLE_ACCENT_COLOR, DEFAULT_HIGHLIGHT_COLOR, FilterTabsConfig};

/// Accepts hex colors, named colors, and functional notation like
/// `rgb(…)` / `hsl(…)`.
static COLOR_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?[a-zA-Z0-9\s,().%]+$").expect("color value pattern is valid")
});

/// Validate a configured color for direct interpolation into CSS.
///
/// Falls back to the stock color when the value could carry structural CSS
/// characters, so a bad config cannot break out of the declaration.
pub(crate) fn validated_color<'a>(color: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = color.trim();
    if !trimmed.is_empty()
        && COLOR_VALUE.is_match(trimmed)
        && !trimmed.contains(';')
        && !trimmed.contains('}')
    {
        trimmed
    } else {
        tracing::warn!(color, "invalid color in configuration, using {fallback}");
        fallback
    }
}

/// Generate the build-wide theme stylesheet.
///
/// `max_slots` is the largest slot count observed across the build; the
/// selector table has one rule per ordinal up to the configured cap.
pub(crate) fn generate(config: &FilterTabsConfig, max_slots: usize) -> String {
    let mut out = String::new();
    out.push_str("/* filter-tabs generated theme; do not edit by hand */\n");
    let _ = writeln!(
        out,
        ":root {{\n    --ft-highlight-color: {};\n    --ft-collapsible-accent-color: {};\n}}\n",
        validated_color(&config.highlight_color, DEFAULT_HIGHLIGHT_COLOR),
        validated_color(
            &config.collapsible_accent_color,
            DEFAULT_COLLAPSIBLE_ACCENT_COLOR
        )
    );

    let visible = max_slots.min(config.selector_cap);
    if visible == 0 {
        return out;
    }

    out.push_str("/* Reveal the panel whose radio is checked. Scoped through the\n");
    out.push_str("   tab bar and a child combinator so nested groups stay isolated. */\n");
    let selectors: Vec<String> = (0..visible)
        .map(|k| {
            format!(
                ".ft-tab-bar:has(input[data-slot-index=\"{k}\"]:checked) ~ .ft-content > .ft-panel[data-slot-index=\"{k}\"]"
            )
        })
        .collect();
    let _ = writeln!(out, "{} {{\n    display: block;\n}}", selectors.join(",\n"));

    if max_slots > config.selector_cap {
        // Slots past the cap have no selector; keep the default one visible.
        let _ = writeln!(
            out,
            "\n.ft-content > .ft-panel.ft-overflow-default {{\n    display: block;\n}}"
        );
    }

    out
}
