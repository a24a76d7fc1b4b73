//! Styles for the folio CLI.
//!
//! Rendering code never picks colors directly. It asks for a semantic style
//! by name (a highlighted tag, a hidden project, an unknown technology) and
//! this module maps the name to a `console::Style`.
//!
//! All styles are built once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared by the renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const HIGHLIGHT: &str = "highlight";
    pub const UNKNOWN: &str = "unknown";
    pub const WARNING: &str = "warning";
    pub const LINK: &str = "link";
    pub const MASTER_ON: &str = "master-on";
    pub const MASTER_OFF: &str = "master-off";
}

static STYLES: Lazy<Vec<(&'static str, Style)>> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    vec![
        (names::TITLE, Style::new().bold()),
        (names::MUTED, muted.clone()),
        (names::FAINT, Style::new().color256(240)),
        (names::HIGHLIGHT, Style::new().black().on_yellow()),
        (names::UNKNOWN, muted.italic()),
        (names::WARNING, Style::new().yellow().bold()),
        (names::LINK, Style::new().cyan().underlined()),
        (names::MASTER_ON, Style::new().green().bold()),
        (names::MASTER_OFF, Style::new().color256(245).bold()),
    ]
});

/// Looks up a style by name. Unknown names yield an unstyled `Style`.
pub fn style(name: &str) -> Style {
    STYLES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, s)| s.clone())
        .unwrap_or_else(Style::new)
}

/// Applies a named style, or returns the text untouched when color is off.
pub fn paint(name: &str, text: &str, color: bool) -> String {
    if color {
        style(name).force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}
