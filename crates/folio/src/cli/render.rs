//! # Rendering Module
//!
//! Turns resolved results into terminal frames.
//!
//! [`TerminalView`] is the CLI's [`ViewSync`]: the controller hands it one
//! complete [`VisibilityResult`] per cycle and it renders a frame from it,
//! without ever reading earlier frames back. The command handlers decide
//! which frames to print.
//!
//! ## Text Layout
//!
//! ```text
//! Filter: on | showing 2 of 3 projects
//! Technologies: Node  PHP  [Vue]
//!   Portfolio  Node  [Vue]
//!   Chat       Cobol?  Node
//! ```
//!
//! - Highlighted technologies are bracketed (and colored when color is on).
//! - Only visible projects are listed; the header carries the counts.
//! - A chip for a technology the catalogue does not know ends in `?`.
//! - Names are padded by display width (`unicode-width`), so wide glyphs line up.
//!
//! ## JSON
//!
//! With `--json` every frame is one line of JSON: the full result (hidden
//! projects included) plus project names and resolved chip icons. Unknown
//! chips carry the configured fallback icon.

use super::styles::{names, paint};
use folioapp::model::{Catalogue, Link};
use folioapp::resolver::{ChipView, ItemView, TagView, VisibilityResult};
use folioapp::tags::Tag;
use folioapp::view::ViewSync;
use serde::Serialize;
use std::rc::Rc;
use tracing::error;
use unicode_width::UnicodeWidthStr;

pub const CHIP_SEPARATOR: &str = "  ";
pub const UNKNOWN_MARKER: &str = "?";
pub const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    master_enabled: bool,
    visible_count: usize,
    items: Vec<JsonItem<'a>>,
    tags: &'a [TagView],
}

#[derive(Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    name: &'a str,
    visible: bool,
    chips: Vec<JsonChip<'a>>,
}

#[derive(Serialize)]
struct JsonChip<'a> {
    tag_id: &'a str,
    known: bool,
    icon: Option<&'a str>,
    highlighted: bool,
}

pub struct Renderer {
    catalogue: Rc<Catalogue>,
    fallback_icon: String,
    mode: OutputMode,
    color: bool,
}

impl Renderer {
    pub fn new(catalogue: Rc<Catalogue>, fallback_icon: impl Into<String>, mode: OutputMode) -> Self {
        Self {
            catalogue,
            fallback_icon: fallback_icon.into(),
            mode,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color && self.mode == OutputMode::Text;
        self
    }

    pub fn frame(&self, result: &VisibilityResult) -> String {
        match self.mode {
            OutputMode::Text => self.text_frame(result),
            OutputMode::Json => self.json_frame(result),
        }
    }

    fn text_frame(&self, result: &VisibilityResult) -> String {
        let mut out = String::new();

        let (state_style, state) = if result.master_enabled {
            (names::MASTER_ON, "on")
        } else {
            (names::MASTER_OFF, "off")
        };
        out.push_str(&format!(
            "Filter: {} | {}\n",
            paint(state_style, state, self.color),
            paint(
                names::MUTED,
                &format!(
                    "showing {} of {} projects",
                    result.visible_count(),
                    result.items.len()
                ),
                self.color
            )
        ));

        let tags: Vec<String> = result
            .tags
            .iter()
            .map(|t| self.marker(&t.id, t.highlighted))
            .collect();
        out.push_str(&format!(
            "{} {}\n",
            paint(names::TITLE, "Technologies:", self.color),
            tags.join(CHIP_SEPARATOR)
        ));

        let visible: Vec<&ItemView> = result.items.iter().filter(|i| i.visible).collect();
        if visible.is_empty() {
            out.push_str(&format!(
                "{}{}\n",
                INDENT,
                paint(names::FAINT, "(no matching projects)", self.color)
            ));
            return out;
        }

        let labels: Vec<&str> = visible.iter().map(|i| self.item_name(i)).collect();
        let width = labels.iter().map(|n| n.width()).max().unwrap_or(0);
        for (item, name) in visible.iter().zip(labels) {
            let padding = " ".repeat(width - name.width());
            let chips: Vec<String> = item.chips.iter().map(|c| self.chip(c)).collect();
            let line = format!(
                "{}{}{}{}{}",
                INDENT,
                paint(names::TITLE, name, self.color),
                padding,
                CHIP_SEPARATOR,
                chips.join(CHIP_SEPARATOR)
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    fn json_frame(&self, result: &VisibilityResult) -> String {
        let frame = JsonFrame {
            master_enabled: result.master_enabled,
            visible_count: result.visible_count(),
            items: result
                .items
                .iter()
                .map(|item| JsonItem {
                    id: &item.id,
                    name: self.item_name(item),
                    visible: item.visible,
                    chips: item.chips.iter().map(|c| self.json_chip(c)).collect(),
                })
                .collect(),
            tags: &result.tags,
        };
        to_json_line(&frame)
    }

    fn json_chip<'a>(&'a self, chip: &'a ChipView) -> JsonChip<'a> {
        let icon = if chip.known {
            chip.icon.as_deref()
        } else {
            Some(self.fallback_icon.as_str())
        };
        JsonChip {
            tag_id: &chip.tag_id,
            known: chip.known,
            icon,
            highlighted: chip.highlighted,
        }
    }

    fn item_name<'a>(&'a self, item: &'a ItemView) -> &'a str {
        self.catalogue
            .item(&item.id)
            .map(|i| i.name.as_str())
            .unwrap_or(&item.id)
    }

    fn marker(&self, label: &str, highlighted: bool) -> String {
        if highlighted {
            paint(names::HIGHLIGHT, &format!("[{}]", label), self.color)
        } else {
            label.to_string()
        }
    }

    fn chip(&self, chip: &ChipView) -> String {
        if chip.known {
            self.marker(&chip.tag_id, chip.highlighted)
        } else {
            paint(
                names::UNKNOWN,
                &format!("{}{}", chip.tag_id, UNKNOWN_MARKER),
                self.color,
            )
        }
    }

    /// The known technologies with their icons.
    pub fn tags(&self) -> String {
        let tags = self.catalogue.tags();
        if self.mode == OutputMode::Json {
            return to_json_line(&tags);
        }
        let width = tags.iter().map(|t| t.id.width()).max().unwrap_or(0);
        tags.iter()
            .map(|t: &Tag| {
                let icon = t.icon.as_deref().unwrap_or("-");
                let padding = " ".repeat(width - t.id.width());
                format!(
                    "{}{}{}{}\n",
                    paint(names::TITLE, &t.id, self.color),
                    padding,
                    CHIP_SEPARATOR,
                    paint(names::MUTED, icon, self.color)
                )
            })
            .collect()
    }

    pub fn links(&self) -> String {
        let links = self.catalogue.links();
        if self.mode == OutputMode::Json {
            return to_json_line(&links);
        }
        if links.is_empty() {
            return format!("{}\n", paint(names::FAINT, "(no links)", self.color));
        }
        let width = links.iter().map(|l| l.title.width()).max().unwrap_or(0);
        links
            .iter()
            .map(|l: &Link| {
                let padding = " ".repeat(width - l.title.width());
                format!(
                    "{}{}{}{}\n",
                    paint(names::TITLE, &l.title, self.color),
                    padding,
                    CHIP_SEPARATOR,
                    paint(names::LINK, &l.href, self.color)
                )
            })
            .collect()
    }
}

fn to_json_line<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(mut line) => {
            line.push('\n');
            line
        }
        Err(e) => {
            error!(error = %e, "failed to serialize frame");
            String::new()
        }
    }
}

/// A [`ViewSync`] that renders every result it receives into a frame.
pub struct TerminalView {
    renderer: Renderer,
    frames: Vec<String>,
}

impl TerminalView {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            frames: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Removes and returns the frames rendered so far.
    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }
}

impl ViewSync for TerminalView {
    fn apply(&mut self, result: &VisibilityResult) {
        let frame = self.renderer.frame(result);
        self.frames.push(frame);
    }
}
