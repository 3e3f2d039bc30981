//! Border glyph sets for tables.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::str::FromStr;

/// The glyphs used to draw a table grid.
///
/// `top`, `header_separator` and `bottom` are the horizontal runs of the
/// three rule lines; a rule whose run is empty is not drawn at all.
/// `left`, `vertical` and `right` flank and divide cells on content lines.
///
/// A conventional box set with one horizontal glyph maps onto these slots
/// by using that glyph for all three runs, which is what
/// [`from_glyphs`](Self::from_glyphs) and the presets do. Giving the runs
/// different glyphs (for example a heavy rule under the header only) is
/// also allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TableBorder {
    /// Horizontal run of the top rule.
    pub top: String,
    /// Horizontal run of the rule under the header.
    pub header_separator: String,
    /// Horizontal run of the bottom rule.
    pub bottom: String,
    /// Left edge of content lines.
    pub left: String,
    /// Divider between cells.
    pub vertical: String,
    /// Right edge of content lines.
    pub right: String,
    /// Top-left corner.
    pub top_left: String,
    /// Junction on the top rule.
    pub top_mid: String,
    /// Top-right corner.
    pub top_right: String,
    /// Left end of the header rule.
    pub mid_left: String,
    /// Junction on the header rule.
    pub mid: String,
    /// Right end of the header rule.
    pub mid_right: String,
    /// Bottom-left corner.
    pub bottom_left: String,
    /// Junction on the bottom rule.
    pub bottom_mid: String,
    /// Bottom-right corner.
    pub bottom_right: String,
}

impl TableBorder {
    /// Builds a full box from eleven glyphs, in order: horizontal,
    /// vertical, then the top, middle and bottom rows of corners and
    /// junctions (left, mid, right each).
    ///
    /// Returns `None` unless `glyphs` has exactly eleven characters.
    ///
    /// ```rust
    /// use bubblekit::table::TableBorder;
    ///
    /// let b = TableBorder::from_glyphs("─│┌┬┐├┼┤└┴┘").unwrap();
    /// assert_eq!(b.top_left, "┌");
    /// assert_eq!(b.vertical, "│");
    /// ```
    pub fn from_glyphs(glyphs: &str) -> Option<Self> {
        let g: Vec<String> = glyphs.chars().map(String::from).collect();
        if g.len() != 11 {
            return None;
        }
        Some(Self {
            top: g[0].clone(),
            header_separator: g[0].clone(),
            bottom: g[0].clone(),
            left: g[1].clone(),
            vertical: g[1].clone(),
            right: g[1].clone(),
            top_left: g[2].clone(),
            top_mid: g[3].clone(),
            top_right: g[4].clone(),
            mid_left: g[5].clone(),
            mid: g[6].clone(),
            mid_right: g[7].clone(),
            bottom_left: g[8].clone(),
            bottom_mid: g[9].clone(),
            bottom_right: g[10].clone(),
        })
    }
}

fn boxed(glyphs: &str) -> TableBorder {
    TableBorder::from_glyphs(glyphs).unwrap_or_default()
}

/// No rules and no dividers.
pub static NONE: Lazy<TableBorder> = Lazy::new(TableBorder::default);

/// Only a rule under the header; cells divided by a space.
pub static SIMPLE: Lazy<TableBorder> = Lazy::new(|| TableBorder {
    header_separator: "─".to_string(),
    vertical: " ".to_string(),
    mid: " ".to_string(),
    ..TableBorder::default()
});

/// Light box with rounded corners.
pub static ROUNDED: Lazy<TableBorder> = Lazy::new(|| boxed("─│╭┬╮├┼┤╰┴╯"));

/// Light box.
pub static SINGLE: Lazy<TableBorder> = Lazy::new(|| boxed("─│┌┬┐├┼┤└┴┘"));

/// Double-line box.
pub static DOUBLE: Lazy<TableBorder> = Lazy::new(|| boxed("═║╔╦╗╠╬╣╚╩╝"));

/// Heavy box.
pub static THICK: Lazy<TableBorder> = Lazy::new(|| boxed("━┃┏┳┓┣╋┫┗┻┛"));

/// Plain ASCII box.
pub static ASCII: Lazy<TableBorder> = Lazy::new(|| boxed("-|+++++++++"));

static BORDERS: Lazy<BTreeMap<&'static str, &'static TableBorder>> = Lazy::new(|| {
    BTreeMap::from([
        ("none", &*NONE),
        ("simple", &*SIMPLE),
        ("rounded", &*ROUNDED),
        ("single", &*SINGLE),
        ("double", &*DOUBLE),
        ("thick", &*THICK),
        ("ascii", &*ASCII),
    ])
});

/// Names accepted by [`border`], in alphabetical order.
pub fn border_names() -> impl Iterator<Item = &'static str> {
    BORDERS.keys().copied()
}

/// Looks up a border preset by name.
pub fn border(name: &str) -> Result<TableBorder> {
    BORDERS
        .get(name)
        .map(|b| (*b).clone())
        .ok_or_else(|| Error::unknown_preset("border", name))
}

/// Looks up a border preset by name, falling back to [`SINGLE`].
pub fn border_or_default(name: &str) -> TableBorder {
    border(name).unwrap_or_else(|_| {
        tracing::debug!(name, "unknown border preset, using single");
        SINGLE.clone()
    })
}

impl FromStr for TableBorder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        border(s)
    }
}
