//! Text renderings of an acquired keyboard.
//!
//! Everything here is pure formatting over data that was read before the
//! first byte is written: a [`Dumper`] never talks to a driver.

use crate::keymap::{is_unicode, unicode_xor, KeyAction, ModifierMask};
use crate::symbols::SymbolTable;
use std::borrow::Cow;
use std::io::{Result, Write};

mod diacritics;
mod funcs;
mod shorthand;
mod summary;
mod table;

/// Layout of the key table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Keycodes with identical rows share one line
    Default,
    /// One line per keycode
    FullTable,
    /// One line per bound (combination, keycode) cell
    SeparateLines,
    /// Per-key short-hand notation understood by the keymap loader
    Shorthand,
    /// Unrecognized layout selector, rendered as [`TableShape::Default`]
    Custom(u8),
}

impl TableShape {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => TableShape::Default,
            1 => TableShape::FullTable,
            2 => TableShape::SeparateLines,
            3 => TableShape::Shorthand,
            code => TableShape::Custom(code),
        }
    }
}

impl Default for TableShape {
    fn default() -> Self {
        TableShape::Default
    }
}

/// Renders keymaps, compose tables and symbol listings
#[derive(Debug, Clone, Copy)]
pub struct Dumper<'a> {
    symbols: &'a SymbolTable,
    numeric: bool,
}

impl<'a> Dumper<'a> {
    pub fn new(symbols: &'a SymbolTable, numeric: bool) -> Self {
        Dumper { symbols, numeric }
    }

    /// Name of an action code, or its numeric form when it has none
    fn code_name(&self, code: u16) -> Cow<'a, str> {
        if !self.numeric {
            if let Some(name) = self.symbols.name_of(code) {
                return name;
            }
        }
        Cow::Owned(numeric_code(code))
    }

    fn action_name(&self, action: KeyAction) -> Cow<'a, str> {
        match action {
            KeyAction::Symbol(code) => self.code_name(code),
            KeyAction::Empty | KeyAction::Hole => Cow::Borrowed(VOID_SYMBOL),
        }
    }

    /// Leading modifier column of a per-combination line
    fn mask_prefix(&self, mask: ModifierMask) -> String {
        if self.numeric {
            return format!("{}\t", mask.bits());
        }
        if mask == ModifierMask::PLAIN {
            return "plain\t".to_string();
        }
        mask.modifiers().map(|m| format!("{}\t", m)).collect()
    }
}

const VOID_SYMBOL: &str = "VoidSymbol";

fn numeric_code(code: u16) -> String {
    if is_unicode(code) {
        format!("U+{:04x}", unicode_xor(code))
    } else {
        format!("0x{:04x}", code)
    }
}

fn write_line(mut w: impl Write, line: &str) -> Result<()> {
    writeln!(w, "{}", line.trim_end())
}
