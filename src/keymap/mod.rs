//! In-memory model of the kernel's keyboard translation table.
//!
//! A [`Keymap`] is a sparse table indexed by keycode and modifier
//! combination. Cells that were never bound at all are simply absent and
//! read back as [`KeyAction::Hole`]; a cell that is bound to "nothing" is
//! stored as [`KeyAction::Empty`].

use std::collections::{BTreeMap, BTreeSet};
use strum_macros::Display;

mod acquire;
mod modifiers;

pub use acquire::{AcquisitionError, KeyboardDriver};
pub use modifiers::{Modifier, ModifierMask};

/// Number of keycodes the kernel keeps translations for
pub const NR_KEYS: u16 = 256;
/// Number of modifier tables the kernel can hold
pub const MAX_NR_KEYMAPS: u16 = 256;
/// Number of function key strings the kernel can hold
pub const MAX_NR_FUNC: u16 = 256;
/// Number of compose definitions the kernel can hold
pub const MAX_DIACR: usize = 256;

/// Number of action code types below the Unicode range
pub const NR_TYPES: u8 = 15;

/// Kernel value for "no action" (`VoidSymbol`)
pub const K_HOLE: u16 = 0x0200;
/// Kernel value reported for a modifier table that is not allocated
pub const K_NOSUCHMAP: u16 = 0x027f;

pub const fn k(typ: u8, val: u8) -> u16 {
    (typ as u16) << 8 | val as u16
}

pub const fn ktyp(code: u16) -> u8 {
    (code >> 8) as u8
}

pub const fn kval(code: u16) -> u8 {
    (code & 0xff) as u8
}

/// Action codes above the typed range carry a Unicode code point
pub const fn is_unicode(code: u16) -> bool {
    ktyp(code) >= NR_TYPES
}

/// Code point of a Unicode action code, or action code of a code point
pub const fn unicode_xor(value: u16) -> u16 {
    value ^ 0xf000
}

/// What one (keycode, modifier combination) cell of the table produces
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyAction {
    /// A named action or a character
    Symbol(u16),
    /// Bound, but to nothing
    Empty,
    /// Not bound at all
    Hole,
}

impl KeyAction {
    pub fn is_hole(self) -> bool {
        self == KeyAction::Hole
    }

    pub fn code(self) -> Option<u16> {
        match self {
            KeyAction::Symbol(code) => Some(code),
            KeyAction::Empty | KeyAction::Hole => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum KeyboardMode {
    Raw,
    Xlate,
    MediumRaw,
    Unicode,
    Off,
}

impl KeyboardMode {
    /// Decode the kernel's `K_*` keyboard mode constant
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(KeyboardMode::Raw),
            1 => Some(KeyboardMode::Xlate),
            2 => Some(KeyboardMode::MediumRaw),
            3 => Some(KeyboardMode::Unicode),
            4 => Some(KeyboardMode::Off),
            _ => None,
        }
    }
}

impl Default for KeyboardMode {
    fn default() -> Self {
        KeyboardMode::Xlate
    }
}

/// Identification reported by the keyboard driver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Kind of keyboard the driver believes is attached
    pub keyboard: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeymapMetadata {
    pub mode: KeyboardMode,
    pub prefer_unicode: bool,
    pub max_keycode_used: Option<u16>,
    pub driver: DriverInfo,
}

/// A full keyboard translation table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
    combinations: BTreeSet<ModifierMask>,
    cells: BTreeMap<(u16, ModifierMask), KeyAction>,
    func_strings: BTreeMap<u8, Vec<u8>>,
    metadata: KeymapMetadata,
}

impl Keymap {
    pub fn new(metadata: KeymapMetadata) -> Self {
        Keymap {
            metadata,
            ..Keymap::default()
        }
    }

    pub fn metadata(&self) -> &KeymapMetadata {
        &self.metadata
    }

    /// Register a modifier combination as defined, even if it binds nothing
    pub fn add_combination(&mut self, mask: ModifierMask) {
        self.combinations.insert(mask);
    }

    /// Store the action of one cell. Storing a hole clears the cell.
    pub fn set(&mut self, keycode: u16, mask: ModifierMask, action: KeyAction) {
        self.combinations.insert(mask);
        if action.is_hole() {
            self.cells.remove(&(keycode, mask));
            return;
        }
        self.cells.insert((keycode, mask), action);
        let max = &mut self.metadata.max_keycode_used;
        if max.map_or(true, |highest| keycode > highest) {
            *max = Some(keycode);
        }
    }

    pub fn get(&self, keycode: u16, mask: ModifierMask) -> KeyAction {
        self.cells
            .get(&(keycode, mask))
            .copied()
            .unwrap_or(KeyAction::Hole)
    }

    /// Defined modifier combinations in ascending order
    pub fn combinations(&self) -> impl Iterator<Item = ModifierMask> + '_ {
        self.combinations.iter().copied()
    }

    pub fn combination_count(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_defined(&self, mask: ModifierMask) -> bool {
        self.combinations.contains(&mask)
    }

    /// Keycodes with at least one non-hole cell, in ascending order
    pub fn keycodes(&self) -> impl Iterator<Item = u16> + '_ {
        let mut last = None;
        self.cells.keys().filter_map(move |&(keycode, _)| {
            if last == Some(keycode) {
                None
            } else {
                last = Some(keycode);
                Some(keycode)
            }
        })
    }

    /// All cells of one keycode, ordered by ascending combination
    pub fn row(&self, keycode: u16) -> Vec<KeyAction> {
        self.combinations()
            .map(|mask| self.get(keycode, mask))
            .collect()
    }

    /// Number of non-hole cells
    pub fn bound_count(&self) -> usize {
        self.cells.len()
    }

    pub fn set_func_string(&mut self, index: u8, value: Vec<u8>) {
        if value.is_empty() {
            self.func_strings.remove(&index);
        } else {
            self.func_strings.insert(index, value);
        }
    }

    /// Function key strings by function index, in ascending order
    pub fn func_strings(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.func_strings.iter().map(|(&i, s)| (i, s.as_slice()))
    }
}

/// One compose rule: `dead` followed by `base` produces `result`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiacriticEntry {
    pub dead: u16,
    pub base: u16,
    pub result: u16,
}

/// The kernel's compose table, in kernel order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiacriticsTable(Vec<DiacriticEntry>);

impl DiacriticsTable {
    pub fn entries(&self) -> &[DiacriticEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DiacriticEntry>> for DiacriticsTable {
    fn from(entries: Vec<DiacriticEntry>) -> Self {
        DiacriticsTable(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cells_are_holes() {
        let mut keymap = Keymap::default();
        keymap.set(3, ModifierMask::PLAIN, KeyAction::Symbol(0x61));
        keymap.set(4, ModifierMask::PLAIN, KeyAction::Empty);
        keymap.set(5, ModifierMask::new(1), KeyAction::Hole);

        assert_eq!(keymap.get(3, ModifierMask::PLAIN), KeyAction::Symbol(0x61));
        assert_eq!(keymap.get(4, ModifierMask::PLAIN), KeyAction::Empty);
        assert_eq!(keymap.get(5, ModifierMask::new(1)), KeyAction::Hole);
        assert_eq!(keymap.keycodes().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(keymap.combination_count(), 2);
        assert_eq!(keymap.metadata().max_keycode_used, Some(4));
    }

    #[test]
    fn rows_follow_combination_order() {
        let mut keymap = Keymap::default();
        keymap.set(30, ModifierMask::new(2), KeyAction::Symbol(0x62));
        keymap.set(30, ModifierMask::PLAIN, KeyAction::Symbol(0x61));
        keymap.add_combination(ModifierMask::new(1));

        assert_eq!(
            keymap.row(30),
            vec![KeyAction::Symbol(0x61), KeyAction::Hole, KeyAction::Symbol(0x62)]
        );
    }

    #[test]
    fn action_code_parts() {
        assert_eq!(k(11, b'a'), 0x0b61);
        assert_eq!(ktyp(0x0b61), 11);
        assert_eq!(kval(0x0b61), 0x61);
        assert!(is_unicode(0xf0e9));
        assert!(!is_unicode(0x0e05));
        assert_eq!(unicode_xor(0xf0e9), 0x00e9);
    }
}
