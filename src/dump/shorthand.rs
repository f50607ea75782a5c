//! Per-key short-hand notation.
//!
//! The keymap loader fills in a lot on its own: a single action on a line
//! applies to every defined table, a lone latin letter expands to its
//! shifted, control and meta variants, and with `alt_is_meta` every Alt
//! table mirrors the Meta version of its base table. Cells the loader would
//! regenerate anyway are left out here.

use super::{table::heading, write_line, Dumper};
use crate::keymap::{k, ktyp, kval, KeyAction, Keymap, Modifier, ModifierMask};
use crate::symbols::SymbolGroup;
use std::io::{Result, Write};

const LATIN: u8 = SymbolGroup::Latin as u8;
const LETTER: u8 = SymbolGroup::Letter as u8;
const META: u8 = SymbolGroup::Meta as u8;

impl Dumper<'_> {
    pub(super) fn write_shorthand(
        &self,
        keymap: &Keymap,
        combinations: &[ModifierMask],
        mut w: impl Write,
    ) -> Result<()> {
        let alt_is_meta = alt_is_meta(keymap, combinations);
        if alt_is_meta {
            writeln!(w, "alt_is_meta")?;
        }

        for keycode in keymap.keycodes() {
            let mut row = keymap.row(keycode);

            if !self.numeric {
                if let Some(value) = plain_letter(&row, combinations) {
                    let name = self.code_name(k(LATIN, value));
                    write_line(&mut w, &format!("{} {}", heading(&[keycode]), name))?;
                    continue;
                }
            }

            if alt_is_meta {
                zap_meta(keymap, keycode, combinations, &mut row);
            }

            let len = row.iter().rposition(|a| !a.is_hole()).map_or(0, |i| i + 1);
            if len == 0 {
                continue;
            }
            let (row, combinations) = (&row[..len], &combinations[..len]);

            let first = row[0];
            let (same, differing) = row[1..]
                .iter()
                .filter(|a| !a.is_hole())
                .fold((0, 0), |(same, differing), &a| {
                    if a == first {
                        (same + 1, differing)
                    } else {
                        (same, differing + 1)
                    }
                });

            if !first.is_hole() && differing <= same && differing + 1 < len {
                let line = format!("{} {}", heading(&[keycode]), self.action_name(first));
                write_line(&mut w, &line)?;
                for (&mask, &action) in combinations.iter().zip(row).skip(1) {
                    if !action.is_hole() && action != first {
                        self.write_cell_line(mask, keycode, action, &mut w)?;
                    }
                }
            } else {
                self.write_row(&[keycode], row, combinations, &mut w)?;
            }
        }
        Ok(())
    }
}

/// Meta version of a 7-bit latin or letter action
fn meta_of(action: KeyAction) -> Option<KeyAction> {
    let code = action.code()?;
    let typ = ktyp(code);
    if (typ == LATIN || typ == LETTER) && kval(code) < 0x80 {
        Some(KeyAction::Symbol(k(META, kval(code))))
    } else {
        None
    }
}

/// Every Alt table cell holds the Meta version of its base table cell,
/// wherever the base has one, and at least one such pair exists.
fn alt_is_meta(keymap: &Keymap, combinations: &[ModifierMask]) -> bool {
    let pairs: Vec<(ModifierMask, ModifierMask)> = combinations
        .iter()
        .filter(|mask| mask.contains(Modifier::Alt))
        .map(|&mask| (mask, mask.without(Modifier::Alt)))
        .filter(|(_, base)| keymap.is_defined(*base))
        .collect();

    let mut checked = 0;
    for keycode in keymap.keycodes() {
        for &(alt, base) in &pairs {
            if let Some(meta) = meta_of(keymap.get(keycode, base)) {
                if keymap.get(keycode, alt) != meta {
                    return false;
                }
                checked += 1;
            }
        }
    }
    checked > 0
}

/// Clear the Alt cells the loader derives from `alt_is_meta`
fn zap_meta(keymap: &Keymap, keycode: u16, combinations: &[ModifierMask], row: &mut [KeyAction]) {
    for (i, &mask) in combinations.iter().enumerate() {
        if !mask.contains(Modifier::Alt) {
            continue;
        }
        let base = mask.without(Modifier::Alt);
        if keymap.is_defined(base) && meta_of(keymap.get(keycode, base)) == Some(row[i]) {
            row[i] = KeyAction::Hole;
        }
    }
}

/// What the loader generates for a lone lowercase letter in table `bits`
fn letter_cell(value: u8, bits: u16) -> KeyAction {
    match bits {
        0 | 2 => KeyAction::Symbol(k(LETTER, value)),
        1 | 3 => KeyAction::Symbol(k(LETTER, value ^ 0x20)),
        4..=7 => KeyAction::Symbol(k(LATIN, value & !0x60)),
        8..=15 => {
            let base = letter_cell(value, bits - 8);
            meta_of(base).unwrap_or(base)
        }
        _ => KeyAction::Hole,
    }
}

/// The latin value of a row that is exactly a lone letter's expansion
fn plain_letter(row: &[KeyAction], combinations: &[ModifierMask]) -> Option<u8> {
    let code = row
        .iter()
        .zip(combinations)
        .find(|(_, mask)| **mask == ModifierMask::PLAIN)?
        .0
        .code()?;
    let value = kval(code);
    if ktyp(code) != LETTER || !value.is_ascii_lowercase() {
        return None;
    }

    let expected = combinations
        .iter()
        .zip(row)
        .all(|(mask, &action)| action == letter_cell(value, mask.bits()));
    if expected {
        Some(value)
    } else {
        None
    }
}
