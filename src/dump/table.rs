use super::{write_line, Dumper, TableShape};
use crate::keymap::{KeyAction, Keymap, ModifierMask};
use itertools::Itertools;
use log::{debug, warn};
use std::collections::HashMap;
use std::io::{Result, Write};

impl Dumper<'_> {
    /// The `keymaps` line naming every defined combination, e.g. `keymaps 0-2,4`
    pub fn dump_keymaps_line(&self, keymap: &Keymap, mut w: impl Write) -> Result<()> {
        let ranges = mask_ranges(keymap.combinations());
        if ranges.is_empty() {
            return Ok(());
        }
        writeln!(w, "keymaps {}", ranges)
    }

    /// The key table in the requested shape. Holes are never written.
    pub fn dump_keymap(&self, keymap: &Keymap, shape: TableShape, mut w: impl Write) -> Result<()> {
        let combinations: Vec<ModifierMask> = keymap.combinations().collect();

        match shape {
            TableShape::Default => self.write_grouped(keymap, &combinations, &mut w),
            TableShape::FullTable => {
                for keycode in keymap.keycodes() {
                    self.write_row(&[keycode], &keymap.row(keycode), &combinations, &mut w)?;
                }
                Ok(())
            }
            TableShape::SeparateLines => {
                for keycode in keymap.keycodes() {
                    for &mask in &combinations {
                        let action = keymap.get(keycode, mask);
                        if !action.is_hole() {
                            self.write_cell_line(mask, keycode, action, &mut w)?;
                        }
                    }
                }
                Ok(())
            }
            TableShape::Shorthand => self.write_shorthand(keymap, &combinations, &mut w),
            TableShape::Custom(code) => {
                warn!("unknown table shape {}, using the default shape", code);
                self.write_grouped(keymap, &combinations, &mut w)
            }
        }
    }

    /// One line per distinct row, listing every keycode that has it
    fn write_grouped(
        &self,
        keymap: &Keymap,
        combinations: &[ModifierMask],
        mut w: impl Write,
    ) -> Result<()> {
        let mut groups: Vec<(Vec<KeyAction>, Vec<u16>)> = Vec::new();
        let mut index: HashMap<Vec<KeyAction>, usize> = HashMap::new();

        for keycode in keymap.keycodes() {
            let row = keymap.row(keycode);
            match index.get(&row) {
                Some(&i) => groups[i].1.push(keycode),
                None => {
                    index.insert(row.clone(), groups.len());
                    groups.push((row, vec![keycode]));
                }
            }
        }
        debug!("{} distinct rows", groups.len());

        for (row, keycodes) in &groups {
            self.write_row(keycodes, row, combinations, &mut w)?;
        }
        Ok(())
    }

    /// A main line with the cells up to the first hole, then one line per
    /// bound cell past it. A row starting with a hole has no main line.
    pub(super) fn write_row(
        &self,
        keycodes: &[u16],
        row: &[KeyAction],
        combinations: &[ModifierMask],
        mut w: impl Write,
    ) -> Result<()> {
        let first_hole = row.iter().position(|a| a.is_hole()).unwrap_or(row.len());

        if first_hole > 0 {
            let mut line = heading(keycodes);
            for &action in &row[..first_hole] {
                line.push_str(&self.cell(action));
            }
            write_line(&mut w, &line)?;
        }

        for &keycode in keycodes {
            for (&mask, &action) in combinations.iter().zip(row).skip(first_hole) {
                if !action.is_hole() {
                    self.write_cell_line(mask, keycode, action, &mut w)?;
                }
            }
        }
        Ok(())
    }

    /// `<modifiers>keycode N = <action>`
    pub(super) fn write_cell_line(
        &self,
        mask: ModifierMask,
        keycode: u16,
        action: KeyAction,
        w: impl Write,
    ) -> Result<()> {
        let line = format!(
            "{}keycode {:3} = {}",
            self.mask_prefix(mask),
            keycode,
            self.action_name(action)
        );
        write_line(w, &line)
    }

    fn cell(&self, action: KeyAction) -> String {
        format!(" {:<16}", self.action_name(action))
    }
}

pub(super) fn heading(keycodes: &[u16]) -> String {
    format!(
        "keycode {} =",
        keycodes.iter().map(|k| format!("{:3}", k)).join(",")
    )
}

/// `0-2,4,8-9` style listing of ascending masks
fn mask_ranges(masks: impl Iterator<Item = ModifierMask>) -> String {
    let mut ranges: Vec<(u16, u16)> = Vec::new();
    for bits in masks.map(ModifierMask::bits) {
        if let Some(last) = ranges.last_mut() {
            if last.1 + 1 == bits {
                last.1 = bits;
                continue;
            }
        }
        ranges.push((bits, bits));
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .join(",")
}
