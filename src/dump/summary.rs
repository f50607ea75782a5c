use super::Dumper;
use crate::keymap::{
    DiacriticsTable, Keymap, Modifier, MAX_DIACR, MAX_NR_FUNC, MAX_NR_KEYMAPS, NR_KEYS,
};
use crate::pad::PadAdapter;
use crate::utils::OrUnknownExt;
use itertools::Itertools;
use std::fmt::Display;
use std::io::{Result, Write};
use strum::IntoEnumIterator;

fn field(mut w: impl Write, label: &str, value: impl Display) -> Result<()> {
    writeln!(w, "{:<46}{}", format!("{}:", label), value)
}

impl Dumper<'_> {
    /// What the driver reported about itself and the acquired tables
    pub fn dump_summary(
        &self,
        keymap: &Keymap,
        diacritics: &DiacriticsTable,
        mut w: impl Write,
    ) -> Result<()> {
        let metadata = keymap.metadata();
        let driver = &metadata.driver;

        field(
            &mut w,
            "keyboard driver",
            format!("{} {}", driver.name.or_unknown(), driver.version.or_unknown()),
        )?;
        field(&mut w, "keyboard type", driver.keyboard.or_unknown())?;
        field(&mut w, "keyboard mode", metadata.mode)?;
        field(
            &mut w,
            "prefer unicode",
            if metadata.prefer_unicode { "yes" } else { "no" },
        )?;
        field(
            &mut w,
            "keycode range supported by kernel",
            format!("1 - {}", NR_KEYS - 1),
        )?;
        field(&mut w, "max number of actions bindable to a key", MAX_NR_KEYMAPS)?;
        field(&mut w, "number of keymaps in actual use", keymap.combination_count())?;
        match metadata.max_keycode_used {
            Some(keycode) => field(&mut w, "highest keycode in use", keycode)?,
            None => field(&mut w, "highest keycode in use", "none")?,
        }

        writeln!(w, "ranges of action codes supported by kernel:")?;
        {
            let mut inner = PadAdapter::wrap(&mut w);
            for (group, first, last) in self.symbols.group_ranges() {
                writeln!(inner, "0x{:04x} - 0x{:04x}  {}", first, last, group)?;
            }
        }

        field(&mut w, "number of function keys supported by kernel", MAX_NR_FUNC)?;
        field(&mut w, "number of function key strings in use", keymap.func_strings().count())?;
        field(&mut w, "max number of compose definitions", MAX_DIACR)?;
        field(&mut w, "number of compose definitions in actual use", diacritics.len())?;

        Ok(())
    }

    /// Every known symbol by group, then synonyms and modifier names
    pub fn dump_symbols(&self, mut w: impl Write) -> Result<()> {
        writeln!(w, "Symbols recognized by dumpkeys:")?;
        writeln!(w, "(numeric value, symbol)")?;
        writeln!(w)?;

        for (group, entries) in &self.symbols.entries().iter().group_by(|entry| entry.group) {
            writeln!(w, "{}:", group)?;
            let mut inner = PadAdapter::wrap(&mut w);
            for entry in entries {
                writeln!(inner, "0x{:04x}\t{}", entry.code, entry.name)?;
            }
        }

        writeln!(w)?;
        writeln!(w, "The following synonyms are recognized:")?;
        writeln!(w)?;
        for (synonym, official) in self.symbols.synonyms() {
            writeln!(w, "{:<15} for {}", synonym, official)?;
        }

        writeln!(w)?;
        writeln!(w, "Recognized modifier names and their column numbers:")?;
        for modifier in Modifier::iter() {
            writeln!(w, "{}\t\t{:3}", modifier, modifier.mask().bits())?;
        }

        Ok(())
    }
}
