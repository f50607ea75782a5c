use super::Dumper;
use crate::keymap::{k, unicode_xor, DiacriticsTable};
use crate::symbols::SymbolGroup;
use std::io::{Result, Write};

impl Dumper<'_> {
    /// `compose '`' 'a' to agrave` for every compose rule, in table order
    ///
    /// With `prefer_unicode` the characters are Unicode code points,
    /// otherwise they are bytes of the selected charset.
    pub fn dump_diacritics(
        &self,
        table: &DiacriticsTable,
        prefer_unicode: bool,
        mut w: impl Write,
    ) -> Result<()> {
        for entry in table.entries() {
            writeln!(
                w,
                "compose {} {} to {}",
                self.character(entry.dead, prefer_unicode),
                self.character(entry.base, prefer_unicode),
                self.character(entry.result, prefer_unicode),
            )?;
        }
        Ok(())
    }

    fn character(&self, value: u16, prefer_unicode: bool) -> String {
        if self.numeric {
            return format!("0x{:04x}", value);
        }

        if value < 0x80 {
            let c = value as u8;
            if c.is_ascii_graphic() && c != b'\'' && c != b'\\' || c == b' ' {
                return format!("'{}'", c as char);
            }
        } else {
            let name = if prefer_unicode {
                self.symbols.name_of(unicode_xor(value))
            } else if value < 0x100 {
                self.symbols.name_of(k(SymbolGroup::Latin.action_type(), value as u8))
            } else {
                None
            };
            if let Some(name) = name {
                return name.into_owned();
            }
        }

        if value < 0x100 {
            format!("'\\{:03o}'", value)
        } else {
            format!("U+{:04x}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Charset, SymbolTable};

    #[test]
    fn characters_by_range() {
        let symbols = SymbolTable::new(Charset::Iso8859_2);
        let dumper = Dumper::new(&symbols, false);
        assert_eq!(dumper.character(u16::from(b'a'), false), "'a'");
        assert_eq!(dumper.character(u16::from(b'\''), false), "'\\047'");
        assert_eq!(dumper.character(0xb1, false), "aogonek");
        assert_eq!(dumper.character(0x105, true), "aogonek");
        assert_eq!(dumper.character(0xe0, true), "'\\340'");
        assert_eq!(dumper.character(0x20ac, true), "U+20ac");
        assert_eq!(Dumper::new(&symbols, true).character(0x61, false), "0x0061");
    }
}
