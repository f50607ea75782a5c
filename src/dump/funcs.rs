use super::Dumper;
use crate::keymap::{k, Keymap};
use crate::symbols::SymbolGroup;
use std::io::{Result, Write};

impl Dumper<'_> {
    /// `string F1 = "\033[[A"` for every function key with a string
    pub fn dump_funcs(&self, keymap: &Keymap, mut w: impl Write) -> Result<()> {
        for (index, value) in keymap.func_strings() {
            let name = self
                .symbols
                .name_of(k(SymbolGroup::Fn.action_type(), index))
                .map(|name| name.into_owned())
                .unwrap_or_else(|| format!("F{}", u16::from(index) + 1));
            writeln!(w, "string {} = \"{}\"", name, escape(value))?;
        }
        Ok(())
    }
}

fn escape(value: &[u8]) -> String {
    let mut out = String::with_capacity(value.len());
    for &byte in value {
        match byte {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            b' ' => out.push(' '),
            byte if byte.is_ascii_graphic() => out.push(byte as char),
            byte => out.push_str(&format!("\\{:03o}", byte)),
        }
    }
    out
}
