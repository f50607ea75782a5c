//! Symbolic names of action codes.
//!
//! The [`SymbolTable`] is built once for a chosen [`Charset`] and passed to
//! whatever needs to translate between action codes and keysym names.

use crate::keymap::{is_unicode, k, ktyp, kval, unicode_xor};
use std::{borrow::Cow, collections::HashMap};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub mod charset;
mod tables;

pub use charset::Charset;

/// Action code types, each naming one group of symbols
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum SymbolGroup {
    Latin = 0,
    Fn,
    Spec,
    Pad,
    Dead,
    Cons,
    Cur,
    Shift,
    Meta,
    Ascii,
    Lock,
    Letter,
    SLock,
    Dead2,
    Brl,
}

impl SymbolGroup {
    pub fn action_type(self) -> u8 {
        self as u8
    }

    pub fn from_action_type(typ: u8) -> Option<SymbolGroup> {
        SymbolGroup::iter().find(|group| group.action_type() == typ)
    }

    /// Names of the group by action value; `letter` and `dead2` have none
    /// of their own.
    fn names(self, charset: Charset) -> Vec<(u8, Cow<'static, str>)> {
        fn listed(names: &'static [&'static str]) -> Vec<(u8, Cow<'static, str>)> {
            names
                .iter()
                .enumerate()
                .map(|(value, name)| (value as u8, Cow::Borrowed(*name)))
                .collect()
        }

        fn numbered(names: impl Iterator<Item = String>) -> Vec<(u8, Cow<'static, str>)> {
            names
                .enumerate()
                .map(|(value, name)| (value as u8, Cow::Owned(name)))
                .collect()
        }

        match self {
            SymbolGroup::Latin => {
                let mut names = listed(&tables::ASCII);
                names.extend(
                    (charset::UPPER_START..=u8::MAX)
                        .filter_map(|value| Some((value, Cow::Borrowed(charset.name_of(value)?)))),
                );
                names
            }
            SymbolGroup::Fn => numbered(
                (1..=20)
                    .map(|n| format!("F{}", n))
                    .chain(tables::FN_EDITING.iter().map(|name| name.to_string()))
                    .chain((21..).map(|n| format!("F{}", n)))
                    .take(256),
            ),
            SymbolGroup::Spec => listed(&tables::SPEC),
            SymbolGroup::Pad => listed(&tables::PAD),
            SymbolGroup::Dead => listed(&tables::DEAD),
            SymbolGroup::Cons => numbered((1..=63).map(|n| format!("Console_{}", n))),
            SymbolGroup::Cur => listed(&tables::CUR),
            SymbolGroup::Shift => listed(&tables::SHIFT),
            SymbolGroup::Meta => numbered(tables::ASCII.iter().map(|name| format!("Meta_{}", name))),
            SymbolGroup::Ascii => numbered(
                (0..10)
                    .map(|n| format!("Ascii_{}", n))
                    .chain((0..16).map(|n| format!("Hex_{:X}", n))),
            ),
            SymbolGroup::Lock => listed(&tables::LOCK),
            SymbolGroup::SLock => listed(&tables::SLOCK),
            SymbolGroup::Brl => numbered(
                std::iter::once("Brl_blank".to_string())
                    .chain((1..=10).map(|n| format!("Brl_dot{}", n))),
            ),
            SymbolGroup::Letter | SymbolGroup::Dead2 => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: Cow<'static, str>,
    pub code: u16,
    pub group: SymbolGroup,
}

/// Every keysym name with its action code, grouped by action type
#[derive(Debug, Clone)]
pub struct SymbolTable {
    charset: Charset,
    entries: Vec<SymbolEntry>,
    by_code: HashMap<u16, usize>,
    by_name: HashMap<Cow<'static, str>, u16>,
}

impl SymbolTable {
    pub fn new(charset: Charset) -> SymbolTable {
        let entries: Vec<SymbolEntry> = SymbolGroup::iter()
            .flat_map(|group| {
                group
                    .names(charset)
                    .into_iter()
                    .map(move |(value, name)| SymbolEntry {
                        name,
                        code: k(group.action_type(), value),
                        group,
                    })
            })
            .collect();

        let by_code = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.code, i))
            .collect();
        let mut by_name = HashMap::with_capacity(entries.len());
        for entry in &entries {
            by_name.entry(entry.name.clone()).or_insert(entry.code);
        }

        SymbolTable {
            charset,
            entries,
            by_code,
            by_name,
        }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// All entries, grouped by [`SymbolGroup`] with ascending codes
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Accepted alternative names: (synonym, official name)
    pub fn synonyms(&self) -> &'static [(&'static str, &'static str)] {
        &tables::SYNONYMS
    }

    /// Keysym name of an action code, if it has one
    pub fn name_of(&self, code: u16) -> Option<Cow<'_, str>> {
        if is_unicode(code) {
            let code_point = unicode_xor(code);
            return if code_point < 0x80 {
                self.listed_name(code_point)
            } else {
                self.charset.name_for_unicode(code_point).map(Cow::Borrowed)
            };
        }

        if SymbolGroup::from_action_type(ktyp(code)) == Some(SymbolGroup::Letter) {
            let latin = self.listed_name(k(SymbolGroup::Latin.action_type(), kval(code)))?;
            return Some(Cow::Owned(format!("+{}", latin)));
        }

        self.listed_name(code)
    }

    fn listed_name(&self, code: u16) -> Option<Cow<'_, str>> {
        self.by_code
            .get(&code)
            .map(|&i| Cow::Borrowed(self.entries[i].name.as_ref()))
    }

    /// Action code of a keysym name
    ///
    /// Besides listed names and synonyms this accepts `+x` for letters,
    /// `U+XXXX` for Unicode characters and `0xNNNN` for raw codes.
    pub fn code_of(&self, name: &str) -> Option<u16> {
        if let Some(&code) = self.by_name.get(name) {
            return Some(code);
        }
        if let Some(&(_, official)) = tables::SYNONYMS.iter().find(|(syn, _)| *syn == name) {
            return self.by_name.get(official).copied();
        }
        if let Some(latin) = name.strip_prefix('+') {
            let code = self.by_name.get(latin).copied()?;
            return if ktyp(code) == SymbolGroup::Latin.action_type() {
                Some(k(SymbolGroup::Letter.action_type(), kval(code)))
            } else {
                None
            };
        }
        if let Some(hex) = name.strip_prefix("U+") {
            let code_point = u16::from_str_radix(hex, 16).ok()?;
            return Some(unicode_xor(code_point));
        }
        if let Some(hex) = name.strip_prefix("0x") {
            return u16::from_str_radix(hex, 16).ok();
        }
        None
    }

    /// Lowest and highest listed code of each group that has entries
    pub fn group_ranges(&self) -> Vec<(SymbolGroup, u16, u16)> {
        let mut ranges: Vec<(SymbolGroup, u16, u16)> = Vec::new();
        for entry in &self.entries {
            if let Some(last) = ranges.last_mut() {
                if last.0 == entry.group {
                    last.2 = entry.code;
                    continue;
                }
            }
            ranges.push((entry.group, entry.code, entry.code));
        }
        ranges
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new(Charset::default())
    }
}
