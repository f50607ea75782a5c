use super::MAX_NR_KEYMAPS;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Modifier keys the kernel knows about, in bit order
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Modifier {
    Shift = 0,
    AltGr,
    Control,
    Alt,
    ShiftL,
    ShiftR,
    CtrlL,
    CtrlR,
    CapsShift,
}

impl Modifier {
    pub fn bit(self) -> u16 {
        self as u16
    }

    pub fn mask(self) -> ModifierMask {
        ModifierMask(1 << self.bit())
    }
}

/// A set of simultaneously held modifiers, selecting one table of the keymap
///
/// The numeric value of the mask is the kernel's table index.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModifierMask(u16);

impl ModifierMask {
    pub const PLAIN: ModifierMask = ModifierMask(0);

    pub const fn new(bits: u16) -> Self {
        ModifierMask(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.mask().0 != 0
    }

    pub fn with(self, modifier: Modifier) -> Self {
        ModifierMask(self.0 | modifier.mask().0)
    }

    pub fn without(self, modifier: Modifier) -> Self {
        ModifierMask(self.0 & !modifier.mask().0)
    }

    /// Modifiers set in this mask, lowest bit first
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::iter().filter(move |m| self.contains(*m))
    }

    /// Every table index the kernel can hold, in ascending order
    pub fn all() -> impl Iterator<Item = ModifierMask> {
        (0..MAX_NR_KEYMAPS).map(ModifierMask)
    }
}

impl fmt::Display for ModifierMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == ModifierMask::PLAIN {
            return write!(f, "plain");
        }
        for (i, modifier) in self.modifiers().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", modifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_bit_order() {
        let mask = Modifier::Alt.mask().with(Modifier::Shift).with(Modifier::AltGr);
        assert_eq!(mask.bits(), 0b1011);
        assert_eq!(mask.to_string(), "shift+altgr+alt");
        assert_eq!(mask.without(Modifier::Alt).bits(), 0b0011);
        assert_eq!(ModifierMask::PLAIN.to_string(), "plain");
    }

    #[test]
    fn modifier_names_parse() {
        assert_eq!("capsshift".parse::<Modifier>().unwrap(), Modifier::CapsShift);
        assert_eq!(Modifier::CtrlR.mask().bits(), 128);
    }
}
