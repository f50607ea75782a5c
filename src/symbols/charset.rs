//! 8-bit character sets used to name the upper half of the latin range.

use snafu::{OptionExt, Snafu};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// First character code with a charset-specific name
pub const UPPER_START: u8 = 0xa0;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, Display)]
pub enum Charset {
    #[strum(to_string = "iso-8859-1")]
    Iso8859_1,
    #[strum(to_string = "iso-8859-2")]
    Iso8859_2,
    #[strum(to_string = "iso-8859-15")]
    Iso8859_15,
}

impl Default for Charset {
    fn default() -> Self {
        Charset::Iso8859_1
    }
}

impl Charset {
    /// Look up a charset by name, ignoring case
    pub fn select(name: &str) -> Result<Charset, Error> {
        Charset::iter()
            .find(|charset| charset.to_string().eq_ignore_ascii_case(name))
            .context(UnknownCharset { name })
    }

    /// Names of all supported charsets, comma separated
    pub fn supported() -> String {
        Charset::iter()
            .map(|charset| charset.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn entry(self, value: u8) -> Option<(&'static str, u16)> {
        if value < UPPER_START {
            return None;
        }
        if self == Charset::Iso8859_15 {
            if let Some(&(_, name, unicode)) =
                LATIN9_CHANGES.iter().find(|(code, _, _)| *code == value)
            {
                return Some((name, unicode));
            }
        }
        let table = match self {
            Charset::Iso8859_1 | Charset::Iso8859_15 => &LATIN1,
            Charset::Iso8859_2 => &LATIN2,
        };
        Some(table[usize::from(value - UPPER_START)])
    }

    /// Keysym name of an 8-bit character code
    pub fn name_of(self, value: u8) -> Option<&'static str> {
        self.entry(value).map(|(name, _)| name)
    }

    /// Keysym name of a Unicode code point, if this charset contains it
    pub fn name_for_unicode(self, code_point: u16) -> Option<&'static str> {
        (UPPER_START..=u8::MAX)
            .filter_map(|value| self.entry(value))
            .find(|(_, unicode)| *unicode == code_point)
            .map(|(name, _)| name)
    }
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "unknown charset `{}` (supported: {})",
        name,
        Charset::supported()
    ))]
    UnknownCharset {
        name: String,
        backtrace: snafu::Backtrace,
    },
}

/// Positions where ISO 8859-15 differs from ISO 8859-1
const LATIN9_CHANGES: [(u8, &str, u16); 8] = [
    (0xa4, "euro", 0x20ac),
    (0xa6, "Scaron", 0x0160),
    (0xa8, "scaron", 0x0161),
    (0xb4, "Zcaron", 0x017d),
    (0xb8, "zcaron", 0x017e),
    (0xbc, "OE", 0x0152),
    (0xbd, "oe", 0x0153),
    (0xbe, "Ydiaeresis", 0x0178),
];

const LATIN1: [(&str, u16); 96] = [
    ("nobreakspace", 0x00a0),
    ("exclamdown", 0x00a1),
    ("cent", 0x00a2),
    ("sterling", 0x00a3),
    ("currency", 0x00a4),
    ("yen", 0x00a5),
    ("brokenbar", 0x00a6),
    ("section", 0x00a7),
    ("diaeresis", 0x00a8),
    ("copyright", 0x00a9),
    ("ordfeminine", 0x00aa),
    ("guillemotleft", 0x00ab),
    ("notsign", 0x00ac),
    ("hyphen", 0x00ad),
    ("registered", 0x00ae),
    ("macron", 0x00af),
    ("degree", 0x00b0),
    ("plusminus", 0x00b1),
    ("twosuperior", 0x00b2),
    ("threesuperior", 0x00b3),
    ("acute", 0x00b4),
    ("mu", 0x00b5),
    ("paragraph", 0x00b6),
    ("periodcentered", 0x00b7),
    ("cedilla", 0x00b8),
    ("onesuperior", 0x00b9),
    ("masculine", 0x00ba),
    ("guillemotright", 0x00bb),
    ("onequarter", 0x00bc),
    ("onehalf", 0x00bd),
    ("threequarters", 0x00be),
    ("questiondown", 0x00bf),
    ("Agrave", 0x00c0),
    ("Aacute", 0x00c1),
    ("Acircumflex", 0x00c2),
    ("Atilde", 0x00c3),
    ("Adiaeresis", 0x00c4),
    ("Aring", 0x00c5),
    ("AE", 0x00c6),
    ("Ccedilla", 0x00c7),
    ("Egrave", 0x00c8),
    ("Eacute", 0x00c9),
    ("Ecircumflex", 0x00ca),
    ("Ediaeresis", 0x00cb),
    ("Igrave", 0x00cc),
    ("Iacute", 0x00cd),
    ("Icircumflex", 0x00ce),
    ("Idiaeresis", 0x00cf),
    ("ETH", 0x00d0),
    ("Ntilde", 0x00d1),
    ("Ograve", 0x00d2),
    ("Oacute", 0x00d3),
    ("Ocircumflex", 0x00d4),
    ("Otilde", 0x00d5),
    ("Odiaeresis", 0x00d6),
    ("multiply", 0x00d7),
    ("Ooblique", 0x00d8),
    ("Ugrave", 0x00d9),
    ("Uacute", 0x00da),
    ("Ucircumflex", 0x00db),
    ("Udiaeresis", 0x00dc),
    ("Yacute", 0x00dd),
    ("THORN", 0x00de),
    ("ssharp", 0x00df),
    ("agrave", 0x00e0),
    ("aacute", 0x00e1),
    ("acircumflex", 0x00e2),
    ("atilde", 0x00e3),
    ("adiaeresis", 0x00e4),
    ("aring", 0x00e5),
    ("ae", 0x00e6),
    ("ccedilla", 0x00e7),
    ("egrave", 0x00e8),
    ("eacute", 0x00e9),
    ("ecircumflex", 0x00ea),
    ("ediaeresis", 0x00eb),
    ("igrave", 0x00ec),
    ("iacute", 0x00ed),
    ("icircumflex", 0x00ee),
    ("idiaeresis", 0x00ef),
    ("eth", 0x00f0),
    ("ntilde", 0x00f1),
    ("ograve", 0x00f2),
    ("oacute", 0x00f3),
    ("ocircumflex", 0x00f4),
    ("otilde", 0x00f5),
    ("odiaeresis", 0x00f6),
    ("division", 0x00f7),
    ("oslash", 0x00f8),
    ("ugrave", 0x00f9),
    ("uacute", 0x00fa),
    ("ucircumflex", 0x00fb),
    ("udiaeresis", 0x00fc),
    ("yacute", 0x00fd),
    ("thorn", 0x00fe),
    ("ydiaeresis", 0x00ff),
];

const LATIN2: [(&str, u16); 96] = [
    ("nobreakspace", 0x00a0),
    ("Aogonek", 0x0104),
    ("breve", 0x02d8),
    ("Lstroke", 0x0141),
    ("currency", 0x00a4),
    ("Lcaron", 0x013d),
    ("Sacute", 0x015a),
    ("section", 0x00a7),
    ("diaeresis", 0x00a8),
    ("Scaron", 0x0160),
    ("Scedilla", 0x015e),
    ("Tcaron", 0x0164),
    ("Zacute", 0x0179),
    ("hyphen", 0x00ad),
    ("Zcaron", 0x017d),
    ("Zabovedot", 0x017b),
    ("degree", 0x00b0),
    ("aogonek", 0x0105),
    ("ogonek", 0x02db),
    ("lstroke", 0x0142),
    ("acute", 0x00b4),
    ("lcaron", 0x013e),
    ("sacute", 0x015b),
    ("caron", 0x02c7),
    ("cedilla", 0x00b8),
    ("scaron", 0x0161),
    ("scedilla", 0x015f),
    ("tcaron", 0x0165),
    ("zacute", 0x017a),
    ("doubleacute", 0x02dd),
    ("zcaron", 0x017e),
    ("zabovedot", 0x017c),
    ("Racute", 0x0154),
    ("Aacute", 0x00c1),
    ("Acircumflex", 0x00c2),
    ("Abreve", 0x0102),
    ("Adiaeresis", 0x00c4),
    ("Lacute", 0x0139),
    ("Cacute", 0x0106),
    ("Ccedilla", 0x00c7),
    ("Ccaron", 0x010c),
    ("Eacute", 0x00c9),
    ("Eogonek", 0x0118),
    ("Ediaeresis", 0x00cb),
    ("Ecaron", 0x011a),
    ("Iacute", 0x00cd),
    ("Icircumflex", 0x00ce),
    ("Dcaron", 0x010e),
    ("Dstroke", 0x0110),
    ("Nacute", 0x0143),
    ("Ncaron", 0x0147),
    ("Oacute", 0x00d3),
    ("Ocircumflex", 0x00d4),
    ("Odoubleacute", 0x0150),
    ("Odiaeresis", 0x00d6),
    ("multiply", 0x00d7),
    ("Rcaron", 0x0158),
    ("Uring", 0x016e),
    ("Uacute", 0x00da),
    ("Udoubleacute", 0x0170),
    ("Udiaeresis", 0x00dc),
    ("Yacute", 0x00dd),
    ("Tcedilla", 0x0162),
    ("ssharp", 0x00df),
    ("racute", 0x0155),
    ("aacute", 0x00e1),
    ("acircumflex", 0x00e2),
    ("abreve", 0x0103),
    ("adiaeresis", 0x00e4),
    ("lacute", 0x013a),
    ("cacute", 0x0107),
    ("ccedilla", 0x00e7),
    ("ccaron", 0x010d),
    ("eacute", 0x00e9),
    ("eogonek", 0x0119),
    ("ediaeresis", 0x00eb),
    ("ecaron", 0x011b),
    ("iacute", 0x00ed),
    ("icircumflex", 0x00ee),
    ("dcaron", 0x010f),
    ("dstroke", 0x0111),
    ("nacute", 0x0144),
    ("ncaron", 0x0148),
    ("oacute", 0x00f3),
    ("ocircumflex", 0x00f4),
    ("odoubleacute", 0x0151),
    ("odiaeresis", 0x00f6),
    ("division", 0x00f7),
    ("rcaron", 0x0159),
    ("uring", 0x016f),
    ("uacute", 0x00fa),
    ("udoubleacute", 0x0171),
    ("udiaeresis", 0x00fc),
    ("yacute", 0x00fd),
    ("tcedilla", 0x0163),
    ("abovedot", 0x02d9),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_name_ignoring_case() {
        assert_eq!(Charset::select("ISO-8859-2").unwrap(), Charset::Iso8859_2);
        assert_eq!(Charset::select("iso-8859-15").unwrap(), Charset::Iso8859_15);
        assert!(Charset::select("koi8-r").is_err());
        assert!(Charset::select("").is_err());
    }

    #[test]
    fn unknown_charset_lists_supported_ones() {
        let err = Charset::select("klingon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown charset `klingon` (supported: iso-8859-1, iso-8859-2, iso-8859-15)"
        );
    }

    #[test]
    fn upper_half_names() {
        assert_eq!(Charset::Iso8859_1.name_of(0xe9), Some("eacute"));
        assert_eq!(Charset::Iso8859_2.name_of(0xb1), Some("aogonek"));
        assert_eq!(Charset::Iso8859_15.name_of(0xa4), Some("euro"));
        assert_eq!(Charset::Iso8859_15.name_of(0xe9), Some("eacute"));
        assert_eq!(Charset::Iso8859_1.name_of(0x9f), None);
        assert_eq!(Charset::Iso8859_1.name_of(0x41), None);
    }

    #[test]
    fn unicode_mapping() {
        assert_eq!(Charset::Iso8859_2.name_for_unicode(0x0104), Some("Aogonek"));
        assert_eq!(Charset::Iso8859_15.name_for_unicode(0x0178), Some("Ydiaeresis"));
        assert_eq!(Charset::Iso8859_1.name_for_unicode(0x00e0), Some("agrave"));
        assert_eq!(Charset::Iso8859_2.name_for_unicode(0x0142), Some("lstroke"));
        assert_eq!(Charset::Iso8859_1.name_for_unicode(0x20ac), None);
        assert_eq!(Charset::Iso8859_15.name_for_unicode(0x20ac), Some("euro"));
    }
}
