//! Keysym names understood by the console keymap tools, per action type.
//!
//! Groups whose names follow a numbering pattern are generated in
//! [`super::SymbolGroup::names`] instead of being spelled out here.

/// Names of the 7-bit latin range, shared by every charset
pub(super) const ASCII: [&str; 128] = [
    "nul",
    "Control_a",
    "Control_b",
    "Control_c",
    "Control_d",
    "Control_e",
    "Control_f",
    "Control_g",
    "BackSpace",
    "Tab",
    "Linefeed",
    "Control_k",
    "Control_l",
    "Control_m",
    "Control_n",
    "Control_o",
    "Control_p",
    "Control_q",
    "Control_r",
    "Control_s",
    "Control_t",
    "Control_u",
    "Control_v",
    "Control_w",
    "Control_x",
    "Control_y",
    "Control_z",
    "Escape",
    "Control_backslash",
    "Control_bracketright",
    "Control_asciicircum",
    "Control_underscore",
    "space",
    "exclam",
    "quotedbl",
    "numbersign",
    "dollar",
    "percent",
    "ampersand",
    "apostrophe",
    "parenleft",
    "parenright",
    "asterisk",
    "plus",
    "comma",
    "minus",
    "period",
    "slash",
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "colon",
    "semicolon",
    "less",
    "equal",
    "greater",
    "question",
    "at",
    "A",
    "B",
    "C",
    "D",
    "E",
    "F",
    "G",
    "H",
    "I",
    "J",
    "K",
    "L",
    "M",
    "N",
    "O",
    "P",
    "Q",
    "R",
    "S",
    "T",
    "U",
    "V",
    "W",
    "X",
    "Y",
    "Z",
    "bracketleft",
    "backslash",
    "bracketright",
    "asciicircum",
    "underscore",
    "grave",
    "a",
    "b",
    "c",
    "d",
    "e",
    "f",
    "g",
    "h",
    "i",
    "j",
    "k",
    "l",
    "m",
    "n",
    "o",
    "p",
    "q",
    "r",
    "s",
    "t",
    "u",
    "v",
    "w",
    "x",
    "y",
    "z",
    "braceleft",
    "bar",
    "braceright",
    "asciitilde",
    "Delete",
];

/// Function keys between F20 and F21
pub(super) const FN_EDITING: [&str; 10] = [
    "Find", "Insert", "Remove", "Select", "Prior", "Next", "Macro", "Help", "Do", "Pause",
];

pub(super) const SPEC: [&str; 20] = [
    "VoidSymbol",
    "Return",
    "Show_Registers",
    "Show_Memory",
    "Show_State",
    "Break",
    "Last_Console",
    "Caps_Lock",
    "Num_Lock",
    "Scroll_Lock",
    "Scroll_Forward",
    "Scroll_Backward",
    "Boot",
    "Caps_On",
    "Compose",
    "SAK",
    "Decr_Console",
    "Incr_Console",
    "KeyboardSignal",
    "Bare_Num_Lock",
];

pub(super) const PAD: [&str; 18] = [
    "KP_0",
    "KP_1",
    "KP_2",
    "KP_3",
    "KP_4",
    "KP_5",
    "KP_6",
    "KP_7",
    "KP_8",
    "KP_9",
    "KP_Add",
    "KP_Subtract",
    "KP_Multiply",
    "KP_Divide",
    "KP_Enter",
    "KP_Comma",
    "KP_Period",
    "KP_MinPlus",
];

pub(super) const DEAD: [&str; 6] = [
    "dead_grave",
    "dead_acute",
    "dead_circumflex",
    "dead_tilde",
    "dead_diaeresis",
    "dead_cedilla",
];

pub(super) const CUR: [&str; 4] = ["Down", "Left", "Right", "Up"];

pub(super) const SHIFT: [&str; 9] = [
    "Shift",
    "AltGr",
    "Control",
    "Alt",
    "ShiftL",
    "ShiftR",
    "CtrlL",
    "CtrlR",
    "CapsShift",
];

pub(super) const LOCK: [&str; 9] = [
    "Shift_Lock",
    "AltGr_Lock",
    "Control_Lock",
    "Alt_Lock",
    "ShiftL_Lock",
    "ShiftR_Lock",
    "CtrlL_Lock",
    "CtrlR_Lock",
    "CapsShift_Lock",
];

pub(super) const SLOCK: [&str; 9] = [
    "SShift",
    "SAltGr",
    "SControl",
    "SAlt",
    "SShiftL",
    "SShiftR",
    "SCtrlL",
    "SCtrlR",
    "SCapsShift",
];

/// Alternative spellings accepted for official names: (synonym, official)
pub(super) const SYNONYMS: [(&str, &str); 25] = [
    ("Control_h", "BackSpace"),
    ("Control_i", "Tab"),
    ("Control_j", "Linefeed"),
    ("Home", "Find"),
    ("End", "Select"),
    ("PageUp", "Prior"),
    ("PageDown", "Next"),
    ("multiplication", "multiply"),
    ("pound", "sterling"),
    ("pilcrow", "paragraph"),
    ("Oslash", "Ooblique"),
    ("Shift_L", "ShiftL"),
    ("Shift_R", "ShiftR"),
    ("Control_L", "CtrlL"),
    ("Control_R", "CtrlR"),
    ("AltL", "Alt"),
    ("AltR", "AltGr"),
    ("Alt_L", "Alt"),
    ("Alt_R", "AltGr"),
    ("AltGr_L", "Alt"),
    ("AltGr_R", "AltGr"),
    ("AltLLock", "Alt_Lock"),
    ("AltRLock", "AltGr_Lock"),
    ("SCtrl", "SControl"),
    ("Spawn_Console", "KeyboardSignal"),
];
