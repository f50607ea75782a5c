mod common;

use common::{logger, render, MockDriver};
use dumpkeys::keymap::{DiacriticEntry, DiacriticsTable, KeyAction, KeyboardMode};
use dumpkeys::{Charset, Dumper, SymbolTable, TableShape};

#[test]
fn full_table_skips_holes_and_shows_empty_cells() {
    logger();
    let keymap = MockDriver::new()
        .symbol(0, 0, 0x0061)
        .bind(0, 1, KeyAction::Empty)
        .bind(0, 2, KeyAction::Hole)
        .keymap();

    let out = render(&keymap, TableShape::FullTable, false);
    assert_eq!(out, "keycode   0 = a\nkeycode   1 = VoidSymbol\n");
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn separate_lines_enumerate_bound_cells() {
    logger();
    let keymap = MockDriver::new()
        .symbol(0, 0, 0x0061)
        .bind(0, 1, KeyAction::Empty)
        .bind(0, 2, KeyAction::Hole)
        .keymap();

    let out = render(&keymap, TableShape::SeparateLines, false);
    assert_eq!(
        out,
        "plain\tkeycode   0 = a\nplain\tkeycode   1 = VoidSymbol\n"
    );
    assert!(!out.contains("keycode   2"));
}

#[test]
fn identical_rows_share_a_line() {
    logger();
    let keymap = MockDriver::new()
        .symbol(0, 16, 0x0071)
        .symbol(1, 16, 0x0051)
        .symbol(0, 17, 0x0071)
        .symbol(1, 17, 0x0051)
        .symbol(0, 18, 0x0077)
        .symbol(1, 18, 0x0057)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::Default, false),
        format!(
            "keycode  16, 17 = {:<16} Q\nkeycode  18 = {:<16} W\n",
            "q", "w"
        )
    );
    assert_eq!(
        render(&keymap, TableShape::FullTable, false).lines().count(),
        3
    );
}

#[test]
fn groups_follow_their_lowest_keycode() {
    let keymap = MockDriver::new()
        .symbol(0, 2, 0x0031)
        .symbol(0, 3, 0x0032)
        .symbol(0, 4, 0x0031)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::Default, false),
        "keycode   2,  4 = one\nkeycode   3 = two\n"
    );
}

#[test]
fn numeric_mode_prints_codes_and_masks() {
    let keymap = MockDriver::new()
        .symbol(0, 30, 0x0b61)
        .symbol(1, 30, 0x0b41)
        .symbol(0, 31, 0xf000 ^ 0x20ac)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::FullTable, true),
        format!(
            "keycode  30 = {:<16} 0x0b41\nkeycode  31 = U+20ac\n",
            "0x0b61"
        )
    );
    assert_eq!(
        render(&keymap, TableShape::SeparateLines, true),
        "0\tkeycode  30 = 0x0b61\n1\tkeycode  30 = 0x0b41\n0\tkeycode  31 = U+20ac\n"
    );
}

#[test]
fn cells_after_a_hole_become_exceptions() {
    let keymap = MockDriver::new()
        .symbol(0, 30, 0x0061)
        .define(1)
        .symbol(2, 30, 0x0062)
        .symbol(6, 30, 0x0002)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::Default, false),
        "keycode  30 = a\naltgr\tkeycode  30 = b\naltgr\tcontrol\tkeycode  30 = Control_b\n"
    );
}

#[test]
fn rows_starting_with_a_hole_have_no_main_line() {
    let keymap = MockDriver::new()
        .symbol(0, 2, 0x0031)
        .symbol(1, 5, 0x0021)
        .symbol(1, 6, 0x0021)
        .keymap();

    for &shape in &[TableShape::Default, TableShape::FullTable, TableShape::Shorthand] {
        let out = render(&keymap, shape, false);
        assert!(!out.contains("keycode   5 =\n"), "{:?}:\n{}", shape, out);
        assert!(out.contains("shift\tkeycode   5 = exclam\n"), "{:?}:\n{}", shape, out);
        assert!(out.contains("shift\tkeycode   6 = exclam\n"), "{:?}:\n{}", shape, out);
        assert!(out.lines().all(|line| !line.ends_with('=')), "{:?}:\n{}", shape, out);
    }
    assert_eq!(
        render(&keymap, TableShape::Default, false),
        "keycode   2 = one\nshift\tkeycode   5 = exclam\nshift\tkeycode   6 = exclam\n"
    );
}

#[test]
fn keymaps_line_lists_ranges() {
    let keymap = MockDriver::new()
        .symbol(0, 1, 0x001b)
        .symbol(1, 1, 0x001b)
        .symbol(2, 1, 0x001b)
        .symbol(4, 1, 0x001b)
        .keymap();

    let symbols = SymbolTable::default();
    let mut out = Vec::new();
    Dumper::new(&symbols, false)
        .dump_keymaps_line(&keymap, &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "keymaps 0-2,4\n");
}

#[test]
fn unknown_shape_renders_like_the_default() {
    let keymap = MockDriver::new()
        .symbol(0, 16, 0x0071)
        .symbol(0, 17, 0x0071)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::Custom(42), false),
        render(&keymap, TableShape::Default, false)
    );
}

#[test]
fn shorthand_letters_and_alt_is_meta() {
    logger();
    let keymap = MockDriver::new()
        .symbol(0, 30, 0x0b61)
        .symbol(1, 30, 0x0b41)
        .symbol(4, 30, 0x0001)
        .symbol(8, 30, 0x0861)
        .symbol(0, 2, 0x0031)
        .symbol(1, 2, 0x0021)
        .symbol(8, 2, 0x0831)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::Shorthand, false),
        format!(
            "alt_is_meta\nkeycode   2 = {:<16} exclam\nkeycode  30 = a\n",
            "one"
        )
    );
}

#[test]
fn shorthand_single_entry_with_exceptions() {
    let keymap = MockDriver::new()
        .symbol(0, 1, 0x001b)
        .symbol(1, 1, 0x001b)
        .symbol(2, 1, 0x001b)
        .symbol(3, 1, 0x0201)
        .keymap();

    assert_eq!(
        render(&keymap, TableShape::Shorthand, false),
        "keycode   1 = Escape\nshift\taltgr\tkeycode   1 = Return\n"
    );
}

#[test]
fn shorthand_alt_is_meta_needs_every_pair() {
    let keymap = MockDriver::new()
        .symbol(0, 2, 0x0031)
        .symbol(8, 2, 0x0032)
        .keymap();

    let out = render(&keymap, TableShape::Shorthand, false);
    assert!(!out.contains("alt_is_meta"));
    assert_eq!(out, format!("keycode   2 = {:<16} two\n", "one"));
}

#[test]
fn function_strings_are_escaped() {
    let mut driver = MockDriver::new().symbol(0, 59, 0x0100);
    driver.func_strings = Some(vec![b"\x1b[[A".to_vec(), Vec::new(), b"say \"hi\"".to_vec()]);
    let keymap = driver.keymap();

    let symbols = SymbolTable::default();
    let mut out = Vec::new();
    Dumper::new(&symbols, false)
        .dump_funcs(&keymap, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "string F1 = \"\\033[[A\"\nstring F3 = \"say \\\"hi\\\"\"\n"
    );
}

#[test]
fn diacritics_use_the_selected_charset() {
    let table = DiacriticsTable::from(vec![
        DiacriticEntry {
            dead: u16::from(b'`'),
            base: u16::from(b'a'),
            result: 0xe0,
        },
        DiacriticEntry {
            dead: u16::from(b'\''),
            base: u16::from(b' '),
            result: u16::from(b'\''),
        },
    ]);

    let dump = |charset: Charset, numeric: bool| {
        let symbols = SymbolTable::new(charset);
        let mut out = Vec::new();
        Dumper::new(&symbols, numeric)
            .dump_diacritics(&table, false, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    };

    assert_eq!(
        dump(Charset::Iso8859_1, false),
        "compose '`' 'a' to agrave\ncompose '\\047' ' ' to '\\047'\n"
    );
    assert!(dump(Charset::Iso8859_2, false).starts_with("compose '`' 'a' to racute\n"));
    assert!(dump(Charset::Iso8859_1, true).starts_with("compose 0x0060 0x0061 to 0x00e0\n"));
}

#[test]
fn unicode_diacritics_are_named_by_code_point() {
    let table = DiacriticsTable::from(vec![DiacriticEntry {
        dead: u16::from(b'^'),
        base: u16::from(b'z'),
        result: 0x1e91,
    }]);
    let symbols = SymbolTable::default();
    let mut out = Vec::new();
    Dumper::new(&symbols, false)
        .dump_diacritics(&table, true, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "compose '^' 'z' to U+1e91\n"
    );
}

#[test]
fn summary_reports_driver_and_usage() {
    let mut driver = MockDriver::new()
        .symbol(0, 30, 0x0b61)
        .symbol(1, 30, 0x0b41)
        .symbol(0, 127, 0x0201);
    driver.mode = KeyboardMode::Unicode;
    let keymap = driver.keymap();

    let symbols = SymbolTable::default();
    let mut out = Vec::new();
    Dumper::new(&symbols, false)
        .dump_summary(&keymap, &DiacriticsTable::default(), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    let line = |label: &str| {
        out.lines()
            .find(|line| line.starts_with(label))
            .map(|line| line[label.len()..].trim().to_string())
            .unwrap_or_else(|| panic!("no `{}` line in\n{}", label, out))
    };
    assert_eq!(line("keyboard driver:"), "mock 1.0");
    assert_eq!(line("keyboard type:"), "101-key");
    assert_eq!(line("keyboard mode:"), "unicode");
    assert_eq!(line("prefer unicode:"), "yes");
    assert_eq!(line("keycode range supported by kernel:"), "1 - 255");
    assert_eq!(line("number of keymaps in actual use:"), "2");
    assert_eq!(line("highest keycode in use:"), "127");
    assert_eq!(line("number of compose definitions in actual use:"), "0");
    assert!(out.contains("    0x0000 - 0x00ff  latin\n"));
    assert!(out.contains("    0x0100 - 0x01ff  fn\n"));
}

#[test]
fn symbol_listing_is_grouped() {
    let symbols = SymbolTable::default();
    let mut out = Vec::new();
    Dumper::new(&symbols, false).dump_symbols(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("Symbols recognized by dumpkeys:\n(numeric value, symbol)\n\nlatin:\n    0x0000\tnul\n"));
    assert!(out.contains("\nfn:\n    0x0100\tF1\n"));
    assert!(out.contains("    0x0201\tReturn\n"));
    assert!(out.contains("Home            for Find\n"));
    assert!(out.contains("shift\t\t  1\n"));
    assert!(out.contains("capsshift\t\t256\n"));

    let latin = out.find("\nlatin:").unwrap_or(0);
    let spec = out.find("\nspec:").unwrap();
    let brl = out.find("\nbrl:").unwrap();
    assert!(latin < spec && spec < brl);
}
