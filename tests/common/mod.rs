#![allow(dead_code)]

use dumpkeys::keymap::{
    DiacriticEntry, DriverInfo, KeyAction, KeyboardDriver, KeyboardMode, ModifierMask,
};
use dumpkeys::{Dumper, Keymap, SymbolTable, TableShape};
use std::collections::{BTreeMap, BTreeSet};
use std::io;

/// A keyboard driver backed by plain maps
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    pub mode: KeyboardMode,
    pub info: DriverInfo,
    pub defined: BTreeSet<u16>,
    pub cells: BTreeMap<(u16, u16), KeyAction>,
    pub func_strings: Option<Vec<Vec<u8>>>,
    pub diacritics: Option<Vec<DiacriticEntry>>,
    pub fail_mode: bool,
    pub fail_probe: Option<u16>,
    pub fail_action: Option<(u16, u16)>,
    pub fail_diacritics: bool,
    pub probed: Vec<u16>,
}

impl MockDriver {
    pub fn new() -> Self {
        MockDriver {
            info: DriverInfo {
                name: Some("mock".to_string()),
                version: Some("1.0".to_string()),
                keyboard: Some("101-key".to_string()),
            },
            ..MockDriver::default()
        }
    }

    pub fn define(mut self, mask: u16) -> Self {
        self.defined.insert(mask);
        self
    }

    pub fn bind(mut self, mask: u16, keycode: u16, action: KeyAction) -> Self {
        self.defined.insert(mask);
        self.cells.insert((mask, keycode), action);
        self
    }

    pub fn symbol(self, mask: u16, keycode: u16, code: u16) -> Self {
        self.bind(mask, keycode, KeyAction::Symbol(code))
    }

    pub fn keymap(&mut self) -> Keymap {
        Keymap::acquire(self).unwrap()
    }
}

fn ioctl_failed() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "Inappropriate ioctl for device")
}

impl KeyboardDriver for MockDriver {
    fn query_mode(&mut self) -> io::Result<KeyboardMode> {
        if self.fail_mode {
            return Err(ioctl_failed());
        }
        Ok(self.mode)
    }

    fn query_driver_info(&mut self) -> io::Result<DriverInfo> {
        Ok(self.info.clone())
    }

    fn probe_combination_defined(&mut self, mask: ModifierMask) -> io::Result<bool> {
        if self.fail_probe == Some(mask.bits()) {
            return Err(ioctl_failed());
        }
        self.probed.push(mask.bits());
        Ok(self.defined.contains(&mask.bits()))
    }

    fn query_action(&mut self, mask: ModifierMask, keycode: u16) -> io::Result<KeyAction> {
        if self.fail_action == Some((mask.bits(), keycode)) {
            return Err(ioctl_failed());
        }
        Ok(self
            .cells
            .get(&(mask.bits(), keycode))
            .copied()
            .unwrap_or(KeyAction::Hole))
    }

    fn query_func_string(&mut self, index: u8) -> io::Result<Option<Vec<u8>>> {
        Ok(self
            .func_strings
            .as_ref()
            .map(|strings| strings.get(usize::from(index)).cloned().unwrap_or_default()))
    }

    fn query_diacritics(&mut self) -> io::Result<Option<Vec<DiacriticEntry>>> {
        if self.fail_diacritics {
            return Err(ioctl_failed());
        }
        Ok(self.diacritics.clone())
    }
}

pub fn render(keymap: &Keymap, shape: TableShape, numeric: bool) -> String {
    let symbols = SymbolTable::default();
    let mut out = Vec::new();
    Dumper::new(&symbols, numeric)
        .dump_keymap(keymap, shape, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

pub fn logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter(None, log::LevelFilter::Debug)
        .target(env_logger::Target::Stderr)
        .is_test(true)
        .try_init();
}
