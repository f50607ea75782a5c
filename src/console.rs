//! The Linux virtual console keyboard, read through `ioctl(2)`.

use crate::keymap::{
    DiacriticEntry, DriverInfo, KeyAction, KeyboardDriver, KeyboardMode, ModifierMask, K_HOLE,
    K_NOSUCHMAP, MAX_DIACR,
};
use libc::{c_char, c_int, c_uchar, c_uint, c_ushort};
use log::{debug, trace, warn};
use snafu::{ensure, ResultExt, Snafu};
use std::{
    collections::HashMap,
    convert::TryFrom,
    fs::{File, OpenOptions},
    io,
    os::unix::{
        fs::OpenOptionsExt,
        io::{AsFd, AsRawFd, OwnedFd},
    },
    path::{Path, PathBuf},
};

const KDGKBTYPE: u32 = 0x4B33;
const KDGKBMODE: u32 = 0x4B44;
const KDGKBENT: u32 = 0x4B46;
const KDGKBSENT: u32 = 0x4B48;
const KDGKBDIACR: u32 = 0x4B4A;
const KDGKBDIACRUC: u32 = 0x4BFA;

const KB_84: c_char = 0x01;
const KB_101: c_char = 0x02;
const KB_OTHER: c_char = 0x03;

/// Candidates for the console when none is named, in order
const CONSOLE_PATHS: [&str; 5] = [
    "/proc/self/fd/0",
    "/dev/tty",
    "/dev/tty0",
    "/dev/vc/0",
    "/dev/console",
];

#[repr(C)]
struct KbEntry {
    kb_table: c_uchar,
    kb_index: c_uchar,
    kb_value: c_ushort,
}

#[repr(C)]
struct KbSEntry {
    kb_func: c_uchar,
    kb_string: [c_uchar; 512],
}

#[repr(C)]
#[derive(Clone, Copy)]
struct KbDiacr {
    diacr: c_uchar,
    base: c_uchar,
    result: c_uchar,
}

#[repr(C)]
struct KbDiacrs {
    kb_cnt: c_uint,
    kbdiacr: [KbDiacr; MAX_DIACR],
}

#[repr(C)]
#[derive(Clone, Copy)]
struct KbDiacrUc {
    diacr: c_uint,
    base: c_uint,
    result: c_uint,
}

#[repr(C)]
struct KbDiacrsUc {
    kb_cnt: c_uint,
    kbdiacruc: [KbDiacrUc; MAX_DIACR],
}

/// # Safety
///
/// `arg` must point to the structure `request` reads and fills in.
unsafe fn ioctl<T>(file: &File, request: u32, arg: &mut T) -> io::Result<c_int> {
    let ret = libc::ioctl(file.as_raw_fd(), request as _, arg as *mut T);
    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(ret)
    }
}

fn unsupported(error: &io::Error) -> bool {
    matches!(error.raw_os_error(), Some(libc::ENOTTY) | Some(libc::EINVAL))
}

fn keyboard_type(file: &File) -> io::Result<c_char> {
    let mut kb_type: c_char = 0;
    // SAFETY: KDGKBTYPE stores a single char.
    unsafe { ioctl(file, KDGKBTYPE, &mut kb_type) }?;
    Ok(kb_type)
}

fn is_a_console(file: &File) -> bool {
    match keyboard_type(file) {
        Ok(kb_type) => kb_type == KB_84 || kb_type == KB_101,
        Err(e) => {
            trace!("KDGKBTYPE failed: {}", e);
            false
        }
    }
}

/// Read-write, then write-only, then read-only
fn open_any_mode(path: &Path) -> io::Result<File> {
    let mut last_error = None;
    for &(read, write) in &[(true, true), (false, true), (true, false)] {
        match OpenOptions::new()
            .read(read)
            .write(write)
            .custom_flags(libc::O_NOCTTY)
            .open(path)
        {
            Ok(file) => return Ok(file),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| io::ErrorKind::NotFound.into()))
}

/// The kernel stores `K_HOLE` both for unbound cells and for keys that are
/// bound elsewhere. A hole only counts as empty when `bound` says the keycode
/// has a value in some allocated table.
fn classify(value: u16, bound: impl FnOnce() -> io::Result<bool>) -> io::Result<KeyAction> {
    if value != K_HOLE {
        Ok(KeyAction::Symbol(value))
    } else if bound()? {
        Ok(KeyAction::Empty)
    } else {
        Ok(KeyAction::Hole)
    }
}

fn bound_in_any(
    tables: &[u8],
    keycode: u8,
    mut entry: impl FnMut(u8, u8) -> io::Result<u16>,
) -> io::Result<bool> {
    for &table in tables {
        if entry(table, keycode)? != K_HOLE {
            return Ok(true);
        }
    }
    Ok(false)
}

fn out_of_range(what: &str, value: u16) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{} {} is out of range", what, value),
    )
}

/// An open console whose keyboard tables can be read
///
/// The descriptor is closed when the console is dropped.
#[derive(Debug)]
pub struct Console {
    file: File,
    tables: Option<Vec<u8>>,
    bound: HashMap<u8, bool>,
}

impl Console {
    /// Open `path`, or the first console that can be found
    pub fn open(path: Option<&Path>) -> Result<Console, Error> {
        if let Some(path) = path {
            let file = open_any_mode(path).context(CannotOpen { path })?;
            ensure!(is_a_console(&file), NotAConsole { path });
            return Ok(Console::new(file, path));
        }

        for path in CONSOLE_PATHS.iter().map(Path::new) {
            match open_any_mode(path) {
                Ok(file) if is_a_console(&file) => return Ok(Console::new(file, path)),
                Ok(_) => trace!("`{}` is not a console", path.display()),
                Err(e) => trace!("could not open `{}`: {}", path.display(), e),
            }
        }

        let streams: Vec<(&str, io::Result<OwnedFd>)> = vec![
            ("<stdin>", io::stdin().as_fd().try_clone_to_owned()),
            ("<stdout>", io::stdout().as_fd().try_clone_to_owned()),
            ("<stderr>", io::stderr().as_fd().try_clone_to_owned()),
        ];
        for (name, fd) in streams {
            match fd {
                Ok(fd) => {
                    let file = File::from(fd);
                    if is_a_console(&file) {
                        return Ok(Console::new(file, Path::new(name)));
                    }
                    trace!("{} is not a console", name);
                }
                Err(e) => trace!("could not duplicate {}: {}", name, e),
            }
        }

        DeviceUnavailable.fail()
    }

    fn new(file: File, path: &Path) -> Self {
        debug!("using console `{}`", path.display());
        Console {
            file,
            tables: None,
            bound: HashMap::new(),
        }
    }

    fn entry(&self, table: u8, index: u8) -> io::Result<u16> {
        let mut entry = KbEntry {
            kb_table: table,
            kb_index: index,
            kb_value: 0,
        };
        // SAFETY: KDGKBENT reads table and index and fills in the value.
        unsafe { ioctl(&self.file, KDGKBENT, &mut entry) }?;
        Ok(entry.kb_value)
    }

    fn is_table_allocated(&self, table: u8) -> io::Result<bool> {
        Ok(self.entry(table, 0)? != K_NOSUCHMAP)
    }

    /// Whether any allocated table binds `keycode` to something
    fn is_bound(&mut self, keycode: u8) -> io::Result<bool> {
        if let Some(&bound) = self.bound.get(&keycode) {
            return Ok(bound);
        }

        if self.tables.is_none() {
            let mut tables = Vec::new();
            for table in 0..=u8::MAX {
                if self.is_table_allocated(table)? {
                    tables.push(table);
                }
            }
            self.tables = Some(tables);
        }

        let tables = self.tables.as_deref().unwrap_or(&[]);
        let bound = bound_in_any(tables, keycode, |table, index| self.entry(table, index))?;
        self.bound.insert(keycode, bound);
        Ok(bound)
    }

    fn diacritics_unicode(&self) -> io::Result<Option<Vec<DiacriticEntry>>> {
        let empty = KbDiacrUc {
            diacr: 0,
            base: 0,
            result: 0,
        };
        let mut table = Box::new(KbDiacrsUc {
            kb_cnt: 0,
            kbdiacruc: [empty; MAX_DIACR],
        });
        // SAFETY: KDGKBDIACRUC fills in a `struct kbdiacrsuc`.
        match unsafe { ioctl(&self.file, KDGKBDIACRUC, &mut *table) } {
            Ok(_) => {}
            Err(e) if unsupported(&e) => return Ok(None),
            Err(e) => return Err(e),
        }

        let count = (table.kb_cnt as usize).min(MAX_DIACR);
        let entries = table.kbdiacruc[..count]
            .iter()
            .filter_map(|d| {
                match (u16::try_from(d.diacr), u16::try_from(d.base), u16::try_from(d.result)) {
                    (Ok(dead), Ok(base), Ok(result)) => Some(DiacriticEntry { dead, base, result }),
                    _ => {
                        warn!(
                            "skipping compose definition U+{:04x} U+{:04x} outside the 16 bit range",
                            d.diacr, d.base
                        );
                        None
                    }
                }
            })
            .collect();
        Ok(Some(entries))
    }

    fn diacritics_legacy(&self) -> io::Result<Option<Vec<DiacriticEntry>>> {
        let empty = KbDiacr {
            diacr: 0,
            base: 0,
            result: 0,
        };
        let mut table = Box::new(KbDiacrs {
            kb_cnt: 0,
            kbdiacr: [empty; MAX_DIACR],
        });
        // SAFETY: KDGKBDIACR fills in a `struct kbdiacrs`.
        match unsafe { ioctl(&self.file, KDGKBDIACR, &mut *table) } {
            Ok(_) => {}
            Err(e) if unsupported(&e) => return Ok(None),
            Err(e) => return Err(e),
        }

        let count = (table.kb_cnt as usize).min(MAX_DIACR);
        Ok(Some(
            table.kbdiacr[..count]
                .iter()
                .map(|d| DiacriticEntry {
                    dead: u16::from(d.diacr),
                    base: u16::from(d.base),
                    result: u16::from(d.result),
                })
                .collect(),
        ))
    }
}

impl KeyboardDriver for Console {
    fn query_mode(&mut self) -> io::Result<KeyboardMode> {
        let mut mode: c_int = 0;
        // SAFETY: KDGKBMODE stores an int.
        unsafe { ioctl(&self.file, KDGKBMODE, &mut mode) }?;
        KeyboardMode::from_raw(mode).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unknown keyboard mode {}", mode),
            )
        })
    }

    fn query_driver_info(&mut self) -> io::Result<DriverInfo> {
        // SAFETY: `utsname` is plain old data; all zeroes is a valid value.
        let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
        // SAFETY: uname fills in the structure it is given.
        let version = if unsafe { libc::uname(&mut uts) } == 0 {
            let release: Vec<u8> = uts
                .release
                .iter()
                .take_while(|&&c| c != 0)
                .map(|&c| c as u8)
                .collect();
            Some(String::from_utf8_lossy(&release).into_owned())
        } else {
            debug!("uname failed: {}", io::Error::last_os_error());
            None
        };

        let keyboard = keyboard_type(&self.file).ok().map(|kb_type| {
            let name = match kb_type {
                KB_84 => "84-key",
                KB_101 => "101-key",
                KB_OTHER => "other",
                _ => "unknown",
            };
            name.to_string()
        });

        Ok(DriverInfo {
            name: Some("linux".to_string()),
            version,
            keyboard,
        })
    }

    fn probe_combination_defined(&mut self, mask: ModifierMask) -> io::Result<bool> {
        let table = u8::try_from(mask.bits()).map_err(|_| out_of_range("keymap", mask.bits()))?;
        self.is_table_allocated(table)
    }

    fn query_action(&mut self, mask: ModifierMask, keycode: u16) -> io::Result<KeyAction> {
        let table = u8::try_from(mask.bits()).map_err(|_| out_of_range("keymap", mask.bits()))?;
        let index = u8::try_from(keycode).map_err(|_| out_of_range("keycode", keycode))?;

        let value = self.entry(table, index)?;
        classify(value, || self.is_bound(index))
    }

    fn query_func_string(&mut self, index: u8) -> io::Result<Option<Vec<u8>>> {
        let mut entry = Box::new(KbSEntry {
            kb_func: index,
            kb_string: [0; 512],
        });
        // SAFETY: KDGKBSENT reads the function index and fills in the string.
        match unsafe { ioctl(&self.file, KDGKBSENT, &mut *entry) } {
            Ok(_) => {}
            Err(e) if unsupported(&e) => return Ok(None),
            Err(e) => return Err(e),
        }

        let len = entry
            .kb_string
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(entry.kb_string.len());
        Ok(Some(entry.kb_string[..len].to_vec()))
    }

    fn query_diacritics(&mut self) -> io::Result<Option<Vec<DiacriticEntry>>> {
        if let Some(entries) = self.diacritics_unicode()? {
            return Ok(Some(entries));
        }
        debug!("KDGKBDIACRUC not supported, trying KDGKBDIACR");
        self.diacritics_legacy()
    }
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("could not open `{}`: {}", path.display(), source))]
    CannotOpen {
        path: PathBuf,
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("`{}` is not a console", path.display()))]
    NotAConsole {
        path: PathBuf,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("could not get a file descriptor referring to the console"))]
    DeviceUnavailable { backtrace: snafu::Backtrace },
}
