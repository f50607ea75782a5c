use super::{
    DiacriticEntry, DiacriticsTable, DriverInfo, KeyAction, KeyboardMode, Keymap, KeymapMetadata,
    ModifierMask, NR_KEYS,
};
use log::{debug, info, log_enabled, trace};
use snafu::{ResultExt, Snafu};
use std::io;

/// Read-only access to a keyboard driver's translation tables
///
/// Each method maps to one kind of driver request. Anything the driver
/// reports as unsupported is expressed as `Ok(None)`, not as an error.
pub trait KeyboardDriver {
    fn query_mode(&mut self) -> io::Result<KeyboardMode>;

    fn query_driver_info(&mut self) -> io::Result<DriverInfo>;

    /// Whether the driver holds a table for this modifier combination
    fn probe_combination_defined(&mut self, mask: ModifierMask) -> io::Result<bool>;

    /// The action bound to one cell
    ///
    /// Drivers decide between [`KeyAction::Empty`] and [`KeyAction::Hole`]:
    /// a hole means the keycode is not in use at all.
    fn query_action(&mut self, mask: ModifierMask, keycode: u16) -> io::Result<KeyAction>;

    /// The string sent by function key `index`; `Ok(None)` when the driver
    /// has no function key strings.
    fn query_func_string(&mut self, _index: u8) -> io::Result<Option<Vec<u8>>> {
        Ok(None)
    }

    /// The compose table; `Ok(None)` when the driver has none.
    fn query_diacritics(&mut self) -> io::Result<Option<Vec<DiacriticEntry>>>;
}

impl Keymap {
    /// Read the complete translation table from a driver
    pub fn acquire<D: KeyboardDriver + ?Sized>(driver: &mut D) -> Result<Keymap, AcquisitionError> {
        let mode = driver.query_mode().context(ModeQueryFailed)?;
        let info = driver.query_driver_info().context(DriverInfoFailed)?;
        debug!("keyboard is in {} mode", mode);

        let mut keymap = Keymap::new(KeymapMetadata {
            mode,
            prefer_unicode: mode == KeyboardMode::Unicode,
            max_keycode_used: None,
            driver: info,
        });

        for mask in ModifierMask::all() {
            let defined = driver
                .probe_combination_defined(mask)
                .context(CombinationProbeFailed { mask })?;
            if !defined {
                continue;
            }
            keymap.add_combination(mask);

            let mut bound = 0;
            for keycode in 0..NR_KEYS {
                let action = driver
                    .query_action(mask, keycode)
                    .context(ActionQueryFailed { mask, keycode })?;
                if !action.is_hole() {
                    bound += 1;
                }
                keymap.set(keycode, mask, action);
            }
            debug!("keymap {} ({}): {} keys bound", mask.bits(), mask, bound);
        }

        for index in 0..=u8::MAX {
            match driver
                .query_func_string(index)
                .context(FuncStringQueryFailed { index })?
            {
                Some(value) => keymap.set_func_string(index, value),
                None => {
                    trace!("driver has no function key strings");
                    break;
                }
            }
        }

        if log_enabled!(log::Level::Debug) {
            debug!(
                "{} keymaps in use, {} cells bound, {} function key strings",
                keymap.combination_count(),
                keymap.bound_count(),
                keymap.func_strings().count()
            );
        }

        Ok(keymap)
    }
}

impl DiacriticsTable {
    /// Read the compose table; a driver without one yields an empty table
    pub fn acquire<D: KeyboardDriver + ?Sized>(
        driver: &mut D,
    ) -> Result<DiacriticsTable, AcquisitionError> {
        match driver.query_diacritics().context(DiacriticsQueryFailed)? {
            Some(entries) => {
                debug!("{} compose definitions in use", entries.len());
                Ok(DiacriticsTable::from(entries))
            }
            None => {
                info!("keyboard driver does not support compose definitions");
                Ok(DiacriticsTable::default())
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum AcquisitionError {
    #[snafu(display("error reading keyboard mode: {}", source))]
    ModeQueryFailed {
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("error reading keyboard driver information: {}", source))]
    DriverInfoFailed {
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("error probing keymap {} ({}): {}", mask.bits(), mask, source))]
    CombinationProbeFailed {
        mask: ModifierMask,
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display(
        "error reading keycode {} in keymap {}: {}",
        keycode,
        mask.bits(),
        source
    ))]
    ActionQueryFailed {
        mask: ModifierMask,
        keycode: u16,
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("error reading function key string {}: {}", index, source))]
    FuncStringQueryFailed {
        index: u8,
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("error reading compose definitions: {}", source))]
    DiacriticsQueryFailed {
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
}
