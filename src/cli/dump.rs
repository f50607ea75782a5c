use crate::dump::{Dumper, TableShape};
use crate::keymap::{AcquisitionError, DiacriticsTable, KeyboardDriver, Keymap};
use crate::symbols::{Charset, SymbolTable};
use log::{debug, log_enabled};
use snafu::{ResultExt, Snafu};
use std::io::{self, Write};

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub short_info: bool,
    /// Short info plus the symbol listing
    pub long_info: bool,
    pub numeric: bool,
    pub shape: TableShape,
    pub funcs_only: bool,
    pub keys_only: bool,
    pub compose_only: bool,
    /// Charset picked on the command line, announced before anything else
    pub charset: Option<Charset>,
}

impl Options {
    fn info(&self) -> bool {
        self.short_info || self.long_info
    }

    fn show_table(&self) -> bool {
        !self.funcs_only && !self.compose_only
    }

    fn show_funcs(&self) -> bool {
        !self.keys_only && !self.compose_only
    }

    fn show_diacritics(&self) -> bool {
        !self.funcs_only && !self.keys_only
    }
}

/// Read everything the options ask for from `driver`, then write it to `out`
///
/// Nothing is written unless every driver query succeeded.
pub fn dump_keyboard<D: KeyboardDriver + ?Sized>(
    driver: &mut D,
    options: &Options,
    mut out: impl Write,
) -> Result<(), Error> {
    let keymap = Keymap::acquire(driver).context(CannotAcquire)?;
    let diacritics = if options.info() || options.show_diacritics() {
        DiacriticsTable::acquire(driver).context(CannotAcquire)?
    } else {
        DiacriticsTable::default()
    };

    let symbols = SymbolTable::new(options.charset.unwrap_or_default());
    let dumper = Dumper::new(&symbols, options.numeric);
    if log_enabled!(log::Level::Debug) {
        debug!(
            "dumping with charset {}, shape {:?}, numeric: {}",
            symbols.charset(),
            options.shape,
            options.numeric
        );
    }

    write_sections(&dumper, &keymap, &diacritics, options, &mut out).context(CannotWriteOutput)?;
    out.flush().context(CannotWriteOutput)?;

    Ok(())
}

fn write_sections(
    dumper: &Dumper<'_>,
    keymap: &Keymap,
    diacritics: &DiacriticsTable,
    options: &Options,
    mut w: impl Write,
) -> io::Result<()> {
    if let Some(charset) = options.charset {
        writeln!(w, "charset \"{}\"", charset)?;
    }

    if options.info() {
        dumper.dump_summary(keymap, diacritics, &mut w)?;
        if options.long_info {
            dumper.dump_symbols(&mut w)?;
        }
        return Ok(());
    }

    if options.show_table() {
        dumper.dump_keymaps_line(keymap, &mut w)?;
        dumper.dump_keymap(keymap, options.shape, &mut w)?;
    }
    if options.show_funcs() {
        dumper.dump_funcs(keymap, &mut w)?;
    }
    if options.show_diacritics() {
        dumper.dump_diacritics(diacritics, keymap.metadata().prefer_unicode, &mut w)?;
    }

    Ok(())
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    CannotAcquire {
        source: AcquisitionError,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("could not write output: {}", source))]
    CannotWriteOutput {
        source: io::Error,
        backtrace: snafu::Backtrace,
    },
}
