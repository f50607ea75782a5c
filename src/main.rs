use dumpkeys::{cli, Charset, TableShape};
use snafu::{ResultExt, Snafu};
use std::{io, path::PathBuf, process};
use structopt::StructOpt;

#[cfg(not(unix))]
compile_error!("dumpkeys reads the keyboard through the console device and needs a unix target");

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dumpkeys",
    about = "Print the console keyboard translation table"
)]
struct Opts {
    /// Display information about the keyboard driver
    #[structopt(short = "i", long = "short-info")]
    short_info: bool,

    /// Display the above and the symbols known to the keymap loader
    #[structopt(short = "l", long = "long-info")]
    long_info: bool,

    #[structopt(short = "s", hidden = true)]
    long_info_alias: bool,

    /// Display the key table in hexadecimal notation
    #[structopt(short = "n", long = "numeric")]
    numeric: bool,

    /// Don't use short-hand notations, one row per keycode
    #[structopt(short = "f", long = "full-table")]
    full_table: bool,

    /// One line per (modifier, keycode) pair
    #[structopt(short = "1", long = "separate-lines")]
    separate_lines: bool,

    /// Table layout by number: 0 default, 1 full, 2 separate lines, 3 short-hand
    #[structopt(short = "S", long = "shape")]
    shape: Option<u8>,

    /// Display only the function key strings
    #[structopt(short = "t", long = "funcs-only")]
    funcs_only: bool,

    /// Display only key bindings
    #[structopt(short = "k", long = "keys-only")]
    keys_only: bool,

    /// Display only compose key combinations
    #[structopt(short = "d", long = "compose-only")]
    compose_only: bool,

    /// Interpret character action codes as this charset
    #[structopt(short = "c", long = "charset")]
    charset: Option<String>,

    /// Console device to read from
    #[structopt(short = "C", long = "console", parse(from_os_str))]
    console: Option<PathBuf>,

    /// Log what is read from the console
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

impl Opts {
    fn table_shape(&self) -> TableShape {
        if let Some(code) = self.shape {
            TableShape::from_code(code)
        } else if self.separate_lines {
            TableShape::SeparateLines
        } else if self.full_table {
            TableShape::FullTable
        } else {
            TableShape::Default
        }
    }

    fn dump_options(&self, charset: Option<Charset>) -> cli::Options {
        cli::Options {
            short_info: self.short_info,
            long_info: self.long_info || self.long_info_alias,
            numeric: self.numeric,
            shape: self.table_shape(),
            funcs_only: self.funcs_only,
            keys_only: self.keys_only,
            compose_only: self.compose_only,
            charset,
        }
    }
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("{}", source))]
    UnknownCharset {
        source: dumpkeys::symbols::charset::Error,
    },
    #[snafu(display("{}", source))]
    NoConsole { source: dumpkeys::console::Error },
    #[snafu(display("{}", source))]
    CannotDump { source: cli::Error },
}

fn run(opts: Opts) -> Result<(), Error> {
    let charset = match &opts.charset {
        Some(name) => Some(Charset::select(name).context(UnknownCharset)?),
        None => None,
    };

    let options = opts.dump_options(charset);

    let mut console =
        dumpkeys::console::Console::open(opts.console.as_deref()).context(NoConsole)?;
    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    cli::dump_keyboard(&mut console, &options, out).context(CannotDump)
}

fn main() {
    let opts = Opts::from_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if opts.verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    if let Err(e) = run(opts) {
        eprintln!("dumpkeys: {}", e);
        process::exit(1);
    }
}
