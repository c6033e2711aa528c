//! Module describing all possible commands and sub-commands to the `miqatctl` main driver
//!
//! The daily commands:
//!
//! - `times` fetches and displays the whole day of prayer times
//! - `next` resolves the next prayer and counts down to it
//! - `qibla` gives the direction of the Kaaba from the observer
//!
//! plus `tasbih` (persisted counter), `quran` (chapters and verses), `zakat`
//! (assessment arithmetic), `list` and `completion`.
//!
//! Wherever a position is needed it can come from `--lat/--lon`, from a named
//! location (`--location`, see `list locations`) or from the configuration
//! file, in that order.
//!

use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, Parser, ValueEnum,
};
use clap_complete::shells::Shell;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Hierarchical log output.
    #[clap(short = 'T', long = "tree")]
    pub use_tree: bool,
    /// Also log into this file.
    #[clap(long = "log-file")]
    pub use_file: Option<String>,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Display utility full version.
    #[clap(short = 'V', long)]
    pub version: bool,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `times [-d date] [-m method] [position]`
/// `next [-w] [-m method] [position]`
/// `qibla [--heading H] [position]`
/// `tasbih (count|incr|reset)`
/// `quran (list|show N)`
/// `zakat -p price [-b basis] wealth`
/// `list (events|locations|sources)`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Daily schedule for a date and position
    Times(TimesOpts),
    /// Next prayer and countdown
    Next(NextOpts),
    /// Direction of the Kaaba from the observer
    Qibla(QiblaOpts),
    /// Persisted dhikr counter
    Tasbih(TasbihOpts),
    /// Quran chapters and verses
    Quran(QuranOpts),
    /// Zakat due on zakatable wealth
    Zakat(ZakatOpts),
    /// List things
    List(ListOpts),
    /// List all package versions
    Version,
}

// ------

/// Options for the daily schedule.
///
#[derive(Debug, Parser)]
pub struct TimesOpts {
    /// Date (free form), default is today
    #[clap(short = 'd', long)]
    pub date: Option<String>,
    /// Named location from `locations.hcl`
    #[clap(short = 'l', long)]
    pub location: Option<String>,
    /// Observer latitude in degrees
    #[clap(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Observer longitude in degrees
    #[clap(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
    /// Computation method id forwarded to the service
    #[clap(short = 'm', long)]
    pub method: Option<u8>,
}

// ------

/// Options for the next prayer countdown.
///
#[derive(Debug, Parser)]
pub struct NextOpts {
    /// Named location from `locations.hcl`
    #[clap(short = 'l', long)]
    pub location: Option<String>,
    /// Observer latitude in degrees
    #[clap(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Observer longitude in degrees
    #[clap(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
    /// Computation method id forwarded to the service
    #[clap(short = 'm', long)]
    pub method: Option<u8>,
    /// Keep counting, rolling over to the following event
    #[clap(short = 'w', long)]
    pub watch: bool,
}

// ------

/// Options for the qibla compass.
///
#[derive(Debug, Parser)]
pub struct QiblaOpts {
    /// Named location from `locations.hcl`
    #[clap(short = 'l', long)]
    pub location: Option<String>,
    /// Observer latitude in degrees
    #[clap(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Observer longitude in degrees
    #[clap(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
    /// Device compass heading in degrees, default is facing North
    #[clap(long, allow_hyphen_values = true)]
    pub heading: Option<f64>,
}

// ------

/// This contain only the `tasbih` sub-commands.
///
#[derive(Debug, Parser)]
pub struct TasbihOpts {
    /// Sub-commands
    #[clap(subcommand)]
    pub subcmd: TasbihSubCommand,
}

/// All `tasbih` sub-commands:
///
#[derive(Debug, Parser)]
pub enum TasbihSubCommand {
    /// Current count
    Count,
    /// Add one
    Incr,
    /// Back to zero
    Reset,
}

// ------

/// This contain only the `quran` sub-commands.
///
#[derive(Debug, Parser)]
pub struct QuranOpts {
    /// Sub-commands
    #[clap(subcommand)]
    pub subcmd: QuranSubCommand,
}

/// All `quran` sub-commands:
///
#[derive(Debug, Parser)]
pub enum QuranSubCommand {
    /// The chapter catalogue
    List,
    /// One chapter with its translation
    Show(QuranShowOpts),
}

#[derive(Debug, Parser)]
pub struct QuranShowOpts {
    /// Edition list passed verbatim to the service
    #[clap(short = 'e', long)]
    pub editions: Option<String>,
    /// Show the audio URL of each verse when available
    #[clap(short = 'a', long)]
    pub audio: bool,
    /// Chapter number (1 to 114)
    pub chapter: u32,
}

// ------

/// Options for the zakat assessment.
///
#[derive(Debug, Parser)]
pub struct ZakatOpts {
    /// Nisab basis, `gold` or `silver`
    #[clap(short = 'b', long, default_value = "gold")]
    pub basis: String,
    /// Price of one gram of the basis metal, in your currency
    #[clap(short = 'p', long)]
    pub price: f64,
    /// Zakatable wealth held over the year, in your currency
    pub wealth: f64,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All `list` sub-commands:
///
/// `list events`
/// `list locations`
/// `list sources`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
}

/// These are the sub-commands for `list`
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// All daily events in day order
    Events,
    /// Named locations from `locations.hcl`
    Locations,
    /// All sources from `sources.hcl`
    Sources,
}
