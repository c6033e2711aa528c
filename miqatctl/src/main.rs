//! Main driver for the `miqatctl` utility.
//!

use std::io;

use clap::{crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::trace;

use miqat_common::init_logging;
use miqat_engine::Engine;
use miqatctl::{
    handle_list, handle_quran, handle_tasbih, show_next, show_qibla, show_times, show_zakat,
    CtlConfig, Opts, SubCommand,
};

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(NAME, opts.use_tree, opts.use_file.clone())?;
    trace!("Logging initialised.");

    let cfn = opts.config.clone().map(|p| p.to_string_lossy().to_string());
    let cfg = CtlConfig::load(cfn.as_deref())?;

    // Banner
    //
    banner()?;

    // Instantiate Engine
    //
    let engine = Engine::new()?;

    handle_subcmd(&engine, &cfg, &opts.subcmd)
}

pub fn handle_subcmd(engine: &Engine, cfg: &CtlConfig, subcmd: &SubCommand) -> Result<()> {
    match subcmd {
        SubCommand::Times(topts) => {
            trace!("times");

            show_times(engine, cfg, topts)
        }

        SubCommand::Next(nopts) => {
            trace!("next");

            show_next(engine, cfg, nopts)
        }

        SubCommand::Qibla(qopts) => {
            trace!("qibla");

            show_qibla(cfg, qopts)
        }

        SubCommand::Tasbih(topts) => {
            trace!("tasbih");

            handle_tasbih(engine, topts)
        }

        SubCommand::Quran(qopts) => {
            trace!("quran");

            handle_quran(engine, qopts)
        }

        SubCommand::Zakat(zopts) => {
            trace!("zakat");

            show_zakat(zopts)
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => {
            trace!("list");

            handle_list(engine, lopts.cmd)
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
            Ok(())
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("{}", version());
            eprintln!("Modules: ");
            eprintln!("\t{}", miqat_common::version());
            eprintln!("\t{}", miqat_formats::version());
            eprintln!("\t{}", miqat_sources::version());
            eprintln!("\t{}", miqat_engine::version());
            Ok(())
        }
    }
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{}
{}
"##,
        NAME,
        VERSION,
        crate_description!()
    ))
}
