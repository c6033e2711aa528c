//! This is the module handling the `zakat` sub-command.
//!
//! Pure arithmetic, nothing leaves the machine.
//!

use std::str::FromStr;

use eyre::{eyre, Result};
use tracing::trace;

use miqat_formats::{assess, NisabBasis, ZAKAT_RATE};

use crate::ZakatOpts;

/// Assess and display.
///
#[tracing::instrument]
pub fn show_zakat(opts: &ZakatOpts) -> Result<()> {
    trace!("show_zakat");

    let basis = NisabBasis::from_str(&opts.basis)
        .map_err(|_| eyre!("Unknown basis {}, use gold or silver", opts.basis))?;
    let a = assess(opts.wealth, basis, opts.price);

    println!("Nisab ({} at {}/g): {:.2}", basis, opts.price, a.nisab);
    if a.payable() {
        println!("Zakat due ({}%): {:.2}", ZAKAT_RATE * 100., a.due);
    } else {
        println!("Below nisab, no zakat due.");
    }
    Ok(())
}
