pub use list::*;
pub use next::*;
pub use qibla::*;
pub use quran::*;
pub use tasbih::*;
pub use times::*;
pub use zakat::*;

mod list;
mod next;
mod qibla;
mod quran;
mod tasbih;
mod times;
mod zakat;
