pub mod log;
pub mod track;

pub use log::*;
pub use track::*;
