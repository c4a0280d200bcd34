pub mod date;
pub mod file;
pub mod track;

pub use date::*;
pub use file::*;
pub use track::*;
