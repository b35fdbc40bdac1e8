mod comparative_sort;
mod lsb_sort;
#[cfg(feature = "multi-threaded")]
mod mt_lsb_sort;
mod out_of_place_sort;

pub use comparative_sort::*;
pub use lsb_sort::*;
#[cfg(feature = "multi-threaded")]
pub use mt_lsb_sort::*;
pub use out_of_place_sort::*;
