pub mod device;
pub mod dtc;

pub use device::*;
pub use dtc::*;
