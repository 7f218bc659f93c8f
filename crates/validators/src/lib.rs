// validators crate

mod gs1;
mod hibcc;
mod iccbba;
pub mod symbology;

pub use gs1::validate_gs1;
pub use hibcc::validate_hibcc;
pub use iccbba::validate_iccbba;
