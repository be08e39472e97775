pub mod dimensions;
pub mod print_config;
pub mod units;

pub use dimensions::*;
pub use print_config::*;
pub use units::*;
