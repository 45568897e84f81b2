mod ais;
mod date_range;
mod hauls;
mod port_calls;
mod trips;
mod vessels;

pub use ais::*;
pub use date_range::*;
pub use hauls::*;
pub use port_calls::*;
pub use trips::*;
pub use vessels::*;
