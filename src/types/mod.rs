mod fuel;
mod leg;
mod profile;
mod waypoint;

pub use fuel::*;
pub use leg::*;
pub use profile::*;
pub use waypoint::*;
