pub mod crop;
pub mod farm;
pub mod prediction;
pub mod weather;

pub use crop::*;
pub use farm::*;
pub use prediction::*;
pub use weather::*;
