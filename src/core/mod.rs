pub mod particles;
pub mod theme;

pub use particles::*;
pub use theme::*;
