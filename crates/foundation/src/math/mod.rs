pub mod easing;
pub mod spherical;
pub mod vec;

pub use easing::*;
pub use spherical::*;
pub use vec::*;
