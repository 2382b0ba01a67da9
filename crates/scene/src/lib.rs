pub mod item;
pub mod kind;
pub mod properties;
pub mod session;

pub use item::*;
pub use kind::*;
pub use properties::*;
pub use session::*;
