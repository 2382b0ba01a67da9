//! Filter pipeline and dual-view marker synchronization.
pub mod dual_view;
pub mod markers;
pub mod query;
pub mod symbology;
pub mod view;

pub use dual_view::*;
pub use markers::*;
pub use query::*;
pub use symbology::*;
pub use view::*;
