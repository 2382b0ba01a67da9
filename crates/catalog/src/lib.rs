//! Dataset Configuration Registry.
//!
//! Every dataset kind gets one immutable [`DatasetConfig`]: which fields are
//! searchable, which quick filters exist, how an item is classified into a
//! visual style, how summary statistics are computed and how list entries and
//! detail popups are rendered. Configs hold no state; everything mutable lives
//! in `scene::SessionState`.

pub mod config;
pub mod conjunctions;
pub mod elset;
pub mod fragment;
pub mod registry;
pub mod search;
pub mod sgi;
pub mod statevector;
pub mod style;

pub use config::*;
pub use fragment::*;
pub use registry::{all, config};
pub use style::*;
