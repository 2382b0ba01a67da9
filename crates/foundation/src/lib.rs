pub mod math;

// Foundation crate: small, well-tested primitives only.
pub use math::{Vec3, ease_out_cubic, to_cartesian};
