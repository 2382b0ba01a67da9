//! Space-object dashboard engine.
//!
//! [`Dashboard`] owns one page per dataset kind (state plus map and globe
//! views), drives loading through a [`DatasetSource`] and projects everything
//! it decides onto a [`Surface`].

pub mod app;
pub mod config;
pub mod data_sources;
pub mod error;
pub mod focus;
pub mod globe_controller;
pub mod logging;
pub mod session;
pub mod surface;

#[cfg(test)]
mod testing;

pub use app::Dashboard;
pub use config::{ConfigError, DashboardConfig};
pub use data_sources::{DatasetSource, FsSource, LoadError, StaticSource};
pub use error::DashboardError;
pub use surface::{GlobeSetup, ListEntry, MapSetup, Surface};
