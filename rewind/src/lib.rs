//! Replay navigation over recorded two-player board games.
//!
//! [`engine::ReplayEngine`] owns the position and the played/pending
//! split of the loaded record; [`nav::NavigationController`] turns the
//! engine's reports into control enablement and label text and drives
//! the renderer.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod nav;

pub use catalog::Catalog;
pub use engine::{LoadReport, ReplayEngine, StepReport};
pub use error::ReplayError;
pub use nav::{NavigationController, Renderer};
