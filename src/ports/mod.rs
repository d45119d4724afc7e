//! Ports (trait boundaries) for external collaborators.
//!
//! The game core talks to the outside world only through these traits:
//! human players read moves through an [`InputSource`], and training runs
//! report progress to [`Observer`]s. Implementations live in
//! [`crate::adapters`] and [`crate::pipeline::observers`].

pub mod input;
pub mod observer;

pub use input::InputSource;
pub use observer::Observer;
