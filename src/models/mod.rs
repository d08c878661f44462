//! Value objects flowing through the analytics pipeline.
//!
//! Every type here is an immutable value constructed and consumed within a
//! single report computation; there is no shared mutable state and no
//! cross-request retention.

pub mod report;
pub mod resource;
pub mod visit;
pub mod window;

pub use report::*;
pub use resource::*;
pub use visit::*;
pub use window::*;
