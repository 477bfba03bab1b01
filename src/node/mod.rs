pub mod action;
pub mod kind;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod status;

pub use action::*;
pub use kind::*;
pub use model::*;
pub use service::*;
pub use snapshot::*;
pub use status::*;
