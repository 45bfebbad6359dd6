//! Data models for the HomeTrack application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod category;
mod event;
mod export;
mod note;
mod photo;
mod user;
mod warranty;

pub use category::*;
pub use event::*;
pub use export::*;
pub use note::*;
pub use photo::*;
pub use user::*;
pub use warranty::*;
