//! Domain types.

pub mod env;
pub mod identity;
mod target;

pub use env::Env;
pub use identity::{IdentityStore, MemberUid};
pub use target::EnvironmentTarget;
