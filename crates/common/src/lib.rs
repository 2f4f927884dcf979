//! Common types shared across the sign-in workspace

mod secret;

pub use secret::Secret;
