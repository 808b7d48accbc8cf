//! IDL loading, normalization and the canonical model
//!
//! Documents in any supported shape are decoded into the raw forms in
//! `raw`, reconciled by [`normalize`], and exposed as [`Program`].

mod loader;
mod normalize;
mod raw;
mod types;

pub use loader::*;
pub use normalize::normalize;
pub use types::*;
