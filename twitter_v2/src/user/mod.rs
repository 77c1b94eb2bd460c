//! User endpoints: lookup and follows.

pub mod follow;
pub mod lookup;
