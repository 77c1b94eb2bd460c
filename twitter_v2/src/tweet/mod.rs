//! Tweet endpoints: lookup, manage, search, counts, timelines, likes and the sample stream.

pub mod counts;
pub mod like;
pub mod lookup;
pub mod manage;
pub mod search;
pub mod stream;
pub mod timeline;
