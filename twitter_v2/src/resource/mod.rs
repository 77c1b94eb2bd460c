//! Objects returned by the API.

pub mod compliance;
pub mod entity;
mod id;
pub mod list;
pub mod media;
pub mod outcome;
pub mod place;
pub mod poll;
pub mod tweet;
pub mod user;

pub use compliance::{ComplianceJob, JobStatus, JobType};
pub use id::{ListId, TweetId, UserId};
pub use list::List;
pub use media::{Media, MediaKey};
pub use outcome::{CreatedTweet, Deleted, Following, Liked, Membership, Pinned, Updated};
pub use place::Place;
pub use poll::Poll;
pub use tweet::{Tweet, TweetCount};
pub use user::User;
