#[macro_use]
mod macros;

pub mod auth;
pub mod bounded;
pub mod client;
pub mod compliance;
pub mod config;
pub mod fields;
pub mod limit;
pub mod list;
pub mod params;
pub mod query;
pub mod resource;
pub mod response;
pub mod tweet;
pub mod user;

#[cfg(test)]
mod test_server;

pub use auth::{BearerToken, OAuth10a};
pub use bounded::Bounded;
pub use client::{AsyncClient, Error, ErrorKind, Method, RawStream};
pub use config::ClientConfig;
pub use limit::LimitInfo;
pub use params::{Descriptor, ParamMap, Parameters};
pub use response::{HasPartialError, Includes, Meta, PartialError, Response};
