#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

//! Client for the Okta groups and group-membership management API.

pub mod client;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
mod groups;
mod membership;
pub mod models;
pub mod service;

pub use crate::client::OktaClient;
pub use crate::config::{ClientConfig, Environment};
pub use crate::context::RequestContext;
pub use crate::error::{OktaError, OktaResult};
pub use crate::models::{Group, GroupProfile, GroupType, User, UserProfile, UserStatus};
pub use crate::service::OktaService;
pub use tokio_util::sync::CancellationToken;
