//! Typed async client for the Akeneo PIM REST API. Authenticate once, let the client keep the
//! OAuth 2.0 token pair fresh, and call every catalog endpoint with typed bodies and responses.
//!
//! The crate is layered strictly: [`auth::TokenAuthority`] owns the credential pair and the
//! password/refresh grant exchanges, [`dispatch::Dispatcher`] performs authenticated HTTP calls
//! and normalizes vendor errors, and [`client::AkeneoClient`] exposes one typed method per REST
//! resource on top of the dispatcher.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod collection;
pub mod config;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod model;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use reqwest::Client as ReqwestClient;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
