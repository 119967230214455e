//! Transport primitives shared by the token authority and the request dispatcher.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// One wrapped client is cloned into both the token authority and the dispatcher, so connection
/// pools are shared between token exchanges and resource requests. Timeout and cancellation
/// semantics are whatever the wrapped client was built with; no additional deadline logic is
/// layered on top.
#[derive(Clone, Default)]
pub struct HttpClient(pub ReqwestClient);
impl HttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for HttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for HttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl Debug for HttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("HttpClient(..)")
	}
}
