//! OAuth 2.0 token lifecycle: obtain, cache, expire, and transparently renew bearer tokens.
//!
//! [`TokenAuthority`] exposes a single operation, [`bearer_token`](TokenAuthority::bearer_token),
//! that always yields a currently-valid access token, hiding the grant-type branching from
//! callers. The cached credential pair is private to one authority instance; only the derived
//! bearer string ever leaves it.
//!
//! The pair lives behind a single async mutex that stays held across the
//! authenticate-or-refresh transition, so concurrent requests racing on an expired token
//! serialize on one exchange instead of each triggering a redundant round-trip.

mod token;
pub use token::TokenExchangeResponse;

// crates.io
use reqwest::header;
// self
use crate::{_prelude::*, config::ClientConfig, error::AuthError, http::HttpClient};
use token::TokenPair;

const TOKEN_PATH: &str = "/oauth/v1/token";

/// Wire body of a token-exchange request, tagged by OAuth grant type.
#[derive(Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
enum GrantRequest<'a> {
	Password { username: &'a str, password: &'a str },
	RefreshToken { refresh_token: &'a str },
}
impl GrantRequest<'_> {
	fn label(&self) -> &'static str {
		match self {
			Self::Password { .. } => "password",
			Self::RefreshToken { .. } => "refresh_token",
		}
	}
}

/// Guarantees callers a currently-valid bearer token with at most the necessary round-trips.
pub struct TokenAuthority {
	config: Arc<ClientConfig>,
	http: HttpClient,
	/// Precomputed `Basic base64(client_id:client_secret)` value; immutable for the life of the
	/// instance and shared read-only by every exchange.
	basic_authorization: String,
	tokens: AsyncMutex<Option<TokenPair>>,
}
impl TokenAuthority {
	/// Creates an authority with no cached credential pair.
	pub fn new(config: Arc<ClientConfig>, http: HttpClient) -> Self {
		let basic_authorization = config.basic_authorization();

		Self { config, http, basic_authorization, tokens: AsyncMutex::new(None) }
	}

	/// Returns an unexpired bearer token, authenticating or refreshing first when needed.
	///
	/// State transitions:
	/// - no cached pair: one password-grant exchange;
	/// - cached pair with an unexpired access token: no network call;
	/// - cached pair past its early-refresh deadline: the access half is cleared and one
	///   refresh-grant exchange runs, falling back exactly once to a password grant when the
	///   refresh exchange fails for any reason. Only a failed password grant propagates.
	pub async fn bearer_token(&self) -> Result<String> {
		let mut guard = self.tokens.lock().await;
		let now = OffsetDateTime::now_utc();

		if let Some(pair) = guard.as_ref()
			&& !pair.access.is_expired_at(now)
		{
			return Ok(pair.access.value.expose().to_owned());
		}

		// Taking the pair clears the expired access half before the renewal attempt.
		let refresh = guard.take().map(|pair| pair.refresh);
		let response = match refresh {
			Some(refresh) => {
				let grant = GrantRequest::RefreshToken { refresh_token: refresh.expose() };

				match self.exchange(grant).await {
					Ok(response) => response,
					Err(err) => {
						tracing::debug!(
							error = %err,
							"refresh grant failed, falling back to a password grant",
						);

						self.exchange(self.password_grant()).await?
					},
				}
			},
			None => self.exchange(self.password_grant()).await?,
		};
		let pair = TokenPair::from_exchange(&response, OffsetDateTime::now_utc());
		let bearer = pair.access.value.expose().to_owned();

		*guard = Some(pair);

		Ok(bearer)
	}

	fn password_grant(&self) -> GrantRequest<'_> {
		GrantRequest::Password {
			username: &self.config.credentials.username,
			password: self.config.credentials.password.expose(),
		}
	}

	async fn exchange(&self, grant: GrantRequest<'_>) -> Result<TokenExchangeResponse, AuthError> {
		let grant_label = grant.label();
		let url = format!(
			"{}{TOKEN_PATH}",
			self.config.api_base_url.as_str().trim_end_matches('/')
		);
		let response = self
			.http
			.post(&url)
			.header(header::AUTHORIZATION, &self.basic_authorization)
			.json(&grant)
			.send()
			.await
			.map_err(|source| AuthError::Transport { source })?;
		let status = response.status();

		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();

			return Err(AuthError::Rejected {
				grant: grant_label,
				status: status.as_u16(),
				message,
			});
		}

		let bytes = response.bytes().await.map_err(|source| AuthError::Transport { source })?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| AuthError::MalformedResponse { source })
	}
}
impl Debug for TokenAuthority {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenAuthority")
			.field("config", &self.config)
			.field("basic_authorization", &"<redacted>")
			.finish()
	}
}
