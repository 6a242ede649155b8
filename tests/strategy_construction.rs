#![cfg(feature = "test")]

// self
use oauth2_refresh_token_strategy::{
	REFRESH_TOKEN_FIELD, RefreshToken, RefreshTokenStrategy, Request, STRATEGY_NAME, Strategy,
	StrategyOptions, VERSION, Verified,
	_preludet::*,
	error::ConfigError,
	verify::{VerifyFuture, VerifyToken},
};

type TestStrategy = RefreshTokenStrategy<u32, ()>;

struct AllowList(Vec<&'static str>);
impl VerifyToken<u32, ()> for AllowList {
	fn verify(&self, token: RefreshToken) -> VerifyFuture<'_, u32, ()> {
		Box::pin(async move {
			let position = self.0.iter().position(|allowed| token.secret() == allowed);
			let decision: Verified<u32, ()> = position.map(|idx| idx as u32).into();

			Ok(decision)
		})
	}
}

#[test]
fn module_exposes_version_and_name() {
	assert!(!VERSION.is_empty());
	assert_eq!(STRATEGY_NAME, "oauth2-refresh-token");
	assert_eq!(REFRESH_TOKEN_FIELD, "refresh_token");
}

#[test]
fn strategy_is_named_oauth2_refresh_token() {
	let strategy: TestStrategy =
		RefreshTokenStrategy::new(|_token: RefreshToken| async move { Ok(Verified::Rejected) });

	assert_eq!(strategy.name(), "oauth2-refresh-token");
	assert_eq!(<TestStrategy as Strategy<Request>>::name(&strategy), STRATEGY_NAME);
}

#[test]
fn building_without_verifier_fails() {
	let err = TestStrategy::builder().build().expect_err("Default builder must fail.");

	assert!(matches!(err, Error::Config(ConfigError::MissingVerifyFunction)));

	let options = StrategyOptions::from_json_str(r#"{"passReqToCallback":true}"#)
		.expect("Options fixture should parse.");
	let err = TestStrategy::builder_with_options(options)
		.build()
		.expect_err("Options-only builder must fail.");

	assert!(matches!(err, Error::Config(ConfigError::MissingVerifyFunction)));
	assert_eq!(err.to_string(), "OAuth 2.0 refresh token strategy requires a verify function.");
}

#[tokio::test]
async fn custom_verifier_type_plugs_into_builder() {
	let strategy = TestStrategy::builder()
		.token_verifier(AllowList(vec!["first", "second"]))
		.build()
		.expect("Token-only verifier with default options should build.");

	assert_eq!(strategy.authenticate(&request_with_token("second")).await.principal(), Some(&1));
	assert!(!strategy.authenticate(&request_with_token("third")).await.is_success());
}

#[tokio::test]
async fn strategies_work_behind_trait_objects() {
	let strategies: Vec<Box<dyn Strategy<Request, Principal = u32, Info = ()>>> = vec![
		Box::new(
			TestStrategy::builder()
				.token_verifier(AllowList(vec!["rftkn"]))
				.build()
				.expect("Allow-list strategy should build."),
		),
		Box::new(TestStrategy::with_request(|request: &Request, _token: RefreshToken| {
			let id: Option<u32> = request.param("id").and_then(|id| id.parse().ok());

			async move { Ok(Verified::from(id)) }
		})),
	];
	let request = request_with_token("rftkn").with_param("id", "9");
	let mut principals = Vec::new();

	for strategy in &strategies {
		assert_eq!(strategy.name(), STRATEGY_NAME);

		principals.push(strategy.authenticate(&request).await.principal().copied());
	}

	assert_eq!(principals, [Some(0), Some(9)]);
}

#[test]
fn token_debug_output_is_redacted() {
	let token = RefreshToken::new("super-secret".into());

	assert!(!format!("{token:?}").contains("super-secret"));
}
