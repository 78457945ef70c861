//! Property tests for environment-to-record mapping.

use std::collections::HashMap;

use proptest::prelude::*;
use recipe_config::{API_ENDPOINT_NAME, AppConfig, env};

fn arb_env() -> impl Strategy<Value = HashMap<String, String>> {
    proptest::collection::vec(".{0,40}", env::ALL_VARS.len()).prop_map(|values| {
        env::ALL_VARS
            .iter()
            .zip(values)
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every environment value lands in the record unchanged.
    #[test]
    fn environment_values_map_verbatim(vars in arb_env()) {
        let config = AppConfig::from_source(&vars);
        let api = config.api_endpoint(API_ENDPOINT_NAME).unwrap();

        prop_assert_eq!(config.user_pool_id(), Some(vars[env::USER_POOL_ID].as_str()));
        prop_assert_eq!(config.user_pool_client_id(), Some(vars[env::USER_POOL_CLIENT_ID].as_str()));
        prop_assert_eq!(config.oauth_domain(), Some(vars[env::COGNITO_DOMAIN].as_str()));
        prop_assert_eq!(config.redirect_sign_in(), Some(vars[env::REDIRECT_SIGN_IN].as_str()));
        prop_assert_eq!(config.redirect_sign_out(), Some(vars[env::REDIRECT_SIGN_OUT].as_str()));
        prop_assert_eq!(api.endpoint.as_deref(), Some(vars[env::API_ENDPOINT].as_str()));
        prop_assert_eq!(api.region.as_deref(), Some(vars[env::AWS_REGION].as_str()));
    }

    /// Scopes and response type never depend on the environment.
    #[test]
    fn fixed_fields_are_constant(vars in arb_env()) {
        let config = AppConfig::from_source(&vars);
        prop_assert_eq!(&config.oauth().scopes, &vec!["email".to_string(), "openid".into(), "profile".into()]);
        prop_assert_eq!(config.oauth().response_type.as_str(), "token");
    }
}
