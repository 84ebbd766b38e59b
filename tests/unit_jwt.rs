use std::collections::HashMap;

use rekap_auth::{AuthError, Principal, TokenService, decode_token};
use rekap_config::jwt::JwtConfig;

fn config_from(vars: &[(&str, &str)]) -> JwtConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    JwtConfig::from_lookup(|key| vars.get(key).cloned())
}

fn principal() -> Principal {
    Principal::new(31, "admin@rekap.test").with_branch(Some(4))
}

#[test]
fn test_default_secrets_still_boot_and_isolate_kinds() {
    let config = config_from(&[]);
    assert!(config.uses_default_secrets());

    let tokens = TokenService::new(config).unwrap();
    let access = tokens.issue_access_token(&principal()).unwrap();
    let refresh = tokens.issue_refresh_token(&principal()).unwrap();

    assert!(tokens.validate_access_token(&access).is_ok());
    assert!(tokens.validate_refresh_token(&refresh).is_ok());
    assert!(tokens.validate_access_token(&refresh).is_err());
    assert!(tokens.validate_refresh_token(&access).is_err());
}

#[test]
fn test_configured_lifetimes_are_stamped() {
    let tokens = TokenService::new(config_from(&[
        ("JWT_ACCESS_SECRET", "env-access"),
        ("JWT_REFRESH_SECRET", "env-refresh"),
        ("JWT_ACCESS_EXPIRY", "900"),
        ("JWT_REFRESH_EXPIRY", "86400"),
    ]))
    .unwrap();

    let access = tokens.issue_access_token(&principal()).unwrap();
    let refresh = tokens.issue_refresh_token(&principal()).unwrap();

    assert_eq!(tokens.access_claims(&access).unwrap().lifetime(), 900);
    assert_eq!(tokens.refresh_claims(&refresh).unwrap().lifetime(), 86400);
}

#[test]
fn test_tokens_from_another_deployment_are_rejected() {
    let ours = TokenService::new(JwtConfig::new("ours-access", "ours-refresh")).unwrap();
    let theirs = TokenService::new(JwtConfig::new("theirs-access", "theirs-refresh")).unwrap();

    let foreign = theirs.issue_access_token(&principal()).unwrap();
    let err = ours.validate_access_token(&foreign).unwrap_err();

    assert!(matches!(err, AuthError::InvalidSignature));
}

#[test]
fn test_refreshed_access_token_drops_branch_scope() {
    let tokens = TokenService::new(JwtConfig::new("scope-access", "scope-refresh")).unwrap();
    let refresh = tokens.issue_refresh_token(&principal()).unwrap();

    let access = tokens.refresh(&refresh).unwrap();
    let claims = decode_token(&access, tokens.config().access_secret()).unwrap();

    assert_eq!(claims.user_id, 31);
    assert_eq!(claims.email, "admin@rekap.test");
    assert_eq!(claims.branch_id, None);
    assert_eq!(claims.exp - claims.iat, 3600);
}
