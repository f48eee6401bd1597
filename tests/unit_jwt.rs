use chrono::{Duration, TimeZone, Utc};
use shepherd_auth::{Identity, Role, TokenCodec, TokenError};

fn codec() -> TokenCodec {
    TokenCodec::from_secret(b"unit-jwt-test-secret", Duration::hours(2))
}

fn identity(role: Role) -> Identity {
    Identity::new("u1", "a@b.com", role)
}

#[test]
fn test_round_trip_for_every_role() {
    let codec = codec();
    for role in Role::ALL {
        let token = codec.issue(&identity(role), Duration::minutes(5)).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.identity(), identity(role));
    }
}

#[test]
fn test_scenario_issue_then_verify_immediately() {
    let codec = codec();
    let token = codec.issue(&identity(Role::Bishop), Duration::hours(2)).unwrap();

    let claims = codec.verify(&token).unwrap();
    assert_eq!(claims.sub, "u1");
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.role, Role::Bishop);
    assert_eq!(claims.exp - claims.iat, 7200);
}

#[test]
fn test_token_is_three_base64url_segments() {
    let token = codec().issue_session(&identity(Role::Member)).unwrap();
    let segments: Vec<&str> = token.split('.').collect();

    assert_eq!(segments.len(), 3);
    for segment in segments {
        assert!(!segment.is_empty());
        assert!(
            segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}

#[test]
fn test_expiry_boundary_is_iat_plus_ttl() {
    let codec = codec();
    let issued_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();

    for ttl_secs in [1, 60, 7200] {
        let ttl = Duration::seconds(ttl_secs);
        let token = codec.issue_at(&identity(Role::Leader), ttl, issued_at).unwrap();

        assert!(codec.verify_at(&token, issued_at).is_ok());
        assert!(
            codec
                .verify_at(&token, issued_at + ttl - Duration::seconds(1))
                .is_ok()
        );
        assert_eq!(
            codec.verify_at(&token, issued_at + ttl).unwrap_err(),
            TokenError::Expired
        );
        assert_eq!(
            codec
                .verify_at(&token, issued_at + ttl + Duration::days(1))
                .unwrap_err(),
            TokenError::Expired
        );
    }
}

#[test]
fn test_every_signature_character_is_load_bearing() {
    let codec = codec();
    let token = codec.issue(&identity(Role::Protocol), Duration::hours(1)).unwrap();
    let signature_start = token.rfind('.').unwrap() + 1;

    for i in signature_start..token.len() {
        let mut tampered: Vec<char> = token.chars().collect();
        tampered[i] = if tampered[i] == 'A' { 'B' } else { 'A' };
        let tampered: String = tampered.into_iter().collect();

        assert_eq!(
            codec.verify(&tampered).unwrap_err(),
            TokenError::InvalidSignature,
            "flipping signature char {} was not detected",
            i - signature_start
        );
    }
}

#[test]
fn test_token_from_another_secret_is_rejected() {
    let other = TokenCodec::from_secret(b"some-other-secret", Duration::hours(2));
    let token = other.issue(&identity(Role::Bishop), Duration::hours(1)).unwrap();

    assert_eq!(
        codec().verify(&token).unwrap_err(),
        TokenError::InvalidSignature
    );
}

#[test]
fn test_verify_is_idempotent() {
    let codec = codec();
    let token = codec.issue(&identity(Role::Visitor), Duration::hours(1)).unwrap();

    let first = codec.verify(&token).unwrap();
    for _ in 0..5 {
        assert_eq!(codec.verify(&token).unwrap(), first);
    }
}

#[test]
fn test_non_positive_ttl_is_rejected() {
    let codec = codec();
    assert_eq!(
        codec.issue(&identity(Role::Member), Duration::zero()).unwrap_err(),
        TokenError::InvalidTtl
    );
    assert_eq!(
        codec
            .issue(&identity(Role::Member), Duration::seconds(-30))
            .unwrap_err(),
        TokenError::InvalidTtl
    );
}

#[test]
fn test_garbage_is_malformed() {
    let codec = codec();
    for token in ["", "not-a-token", "a.b", "a.b.c", "...."] {
        assert_eq!(
            codec.verify(token).unwrap_err(),
            TokenError::Malformed,
            "token {:?}",
            token
        );
    }
}
