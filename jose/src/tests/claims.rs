use crate::b64;
use crate::claims::Claims;

#[test]
fn it_starts_empty_with_every_registered_claim_absent() {
    let claims = Claims::new();

    assert!(!claims.has_iss());
    assert!(!claims.has_sub());
    assert!(!claims.has_aud());
    assert!(!claims.has_exp());
    assert!(!claims.has_nbf());
    assert!(!claims.has_iat());
    assert!(!claims.has_jti());
    assert_eq!(claims.get_iss(), "");
}

#[test]
fn it_sets_checks_gets_and_deletes_a_registered_claim() {
    let mut claims = Claims::new();

    claims.set_iss("acme");

    assert!(claims.has_iss());
    assert_eq!(claims.get_iss(), "acme");
    assert!(claims.check_iss("acme"));
    assert!(!claims.check_iss("other"));

    claims.del_iss();

    assert!(!claims.has_iss());
    assert_eq!(claims.get_iss(), "");
    assert!(!claims.check_iss("acme"));
}

#[test]
fn it_keeps_each_registered_claim_independent() {
    let mut claims = Claims::new();

    claims.set_iat(100);
    claims.set_nbf(200);
    claims.set_jti("token-1");

    assert_eq!(claims.get_iat(), "100");
    assert_eq!(claims.get_nbf(), "200");
    assert_eq!(claims.get_jti(), "token-1");
    assert!(claims.check_iat("100"));
    assert!(claims.check_jti("token-1"));

    claims.del_iat();

    assert!(!claims.has_iat());
    assert!(claims.has_nbf());
    assert!(claims.has_jti());
}

#[test]
fn it_coerces_numbers_and_booleans_to_their_json_text() {
    let mut claims = Claims::new();

    claims.set_exp(1700000000u64);
    claims.set("admin", true);

    assert_eq!(claims.get_exp(), "1700000000");
    assert!(claims.check_exp("1700000000"));
    assert_eq!(claims.get("admin"), "true");
}

#[test]
fn it_overwrites_on_set_and_ignores_deleting_missing_keys() {
    let mut claims = Claims::new();

    claims.set_sub("first");
    claims.set_sub("second");
    assert_eq!(claims.get_sub(), "second");

    claims.del("never-set");
    assert_eq!(claims.get("never-set"), "");
}

#[test]
fn it_parses_json_and_base64_documents() {
    let claims = Claims::parse(r#"{"iss":"acme","exp":1700000000}"#).unwrap();

    assert!(claims.check_iss("acme"));
    assert_eq!(claims.get_exp(), "1700000000");

    let encoded = claims.to_base64().unwrap();
    let decoded = Claims::parse_base64(&encoded).unwrap();

    assert!(decoded.check_iss("acme"));
    assert!(decoded.has_exp());
}

#[test]
fn it_rejects_documents_that_are_not_json_objects() {
    assert!(Claims::parse("[1, 2, 3]").is_err());
    assert!(Claims::parse("not json").is_err());
    assert!(Claims::parse_base64(&b64::encode("[]")).is_err());
    assert!(Claims::parse_base64("!!!").is_err());
}
