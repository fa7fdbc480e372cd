use crate::alg::Alg;
use crate::b64;
use crate::claims::Claims;
use crate::tests::fixtures::ReverseSigner;
use crate::token::Token;

fn sample_claims() -> Claims {
    let mut claims = Claims::new();
    claims.set_iss("svc");
    claims.set_sub("user-1");
    claims.set_exp(1700000000u64);
    claims
}

#[test]
fn it_round_trips_with_encode() {
    let signer = ReverseSigner::new(Alg::HS256);

    let token_string = Token::sign(&sample_claims(), &signer).unwrap();
    let token = Token::try_from(token_string.as_str()).unwrap();

    assert_eq!(token.header().alg, "HS256");
    assert_eq!(token.header().typ, "JWT");
    assert!(token.claims().check_iss("svc"));
    assert!(token.claims().check_sub("user-1"));
    assert!(token.verify(&signer));
    assert_eq!(token.encode(), token_string);
}

#[test]
fn it_signs_the_first_two_segments_joined_by_a_dot() {
    let signer = ReverseSigner::new(Alg::HS256);

    let token_string = Token::sign(&sample_claims(), &signer).unwrap();
    let token = Token::try_from(token_string.as_str()).unwrap();

    let segments: Vec<&str> = token_string.split('.').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(
        token.signed_data(),
        format!("{}.{}", segments[0], segments[1]).as_bytes()
    );

    let header_json = b64::decode(segments[0]).unwrap();
    assert_eq!(
        String::from_utf8(header_json).unwrap(),
        r#"{"alg":"HS256","typ":"JWT"}"#
    );
}

#[test]
fn it_fails_verification_when_the_payload_is_altered() {
    let signer = ReverseSigner::new(Alg::HS256);

    let token_string = Token::sign(&sample_claims(), &signer).unwrap();
    let segments: Vec<&str> = token_string.split('.').collect();

    let mut other_claims = sample_claims();
    other_claims.set_sub("user-2");
    let forged = format!(
        "{}.{}.{}",
        segments[0],
        other_claims.to_base64().unwrap(),
        segments[2]
    );

    let token = Token::try_from(forged.as_str()).unwrap();
    assert!(!token.verify(&signer));
}

#[test]
fn it_rejects_token_strings_without_three_segments() {
    assert!(Token::try_from("").is_err());
    assert!(Token::try_from("one.two").is_err());
    assert!(Token::try_from("a.b.c.d").is_err());
}

#[test]
fn it_rejects_segments_that_do_not_decode() {
    let signer = ReverseSigner::new(Alg::HS256);
    let token_string = Token::sign(&sample_claims(), &signer).unwrap();
    let segments: Vec<&str> = token_string.split('.').collect();

    let bad_signature = format!("{}.{}.!!!", segments[0], segments[1]);
    assert!(Token::try_from(bad_signature.as_str()).is_err());

    let bad_claims = format!("{}.%%%.{}", segments[0], segments[2]);
    assert!(Token::try_from(bad_claims.as_str()).is_err());
}
