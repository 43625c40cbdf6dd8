use super::*;

/// Tests decoding a well-formed Basic header.
///
/// Expected: Ok with email and password split at the first colon
#[test]
fn decodes_basic_credentials() {
    let headers = basic("user1@email.cz", "pass:word");

    let credentials = BasicCredentials::from_headers(&headers).unwrap();

    assert_eq!(
        credentials,
        BasicCredentials {
            email: "user1@email.cz".to_string(),
            password: "pass:word".to_string(),
        }
    );
}

/// Tests the scheme name is matched case-insensitively.
///
/// Expected: Ok
#[test]
fn accepts_lowercase_scheme() {
    let encoded = STANDARD.encode("user1@email.cz:password");
    let headers = headers_with_authorization(&format!("basic {}", encoded));

    assert!(BasicCredentials::from_headers(&headers).is_ok());
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingCredentials)
#[test]
fn rejects_missing_header() {
    let result = BasicCredentials::from_headers(&HeaderMap::new());

    assert!(matches!(result, Err(AuthError::MissingCredentials)));
}

/// Tests a Bearer token is not accepted as Basic credentials.
///
/// Expected: Err(AuthError::MalformedCredentials)
#[test]
fn rejects_other_schemes() {
    let headers = headers_with_authorization("Bearer abc.def.ghi");

    let result = BasicCredentials::from_headers(&headers);

    assert!(matches!(result, Err(AuthError::MalformedCredentials(_))));
}

/// Tests payloads that are not base64 or lack the separator.
///
/// Expected: Err(AuthError::MalformedCredentials) for both
#[test]
fn rejects_undecodable_payloads() {
    let not_base64 = headers_with_authorization("Basic !!!");
    let no_separator = headers_with_authorization(&format!(
        "Basic {}",
        STANDARD.encode("user1@email.cz")
    ));

    assert!(matches!(
        BasicCredentials::from_headers(&not_base64),
        Err(AuthError::MalformedCredentials(_))
    ));
    assert!(matches!(
        BasicCredentials::from_headers(&no_separator),
        Err(AuthError::MalformedCredentials(_))
    ));
}
