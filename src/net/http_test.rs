use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn only_401_counts_as_auth_failure() {
    assert!(is_auth_failure(401));

    assert!(!is_auth_failure(200));
    assert!(!is_auth_failure(400));
    assert!(!is_auth_failure(403));
    assert!(!is_auth_failure(404));
    assert!(!is_auth_failure(500));
}

#[test]
fn join_url_prefixes_api_base() {
    assert_eq!(join_url("/news", &[]), "/api/news");
    assert_eq!(join_url("/news/n-1", &[]), "/api/news/n-1");
}

#[test]
fn join_url_appends_query_pairs_in_order() {
    let query = [
        ("status", "draft".to_owned()),
        ("limit", "10".to_owned()),
        ("skip", "20".to_owned()),
    ];
    assert_eq!(join_url("/news", &query), "/api/news?status=draft&limit=10&skip=20");
}

#[test]
fn status_error_carries_status_and_body() {
    let err = ApiError::Status { status: 404, body: "News not found".to_owned() };
    assert_eq!(err.to_string(), "HTTP 404: News not found");
}

#[test]
fn unauthorized_error_reads_as_session_expired() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
}
