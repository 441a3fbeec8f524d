use super::*;

#[test]
fn endpoints_are_same_origin_api_paths() {
    for path in [LOGIN_ENDPOINT, SIGNUP_ENDPOINT, PROFILE_ENDPOINT] {
        assert!(path.starts_with("/api/"), "{path}");
    }
}

#[test]
fn check_status_accepts_2xx_only() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(302), Err(ApiError::Rejected { status: 302 }));
    assert_eq!(check_status(401), Err(ApiError::Rejected { status: 401 }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_the_browser_are_unavailable() {
    let result = futures::executor::block_on(HttpAuthApi.fetch_profile("Bearer tok123"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
