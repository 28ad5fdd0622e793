use axum::{
    http::{
        header::{
            HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
        },
        HeaderMap, Method, Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Preflight cache lifetime in seconds (24 hours).
pub const MAX_AGE: &str = "86400";

fn set_allow_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}

/// Answers preflight requests itself; everything else goes on to the router
/// with the permissive headers added.
pub async fn cors<B>(req: Request<B>, next: Next<B>) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::trace!(uri = %req.uri(), "preflight");
        let mut res = StatusCode::NO_CONTENT.into_response();
        set_allow_headers(res.headers_mut());
        res.headers_mut()
            .insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE));
        return res;
    }

    let mut res = next.run(req).await;
    set_allow_headers(res.headers_mut());
    res
}
