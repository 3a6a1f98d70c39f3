use super::*;

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn cache_control(resp: &Response) -> &str {
    resp.headers()
        .get(header::CACHE_CONTROL)
        .unwrap()
        .to_str()
        .unwrap()
}

#[test]
fn statuses_follow_error_kind() {
    assert_eq!(OgError::invalid_request("x").status(), StatusCode::BAD_REQUEST);
    assert_eq!(OgError::not_found("x").status(), StatusCode::NOT_FOUND);
    assert_eq!(OgError::upstream("x").status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        OgError::render("x").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        OgError::from(anyhow::anyhow!("join")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn invalid_request_is_400_json_without_long_lived_cache() {
    let resp = build(Err(OgError::invalid_request("both m and it given")));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(cache_control(&resp), NO_STORE);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "message": "Invalid request" }));
}

#[tokio::test]
async fn internal_detail_is_not_leaked() {
    let resp = build(Err(OgError::upstream("GET https://secret.test/?api_key=abc")));
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(cache_control(&resp), NO_STORE);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Upstream fetch failed");
}
