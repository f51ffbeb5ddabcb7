//! JSON body helpers for actix test responses.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read a response body and parse it as untyped JSON, panicking with the raw
/// body on failure.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    read_json_as(resp).await
}

/// Read a response body and deserialize it into `T`.
pub async fn read_json_as<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>) -> T {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response body is not the expected JSON ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}
