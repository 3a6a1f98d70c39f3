//! HTTP surface: the request pipeline, response building and the axum router.

pub mod http;
pub mod pipeline;
/// Pipeline outcome -> HTTP response (status, headers, body).
pub mod response;
