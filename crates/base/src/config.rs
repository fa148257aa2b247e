/// # Panics
/// This function should never panic
#[inline]
#[must_use]
pub fn default_server_endpoint() -> http::Uri {
    format!("http://{}:{}", crate::DEFAULT_GRPC_HOST, crate::DEFAULT_GRPC_PORT)
        .parse()
        .expect("valid uri")
}
