//! Define our own macro to simplify the code
//!

/// Call the HTTP client with the proper arguments
///
/// - plain GET call, none of our services require authentication
///
#[macro_export]
macro_rules! http_get {
    ($self:ident, $url:ident) => {
        $self
            .client
            .clone()
            .get($url)
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .header("content-type", "application/json")
            .send()
    };
}
