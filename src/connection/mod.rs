pub(crate) mod api;
pub(crate) mod http;

/// Seam between the API client and the transport that actually carries
/// the request. Implemented for `reqwest::blocking::Client` in `http`;
/// tests provide canned implementations.
pub trait SendMessage<T, R> {
    fn send(&self, data: T) -> R;
}
