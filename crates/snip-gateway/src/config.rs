use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use typed_builder::TypedBuilder;

pub const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Runtime settings of the HTTP gateway.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GatewaySettings {
    /// Socket address the server binds to.
    #[builder(default = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,
    /// Public base URL used to build short links, e.g. `https://sn.ip`.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
}
