//! Network identity of the running process.

use std::sync::OnceLock;

/// Resolves the `hostname/ip:port` address a service stamps into its responses.
///
/// The value is computed on first use and cached for the lifetime of the
/// resolver, so concurrent requests always observe the same address.
#[derive(Debug)]
pub struct ServiceAddressResolver {
    port: u16,
    address: OnceLock<String>,
}

impl ServiceAddressResolver {
    /// Resolver for a service listening on `port`.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            address: OnceLock::new(),
        }
    }

    /// Resolver that always reports `address` (no host lookup).
    pub fn fixed(address: impl Into<String>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(address.into());
        Self { port: 0, address: cell }
    }

    pub fn service_address(&self) -> &str {
        self.address.get_or_init(|| {
            let address = format!("{}/{}:{}", find_hostname(), find_ip_address(), self.port);
            tracing::debug!(%address, "resolved service address");
            address
        })
    }
}

fn find_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown host name".to_string())
}

fn find_ip_address() -> String {
    local_ip_address::local_ip()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|_| "unknown IP address".to_string())
}
