//! Best-effort discovery of the LAN-facing local address.

use std::net::{IpAddr, UdpSocket};

use thiserror::Error;

/// Well-known external endpoint used to select the outbound interface.
/// The socket is only associated with it; no datagram is ever sent.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Errors that can occur during address discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Binding the probe socket failed.
    #[error("failed to bind probe socket: {0}")]
    Bind(#[source] std::io::Error),

    /// Associating the probe socket with the external endpoint failed.
    #[error("failed to associate probe socket: {0}")]
    Connect(#[source] std::io::Error),

    /// Reading the socket's local endpoint failed.
    #[error("failed to read local endpoint: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// Determine the outbound-facing local IP of this host.
///
/// Failures are non-fatal by contract: the caller logs a diagnostic and
/// keeps running with an empty advertised address.
pub fn discover_local_address() -> Result<IpAddr, DiscoveryError> {
    let socket = UdpSocket::bind("0.0.0.0:0").map_err(DiscoveryError::Bind)?;
    socket.connect(PROBE_ADDR).map_err(DiscoveryError::Connect)?;
    let local = socket.local_addr().map_err(DiscoveryError::LocalAddr)?;
    Ok(local.ip())
}
