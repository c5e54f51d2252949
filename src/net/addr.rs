//! Best-effort local network address discovery.
//!
//! Used by embedding UIs to display a URL other devices on the LAN can
//! reach. Never load-bearing for serving.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Discover a non-loopback IPv4 address of this host, if any.
///
/// Opens a UDP socket and "connects" it to a public address; no packet is
/// sent, the OS just picks the outbound interface, whose address is then
/// read back. Returns `None` when the host has no usable interface (offline,
/// loopback only).
pub fn local_network_address() -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(("8.8.8.8", 80)).ok()?;
    let addr = socket.local_addr().ok()?.ip();

    match addr {
        IpAddr::V4(v4) if !v4.is_loopback() && !v4.is_unspecified() => Some(addr),
        _ => None,
    }
}
