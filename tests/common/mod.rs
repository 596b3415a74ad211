//! Shared helpers for integration tests.

use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;

use vip_steer::{BackendEndpoint, BackendSet, ConnectAttempt, VipTable};

/// Build a table with one VIP and the given backends.
#[allow(dead_code)]
pub fn table_with(vip: Ipv4Addr, endpoints: Vec<BackendEndpoint>) -> Arc<VipTable> {
    let table = Arc::new(VipTable::new());
    table.upsert(vip, BackendSet::new(endpoints));
    table
}

/// An IPv4 attempt dialing `addr:port`.
#[allow(dead_code)]
pub fn ipv4_attempt(addr: Ipv4Addr, port: u16) -> ConnectAttempt {
    ConnectAttempt::ipv4(SocketAddrV4::new(addr, port))
}

/// Endpoints `base.0.0.1 .. base.0.0.n`, each carrying `port_base + i`.
#[allow(dead_code)]
pub fn numbered_endpoints(second_octet: u8, count: u8, port_base: u16) -> Vec<BackendEndpoint> {
    (1..=count)
        .map(|i| {
            BackendEndpoint::with_port(
                Ipv4Addr::new(10, second_octet, 0, i),
                port_base + u16::from(i),
            )
        })
        .collect()
}
