//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. The
//! schema is syntax only; semantic rules live in `validation`.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Root configuration for the steering table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SteerConfig {
    /// Virtual addresses and their backends.
    #[serde(rename = "vip")]
    pub vips: Vec<VipConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// One virtual service address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VipConfig {
    /// Identifier used in logs and error messages.
    pub name: String,

    /// The address clients dial. IPv4 only.
    pub address: IpAddr,

    /// Backends receiving redirected connections. May be empty: an empty
    /// list registers the address in a rejecting state.
    #[serde(rename = "backend", default)]
    pub backends: Vec<BackendConfig>,
}

/// One backend server behind a virtual address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Backend address. IPv4 only.
    pub address: IpAddr,

    /// Optional port override; omit to keep the port the client dialed.
    #[serde(default)]
    pub port: Option<u16>,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter, overridable with `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "vip_steer=info".to_string(),
        }
    }
}
