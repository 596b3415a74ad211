//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: `SteerConfig` → `Result<(), Vec<ValidationError>>`
//! - Oversized backend lists are not errors; capacity truncates at publish
//! - An empty backend list is not an error; it registers the address in a
//!   rejecting state

use std::collections::HashSet;
use std::net::IpAddr;

use thiserror::Error;

use crate::config::schema::SteerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Two VIP entries claim the same address; the table maps one set per
    /// address, so the second would silently shadow the first.
    #[error("duplicate virtual address {address} (vip '{name}')")]
    DuplicateVip { name: String, address: IpAddr },

    /// Only IPv4 virtual addresses are supported.
    #[error("vip '{name}': virtual address {address} is not IPv4")]
    VipNotIpv4 { name: String, address: IpAddr },

    /// Only IPv4 backend addresses are supported.
    #[error("vip '{name}': backend address {address} is not IPv4")]
    BackendNotIpv4 { name: String, address: IpAddr },
}

/// Check cross-field rules serde cannot express. Collects every violation.
pub fn validate_config(config: &SteerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for vip in &config.vips {
        if !seen.insert(vip.address) {
            errors.push(ValidationError::DuplicateVip {
                name: vip.name.clone(),
                address: vip.address,
            });
        }

        if !vip.address.is_ipv4() {
            errors.push(ValidationError::VipNotIpv4 {
                name: vip.name.clone(),
                address: vip.address,
            });
        }

        for backend in &vip.backends {
            if !backend.address.is_ipv4() {
                errors.push(ValidationError::BackendNotIpv4 {
                    name: vip.name.clone(),
                    address: backend.address,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{BackendConfig, VipConfig};

    fn vip(name: &str, address: &str, backends: Vec<&str>) -> VipConfig {
        VipConfig {
            name: name.to_string(),
            address: address.parse().unwrap(),
            backends: backends
                .into_iter()
                .map(|addr| BackendConfig {
                    address: addr.parse().unwrap(),
                    port: None,
                })
                .collect(),
        }
    }

    #[test]
    fn accepts_well_formed_config() {
        let config = SteerConfig {
            vips: vec![
                vip("web", "10.0.0.100", vec!["192.168.1.10", "192.168.1.11"]),
                vip("drained", "10.0.0.101", vec![]),
            ],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_duplicate_vip_addresses() {
        let config = SteerConfig {
            vips: vec![
                vip("a", "10.0.0.100", vec![]),
                vip("b", "10.0.0.100", vec![]),
            ],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::DuplicateVip { .. }));
    }

    #[test]
    fn rejects_ipv6_everywhere_and_reports_all() {
        let config = SteerConfig {
            vips: vec![vip("v6", "2001:db8::1", vec!["2001:db8::2", "10.0.0.1"])],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::VipNotIpv4 { .. }));
        assert!(matches!(errors[1], ValidationError::BackendNotIpv4 { .. }));
    }
}
