// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::PORT;
use std::str::FromStr;

const ENV_ADDRESS: &str = "NETDBG_ADDRESS";
const ENV_PORT: &str = "NETDBG_PORT";

/// Console destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Destination IPv4 address. Broadcast if `None`.
    pub address: Option<String>,
    /// Destination UDP port.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: None,
            port: PORT,
        }
    }
}

impl Config {
    /// Create a config for `address` on the default port.
    pub fn new(address: Option<&str>) -> Self {
        Self {
            address: address.map(str::to_owned),
            ..Self::default()
        }
    }

    /// Read the destination from `NETDBG_ADDRESS` and `NETDBG_PORT`. Unset or invalid
    /// variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let address = var(ENV_ADDRESS).filter(|s| !s.is_empty());
        let port = var(ENV_PORT)
            .and_then(|s| {
                u16::from_str(&s)
                    .inspect_err(|_| eprintln!("Failed to parse port from `{ENV_PORT}={s}`"))
                    .ok()
            })
            .unwrap_or(PORT);
        Self { address, port }
    }
}
