//! Configuration for SodaDB
//!
//! Centralized configuration with sensible defaults. Values are read once at
//! startup and never re-read.

use crate::error::{Result, SodaError};
use crate::network;

/// Port the server always listens on
pub const LISTEN_PORT: u16 = 8080;

/// Main configuration for a SodaDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Bind Target
    // -------------------------------------------------------------------------
    /// Network interface whose first IPv4 address becomes the routed host
    pub network_interface: Option<String>,

    /// Explicit routed IP address or hostname; wins over `network_interface`
    pub ipaddr_hostname: Option<String>,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen port (all addresses)
    pub listen_port: u16,

    // -------------------------------------------------------------------------
    // Operator
    // -------------------------------------------------------------------------
    /// Display name of the company running the instance
    pub company: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_interface: None,
            ipaddr_hostname: None,
            listen_port: LISTEN_PORT,
            company: "Kube-Cola".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the host that routes are scoped to
    ///
    /// An explicit hostname is used as is; otherwise the interface's IPv4
    /// address is looked up. Having neither is a configuration error.
    pub fn resolve_host(&self) -> Result<String> {
        if let Some(host) = non_empty(&self.ipaddr_hostname) {
            return Ok(host.to_string());
        }
        match non_empty(&self.network_interface) {
            Some(name) => Ok(network::interface_ipv4(name)?.to_string()),
            None => Err(SodaError::Config(
                "Either --network-interface or --ipaddr-hostname must be specified!".to_string(),
            )),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the network interface to take the routed host from
    pub fn network_interface(mut self, name: impl Into<String>) -> Self {
        self.config.network_interface = Some(name.into());
        self
    }

    /// Set the routed IP address or hostname
    pub fn ipaddr_hostname(mut self, host: impl Into<String>) -> Self {
        self.config.ipaddr_hostname = Some(host.into());
        self
    }

    /// Set the TCP listen port
    pub fn listen_port(mut self, port: u16) -> Self {
        self.config.listen_port = port;
        self
    }

    /// Set the operator display name
    pub fn company(mut self, name: impl Into<String>) -> Self {
        self.config.company = name.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
