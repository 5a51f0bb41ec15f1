use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Runtime/server settings read from the environment.

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Unset or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: parse_or(lookup("VERIFY_SLIP_HOST"), defaults.host),
            port: parse_or(lookup("VERIFY_SLIP_PORT"), defaults.port),
            max_body_bytes: parse_or(
                lookup("VERIFY_SLIP_MAX_BODY_BYTES"),
                defaults.max_body_bytes,
            ),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, fallback: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}
