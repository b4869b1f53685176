//! Database connection settings.
//!
//! Responsibilities:
//! - Hold the resolved database name, user, password, and host.
//! - Split the host string into a TCP endpoint or a Unix socket path.
//!
//! Invariants:
//! - The password is a `SecretString`; `Debug` prints it redacted.
//! - A host without a `:port` suffix connects on `DEFAULT_DB_PORT`.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_USER,
};

/// Database credentials and location.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Schema name (`DB_NAME`).
    pub name: String,
    /// Login user (`DB_USER`).
    pub user: String,
    /// Login password (`DB_PASSWORD`).
    pub password: SecretString,
    /// Host, `host:port`, or `host:/path/to/socket` (`DB_HOST`).
    pub host: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DB_NAME.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: SecretString::new(DEFAULT_DB_PASSWORD.into()),
            host: DEFAULT_DB_HOST.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Parse `host` into a connectable endpoint.
    pub fn host_endpoint(&self) -> DbEndpoint {
        DbEndpoint::parse(&self.host)
    }

    /// Returns true if the password is still the built-in development default.
    pub fn is_using_default_password(&self) -> bool {
        self.password.expose_secret() == DEFAULT_DB_PASSWORD
    }
}

/// Where the database server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbEndpoint {
    Tcp { host: String, port: u16 },
    Socket { host: String, path: String },
}

impl DbEndpoint {
    /// Split a `DB_HOST` value.
    ///
    /// - `db` connects over TCP on the default port.
    /// - `db:3307` connects over TCP on port 3307.
    /// - `localhost:/run/mysqld/mysqld.sock` (any non-numeric suffix) is a socket path.
    /// - `localhost:3306:/run/mysqld/mysqld.sock` is a socket path; the port is ignored.
    /// - `[::1]:3307` and `[::1]` are bracketed IPv6 literals.
    /// - `::1` (more than one colon, no brackets) is an IPv6 host on the default port.
    pub fn parse(raw: &str) -> Self {
        let (addr, socket) = match raw.find(":/") {
            Some(idx) => (&raw[..idx], Some(&raw[idx + 1..])),
            None => (raw, None),
        };
        let (host, suffix) = split_host_port(addr);

        match (socket, suffix) {
            (Some(path), _) => Self::socket(host, path),
            (None, None) | (None, Some("")) => Self::tcp(host, DEFAULT_DB_PORT),
            (None, Some(suffix)) => match suffix.parse::<u16>() {
                Ok(port) => Self::tcp(host, port),
                Err(_) => Self::socket(host, suffix),
            },
        }
    }

    fn socket(host: &str, path: &str) -> Self {
        DbEndpoint::Socket {
            host: host.to_string(),
            path: path.to_string(),
        }
    }

    fn tcp(host: &str, port: u16) -> Self {
        DbEndpoint::Tcp {
            host: host.to_string(),
            port,
        }
    }

    /// Host part, without port or socket path.
    pub fn host(&self) -> &str {
        match self {
            DbEndpoint::Tcp { host, .. } | DbEndpoint::Socket { host, .. } => host,
        }
    }
}

/// Split `addr` into host and the text after the port separator, if any.
fn split_host_port(addr: &str) -> (&str, Option<&str>) {
    if let Some(rest) = addr.strip_prefix('[')
        && let Some((host, tail)) = rest.split_once(']')
    {
        return (host, tail.strip_prefix(':'));
    }
    if addr.matches(':').count() > 1 {
        return (addr, None);
    }
    match addr.split_once(':') {
        Some((host, suffix)) => (host, Some(suffix)),
        None => (addr, None),
    }
}

impl fmt::Display for DbEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbEndpoint::Tcp { host, port } if host.contains(':') => {
                write!(f, "tcp://[{host}]:{port}")
            }
            DbEndpoint::Tcp { host, port } => write!(f, "tcp://{host}:{port}"),
            DbEndpoint::Socket { path, .. } => write!(f, "unix://{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host_is_compose_service() {
        let endpoint = DatabaseConfig::default().host_endpoint();
        assert_eq!(
            endpoint,
            DbEndpoint::Tcp {
                host: "db".to_string(),
                port: 3306
            }
        );
    }

    #[test]
    fn test_bare_host_uses_default_port() {
        assert_eq!(
            DbEndpoint::parse("mysql.internal"),
            DbEndpoint::Tcp {
                host: "mysql.internal".to_string(),
                port: DEFAULT_DB_PORT
            }
        );
        assert_eq!(
            DbEndpoint::parse("mysql.internal:"),
            DbEndpoint::Tcp {
                host: "mysql.internal".to_string(),
                port: DEFAULT_DB_PORT
            }
        );
    }

    #[test]
    fn test_explicit_port() {
        assert_eq!(
            DbEndpoint::parse("mysql.prod:3307"),
            DbEndpoint::Tcp {
                host: "mysql.prod".to_string(),
                port: 3307
            }
        );
    }

    #[test]
    fn test_socket_suffix() {
        let endpoint = DbEndpoint::parse("localhost:/var/run/mysqld/mysqld.sock");
        assert_eq!(
            endpoint,
            DbEndpoint::Socket {
                host: "localhost".to_string(),
                path: "/var/run/mysqld/mysqld.sock".to_string()
            }
        );
        assert_eq!(endpoint.to_string(), "unix:///var/run/mysqld/mysqld.sock");
    }

    #[test]
    fn test_out_of_range_port_is_not_a_port() {
        assert!(matches!(
            DbEndpoint::parse("db:70000"),
            DbEndpoint::Socket { .. }
        ));
    }

    #[test]
    fn test_bracketed_ipv6() {
        let endpoint = DbEndpoint::parse("[::1]:3307");
        assert_eq!(
            endpoint,
            DbEndpoint::Tcp {
                host: "::1".to_string(),
                port: 3307
            }
        );
        assert_eq!(endpoint.to_string(), "tcp://[::1]:3307");
        assert_eq!(DbEndpoint::parse("[::1]").host(), "::1");
    }

    #[test]
    fn test_unbracketed_ipv6_is_a_host() {
        let endpoint = DbEndpoint::parse("::1");
        assert_eq!(
            endpoint,
            DbEndpoint::Tcp {
                host: "::1".to_string(),
                port: DEFAULT_DB_PORT
            }
        );
        assert_eq!(endpoint.to_string(), "tcp://[::1]:3306");
    }

    #[test]
    fn test_host_port_socket_form() {
        assert_eq!(
            DbEndpoint::parse("localhost:3306:/run/mysqld/mysqld.sock"),
            DbEndpoint::Socket {
                host: "localhost".to_string(),
                path: "/run/mysqld/mysqld.sock".to_string()
            }
        );
    }

    #[test]
    fn test_missing_host_name_is_empty() {
        assert_eq!(DbEndpoint::parse(":3307").host(), "");
        assert_eq!(DbEndpoint::parse(":/tmp/mysql.sock").host(), "");
    }

    #[test]
    fn test_debug_redacts_password() {
        let db = DatabaseConfig {
            password: SecretString::new("hunter2".into()),
            ..DatabaseConfig::default()
        };
        let debug = format!("{:?}", db);
        assert!(!debug.contains("hunter2"));
        assert!(!db.is_using_default_password());
        assert!(DatabaseConfig::default().is_using_default_password());
    }
}
