//! Service configuration loaded from TOML with environment overrides.
//!
//! A representative file:
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0:5000"
//!
//! [tickets]
//! number_prefix = "SMG"
//!
//! [logging]
//! filter = "grievance=debug,tower_http=info"
//!
//! [[principals]]
//! token = "officer-token"
//! name = "Ravi Kumar"
//! role = "officer"
//! department = "WATER_SUPPLY"
//! ```
//!
//! Every section is optional. Environment variables named by
//! [`ENV_BIND_ADDRESS`], [`ENV_LOG`] and [`ENV_TICKET_PREFIX`] take
//! precedence over the file.

use crate::{
    classification::domain::Department,
    identity::{
        adapters::StaticPrincipalDirectory,
        domain::{Principal, PrincipalId, Role},
    },
    ticket::domain::{TicketDomainError, TicketPrefix},
};
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::Deserialize;
use std::collections::HashSet;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;
use uuid::Uuid;

/// Overrides `[server] bind_address`.
pub const ENV_BIND_ADDRESS: &str = "GRIEVANCE_BIND_ADDRESS";
/// Overrides `[logging] filter`.
pub const ENV_LOG: &str = "GRIEVANCE_LOG";
/// Overrides `[tickets] number_prefix`.
pub const ENV_TICKET_PREFIX: &str = "GRIEVANCE_TICKET_PREFIX";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A bind address override is not `host:port`.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddress {
        /// Rejected value.
        value: String,
        /// Parser failure.
        #[source]
        source: AddrParseError,
    },
    /// A ticket prefix override failed validation.
    #[error(transparent)]
    InvalidPrefix(#[from] TicketDomainError),
    /// An officer entry does not name a department.
    #[error("officer '{0}' has no department")]
    OfficerWithoutDepartment(String),
    /// Two principal entries share a token.
    #[error("token for '{0}' is already assigned")]
    DuplicateToken(String),
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrievanceConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Ticket numbering settings.
    pub tickets: TicketConfig,
    /// Log filter settings.
    pub logging: LoggingConfig,
    /// Bearer tokens accepted by the static directory.
    pub principals: Vec<PrincipalEntry>,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

/// `[tickets]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TicketConfig {
    /// Prefix stamped on newly allocated ticket numbers.
    pub number_prefix: TicketPrefix,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// Role names accepted in `[[principals]]` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Member of the public.
    Citizen,
    /// Department officer; requires `department`.
    Officer,
    /// Administrator.
    Administrator,
}

/// One `[[principals]]` entry.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrincipalEntry {
    /// Bearer token presented by the principal.
    pub token: String,
    /// Stable identifier; generated at startup when omitted.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// Role granted to the token.
    pub role: RoleKind,
    /// Department served, for officers.
    #[serde(default)]
    pub department: Option<Department>,
}

impl std::fmt::Debug for PrincipalEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrincipalEntry")
            .field("token", &"<redacted>")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("department", &self.department)
            .finish()
    }
}

impl PrincipalEntry {
    /// Builds the principal this entry describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OfficerWithoutDepartment`] when an officer
    /// entry omits `department`.
    pub fn to_principal(&self) -> Result<Principal, ConfigError> {
        let role = match self.role {
            RoleKind::Citizen => Role::Citizen,
            RoleKind::Administrator => Role::Administrator,
            RoleKind::Officer => Role::Officer {
                department: self
                    .department
                    .ok_or_else(|| ConfigError::OfficerWithoutDepartment(self.name.clone()))?,
            },
        };
        let id = self.id.map_or_else(PrincipalId::new, PrincipalId::from_uuid);
        Ok(Principal::new(id, self.name.clone(), role))
    }
}

impl GrievanceConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |source: std::io::Error| ConfigError::Read {
            path: path.to_string(),
            source,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let text = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_toml_str(&text)
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] or
    /// [`ConfigError::InvalidPrefix`] for malformed overrides.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = non_blank(ENV_BIND_ADDRESS) {
            self.server.bind_address =
                value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidBindAddress {
                        value: value.clone(),
                        source,
                    })?;
        }
        if let Some(value) = non_blank(ENV_LOG) {
            self.logging.filter = value;
        }
        if let Some(value) = non_blank(ENV_TICKET_PREFIX) {
            self.tickets.number_prefix = TicketPrefix::new(value)?;
        }
        Ok(self)
    }

    /// Builds the token directory from `[[principals]]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OfficerWithoutDepartment`] or
    /// [`ConfigError::DuplicateToken`] for inconsistent entries.
    pub fn principal_directory(&self) -> Result<StaticPrincipalDirectory, ConfigError> {
        let mut seen = HashSet::new();
        let mut directory = StaticPrincipalDirectory::new();
        for entry in &self.principals {
            let token = entry.token.trim();
            if !seen.insert(token) {
                return Err(ConfigError::DuplicateToken(entry.name.clone()));
            }
            directory = directory.with_token(token, entry.to_principal()?);
        }
        Ok(directory)
    }
}
