use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use adminhub_core::AppError;
use adminhub_domain::PageCatalog;
use tracing_subscriber::EnvFilter;

/// Storage backend behind the role store and audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleStoreBackend {
    Memory,
    Postgres,
}

impl FromStr for RoleStoreBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => Err(AppError::Validation(format!(
                "ROLE_STORE must be either 'memory' or 'postgres', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub role_store_backend: RoleStoreBackend,
    pub database_url: Option<String>,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub page_catalog: PageCatalog,
    pub seed_system_roles: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let role_store_backend = lookup("ROLE_STORE")
            .map(|value| RoleStoreBackend::from_str(value.as_str()))
            .transpose()?
            .unwrap_or(RoleStoreBackend::Memory);

        let database_url = lookup("DATABASE_URL").filter(|value| !value.trim().is_empty());
        if database_url.is_none() && (migrate_only || role_store_backend == RoleStoreBackend::Postgres)
        {
            return Err(AppError::Validation(
                "DATABASE_URL is required for the postgres role store".to_owned(),
            ));
        }

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let page_catalog = match lookup("PAGE_CATALOG").filter(|value| !value.trim().is_empty()) {
            Some(pages) => PageCatalog::new(pages.split(',').map(str::trim))
                .map_err(|error| AppError::Validation(format!("invalid PAGE_CATALOG: {error}")))?,
            None => PageCatalog::standard(),
        };

        let seed_system_roles = match lookup("SEED_SYSTEM_ROLES") {
            Some(value) => parse_flag("SEED_SYSTEM_ROLES", value.as_str())?,
            None => true,
        };

        Ok(Self {
            migrate_only,
            role_store_backend,
            database_url,
            frontend_url,
            api_host,
            api_port,
            page_catalog,
            seed_system_roles,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }

    pub fn required_database_url(&self) -> Result<&str, AppError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| AppError::Validation("DATABASE_URL is required".to_owned()))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
