//! Application configuration is based on injecting an [ApplicationConfigProvider], which can later
//! be used to retrieve [ApplicationConfig]. The bootstrap uses this config to decide how to resolve
//! the dao component, but it can also be injected into any other component.
//!
//! By default, the config is created with opinionated default values, which can then be overwritten
//! by environment variables prefixed with `LUBAN_` or `luban.json` file.

use crate::application::Lookup;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use springtime_di::component_registry::conditional::unregistered_component;
use springtime_di::instance_provider::ErrorPtr;
use springtime_di::{component_alias, injectable, Component};
use std::error::Error;
use std::sync::Arc;

const CONFIG_ENV_PREFIX: &str = "LUBAN";

/// Name of the default config file.
pub const CONFIG_FILE: &str = "luban.json";

/// Name under which the dao component is registered.
pub const DEFAULT_BEAN_NAME: &str = "dao";

fn convert_error<E: Error + Send + Sync + 'static>(error: E) -> ErrorPtr {
    Arc::new(error) as ErrorPtr
}

/// Serializable counterpart of [Lookup], without the bean name.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    /// Resolve the component by its registered name.
    Name,
    /// Resolve the primary component of the dao type.
    Type,
}

/// Application configuration which can be provided by an [ApplicationConfigProvider].
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ApplicationConfig {
    /// Should a default tracing logger be installed in the scope of the application.
    pub install_tracing_logger: bool,
    /// How to resolve the dao component.
    pub lookup: LookupKind,
    /// Component name used when resolving by name.
    pub bean_name: String,
    /// Line written by the dao on each query.
    pub query_message: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            install_tracing_logger: true,
            lookup: LookupKind::Name,
            bean_name: DEFAULT_BEAN_NAME.to_string(),
            query_message: "query".to_string(),
        }
    }
}

impl From<OptionalApplicationConfig> for ApplicationConfig {
    fn from(value: OptionalApplicationConfig) -> Self {
        let default = Self::default();
        Self {
            install_tracing_logger: value
                .install_tracing_logger
                .unwrap_or(default.install_tracing_logger),
            lookup: value.lookup.unwrap_or(default.lookup),
            bean_name: value.bean_name.unwrap_or(default.bean_name),
            query_message: value.query_message.unwrap_or(default.query_message),
        }
    }
}

impl ApplicationConfig {
    fn init_from_environment() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(CONFIG_ENV_PREFIX))
            .build()
            .and_then(Self::from_config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        config
            .try_deserialize::<OptionalApplicationConfig>()
            .map(|config| config.into())
    }

    /// Returns the [Lookup] described by this config.
    pub fn lookup(&self) -> Lookup {
        match self.lookup {
            LookupKind::Name => Lookup::ByName(self.bean_name.clone()),
            LookupKind::Type => Lookup::ByType,
        }
    }
}

/// Provider for [ApplicationConfig]. The primary instance of the provider will be used to retrieve
/// application configuration.
#[injectable]
pub trait ApplicationConfigProvider {
    fn config(&self) -> Result<&ApplicationConfig, ErrorPtr>;
}

#[derive(Component)]
#[component(
    priority = -128,
    condition = "unregistered_component::<dyn ApplicationConfigProvider + Send + Sync>",
    constructor = "DefaultApplicationConfigProvider::new"
)]
struct DefaultApplicationConfigProvider {
    // cached init result
    #[component(ignore)]
    config: Result<ApplicationConfig, ErrorPtr>,
}

impl DefaultApplicationConfigProvider {
    fn new() -> Result<Self, ErrorPtr> {
        Ok(Self {
            config: ApplicationConfig::init_from_environment().map_err(convert_error),
        })
    }
}

#[component_alias]
impl ApplicationConfigProvider for DefaultApplicationConfigProvider {
    fn config(&self) -> Result<&ApplicationConfig, ErrorPtr> {
        match &self.config {
            Ok(config) => Ok(config),
            Err(error) => Err(error.clone()),
        }
    }
}

#[derive(Deserialize)]
struct OptionalApplicationConfig {
    install_tracing_logger: Option<bool>,
    lookup: Option<LookupKind>,
    bean_name: Option<String>,
    query_message: Option<String>,
}
