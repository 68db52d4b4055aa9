//! Application bootstrap: creates the component container, resolves the dao and queries it.

use crate::config::{ApplicationConfig, ApplicationConfigProvider};
use crate::dao::DaoPtr;
use crate::logging;
use derive_more::Constructor;
use springtime_di::component_registry::ComponentDefinitionRegistryError;
use springtime_di::factory::{ComponentFactory, ComponentFactoryBuilder};
use springtime_di::instance_provider::{
    ComponentInstanceProvider, ComponentInstanceProviderError, ComponentInstancePtr, ErrorPtr,
    TypedComponentInstanceProvider,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Clone, Error, Debug)]
pub enum ApplicationError {
    #[error("Error creating component container: {0}")]
    ContainerError(ComponentDefinitionRegistryError),
    #[error("Error retrieving config provider: {0}")]
    ConfigInjectionError(ComponentInstanceProviderError),
    #[error("Config error: {0}")]
    ConfigError(ErrorPtr),
    #[error("Error resolving dao: {0}")]
    ResolutionError(ComponentInstanceProviderError),
    #[error("Query error: {0}")]
    QueryError(ErrorPtr),
}

/// Way of resolving the dao from the container.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Lookup {
    /// Resolve a component registered under given name.
    ByName(String),
    /// Resolve the primary component for the dao type.
    ByType,
}

/// Main entrypoint for the application. Resolves a single [Dao](crate::dao::Dao) from the given
/// instance provider and runs its query.
#[derive(Constructor)]
pub struct Application<CIP: ComponentInstanceProvider> {
    instance_provider: CIP,
}

impl<CIP: ComponentInstanceProvider> Application<CIP> {
    /// Retrieves [ApplicationConfig] from the primary [ApplicationConfigProvider].
    pub fn config(&mut self) -> Result<ApplicationConfig, ApplicationError> {
        let provider = self
            .instance_provider
            .primary_instance_typed::<dyn ApplicationConfigProvider + Send + Sync>()
            .map_err(ApplicationError::ConfigInjectionError)?;

        provider.config().cloned().map_err(ApplicationError::ConfigError)
    }

    /// Resolves the dao once using given [Lookup] and queries it once. Nothing is queried if
    /// resolution fails.
    pub fn run(&mut self, lookup: &Lookup) -> Result<(), ApplicationError> {
        let dao = self.resolve(lookup)?;

        info!("Running dao query...");
        dao.query().map_err(ApplicationError::QueryError)?;

        debug!("Done running dao query.");
        Ok(())
    }

    fn resolve(
        &mut self,
        lookup: &Lookup,
    ) -> Result<ComponentInstancePtr<DaoPtr>, ApplicationError> {
        match lookup {
            Lookup::ByName(name) => {
                info!(name = %name, "Resolving dao by name...");
                self.instance_provider.instance_by_name_typed::<DaoPtr>(name)
            }
            Lookup::ByType => {
                info!("Resolving dao by type...");
                self.instance_provider.primary_instance_typed::<DaoPtr>()
            }
        }
        .map_err(ApplicationError::ResolutionError)
    }
}

/// Creates an [Application] backed by a [ComponentFactory] with all registered components.
pub fn create_default() -> Result<Application<ComponentFactory>, ComponentDefinitionRegistryError>
{
    ComponentFactoryBuilder::new().map(|builder| Application::new(builder.build()))
}

/// Runs the whole program: creates the container, reads config, installs logging if requested,
/// then resolves and queries the dao.
pub fn bootstrap() -> Result<(), ApplicationError> {
    let mut application = create_default().map_err(ApplicationError::ContainerError)?;
    let config = application.config()?;

    if config.install_tracing_logger {
        logging::install_tracing_logger();
    }

    application.run(&config.lookup())
}
