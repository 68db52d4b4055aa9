//! The data access component resolved and queried on startup.

use crate::config::ApplicationConfigProvider;
#[cfg(test)]
use mockall::automock;
use springtime_di::instance_provider::{ComponentInstancePtr, ErrorPtr};
use springtime_di::{component_alias, injectable, Component};
use tracing::info;

/// Thread-safe [Dao] trait object handed out by the container.
pub type DaoPtr = dyn Dao + Send + Sync;

/// Data access object. Implementations are discovered by the dependency injection framework and
/// can be resolved either by name or by type.
#[injectable]
#[cfg_attr(test, automock)]
pub trait Dao {
    /// Executes the query.
    fn query(&self) -> Result<(), ErrorPtr>;
}

/// Default [Dao], registered as the primary implementation under the name `dao`.
#[derive(Component)]
// must match DEFAULT_BEAN_NAME
#[component(names = ["dao"])]
pub struct IndexDao {
    config_provider: ComponentInstancePtr<dyn ApplicationConfigProvider + Send + Sync>,
}

#[component_alias(primary)]
impl Dao for IndexDao {
    fn query(&self) -> Result<(), ErrorPtr> {
        let config = self.config_provider.config()?;

        info!("Executing query...");
        println!("{}", config.query_message);

        Ok(())
    }
}
