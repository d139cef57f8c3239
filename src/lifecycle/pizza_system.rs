use crate::clients::OrderClient;
use crate::config::{Config, ConfigError};
use crate::menu::MenuCatalog;
use std::sync::Arc;
use tracing::{error, info};

/// The running order system: the menu, the order store task and the client in front of it.
///
/// # Example
///
/// ```ignore
/// let system = PizzaSystem::new(Config::default())?;
/// let order = system.order_client.create_order(&payload).await?;
/// system.shutdown().await?;
/// ```
pub struct PizzaSystem {
    /// Client for the order store
    pub order_client: OrderClient,

    /// The menu every payload is validated against
    pub menu: Arc<MenuCatalog>,

    handle: tokio::task::JoinHandle<()>,
}

impl PizzaSystem {
    /// Builds the menu from `config` and spawns the order store.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let menu = Arc::new(config.menu_catalog()?);
        let (order_actor, generic_client) =
            crate::order_actor::new(config.store.channel_capacity, config.store.first_order_id);

        let handle = tokio::spawn(order_actor.run(menu.clone()));
        let order_client = OrderClient::new(generic_client, menu.clone());

        info!(
            menu_items = menu.list_menu().len(),
            first_order_id = config.store.first_order_id,
            "Pizza system started"
        );

        Ok(Self {
            order_client,
            menu,
            handle,
        })
    }

    /// Drops the client and waits for the store to finish.
    ///
    /// Returns an error if the store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Order store task failed: {:?}", e);
            return Err(format!("Order store task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
