use std::sync::Arc;

use cardapio_app::{
    client::ProductsApi,
    config::AppConfig,
    listing::{ListSnapshot, ProductListState},
    logging,
};
use clap::{Parser, Subcommand};

mod menu;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "cardapio-admin", about = "Cardápio menu and admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the public menu
    Menu(menu::MenuArgs),

    /// Manage products
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        logging::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let api = self
            .config
            .api
            .connect()
            .map_err(|error| format!("failed to build products client: {error}"))?;

        match self.command {
            Commands::Menu(args) => menu::run(api, &self.config.api.whatsapp_phone, args).await,
            Commands::Products(command) => products::run(api, command).await,
        }
    }
}

/// Mount a product list and wait for its first load.
async fn load_list(api: Arc<dyn ProductsApi>) -> (ProductListState, ListSnapshot) {
    let list = ProductListState::mount(api);
    let snapshot = list.settled().await;

    (list, snapshot)
}

/// Loaded snapshot, or the load error as a command failure.
async fn require_list(api: Arc<dyn ProductsApi>) -> Result<(ProductListState, ListSnapshot), String> {
    let (list, snapshot) = load_list(api).await;

    if let Some(error) = &snapshot.error {
        return Err(format!("Erro ao carregar produtos: {error}"));
    }

    Ok((list, snapshot))
}
