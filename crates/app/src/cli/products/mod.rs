use std::sync::Arc;

use cardapio_app::{client::ProductsApi, forms::Notice};
use clap::{Args, Subcommand};

mod create;
mod delete;
mod edit;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products with ids and image kinds
    List(list::ListProductsArgs),

    /// Create a product
    Create(create::CreateProductArgs),

    /// Change some fields of a product
    Edit(edit::EditProductArgs),

    /// Delete a product
    Delete(delete::DeleteProductArgs),
}

pub(crate) async fn run(api: Arc<dyn ProductsApi>, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(api, args).await,
        ProductsSubcommand::Create(args) => create::run(api, args).await,
        ProductsSubcommand::Edit(args) => edit::run(api, args).await,
        ProductsSubcommand::Delete(args) => delete::run(api, args).await,
    }
}

/// Print a success or info notice, or turn an error notice into a failure.
fn report(succeeded: bool, notice: Option<&Notice>, fallback: &str) -> Result<(), String> {
    let message = notice.map_or(fallback, |notice| notice.message.as_str());

    if succeeded {
        println!("{message}");
        Ok(())
    } else {
        Err(message.to_string())
    }
}
