use std::sync::Arc;

use cardapio::search::{CategoryFilter, ProductFilter};
use cardapio_app::client::ProductsApi;
use clap::Args;

use crate::cli::{render, require_list};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Search in names and descriptions
    #[arg(short, long, default_value = "")]
    query: String,

    /// Only products of this category
    #[arg(short, long, default_value = "all")]
    category: CategoryFilter,
}

pub(crate) async fn run(api: Arc<dyn ProductsApi>, args: ListProductsArgs) -> Result<(), String> {
    let (_list, snapshot) = require_list(api).await?;

    let products = ProductFilter::new(&args.query, args.category).apply(&snapshot.items);

    if products.is_empty() {
        println!("Nenhum produto encontrado.");
        return Ok(());
    }

    println!("{}", render::admin_table(&products));
    println!("{} de {} produtos", products.len(), snapshot.items.len());

    Ok(())
}
