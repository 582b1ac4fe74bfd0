use std::sync::Arc;

use cardapio::search::{CategoryFilter, ProductFilter};
use cardapio_app::client::ProductsApi;
use clap::Args;

use crate::cli::{render, require_list};

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Search in names and descriptions, ignoring accents and case
    #[arg(short, long, default_value = "")]
    query: String,

    /// Category tab (all, pizza, burger, drink, snack)
    #[arg(short, long, default_value = "all")]
    category: CategoryFilter,
}

pub(crate) async fn run(
    api: Arc<dyn ProductsApi>,
    phone: &str,
    args: MenuArgs,
) -> Result<(), String> {
    let (_list, snapshot) = require_list(api).await?;

    let filter = ProductFilter::new(&args.query, args.category);
    let products = filter.apply(&snapshot.items);

    println!("{}", render::category_tabs(args.category));

    if products.is_empty() {
        println!("Nenhum produto encontrado.");
        return Ok(());
    }

    println!("{}", render::menu_table(&products, phone));

    Ok(())
}
