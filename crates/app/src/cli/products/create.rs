use std::{path::PathBuf, sync::Arc};

use cardapio_app::{client::ProductsApi, forms::CreateProductForm};
use clap::Args;

use super::report;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long)]
    description: String,

    /// Price, comma or dot as decimal separator (e.g. 25,90)
    #[arg(long)]
    price: String,

    /// Local image file
    #[arg(long)]
    image: PathBuf,
}

pub(crate) async fn run(api: Arc<dyn ProductsApi>, args: CreateProductArgs) -> Result<(), String> {
    let mut form = CreateProductForm::new(api);

    form.set_name(args.name);
    form.set_description(args.description);
    form.set_price(&args.price);

    if !form.pick_image(&args.image).await {
        return report(false, form.notice(), "Erro ao ler a imagem.");
    }

    let created = form.submit().await;

    report(created, form.notice(), "Erro ao criar produto.")
}
