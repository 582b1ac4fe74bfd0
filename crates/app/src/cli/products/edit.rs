use std::{borrow::Cow, path::PathBuf, sync::Arc};

use cardapio_app::{client::ProductsApi, forms::EditView};
use clap::Args;

use crate::cli::load_list;

use super::report;

#[derive(Debug, Args)]
pub(crate) struct EditProductArgs {
    /// Product id
    id: String,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New price
    #[arg(long)]
    price: Option<String>,

    /// New image file
    #[arg(long)]
    image: Option<PathBuf>,
}

pub(crate) async fn run(api: Arc<dyn ProductsApi>, args: EditProductArgs) -> Result<(), String> {
    let (_list, snapshot) = load_list(Arc::clone(&api)).await;

    let view = EditView::open(api, &snapshot, Some(&args.id));

    let mut form = match view {
        EditView::Ready(form) => form,
        guarded => {
            let message = guarded.guard_message().map(Cow::into_owned);

            return Err(message.unwrap_or_else(|| "Produto não encontrado.".to_string()));
        }
    };

    if let Some(name) = args.name {
        form.set_name(name);
    }

    if let Some(description) = args.description {
        form.set_description(description);
    }

    if let Some(price) = args.price {
        form.set_price(price);
    }

    if let Some(path) = &args.image {
        if !form.pick_image(path).await {
            return report(false, form.notice(), "Erro ao ler a imagem.");
        }
    }

    let patch = form.patch();

    if !patch.is_empty() {
        println!("Alterando: {}", patch.changed_fields().join(", "));
    }

    let updated = form.submit().await;
    let nothing_changed = patch.is_empty();

    report(updated || nothing_changed, form.notice(), "Erro ao atualizar.")
}
