use std::sync::Arc;

use cardapio_app::client::ProductsApi;
use clap::Args;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::cli::require_list;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product id
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub(crate) async fn run(api: Arc<dyn ProductsApi>, args: DeleteProductArgs) -> Result<(), String> {
    let (list, snapshot) = require_list(api).await?;

    let product = snapshot
        .find(&args.id)
        .ok_or_else(|| "Produto não encontrado.".to_string())?;

    let id = product
        .id
        .clone()
        .ok_or_else(|| "ID inválido.".to_string())?;

    if !args.yes && !confirm(&product.name).await? {
        println!("Exclusão cancelada.");
        return Ok(());
    }

    list.delete(id)
        .await
        .map_err(|error| format!("Erro ao excluir: {error}"))?;

    println!("Produto \"{}\" excluído.", product.name);

    Ok(())
}

async fn confirm(name: &str) -> Result<bool, String> {
    let mut stdout = io::stdout();

    let prompt = format!("{name}\nTem certeza que deseja excluir este produto? [s/N] ");

    stdout
        .write_all(prompt.as_bytes())
        .await
        .map_err(|error| format!("failed to write prompt: {error}"))?;
    stdout
        .flush()
        .await
        .map_err(|error| format!("failed to write prompt: {error}"))?;

    let mut answer = String::new();

    BufReader::new(io::stdin())
        .read_line(&mut answer)
        .await
        .map_err(|error| format!("failed to read answer: {error}"))?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}
