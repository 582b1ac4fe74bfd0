//! Table rendering

use cardapio::{
    ordering::order_link,
    prices::format_price,
    products::{Category, Product},
    search::CategoryFilter,
};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

const ALL_LABEL: &str = "Todos";

/// Category tabs with the selected one in brackets.
pub(crate) fn category_tabs(selected: CategoryFilter) -> String {
    let tabs = std::iter::once((CategoryFilter::All, ALL_LABEL)).chain(
        Category::ALL
            .into_iter()
            .map(|category| (CategoryFilter::Only(category), category.label())),
    );

    tabs.map(|(filter, label)| {
        if filter == selected {
            format!("[{label}]")
        } else {
            label.to_string()
        }
    })
    .collect::<Vec<_>>()
    .join("  ")
}

/// Public menu: name, description, price and an order link to `phone`.
pub(crate) fn menu_table(products: &[&Product], phone: &str) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Nome", "Descrição", "Preço", "Pedir"]);

    for product in products {
        builder.push_record([
            product.name.clone(),
            product.description.clone(),
            format_price(&product.price),
            order_link(product, phone).map_or_else(|_err| "-".to_string(), String::from),
        ]);
    }

    finish(builder, 2)
}

/// Admin listing with ids, categories and the stored image kind.
pub(crate) fn admin_table(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Nome", "Categoria", "Preço", "Imagem"]);

    for product in products {
        builder.push_record([
            product
                .id
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
            product.name.clone(),
            product
                .category
                .map_or("-", Category::label)
                .to_string(),
            format_price(&product.price),
            product.image().map_or("-", |image| image.kind()).to_string(),
        ]);
    }

    finish(builder, 3)
}

fn finish(builder: Builder, price_column: usize) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(price_column..price_column + 1), Alignment::right());

    table.to_string()
}
