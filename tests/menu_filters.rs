//! Integration tests for menu search over a parsed product list

use testresult::TestResult;

use cardapio::prelude::*;

const MENU: &str = r#"[
    {"id": 1, "name": "Pizza Portuguesa", "desc": "Presunto, ovos e cebola", "price": 49.9, "category": "pizza"},
    {"id": "2", "name": "Pão de Queijo", "description": "Porção com 10 unidades", "price": "18,00", "category": "snack"},
    {"id": 3, "name": "Guaraná", "description": "Lata 350ml", "price": 6, "category": "drink"},
    {"id": 4, "name": "Hambúrguer Clássico", "description": "Pão brioche e cheddar", "price": "32.50", "category": "burger"},
    {"id": 5, "name": "Combo Família", "description": "Duas pizzas e um refrigerante", "price": 99}
]"#;

fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn unaccented_query_finds_accented_names() -> TestResult {
    let products = products_from_body(MENU)?;

    let found = ProductFilter::new("guarana", CategoryFilter::All).apply(&products);

    assert_eq!(names(&found), ["Guaraná"]);

    Ok(())
}

#[test]
fn query_matches_descriptions_mapped_from_desc() -> TestResult {
    let products = products_from_body(MENU)?;

    let found = ProductFilter::new("OVOS", CategoryFilter::All).apply(&products);

    assert_eq!(names(&found), ["Pizza Portuguesa"]);

    Ok(())
}

#[test]
fn query_spans_name_and_description_in_list_order() -> TestResult {
    let products = products_from_body(MENU)?;

    let found = ProductFilter::new("pao", CategoryFilter::All).apply(&products);

    assert_eq!(names(&found), ["Pão de Queijo", "Hambúrguer Clássico"]);

    Ok(())
}

#[test]
fn empty_query_with_all_returns_whole_menu() -> TestResult {
    let products = products_from_body(MENU)?;

    let found = ProductFilter::new("", CategoryFilter::All).apply(&products);

    assert_eq!(found.len(), products.len());

    Ok(())
}

#[test]
fn category_and_query_combine() -> TestResult {
    let products = products_from_body(MENU)?;

    let pizzas = ProductFilter::new("pizza", CategoryFilter::Only(Category::Pizza)).apply(&products);

    // "Combo Família" mentions pizzas but carries no category.
    assert_eq!(names(&pizzas), ["Pizza Portuguesa"]);

    Ok(())
}

#[test]
fn every_accented_name_matches_its_folded_form() -> TestResult {
    let products = products_from_body(MENU)?;

    for product in &products {
        let filter = ProductFilter::new(&fold(&product.name), CategoryFilter::All);

        assert!(filter.matches(product), "{} should match itself", product.name);
    }

    Ok(())
}
