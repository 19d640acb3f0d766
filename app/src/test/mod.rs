//! Guarded with `#[cfg(test)]` from `lib.rs`

use anyhow::Result;
use chrono::NaiveDate;
use maplit::btreeset;

use crate::catalog::{Catalog, Product, ProductStore, Sku};


fn product(sku: &str, name: &str, price: f64, category: &str) -> Product {
    Product {
        sku: Sku::from(sku),
        name: name.to_string(),
        price,
        category: category.to_string(),
        size: "medium".to_string(),
        ingredient: "mozzarella".to_string(),
        launch: NaiveDate::from_ymd_opt(2020, 1, 1).expect("date"),
    }
}

#[test]
fn save_then_find_returns_an_equal_record() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("save_then_find_returns_an_equal_record") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    let margherita = product("PZ001", "Margherita", 9.99, "classic");
    let saved = catalog.save(margherita.clone())?;
    assert_eq!(saved, margherita);

    let found = catalog.find(&Sku::from("PZ001"))?;
    assert_eq!(found, Some(margherita));
    Ok(())
}

#[test]
fn find_of_an_unknown_sku_is_absent() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("find_of_an_unknown_sku_is_absent") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    assert_eq!(catalog.find(&Sku::from("PZ404"))?, None);
    Ok(())
}

#[test]
fn delete_then_find_is_absent() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("delete_then_find_is_absent") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    catalog.save(product("PZ001", "Margherita", 9.99, "classic"))?;
    catalog.delete(&Sku::from("PZ001"))?;

    assert_eq!(catalog.find(&Sku::from("PZ001"))?, None);
    Ok(())
}

#[test]
fn delete_of_an_unknown_sku_is_quiet() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("delete_of_an_unknown_sku_is_quiet") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    catalog.delete(&Sku::from("PZ404"))?;
    Ok(())
}

#[test]
fn catalog_length_tracks_saves_and_deletes() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("catalog_length_tracks_saves_and_deletes") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    assert_eq!(catalog.find_all()?.len(), 0);

    catalog.save(product("PZ001", "Margherita", 9.99, "classic"))?;
    catalog.save(product("PZ002", "Diavola", 11.50, "spicy"))?;
    catalog.save(product("PZ003", "Quattro Formaggi", 12.00, "classic"))?;
    assert_eq!(catalog.find_all()?.len(), 3);

    catalog.delete(&Sku::from("PZ002"))?;
    assert_eq!(catalog.find_all()?.len(), 2);
    Ok(())
}

#[test]
fn second_save_with_the_same_sku_overwrites() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("second_save_with_the_same_sku_overwrites") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    catalog.save(product("PZ001", "Margherita", 9.99, "classic"))?;
    catalog.save(product("PZ001", "Margherita", 10.49, "classic"))?;

    let found = catalog.find(&Sku::from("PZ001"))?.expect("product");
    assert_eq!(found.price, 10.49);
    assert_eq!(catalog.find_all()?.len(), 1);
    Ok(())
}

#[test]
fn category_lookup_matches_exactly() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let Some(pool) = junk_drawer::pool("category_lookup_matches_exactly") else {
        return Ok(());
    };
    let catalog = Catalog::new(pool);

    catalog.save(product("PZ001", "Margherita", 9.99, "classic"))?;
    catalog.save(product("PZ002", "Quattro Formaggi", 12.00, "classic"))?;
    catalog.save(product("PZ003", "Diavola", 11.50, "spicy"))?;
    catalog.save(product("PZ004", "Margherita Grande", 13.99, "Classic"))?;

    let classics = catalog.find_by_category("classic")?;
    let skus = classics.into_iter().map(|p| p.sku).collect::<std::collections::BTreeSet<_>>();

    assert_eq!(skus, btreeset![Sku::from("PZ001"), Sku::from("PZ002")]);
    Ok(())
}
