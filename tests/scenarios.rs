//! End-to-end behavior through the public API: a registry of book tables.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arms_recommend::{Pearson, RankedPair, RatingItem, Registry, TableConfig, TableError};

type Books = arms_recommend::Table<String>;

fn s(value: &str) -> String {
    value.to_string()
}

fn ratings(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(k, v)| (s(k), *v)).collect()
}

fn add(table: &Books, key: &str, pairs: &[(&str, f64)]) {
    table.add(s(key), ratings(pairs).into_iter().collect::<arms_recommend::Ratings<_>>());
}

fn keys<T: Clone>(pairs: &[RankedPair<T>]) -> Vec<T> {
    pairs.iter().map(|pair| pair.key.clone()).collect()
}

fn add_chris(table: &Books) {
    add(table, "Chris", &[("1984", 5.0), ("Robinson Crusoe", 4.0), ("Moby-Dick", 3.0)]);
}

#[test]
fn test_items_retrievable_after_add() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");

    add_chris(&books);
    add(&books, "Jay", &[("1984", 5.0), ("Robinson Crusoe", 4.0), ("Gulliver's Travels", 4.5)]);

    assert!(books.value(&s("Chris")).is_ok());
    assert!(books.value(&s("Jay")).is_ok());
}

#[test]
fn test_single_neighbor_near_identical() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");

    add_chris(&books);
    add(&books, "Jay", &[("1984", 5.0), ("Robinson Crusoe", 4.0), ("Gulliver's Travels", 4.5)]);

    let neighbors = books.neighbors(&s("Chris")).unwrap();

    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors[0].key, "Jay");
    assert!(neighbors[0].score > 0.99);
}

#[test]
fn test_neighbors_ordered_by_similarity() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");

    add_chris(&books);
    add(&books, "Jay", &[("1984", 5.0), ("Robinson Crusoe", 4.0), ("Gulliver's Travels", 4.5)]);
    add(&books, "Mary", &[("1984", 4.0), ("Robinson Crusoe", 3.0), ("Gulliver's Travels", 4.5)]);
    add(&books, "Jack", &[("1984", 3.0), ("Robinson Crusoe", 1.0)]);

    let neighbors = books.neighbors(&s("Chris")).unwrap();

    assert_eq!(keys(&neighbors), vec![s("Jay"), s("Mary"), s("Jack")]);
    assert!(neighbors.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_recommend_unread_books() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");

    add_chris(&books);
    add(
        &books,
        "Jay",
        &[
            ("1984", 4.0),
            ("Robinson Crusoe", 3.0),
            ("Gulliver's Travels", 4.5),
            ("A Tale of Two Cities", 3.5),
        ],
    );

    let recs = books.recommend(&s("Chris")).unwrap();

    assert_eq!(keys(&recs), vec![s("Gulliver's Travels"), s("A Tale of Two Cities")]);
    assert!((recs[0].score - 4.5).abs() < 1e-9);
    assert!((recs[1].score - 3.5).abs() < 1e-9);
}

#[test]
fn test_recommend_never_returns_known_items() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");

    add_chris(&books);
    add(&books, "Jay", &[("1984", 5.0), ("Moby-Dick", 1.0), ("Dune", 4.0)]);
    add(&books, "Mary", &[("Robinson Crusoe", 2.0), ("Emma", 5.0), ("Dune", 2.0)]);

    let chris = books.value(&s("Chris")).unwrap();
    let recs = books.recommend(&s("Chris")).unwrap();

    assert!(!recs.is_empty());
    assert!(recs.iter().all(|pair| !chris.ratings().contains(&pair.key)));
    assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_delete_missing_leaves_count() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");
    add_chris(&books);

    let result = books.delete(&s("Nobody"));

    assert!(matches!(result, Err(TableError::NotFound { .. })));
    assert_eq!(books.count(), 1);
}

#[test]
fn test_flush_clears_without_delete_hook() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");
    let deletes = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&deletes);
    books.set_about_to_delete_callback(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    books.set_logger(arms_recommend::TracingSink::new("books"));

    add_chris(&books);
    add(&books, "Jay", &[("1984", 5.0)]);

    books.flush();

    assert_eq!(books.count(), 0);
    assert!(!books.exists(&s("Chris")));
    assert!(!books.exists(&s("Jay")));
    assert_eq!(deletes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_loader_backed_table() {
    let registry: Registry<String> = Registry::new();
    let books = registry.table("books");
    let added = Arc::new(AtomicUsize::new(0));

    books.set_data_loader(|key: &String| {
        (key == "Jay").then(|| {
            RatingItem::new(
                s("Jay"),
                ratings(&[("1984", 5.0), ("Robinson Crusoe", 4.0), ("Dune", 4.0)])
                    .into_iter()
                    .collect::<arms_recommend::Ratings<_>>(),
            )
        })
    });
    let counter = Arc::clone(&added);
    books.set_added_callback(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    add_chris(&books);
    assert_eq!(added.load(Ordering::SeqCst), 1);

    // Not stored yet, so neighbors only sees what is stored
    assert!(books.neighbors(&s("Chris")).unwrap().is_empty());

    books.value(&s("Jay")).unwrap();
    assert!(books.exists(&s("Jay")));
    assert_eq!(added.load(Ordering::SeqCst), 2);

    let recs = books.recommend(&s("Chris")).unwrap();
    assert_eq!(keys(&recs), vec![s("Dune")]);

    assert!(books.value(&s("Ghost")).is_err());
}

#[test]
fn test_pearson_registry() {
    let registry: Registry<String> =
        Registry::with_config(TableConfig::new().with_similarity(Pearson));
    let books = registry.table("books");

    add(&books, "Chris", &[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    // Same taste, one point harsher: perfect correlation
    add(&books, "Jay", &[("a", 0.0), ("b", 1.0), ("c", 2.0), ("d", 4.0)]);
    // Disagrees more than agrees: negative weight, contributes nothing
    add(&books, "Mary", &[("a", 2.0), ("b", 3.0), ("c", 1.0), ("e", 5.0)]);

    let neighbors = books.neighbors(&s("Chris")).unwrap();
    assert_eq!(keys(&neighbors), vec![s("Jay"), s("Mary")]);
    assert!(neighbors[1].score < 0.0);

    let recs = books.recommend(&s("Chris")).unwrap();
    assert_eq!(keys(&recs), vec![s("d")]);
}
