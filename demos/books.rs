//! Recommend books to Chris based on what similar readers enjoyed.
//!
//! Logs at debug level through `tracing-subscriber`.
//!
//! ```text
//! cargo run --example books
//! ```

use arms_recommend::{Ratings, Registry, TracingSink};

fn main() -> Result<(), arms_recommend::TableError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Accessing a table for the first time creates it
    let registry: Registry<&str> = Registry::new();
    let books = registry.table("books");
    books.set_logger(TracingSink::new("books"));

    books.add("Chris", [("1984", 5.0), ("Robinson Crusoe", 4.0), ("Moby-Dick", 3.0)]);
    books.add("Jay", [("1984", 5.0), ("Robinson Crusoe", 4.0), ("Gulliver's Travels", 4.5)]);
    books.add(
        "Mary",
        Ratings::new()
            .with("1984", 4.0)
            .with("Robinson Crusoe", 3.0)
            .with("A Tale of Two Cities", 4.5),
    );

    for neighbor in books.neighbors(&"Chris")? {
        println!("Chris is similar to {} ({:.4})", neighbor.key, neighbor.score);
    }

    for rec in books.recommend(&"Chris")? {
        println!("Recommending {} with score: {:.4}", rec.key, rec.score);
    }

    books.flush();

    Ok(())
}
