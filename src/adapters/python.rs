//! # Python Bindings
//!
//! PyO3 bindings for ARMS recommend, over string keys.
//!
//! ## Python API
//!
//! ```python
//! from arms_recommend import Registry
//!
//! registry = Registry()            # or Registry.pearson()
//! books = registry.table("books")
//!
//! books.add("Chris", {"1984": 5.0, "Robinson Crusoe": 4.0, "Moby-Dick": 3.0})
//! books.add("Jay", {"1984": 4.0, "Robinson Crusoe": 3.0, "Gulliver's Travels": 4.5})
//!
//! for rec in books.recommend("Chris"):
//!     print(f"{rec.key}: {rec.score}")
//!
//! # Hooks
//! books.set_data_loader(lambda key: fetch_ratings(key))  # dict or None
//! books.set_added_callback(lambda key, ratings: print("added", key))
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use pyo3::exceptions::PyKeyError;
use pyo3::prelude::*;

use crate::core::config::TableConfig;
use crate::core::similarity::Pearson;
use crate::core::{RankedPair, RatingItem, Ratings};
use crate::engine::{Registry as RustRegistry, Table as RustTable};
use crate::ports::TableError;

type StringTable = RustTable<String>;

/// Python wrapper for ranked results
#[pyclass(name = "RankedPair")]
#[derive(Clone)]
pub struct PyRankedPair {
    /// The entity or item key
    #[pyo3(get)]
    pub key: String,

    /// Similarity or recommendation score
    #[pyo3(get)]
    pub score: f64,
}

#[pymethods]
impl PyRankedPair {
    fn __repr__(&self) -> String {
        format!("RankedPair(key='{}', score={:.4})", self.key, self.score)
    }

    fn __str__(&self) -> String {
        format!("{}: {:.4}", self.key, self.score)
    }
}

impl From<RankedPair<String>> for PyRankedPair {
    fn from(pair: RankedPair<String>) -> Self {
        Self {
            key: pair.key,
            score: pair.score,
        }
    }
}

fn to_py_err(err: TableError) -> PyErr {
    PyKeyError::new_err(err.to_string())
}

fn to_dict(ratings: &Ratings<String>) -> HashMap<String, f64> {
    ratings.iter().map(|(k, v)| (k.clone(), v)).collect()
}

/// Python wrapper for a rating table
#[pyclass(name = "Table")]
pub struct PyTable {
    inner: Arc<StringTable>,
}

#[pymethods]
impl PyTable {
    /// Create a standalone table (not owned by a registry)
    #[new]
    fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(StringTable::new(name)),
        }
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Number of stored entities
    fn count(&self) -> usize {
        self.inner.count()
    }

    fn __len__(&self) -> usize {
        self.inner.count()
    }

    /// Add or replace an entity's ratings
    fn add(&self, key: String, ratings: HashMap<String, f64>) {
        self.inner.add(key, ratings);
    }

    /// Delete an entity, returning its ratings
    ///
    /// Raises:
    ///     KeyError: if the key is not stored
    fn delete(&self, key: String) -> PyResult<HashMap<String, f64>> {
        let item = self.inner.delete(&key).map_err(to_py_err)?;
        Ok(to_dict(item.ratings()))
    }

    /// Check if an entity is stored
    fn exists(&self, key: String) -> bool {
        self.inner.exists(&key)
    }

    /// Ratings of an entity, consulting the data loader on a miss
    fn value(&self, key: String) -> PyResult<HashMap<String, f64>> {
        let item = self.inner.value(&key).map_err(to_py_err)?;
        Ok(to_dict(item.ratings()))
    }

    /// Remove all entities
    fn flush(&self) {
        self.inner.flush();
    }

    /// Similarity between two entities
    fn similarity(&self, a: String, b: String) -> PyResult<f64> {
        self.inner.similarity(&a, &b).map_err(to_py_err)
    }

    /// Other entities ranked by similarity
    fn neighbors(&self, key: String) -> PyResult<Vec<PyRankedPair>> {
        let pairs = self.inner.neighbors(&key).map_err(to_py_err)?;
        Ok(pairs.into_iter().map(PyRankedPair::from).collect())
    }

    /// Unrated items ranked by weighted neighbor ratings
    fn recommend(&self, key: String) -> PyResult<Vec<PyRankedPair>> {
        let pairs = self.inner.recommend(&key).map_err(to_py_err)?;
        Ok(pairs.into_iter().map(PyRankedPair::from).collect())
    }

    /// Set a loader: `loader(key) -> dict | None`
    fn set_data_loader(&self, loader: PyObject) {
        self.inner.set_data_loader(move |key: &String| {
            Python::with_gil(|py| {
                let loaded = loader
                    .call1(py, (key.clone(),))
                    .and_then(|result| result.extract::<Option<HashMap<String, f64>>>(py));

                match loaded {
                    Ok(ratings) => ratings.map(|ratings| RatingItem::new(key.clone(), ratings)),
                    Err(err) => {
                        tracing::warn!(key = %key, error = %err, "python data loader failed");
                        None
                    }
                }
            })
        });
    }

    /// Set a callback: `callback(key, ratings)` after every add
    fn set_added_callback(&self, callback: PyObject) {
        self.inner.set_added_callback(move |item| call_item_callback(&callback, item));
    }

    /// Set a callback: `callback(key, ratings)` before every delete
    fn set_about_to_delete_callback(&self, callback: PyObject) {
        self.inner
            .set_about_to_delete_callback(move |item| call_item_callback(&callback, item));
    }

    fn __repr__(&self) -> String {
        format!(
            "Table(name='{}', items={}, similarity={})",
            self.inner.name(),
            self.inner.count(),
            self.inner.config().similarity.name()
        )
    }
}

fn call_item_callback(callback: &PyObject, item: &RatingItem<String, String>) {
    Python::with_gil(|py| {
        if let Err(err) = callback.call1(py, (item.key().clone(), to_dict(item.ratings()))) {
            tracing::warn!(key = %item.key(), error = %err, "python item callback failed");
        }
    });
}

/// Python wrapper for the table registry
#[pyclass(name = "Registry")]
pub struct PyRegistry {
    inner: RustRegistry<String>,
}

#[pymethods]
impl PyRegistry {
    /// Create a registry whose tables use cosine similarity
    #[new]
    fn new() -> Self {
        Self {
            inner: RustRegistry::new(),
        }
    }

    /// Create a registry whose tables use Pearson correlation
    #[staticmethod]
    fn pearson() -> Self {
        Self {
            inner: RustRegistry::with_config(TableConfig::new().with_similarity(Pearson)),
        }
    }

    /// Get the named table, creating it on first access
    fn table(&self, name: &str) -> PyTable {
        PyTable {
            inner: self.inner.table(name),
        }
    }

    /// Names of created tables
    fn names(&self) -> Vec<String> {
        self.inner.names()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("Registry(tables={})", self.inner.len())
    }
}

/// ARMS recommend Python module
#[pymodule]
fn arms_recommend(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRegistry>()?;
    m.add_class::<PyTable>()?;
    m.add_class::<PyRankedPair>()?;

    m.add("__doc__", "ARMS recommend: collaborative filtering over rating tables")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
