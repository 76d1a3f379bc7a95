//! Matrix memoization
//!
//! Re-renders during live style editing change only the vector tree;
//! the matrix depends solely on (payload, effective level). Caching
//! that pair keeps keystroke-frequency re-renders from re-running the
//! encoder.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use qrframe_core::{EcLevel, EncodeError};

use crate::matrix::SymbolMatrix;

const DEFAULT_CAPACITY: usize = 16;

/// LRU cache of encoded symbol matrices keyed on (payload, level).
pub struct MatrixCache {
    inner: Mutex<LruCache<(String, EcLevel), Arc<SymbolMatrix>>>,
}

impl MatrixCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Fetch the matrix for (payload, level), encoding on miss.
    pub fn get_or_encode(
        &self,
        payload: &str,
        level: EcLevel,
    ) -> Result<Arc<SymbolMatrix>, EncodeError> {
        let mut cache = self.inner.lock();
        if let Some(hit) = cache.get(&(payload.to_owned(), level)) {
            return Ok(hit.clone());
        }
        let matrix = Arc::new(SymbolMatrix::encode(payload, level)?);
        cache.put((payload.to_owned(), level), matrix.clone());
        Ok(matrix)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for MatrixCache {
    fn default() -> Self {
        Self::new()
    }
}
