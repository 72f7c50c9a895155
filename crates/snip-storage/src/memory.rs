use parking_lot::RwLock;
use snip_core::{Result, ShortCode, StoreError, UrlStore};
use snip_generator::{Generator, RandomGenerator};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// In-memory implementation of the [`UrlStore`] trait.
///
/// Mappings live in a `HashMap` behind a reader-writer lock: lookups share the
/// lock, inserts take it exclusively. Codes are generated before the lock is
/// acquired, so every critical section is a single map access.
///
/// Entries are never updated or removed and are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryStore<G = RandomGenerator> {
    entries: RwLock<HashMap<ShortCode, String>>,
    generator: G,
}

impl InMemoryStore<RandomGenerator> {
    /// Creates an empty store that issues random codes.
    pub fn new() -> Self {
        Self::with_generator(RandomGenerator::new())
    }

    /// Creates an empty store with room for `capacity` mappings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            generator: RandomGenerator::new(),
        }
    }
}

impl Default for InMemoryStore<RandomGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generator> InMemoryStore<G> {
    /// Creates an empty store that draws codes from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generator,
        }
    }

    /// Returns the number of stored mappings.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<G: Generator> UrlStore for InMemoryStore<G> {
    fn save(&self, original_url: String) -> Result<ShortCode> {
        let code = self.generator.generate()?;

        let inserted = match self.entries.write().entry(code.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(original_url);
                true
            }
        };

        if !inserted {
            // Existing mappings are immutable; the collision is reported, not retried.
            warn!(code = %code, "generated short code is already taken");
            return Err(StoreError::Conflict(code.into_string()));
        }

        debug!(code = %code, "stored url mapping");
        Ok(code)
    }

    fn get(&self, code: &str) -> Result<String> {
        let original_url = self.entries.read().get(code).cloned();

        match original_url {
            Some(url) => {
                trace!(code = %code, "resolved short code");
                Ok(url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(StoreError::NotFound(code.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_core::GenerationError;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    /// Always hands out the same code.
    struct ConstantGenerator(&'static str);

    impl Generator for ConstantGenerator {
        fn generate(&self) -> std::result::Result<ShortCode, GenerationError> {
            Ok(ShortCode::new(self.0))
        }
    }

    struct FailingGenerator;

    impl Generator for FailingGenerator {
        fn generate(&self) -> std::result::Result<ShortCode, GenerationError> {
            Err(GenerationError::new("entropy source unavailable"))
        }
    }

    #[test]
    fn save_and_get() {
        let store = InMemoryStore::new();

        let code = store.save("https://example.com".to_string()).unwrap();

        assert_eq!(code.as_str().len(), 8);
        assert_eq!(store.get(code.as_str()).unwrap(), "https://example.com");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_nonexistent() {
        let store = InMemoryStore::new();

        let err = store.get("does-not-exist").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref code) if code == "does-not-exist"));

        let err = store.get("").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn url_is_stored_verbatim() {
        let store = InMemoryStore::new();
        let urls = [
            "not a url at all",
            "  padded  ",
            "https://example.com/path?q=1&r=2#frag",
            "ftp://ünïcödé.example/ø",
        ];

        for url in urls {
            let code = store.save(url.to_string()).unwrap();
            assert_eq!(store.get(code.as_str()).unwrap(), url);
        }
    }

    #[test]
    fn same_url_gets_distinct_codes() {
        let store = InMemoryStore::new();

        let first = store.save("https://example.com".to_string()).unwrap();
        let second = store.save("https://example.com".to_string()).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn codes_are_unique_across_large_batch() {
        let store = InMemoryStore::with_capacity(5_000);
        let mut codes = HashSet::new();

        for i in 0..5_000 {
            let code = store.save(format!("https://example.com/{i}")).unwrap();
            assert!(codes.insert(code), "duplicate short code issued");
        }

        assert_eq!(store.len(), 5_000);
    }

    #[test]
    fn codes_use_url_safe_alphabet() {
        let store = InMemoryStore::new();

        for _ in 0..500 {
            let code = store.save("https://example.com".to_string()).unwrap();
            assert_eq!(code.as_str().len(), 8);
            assert!(code
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn generation_failure_leaves_store_untouched() {
        let store = InMemoryStore::with_generator(FailingGenerator);

        let err = store.save("https://example.com".to_string()).unwrap_err();

        assert!(matches!(err, StoreError::Generation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn colliding_code_keeps_existing_entry() {
        let store = InMemoryStore::with_generator(ConstantGenerator("AAAAAAAA"));

        let code = store.save("https://first.com".to_string()).unwrap();
        let err = store.save("https://second.com".to_string()).unwrap_err();

        assert!(matches!(err, StoreError::Conflict(ref c) if c == "AAAAAAAA"));
        assert_eq!(store.get(code.as_str()).unwrap(), "https://first.com");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stores_are_independent() {
        let a = InMemoryStore::new();
        let b = InMemoryStore::new();

        let code = a.save("https://example.com".to_string()).unwrap();

        assert!(b.get(code.as_str()).unwrap_err().is_not_found());
        assert!(b.is_empty());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn concurrent_access() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for worker in 0..16u64 {
            let store = Arc::clone(&store);
            let handle = thread::spawn(move || {
                (0..250u64)
                    .map(|i| {
                        let url = format!("https://example{worker}.com/{i}");
                        let code = store.save(url.clone()).unwrap();
                        // interleave reads with the other writers
                        assert_eq!(store.get(code.as_str()).unwrap(), url);
                        (code, url)
                    })
                    .collect::<Vec<_>>()
            });
            handles.push(handle);
        }

        let saved: Vec<(ShortCode, String)> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(saved.len(), 16 * 250);
        assert_eq!(store.len(), saved.len());

        for (code, url) in saved {
            assert_eq!(store.get(code.as_str()).unwrap(), url);
        }
    }

    #[test]
    fn end_to_end_example() {
        let store = InMemoryStore::default();

        let id = store.save("https://example.com".to_string()).unwrap();
        assert_eq!(id.as_str().len(), 8);
        assert_eq!(store.get(id.as_str()).unwrap(), "https://example.com");
        assert!(matches!(
            store.get("nonexistent"),
            Err(StoreError::NotFound(_))
        ));
    }
}
