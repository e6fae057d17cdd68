use tokio::sync::RwLock;

/// Append-only, process-local list. Ids are 1-based positions.
pub struct InMemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the next item from its id and append it, returning a copy.
    pub async fn append_with<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut items = self.items.write().await;
        let item = build(items.len() as u64 + 1);
        items.push(item.clone());
        item
    }

    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}
