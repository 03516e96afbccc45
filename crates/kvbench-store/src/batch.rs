/// Ordered group of writes submitted to the store together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    entries: Vec<(String, Vec<u8>)>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Queue a set. Submission order is push order.
    pub fn push(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.push((key.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Total payload size in bytes
    pub fn value_bytes(&self) -> usize {
        self.entries.iter().map(|(_, value)| value.len()).sum()
    }
}

impl IntoIterator for WriteBatch {
    type Item = (String, Vec<u8>);
    type IntoIter = std::vec::IntoIter<(String, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut batch = WriteBatch::with_capacity(3);
        batch.push("entity:2", vec![2]);
        batch.push("entity:0", vec![0, 0]);
        batch.push(String::from("entity:1"), vec![]);

        assert_eq!(batch.len(), 3);
        assert_eq!(
            batch.keys().collect::<Vec<_>>(),
            vec!["entity:2", "entity:0", "entity:1"]
        );
        assert_eq!(batch.value_bytes(), 3);

        let keys: Vec<String> = batch.into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["entity:2", "entity:0", "entity:1"]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = WriteBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.value_bytes(), 0);
    }
}
