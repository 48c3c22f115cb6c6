//! Ordered put/delete records applied to a store as one unit.

use crate::error::Result;
use crate::traits::Store;
use crate::types::{Key, Value};

/// A single batch record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchOp {
    Put(Key, Value),
    Delete(Key),
}

impl BatchOp {
    pub fn key(&self) -> &Key {
        match self {
            BatchOp::Put(key, _) => key,
            BatchOp::Delete(key) => key,
        }
    }

    /// The value of a put, `None` for a delete.
    pub fn value(&self) -> Option<&Value> {
        match self {
            BatchOp::Put(_, value) => Some(value),
            BatchOp::Delete(_) => None,
        }
    }

    pub fn is_put(&self) -> bool {
        matches!(self, BatchOp::Put(..))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, BatchOp::Delete(_))
    }
}

/// Records are kept in insertion order. When a key appears more than once the
/// last record for it wins once the batch is applied.
#[derive(Clone, Debug, Default)]
pub struct WriteBatch {
    ops: Vec<BatchOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn put(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> &mut Self {
        self.ops.push(BatchOp::Put(
            Key::from_slice(key.as_ref()),
            Value::from_slice(value.as_ref()),
        ));
        self
    }

    pub fn delete(&mut self, key: impl AsRef<[u8]>) -> &mut Self {
        self.ops.push(BatchOp::Delete(Key::from_slice(key.as_ref())));
        self
    }

    /// Append a pre-built record.
    pub fn insert(&mut self, op: BatchOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn records(&self) -> &[BatchOp] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BatchOp> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Apply this batch to `store`.
    pub fn write_to<S: Store + ?Sized>(&self, store: &S, sync: bool) -> Result<()> {
        store.write(self, sync)
    }
}

impl<'a> IntoIterator for &'a WriteBatch {
    type Item = &'a BatchOp;
    type IntoIter = std::slice::Iter<'a, BatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl Extend<BatchOp> for WriteBatch {
    fn extend<T: IntoIterator<Item = BatchOp>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_keep_order() {
        let mut batch = WriteBatch::new();
        batch.put([1u8, 2, 3], [1u8, 2, 3]);
        assert_eq!(batch.len(), 1);
        batch.delete([1u8, 2, 3]);
        assert_eq!(batch.len(), 2);

        let puts = batch.iter().filter(|op| op.is_put()).count();
        let deletes = batch.iter().filter(|op| op.is_delete()).count();
        assert_eq!(puts, 1);
        assert_eq!(deletes, 1);

        for op in &batch {
            assert_eq!(op.key().as_bytes(), &[1, 2, 3]);
            if op.is_put() {
                assert!(op.value().is_some());
            } else {
                assert!(op.value().is_none());
            }
        }
    }

    #[test]
    fn test_chained_building() {
        let mut batch = WriteBatch::new();
        batch.put("a", "1").put("b", "2").delete("a");
        batch.insert(BatchOp::Delete(Key::from("c")));

        let keys: Vec<_> = batch.records().iter().map(|op| op.key().as_bytes().to_vec()).collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec(), b"a".to_vec(), b"c".to_vec()]);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_extend() {
        let mut batch = WriteBatch::new();
        batch.extend(vec![
            BatchOp::Put(Key::from("k"), Value::from("v")),
            BatchOp::Delete(Key::from("k")),
        ]);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records()[0].value(), Some(&Value::from("v")));
    }
}
