use std::sync::{Mutex, MutexGuard};

use crate::types::error::AppError;

/// A stored record with a table-assigned identifier.
pub trait Record: Clone {
    /// Resource kind as it appears in not-found messages.
    const KIND: &'static str;

    fn id(&self) -> i64;
}

struct Inner<T> {
    records: Vec<T>,
    next_id: i64,
}

/// In-memory table: insertion-ordered records plus the id counter. The lock
/// spans the whole scan+mutate+counter unit of each operation, so concurrent
/// handlers cannot interleave a read-modify-write.
pub struct Table<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Table {
            inner: Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().expect("table mutex poisoned")
    }

    /// Assigns the next id, appends, returns the stored record. Ids are never
    /// reused, even after deletion.
    pub fn insert(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let record = build(id);
        inner.records.push(record.clone());
        record
    }

    pub fn list(&self) -> Vec<T> {
        self.lock().records.clone()
    }

    pub fn get(&self, id: i64) -> Result<T, AppError> {
        self.lock()
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(AppError::NotFound(T::KIND))
    }

    /// Full replacement at the record's original position. The matched id
    /// wins over anything in the payload.
    pub fn replace(&self, id: i64, build: impl FnOnce(i64) -> T) -> Result<T, AppError> {
        let mut inner = self.lock();
        let pos = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(AppError::NotFound(T::KIND))?;
        let record = build(id);
        inner.records[pos] = record.clone();
        Ok(record)
    }

    pub fn remove(&self, id: i64) -> Result<T, AppError> {
        let mut inner = self.lock();
        let pos = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(AppError::NotFound(T::KIND))?;
        Ok(inner.records.remove(pos))
    }
}
