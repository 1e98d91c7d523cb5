use super::{Page, Result, StoreError, UserRecord, paginate};

/// Ordered user sequence. Position matters: new users go to the front.
///
/// Ids are kept unique by `insert_front` and `upsert_by_id`, so lookups
/// return the first (and only) match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecords {
    records: Vec<UserRecord>,
}

impl UserRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    pub fn page(&self, page: i64, rows: i64) -> Result<Page<UserRecord>> {
        paginate(&self.records, page, rows)
    }

    pub fn find_by_id(&self, id: &str) -> Result<&UserRecord> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Removes every record with `id`. Missing ids are not an error.
    pub fn delete_by_id(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        before - self.records.len()
    }

    /// Replaces the record stored under `id` with `replacement`, keeping its
    /// position.
    ///
    /// The target id is copied before the pass so a replacement carrying a
    /// different id cannot change which records match.
    pub fn upsert_by_id(&mut self, id: &str, replacement: UserRecord) -> Result<()> {
        let target = id.to_owned();

        if !self.contains_id(&target) {
            return Err(StoreError::not_found(target));
        }
        if replacement.id != target && self.contains_id(&replacement.id) {
            return Err(StoreError::duplicate_id(replacement.id));
        }

        for record in self.records.iter_mut().filter(|record| record.id == target) {
            *record = replacement.clone();
        }

        Ok(())
    }

    pub fn insert_front(&mut self, record: UserRecord) -> Result<()> {
        if self.contains_id(&record.id) {
            return Err(StoreError::duplicate_id(record.id));
        }
        self.records.insert(0, record);
        Ok(())
    }
}

impl From<Vec<UserRecord>> for UserRecords {
    fn from(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}
