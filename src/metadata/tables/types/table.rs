/// An in-memory metadata table: a vector of rows addressed by 1-based row id.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataTable<T> {
    rows: Vec<T>,
}

impl<T> Default for MetadataTable<T> {
    fn default() -> Self {
        MetadataTable { rows: Vec::new() }
    }
}

impl<T> MetadataTable<T> {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the table
    #[must_use]
    pub fn row_count(&self) -> u32 {
        u32::try_from(self.rows.len()).unwrap_or(u32::MAX)
    }

    /// `true` if the table holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the row with the 1-based id `rid`
    #[must_use]
    pub fn get(&self, rid: u32) -> Option<&T> {
        let index = rid.checked_sub(1)?;
        self.rows.get(index as usize)
    }

    /// Append a row, returning its 1-based id
    pub fn push(&mut self, row: T) -> u32 {
        self.rows.push(row);
        self.row_count()
    }

    /// Iterate over all rows in row order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Stable-sort the rows by `key`.
    ///
    /// Invalidates any [`crate::metadata::tables::TableRef`] previously handed out for this table.
    pub fn sort_by_key<K: Ord, F: FnMut(&T) -> K>(&mut self, key: F) {
        self.rows.sort_by_key(key);
    }
}

impl<T> From<Vec<T>> for MetadataTable<T> {
    fn from(rows: Vec<T>) -> Self {
        MetadataTable { rows }
    }
}

impl<'a, T> IntoIterator for &'a MetadataTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
