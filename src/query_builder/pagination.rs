/// LIMIT/OFFSET window applied to a lead query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Pagination {
    /// Create pagination with page number (1-indexed) and per-page count
    pub fn new(page: u32, per_page: u32) -> Self {
        let offset = if page > 0 {
            Some((page - 1) * per_page)
        } else {
            None
        };
        Self {
            limit: Some(per_page),
            offset,
        }
    }

    /// Create pagination with only limit
    pub fn limit_only(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }

    /// Rows of `total_count` that fall after this window
    pub fn remaining(&self, total_count: u64) -> u64 {
        let end = u64::from(self.offset.unwrap_or(0)) + u64::from(self.limit.unwrap_or(u32::MAX));
        total_count.saturating_sub(end)
    }
}
