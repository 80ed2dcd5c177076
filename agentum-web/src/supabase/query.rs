/// Filter and projection for a single-table PostgREST read.
///
/// Rendered as query pairs (`username=ilike.ana`, `select=id,username`);
/// percent-encoding is left to the HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    filters: Vec<(String, String)>,
    select: Option<String>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive match. Without `*` wildcards this is an exact match.
    pub fn ilike(self, field: &str, value: &str) -> Self {
        self.filter(field, "ilike", value)
    }

    pub fn eq(self, field: &str, value: &str) -> Self {
        self.filter(field, "eq", value)
    }

    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select = Some(fields.join(","));
        self
    }

    fn filter(mut self, field: &str, operator: &str, value: &str) -> Self {
        self.filters
            .push((field.to_string(), format!("{operator}.{value}")));
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.filters.clone();
        if let Some(select) = &self.select {
            pairs.push(("select".to_string(), select.clone()));
        }
        pairs
    }
}
