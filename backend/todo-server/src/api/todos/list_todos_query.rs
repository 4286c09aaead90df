use serde::Deserialize;

/// Query parameters for listing todos
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosQuery {
    /// Kept as text so a malformed value reads as "not given"
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<String>,
}

impl ListTodosQuery {
    pub fn page_size(&self) -> Option<i64> {
        self.page_size
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
    }
}
