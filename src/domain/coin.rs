use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Listing entry for one coin, as returned by `GET /coins`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_new: bool,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Descriptive metadata for one coin, as returned by `GET /coins/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CoinInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_new: bool,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub message: Option<String>,
    pub open_source: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub development_status: Option<String>,
    pub hardware_wallet: bool,
    pub proof_type: Option<String>,
    pub org_structure: Option<String>,
    pub hash_algorithm: Option<String>,
    pub first_data_at: Option<DateTime<Utc>>,
    pub last_data_at: Option<DateTime<Utc>>,
}

impl CoinInfo {
    /// Description text, or `None` when the API sent nothing useful.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
