use crate::error::AirportError;

pub const DEFAULT_LIMIT: u32 = 10;

/// Request parameters for one page of the `/airports` resource.
///
/// `search` is always sent; the empty string means "no filter" server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams {
    pub offset: u32,
    pub limit: u32,
    pub search: String,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            search: String::new(),
        }
    }
}

impl FetchParams {
    /// Parameters for a 1-based page number: `offset = (page - 1) * page_size`.
    /// Callers are responsible for `page >= 1`; page 0 is treated as page 1.
    pub fn for_page(page: u32, page_size: u32, search: &str) -> Self {
        Self {
            offset: page.saturating_sub(1) * page_size,
            limit: page_size,
            search: search.to_string(),
        }
    }

    /// Parameters for a single-record lookup by IATA/ICAO code.
    pub fn for_code(code: &str) -> Self {
        Self {
            search: code.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AirportError> {
        if self.limit == 0 {
            return Err(AirportError::Validation("limit must be positive".into()));
        }
        Ok(())
    }

    pub fn to_url_params(&self) -> Vec<(String, String)> {
        vec![
            ("offset".to_string(), self.offset.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("search".to_string(), self.search.clone()),
        ]
    }
}
