//! Listing query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repositories::{ProductQuery, SortOrder};
use crate::error::AppError;

/// Query string of `GET /products`.
///
/// Uses `serde_with` to parse numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub sort: Option<String>,
}

impl ListProductsParams {
    /// Converts raw parameters into a repository query.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 0 (no pagination, every product is returned)
    /// - `sort`: `asc` (also when given as an empty string)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `sort` is neither `asc` nor `desc`.
    pub fn to_query(&self) -> Result<ProductQuery, AppError> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(0);

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortOrder::default(),
            Some(raw) => raw.parse().map_err(|reason: String| {
                AppError::bad_request("Invalid sort order", json!({ "reason": reason }))
            })?,
        };

        Ok(ProductQuery::new(page, limit, sort))
    }
}
