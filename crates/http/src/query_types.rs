//! Request/query types (Deserialize)

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use mfr_recon_core::{ActiveFilter, Page};
use serde::{Deserialize, Deserializer};

/// `search` / `page` query shared by both listings.
///
/// Values stay raw strings so malformed input falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<String>,
}

impl ListQuery {
    /// Query strings that don't decode (repeated keys, bad escapes) list the
    /// first page with no filters.
    pub fn or_default(query: Result<Query<Self>, QueryRejection>) -> Self {
        match query {
            Ok(Query(query)) => query,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unreadable list query, using defaults");
                Self::default()
            },
        }
    }

    pub fn page(&self) -> Page {
        Page::parse(self.page.as_deref())
    }

    pub fn active_filter(&self) -> ActiveFilter {
        ActiveFilter::from_query(self.is_active.as_deref())
    }
}

/// Ids arrive as JSON strings, but numeric ids are accepted and stringified.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Int(i64),
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdRepr>::deserialize(deserializer)?.map(|id| match id {
        IdRepr::Text(s) => s,
        IdRepr::Int(n) => n.to_string(),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateAndLinkRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub supplier_manufacturer_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SupplierManufacturerRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub supplier_manufacturer_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PairRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub supplier_manufacturer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub manufacturer_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManufacturerRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub manufacturer_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateNameRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub manufacturer_id: Option<String>,
    pub new_name: Option<String>,
}
