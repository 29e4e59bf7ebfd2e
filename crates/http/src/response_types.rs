//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

#[derive(Debug, Serialize)]
pub struct CreateAndLinkResponse {
    pub success: bool,
    pub manufacturer_id: String,
}

#[derive(Debug, Serialize)]
pub struct InactivateResponse {
    pub success: bool,
    pub supplier_manufacturer_id: String,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
