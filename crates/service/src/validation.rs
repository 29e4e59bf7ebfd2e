//! Required-field checks that run before any storage access.

use crate::ServiceError;

/// Return the values of `fields` in order, or every missing field name.
///
/// A field is missing when it is absent or the empty string. Whitespace-only
/// values pass.
pub fn require_fields<'a, const N: usize>(
    fields: [(&'static str, Option<&'a str>); N],
) -> Result<[&'a str; N], ServiceError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ServiceError::MissingFields(missing));
    }
    Ok(fields.map(|(_, value)| value.unwrap_or_default()))
}
