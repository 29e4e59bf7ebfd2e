//! Canonical manufacturers and the supplier aliases that point at them.

use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Canonical manufacturer row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manufacturer {
    /// ULID assigned at creation, never changes
    pub id: String,
    /// Display name
    pub name: String,
    /// Always `slugify(name)`
    pub slug: String,
    pub is_active: bool,
}

/// Manufacturer name as reported by a supplier feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierAlias {
    pub id: String,
    pub name: String,
    /// `None` while the alias is unmatched
    pub manufacturer_id: Option<String>,
    pub is_active: bool,
}

/// `{id, name}` pair used in every listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasRef {
    pub id: String,
    pub name: String,
}

impl From<&SupplierAlias> for AliasRef {
    fn from(alias: &SupplierAlias) -> Self {
        Self { id: alias.id.clone(), name: alias.name.clone() }
    }
}

/// Listing row: a manufacturer plus its linked aliases.
///
/// Aliases whose name equals the manufacturer name (ignoring case) are not
/// listed; their presence is reported through `has_exact_match` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManufacturerWithAliases {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub has_exact_match: bool,
    pub aliases: Vec<AliasRef>,
}

/// Manufacturer about to be inserted by create-and-link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewManufacturer {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl NewManufacturer {
    /// Assign a fresh ULID and derive the slug from `name`.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { id: ulid::Ulid::new().to_string(), slug: slugify(&name), name }
    }
}

/// Case-insensitive name equality used to split exact matches from aliases.
#[must_use]
pub fn is_exact_match(alias_name: &str, manufacturer_name: &str) -> bool {
    alias_name.to_lowercase() == manufacturer_name.to_lowercase()
}

/// Optional `is_active` restriction on the manufacturer listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl ActiveFilter {
    /// `"true"` and `"false"` select a state; anything else means no filter.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => Self::Active,
            Some("false") => Self::Inactive,
            _ => Self::Any,
        }
    }

    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::Active => Some(true),
            Self::Inactive => Some(false),
        }
    }

    #[must_use]
    pub fn accepts(self, is_active: bool) -> bool {
        self.as_bool().is_none_or(|wanted| wanted == is_active)
    }
}
