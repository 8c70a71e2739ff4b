//! Typed entity references
//!
//! Provides [`EntityRef`] for addressing catalog entities.
//!
//! A reference is an opaque string `"<kind>:<id>"` that encodes both the
//! entity kind and its id. The kind is parsed once, into [`EntityKind`],
//! so downstream code never re-derives it from string shape.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kind of catalog entity a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    /// A sellable or composable product
    Product,
    /// A leaf option (intensity level, size variant)
    Modifier,
    /// A group of modifiers with selection bounds
    ModifierGroup,
    /// A group of products (combo slot, size alternatives, nested dropdown)
    ProductGroup,
}

impl EntityKind {
    /// Stable string tag used in the reference encoding
    #[inline]
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Modifier => "modifier",
            Self::ModifierGroup => "modifier_group",
            Self::ProductGroup => "product_group",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "product" => Some(Self::Product),
            "modifier" => Some(Self::Modifier),
            "modifier_group" => Some(Self::ModifierGroup),
            "product_group" => Some(Self::ProductGroup),
            _ => None,
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Reference to a catalog entity
///
/// Parses from and displays as `"<kind>:<id>"`, e.g. `"product:burger-std"`
/// or `"modifier_group:sauce-amounts"`. `Display` and `FromStr` round-trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityRef {
    kind: EntityKind,
    id: String,
}

impl EntityRef {
    /// Create a reference from kind and id
    #[inline]
    #[must_use]
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Shorthand for a product reference
    #[inline]
    #[must_use]
    pub fn product(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Product, id)
    }

    /// Shorthand for a modifier reference
    #[inline]
    #[must_use]
    pub fn modifier(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Modifier, id)
    }

    /// Shorthand for a modifier-group reference
    #[inline]
    #[must_use]
    pub fn modifier_group(id: impl Into<String>) -> Self {
        Self::new(EntityKind::ModifierGroup, id)
    }

    /// Shorthand for a product-group reference
    #[inline]
    #[must_use]
    pub fn product_group(id: impl Into<String>) -> Self {
        Self::new(EntityKind::ProductGroup, id)
    }

    /// The entity kind encoded in this reference
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The entity id encoded in this reference
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this reference names a product
    #[inline]
    #[must_use]
    pub fn is_product(&self) -> bool {
        self.kind == EntityKind::Product
    }

    /// Whether this reference names a product group (nested dropdown)
    #[inline]
    #[must_use]
    pub fn is_product_group(&self) -> bool {
        self.kind == EntityKind::ProductGroup
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.tag(), self.id)
    }
}

impl FromStr for EntityRef {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, id) = s
            .split_once(':')
            .ok_or_else(|| RefError::MissingSeparator(s.to_string()))?;
        let kind = EntityKind::from_tag(tag).ok_or_else(|| RefError::UnknownKind(tag.to_string()))?;
        if id.is_empty() {
            return Err(RefError::EmptyId(s.to_string()));
        }
        Ok(Self::new(kind, id))
    }
}

// References key the selection trees, so they serialize as plain strings
// rather than as structs.
impl Serialize for EntityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RefVisitor;

        impl Visitor<'_> for RefVisitor {
            type Value = EntityRef;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("an entity reference of the form \"<kind>:<id>\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<EntityRef, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(RefVisitor)
    }
}

/// Errors parsing an entity reference
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    /// Reference string has no `:` separator
    #[error("reference '{0}' has no kind separator")]
    MissingSeparator(String),

    /// Kind tag is not one of the four entity kinds
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// Id portion of the reference is empty
    #[error("reference '{0}' has an empty id")]
    EmptyId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ref_display() {
        let r = EntityRef::product("burger-std");
        assert_eq!(r.to_string(), "product:burger-std");
    }

    #[test]
    fn ref_from_str_valid() {
        let r: EntityRef = "modifier_group:sauce-amounts".parse().unwrap();
        assert_eq!(r.kind(), EntityKind::ModifierGroup);
        assert_eq!(r.id(), "sauce-amounts");
    }

    #[test]
    fn ref_from_str_missing_separator() {
        let result: Result<EntityRef, _> = "burger-std".parse();
        assert!(matches!(result, Err(RefError::MissingSeparator(_))));
    }

    #[test]
    fn ref_from_str_unknown_kind() {
        let result: Result<EntityRef, _> = "gadget:x".parse();
        assert!(matches!(result, Err(RefError::UnknownKind(_))));
    }

    #[test]
    fn ref_from_str_empty_id() {
        let result: Result<EntityRef, _> = "product:".parse();
        assert!(matches!(result, Err(RefError::EmptyId(_))));
    }

    #[test]
    fn ref_kind_predicates() {
        assert!(EntityRef::product("a").is_product());
        assert!(EntityRef::product_group("a").is_product_group());
        assert!(!EntityRef::modifier("a").is_product());
    }

    #[test]
    fn ref_serde_as_string() {
        let r = EntityRef::modifier("extra");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"modifier:extra\"");
        let back: EntityRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    proptest! {
        #[test]
        fn prop_ref_round_trips(id in "[a-z0-9][a-z0-9_-]{0,24}") {
            for kind in [
                EntityKind::Product,
                EntityKind::Modifier,
                EntityKind::ModifierGroup,
                EntityKind::ProductGroup,
            ] {
                let r = EntityRef::new(kind, id.clone());
                let parsed: EntityRef = r.to_string().parse().unwrap();
                prop_assert_eq!(parsed, r);
            }
        }
    }
}
