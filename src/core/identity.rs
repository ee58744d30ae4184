//! Entity identity system using type-prefixed ULIDs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Entity type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityPrefix {
    /// Stock item
    Prd,
    /// Point-of-sale invoice
    Sale,
    /// Supplier purchase invoice
    Pur,
    /// Operating expense
    Exp,
    /// Product category
    Cat,
    /// Supplier
    Sup,
}

impl EntityPrefix {
    /// Get the string representation of the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Prd => "PRD",
            EntityPrefix::Sale => "SALE",
            EntityPrefix::Pur => "PUR",
            EntityPrefix::Exp => "EXP",
            EntityPrefix::Cat => "CAT",
            EntityPrefix::Sup => "SUP",
        }
    }

    /// Get all valid prefixes
    pub fn all() -> &'static [EntityPrefix] {
        &[
            EntityPrefix::Prd,
            EntityPrefix::Sale,
            EntityPrefix::Pur,
            EntityPrefix::Exp,
            EntityPrefix::Cat,
            EntityPrefix::Sup,
        ]
    }

    /// Plural noun used in file names and messages (e.g. "products")
    pub fn plural(&self) -> &'static str {
        match self {
            EntityPrefix::Prd => "products",
            EntityPrefix::Sale => "sales",
            EntityPrefix::Pur => "purchases",
            EntityPrefix::Exp => "expenses",
            EntityPrefix::Cat => "categories",
            EntityPrefix::Sup => "suppliers",
        }
    }
}

impl fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRD" => Ok(EntityPrefix::Prd),
            "SALE" => Ok(EntityPrefix::Sale),
            "PUR" => Ok(EntityPrefix::Pur),
            "EXP" => Ok(EntityPrefix::Exp),
            "CAT" => Ok(EntityPrefix::Cat),
            "SUP" => Ok(EntityPrefix::Sup),
            _ => Err(IdParseError::InvalidPrefix(s.to_string())),
        }
    }
}

/// A unique entity identifier combining a type prefix and ULID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    prefix: EntityPrefix,
    ulid: Ulid,
}

impl EntityId {
    /// Create a new EntityId with the given prefix
    pub fn new(prefix: EntityPrefix) -> Self {
        Self {
            prefix,
            ulid: Ulid::new(),
        }
    }

    /// Create an EntityId from a prefix and existing ULID
    pub fn from_parts(prefix: EntityPrefix, ulid: Ulid) -> Self {
        Self { prefix, ulid }
    }

    /// Deterministic id for the row at `position` of an import started at
    /// `timestamp_ms`. The position fills the ULID's random bits, so ids
    /// never collide within one batch.
    pub fn for_batch_row(prefix: EntityPrefix, timestamp_ms: u64, position: usize) -> Self {
        Self::from_parts(prefix, Ulid::from_parts(timestamp_ms, position as u128))
    }

    /// Get the entity prefix
    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.ulid
    }

    /// Parse an EntityId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.ulid)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix_str, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        let prefix = prefix_str.parse()?;
        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self { prefix, ulid })
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing entity IDs
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid entity prefix: '{0}' (valid: PRD, SALE, PUR, EXP, CAT, SUP)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in entity ID: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_generation() {
        let id = EntityId::new(EntityPrefix::Prd);
        assert!(id.to_string().starts_with("PRD-"));
        assert_eq!(id.to_string().len(), 30); // PRD- (4) + ULID (26) = 30
    }

    #[test]
    fn test_entity_id_parsing() {
        let original = EntityId::new(EntityPrefix::Sale);
        let parsed = EntityId::parse(&original.to_string()).unwrap();
        assert_eq!(parsed.prefix(), EntityPrefix::Sale);
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_entity_id_invalid_prefix() {
        let err = EntityId::parse("XXX-01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidPrefix(_)));
    }

    #[test]
    fn test_entity_id_missing_delimiter() {
        let err = EntityId::parse("PRD01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::MissingDelimiter(_)));
    }

    #[test]
    fn test_entity_id_invalid_ulid() {
        let err = EntityId::parse("PRD-notaulid").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidUlid(_, _)));
    }

    #[test]
    fn test_batch_row_ids_are_distinct_and_stable() {
        let a = EntityId::for_batch_row(EntityPrefix::Prd, 1_700_000_000_000, 0);
        let b = EntityId::for_batch_row(EntityPrefix::Prd, 1_700_000_000_000, 1);
        assert_ne!(a, b);
        assert_eq!(
            a,
            EntityId::for_batch_row(EntityPrefix::Prd, 1_700_000_000_000, 0)
        );
        assert_eq!(a.ulid().timestamp_ms(), 1_700_000_000_000);
    }

    #[test]
    fn test_all_prefixes_parse() {
        for prefix in EntityPrefix::all() {
            let id = EntityId::new(*prefix);
            let parsed = EntityId::parse(&id.to_string()).unwrap();
            assert_eq!(parsed.prefix(), *prefix);
        }
    }
}
