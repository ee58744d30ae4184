//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use crate::cli::GlobalOpts;
use crate::core::identity::EntityPrefix;
use crate::core::Config;

/// Parse an entity type argument (`product`, `sales`, `pur`, ...)
pub fn parse_entity_type(s: &str) -> Result<EntityPrefix, String> {
    match s.to_lowercase().as_str() {
        "product" | "products" | "prd" => Ok(EntityPrefix::Prd),
        "sale" | "sales" => Ok(EntityPrefix::Sale),
        "purchase" | "purchases" | "pur" => Ok(EntityPrefix::Pur),
        "expense" | "expenses" | "exp" => Ok(EntityPrefix::Exp),
        _ => Err(format!(
            "Unsupported entity type: '{}'. Supported: product, sale, purchase, expense",
            s
        )),
    }
}

/// Layered configuration with command-line overrides applied last
pub fn load_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    if global.locale.is_some() {
        config.locale = global.locale;
    }
    config
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Counts characters rather than bytes so Arabic text is never split
/// inside a code point.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
