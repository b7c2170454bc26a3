//! Key and Tag Conventions
//!
//! Builders for the structured keys and tags the case-management routes use,
//! so a mutation to one entity can invalidate exactly the reads derived from it.
//! The store itself never parses keys or tags.

use std::fmt;

/// Longest query prefix kept in a search key, in characters.
pub const SEARCH_PREFIX_CHARS: usize = 50;

/// Tag for authentication-derived entries.
pub const AUTH_TAG: &str = "auth";

// == Entity ==
/// Entity families with their own key namespace and tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Cases,
    Evidence,
    Criminals,
    Statutes,
    Users,
}

impl Entity {
    /// Namespace prefix and tag name of the entity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Cases => "cases",
            Entity::Evidence => "evidence",
            Entity::Criminals => "criminals",
            Entity::Statutes => "statutes",
            Entity::Users => "users",
        }
    }

    /// Tag attached to every entry derived from this entity.
    pub fn tag(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<entity>:all`
pub fn all(entity: Entity) -> String {
    format!("{}:all", entity)
}

/// `<entity>:<id>`
pub fn by_id(entity: Entity, id: &str) -> String {
    format!("{}:{}", entity, id)
}

/// `<entity>:user:<user_id>`
pub fn by_user(entity: Entity, user_id: &str) -> String {
    format!("{}:user:{}", entity, user_id)
}

/// `<entity>:status:<status>`
pub fn by_status(entity: Entity, status: &str) -> String {
    format!("{}:status:{}", entity, status)
}

/// `<entity>:case:<case_id>`
pub fn by_case(entity: Entity, case_id: &str) -> String {
    format!("{}:case:{}", entity, case_id)
}

/// `<entity>:email:<email>`
pub fn by_email(entity: Entity, email: &str) -> String {
    format!("{}:email:{}", entity, email)
}

/// `<entity>:search:<first 50 characters of query>`
pub fn search(entity: Entity, query: &str) -> String {
    let prefix: String = query.chars().take(SEARCH_PREFIX_CHARS).collect();
    format!("{}:search:{}", entity, prefix)
}

/// `user:<user_id>`, the per-owner tag.
pub fn user_tag(user_id: &str) -> String {
    format!("user:{}", user_id)
}

// == Generate Cache Key ==
/// Appends parameters to a base key in a stable order.
///
/// Parameters are sorted by name and rendered `name:value`, joined by `|`.
/// With no parameters the base is returned unchanged.
pub fn generate_cache_key<K, V>(base: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: fmt::Display,
{
    if params.is_empty() {
        return base.to_string();
    }

    let mut rendered: Vec<(&str, String)> = params
        .iter()
        .map(|(name, value)| (name.as_ref(), value.to_string()))
        .collect();
    rendered.sort_by(|a, b| a.0.cmp(b.0));

    let joined = rendered
        .iter()
        .map(|(name, value)| format!("{}:{}", name, value))
        .collect::<Vec<_>>()
        .join("|");

    format!("{}:{}", base, joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_keys() {
        assert_eq!(all(Entity::Cases), "cases:all");
        assert_eq!(by_id(Entity::Criminals, "17"), "criminals:17");
        assert_eq!(by_user(Entity::Cases, "42"), "cases:user:42");
        assert_eq!(by_status(Entity::Cases, "open"), "cases:status:open");
        assert_eq!(by_case(Entity::Evidence, "9"), "evidence:case:9");
        assert_eq!(by_email(Entity::Users, "a@b.io"), "users:email:a@b.io");
    }

    #[test]
    fn test_tags() {
        assert_eq!(Entity::Statutes.tag(), "statutes");
        assert_eq!(user_tag("42"), "user:42");
        assert_eq!(AUTH_TAG, "auth");
    }

    #[test]
    fn test_search_truncates_to_fifty_chars() {
        let long = "x".repeat(80);
        let key = search(Entity::Evidence, &long);
        assert_eq!(key, format!("evidence:search:{}", "x".repeat(50)));

        assert_eq!(search(Entity::Cases, "fraud"), "cases:search:fraud");
    }

    #[test]
    fn test_search_respects_char_boundaries() {
        let query = "é".repeat(60);
        let key = search(Entity::Statutes, &query);
        assert_eq!(key, format!("statutes:search:{}", "é".repeat(50)));
    }

    #[test]
    fn test_generate_cache_key_sorts_params() {
        let key = generate_cache_key("cases:all", &[("page", "2"), ("limit", "20")]);
        assert_eq!(key, "cases:all:limit:20|page:2");
    }

    #[test]
    fn test_generate_cache_key_without_params() {
        let key = generate_cache_key::<&str, u32>("cases:all", &[]);
        assert_eq!(key, "cases:all");
    }

    #[test]
    fn test_generate_cache_key_numeric_values() {
        let key = generate_cache_key("evidence:all", &[("offset", 40), ("limit", 10)]);
        assert_eq!(key, "evidence:all:limit:10|offset:40");
    }
}
