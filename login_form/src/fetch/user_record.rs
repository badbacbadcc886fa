// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The minimal user data returned by a [`crate::FetchCurrentUser`] implementation.
///
/// Real endpoints usually return a lot more than this (email, address, etc). Those
/// extra JSON fields are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
}

impl UserRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "John",
            "username": "john.doe",
            "email": "john@example.com",
            "address": { "city": "Gwenborough" }
        }"#;
        let it: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq2!(it, UserRecord::new(1, "John"));
    }

    #[test]
    fn test_deserialize_missing_name_fails() {
        let it = serde_json::from_str::<UserRecord>(r#"{ "id": 1 }"#);
        assert!(it.is_err());
    }
}
