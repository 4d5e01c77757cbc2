//! Random identifiers.

use uuid::Uuid;

/// Random v4 UUID, hyphenated and lower-case.
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// First 32 bits of a fresh v4 UUID.
///
/// Collisions are far more likely than with a full UUID; use it for log
/// correlation, not identity.
pub fn short_uuid() -> u32 {
    Uuid::new_v4().as_fields().0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_shape() {
        let id = uuid();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
        assert_eq!(id.chars().nth(14), Some('4'));
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn test_uuid_unique() {
        assert_ne!(uuid(), uuid());
    }

    #[test]
    fn test_short_uuid_varies() {
        let ids: Vec<u32> = (0..8).map(|_| short_uuid()).collect();
        assert!(ids.iter().any(|id| *id != ids[0]));
    }
}
