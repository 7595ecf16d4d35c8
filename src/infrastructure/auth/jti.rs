//! Random token identifier generation

use rand::RngCore;
use uuid::Builder;

use crate::domain::auth::JtiSource;

/// Number of random bytes behind each identifier
pub const JTI_BYTES: usize = 16;

/// Draws identifiers from the thread-local CSPRNG and formats them as UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomJtiSource;

impl RandomJtiSource {
    pub fn new() -> Self {
        Self
    }
}

impl JtiSource for RandomJtiSource {
    fn next_jti(&self) -> String {
        let mut bytes = [0u8; JTI_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_jti_is_uuid_shaped() {
        let jti = RandomJtiSource::new().next_jti();

        assert_eq!(jti.len(), 36);
        let parsed = uuid::Uuid::parse_str(&jti).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_jti_values_are_unique() {
        let source = RandomJtiSource::new();
        let ids: HashSet<String> = (0..10_000).map(|_| source.next_jti()).collect();

        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_jti_source_shared_across_threads() {
        let source = Arc::new(RandomJtiSource::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || (0..500).map(|_| source.next_jti()).collect::<Vec<_>>())
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.extend(handle.join().unwrap());
        }

        assert_eq!(ids.len(), 2_000);
    }
}
