use sha2::{Digest, Sha256};

/// Digest a raw password into the stored form: hex-encoded SHA-256
/// (64 hex chars). Deterministic and unsalted, so login can verify by
/// recomputing and comparing for exact equality.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_fixed_length_hex() {
        let digest = hash_password("secret1");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(hash_password("secret1"), hash_password("secret1"));
    }

    #[test]
    fn test_distinct_passwords_distinct_digests() {
        assert_ne!(hash_password("secret1"), hash_password("secret2"));
        // empty input still digests
        assert_ne!(hash_password(""), hash_password("secret1"));
    }

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty string
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
