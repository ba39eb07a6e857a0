//! Toy XOR one-time pad.
//!
//! The key is as long as the plaintext and drawn from the caller's RNG.
//! Either half of a [`KeyPair`] alone reveals nothing; XOR-ing them back
//! together restores the original bytes.

use rand::RngCore;

use crate::error::{ExerciseError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub dummy: Vec<u8>,
    pub encrypted: Vec<u8>,
}

/// `length` random bytes.
pub fn random_key<R: RngCore + ?Sized>(length: usize, rng: &mut R) -> Vec<u8> {
    let mut key = vec![0u8; length];
    rng.fill_bytes(&mut key);
    key
}

/// Encrypt with a key from the thread-local RNG.
pub fn encrypt(original: &str) -> KeyPair {
    encrypt_with(original, &mut rand::rng())
}

pub fn encrypt_with<R: RngCore + ?Sized>(original: &str, rng: &mut R) -> KeyPair {
    let bytes = original.as_bytes();
    let dummy = random_key(bytes.len(), rng);
    let encrypted = xor(bytes, &dummy);
    KeyPair { dummy, encrypted }
}

pub fn decrypt(pair: &KeyPair) -> Result<String> {
    if pair.dummy.len() != pair.encrypted.len() {
        return Err(ExerciseError::KeyLengthMismatch {
            key: pair.dummy.len(),
            data: pair.encrypted.len(),
        });
    }
    Ok(String::from_utf8(xor(&pair.encrypted, &pair.dummy))?)
}

fn xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter().zip(key).map(|(d, k)| d ^ k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_decrypt_restores_plaintext() {
        let mut rng = StdRng::seed_from_u64(7);
        let pair = encrypt_with("One Time Pad!", &mut rng);
        assert_eq!(pair.dummy.len(), 13);
        assert_eq!(pair.encrypted.len(), 13);
        assert_eq!(decrypt(&pair).unwrap(), "One Time Pad!");
    }

    #[test]
    fn test_thread_rng_multibyte() {
        let text = "héllo wörld ✓";
        assert_eq!(decrypt(&encrypt(text)).unwrap(), text);
    }

    #[test]
    fn test_seeded_key_is_deterministic() {
        let a = random_key(32, &mut StdRng::seed_from_u64(99));
        let b = random_key(32, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_plaintext() {
        let pair = encrypt("");
        assert!(pair.dummy.is_empty());
        assert_eq!(decrypt(&pair).unwrap(), "");
    }

    #[test]
    fn test_length_mismatch() {
        let pair = KeyPair { dummy: vec![1, 2, 3], encrypted: vec![1, 2] };
        assert_eq!(
            decrypt(&pair).unwrap_err(),
            ExerciseError::KeyLengthMismatch { key: 3, data: 2 }
        );
    }

    #[test]
    fn test_wrong_key_invalid_utf8() {
        // 0x41 ^ 0xC1 = 0x80, a lone continuation byte
        let pair = KeyPair { dummy: vec![0xC1], encrypted: vec![0x41] };
        assert!(matches!(decrypt(&pair), Err(ExerciseError::InvalidUtf8(_))));
    }
}
