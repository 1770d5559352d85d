use lazy_static::lazy_static;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

const ID_BYTES: usize = 12;
const COUNTER_MASK: u32 = 0x00ff_ffff;

lazy_static! {
    // 5 random bytes fixed for the lifetime of the process
    static ref PROCESS_UNIQUE: [u8; 5] = rand::thread_rng().gen();
    static ref COUNTER: AtomicU32 = AtomicU32::new(rand::thread_rng().gen::<u32>() & COUNTER_MASK);
}

/// 12-byte record identity, written as 24 lowercase hex characters
/// Layout: 4-byte big-endian unix seconds, 5 process bytes, 3-byte counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId([u8; ID_BYTES]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecordId(pub String);

impl fmt::Display for InvalidRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid record id: '{}'", self.0)
    }
}

impl std::error::Error for InvalidRecordId {}

impl RecordId {
    pub fn generate() -> Self {
        let seconds = chrono::Utc::now().timestamp() as u32;
        let count = COUNTER.fetch_add(1, Ordering::SeqCst) & COUNTER_MASK;

        let mut bytes = [0u8; ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_BYTES * 2 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidRecordId(s.to_string()));
        }

        let mut bytes = [0u8; ID_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| InvalidRecordId(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_hex() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);

        let text = a.to_string();
        assert_eq!(text.len(), 24);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(text.parse::<RecordId>(), Ok(a));
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id: RecordId = "5F3A1B2C3D4E5F6071829304".parse().unwrap();
        assert_eq!(id.to_string(), "5f3a1b2c3d4e5f6071829304");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<RecordId>().is_err());
        assert!("abc".parse::<RecordId>().is_err());
        assert!("zzzzzzzzzzzzzzzzzzzzzzzz".parse::<RecordId>().is_err());
        assert!("5f3a1b2c3d4e5f60718293041".parse::<RecordId>().is_err());
        assert!("+f3a1b2c3d4e5f6071829304".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let id: RecordId = "5f3a1b2c3d4e5f6071829304".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5f3a1b2c3d4e5f6071829304\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
