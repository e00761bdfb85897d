use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque store-assigned product key.
///
/// Wraps the raw 12 key bytes; the canonical wire form is 24 lowercase hex
/// characters. Parsing happens once at the HTTP boundary; everything past
/// that point treats the id as an opaque token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId([u8; 12]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidProductId;

impl fmt::Display for InvalidProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid ID format")
    }
}

impl std::error::Error for InvalidProductId {}

impl ProductId {
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Parse the canonical 24-hex-char form. Anything else is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidProductId> {
        let raw = s.as_bytes();
        if raw.len() != 24 || !raw.iter().all(u8::is_ascii_hexdigit) {
            return Err(InvalidProductId);
        }
        let mut bytes = [0u8; 12];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            bytes[i] = (hex_val(pair[0]) << 4) | hex_val(pair[1]);
        }
        Ok(Self(bytes))
    }
}

// Input is pre-checked as an ASCII hex digit.
fn hex_val(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for ProductId {
    type Err = InvalidProductId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// The sole catalog entity: a name/price pair under a store-assigned key.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_hex() {
        let id = ProductId::from_bytes([0xab, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0xff]);
        let rendered = id.to_string();
        assert_eq!(rendered.len(), 24);
        assert_eq!(ProductId::parse(&rendered), Ok(id));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ProductId::parse("abc123").is_err());
        assert!(ProductId::parse("").is_err());
        assert!(ProductId::parse(&"a".repeat(25)).is_err());
    }

    #[test]
    fn rejects_non_hex() {
        assert!(ProductId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(ProductId::parse("0123456789abcdef0123456g").is_err());
    }

    #[test]
    fn accepts_mixed_case() {
        let upper = "0123456789ABCDEF01234567";
        let lower = upper.to_lowercase();
        assert_eq!(ProductId::parse(upper), ProductId::parse(&lower));
    }
}
