//! Public key tokens.
//!
//! A public key token is the 8 byte abbreviation of an assembly's strong-name public key
//! (ECMA-335 §II.6.2.1.3). Display names carry it as 16 hexadecimal digits, e.g.
//! `PublicKeyToken=b77a5c561934e089`, and the bytes appear in the same order as the digits.

use std::fmt;

/// Size of a public key token in bytes.
pub const PUBLIC_KEY_TOKEN_SIZE: usize = 8;

/// An assembly public key token.
///
/// The default value is the all-zero token, which is also what the display-name parser produces
/// when no (valid) `PublicKeyToken` field is present.
///
/// # Examples
///
/// ```rust
/// use hookscope::metadata::identity::PublicKey;
///
/// let key = PublicKey::new([0xb0, 0x3f, 0x5f, 0x7f, 0x11, 0xd5, 0x0a, 0x3a]);
/// assert_eq!(key.to_string(), "b03f5f7f11d50a3a");
/// assert!(PublicKey::default().is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_TOKEN_SIZE]);

impl PublicKey {
    /// Create a public key token from its raw bytes.
    #[must_use]
    pub const fn new(data: [u8; PUBLIC_KEY_TOKEN_SIZE]) -> Self {
        Self(data)
    }

    /// The raw token bytes, in display order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_TOKEN_SIZE] {
        &self.0
    }

    /// `true` for the all-zero token, i.e. no token was specified.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }
}

impl From<[u8; PUBLIC_KEY_TOKEN_SIZE]> for PublicKey {
    fn from(data: [u8; PUBLIC_KEY_TOKEN_SIZE]) -> Self {
        Self(data)
    }
}

impl fmt::Display for PublicKey {
    /// 16 lowercase hexadecimal digits, two per byte, zero padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
