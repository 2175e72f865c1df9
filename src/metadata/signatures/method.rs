use std::fmt;

use crate::metadata::signatures::{CallingConvention, ELEMENT_TYPE};

/// A method signature blob (`MethodDefSig`, II.23.2.1).
///
/// The blob is kept as raw bytes and only the fixed-position prefix is decoded:
///
/// ```text
/// non-generic:  [calling convention] [argument count] [return type] [argument types ...]
/// generic:      [calling convention] [type argument count] [argument count] [return type] ...
/// ```
///
/// Counts are read as single bytes, which covers every count below 0x80 (the range in which
/// ECMA-335 compressed integers are one byte long). Every accessor is total: a blob that is
/// too short yields `0` or `false` rather than an error.
///
/// # Examples
///
/// ```rust
/// use hookscope::metadata::signatures::MethodSignature;
///
/// // instance object Method(int32, int32)
/// let signature = MethodSignature::new(vec![0x20, 0x02, 0x1C, 0x08, 0x08]);
/// assert!(signature.is_instance_method());
/// assert_eq!(signature.number_of_arguments(), 2);
/// assert!(signature.return_type_is_object());
/// assert_eq!(signature.to_string(), "20021c0808");
///
/// // Too short to hold anything but the calling convention
/// let truncated = MethodSignature::new(vec![0x30]);
/// assert_eq!(truncated.number_of_type_arguments(), 0);
/// assert_eq!(truncated.number_of_arguments(), 0);
/// assert!(!truncated.return_type_is_object());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    data: Vec<u8>,
}

impl MethodSignature {
    /// Create a signature from its raw blob.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Parse a signature from hexadecimal byte pairs, e.g. `"00 04 1C 1C 08"` or `"20021c"`.
    ///
    /// Whitespace between digits is ignored and both letter cases are accepted. Returns `None`
    /// if the text contains anything else or an odd number of digits.
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        hex::decode(digits).ok().map(Self::new)
    }

    /// The raw signature bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Length of the blob in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The calling convention byte, or an empty set for an empty blob.
    #[must_use]
    pub fn calling_convention(&self) -> CallingConvention {
        CallingConvention::from_bits_retain(self.data.first().copied().unwrap_or(0))
    }

    /// Number of generic type parameters; `0` for non-generic methods.
    #[must_use]
    pub fn number_of_type_arguments(&self) -> usize {
        if !self.is_generic() {
            return 0;
        }

        self.byte_at(1)
    }

    /// Number of method arguments, not counting `this`.
    ///
    /// A generic blob too short to hold its argument count is read with the non-generic layout.
    #[must_use]
    pub fn number_of_arguments(&self) -> usize {
        let index = if self.has_generic_layout() { 2 } else { 1 };
        self.byte_at(index)
    }

    /// `true` if the return type is `System.Object` (`ELEMENT_TYPE_OBJECT`).
    #[must_use]
    pub fn return_type_is_object(&self) -> bool {
        match self.index_of_return_type() {
            0 => false,
            index => self.data.get(index) == Some(&ELEMENT_TYPE::OBJECT),
        }
    }

    /// Offset of the return type within the blob.
    ///
    /// `3` for generic methods, `2` otherwise, and `0` if the blob ends before the argument
    /// count. The offset only requires the preceding count bytes, so for a blob that stops right
    /// after its argument count it equals the blob length.
    #[must_use]
    pub fn index_of_return_type(&self) -> usize {
        if self.has_generic_layout() {
            3
        } else if self.data.len() > 1 {
            2
        } else {
            0
        }
    }

    /// `true` for instance methods (`HASTHIS`).
    #[must_use]
    pub fn is_instance_method(&self) -> bool {
        self.calling_convention().has_this()
    }

    fn is_generic(&self) -> bool {
        self.calling_convention().is_generic()
    }

    fn has_generic_layout(&self) -> bool {
        self.is_generic() && self.data.len() > 2
    }

    fn byte_at(&self, index: usize) -> usize {
        self.data.get(index).copied().map_or(0, usize::from)
    }
}

impl From<Vec<u8>> for MethodSignature {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for MethodSignature {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl fmt::Display for MethodSignature {
    /// Lowercase hex dump of the blob, two digits per byte and no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.data))
    }
}
