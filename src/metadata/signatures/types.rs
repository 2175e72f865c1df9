use bitflags::bitflags;

/// Mask selecting the calling convention kind from the first signature byte.
pub const CALLING_CONVENTION_KIND_MASK: u8 = 0x0F;

#[allow(non_snake_case)]
/// Calling convention kinds, the low nibble of the first byte of a method signature (II.23.2.1)
pub mod CALLING_CONVENTION {
    /// Managed default convention
    pub const DEFAULT: u8 = 0x0;
    /// Variable argument list
    pub const VARARG: u8 = 0x5;
}

bitflags! {
    /// The first byte of a method signature.
    ///
    /// The high bits are flags, the low nibble is the calling convention kind (see
    /// [`CALLING_CONVENTION`]). Unknown bits are retained, so [`CallingConvention::bits`] always
    /// returns the raw byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CallingConvention: u8 {
        /// The method has generic parameters; their count follows the calling convention
        const GENERIC = 0x10;
        /// Instance method, a `this` pointer is passed
        const HAS_THIS = 0x20;
        /// The `this` pointer is explicitly listed in the parameters
        const EXPLICIT_THIS = 0x40;

        const _ = !0;
    }
}

impl CallingConvention {
    /// The calling convention kind, one of the [`CALLING_CONVENTION`] values.
    #[must_use]
    pub fn kind(self) -> u8 {
        self.bits() & CALLING_CONVENTION_KIND_MASK
    }

    /// `true` if the generic flag is set.
    #[must_use]
    pub fn is_generic(self) -> bool {
        self.contains(Self::GENERIC)
    }

    /// `true` if the instance (`HASTHIS`) flag is set.
    #[must_use]
    pub fn has_this(self) -> bool {
        self.contains(Self::HAS_THIS)
    }
}

impl Default for CallingConvention {
    fn default() -> Self {
        Self::empty()
    }
}

#[allow(non_snake_case)]
/// Element type codes read from signature blobs (II.23.1.16)
pub mod ELEMENT_TYPE {
    /// `string`
    pub const STRING: u8 = 0x0e;
    /// `System.Object`, the only return type the catalog classifies
    pub const OBJECT: u8 = 0x1c;
    /// Generic parameter of a generic method, followed by its number
    pub const MVAR: u8 = 0x1e;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calling_convention_flags() {
        let cc = CallingConvention::from_bits_retain(0x30);
        assert!(cc.is_generic());
        assert!(cc.has_this());
        assert!(!cc.contains(CallingConvention::EXPLICIT_THIS));
        assert_eq!(cc.kind(), CALLING_CONVENTION::DEFAULT);
    }

    #[test]
    fn test_calling_convention_retains_raw_byte() {
        let cc = CallingConvention::from_bits_retain(0x25);
        assert_eq!(cc.bits(), 0x25);
        assert_eq!(cc.kind(), CALLING_CONVENTION::VARARG);
        assert!(cc.has_this());
        assert!(!cc.is_generic());
    }

    #[test]
    fn test_calling_convention_default_is_empty() {
        let cc = CallingConvention::default();
        assert_eq!(cc.bits(), 0);
        assert!(!cc.has_this());
    }

    #[test]
    fn test_element_type_codes() {
        assert_eq!(ELEMENT_TYPE::STRING, 0x0E);
        assert_eq!(ELEMENT_TYPE::OBJECT, 0x1C);
        assert_eq!(ELEMENT_TYPE::MVAR, 0x1E);
    }
}
