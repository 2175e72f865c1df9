//! Assembly references and versions for method-replacement rules.
//!
//! Integration definitions refer to assemblies by display name:
//!
//! ```text
//! AssemblyName[, Version=Major.Minor.Build.Revision][, Culture=culture][, PublicKeyToken=token]
//! ```
//!
//! [`AssemblyReference::parse`] extracts the four identity fields from such a string. Unlike a
//! loader-grade display-name parser it never rejects its input: each field is located
//! independently, anywhere in the string, and falls back to its default when it is missing or
//! malformed.
//!
//! # Assembly Versioning
//!
//! [`Version`] holds the four 16-bit components. Equality compares all four, but ordering only
//! compares major, minor and build: the revision never makes one version older or newer than
//! another. See [`Version`] for the exact semantics.
//!
//! # Examples
//!
//! ```rust
//! use hookscope::metadata::identity::{AssemblyReference, Version};
//!
//! let reference = AssemblyReference::parse(
//!     "Foo.Bar, Version=1.2.3.4, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a",
//! );
//! assert_eq!(reference.name, "Foo.Bar");
//! assert_eq!(reference.version, Version::new(1, 2, 3, 4));
//! assert_eq!(
//!     reference.to_string(),
//!     "Foo.Bar, Version=1.2.3.4, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a"
//! );
//! ```

use std::{cmp::Ordering, convert::Infallible, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::metadata::identity::publickey::{PublicKey, PUBLIC_KEY_TOKEN_SIZE};

/// Locale reported for references without a `Culture` field.
pub const NEUTRAL_LOCALE: &str = "neutral";

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Version=([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)")
        .expect("version pattern is a valid regex")
});

static CULTURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Culture=([a-zA-Z0-9]+)").expect("culture pattern is a valid regex")
});

static PUBLIC_KEY_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PublicKeyToken=([a-fA-F0-9]{16})")
        .expect("public key token pattern is a valid regex")
});

/// Four-part assembly version.
///
/// # Version Comparison
///
/// Equality compares all four components. Ordering compares `major`, then `minor`, then
/// `build` and ignores `revision`. Two versions that differ only in their revision are
/// therefore neither less than nor greater than each other, while still being unequal; for
/// such a pair [`PartialOrd::partial_cmp`] returns `None`.
///
/// A consequence is that `<=` and `>=` are `false` for a revision-only difference. Window checks
/// are phrased with the strict operators (`!(v < min) && !(v > max)`) so that the revision is
/// ignored at both bounds.
///
/// # Examples
///
/// ```rust
/// use hookscope::metadata::identity::Version;
///
/// let v1 = Version::new(1, 2, 3, 4);
/// let v2 = Version::new(1, 2, 3, 5);
///
/// assert_ne!(v1, v2);
/// assert!(!(v1 < v2));
/// assert!(!(v1 > v2));
/// assert!(Version::new(1, 2, 3, 9) < Version::new(1, 2, 4, 0));
/// assert_eq!(v1.to_string(), "1.2.3.4");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version component.
    pub major: u16,
    /// Minor version component.
    pub minor: u16,
    /// Build version component.
    pub build: u16,
    /// Revision version component. Not considered by ordering.
    pub revision: u16,
}

impl Version {
    /// The lowest version, `0.0.0.0`. Default lower bound of a compatibility window.
    pub const MIN: Self = Self::new(0, 0, 0, 0);

    /// The highest version, `65535.65535.65535.65535`. Default upper bound of a compatibility
    /// window.
    pub const MAX: Self = Self::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);

    /// Create a new version with the specified components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.major, self.minor, self.build).cmp(&(other.major, other.minor, other.build)) {
            Ordering::Equal if self.revision != other.revision => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Version {
    /// Format as dotted decimal notation, `major.minor.build.revision`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// A reference to a .NET assembly, as written in an integration definition.
///
/// Typically built with [`AssemblyReference::parse`] from a display name such as
/// `Some.Assembly.Name, Version=1.0.0.0, Culture=neutral, PublicKeyToken=abcdef0123456789`.
///
/// The default reference has an empty name, version `0.0.0.0`, the `neutral` locale and an
/// all-zero public key token; it is identical to `AssemblyReference::parse("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyReference {
    /// Simple assembly name (e.g. "System.Data").
    pub name: String,

    /// Four-part assembly version; `0.0.0.0` when not specified.
    pub version: Version,

    /// Culture of the assembly; `"neutral"` when not specified.
    pub locale: String,

    /// Public key token; all-zero when not specified.
    pub public_key: PublicKey,
}

impl Default for AssemblyReference {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: Version::default(),
            locale: NEUTRAL_LOCALE.to_string(),
            public_key: PublicKey::default(),
        }
    }
}

impl AssemblyReference {
    /// Create an assembly reference from its components.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: Version,
        locale: impl Into<String>,
        public_key: PublicKey,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            locale: locale.into(),
            public_key,
        }
    }

    /// Parse an assembly reference from a display-name style string.
    ///
    /// Parsing never fails. Each field is extracted independently:
    ///
    /// - **Name** - the text before the first comma (the whole string if there is none). If that
    ///   text contains a space it is cut at the last space.
    /// - **Version** - the first `Version=<n>.<n>.<n>.<n>` anywhere in the string; `0.0.0.0` if
    ///   absent or if a component does not fit in 16 bits.
    /// - **Locale** - the alphanumeric run following the first `Culture=`; `"neutral"` if absent.
    /// - **Public key** - the first 16 hex digits following `PublicKeyToken=`; all-zero if absent.
    ///
    /// Field names are matched case-sensitively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hookscope::metadata::identity::{AssemblyReference, Version};
    ///
    /// let reference = AssemblyReference::parse("Foo.Bar, Culture=en, Version=1.2.3.4");
    /// assert_eq!(reference.name, "Foo.Bar");
    /// assert_eq!(reference.locale, "en");
    /// assert_eq!(reference.version, Version::new(1, 2, 3, 4));
    ///
    /// let malformed = AssemblyReference::parse("Foo.Bar, Version=1.x, PublicKeyToken=zz");
    /// assert_eq!(malformed.version, Version::MIN);
    /// assert!(malformed.public_key.is_zero());
    /// ```
    #[must_use]
    pub fn parse(display_name: &str) -> Self {
        Self {
            name: extract_name(display_name).to_string(),
            version: extract_version(display_name),
            locale: extract_locale(display_name),
            public_key: extract_public_key(display_name),
        }
    }
}

impl fmt::Display for AssemblyReference {
    /// Canonical form: `Name, Version=V, Culture=Locale, PublicKeyToken=Hex`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Version={}, Culture={}, PublicKeyToken={}",
            self.name, self.version, self.locale, self.public_key
        )
    }
}

impl FromStr for AssemblyReference {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for AssemblyReference {
    fn from(display_name: &str) -> Self {
        Self::parse(display_name)
    }
}

fn extract_name(display_name: &str) -> &str {
    let name = display_name
        .split_once(',')
        .map_or(display_name, |(head, _)| head);

    match name.rfind(' ') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

fn extract_version(display_name: &str) -> Version {
    let Some(captures) = VERSION_PATTERN.captures(display_name) else {
        return Version::default();
    };

    let component = |index: usize| {
        captures
            .get(index)
            .and_then(|group| group.as_str().parse::<u16>().ok())
    };

    match (component(1), component(2), component(3), component(4)) {
        (Some(major), Some(minor), Some(build), Some(revision)) => {
            Version::new(major, minor, build, revision)
        }
        _ => Version::default(),
    }
}

fn extract_locale(display_name: &str) -> String {
    CULTURE_PATTERN
        .captures(display_name)
        .and_then(|captures| captures.get(1))
        .map_or_else(|| NEUTRAL_LOCALE.to_string(), |group| group.as_str().to_string())
}

fn extract_public_key(display_name: &str) -> PublicKey {
    PUBLIC_KEY_TOKEN_PATTERN
        .captures(display_name)
        .and_then(|captures| captures.get(1))
        .and_then(|group| hex::decode(group.as_str()).ok())
        .and_then(|bytes| <[u8; PUBLIC_KEY_TOKEN_SIZE]>::try_from(bytes).ok())
        .map(PublicKey::new)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_new() {
        let version = Version::new(1, 2, 3, 4);
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 2);
        assert_eq!(version.build, 3);
        assert_eq!(version.revision, 4);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(4, 0, 0, 0).to_string(), "4.0.0.0");
        assert_eq!(Version::new(1, 2, 3, 4).to_string(), "1.2.3.4");
        assert_eq!(Version::MAX.to_string(), "65535.65535.65535.65535");
        assert_eq!(Version::default(), Version::MIN);
    }

    #[test]
    fn test_version_equality() {
        let a = Version::new(1, 2, 3, 4);
        let b = Version::new(1, 2, 3, 4);
        let c = Version::new(1, 2, 3, 4);

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_ne!(a, Version::new(1, 2, 3, 5));
        assert_ne!(a, Version::new(0, 2, 3, 4));
    }

    #[test]
    fn test_version_ordering() {
        let v1 = Version::new(1, 0, 0, 0);
        let v1_1 = Version::new(1, 1, 0, 0);
        let v1_1_1 = Version::new(1, 1, 1, 0);
        let v2 = Version::new(2, 0, 0, 0);

        assert!(v1 < v2);
        assert!(v1 < v1_1);
        assert!(v1_1 < v1_1_1);
        assert!(v1_1_1 < v2);
        assert!(v2 > v1);
        assert!(v1_1 > v1);

        // A lower major wins over everything else
        assert!(Version::new(1, 9, 9, 9) < Version::new(2, 0, 0, 0));
    }

    #[test]
    fn test_version_ordering_ignores_revision() {
        let a = Version::new(1, 2, 3, 4);
        let b = Version::new(1, 2, 3, 5);

        assert_ne!(a, b);
        assert!(!(a < b));
        assert!(!(a > b));
        assert!(!(b < a));
        assert!(!(b > a));
        assert_eq!(a.partial_cmp(&b), None);

        // Revision still does not matter once build differs
        assert!(Version::new(1, 2, 3, 65535) < Version::new(1, 2, 4, 0));
    }

    #[test]
    fn test_version_ordering_equal() {
        let a = Version::new(1, 2, 3, 4);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
        assert!(!(a < a));
        assert!(!(a > a));
    }

    #[test]
    fn test_assembly_reference_parse_full() {
        let reference = AssemblyReference::parse(
            "Foo.Bar, Version=1.2.3.4, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a",
        );

        assert_eq!(reference.name, "Foo.Bar");
        assert_eq!(reference.version, Version::new(1, 2, 3, 4));
        assert_eq!(reference.locale, "neutral");
        assert_eq!(
            reference.public_key.as_bytes(),
            &[0xb0, 0x3f, 0x5f, 0x7f, 0x11, 0xd5, 0x0a, 0x3a]
        );
    }

    #[test]
    fn test_assembly_reference_parse_name_only() {
        let reference = AssemblyReference::parse("Foo.Bar");

        assert_eq!(reference.name, "Foo.Bar");
        assert_eq!(reference.version, Version::new(0, 0, 0, 0));
        assert_eq!(reference.locale, "neutral");
        assert_eq!(reference.public_key.as_bytes(), &[0u8; 8]);
    }

    #[test]
    fn test_assembly_reference_parse_empty() {
        let reference = AssemblyReference::parse("");
        assert_eq!(reference, AssemblyReference::default());
        assert!(reference.name.is_empty());
    }

    #[test]
    fn test_assembly_reference_name_truncated_at_last_space() {
        assert_eq!(AssemblyReference::parse("Foo Bar Baz").name, "Foo Bar");
        assert_eq!(AssemblyReference::parse("Foo.Bar , Version=1.0.0.0").name, "Foo.Bar");
        assert_eq!(AssemblyReference::parse(" Foo.Bar").name, "");
        assert_eq!(AssemblyReference::parse("Foo.Bar, Other Name").name, "Foo.Bar");
    }

    #[test]
    fn test_assembly_reference_fields_are_order_independent() {
        let reference = AssemblyReference::parse(
            "Foo.Bar, PublicKeyToken=0123456789abcdef, Culture=de, Version=9.8.7.6",
        );

        assert_eq!(reference.name, "Foo.Bar");
        assert_eq!(reference.version, Version::new(9, 8, 7, 6));
        assert_eq!(reference.locale, "de");
        assert_eq!(reference.public_key.to_string(), "0123456789abcdef");
    }

    #[test]
    fn test_assembly_reference_malformed_version_defaults() {
        let three_parts = AssemblyReference::parse("Foo, Version=1.2.3");
        assert_eq!(three_parts.version, Version::MIN);

        let letters = AssemblyReference::parse("Foo, Version=1.a.3.4");
        assert_eq!(letters.version, Version::MIN);

        let overflow = AssemblyReference::parse("Foo, Version=1.2.99999.4");
        assert_eq!(overflow.version, Version::MIN);

        let lowercase = AssemblyReference::parse("Foo, version=1.2.3.4");
        assert_eq!(lowercase.version, Version::MIN);
    }

    #[test]
    fn test_assembly_reference_locale_is_alphanumeric_run() {
        // Only the alphanumeric prefix of the culture is captured
        let reference = AssemblyReference::parse("Resources, Culture=en-US");
        assert_eq!(reference.locale, "en");

        let missing = AssemblyReference::parse("Resources, Culture=");
        assert_eq!(missing.locale, "neutral");
    }

    #[test]
    fn test_assembly_reference_malformed_public_key_defaults() {
        let short = AssemblyReference::parse("Foo, PublicKeyToken=b77a5c56");
        assert!(short.public_key.is_zero());

        let not_hex = AssemblyReference::parse("Foo, PublicKeyToken=xyz_not_hex_1234");
        assert!(not_hex.public_key.is_zero());

        let null = AssemblyReference::parse("Foo, PublicKeyToken=null");
        assert!(null.public_key.is_zero());
    }

    #[test]
    fn test_assembly_reference_public_key_uppercase_and_long() {
        let upper = AssemblyReference::parse("Foo, PublicKeyToken=B77A5C561934E089");
        assert_eq!(upper.public_key.to_string(), "b77a5c561934e089");

        // The first sixteen digits are taken
        let long = AssemblyReference::parse("Foo, PublicKeyToken=b77a5c561934e089aabb");
        assert_eq!(long.public_key.to_string(), "b77a5c561934e089");
    }

    #[test]
    fn test_assembly_reference_display_round_trip() {
        let text = "Foo.Bar, Version=1.2.3.4, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a";
        let reference = AssemblyReference::parse(text);
        assert_eq!(reference.to_string(), text);
        assert_eq!(AssemblyReference::parse(&reference.to_string()), reference);

        assert_eq!(
            AssemblyReference::parse("Foo.Bar").to_string(),
            "Foo.Bar, Version=0.0.0.0, Culture=neutral, PublicKeyToken=0000000000000000"
        );
    }

    #[test]
    fn test_assembly_reference_equality_is_structural() {
        let a = AssemblyReference::parse("Foo, Version=1.0.0.0");
        let b = AssemblyReference::new(
            "Foo",
            Version::new(1, 0, 0, 0),
            "neutral",
            PublicKey::default(),
        );
        assert_eq!(a, b);

        assert_ne!(a, AssemblyReference::parse("Foo, Version=1.0.0.1"));
        assert_ne!(a, AssemblyReference::parse("Foo, Version=1.0.0.0, Culture=fr"));
        assert_ne!(
            a,
            AssemblyReference::parse("Foo, Version=1.0.0.0, PublicKeyToken=0000000000000001")
        );
        assert_ne!(a, AssemblyReference::parse("Bar, Version=1.0.0.0"));
    }

    #[test]
    fn test_assembly_reference_from_str() {
        let reference: AssemblyReference = "System.Data, Version=4.0.0.0".parse().unwrap();
        assert_eq!(reference, AssemblyReference::from("System.Data, Version=4.0.0.0"));
        assert_eq!(reference.version, Version::new(4, 0, 0, 0));
    }
}
