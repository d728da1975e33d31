use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Member or type accessibility, packed into the two low bits of [`Flags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Accessibility {
    /// No accessibility recorded (assembly-internal, compiler-controlled, ...)
    #[default]
    Unset = 0,
    /// Visible to everyone
    Public = 1,
    /// Visible to the declaring type only
    Private = 2,
    /// Visible to the declaring type and its sub-types
    Protected = 3,
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// Capability flags of a type, method or field.
    ///
    /// The two low bits hold an [`Accessibility`] value rather than independent flags; use
    /// [`Flags::accessibility`] and [`Flags::set_accessibility`] for them. The remaining bits are
    /// independent.
    pub struct Flags: u32 {
        /// The two bits holding the [`Accessibility`] enumeration
        const ACCESS_MASK = 0b11;
        /// Member belongs to the type, not an instance
        const STATIC = 1 << 2;
        /// Method cannot be overridden
        const FINAL = 1 << 3;
        /// Type is a class
        const CLASS = 1 << 4;
        /// Type is an interface
        const INTERFACE = 1 << 5;
    }
}

impl Flags {
    /// Width of the accessibility field
    pub const ACCESS_BITS: u32 = 2;

    /// The accessibility stored in the low bits
    #[must_use]
    pub fn accessibility(self) -> Accessibility {
        match self.bits() & Flags::ACCESS_MASK.bits() {
            1 => Accessibility::Public,
            2 => Accessibility::Private,
            3 => Accessibility::Protected,
            _ => Accessibility::Unset,
        }
    }

    /// Replace the accessibility stored in the low bits
    pub fn set_accessibility(&mut self, access: Accessibility) {
        *self = self.with_accessibility(access);
    }

    /// Copy of `self` with the accessibility replaced
    #[must_use]
    pub fn with_accessibility(self, access: Accessibility) -> Self {
        Flags::from_bits_retain((self.bits() & !Flags::ACCESS_MASK.bits()) | access as u32)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Flags::from_bits_retain(u32::deserialize(deserializer)?))
    }
}
