use std::borrow::Cow;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("type descriptor must have a non-empty display name")]
pub struct EmptyTypeName;

/// A category of value which can occupy a stack slot.
///
/// Descriptor is identified by its display name:
/// two descriptors are equal iff their names are equal.
/// The name is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeDescriptor(Cow<'static, str>);

impl TypeDescriptor {
    pub const INT32: Self = Self::from_static("Int32");
    pub const INT64: Self = Self::from_static("Int64");
    pub const NATIVE_INT: Self = Self::from_static("NativeInt");
    pub const FLOAT: Self = Self::from_static("Float");
    pub const OBJECT: Self = Self::from_static("Object");
    pub const NULL: Self = Self::from_static("null");
    pub const MANAGED_POINTER: Self = Self::from_static("ManagedPointer");
    pub const UNMANAGED_POINTER: Self = Self::from_static("UnmanagedPointer");

    pub fn new(name: impl Into<Cow<'static, str>>) -> Result<Self, EmptyTypeName> {
        let name = name.into();

        if name.is_empty() {
            return Err(EmptyTypeName);
        }

        Ok(TypeDescriptor(name))
    }

    /// Construct descriptor out of string literal.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    /// In const context this turns into compilation error.
    pub const fn from_static(name: &'static str) -> Self {
        assert!(
            !name.is_empty(),
            "type descriptor must have a non-empty display name"
        );

        TypeDescriptor(Cow::Borrowed(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = EmptyTypeName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeDescriptor::new(value)
    }
}

impl TryFrom<&'static str> for TypeDescriptor {
    type Error = EmptyTypeName;

    fn try_from(value: &'static str) -> Result<Self, Self::Error> {
        TypeDescriptor::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert_eq!(TypeDescriptor::new(""), Err(EmptyTypeName));
        assert_eq!(TypeDescriptor::new(String::new()), Err(EmptyTypeName));
    }

    #[test]
    fn equality_is_structural() {
        let owned = TypeDescriptor::new(String::from("Int32")).unwrap();

        assert_eq!(owned, TypeDescriptor::INT32);
        assert_ne!(owned, TypeDescriptor::INT64);
    }

    #[test]
    fn displays_name() {
        let ty = TypeDescriptor::new("MyStruct").unwrap();

        assert_eq!(ty.to_string(), "MyStruct");
        assert_eq!(ty.name(), "MyStruct");
        assert_eq!(TypeDescriptor::NULL.to_string(), "null");
    }

    #[test]
    #[should_panic]
    fn from_static_panics_on_empty() {
        let name = String::new().leak();
        let _ = TypeDescriptor::from_static(name);
    }
}
