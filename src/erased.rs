use std::any::{self, Any, TypeId};
use std::fmt;

/// A value whose concrete type is hidden behind `dyn Any`.
///
/// The `TypeId` and type name are captured when the value is erased, so the
/// payload can be described without knowing what it is. Getting the value
/// back always goes through a checked downcast.
///
/// ```
/// use sovran_typedict::ErasedValue;
///
/// let value = ErasedValue::new(42u16);
/// assert!(value.is::<u16>());
/// assert_eq!(value.downcast_ref::<u16>(), Some(&42));
/// assert_eq!(value.downcast_ref::<i64>(), None);
/// ```
pub struct ErasedValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl ErasedValue {
    /// Erases a value of any `'static + Send + Sync` type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// The `TypeId` of the erased payload.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The name of the erased payload's type, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the payload is of type `T`
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get a reference to the payload if it is of type `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Get a mutable reference to the payload if it is of type `T`
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Take the payload out if it is of type `T`, handing `self` back otherwise.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        let Self {
            type_id,
            type_name,
            value,
        } = self;
        match value.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(value) => Err(Self {
                type_id,
                type_name,
                value,
            }),
        }
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_checked_downcast() {
        let mut value = ErasedValue::new(Point { x: 1, y: 2 });

        assert!(value.is::<Point>());
        assert!(!value.is::<(i32, i32)>());
        assert_eq!(value.type_id(), TypeId::of::<Point>());
        assert!(value.type_name().ends_with("Point"));

        value.downcast_mut::<Point>().unwrap().x = 10;
        assert_eq!(value.downcast_ref::<Point>(), Some(&Point { x: 10, y: 2 }));
        assert!(value.downcast_mut::<String>().is_none());
    }

    #[test]
    fn test_downcast_by_value() {
        let value = ErasedValue::new("hello".to_string());

        let value = match value.downcast::<&str>() {
            Ok(_) => panic!("a String must not come back as &str"),
            Err(original) => original,
        };
        assert_eq!(value.downcast::<String>().unwrap(), "hello");
    }

    #[test]
    fn test_debug_shows_type_only() {
        let value = ErasedValue::new(7u8);
        assert_eq!(format!("{:?}", value), "ErasedValue { type_name: \"u8\", .. }");
    }
}
