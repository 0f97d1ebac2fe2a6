//! Opaque application data carried alongside genesis nodes.

use core::any::Any;
use core::fmt;
use std::sync::Arc;

/// Arbitrary application value attached to a genesis tree.
///
/// The transformer never looks inside; it copies the handle into the runtime
/// tree, so the runtime value is the *same* allocation as the genesis value.
#[derive(Clone)]
pub struct AppData(Arc<dyn Any + Send + Sync>);

impl AppData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrows the value as `T`, if that is what it holds.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns true if both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AppData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Documents parsed from files always hold JSON values; show those.
        match self.downcast_ref::<serde_json::Value>() {
            Some(value) => f.debug_tuple("AppData").field(value).finish(),
            None => f.write_str("AppData(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_value() {
        let data = AppData::new(String::from("this is app data"));
        let copy = data.clone();
        assert!(data.ptr_eq(&copy));
        assert_eq!(
            copy.downcast_ref::<String>().map(String::as_str),
            Some("this is app data")
        );
        assert!(copy.downcast_ref::<u32>().is_none());
    }
}
