// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Named context properties exposed to the UI layer.

use super::EngineError;
use std::any::Any;
use std::collections::HashMap;

/// Objects made available to the UI by name.
#[derive(Default)]
pub struct ContextProperties {
    values: HashMap<String, Box<dyn Any>>,
}

impl ContextProperties {
    /// Set a property, replacing any previous value under the same name.
    pub fn set<T: Any>(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        if self.values.insert(name.clone(), Box::new(value)).is_some() {
            log::debug!("Replaced context property '{}'", name);
        }
    }

    pub fn get<T: Any>(&self, name: &str) -> Result<&T, EngineError> {
        self.values
            .get(name)
            .ok_or_else(|| EngineError::ContextPropertyNotFound(name.to_string()))?
            .downcast_ref::<T>()
            .ok_or_else(|| EngineError::ContextPropertyType(name.to_string()))
    }

    pub fn get_mut<T: Any>(&mut self, name: &str) -> Result<&mut T, EngineError> {
        self.values
            .get_mut(name)
            .ok_or_else(|| EngineError::ContextPropertyNotFound(name.to_string()))?
            .downcast_mut::<T>()
            .ok_or_else(|| EngineError::ContextPropertyType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut props = ContextProperties::default();
        props.set("answer", 42u32);

        assert_eq!(*props.get::<u32>("answer").unwrap(), 42);
        *props.get_mut::<u32>("answer").unwrap() += 1;
        assert_eq!(*props.get::<u32>("answer").unwrap(), 43);
    }

    #[test]
    fn test_missing_and_mistyped() {
        let mut props = ContextProperties::default();
        props.set("name", String::from("backend"));

        assert!(matches!(
            props.get::<u32>("missing"),
            Err(EngineError::ContextPropertyNotFound(_))
        ));
        assert!(matches!(
            props.get::<u32>("name"),
            Err(EngineError::ContextPropertyType(_))
        ));
    }

    #[test]
    fn test_set_replaces() {
        let mut props = ContextProperties::default();
        props.set("value", 1i32);
        props.set("value", "text");

        assert!(props.contains("value"));
        assert_eq!(*props.get::<&str>("value").unwrap(), "text");
    }
}
