// src/device/registry.rs

use core::fmt;

use heapless::LinearMap;

use super::handler::{CommandHandler, PRESSURE_HANDLER};
use crate::common::{
    config::{DELIMITER, LINE_TERMINATOR, PRESSURE_KEY, REGISTRY_CAPACITY},
    error::BarometerError,
};

/// Fixed-size map from command key to handler.
///
/// Keys are case-sensitive and matched exactly. The registry is filled in
/// before it is handed to a `CommandDispatcher`; after that nothing can add
/// or remove entries.
pub struct CommandRegistry<'h, const M: usize = REGISTRY_CAPACITY> {
    handlers: LinearMap<&'static str, &'h dyn CommandHandler, M>,
}

impl<'h, const M: usize> CommandRegistry<'h, M> {
    pub const fn new() -> Self {
        CommandRegistry {
            handlers: LinearMap::new(),
        }
    }

    /// Registry holding the built-in commands (`PRESS`).
    pub fn with_defaults() -> Result<Self, BarometerError> {
        let mut registry = Self::new();
        registry.register(PRESSURE_KEY, &PRESSURE_HANDLER)?;
        Ok(registry)
    }

    /// Binds `key` to `handler`.
    ///
    /// Empty keys and keys containing the delimiter or the line terminator are
    /// refused.
    pub fn register(
        &mut self,
        key: &'static str,
        handler: &'h dyn CommandHandler,
    ) -> Result<(), BarometerError> {
        if !Self::is_valid_key(key) {
            return Err(BarometerError::InvalidCommandKey(key));
        }
        if self.handlers.contains_key(&key) {
            return Err(BarometerError::DuplicateCommand(key));
        }
        self.handlers
            .insert(key, handler)
            .map_err(|_| BarometerError::RegistryFull { capacity: M })?;
        Ok(())
    }

    /// Handler bound to `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<&'h dyn CommandHandler> {
        self.handlers.get(key).copied()
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    #[inline]
    fn is_valid_key(key: &str) -> bool {
        !key.is_empty()
            && !key.contains(DELIMITER)
            && !key.as_bytes().contains(&LINE_TERMINATOR)
    }
}

impl<const M: usize> Default for CommandRegistry<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize> fmt::Debug for CommandRegistry<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Handlers are opaque; list the keys only
        f.debug_set().entries(self.keys()).finish()
    }
}
