//! Command registry: registered descriptors keyed by name

use crate::command::descriptor::CommandDescriptor;
use std::collections::HashMap;

/// Registered commands in registration order
///
/// Inserting a name that is already present replaces the descriptor in its
/// original slot, so iteration order is the order names were first seen.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the replaced descriptor, if any
    pub(crate) fn insert(&mut self, descriptor: CommandDescriptor) -> Option<CommandDescriptor> {
        match self.index.get(descriptor.name()) {
            Some(&slot) => Some(std::mem::replace(&mut self.commands[slot], descriptor)),
            None => {
                self.index
                    .insert(descriptor.name().to_owned(), self.commands.len());
                self.commands.push(descriptor);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(CommandDescriptor::name).collect()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CommandDescriptor> {
        self.commands.iter()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'reg> IntoIterator for &'reg CommandRegistry {
    type Item = &'reg CommandDescriptor;
    type IntoIter = std::slice::Iter<'reg, CommandDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
