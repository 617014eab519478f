//! Binding directory.
//!
//! Keeps the ordered list of binding names of a table together with a
//! membership set. Both are only ever changed through this type, which keeps
//! them in sync.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;
use tabulon_core::{Error, Result};

/// Ordered, duplicate-free set of binding names.
#[derive(Clone, Debug, Default)]
pub struct BindingDirectory {
    /// Bindings in output order.
    ordered: Vec<String>,
    /// Membership set mirroring `ordered`.
    members: HashSet<String>,
}

impl BindingDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory from `bindings`, failing if any name repeats.
    pub fn from_list(bindings: Vec<String>) -> Result<Self> {
        let members: HashSet<String> = bindings.iter().cloned().collect();
        if members.len() != bindings.len() {
            return Err(Error::duplicate_binding(&bindings));
        }
        Ok(Self {
            ordered: bindings,
            members,
        })
    }

    /// Appends every name not already present, preserving prior order.
    pub fn add<I, S>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for b in bindings {
            let b = b.as_ref();
            if !self.members.contains(b) {
                self.members.insert(String::from(b));
                self.ordered.push(String::from(b));
            }
        }
    }

    /// Replaces the directory with `bindings`, which must all be known.
    ///
    /// On failure the directory is left untouched.
    pub fn project<S: AsRef<str>>(&mut self, bindings: &[S]) -> Result<()> {
        let unknown = bindings
            .iter()
            .map(|b| b.as_ref())
            .find(|b| !self.contains(b));
        if let Some(unknown) = unknown {
            return Err(Error::unknown_binding_projection(unknown, &self.ordered));
        }
        let mut projected = BindingDirectory::new();
        projected.add(bindings.iter().map(|b| b.as_ref()));
        *self = projected;
        Ok(())
    }

    /// Returns true if `binding` is part of the directory.
    #[inline]
    pub fn contains(&self, binding: &str) -> bool {
        self.members.contains(binding)
    }

    /// Returns the bindings in order.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    /// Returns the number of bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true if there are no bindings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Returns true if both directories hold the same names, in any order.
    pub fn same_set(&self, other: &BindingDirectory) -> bool {
        self.members.len() == other.members.len()
            && self.members.iter().all(|b| other.members.contains(b))
    }

    /// Returns the names shared with `other`, in this directory's order.
    pub fn shared_with(&self, other: &BindingDirectory) -> Vec<String> {
        self.ordered
            .iter()
            .filter(|b| other.contains(b))
            .cloned()
            .collect()
    }

    /// Returns the union of both directories: this one's names first, then
    /// `other`'s, each in insertion order.
    pub fn union(&self, other: &BindingDirectory) -> BindingDirectory {
        let mut merged = self.clone();
        merged.add(other.ordered.iter());
        merged
    }
}

impl PartialEq for BindingDirectory {
    fn eq(&self, other: &Self) -> bool {
        self.ordered == other.ordered
    }
}
