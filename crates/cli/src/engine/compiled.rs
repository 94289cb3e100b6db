// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazily compiled matcher state.

/// A derived artifact that is either Stale (must be rebuilt before use) or
/// Fresh (holds the built value).
///
/// Starts Stale. [`invalidate`](Self::invalidate) returns it to Stale;
/// [`get_or_try_compile`](Self::get_or_try_compile) makes it Fresh and is a
/// no-op while it already is. A failed compile leaves it Stale.
#[derive(Debug, Clone)]
pub(crate) struct Compiled<T> {
    fresh: Option<T>,
}

impl<T> Default for Compiled<T> {
    fn default() -> Self {
        Self { fresh: None }
    }
}

impl<T> Compiled<T> {
    pub(crate) fn is_fresh(&self) -> bool {
        self.fresh.is_some()
    }

    pub(crate) fn invalidate(&mut self) {
        self.fresh = None;
    }

    pub(crate) fn get(&self) -> Option<&T> {
        self.fresh.as_ref()
    }

    pub(crate) fn get_or_try_compile<E>(
        &mut self,
        compile: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        let value = match self.fresh.take() {
            Some(value) => value,
            None => compile()?,
        };
        Ok(self.fresh.insert(value))
    }
}

#[cfg(test)]
#[path = "compiled_tests.rs"]
mod tests;
