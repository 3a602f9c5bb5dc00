//! Directory-scoped exclusion rules
//!
//! Each directory on the recursion path contributes one scope of rules,
//! stacked on top of a baseline scope that lives for the whole walk.
//! Matching consults every scope, so an ancestor's rules stay active for
//! all of its descendants; a sibling's never do.

use std::ops::{Deref, DerefMut};

use super::pattern::ExcludePattern;

/// Stack of exclusion-rule scopes.
///
/// The scope pushed on entering a directory must live exactly as long as
/// that directory's traversal. `enter` returns a guard whose drop pops,
/// which keeps pushes and pops paired on every return path, including
/// early bail-out on an unreadable directory.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Vec<ExcludePattern>>,
}

impl ScopeStack {
    /// Create a stack seeded with a baseline scope that is never popped.
    pub fn with_baseline(baseline: Vec<ExcludePattern>) -> Self {
        Self {
            scopes: vec![baseline],
        }
    }

    /// Push a directory's scope; the returned guard pops it when dropped.
    ///
    /// An empty scope is still pushed so that pops always pair with
    /// pushes.
    pub fn enter(&mut self, scope: Vec<ExcludePattern>) -> ScopeGuard<'_> {
        self.scopes.push(scope);
        ScopeGuard { stack: self }
    }

    /// Test a bare name against every rule in every active scope.
    pub fn is_excluded(&self, name: &str, is_dir: bool) -> bool {
        self.scopes
            .iter()
            .flatten()
            .any(|pattern| pattern.matches(name, is_dir))
    }

    /// Number of scopes currently on the stack, baseline included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// Guard that pops one scope when dropped.
///
/// Dereferences to the stack so traversal code can keep matching and
/// entering nested scopes while the guard is alive.
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    stack: &'a mut ScopeStack,
}

impl Deref for ScopeGuard<'_> {
    type Target = ScopeStack;

    fn deref(&self) -> &ScopeStack {
        self.stack
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut ScopeStack {
        self.stack
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.stack.scopes.pop();
    }
}
