// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped outside-click subscriptions.
//!
//! A popup should close when the user presses anywhere outside its widget.
//! Rather than installing a global listener and remembering to remove it,
//! widgets hold a [`DismissSubscription`] for exactly as long as their popup
//! is open. Dropping the subscription unregisters it, so every exit path
//! (close, commit, or the widget itself being dropped) releases it.
//!
//! The host owns a [`DismissRegistry`] and, on every pointer press, notifies
//! the widgets whose ids are [`active`](DismissRegistry::active) and that do
//! not contain the press.
//!
//! ```
//! use lanyard_date_input::dismiss::DismissRegistry;
//!
//! let registry = DismissRegistry::new();
//! let subscription = registry.subscribe();
//! assert!(registry.is_active(subscription.id()));
//!
//! drop(subscription);
//! assert!(registry.is_empty());
//! ```

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

/// Identifies one live subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
struct RegistryState {
    next_id: u64,
    active: Vec<SubscriptionId>,
}

/// A shared, single-threaded registry of outside-click subscriptions.
///
/// Cloning the registry clones the handle; all clones observe the same set.
#[derive(Clone, Debug, Default)]
pub struct DismissRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl DismissRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscription, live until the returned token is dropped.
    #[must_use = "dropping the subscription unregisters it immediately"]
    pub fn subscribe(&self) -> DismissSubscription {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.active.push(id);
        tracing::trace!(?id, "outside-click subscription acquired");
        DismissSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Ids of all live subscriptions, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<SubscriptionId> {
        self.state.borrow().active.clone()
    }

    /// Returns `true` if `id` is live.
    #[must_use]
    pub fn is_active(&self, id: SubscriptionId) -> bool {
        self.state.borrow().active.contains(&id)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().active.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().active.is_empty()
    }
}

/// A live outside-click subscription; unregisters itself on drop.
#[derive(Debug)]
pub struct DismissSubscription {
    id: SubscriptionId,
    state: Weak<RefCell<RegistryState>>,
}

impl DismissSubscription {
    /// The id the host uses to route outside presses.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for DismissSubscription {
    fn drop(&mut self) {
        // The registry may already be gone; then there is nothing to release.
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().active.retain(|id| *id != self.id);
            tracing::trace!(id = ?self.id, "outside-click subscription released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let registry = DismissRegistry::new();
        let a = registry.subscribe();
        let b = registry.subscribe();
        assert_ne!(a.id(), b.id());
        assert_eq!(registry.active(), [a.id(), b.id()]);
    }

    #[test]
    fn drop_releases_only_its_own_id() {
        let registry = DismissRegistry::new();
        let a = registry.subscribe();
        let b = registry.subscribe();
        let a_id = a.id();
        drop(a);
        assert!(!registry.is_active(a_id));
        assert!(registry.is_active(b.id()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clones_share_state() {
        let registry = DismissRegistry::new();
        let host_view = registry.clone();
        let sub = registry.subscribe();
        assert!(host_view.is_active(sub.id()));
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = DismissRegistry::new();
        let sub = registry.subscribe();
        drop(registry);
        drop(sub);
    }
}
