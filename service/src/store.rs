//! In-memory [`Store`]s of the loaded [`Resource`]s.

use tokio::sync::RwLock;

use crate::domain::{
    Accommodation, Feedback, Host, Reservation, Resource, Tenant,
};

/// How a deletion is reflected in a [`Store`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Deletion {
    /// Item is removed before the backend confirms the deletion, and is
    /// restored at its original position if the backend fails.
    Optimistic,

    /// Item is removed only once the backend confirms the deletion.
    Pessimistic,
}

/// How a record echoed by the backend after a mutation is reflected in a
/// [`Store`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Echo {
    /// Echoed record is spliced into the list in place.
    Splice,

    /// Whole list is reloaded from the backend.
    Reload,
}

/// Mutation policy of a [`Store`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Policy {
    /// [`Deletion`] semantics.
    pub deletion: Deletion,

    /// [`Echo`] semantics.
    pub echo: Echo,
}

/// Item removed from a [`Store`], remembering its position.
#[derive(Clone, Debug)]
pub struct Removed<R> {
    /// Position the item was removed from.
    pub index: usize,

    /// Removed item.
    pub item: R,
}

/// Ordered list of loaded `R`esources.
#[derive(Debug)]
pub struct Store<R> {
    /// Items of this [`Store`] in their display order.
    items: RwLock<Vec<R>>,
}

impl<R> Default for Store<R> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Resource> Store<R> {
    /// Returns a snapshot of all the items in this [`Store`].
    pub async fn list(&self) -> Vec<R> {
        self.items.read().await.clone()
    }

    /// Returns the item with the provided `id`, if any.
    pub async fn get(&self, id: R::Id) -> Option<R> {
        self.items.read().await.iter().find(|i| i.id() == id).cloned()
    }

    /// Returns the number of items in this [`Store`].
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Indicates whether this [`Store`] has no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Replaces all the items of this [`Store`].
    pub async fn set(&self, items: Vec<R>) {
        *self.items.write().await = items;
    }

    /// Puts the provided `item` to the front of this [`Store`].
    ///
    /// If an item with the same ID is present already, it's replaced in
    /// place instead, so no duplicates appear.
    pub async fn prepend(&self, item: R) {
        let mut items = self.items.write().await;
        if let Some(existing) = items.iter_mut().find(|i| i.id() == item.id())
        {
            *existing = item;
        } else {
            items.insert(0, item);
        }
    }

    /// Replaces the item having the same ID as the provided `item`.
    ///
    /// Returns `false` if there is no such item.
    pub async fn replace(&self, item: R) -> bool {
        let mut items = self.items.write().await;
        items
            .iter_mut()
            .find(|i| i.id() == item.id())
            .map(|existing| *existing = item)
            .is_some()
    }

    /// Removes the item with the provided `id`, if any.
    pub async fn remove(&self, id: R::Id) -> Option<Removed<R>> {
        let mut items = self.items.write().await;
        let index = items.iter().position(|i| i.id() == id)?;
        Some(Removed {
            index,
            item: items.remove(index),
        })
    }

    /// Puts the [`Removed`] item back to its original position.
    pub async fn restore(&self, Removed { index, item }: Removed<R>) {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.id() == item.id()) {
            return;
        }
        let index = index.min(items.len());
        items.insert(index, item);
    }
}

/// [`Resource`] kept in a [`Store`] of [`Stores`].
pub trait Cached: Resource {
    /// Mutation [`Policy`] of the [`Store`].
    const POLICY: Policy;

    /// Returns the [`Store`] of this [`Resource`].
    fn store(stores: &Stores) -> &Store<Self>;
}

/// All the [`Store`]s of the dashboard.
#[derive(Debug, Default)]
pub struct Stores {
    /// [`Accommodation`]s.
    pub accommodations: Store<Accommodation>,

    /// [`Host`]s.
    pub hosts: Store<Host>,

    /// [`Tenant`]s.
    pub tenants: Store<Tenant>,

    /// [`Reservation`]s.
    pub reservations: Store<Reservation>,

    /// [`Feedback`]s.
    pub feedback: Store<Feedback>,
}

impl Cached for Accommodation {
    const POLICY: Policy = Policy {
        deletion: Deletion::Optimistic,
        echo: Echo::Splice,
    };

    fn store(stores: &Stores) -> &Store<Self> {
        &stores.accommodations
    }
}

impl Cached for Host {
    const POLICY: Policy = Policy {
        deletion: Deletion::Pessimistic,
        echo: Echo::Splice,
    };

    fn store(stores: &Stores) -> &Store<Self> {
        &stores.hosts
    }
}

impl Cached for Tenant {
    const POLICY: Policy = Policy {
        deletion: Deletion::Pessimistic,
        echo: Echo::Splice,
    };

    fn store(stores: &Stores) -> &Store<Self> {
        &stores.tenants
    }
}

impl Cached for Reservation {
    const POLICY: Policy = Policy {
        deletion: Deletion::Pessimistic,
        echo: Echo::Reload,
    };

    fn store(stores: &Stores) -> &Store<Self> {
        &stores.reservations
    }
}

impl Cached for Feedback {
    const POLICY: Policy = Policy {
        deletion: Deletion::Pessimistic,
        echo: Echo::Splice,
    };

    fn store(stores: &Stores) -> &Store<Self> {
        &stores.feedback
    }
}
