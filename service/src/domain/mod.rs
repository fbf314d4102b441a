//! Domain definitions.

pub mod accommodation;
pub mod feedback;
pub mod host;
pub mod person;
pub mod reservation;
pub mod tenant;

use std::{fmt, hash::Hash};

pub use self::{
    accommodation::Accommodation, feedback::Feedback, host::Host,
    reservation::Reservation, tenant::Tenant,
};

/// Record managed by the dashboard.
pub trait Resource: Clone + fmt::Debug {
    /// ID of this [`Resource`].
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// [`Draft`] of this [`Resource`] submitted on creation and edition.
    type Draft: Draft<Resource = Self>;

    /// Human-readable name of this [`Resource`] kind.
    const NAME: &'static str;

    /// Human-readable plural name of this [`Resource`] kind.
    const PLURAL: &'static str;

    /// Returns the ID of this [`Resource`].
    fn id(&self) -> Self::Id;
}

/// Payload of a [`Resource`] not having its ID assigned yet.
pub trait Draft: Clone + fmt::Debug {
    /// [`Resource`] this [`Draft`] is of.
    type Resource;
}
