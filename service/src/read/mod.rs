//! Read entities definitions.

pub mod accommodation;
pub mod feedback;
pub mod host;
pub mod reservation;
pub mod tenant;

use std::{fmt, future::Future};

use common::listing::{Column, Searchable};

use crate::store::{Cached, Stores};

/// [`Cached`] resource displayed as a list of rows.
pub trait Listed: Cached {
    /// Row of the list.
    type Row: Clone + fmt::Debug + Searchable;

    /// Sortable [`Column`] of the list.
    type Column: Column<Self::Row> + fmt::Debug + 'static;

    /// Builds the rows of the list out of the provided [`Stores`].
    fn rows(stores: &Stores) -> impl Future<Output = Vec<Self::Row>>;
}
