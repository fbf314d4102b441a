//! [`Query`] collection related to [`Reservation`]s.

use common::operations::By;

use crate::{domain::Reservation, read};
#[cfg(doc)]
use crate::{domain::Tenant, Query};

use super::BackendQuery;

/// Queries the most recent [`Reservation`] of a [`Tenant`].
///
/// Resolves to [`None`] if the [`Tenant`] has no [`Reservation`]s.
pub type LastOf =
    BackendQuery<By<Option<Reservation>, read::reservation::LastOf>>;
