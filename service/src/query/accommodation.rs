//! [`Query`] collection related to [`Accommodation`]s.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Accommodation, Query};

use super::BackendQuery;

/// Queries the [`Accommodation`] having the most reservations.
pub type Best = BackendQuery<By<read::accommodation::Best, ()>>;
