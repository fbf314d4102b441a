//! [`Query`] collection related to [`Host`]s.

use common::operations::By;

use crate::{domain::Host, read};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries the [`Host`] having the most feedback.
pub type Best = BackendQuery<By<read::host::Best, ()>>;

/// Queries all the [`Host`]s being superhosts.
pub type Superhosts = BackendQuery<By<Vec<Host>, read::host::Superhosts>>;

/// Queries the five [`Host`]s with the most reservations.
pub type TopFive = BackendQuery<By<Vec<Host>, read::host::TopFive>>;
