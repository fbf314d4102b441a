//! [`Query`] collection related to [`Tenant`]s.

use common::operations::By;

use crate::{domain::Tenant, read};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries the five [`Tenant`]s with the most reservations.
pub type TopFive = BackendQuery<By<Vec<Tenant>, read::tenant::TopFive>>;
