//! [`Command`]s for (re)loading [`Store`]s from a [`Backend`].

use std::marker::PhantomData;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::store::Store;
use crate::{
    domain::{Accommodation, Feedback, Host, Reservation, Tenant},
    infra::{backend, Backend},
    notify::Notifier,
    store::Cached,
    Service,
};

use super::Command;

/// [`Command`] for replacing the [`Store`] of `R` with the list fetched
/// from a [`Backend`].
///
/// Returns the number of loaded records.
#[derive(Debug)]
pub struct Load<R>(PhantomData<R>);

impl<R> Load<R> {
    /// Creates a new [`Load`] [`Command`].
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for Load<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, N, R> Command<Load<R>> for Service<B, N>
where
    B: Backend<
        Select<By<Vec<R>, ()>>,
        Ok = Vec<R>,
        Err = Traced<backend::Error>,
    >,
    N: Notifier,
    R: Cached,
{
    type Ok = usize;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: Load<R>) -> Result<Self::Ok, Self::Err> {
        let items = match self.backend().execute(Select(By::new(()))).await {
            Ok(items) => items,
            Err(e) => {
                self.report(format!("Failed to load {}", R::PLURAL), &e);
                return Err(e).map_err(tracerr::wrap!());
            }
        };

        let count = items.len();
        R::store(self.stores()).set(items).await;
        log::debug!("loaded {count} {}", R::PLURAL);

        Ok(count)
    }
}

/// Error of [`Load`] [`Command`] execution.
pub type ExecutionError = backend::Error;

/// [`Command`] for concurrently [`Load`]ing all the [`Store`]s.
///
/// Every failure is reported on its own, while the first one is returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadAll;

impl<B, N> Command<LoadAll> for Service<B, N>
where
    Self: Command<Load<Accommodation>, Ok = usize, Err = Traced<ExecutionError>>
        + Command<Load<Host>, Ok = usize, Err = Traced<ExecutionError>>
        + Command<Load<Tenant>, Ok = usize, Err = Traced<ExecutionError>>
        + Command<Load<Reservation>, Ok = usize, Err = Traced<ExecutionError>>
        + Command<Load<Feedback>, Ok = usize, Err = Traced<ExecutionError>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: LoadAll) -> Result<Self::Ok, Self::Err> {
        let (accommodations, hosts, tenants, reservations, feedback) =
            futures::join!(
                self.execute(Load::<Accommodation>::new()),
                self.execute(Load::<Host>::new()),
                self.execute(Load::<Tenant>::new()),
                self.execute(Load::<Reservation>::new()),
                self.execute(Load::<Feedback>::new()),
            );

        accommodations
            .and(hosts)
            .and(tenants)
            .and(reservations)
            .and(feedback)
            .map(drop)
            .map_err(tracerr::wrap!())
    }
}
