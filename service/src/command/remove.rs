//! [`Command`] for deleting a record.

use common::operations::{By, Delete};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Resource,
    infra::{backend, Backend},
    notify::{Notification, Notifier},
    store::{Cached, Deletion, Echo},
    Service,
};

use super::{load, Command, Load};

/// [`Command`] for deleting the `R`ecord with the provided ID.
///
/// Depending on the [`Deletion`] policy of `R`, the record disappears from
/// its store either right away (and comes back if the [`Backend`] fails),
/// or only once the [`Backend`] confirms the deletion.
#[derive(Debug)]
pub struct Remove<R: Resource>(pub R::Id);

impl<B, N, R> Command<Remove<R>> for Service<B, N>
where
    B: Backend<Delete<By<R, R::Id>>, Ok = (), Err = Traced<backend::Error>>,
    N: Notifier,
    R: Cached,
    Self: Command<Load<R>, Ok = usize, Err = Traced<load::ExecutionError>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Remove<R>) -> Result<Self::Ok, Self::Err> {
        let Remove(id) = cmd;
        let store = R::store(self.stores());

        let removed = match R::POLICY.deletion {
            Deletion::Optimistic => store.remove(id).await,
            Deletion::Pessimistic => None,
        };

        let deleted = self
            .backend()
            .execute(Delete(By::<R, _>::new(id)))
            .await;
        if let Err(e) = deleted {
            if let Some(removed) = removed {
                store.restore(removed).await;
                log::debug!("{} #{id} restored", R::NAME);
            }
            self.report(format!("Failed to delete {} #{id}", R::NAME), &e);
            return Err(e).map_err(tracerr::wrap!());
        }

        match (R::POLICY.deletion, R::POLICY.echo) {
            (_, Echo::Reload) => {
                if let Err(e) = self.execute(Load::<R>::new()).await {
                    log::debug!("{} deleted, but reload failed: {e}", R::NAME);
                }
            }
            (Deletion::Pessimistic, Echo::Splice) => {
                drop(store.remove(id).await);
            }
            (Deletion::Optimistic, Echo::Splice) => {}
        }

        self.notifier().notify(
            Notification::success(format!("{} deleted", R::NAME))
                .with_description(format!(
                    "{} #{id} has been successfully deleted",
                    R::NAME,
                )),
        );
        Ok(())
    }
}

/// Error of [`Remove`] [`Command`] execution.
pub type ExecutionError = backend::Error;
