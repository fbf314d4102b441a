//! [`Command`] for editing an existing record with a [`Form`].

use common::operations::Update;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Resource,
    form::Form,
    infra::{backend, Backend},
    notify::{Notification, Notifier},
    store::{Cached, Echo},
    Service,
};

use super::{create, load, Command, Load};

/// [`Command`] for replacing an existing record with the validated values
/// of a [`Form`].
#[derive(Clone, Debug)]
pub struct Edit<F: Form> {
    /// ID of the record to edit.
    pub id: <F::Resource as Resource>::Id,

    /// [`Form`] with the new values.
    pub form: F,
}

impl<B, N, F> Command<Edit<F>> for Service<B, N>
where
    B: Backend<
        Update<(
            <F::Resource as Resource>::Id,
            <F::Resource as Resource>::Draft,
        )>,
        Ok = F::Resource,
        Err = Traced<backend::Error>,
    >,
    F: Form,
    F::Resource: Cached,
    N: Notifier,
    Self: Command<
        Load<F::Resource>,
        Ok = usize,
        Err = Traced<load::ExecutionError>,
    >,
{
    type Ok = F::Resource;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: Edit<F>) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Edit { id, form } = cmd;
        let draft = form
            .validate()
            .map_err(E::Invalid)
            .map_err(tracerr::wrap!())?;

        let name = <F::Resource as Resource>::NAME;
        let record = match self.backend().execute(Update((id, draft))).await {
            Ok(record) => record,
            Err(e) => {
                self.report(format!("Failed to update {name} #{id}"), &e);
                return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
            }
        };

        match <F::Resource as Cached>::POLICY.echo {
            Echo::Splice => {
                let store = <F::Resource as Cached>::store(self.stores());
                if !store.replace(record.clone()).await {
                    log::debug!(
                        "{name} #{id} is not loaded, nothing to replace",
                    );
                }
            }
            Echo::Reload => {
                if let Err(e) = self.execute(Load::<F::Resource>::new()).await {
                    log::debug!("{name} updated, but reload failed: {e}");
                }
            }
        }

        self.notifier().notify(
            Notification::success(format!("{name} updated")).with_description(
                format!("{name} #{id} has been successfully updated"),
            ),
        );
        Ok(record)
    }
}

/// Error of [`Edit`] [`Command`] execution.
pub type ExecutionError = create::ExecutionError;
