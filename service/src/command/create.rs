//! [`Command`] for creating a new record out of a [`Form`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Resource,
    form::{self, Form},
    infra::{backend, Backend},
    notify::{Notification, Notifier},
    store::{Cached, Echo},
    Service,
};

use super::{load, Command, Load};

/// [`Command`] for creating a new record out of a [`Form`].
///
/// The [`Form`] is validated first, so nothing is sent to the [`Backend`]
/// if it's invalid.
#[derive(Clone, Debug)]
pub struct Create<F>(pub F);

impl<B, N, F> Command<Create<F>> for Service<B, N>
where
    B: Backend<
        Insert<<F::Resource as Resource>::Draft>,
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

    async fn execute(&self, cmd: Create<F>) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Create(form) = cmd;
        let draft = form
            .validate()
            .map_err(E::Invalid)
            .map_err(tracerr::wrap!())?;

        let name = <F::Resource as Resource>::NAME;
        let record = match self.backend().execute(Insert(draft)).await {
            Ok(record) => record,
            Err(e) => {
                self.report(format!("Failed to create {name}"), &e);
                return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
            }
        };

        match <F::Resource as Cached>::POLICY.echo {
            Echo::Splice => {
                <F::Resource as Cached>::store(self.stores())
                    .prepend(record.clone())
                    .await;
            }
            Echo::Reload => {
                if let Err(e) = self.execute(Load::<F::Resource>::new()).await {
                    log::debug!("{name} created, but reload failed: {e}");
                }
            }
        }

        self.notifier().notify(
            Notification::success(format!("{name} created")).with_description(
                format!("{name} #{} has been successfully added", record.id()),
            ),
        );
        Ok(record)
    }
}

/// Error of [`Create`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Form`] failed validation.
    #[display("Invalid input: {_0}")]
    Invalid(form::Errors),

    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}

impl ExecutionError {
    /// Returns the validation [`form::Errors`], if the [`Form`] was
    /// invalid.
    #[must_use]
    pub fn invalid(&self) -> Option<&form::Errors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Backend(_) => None,
        }
    }
}
