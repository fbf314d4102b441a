//! [`Dialog`] submitting a [`Form`].

use tracerr::Traced;

use crate::{
    command::{create, Create, Edit},
    domain::Resource,
    Command,
};

use super::{Errors, Form};

/// [`Form`] being filled either for creating a new record, or for editing
/// an existing one.
#[derive(Clone, Debug)]
pub struct Dialog<F: Form> {
    /// [`Form`] being filled.
    form: F,

    /// ID of the edited record, if any.
    editing: Option<<F::Resource as Resource>::Id>,

    /// [`Errors`] of the last submission.
    errors: Errors,
}

impl<F: Form> Dialog<F> {
    /// Opens a new [`Dialog`] for creating a record.
    #[must_use]
    pub fn create() -> Self {
        Self {
            form: F::default(),
            editing: None,
            errors: Errors::default(),
        }
    }

    /// Opens a new [`Dialog`] for editing the provided `record`.
    #[must_use]
    pub fn edit(record: &F::Resource) -> Self {
        Self {
            form: F::prefill(record),
            editing: Some(record.id()),
            errors: Errors::default(),
        }
    }

    /// Returns the [`Form`] of this [`Dialog`].
    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Returns the [`Form`] of this [`Dialog`] for filling.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Returns the [`Errors`] of the last submission.
    #[must_use]
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Submits the [`Form`] of this [`Dialog`] via the provided `service`.
    ///
    /// A successful creation resets the [`Form`], so the [`Dialog`] is
    /// ready for the next record. A failed submission keeps the entered
    /// values.
    ///
    /// # Errors
    ///
    /// If the [`Form`] is invalid, or the backend fails.
    pub async fn submit<S>(
        &mut self,
        service: &S,
    ) -> Result<F::Resource, Traced<create::ExecutionError>>
    where
        S: Command<
                Create<F>,
                Ok = F::Resource,
                Err = Traced<create::ExecutionError>,
            > + Command<
                Edit<F>,
                Ok = F::Resource,
                Err = Traced<create::ExecutionError>,
            >,
    {
        let res = match self.editing {
            None => service.execute(Create(self.form.clone())).await,
            Some(id) => {
                service
                    .execute(Edit {
                        id,
                        form: self.form.clone(),
                    })
                    .await
            }
        };

        match &res {
            Ok(_) => {
                self.errors = Errors::default();
                if self.editing.is_none() {
                    self.form = F::default();
                }
            }
            Err(e) => {
                self.errors = e.as_ref().invalid().cloned().unwrap_or_default();
            }
        }
        res
    }
}
