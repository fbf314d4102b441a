//! [`Query`] definition.

pub mod accommodation;
pub mod host;
pub mod list;
pub mod reservation;
pub mod tenant;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{backend, Backend},
    Service,
};

pub use self::list::{Get, List, Suggest};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] [`Select`]ing a `T`ype from a [`Backend`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct BackendQuery<T>(T);

impl<W, B> BackendQuery<By<W, B>> {
    /// Creates a new [`BackendQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<W> BackendQuery<By<W, ()>> {
    /// Creates a new [`BackendQuery`] selecting a `W` unconditionally.
    #[must_use]
    pub fn new() -> Self {
        Self::by(())
    }
}

impl<W> Default for BackendQuery<By<W, ()>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Bk, N, W, B> Query<BackendQuery<By<W, B>>> for Service<Bk, N>
where
    Bk: Backend<Select<By<W, B>>, Ok = W, Err = Traced<backend::Error>>,
{
    type Ok = W;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        BackendQuery(by): BackendQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.backend()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}
