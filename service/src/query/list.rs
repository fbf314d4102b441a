//! [`Query`]s over the loaded [`Store`]s.

use std::{convert::Infallible, marker::PhantomData};

use common::listing::{self, Labeled, Search, Sort, View};

#[cfg(doc)]
use crate::store::Store;
use crate::{domain::Resource, read::Listed, store::Cached, Service};

use super::Query;

/// [`Query`] for a filtered and sorted [`View`] of the loaded `R`ecords.
#[derive(Debug)]
pub struct List<R: Listed> {
    /// [`Search`] the rows must match.
    pub search: Search,

    /// [`Sort`] of the rows.
    pub sort: Sort<R::Column>,
}

impl<R: Listed> Default for List<R> {
    fn default() -> Self {
        Self {
            search: Search::default(),
            sort: Sort::default(),
        }
    }
}

impl<B, N, R: Listed> Query<List<R>> for Service<B, N> {
    type Ok = View<R::Row>;
    type Err = Infallible;

    async fn execute(&self, query: List<R>) -> Result<Self::Ok, Self::Err> {
        let List { search, sort } = query;
        let rows = R::rows(self.stores()).await;
        Ok(View::new(rows, &search, &sort))
    }
}

/// [`Query`] for a single loaded `R`ecord by its ID.
#[derive(Debug)]
pub struct Get<R: Resource>(pub R::Id);

impl<B, N, R: Cached> Query<Get<R>> for Service<B, N> {
    type Ok = Option<R>;
    type Err = Infallible;

    async fn execute(&self, Get(id): Get<R>) -> Result<Self::Ok, Self::Err> {
        Ok(self.store::<R>().get(id).await)
    }
}

/// [`Query`] for the loaded `R`ecords matching an autocomplete input.
#[derive(Debug)]
pub struct Suggest<R> {
    /// Text typed into the picker.
    pub input: String,

    /// Maximum number of suggestions, if any.
    pub limit: Option<usize>,

    /// Type of the suggested records.
    _of: PhantomData<R>,
}

impl<R> Suggest<R> {
    /// Creates a new [`Suggest`] [`Query`] for the provided `input`.
    #[must_use]
    pub fn new(input: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            input: input.into(),
            limit,
            _of: PhantomData,
        }
    }
}

impl<B, N, R> Query<Suggest<R>> for Service<B, N>
where
    R: Cached + Labeled,
{
    type Ok = Vec<R>;
    type Err = Infallible;

    async fn execute(&self, query: Suggest<R>) -> Result<Self::Ok, Self::Err> {
        let items = self.store::<R>().list().await;
        Ok(listing::suggest(&items, &query.input, query.limit)
            .into_iter()
            .cloned()
            .collect())
    }
}
