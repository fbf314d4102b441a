//! Service contains the business logic of the dashboard.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod form;
pub mod infra;
pub mod notify;
pub mod query;
pub mod read;
pub mod store;

use std::{fmt, sync::Arc};

#[cfg(test)]
use axum as _;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use infra::Backend;

pub use self::{
    command::Command,
    notify::{Notification, Notifier},
    query::Query,
    store::{Cached, Store, Stores},
};

/// Domain service of the dashboard.
///
/// Cloning a [`Service`] shares its [`Stores`].
#[derive(Clone, Debug)]
pub struct Service<B, N = notify::Log> {
    /// [`Backend`] of this [`Service`].
    backend: B,

    /// [`Notifier`] of this [`Service`].
    notifier: N,

    /// [`Stores`] of the loaded records.
    stores: Arc<Stores>,
}

impl<B, N> Service<B, N> {
    /// Creates a new [`Service`] with empty [`Stores`].
    #[must_use]
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            backend,
            notifier,
            stores: Arc::default(),
        }
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns [`Notifier`] of this [`Service`].
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns [`Stores`] of this [`Service`].
    #[must_use]
    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Returns the [`Store`] of the provided `R`esource.
    #[must_use]
    pub fn store<R: Cached>(&self) -> &Store<R> {
        R::store(&self.stores)
    }
}

impl<B, N: Notifier> Service<B, N> {
    /// Logs the provided failure and notifies the user about it.
    fn report<E: fmt::Display>(&self, title: String, error: &Traced<E>) {
        let error: &E = error.as_ref();
        log::error!("{title}: {error}");
        let notification =
            Notification::error(title).with_description(error.to_string());
        self.notifier.notify(notification);
    }
}
