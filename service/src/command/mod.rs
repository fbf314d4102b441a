//! [`Command`] definition.

pub mod create;
pub mod edit;
pub mod load;
pub mod remove;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create::Create,
    edit::Edit,
    load::{Load, LoadAll},
    remove::Remove,
};

#[cfg(test)]
mod spec;
