//! [`Host`]-related read definitions.

use serde::{Deserialize, Serialize};

use crate::domain::Host;

/// [`Host`] having the most [`Feedback`]s.
///
/// [`Feedback`]: crate::domain::Feedback
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Best {
    /// The [`Host`] itself.
    #[serde(flatten)]
    pub host: Host,

    /// Number of [`Feedback`]s received by the [`Host`].
    ///
    /// [`Feedback`]: crate::domain::Feedback
    #[serde(rename = "nfeedback", default)]
    pub feedback: u64,

    /// Average [`Points`] received by the [`Host`].
    ///
    /// [`Points`]: crate::domain::feedback::Points
    #[serde(rename = "avgFeedback", default)]
    pub average_points: f64,
}

/// Selector of the [`Host`]s being superhosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Superhosts;

/// Selector of the five [`Host`]s with the most [`Reservation`]s.
///
/// [`Reservation`]: crate::domain::Reservation
#[derive(Clone, Copy, Debug, Default)]
pub struct TopFive;

pub mod list {
    //! [`Host`] list definitions.

    use std::{borrow::Cow, cmp::Ordering};

    use common::listing::{self, compare_text, Labeled, Searchable};

    use crate::{read::Listed, store::Stores};

    use super::Host;

    /// Sortable column of a [`Host`] list.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Column {
        /// [`Host::id`].
        Id,

        /// [`Host::name`].
        Name,

        /// [`Host::surname`].
        Surname,

        /// [`Host::email`].
        Email,

        /// [`Host::address`].
        Address,

        /// [`Host::superhost`].
        Superhost,
    }

    impl listing::Column<Host> for Column {
        fn compare(self, a: &Host, b: &Host) -> Ordering {
            match self {
                Self::Id => a.id.cmp(&b.id),
                Self::Name => compare_text(a.name.as_ref(), b.name.as_ref()),
                Self::Surname => {
                    compare_text(a.surname.as_ref(), b.surname.as_ref())
                }
                Self::Email => compare_text(a.email.as_ref(), b.email.as_ref()),
                Self::Address => {
                    compare_text(a.address.as_ref(), b.address.as_ref())
                }
                Self::Superhost => a.superhost.cmp(&b.superhost),
            }
        }
    }

    impl Searchable for Host {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![
                self.name.as_ref().into(),
                self.surname.as_ref().into(),
                self.email.as_ref().into(),
            ]
        }
    }

    impl Labeled for Host {
        fn label(&self) -> String {
            format!("{} {} {}", self.name, self.surname, self.id)
        }
    }

    impl Listed for Host {
        type Row = Self;
        type Column = Column;

        async fn rows(stores: &Stores) -> Vec<Self> {
            stores.hosts.list().await
        }
    }
}
