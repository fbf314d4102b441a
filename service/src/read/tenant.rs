//! [`Tenant`]-related read definitions.

#[cfg(doc)]
use crate::domain::Tenant;

/// Selector of the five [`Tenant`]s with the most [`Reservation`]s.
///
/// [`Reservation`]: crate::domain::Reservation
#[derive(Clone, Copy, Debug, Default)]
pub struct TopFive;

pub mod list {
    //! [`Tenant`] list definitions.

    use std::{borrow::Cow, cmp::Ordering};

    use common::listing::{self, compare_text, Labeled, Searchable};

    use crate::{domain::Tenant, read::Listed, store::Stores};

    /// Sortable column of a [`Tenant`] list.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Column {
        /// [`Tenant::id`].
        Id,

        /// [`Tenant::name`].
        Name,

        /// [`Tenant::surname`].
        Surname,

        /// [`Tenant::email`].
        Email,

        /// [`Tenant::address`].
        Address,
    }

    impl listing::Column<Tenant> for Column {
        fn compare(self, a: &Tenant, b: &Tenant) -> Ordering {
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
            }
        }
    }

    impl Searchable for Tenant {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![
                self.name.as_ref().into(),
                self.surname.as_ref().into(),
                self.email.as_ref().into(),
            ]
        }
    }

    impl Labeled for Tenant {
        fn label(&self) -> String {
            format!("{} {} {}", self.name, self.surname, self.id)
        }
    }

    impl Listed for Tenant {
        type Row = Self;
        type Column = Column;

        async fn rows(stores: &Stores) -> Vec<Self> {
            stores.tenants.list().await
        }
    }
}
