//! [`Reservation`]-related read definitions.

use crate::domain::tenant;
#[cfg(doc)]
use crate::domain::{Reservation, Tenant};

/// Selector of the most recent [`Reservation`] made by a [`Tenant`].
#[derive(Clone, Copy, Debug)]
pub struct LastOf(pub tenant::Id);

pub mod list {
    //! [`Reservation`] list definitions.

    use std::{borrow::Cow, cmp::Ordering, collections::HashMap};

    use common::listing::{self, compare_text, Labeled, Searchable};

    use crate::{
        domain::{Accommodation, Reservation, Resource as _, Tenant},
        read::Listed,
        store::Stores,
    };

    /// [`Reservation`] joined with its [`Tenant`] and [`Accommodation`].
    #[derive(Clone, Debug, PartialEq)]
    pub struct Row {
        /// The [`Reservation`] itself.
        pub reservation: Reservation,

        /// [`Tenant`] who made the [`Reservation`], if it's loaded.
        pub tenant: Option<Tenant>,

        /// Reserved [`Accommodation`], if it's loaded.
        pub accommodation: Option<Accommodation>,
    }

    impl Row {
        /// Returns the full name of the [`Tenant`], if it's loaded.
        #[must_use]
        pub fn tenant_name(&self) -> Option<String> {
            self.tenant.as_ref().map(Tenant::full_name)
        }

        /// Returns the name of the [`Accommodation`], if it's loaded.
        #[must_use]
        pub fn accommodation_name(&self) -> Option<&str> {
            self.accommodation.as_ref().map(|a| a.name.as_ref())
        }
    }

    /// Sortable column of a [`Reservation`] list.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Column {
        /// [`Reservation::id`].
        Id,

        /// [`Tenant`] full name.
        Tenant,

        /// [`Accommodation`] name.
        Accommodation,

        /// [`Reservation::start_date`].
        StartDate,

        /// [`Reservation::end_date`].
        EndDate,
    }

    impl listing::Column<Row> for Column {
        fn compare(self, a: &Row, b: &Row) -> Ordering {
            match self {
                Self::Id => a.reservation.id.cmp(&b.reservation.id),
                Self::Tenant => compare_text(
                    &a.tenant_name().unwrap_or_default(),
                    &b.tenant_name().unwrap_or_default(),
                ),
                Self::Accommodation => compare_text(
                    a.accommodation_name().unwrap_or_default(),
                    b.accommodation_name().unwrap_or_default(),
                ),
                Self::StartDate => {
                    a.reservation.start_date.cmp(&b.reservation.start_date)
                }
                Self::EndDate => {
                    a.reservation.end_date.cmp(&b.reservation.end_date)
                }
            }
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            let mut fields = Vec::with_capacity(5);
            if let Some(name) = self.tenant_name() {
                fields.push(name.into());
            }
            if let Some(name) = self.accommodation_name() {
                fields.push(name.into());
            }
            fields.push(self.reservation.start_date.to_string().into());
            fields.push(self.reservation.end_date.to_string().into());
            fields.push(self.reservation.id.to_string().into());
            fields
        }
    }

    impl Labeled for Reservation {
        fn label(&self) -> String {
            format!(
                "{} {} {}",
                self.id, self.tenant_id, self.accommodation_id,
            )
        }
    }

    impl Listed for Reservation {
        type Row = Row;
        type Column = Column;

        async fn rows(stores: &Stores) -> Vec<Row> {
            let (reservations, tenants, accommodations) = futures::join!(
                stores.reservations.list(),
                stores.tenants.list(),
                stores.accommodations.list(),
            );
            let tenants = tenants
                .into_iter()
                .map(|t| (t.id(), t))
                .collect::<HashMap<_, _>>();
            let accommodations = accommodations
                .into_iter()
                .map(|a| (a.id(), a))
                .collect::<HashMap<_, _>>();

            reservations
                .into_iter()
                .map(|reservation| Row {
                    tenant: tenants.get(&reservation.tenant_id).cloned(),
                    accommodation: accommodations
                        .get(&reservation.accommodation_id)
                        .cloned(),
                    reservation,
                })
                .collect()
        }
    }
}
