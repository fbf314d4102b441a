//! [`Accommodation`]-related read definitions.

use serde::{Deserialize, Serialize};

use crate::domain::Accommodation;

/// [`Accommodation`] having the most [`Reservation`]s.
///
/// [`Reservation`]: crate::domain::Reservation
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Best {
    /// The [`Accommodation`] itself.
    #[serde(flatten)]
    pub accommodation: Accommodation,

    /// Number of [`Reservation`]s of the [`Accommodation`].
    ///
    /// [`Reservation`]: crate::domain::Reservation
    #[serde(rename = "nreservations", default)]
    pub reservations: u64,
}

pub mod list {
    //! [`Accommodation`] list definitions.

    use std::{borrow::Cow, cmp::Ordering};

    use common::listing::{self, compare_text, Labeled, Searchable};

    use crate::{read::Listed, store::Stores};

    use super::Accommodation;

    /// Sortable column of an [`Accommodation`] list.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Column {
        /// [`Accommodation::id`].
        Id,

        /// [`Accommodation::name`].
        Name,

        /// [`Accommodation::address`].
        Address,

        /// [`Accommodation::rooms`].
        Rooms,

        /// [`Accommodation::bed_places`].
        BedPlaces,

        /// [`Accommodation::floor`].
        Floor,

        /// [`Accommodation::price`].
        Price,

        /// [`Accommodation::start_date`].
        StartDate,

        /// [`Accommodation::end_date`].
        EndDate,
    }

    impl listing::Column<Accommodation> for Column {
        fn compare(self, a: &Accommodation, b: &Accommodation) -> Ordering {
            match self {
                Self::Id => a.id.cmp(&b.id),
                Self::Name => compare_text(a.name.as_ref(), b.name.as_ref()),
                Self::Address => {
                    compare_text(a.address.as_ref(), b.address.as_ref())
                }
                Self::Rooms => a.rooms.cmp(&b.rooms),
                Self::BedPlaces => a.bed_places.cmp(&b.bed_places),
                Self::Floor => a.floor.cmp(&b.floor),
                Self::Price => a.price.cmp(&b.price),
                Self::StartDate => a.start_date.cmp(&b.start_date),
                Self::EndDate => a.end_date.cmp(&b.end_date),
            }
        }
    }

    impl Searchable for Accommodation {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![self.name.as_ref().into(), self.address.as_ref().into()]
        }
    }

    impl Labeled for Accommodation {
        fn label(&self) -> String {
            format!("{} {}", self.name, self.address)
        }
    }

    impl Listed for Accommodation {
        type Row = Self;
        type Column = Column;

        async fn rows(stores: &Stores) -> Vec<Self> {
            stores.accommodations.list().await
        }
    }
}
