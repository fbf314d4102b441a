//! [`Feedback`]-related read definitions.

#[cfg(doc)]
use crate::domain::Feedback;

pub mod list {
    //! [`Feedback`] list definitions.

    use std::{borrow::Cow, cmp::Ordering};

    use common::listing::{self, compare_text, Labeled, Searchable};

    use crate::{domain::Feedback, read::Listed, store::Stores};

    /// Sortable column of a [`Feedback`] list.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Column {
        /// [`Feedback::id`].
        Id,

        /// [`Feedback::title`].
        Title,

        /// [`Feedback::text`].
        Text,

        /// [`Feedback::points`].
        Points,

        /// [`Feedback::reservation_id`].
        Reservation,
    }

    impl listing::Column<Feedback> for Column {
        fn compare(self, a: &Feedback, b: &Feedback) -> Ordering {
            match self {
                Self::Id => a.id.cmp(&b.id),
                Self::Title => {
                    compare_text(a.title.as_ref(), b.title.as_ref())
                }
                Self::Text => compare_text(a.text.as_ref(), b.text.as_ref()),
                Self::Points => a.points.cmp(&b.points),
                Self::Reservation => a.reservation_id.cmp(&b.reservation_id),
            }
        }
    }

    impl Searchable for Feedback {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![self.title.as_ref().into(), self.text.as_ref().into()]
        }
    }

    impl Labeled for Feedback {
        fn label(&self) -> String {
            format!("{} {}", self.title, self.id)
        }
    }

    impl Listed for Feedback {
        type Row = Self;
        type Column = Column;

        async fn rows(stores: &Stores) -> Vec<Self> {
            stores.feedback.list().await
        }
    }
}
