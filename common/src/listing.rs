//! Client-side filtering and sorting of in-memory lists.

use std::{borrow::Cow, cmp::Ordering};

/// Order of sorting.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Order {
    /// Ascending order.
    #[default]
    Ascending,

    /// Descending order.
    Descending,
}

impl Order {
    /// Returns the opposite [`Order`].
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this [`Order`] to the provided ascending [`Ordering`].
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns an arrow indicating this [`Order`] in a column header.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Sortable column of a `T` list.
pub trait Column<T>: Copy + Eq {
    /// Compares the provided items by this [`Column`] in ascending order.
    fn compare(self, a: &T, b: &T) -> Ordering;
}

/// Compares two strings the way a human reader expects: case-insensitively
/// first, falling back to a case-sensitive comparison for ties.
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Sorting state of a list: a selected [`Column`] and its [`Order`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sort<C> {
    /// Selected [`Column`], if any.
    column: Option<C>,

    /// [`Order`] of the selected [`Column`].
    order: Order,
}

impl<C> Default for Sort<C> {
    fn default() -> Self {
        Self {
            column: None,
            order: Order::Ascending,
        }
    }
}

impl<C: Copy + Eq> Sort<C> {
    /// Creates a new [`Sort`] by the provided `column` in the provided
    /// `order`.
    #[must_use]
    pub const fn new(column: C, order: Order) -> Self {
        Self {
            column: Some(column),
            order,
        }
    }

    /// Returns the selected [`Column`], if any.
    #[must_use]
    pub fn column(&self) -> Option<C> {
        self.column
    }

    /// Returns the [`Order`] of this [`Sort`].
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Selects the provided `column`.
    ///
    /// Selecting the already selected column toggles the [`Order`], while
    /// selecting another one resets it to [`Order::Ascending`].
    pub fn select(&mut self, column: C) {
        if self.column == Some(column) {
            self.order = self.order.toggled();
        } else {
            self.column = Some(column);
            self.order = Order::Ascending;
        }
    }

    /// Returns the header arrow for the provided `column`, if it's the
    /// selected one.
    #[must_use]
    pub fn arrow(&self, column: C) -> Option<&'static str> {
        (self.column == Some(column)).then(|| self.order.arrow())
    }

    /// Sorts the provided `items` according to this [`Sort`].
    ///
    /// Sorting is stable, so ties keep their relative order. Without a
    /// selected column the `items` are left untouched.
    pub fn apply<T>(&self, items: &mut [T])
    where
        C: Column<T>,
    {
        if let Some(column) = self.column {
            items.sort_by(|a, b| self.order.apply(column.compare(a, b)));
        }
    }
}

/// Item which can be searched for by a text needle.
pub trait Searchable {
    /// Returns the fields of this item a [`Search`] looks into.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Case-insensitive substring search.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Search(String);

impl Search {
    /// Creates a new [`Search`] for the provided `needle`.
    #[must_use]
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self(needle.as_ref().to_lowercase())
    }

    /// Indicates whether this [`Search`] matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether the provided `text` contains the needle of this
    /// [`Search`].
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.0)
    }

    /// Checks whether any of the [`Searchable::search_fields()`] of the
    /// provided `item` contains the needle of this [`Search`].
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| self.matches_text(field))
    }
}

/// Filtered and sorted projection of a list.
#[derive(Clone, Debug)]
pub struct View<T> {
    /// Items passing the filter, in the display order.
    pub items: Vec<T>,

    /// Total number of items in the source list.
    pub total: usize,
}

impl<T> View<T> {
    /// Builds a new [`View`] of the provided `source` list.
    #[must_use]
    pub fn new<C>(source: Vec<T>, search: &Search, sort: &Sort<C>) -> Self
    where
        T: Searchable,
        C: Column<T>,
    {
        let total = source.len();
        let mut items = source
            .into_iter()
            .filter(|item| search.matches(item))
            .collect::<Vec<_>>();
        sort.apply(&mut items);
        Self { items, total }
    }

    /// Returns the number of shown items.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

/// Item which can be suggested by an autocomplete picker.
pub trait Labeled {
    /// Returns the text a picker query is matched against.
    fn label(&self) -> String;
}

/// Suggests the `items` whose [`Labeled::label()`] contains the `query`.
///
/// An empty (or blank) `query` suggests nothing.
#[must_use]
pub fn suggest<'i, T: Labeled>(
    items: &'i [T],
    query: &str,
    limit: Option<usize>,
) -> Vec<&'i T> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let search = Search::new(query);
    items
        .iter()
        .filter(|item| search.matches_text(&item.label()))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

#[cfg(test)]
mod spec {
    use std::{borrow::Cow, cmp::Ordering};

    use super::{
        compare_text, suggest, Column, Labeled, Order, Search, Searchable,
        Sort, View,
    };

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        name: &'static str,
        address: &'static str,
        rooms: u32,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![self.name.into(), self.address.into()]
        }
    }

    impl Labeled for Item {
        fn label(&self) -> String {
            format!("{} {}", self.name, self.id)
        }
    }

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Col {
        Name,
        Rooms,
    }

    impl Column<Item> for Col {
        fn compare(self, a: &Item, b: &Item) -> Ordering {
            match self {
                Self::Name => compare_text(a.name, b.name),
                Self::Rooms => a.rooms.cmp(&b.rooms),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Sea View",
                address: "Via Roma 1, Napoli",
                rooms: 2,
            },
            Item {
                id: 2,
                name: "mountain hut",
                address: "Strada Alta 7, Bolzano",
                rooms: 3,
            },
            Item {
                id: 3,
                name: "City Loft",
                address: "Corso Italia 12, Milano",
                rooms: 2,
            },
            Item {
                id: 4,
                name: "Lake House",
                address: "Lungolago 3, Como",
                rooms: 2,
            },
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn filters_by_unique_substring() {
        let view = View::new(
            items(),
            &Search::new("BOLZANO"),
            &Sort::<Col>::default(),
        );
        assert_eq!(ids(&view.items), [2]);
        assert_eq!(view.total, 4);
        assert_eq!(view.shown(), 1);

        let view =
            View::new(items(), &Search::new("loft"), &Sort::<Col>::default());
        assert_eq!(ids(&view.items), [3]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let view =
            View::new(items(), &Search::new(""), &Sort::<Col>::default());
        assert_eq!(ids(&view.items), [1, 2, 3, 4]);

        let view = View::new(
            items(),
            &Search::new("nowhere"),
            &Sort::<Col>::default(),
        );
        assert!(view.items.is_empty());
        assert_eq!(view.total, 4);
    }

    #[test]
    fn selecting_column_toggles_order() {
        let mut sort = Sort::default();
        assert_eq!(sort.column(), None);

        sort.select(Col::Rooms);
        assert_eq!(sort.column(), Some(Col::Rooms));
        assert_eq!(sort.order(), Order::Ascending);
        assert_eq!(sort.arrow(Col::Rooms), Some("↑"));
        assert_eq!(sort.arrow(Col::Name), None);

        sort.select(Col::Rooms);
        assert_eq!(sort.order(), Order::Descending);
        assert_eq!(sort.arrow(Col::Rooms), Some("↓"));

        sort.select(Col::Name);
        assert_eq!(sort.column(), Some(Col::Name));
        assert_eq!(sort.order(), Order::Ascending);
    }

    #[test]
    fn sorts_text_case_insensitively() {
        let view = View::new(
            items(),
            &Search::default(),
            &Sort::new(Col::Name, Order::Ascending),
        );
        assert_eq!(ids(&view.items), [3, 4, 2, 1]);

        let view = View::new(
            items(),
            &Search::default(),
            &Sort::new(Col::Name, Order::Descending),
        );
        assert_eq!(ids(&view.items), [1, 2, 4, 3]);
    }

    #[test]
    fn ties_keep_original_order_when_toggling() {
        let mut sort = Sort::default();

        sort.select(Col::Rooms);
        let asc = View::new(items(), &Search::default(), &sort);
        assert_eq!(ids(&asc.items), [1, 3, 4, 2]);

        sort.select(Col::Rooms);
        let desc = View::new(items(), &Search::default(), &sort);
        assert_eq!(ids(&desc.items), [2, 1, 3, 4]);

        sort.select(Col::Rooms);
        let again = View::new(items(), &Search::default(), &sort);
        assert_eq!(ids(&again.items), ids(&asc.items));
    }

    #[test]
    fn text_comparison() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_text("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn suggests_by_label() {
        let items = items();

        let found = suggest(&items, "house", None);
        assert_eq!(found.iter().map(|i| i.id).collect::<Vec<_>>(), [4]);

        let found = suggest(&items, "o", Some(2));
        assert_eq!(found.len(), 2);

        assert!(suggest(&items, "", None).is_empty());
        assert!(suggest(&items, "   ", None).is_empty());
    }
}
