//! Plain text rendering of records.

use std::fmt::Write as _;

use common::listing::View;
use itertools::Itertools as _;

use crate::config::Layout;

/// Record which can be rendered as a table row or a card.
pub trait Render {
    /// Headers of the table columns.
    const HEADERS: &'static [&'static str];

    /// Returns the title of a card.
    fn title(&self) -> String;

    /// Returns the table cells, one per [`Render::HEADERS`] entry.
    fn cells(&self) -> Vec<String>;
}

/// Marker of the header a list is sorted by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sorted {
    /// Header of the sorted column.
    pub header: &'static str,

    /// Arrow indicating the order.
    pub arrow: &'static str,
}

/// Renders the provided [`View`] in the provided [`Layout`], followed by a
/// summary line.
#[must_use]
pub fn list<T: Render>(
    view: &View<T>,
    layout: Layout,
    sorted: Option<Sorted>,
) -> String {
    let mut out = match layout {
        Layout::Table => table(&view.items, sorted),
        Layout::Cards => cards(&view.items),
    };
    _ = writeln!(out, "Showing {} of {} results", view.shown(), view.total);
    out
}

/// Renders the provided `items` as an aligned table.
#[must_use]
pub fn table<T: Render>(items: &[T], sorted: Option<Sorted>) -> String {
    let headers = T::HEADERS
        .iter()
        .map(|&h| match sorted {
            Some(s) if s.header == h => format!("{h} {}", s.arrow),
            _ => h.to_owned(),
        })
        .collect::<Vec<_>>();
    let rows = items.iter().map(Render::cells).collect::<Vec<_>>();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain([h.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .join(" | ")
            .trim_end()
            .to_owned()
    };

    let mut out = String::new();
    _ = writeln!(out, "{}", line(&headers));
    _ = writeln!(out, "{}", widths.iter().map(|&w| "-".repeat(w)).join("-+-"));
    for row in &rows {
        _ = writeln!(out, "{}", line(row));
    }
    out
}

/// Renders the provided `items` as cards.
#[must_use]
pub fn cards<T: Render>(items: &[T]) -> String {
    items.iter().map(card).join("\n")
}

/// Renders a single `item` as a card.
#[must_use]
pub fn card<T: Render>(item: &T) -> String {
    let width = T::HEADERS
        .iter()
        .map(|h| h.chars().count())
        .max()
        .unwrap_or_default();

    let mut out = format!("{}\n", item.title());
    for (header, cell) in T::HEADERS.iter().zip(item.cells()) {
        let label = format!("{header}:");
        _ = writeln!(out, "  {label:<pad$}  {cell}", pad = width + 1);
    }
    out
}
