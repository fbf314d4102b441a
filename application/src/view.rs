//! [`Render`] and [`Columns`] definitions of the dashboard records.

use common::listing::Sort;
use service::{
    domain::{Accommodation, Feedback, Host, Reservation, Tenant},
    read::{
        self, accommodation::list as accommodations, feedback::list as feedback,
        host::list as hosts, reservation::list as reservations,
        tenant::list as tenants, Listed,
    },
};
use tracerr::Traced;

use crate::{render::Sorted, Render};

crate::define_error! {
    enum ViewError {
        #[code = "UNKNOWN_COLUMN"]
        #[message = "Unknown sort column"]
        UnknownColumn,
    }
}

/// [`Listed`] resource with named sortable columns.
pub trait Columns: Listed {
    /// Sortable columns as `(name, header, column)` triples.
    const COLUMNS: &'static [(&'static str, &'static str, Self::Column)];

    /// Builds a [`Sort`] by selecting the provided column `names` one by
    /// one, the way header clicks do.
    ///
    /// # Errors
    ///
    /// If any of the `names` is not a sortable column.
    fn sort(
        names: &[String],
    ) -> Result<Sort<Self::Column>, Traced<ViewError>> {
        let mut sort = Sort::default();
        for name in names {
            let (_, _, column) = Self::COLUMNS
                .iter()
                .find(|(n, ..)| n.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| tracerr::new!(ViewError::UnknownColumn))?;
            sort.select(*column);
        }
        Ok(sort)
    }

    /// Returns the [`Sorted`] header of the provided [`Sort`], if any.
    fn sorted(sort: &Sort<Self::Column>) -> Option<Sorted> {
        let column = sort.column()?;
        let &(_, header, _) =
            Self::COLUMNS.iter().find(|(.., c)| *c == column)?;
        Some(Sorted {
            header,
            arrow: sort.arrow(column)?,
        })
    }
}

/// Renders an optional value, falling back to a dash.
fn or_dash(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

impl Render for Accommodation {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Name", "Address", "Rooms", "Beds", "Floor", "Price", "From",
        "To", "Host",
    ];

    fn title(&self) -> String {
        format!("{} #{}", self.name, self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.address.to_string(),
            self.rooms.to_string(),
            self.bed_places.to_string(),
            self.floor.to_string(),
            self.price.to_string(),
            self.start_date.to_string(),
            self.end_date.to_string(),
            or_dash(self.host_id),
        ]
    }
}

impl Columns for Accommodation {
    const COLUMNS: &'static [(&'static str, &'static str, Self::Column)] = &[
        ("id", "ID", accommodations::Column::Id),
        ("name", "Name", accommodations::Column::Name),
        ("address", "Address", accommodations::Column::Address),
        ("rooms", "Rooms", accommodations::Column::Rooms),
        ("bed-places", "Beds", accommodations::Column::BedPlaces),
        ("floor", "Floor", accommodations::Column::Floor),
        ("price", "Price", accommodations::Column::Price),
        ("start-date", "From", accommodations::Column::StartDate),
        ("end-date", "To", accommodations::Column::EndDate),
    ];
}

impl Render for Host {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Surname", "Email", "Address", "Superhost"];

    fn title(&self) -> String {
        let star = if self.superhost { " ★" } else { "" };
        format!("{}{star} #{}", self.full_name(), self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.surname.to_string(),
            self.email.to_string(),
            self.address.to_string(),
            if self.superhost { "yes" } else { "no" }.to_owned(),
        ]
    }
}

impl Columns for Host {
    const COLUMNS: &'static [(&'static str, &'static str, Self::Column)] = &[
        ("id", "ID", hosts::Column::Id),
        ("name", "Name", hosts::Column::Name),
        ("surname", "Surname", hosts::Column::Surname),
        ("email", "Email", hosts::Column::Email),
        ("address", "Address", hosts::Column::Address),
        ("superhost", "Superhost", hosts::Column::Superhost),
    ];
}

impl Render for Tenant {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Surname", "Email", "Address"];

    fn title(&self) -> String {
        format!("{} #{}", self.full_name(), self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.to_string(),
            self.surname.to_string(),
            self.email.to_string(),
            self.address.to_string(),
        ]
    }
}

impl Columns for Tenant {
    const COLUMNS: &'static [(&'static str, &'static str, Self::Column)] = &[
        ("id", "ID", tenants::Column::Id),
        ("name", "Name", tenants::Column::Name),
        ("surname", "Surname", tenants::Column::Surname),
        ("email", "Email", tenants::Column::Email),
        ("address", "Address", tenants::Column::Address),
    ];
}

impl Render for Reservation {
    const HEADERS: &'static [&'static str] =
        &["ID", "Tenant", "Accommodation", "Start", "End"];

    fn title(&self) -> String {
        format!("Reservation #{}", self.id)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format!("#{}", self.tenant_id),
            format!("#{}", self.accommodation_id),
            self.start_date.to_string(),
            self.end_date.to_string(),
        ]
    }
}

impl Render for reservations::Row {
    const HEADERS: &'static [&'static str] = Reservation::HEADERS;

    fn title(&self) -> String {
        self.reservation.title()
    }

    fn cells(&self) -> Vec<String> {
        let r = &self.reservation;
        vec![
            r.id.to_string(),
            self.tenant_name()
                .unwrap_or_else(|| format!("#{}", r.tenant_id)),
            self.accommodation_name().map_or_else(
                || format!("#{}", r.accommodation_id),
                ToOwned::to_owned,
            ),
            r.start_date.to_string(),
            r.end_date.to_string(),
        ]
    }
}

impl Columns for Reservation {
    const COLUMNS: &'static [(&'static str, &'static str, Self::Column)] = &[
        ("id", "ID", reservations::Column::Id),
        ("tenant", "Tenant", reservations::Column::Tenant),
        ("accommodation", "Accommodation", reservations::Column::Accommodation),
        ("start-date", "Start", reservations::Column::StartDate),
        ("end-date", "End", reservations::Column::EndDate),
    ];
}

impl Render for Feedback {
    const HEADERS: &'static [&'static str] =
        &["ID", "Title", "Text", "Points", "Reservation"];

    fn title(&self) -> String {
        format!("{} {}", self.points.stars(), self.title)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.to_string(),
            self.text.to_string(),
            self.points.stars(),
            format!("#{}", self.reservation_id),
        ]
    }
}

impl Columns for Feedback {
    const COLUMNS: &'static [(&'static str, &'static str, Self::Column)] = &[
        ("id", "ID", feedback::Column::Id),
        ("title", "Title", feedback::Column::Title),
        ("text", "Text", feedback::Column::Text),
        ("points", "Points", feedback::Column::Points),
        ("reservation", "Reservation", feedback::Column::Reservation),
    ];
}

impl Render for read::host::Best {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Name", "Surname", "Email", "Address", "Superhost", "Feedback",
        "Average",
    ];

    fn title(&self) -> String {
        format!("Best host: {}", self.host.title())
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = self.host.cells();
        cells.push(self.feedback.to_string());
        cells.push(format!("{:.2}", self.average_points));
        cells
    }
}

impl Render for read::accommodation::Best {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Name", "Address", "Rooms", "Beds", "Floor", "Price", "From",
        "To", "Host", "Reservations",
    ];

    fn title(&self) -> String {
        format!("Best accommodation: {}", self.accommodation.title())
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = self.accommodation.cells();
        cells.push(self.reservations.to_string());
        cells
    }
}
