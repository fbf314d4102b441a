//! Application provides command line interface to the [`Service`].

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

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod view;

use std::str::FromStr;

use common::listing::{Labeled, Search};
use service::{
    command::{create, edit, remove, Create, Edit, Load, Remove},
    domain::{Accommodation, Feedback, Host, Reservation, Tenant},
    form::{
        accommodation::AccommodationForm, feedback::FeedbackForm,
        host::HostForm, reservation::ReservationForm, tenant::TenantForm,
    },
    query::{self, Get, List, Suggest},
    read, Cached, Command as _,
};
use tracerr::Traced;
// Used in binary.
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
    render::Render,
};

use self::{
    args::{Command, Resource, Stat},
    config::Layout,
    input::Fill,
    view::Columns,
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Rest>;

define_error! {
    enum CommandError {
        #[code = "INVALID_ID"]
        #[message = "ID must be a positive integer"]
        InvalidId,

        #[code = "NOT_FOUND"]
        #[message = "No such record is loaded"]
        NotFound,
    }
}

/// Expands the provided expression for the [`Resource`] type of the provided
/// [`args::Resource`].
macro_rules! per_resource {
    ($resource:expr, $r:ident => $body:expr) => {
        match $resource {
            Resource::Accommodations => {
                type $r = Accommodation;
                $body
            }
            Resource::Hosts => {
                type $r = Host;
                $body
            }
            Resource::Tenants => {
                type $r = Tenant;
                $body
            }
            Resource::Reservations => {
                type $r = Reservation;
                $body
            }
            Resource::Feedback => {
                type $r = Feedback;
                $body
            }
        }
    };
}

/// Expands the provided expression for the [`Form`] type of the provided
/// [`args::Resource`].
macro_rules! per_form {
    ($resource:expr, $f:ident => $body:expr) => {
        match $resource {
            Resource::Accommodations => {
                type $f = AccommodationForm;
                $body
            }
            Resource::Hosts => {
                type $f = HostForm;
                $body
            }
            Resource::Tenants => {
                type $f = TenantForm;
                $body
            }
            Resource::Reservations => {
                type $f = ReservationForm;
                $body
            }
            Resource::Feedback => {
                type $f = FeedbackForm;
                $body
            }
        }
    };
}

/// Executes the provided [`Command`], returning its rendered output.
///
/// Only the records of the [`Resource`] the [`Command`] works with are loaded
/// from the REST API first. Statistics and creation load nothing.
///
/// # Errors
///
/// If the [`Command`] fails in any way.
pub async fn run(
    service: &Service,
    command: Command,
    layout: Layout,
) -> Result<String, Error> {
    match command {
        Command::List {
            resource,
            search,
            sort,
            cards,
            table,
        } => {
            let layout = if cards {
                Layout::Cards
            } else if table {
                Layout::Table
            } else {
                layout
            };
            load(service, resource).await?;
            per_resource!(resource, R => {
                list::<R>(service, &search, &sort, layout).await
            })
        }
        Command::Show { resource, id } => {
            load(service, resource).await?;
            per_resource!(resource, R => show::<R>(service, &id).await)
        }
        Command::Create { resource, fields } => {
            per_form!(resource, F => create::<F>(service, fields).await)
        }
        Command::Edit {
            resource,
            id,
            fields,
        } => {
            load(service, resource).await?;
            per_form!(resource, F => edit::<F>(service, &id, fields).await)
        }
        Command::Delete { resource, id } => {
            load(service, resource).await?;
            per_resource!(resource, R => delete::<R>(service, &id).await)
        }
        Command::Stats { stat } => stats(service, stat).await,
        Command::Pick {
            resource,
            query,
            limit,
        } => {
            load(service, resource).await?;
            per_resource!(resource, R => {
                pick::<R>(service, query, limit).await
            })
        }
    }
}

/// [`Load`]s the records of the provided [`Resource`].
///
/// [`Reservation`]s are listed along with their [`Tenant`]s and
/// [`Accommodation`]s, so those are loaded too.
async fn load(service: &Service, resource: Resource) -> Result<(), Error> {
    let loaded = if resource == Resource::Reservations {
        let (reservations, tenants, accommodations) = tokio::join!(
            service.execute(Load::<Reservation>::new()),
            service.execute(Load::<Tenant>::new()),
            service.execute(Load::<Accommodation>::new()),
        );
        reservations.and(tenants).and(accommodations)
    } else {
        per_resource!(resource, R => {
            service.execute(Load::<R>::new()).await
        })
    };
    loaded.map(drop).map_err(AsError::into_error)
}

/// Parses the ID of an `R`ecord.
fn parse_id<R: Cached>(raw: &str) -> Result<R::Id, Error>
where
    R::Id: FromStr,
{
    raw.trim()
        .parse()
        .map_err(|_| CommandError::InvalidId.into())
}

/// Renders the [`List`] of the loaded `R`ecords.
async fn list<R>(
    service: &Service,
    search: &str,
    sort: &[String],
    layout: Layout,
) -> Result<String, Error>
where
    R: Columns,
    R::Row: Render,
{
    let sort = R::sort(sort).map_err(AsError::into_error)?;
    let sorted = R::sorted(&sort);
    let view = service
        .execute(List::<R> {
            search: Search::new(search),
            sort,
        })
        .await
        .unwrap_or_else(|e| match e {});
    Ok(render::list(&view, layout, sorted))
}

/// Renders a single loaded `R`ecord.
async fn show<R>(service: &Service, id: &str) -> Result<String, Error>
where
    R: Cached + Render,
    R::Id: FromStr,
{
    let id = parse_id::<R>(id)?;
    let record = service
        .execute(Get::<R>(id))
        .await
        .unwrap_or_else(|e| match e {})
        .ok_or_else(|| Error::from(CommandError::NotFound))?;
    Ok(render::card(&record))
}

/// [`Create`]s a new record out of the provided `fields`.
async fn create<F>(
    service: &Service,
    fields: Vec<(String, String)>,
) -> Result<String, Error>
where
    F: Fill,
    F::Resource: Render,
    Service: service::Command<
        Create<F>,
        Ok = F::Resource,
        Err = Traced<create::ExecutionError>,
    >,
{
    let mut form = F::default();
    form.fill(fields).map_err(AsError::into_error)?;
    let record = service
        .execute(Create(form))
        .await
        .map_err(AsError::into_error)?;
    Ok(render::card(&record))
}

/// [`Edit`]s a loaded record with the provided `fields`.
async fn edit<F>(
    service: &Service,
    id: &str,
    fields: Vec<(String, String)>,
) -> Result<String, Error>
where
    F: Fill,
    F::Resource: Cached + Render,
    <F::Resource as service::domain::Resource>::Id: FromStr,
    Service: service::Command<
        Edit<F>,
        Ok = F::Resource,
        Err = Traced<edit::ExecutionError>,
    >,
{
    let id = parse_id::<F::Resource>(id)?;
    let current = service
        .store::<F::Resource>()
        .get(id)
        .await
        .ok_or_else(|| Error::from(CommandError::NotFound))?;

    let mut form = F::prefill(&current);
    form.fill(fields).map_err(AsError::into_error)?;
    let record = service
        .execute(Edit { id, form })
        .await
        .map_err(AsError::into_error)?;
    Ok(render::card(&record))
}

/// [`Remove`]s a loaded record.
async fn delete<R>(service: &Service, id: &str) -> Result<String, Error>
where
    R: Cached,
    R::Id: FromStr,
    Service: service::Command<
        Remove<R>,
        Ok = (),
        Err = Traced<remove::ExecutionError>,
    >,
{
    let id = parse_id::<R>(id)?;
    service
        .execute(Remove::<R>(id))
        .await
        .map_err(AsError::into_error)?;
    Ok(format!("{} #{id} deleted\n", R::NAME))
}

/// Renders the loaded `R`ecords matching the provided autocomplete `query`.
async fn pick<R>(
    service: &Service,
    query: String,
    limit: Option<usize>,
) -> Result<String, Error>
where
    R: Cached + Labeled + Render,
{
    let found = service
        .execute(Suggest::<R>::new(query, limit))
        .await
        .unwrap_or_else(|e| match e {});
    Ok(found.iter().map(|r| format!("{}\n", r.title())).collect())
}

/// Renders the requested [`Stat`]istic.
async fn stats(service: &Service, stat: Stat) -> Result<String, Error> {
    Ok(match stat {
        Stat::BestHost => render::card(
            &service
                .execute(query::host::Best::new())
                .await
                .map_err(AsError::into_error)?,
        ),
        Stat::BestAccommodation => render::card(
            &service
                .execute(query::accommodation::Best::new())
                .await
                .map_err(AsError::into_error)?,
        ),
        Stat::Superhosts => render::table(
            &service
                .execute(query::host::Superhosts::by(read::host::Superhosts))
                .await
                .map_err(AsError::into_error)?,
            None,
        ),
        Stat::TopHosts => render::table(
            &service
                .execute(query::host::TopFive::by(read::host::TopFive))
                .await
                .map_err(AsError::into_error)?,
            None,
        ),
        Stat::TopTenants => render::table(
            &service
                .execute(query::tenant::TopFive::by(read::tenant::TopFive))
                .await
                .map_err(AsError::into_error)?,
            None,
        ),
        Stat::LastReservation { tenant } => {
            let last = service
                .execute(query::reservation::LastOf::by(
                    read::reservation::LastOf(tenant.into()),
                ))
                .await
                .map_err(AsError::into_error)?;
            last.as_ref().map_or_else(
                || format!("Tenant #{tenant} has no reservations\n"),
                render::card,
            )
        }
    })
}
