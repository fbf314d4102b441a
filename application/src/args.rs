//! [`Args`] definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Administrative dashboard of the rental management system.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Action of the dashboard.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lists the records of a resource.
    List {
        /// Listed resource.
        resource: Resource,

        /// Text the shown records must contain.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Column to sort by.
        ///
        /// Repeating the same column toggles its order.
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,

        /// Renders the records as cards.
        #[arg(long, conflicts_with = "table")]
        cards: bool,

        /// Renders the records as a table.
        #[arg(long)]
        table: bool,
    },

    /// Shows a single record.
    Show {
        /// Resource of the record.
        resource: Resource,

        /// ID of the record.
        id: String,
    },

    /// Creates a new record.
    Create {
        /// Resource of the record.
        resource: Resource,

        /// Field values of the record.
        #[arg(value_name = "FIELD=VALUE", value_parser = field)]
        fields: Vec<(String, String)>,
    },

    /// Edits an existing record.
    ///
    /// Omitted fields keep their current values.
    Edit {
        /// Resource of the record.
        resource: Resource,

        /// ID of the record.
        id: String,

        /// Changed field values of the record.
        #[arg(value_name = "FIELD=VALUE", value_parser = field)]
        fields: Vec<(String, String)>,
    },

    /// Deletes a record.
    Delete {
        /// Resource of the record.
        resource: Resource,

        /// ID of the record.
        id: String,
    },

    /// Shows a statistic computed by the REST API.
    Stats {
        /// Requested statistic.
        #[command(subcommand)]
        stat: Stat,
    },

    /// Suggests the records matching an autocomplete query.
    Pick {
        /// Picked resource.
        resource: Resource,

        /// Typed query.
        query: String,

        /// Maximum number of suggestions.
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Resource managed by the dashboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Resource {
    /// Accommodations.
    #[value(alias = "accommodation")]
    Accommodations,

    /// Hosts.
    #[value(alias = "host")]
    Hosts,

    /// Tenants.
    #[value(alias = "tenant")]
    Tenants,

    /// Reservations.
    #[value(alias = "reservation")]
    Reservations,

    /// Feedback.
    Feedback,
}

/// Statistic computed by the REST API.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum Stat {
    /// Host having the most feedback.
    BestHost,

    /// Accommodation having the most reservations.
    BestAccommodation,

    /// All the superhosts.
    Superhosts,

    /// Five hosts with the most reservations.
    TopHosts,

    /// Five tenants with the most reservations.
    TopTenants,

    /// Most recent reservation of a tenant.
    LastReservation {
        /// ID of the tenant.
        tenant: u64,
    },
}

/// Parses a `FIELD=VALUE` pair.
fn field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_owned(), v.to_owned()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected `FIELD=VALUE`, got `{raw}`"))
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::{Args, Command, Resource, Stat};

    #[test]
    fn parses_list() {
        let args = Args::try_parse_from([
            "dashboard", "list", "hosts", "--search", "rossi", "--sort",
            "name", "--sort", "name", "--cards",
        ])
        .unwrap();

        assert_eq!(args.config, "config.toml");
        let Command::List {
            resource,
            search,
            sort,
            cards,
            table,
        } = args.command
        else {
            panic!("expected `list` command");
        };
        assert_eq!(resource, Resource::Hosts);
        assert_eq!(search, "rossi");
        assert_eq!(sort, ["name", "name"]);
        assert!(cards);
        assert!(!table);
    }

    #[test]
    fn parses_fields() {
        let args = Args::try_parse_from([
            "dashboard", "-c", "dev.toml", "create", "tenant",
            "name=Anna", "address=Via Po 3, Torino", "email=a=b@c.it",
        ])
        .unwrap();

        assert_eq!(args.config, "dev.toml");
        let Command::Create { resource, fields } = args.command else {
            panic!("expected `create` command");
        };
        assert_eq!(resource, Resource::Tenants);
        assert_eq!(
            fields,
            [
                ("name".to_owned(), "Anna".to_owned()),
                ("address".to_owned(), "Via Po 3, Torino".to_owned()),
                ("email".to_owned(), "a=b@c.it".to_owned()),
            ],
        );

        assert!(Args::try_parse_from(["dashboard", "create", "host", "oops"])
            .is_err());
    }

    #[test]
    fn parses_stats() {
        let args = Args::try_parse_from([
            "dashboard", "stats", "last-reservation", "4",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Command::Stats {
                stat: Stat::LastReservation { tenant: 4 },
            },
        ));
    }
}
