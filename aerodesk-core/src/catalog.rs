//! Schema catalog
//!
//! Static description of every entity: table, primary key, ordered columns,
//! outgoing foreign-key edges and unique constraints. The catalog is data
//! only; adding an entity means adding one `EntityDef` to [`ENTITIES`].
//!
//! Entities are listed leaves first, so every foreign-key target appears
//! before the entities that reference it.

use serde::Serialize;

use crate::error::CoreError;
use crate::validation::FieldError;
use crate::value::{ColumnType, Value};

/// One column of an entity's table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub label: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    /// Maximum text length, if bounded
    pub max_len: Option<usize>,
}

impl ColumnDef {
    const fn new(name: &'static str, label: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            label,
            ty,
            nullable: false,
            max_len: None,
        }
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnType::Integer)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnType::Decimal)
    }

    pub const fn text(name: &'static str, label: &'static str, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::new(name, label, ColumnType::Text)
        }
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnType::Text)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnType::Date)
    }

    pub const fn timestamp(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnType::Timestamp)
    }

    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, ColumnType::Boolean)
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Coerce submitted text into a value for this column.
    ///
    /// Empty input becomes `Null` only for nullable columns. Booleans are
    /// checkboxes: absent means `false`.
    pub fn coerce(&self, raw: Option<&str>) -> Result<Value, FieldError> {
        let text = raw.map(str::trim).unwrap_or("");

        if text.is_empty() {
            return match self.ty {
                ColumnType::Boolean => Ok(Value::Boolean(false)),
                _ if self.nullable => Ok(Value::Null),
                _ => Err(FieldError::Missing { field: self.name }),
            };
        }

        if let Some(max) = self.max_len {
            if text.chars().count() > max {
                return Err(FieldError::TooLong {
                    field: self.name,
                    max,
                });
            }
        }

        Value::parse(self.ty, self.name, text)
    }
}

/// Outgoing foreign-key edge: `column` references the primary key of `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForeignKeyDef {
    pub column: &'static str,
    pub target: &'static str,
    /// What the user picked, e.g. "departure airport"
    pub label: &'static str,
    /// Extra lowercase fragments identifying this edge in storage error
    /// text (constraint names, legacy column spellings). The column name
    /// itself always matches and need not be listed.
    pub fragments: &'static [&'static str],
}

impl ForeignKeyDef {
    pub const fn new(column: &'static str, target: &'static str, label: &'static str) -> Self {
        Self {
            column,
            target,
            label,
            fragments: &[],
        }
    }

    pub const fn with_fragments(self, fragments: &'static [&'static str]) -> Self {
        Self { fragments, ..self }
    }
}

/// Unique constraint over one or more columns (primary key excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UniqueDef {
    pub columns: &'static [&'static str],
    pub label: &'static str,
}

/// Dependent rows listed on a detail view: `entity` rows whose `column`
/// references the viewed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelatedDef {
    pub entity: &'static str,
    pub column: &'static str,
    pub label: &'static str,
}

impl RelatedDef {
    pub const fn new(entity: &'static str, column: &'static str, label: &'static str) -> Self {
        Self {
            entity,
            column,
            label,
        }
    }
}

/// One entity / table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityDef {
    pub name: &'static str,
    pub label: &'static str,
    pub plural: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    /// Text column shown when another entity joins to this one
    pub display: Option<&'static str>,
    /// All columns, primary key first
    pub columns: &'static [ColumnDef],
    pub foreign_keys: &'static [ForeignKeyDef],
    pub unique: &'static [UniqueDef],
    /// Dependent edges listed on this entity's detail view
    pub related: &'static [RelatedDef],
}

impl EntityDef {
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn require_column(&self, name: &str) -> Result<&'static ColumnDef, CoreError> {
        self.column(name).ok_or_else(|| CoreError::UnknownColumn {
            entity: self.name,
            column: name.to_owned(),
        })
    }

    pub fn primary(&self) -> &'static ColumnDef {
        // validate() guarantees the primary key is a declared column
        self.columns
            .iter()
            .find(|c| c.name == self.primary_key)
            .unwrap_or(&self.columns[0])
    }

    pub fn foreign_key(&self, column: &str) -> Option<&'static ForeignKeyDef> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }

    /// Columns other than the primary key, in declaration order
    pub fn data_columns(&self) -> impl Iterator<Item = &'static ColumnDef> + '_ {
        let pk = self.primary_key;
        self.columns.iter().filter(move |c| c.name != pk)
    }

    /// Label of a column, falling back to its name
    pub fn column_label(&self, name: &str) -> &'static str {
        self.column(name).map(|c| c.label).unwrap_or(self.primary().label)
    }
}

/// Every entity, leaves first
pub fn entities() -> &'static [EntityDef] {
    ENTITIES
}

/// Look up an entity by name, plural or table name (case-insensitive)
pub fn entity(name: &str) -> Option<&'static EntityDef> {
    let name = name.trim().trim_matches('/');
    ENTITIES.iter().find(|e| {
        e.name.eq_ignore_ascii_case(name)
            || e.plural.eq_ignore_ascii_case(name)
            || e.table.eq_ignore_ascii_case(name)
    })
}

pub fn require(name: &str) -> Result<&'static EntityDef, CoreError> {
    entity(name).ok_or_else(|| CoreError::UnknownEntity {
        name: name.to_owned(),
    })
}

/// Inbound foreign-key edges: entities holding a column that references `name`
pub fn dependents(name: &str) -> Vec<(&'static EntityDef, &'static ForeignKeyDef)> {
    ENTITIES
        .iter()
        .flat_map(|e| e.foreign_keys.iter().map(move |fk| (e, fk)))
        .filter(|(_, fk)| fk.target == name)
        .collect()
}

/// Check the table is self-consistent.
pub fn validate() -> Result<(), CoreError> {
    for (index, e) in ENTITIES.iter().enumerate() {
        let invalid = |reason: String| CoreError::InvalidCatalog {
            entity: e.name,
            reason,
        };

        if e.columns.first().map(|c| c.name) != Some(e.primary_key) {
            return Err(invalid("primary key must be the first column".into()));
        }
        if e.primary().nullable {
            return Err(invalid("primary key cannot be nullable".into()));
        }
        if let Some(display) = e.display {
            match e.column(display) {
                Some(c) if c.ty == ColumnType::Text => {}
                _ => return Err(invalid(format!("display column '{}' is not text", display))),
            }
        }
        for fk in e.foreign_keys {
            if e.column(fk.column).is_none() {
                return Err(invalid(format!("foreign key column '{}' missing", fk.column)));
            }
            let earlier = ENTITIES[..index].iter().any(|t| t.name == fk.target);
            if !earlier {
                return Err(invalid(format!(
                    "foreign key target '{}' must be declared earlier",
                    fk.target
                )));
            }
        }
        for unique in e.unique {
            if let Some(missing) = unique.columns.iter().find(|c| e.column(c).is_none()) {
                return Err(invalid(format!("unique column '{}' missing", missing)));
            }
        }
        for related in e.related {
            let edge = dependents(e.name)
                .iter()
                .any(|(d, fk)| d.name == related.entity && fk.column == related.column);
            if !edge {
                return Err(invalid(format!(
                    "'{}.{}' is not a dependent edge",
                    related.entity, related.column
                )));
            }
        }
    }
    Ok(())
}

static ENTITIES: &[EntityDef] = &[
    EntityDef {
        name: "country",
        label: "country",
        plural: "countries",
        table: "country",
        primary_key: "countrycode",
        display: Some("countryname"),
        columns: &[
            ColumnDef::integer("countrycode", "Country code"),
            ColumnDef::text("countryname", "Country name", 100),
        ],
        foreign_keys: &[],
        unique: &[],
        related: &[RelatedDef::new("city", "countrycode", "cities")],
    },
    EntityDef {
        name: "currency",
        label: "currency",
        plural: "currencies",
        table: "currency",
        primary_key: "currencycode",
        display: Some("currencyname"),
        columns: &[
            ColumnDef::integer("currencycode", "Currency code"),
            ColumnDef::text("currencyname", "Currency name", 50),
            ColumnDef::text("currencysymbol", "Currency symbol", 3),
        ],
        foreign_keys: &[],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "city",
        label: "city",
        plural: "cities",
        table: "city",
        primary_key: "cityid",
        display: Some("cityname"),
        columns: &[
            ColumnDef::integer("cityid", "City ID"),
            ColumnDef::text("cityname", "City name", 100),
            ColumnDef::integer("countrycode", "Country"),
        ],
        foreign_keys: &[ForeignKeyDef::new("countrycode", "country", "country")],
        unique: &[],
        related: &[RelatedDef::new("airport", "cityid", "airports")],
    },
    EntityDef {
        name: "airport",
        label: "airport",
        plural: "airports",
        table: "airport",
        primary_key: "airportcode",
        display: Some("airportname"),
        columns: &[
            ColumnDef::integer("airportcode", "Airport code"),
            ColumnDef::text("airportname", "Airport name", 150),
            ColumnDef::decimal("latitude", "Latitude"),
            ColumnDef::decimal("longitude", "Longitude"),
            ColumnDef::text("timezone", "Timezone", 50),
            ColumnDef::integer("cityid", "City"),
        ],
        foreign_keys: &[ForeignKeyDef::new("cityid", "city", "city")],
        unique: &[],
        related: &[
            RelatedDef::new("flight", "departureairportcode", "departures"),
            RelatedDef::new("flight", "arrivalairportcode", "arrivals"),
        ],
    },
    EntityDef {
        name: "alliance",
        label: "alliance",
        plural: "alliances",
        table: "alliance",
        primary_key: "allianceid",
        display: Some("alliancename"),
        columns: &[
            ColumnDef::integer("allianceid", "Alliance ID"),
            ColumnDef::text("alliancename", "Alliance name", 100),
            ColumnDef::integer("allianceheadquarters", "Headquarters city"),
        ],
        foreign_keys: &[ForeignKeyDef::new(
            "allianceheadquarters",
            "city",
            "headquarters city",
        )],
        unique: &[],
        related: &[RelatedDef::new("airline", "allianceid", "airlines")],
    },
    EntityDef {
        name: "airline",
        label: "airline",
        plural: "airlines",
        table: "airline",
        primary_key: "airlineid",
        display: Some("airlinename"),
        columns: &[
            ColumnDef::integer("airlineid", "Airline ID"),
            ColumnDef::text("airlinename", "Airline name", 100),
            ColumnDef::text("airlineicao", "ICAO code", 10),
            ColumnDef::integer("headquarterscityid", "Headquarters city"),
            ColumnDef::integer("foundedyear", "Founded year"),
            ColumnDef::integer("allianceid", "Alliance"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("headquarterscityid", "city", "headquarters city"),
            ForeignKeyDef::new("allianceid", "alliance", "alliance"),
        ],
        unique: &[],
        related: &[
            RelatedDef::new("flight", "airlineid", "flights"),
            RelatedDef::new("aircraft", "airlineid", "aircraft"),
        ],
    },
    EntityDef {
        name: "aircraft_type",
        label: "aircraft type",
        plural: "aircraft types",
        table: "aircraft_type",
        primary_key: "aircrafttypecode",
        display: Some("typename"),
        columns: &[
            ColumnDef::integer("aircrafttypecode", "Aircraft type code"),
            ColumnDef::text("typename", "Type name", 100),
            ColumnDef::integer("maxpassengers", "Max passengers"),
            // Not enforced as a foreign key by the schema
            ColumnDef::integer("maintenancetypeid", "Maintenance type"),
        ],
        foreign_keys: &[],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "aircraft",
        label: "aircraft",
        plural: "aircraft",
        table: "aircraft",
        primary_key: "aircraftid",
        display: None,
        columns: &[
            ColumnDef::integer("aircraftid", "Aircraft ID"),
            ColumnDef::integer("manufactureyear", "Manufacture year"),
            ColumnDef::date("lastmaintenancedate", "Last maintenance date"),
            ColumnDef::integer("airlineid", "Airline"),
            ColumnDef::integer("aircrafttypecode", "Aircraft type"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("airlineid", "airline", "airline"),
            ForeignKeyDef::new("aircrafttypecode", "aircraft_type", "aircraft type"),
        ],
        unique: &[],
        related: &[RelatedDef::new(
            "maintenance_record",
            "aircraftid",
            "maintenance records",
        )],
    },
    EntityDef {
        name: "terminal",
        label: "terminal",
        plural: "terminals",
        table: "terminal",
        primary_key: "terminalid",
        display: Some("terminalname"),
        columns: &[
            ColumnDef::integer("terminalid", "Terminal ID"),
            ColumnDef::text("terminalname", "Terminal name", 50),
            ColumnDef::boolean("isinternational", "International"),
            ColumnDef::integer("airportcode", "Airport"),
        ],
        foreign_keys: &[ForeignKeyDef::new("airportcode", "airport", "airport")],
        unique: &[],
        related: &[RelatedDef::new("gate", "terminalid", "gates")],
    },
    EntityDef {
        name: "gate",
        label: "gate",
        plural: "gates",
        table: "gate",
        primary_key: "gatenumber",
        display: None,
        columns: &[
            ColumnDef::integer("gatenumber", "Gate number"),
            ColumnDef::integer("gatetype", "Gate type"),
            ColumnDef::boolean("isactive", "Active"),
            ColumnDef::integer("airportcode", "Airport"),
            ColumnDef::integer("terminalid", "Terminal"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("airportcode", "airport", "airport"),
            ForeignKeyDef::new("terminalid", "terminal", "terminal"),
        ],
        unique: &[UniqueDef {
            columns: &["gatenumber", "terminalid"],
            label: "gate number in this terminal",
        }],
        related: &[],
    },
    EntityDef {
        name: "flight",
        label: "flight",
        plural: "flights",
        table: "flight",
        primary_key: "flightid",
        display: Some("flightnumber"),
        columns: &[
            ColumnDef::integer("flightid", "Flight ID"),
            ColumnDef::text("flightnumber", "Flight number", 20),
            ColumnDef::timestamp("scheduleddeparture", "Scheduled departure"),
            ColumnDef::timestamp("scheduledarrival", "Scheduled arrival"),
            ColumnDef::timestamp("actualdeparture", "Actual departure").nullable(),
            ColumnDef::timestamp("actualarrival", "Actual arrival").nullable(),
            ColumnDef::text("flightstatus", "Flight status", 20),
            ColumnDef::integer("airlineid", "Airline"),
            ColumnDef::integer("aircraftid", "Aircraft"),
            ColumnDef::integer("departureairportcode", "Departure airport"),
            ColumnDef::integer("arrivalairportcode", "Arrival airport"),
            ColumnDef::integer("departureterminalid", "Departure terminal"),
            ColumnDef::integer("arrivalterminalid", "Arrival terminal"),
            ColumnDef::integer("departuregatenumber", "Departure gate"),
            ColumnDef::integer("arrivalgatenumber", "Arrival gate"),
        ],
        // Gate edges first: their constraint text also mentions terminals
        foreign_keys: &[
            ForeignKeyDef::new("arrivalgatenumber", "gate", "arrival gate")
                .with_fragments(&["arrivalgate", "flight_ibfk_8"]),
            ForeignKeyDef::new("departuregatenumber", "gate", "departure gate")
                .with_fragments(&["departuregate", "flight_ibfk_7"]),
            ForeignKeyDef::new("airlineid", "airline", "airline"),
            ForeignKeyDef::new("aircraftid", "aircraft", "aircraft"),
            ForeignKeyDef::new("departureairportcode", "airport", "departure airport"),
            ForeignKeyDef::new("arrivalairportcode", "airport", "arrival airport"),
            ForeignKeyDef::new("departureterminalid", "terminal", "departure terminal"),
            ForeignKeyDef::new("arrivalterminalid", "terminal", "arrival terminal"),
        ],
        unique: &[],
        related: &[RelatedDef::new("ticket", "flightid", "tickets")],
    },
    EntityDef {
        name: "passenger",
        label: "passenger",
        plural: "passengers",
        table: "passenger",
        primary_key: "passengerid",
        display: Some("lastname"),
        columns: &[
            ColumnDef::integer("passengerid", "Passenger ID"),
            ColumnDef::text("firstname", "First name", 50),
            ColumnDef::text("lastname", "Last name", 50),
            ColumnDef::text("email", "Email", 100),
            ColumnDef::text("phone", "Phone", 20),
            ColumnDef::date("dateofbirth", "Date of birth"),
            ColumnDef::text("passportnumber", "Passport number", 50),
            ColumnDef::integer("countrycode", "Country"),
            ColumnDef::text("nationality", "Nationality", 50),
        ],
        foreign_keys: &[ForeignKeyDef::new("countrycode", "country", "country")],
        unique: &[UniqueDef {
            columns: &["passportnumber"],
            label: "passport number",
        }],
        related: &[RelatedDef::new("booking", "passengerid", "bookings")],
    },
    EntityDef {
        name: "seat_class",
        label: "seat class",
        plural: "seat classes",
        table: "seat_class",
        primary_key: "seatclass",
        display: None,
        columns: &[
            ColumnDef::integer("seatclass", "Seat class"),
            ColumnDef::integer("basefare", "Base fare"),
            ColumnDef::integer("baggageallowance", "Baggage allowance"),
        ],
        foreign_keys: &[],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "booking",
        label: "booking",
        plural: "bookings",
        table: "booking",
        primary_key: "bookingid",
        display: Some("bookingstatus"),
        columns: &[
            ColumnDef::integer("bookingid", "Booking ID"),
            ColumnDef::timestamp("bookingdate", "Booking date"),
            ColumnDef::decimal("totalamount", "Total amount"),
            ColumnDef::text("bookingstatus", "Booking status", 20),
            ColumnDef::text("bookingchannel", "Booking channel", 20),
            ColumnDef::integer("passengerid", "Passenger"),
            ColumnDef::integer("currencycode", "Currency"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("passengerid", "passenger", "passenger"),
            ForeignKeyDef::new("currencycode", "currency", "currency"),
        ],
        unique: &[],
        related: &[RelatedDef::new("ticket", "bookingid", "tickets")],
    },
    EntityDef {
        name: "ticket",
        label: "ticket",
        plural: "tickets",
        table: "ticket",
        primary_key: "ticketid",
        display: Some("seatnumber"),
        columns: &[
            ColumnDef::integer("ticketid", "Ticket ID"),
            ColumnDef::text("seatnumber", "Seat number", 10),
            ColumnDef::text("ticketstatus", "Ticket status", 20),
            ColumnDef::timestamp("checkedinat", "Checked in at").nullable(),
            ColumnDef::integer("bookingid", "Booking"),
            ColumnDef::integer("flightid", "Flight"),
            ColumnDef::integer("seatclass", "Seat class"),
            ColumnDef::integer("passengerid", "Passenger"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("bookingid", "booking", "booking"),
            ForeignKeyDef::new("flightid", "flight", "flight"),
            ForeignKeyDef::new("seatclass", "seat_class", "seat class"),
            ForeignKeyDef::new("passengerid", "passenger", "passenger"),
        ],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "route",
        label: "route",
        plural: "routes",
        table: "route",
        primary_key: "routeid",
        display: None,
        columns: &[
            ColumnDef::integer("routeid", "Route ID"),
            ColumnDef::integer("distancekm", "Distance (km)"),
            ColumnDef::integer("estimateddurationmins", "Estimated duration (min)"),
            ColumnDef::integer("routetype", "Route type"),
            ColumnDef::integer("originairportcode", "Origin airport"),
            ColumnDef::integer("destinationairportcode", "Destination airport"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("originairportcode", "airport", "origin airport"),
            ForeignKeyDef::new("destinationairportcode", "airport", "destination airport"),
        ],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "crew_member",
        label: "crew member",
        plural: "crew members",
        table: "crew_member",
        primary_key: "crewid",
        display: Some("lastname"),
        columns: &[
            ColumnDef::integer("crewid", "Crew ID"),
            ColumnDef::text("firstname", "First name", 50),
            ColumnDef::text("lastname", "Last name", 50),
            ColumnDef::date("dateofbirth", "Date of birth"),
            ColumnDef::date("hiredate", "Hire date"),
            ColumnDef::integer("crewtype", "Crew type"),
            ColumnDef::integer("airlineid", "Airline"),
            ColumnDef::integer("airportcode", "Base airport"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("airlineid", "airline", "airline"),
            ForeignKeyDef::new("airportcode", "airport", "base airport"),
        ],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "maintenance_type",
        label: "maintenance type",
        plural: "maintenance types",
        table: "maintenance_type",
        primary_key: "maintenancetypeid",
        display: Some("maintenancetype"),
        columns: &[
            ColumnDef::integer("maintenancetypeid", "Maintenance type ID"),
            ColumnDef::text("maintenancetype", "Maintenance type", 100),
        ],
        foreign_keys: &[],
        unique: &[],
        related: &[],
    },
    EntityDef {
        name: "technician",
        label: "technician",
        plural: "technicians",
        table: "technician",
        primary_key: "technicianid",
        display: Some("licensenumber"),
        columns: &[
            ColumnDef::integer("technicianid", "Technician ID"),
            ColumnDef::text("licensenumber", "License number", 50),
            ColumnDef::date("licenseexpiry", "License expiry"),
            ColumnDef::integer("crewid", "Crew member"),
        ],
        foreign_keys: &[ForeignKeyDef::new("crewid", "crew_member", "crew member")],
        unique: &[],
        related: &[RelatedDef::new(
            "maintenance_record",
            "technicianid",
            "maintenance records",
        )],
    },
    EntityDef {
        name: "maintenance_record",
        label: "maintenance record",
        plural: "maintenance records",
        table: "maintenance_record",
        primary_key: "maintenanceid",
        display: None,
        columns: &[
            ColumnDef::integer("maintenanceid", "Maintenance ID"),
            ColumnDef::date("maintenancedate", "Maintenance date"),
            ColumnDef::long_text("description", "Description"),
            ColumnDef::decimal("cost", "Cost"),
            ColumnDef::date("nextduedate", "Next due date"),
            ColumnDef::integer("technicianid", "Technician"),
            ColumnDef::integer("aircraftid", "Aircraft"),
            ColumnDef::integer("maintenancetypeid", "Maintenance type"),
        ],
        foreign_keys: &[
            ForeignKeyDef::new("technicianid", "technician", "technician"),
            ForeignKeyDef::new("aircraftid", "aircraft", "aircraft"),
            ForeignKeyDef::new("maintenancetypeid", "maintenance_type", "maintenance type"),
        ],
        unique: &[],
        related: &[],
    },
];
