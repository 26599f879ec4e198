//! Request orchestration
//!
//! Binds one inbound operation to one repository call and one
//! [`Presentation`]. Identity arrives with every call in a
//! [`RequestContext`]; nothing is read from global state.
//!
//! Lifecycle per request: received -> validated -> executed ->
//! succeeded | failed(kind).

mod presentation;

use std::collections::BTreeMap;
use std::sync::Arc;

use aerodesk_core::catalog::{self, EntityDef};
use aerodesk_core::{bind_form, parse_id, BindMode, ColumnType, FormData, ValidationError, Value};

use crate::db::{Filter, ListQuery, Pagination, Record, RepoError, Repository, SortDirection, Storage};

pub use presentation::{
    Dashboard, FieldMessage, Failure, Level, Presentation, RelatedRecords, SearchHit,
};
use presentation::capitalize;

/// Where unauthenticated callers are sent
pub const LOGIN_LOCATION: &str = "/login/";

/// Most dependent rows listed on a detail view
const RELATED_LIMIT: u32 = 100;

/// Per-request identity, supplied by the adapter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub authenticated: bool,
    pub user: Option<String>,
}

impl RequestContext {
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            user: Some(user.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// List parameters as they arrive, still text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRequest {
    pub page: Pagination,
    /// Case-insensitive substring over the entity's text columns
    pub q: Option<String>,
    /// `column = value` restrictions
    pub equals: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperationKind {
    List(ListRequest),
    Detail { id: String },
    Create { fields: FormData },
    Update { id: String, fields: FormData },
    Delete { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    /// Entity name, plural or table name
    pub entity: String,
    pub op: OperationKind,
}

impl OperationRequest {
    pub fn new(entity: impl Into<String>, op: OperationKind) -> Self {
        Self {
            entity: entity.into(),
            op,
        }
    }
}

/// Stateless apart from the shared storage handle
#[derive(Clone)]
pub struct Orchestrator {
    storage: Arc<dyn Storage>,
}

impl Orchestrator {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn repo(&self, entity: &'static EntityDef) -> Repository<'_> {
        Repository::new(self.storage.as_ref(), entity)
    }

    pub async fn handle(&self, ctx: &RequestContext, request: OperationRequest) -> Presentation {
        tracing::info!(entity = %request.entity, op = op_name(&request.op), user = ?ctx.user, "received");

        if !ctx.authenticated {
            return login_required();
        }

        let Some(entity) = catalog::entity(&request.entity) else {
            tracing::warn!(entity = %request.entity, "unknown entity");
            return Presentation::error(
                Failure::NotFound,
                format!("Unknown record type '{}'.", request.entity),
                "/".to_owned(),
            );
        };

        match request.op {
            OperationKind::List(list) => self.list(entity, list).await,
            OperationKind::Detail { id } => self.detail(entity, &id).await,
            OperationKind::Create { fields } => self.create(entity, fields).await,
            OperationKind::Update { id, fields } => self.update(entity, &id, fields).await,
            OperationKind::Delete { id } => self.delete(entity, &id).await,
        }
    }

    async fn list(&self, entity: &'static EntityDef, request: ListRequest) -> Presentation {
        let query = match list_query(entity, &request) {
            Ok(query) => query,
            Err(err) => {
                return rejected(entity, &err, list_location(entity));
            }
        };

        match self.repo(entity).list(&query).await {
            Ok(page) => {
                tracing::info!(entity = entity.name, total = page.total, "succeeded");
                Presentation::RenderList {
                    entity: entity.name,
                    label: entity.plural,
                    page,
                }
            }
            Err(err) => failed(entity, &err, "/".to_owned()),
        }
    }

    async fn detail(&self, entity: &'static EntityDef, raw_id: &str) -> Presentation {
        let Ok(id) = parse_id(entity, raw_id) else {
            return not_found(entity);
        };

        let record = match self.repo(entity).read(&id).await {
            Ok(record) => record,
            Err(err) => return failed(entity, &err, list_location(entity)),
        };

        match self.related(entity, &id).await {
            Ok(related) => {
                tracing::info!(entity = entity.name, id = %id, "succeeded");
                Presentation::RenderDetail { record, related }
            }
            Err(err) => failed(entity, &err, list_location(entity)),
        }
    }

    /// Dependent rows for each declared edge back to this entity
    async fn related(
        &self,
        entity: &'static EntityDef,
        id: &Value,
    ) -> Result<Vec<RelatedRecords>, RepoError> {
        let mut related = Vec::with_capacity(entity.related.len());
        for edge in entity.related {
            let dependent = catalog::require(edge.entity)?;
            let column = dependent.require_column(edge.column)?;

            let query = ListQuery::default()
                .filter(Filter::equals(column.name, id.clone()))
                .page(Pagination::new(1, RELATED_LIMIT));
            let page = self.repo(dependent).list(&query).await?;
            related.push(RelatedRecords {
                entity: dependent.name,
                label: edge.label,
                via: column.name,
                records: page.items,
            });
        }
        Ok(related)
    }

    async fn create(&self, entity: &'static EntityDef, form: FormData) -> Presentation {
        let fields = match bind_form(entity, &form, BindMode::Create) {
            Ok(fields) => fields,
            Err(err) => return invalid_form(entity, &err, form),
        };
        tracing::debug!(entity = entity.name, "validated");

        match self.repo(entity).create(&fields).await {
            Ok(id) => {
                tracing::info!(entity = entity.name, id = %id, "succeeded");
                Presentation::success(
                    format!("{} added successfully!", capitalize(entity.label)),
                    list_location(entity),
                )
            }
            Err(err) => failed_form(entity, &err, form),
        }
    }

    async fn update(&self, entity: &'static EntityDef, raw_id: &str, form: FormData) -> Presentation {
        let Ok(id) = parse_id(entity, raw_id) else {
            return not_found(entity);
        };
        let fields = match bind_form(entity, &form, BindMode::Update { id: raw_id }) {
            Ok(fields) => fields,
            Err(err) => return invalid_form(entity, &err, form),
        };
        tracing::debug!(entity = entity.name, id = %id, "validated");

        match self.repo(entity).update(&id, &fields).await {
            Ok(()) => {
                tracing::info!(entity = entity.name, id = %id, "succeeded");
                Presentation::success(
                    format!("{} updated successfully!", capitalize(entity.label)),
                    list_location(entity),
                )
            }
            Err(err @ RepoError::NotFound { .. }) => failed(entity, &err, list_location(entity)),
            Err(err) => failed_form(entity, &err, form),
        }
    }

    async fn delete(&self, entity: &'static EntityDef, raw_id: &str) -> Presentation {
        let Ok(id) = parse_id(entity, raw_id) else {
            return not_found(entity);
        };

        match self.repo(entity).delete(&id).await {
            Ok(()) => {
                tracing::info!(entity = entity.name, id = %id, "succeeded");
                Presentation::success(
                    format!("{} deleted successfully!", capitalize(entity.label)),
                    list_location(entity),
                )
            }
            Err(err) => failed(entity, &err, list_location(entity)),
        }
    }

    /// Quick lookup across flights, airlines, airports and passengers.
    pub async fn search(&self, ctx: &RequestContext, q: &str) -> Presentation {
        tracing::info!(query = q, user = ?ctx.user, "search received");
        if !ctx.authenticated {
            return login_required();
        }

        let query = q.trim().to_owned();
        if query.is_empty() {
            return Presentation::SearchResults {
                query,
                hits: Vec::new(),
            };
        }

        match self.search_hits(&query).await {
            Ok(hits) => {
                tracing::info!(hits = hits.len(), "search succeeded");
                Presentation::SearchResults { query, hits }
            }
            Err(err) => failed(catalog_entity("flight"), &err, "/".to_owned()),
        }
    }

    async fn search_hits(&self, q: &str) -> Result<Vec<SearchHit>, RepoError> {
        let mut hits = Vec::new();

        let flights = self.find("flight", &["flightnumber"], q, 10).await?;
        hits.extend(flights.into_iter().map(|r| SearchHit {
            kind: "flight",
            title: text(&r, "flightnumber"),
            subtitle: flight_route(&r),
            status: r.text("flightstatus").map(str::to_owned),
            location: detail_location(&r),
        }));

        let airlines = self.find("airline", &["airlinename"], q, 5).await?;
        hits.extend(airlines.into_iter().map(|r| SearchHit {
            kind: "airline",
            title: text(&r, "airlinename"),
            subtitle: r.text("airlineicao").map(|icao| format!("ICAO: {}", icao)),
            status: None,
            location: detail_location(&r),
        }));

        let airports = self.find("airport", &["airportname"], q, 5).await?;
        let mut places = BTreeMap::new();
        for r in airports {
            let subtitle = match r.get("cityid") {
                Some(city) if !city.is_null() => self.place(city, &mut places).await?,
                _ => None,
            };
            hits.push(SearchHit {
                kind: "airport",
                title: text(&r, "airportname"),
                subtitle,
                status: None,
                location: detail_location(&r),
            });
        }

        let passengers = self
            .find("passenger", &["firstname", "lastname"], q, 5)
            .await?;
        hits.extend(passengers.into_iter().map(|r| SearchHit {
            kind: "passenger",
            title: format!("{} {}", text(&r, "firstname"), text(&r, "lastname")),
            subtitle: r.text("email").map(|email| format!("Email: {}", email)),
            status: None,
            location: detail_location(&r),
        }));

        Ok(hits)
    }

    /// "City, Country" for a city key, looked up once per search
    async fn place(
        &self,
        city: &Value,
        seen: &mut BTreeMap<String, Option<String>>,
    ) -> Result<Option<String>, RepoError> {
        let key = city.to_string();
        if let Some(place) = seen.get(&key) {
            return Ok(place.clone());
        }

        let place = match self.repo(catalog::require("city")?).read(city).await {
            Ok(r) => match (r.text("cityname"), r.display("countrycode")) {
                (Some(name), Some(country)) => Some(format!("{}, {}", name, country)),
                (Some(name), None) => Some(name.to_owned()),
                _ => None,
            },
            Err(RepoError::NotFound { .. }) => None,
            Err(err) => return Err(err),
        };
        seen.insert(key, place.clone());
        Ok(place)
    }

    async fn find(
        &self,
        name: &str,
        columns: &[&str],
        q: &str,
        limit: u32,
    ) -> Result<Vec<Record>, RepoError> {
        let entity = catalog::require(name)?;
        let query = ListQuery::default()
            .filter(Filter::contains(columns.iter().copied(), q))
            .page(Pagination::new(1, limit));
        Ok(self.repo(entity).list(&query).await?.items)
    }

    /// Headline counts and the most recent flights.
    pub async fn dashboard(&self, ctx: &RequestContext) -> Presentation {
        tracing::info!(user = ?ctx.user, "dashboard received");
        if !ctx.authenticated {
            return login_required();
        }

        match self.dashboard_data().await {
            Ok(dashboard) => Presentation::Dashboard(dashboard),
            Err(err) => failed(catalog_entity("flight"), &err, "/".to_owned()),
        }
    }

    async fn dashboard_data(&self) -> Result<Dashboard, RepoError> {
        let mut counts = BTreeMap::new();
        for name in ["flight", "aircraft", "airport", "country"] {
            let entity = catalog::require(name)?;
            counts.insert(entity.name, self.repo(entity).count().await?);
        }

        let flight = catalog::require("flight")?;
        let recent = ListQuery::default()
            .order_by("scheduleddeparture", SortDirection::Desc)
            .page(Pagination::new(1, 5));
        let recent_flights = self.repo(flight).list(&recent).await?.items;

        Ok(Dashboard {
            counts,
            recent_flights,
        })
    }
}

fn op_name(op: &OperationKind) -> &'static str {
    match op {
        OperationKind::List(_) => "list",
        OperationKind::Detail { .. } => "detail",
        OperationKind::Create { .. } => "create",
        OperationKind::Update { .. } => "update",
        OperationKind::Delete { .. } => "delete",
    }
}

/// Turn list parameters into a typed query; filter values are coerced
/// like form input so a bad value never reaches storage.
fn list_query(entity: &'static EntityDef, request: &ListRequest) -> Result<ListQuery, ValidationError> {
    let mut errors = ValidationError::default();
    let mut query = ListQuery::default().page(request.page);

    if let Some(q) = request.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let columns: Vec<&str> = entity
            .columns
            .iter()
            .filter(|c| c.ty == ColumnType::Text)
            .map(|c| c.name)
            .collect();
        query = query.filter(Filter::contains(columns, q));
    }

    for (name, raw) in &request.equals {
        match entity.column(name) {
            Some(column) => match column.coerce(Some(raw)) {
                Ok(value) => query = query.filter(Filter::equals(column.name, value)),
                Err(e) => errors.push(e),
            },
            None => errors.push(aerodesk_core::FieldError::UnknownField { field: name.clone() }),
        }
    }

    errors.into_result().map(|()| query)
}

fn catalog_entity(name: &str) -> &'static EntityDef {
    // Only called with names declared in the static catalog
    catalog::entity(name).unwrap_or(&catalog::entities()[0])
}

/// "Airline - Departure to Arrival"
fn flight_route(record: &Record) -> Option<String> {
    let airline = record.display("airlineid")?;
    let from = record.display("departureairportcode")?;
    let to = record.display("arrivalairportcode")?;
    Some(format!("{} - {} to {}", airline, from, to))
}

fn text(record: &Record, column: &str) -> String {
    record.text(column).unwrap_or_default().to_owned()
}

pub(crate) fn list_location(entity: &EntityDef) -> String {
    format!("/{}/", entity.name)
}

fn detail_location(record: &Record) -> String {
    let id = catalog::entity(record.entity)
        .and_then(|e| record.get(e.primary_key))
        .map(Value::to_string)
        .unwrap_or_default();
    format!("/{}/{}/", record.entity, id)
}

fn login_required() -> Presentation {
    tracing::warn!("failed: unauthenticated");
    Presentation::error(
        Failure::Unauthenticated,
        "Please log in to continue.".to_owned(),
        LOGIN_LOCATION.to_owned(),
    )
}

fn not_found(entity: &EntityDef) -> Presentation {
    tracing::warn!(entity = entity.name, "failed: not found");
    Presentation::error(
        Failure::NotFound,
        format!("{} not found.", capitalize(entity.label)),
        list_location(entity),
    )
}

fn rejected(entity: &EntityDef, err: &ValidationError, location: String) -> Presentation {
    tracing::warn!(entity = entity.name, fields = ?err.fields(), "failed: validation");
    Presentation::error(Failure::validation(err), err.to_string(), location)
}

fn invalid_form(entity: &'static EntityDef, err: &ValidationError, values: FormData) -> Presentation {
    tracing::warn!(entity = entity.name, fields = ?err.fields(), "failed: validation");
    Presentation::RenderForm {
        entity: entity.name,
        failure: Failure::validation(err),
        message: err.to_string(),
        errors: FieldMessage::all(err),
        values,
    }
}

fn failed(entity: &EntityDef, err: &RepoError, location: String) -> Presentation {
    let (failure, text) = Failure::from_repo(err, entity.label);
    tracing::warn!(entity = entity.name, failure = ?failure, "failed");
    Presentation::error(failure, text, location)
}

fn failed_form(entity: &'static EntityDef, err: &RepoError, values: FormData) -> Presentation {
    let (failure, message) = Failure::from_repo(err, entity.label);
    tracing::warn!(entity = entity.name, failure = ?failure, "failed");
    Presentation::RenderForm {
        entity: entity.name,
        failure,
        message,
        errors: Vec::new(),
        values,
    }
}
