//! Client construction, entity fetchers and paginated listings

use crate::config::{ClientConfig, Credentials};
use crate::elevation::ElevationClient;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::models::{Drone, Equipment, Flight, Place, Project};
use crate::pagination::{data_records, NextPage, PageNumberPaginator, PaginationState};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

/// Entity collections exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Drone,
    Equipment,
    Flight,
    Place,
    Project,
}

impl Entity {
    /// Path segment of the entity's endpoints
    pub fn path(self) -> &'static str {
        match self {
            Entity::Drone => "drone",
            Entity::Equipment => "equipment",
            Entity::Flight => "flight",
            Entity::Place => "place",
            Entity::Project => "project",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Trimmed identifier, or `None` when absent or blank
pub(crate) fn present(guid: Option<&str>) -> Option<&str> {
    guid.map(str::trim).filter(|g| !g.is_empty())
}

/// Client for the DroneLogBook REST API
pub struct DroneLogBook {
    http: HttpClient,
    credentials: Credentials,
    config: ClientConfig,
}

impl DroneLogBook {
    /// Create a client from explicit credentials and default endpoints
    pub fn new(api_key: impl Into<String>, dlb_url: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key, dlb_url), ClientConfig::default())
    }

    /// Create a client from the `~/.cass-keys` credential file
    pub fn from_default_credentials() -> Result<Self> {
        Self::with_config(Credentials::from_default_file()?, ClientConfig::default())
    }

    /// Create a client from credentials and a custom configuration
    ///
    /// No request is made here; bad configuration fails immediately.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        if credentials.api_key.trim().is_empty() {
            return Err(Error::missing_field("api_key"));
        }
        if credentials.dlb_url.trim().is_empty() {
            return Err(Error::missing_field("dlb_url"));
        }
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(config.api_url.clone())
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .header("accept", "application/json")
            .header("ApiKey", credentials.api_key.clone())
            .header("DlbUrl", credentials.dlb_url.clone())
            .build();

        Ok(Self {
            http: HttpClient::with_config(http_config)?,
            credentials,
            config,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Customer DLB URL this client authenticates against
    pub fn dlb_url(&self) -> &str {
        &self.credentials.dlb_url
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Elevation client sharing this client's timeout and user agent
    pub fn elevation_client(&self) -> Result<ElevationClient> {
        ElevationClient::from_config(&self.config)
    }

    // ========================================================================
    // Single-entity fetchers
    // ========================================================================

    /// Fetch `data[0]` of `GET /{entity}/{guid}`
    async fn fetch_record(&self, entity: Entity, guid: &str) -> Result<Value> {
        let endpoint = format!("/{}/{}", entity.path(), guid);
        debug!("Fetching {} {}", entity, guid);

        let body: Value = self.http.get_json(&endpoint).await?;
        data_records(&body)?
            .first()
            .cloned()
            .ok_or_else(|| Error::malformed(format!("empty 'data' array from {endpoint}")))
    }

    /// Fetch one drone
    pub async fn get_drone(&self, guid: Option<&str>) -> Result<Option<Drone>> {
        let Some(guid) = present(guid) else {
            return Ok(None);
        };
        let record = self.fetch_record(Entity::Drone, guid).await?;
        Drone::from_json(&record).map(Some)
    }

    /// Fetch one place
    pub async fn get_place(&self, guid: Option<&str>) -> Result<Option<Place>> {
        let Some(guid) = present(guid) else {
            return Ok(None);
        };
        let record = self.fetch_record(Entity::Place, guid).await?;
        Place::from_json(&record).map(Some)
    }

    /// Fetch one piece of equipment
    pub async fn get_equipment(&self, guid: Option<&str>) -> Result<Option<Equipment>> {
        let Some(guid) = present(guid) else {
            return Ok(None);
        };
        let record = self.fetch_record(Entity::Equipment, guid).await?;
        let mut equipment = Equipment::from_json(&record)?;
        if equipment.guid.is_none() {
            equipment.guid = Some(guid.to_string());
        }
        Ok(Some(equipment))
    }

    /// Fetch one project as an opaque record
    pub async fn get_project(&self, guid: Option<&str>) -> Result<Option<Project>> {
        let Some(guid) = present(guid) else {
            return Ok(None);
        };
        let record = self.fetch_record(Entity::Project, guid).await?;
        Project::from_json(guid, &record).map(Some)
    }

    /// Fetch one flight, optionally resolving its related records
    ///
    /// With `hydrate`, a failure while resolving any relation is returned
    /// as `Error::Hydration` and no flight is returned.
    pub async fn get_flight(&self, guid: Option<&str>, hydrate: bool) -> Result<Option<Flight>> {
        let Some(guid) = present(guid) else {
            return Ok(None);
        };
        let record = self.fetch_record(Entity::Flight, guid).await?;
        let mut flight = Flight::from_json(&record)?;

        if hydrate {
            self.hydrate(&mut flight).await?;
        }

        Ok(Some(flight))
    }

    // ========================================================================
    // Paginated listings
    // ========================================================================

    /// Fetch the page in `state`, returning its records
    ///
    /// Returns `None` once the walk is complete.
    async fn fetch_page(
        &self,
        entity: Entity,
        paginator: &PageNumberPaginator,
        state: &mut PaginationState,
    ) -> Result<Option<Vec<Value>>> {
        if state.done {
            return Ok(None);
        }

        let endpoint = format!("/{}", entity.path());
        let mut request = RequestConfig::new();
        for (key, value) in paginator.params(state) {
            request = request.query(key, value);
        }

        debug!("Fetching {} page {}", entity, state.page);
        let body: Value = self.http.get_json_with_config(&endpoint, request).await?;
        let records = data_records(&body)?.to_vec();

        if let NextPage::Continue { page } =
            paginator.process_response(&body, records.len(), state)?
        {
            debug!("{} listing continues with page {}", entity, page);
        }

        Ok(Some(records))
    }

    /// Fetch every record of a collection starting at `start_page`
    async fn list_records<T>(
        &self,
        entity: Entity,
        start_page: u32,
        parse: impl Fn(&Value) -> Result<T>,
    ) -> Result<Vec<T>> {
        let paginator = PageNumberPaginator::new(self.config.max_pages);
        let mut state = paginator.start(start_page);
        let mut items = Vec::new();

        while let Some(records) = self.fetch_page(entity, &paginator, &mut state).await? {
            for record in &records {
                items.push(parse(record)?);
            }
        }

        info!(
            "Listed {} {} records over {} pages",
            state.total_fetched,
            entity,
            state.pages_fetched
        );
        Ok(items)
    }

    /// Fetch all flights from `start_page` onwards, in page order
    ///
    /// Results are not sorted; flights keep the order the server sent.
    pub async fn get_flights(&self, start_page: u32, hydrate: bool) -> Result<Vec<Flight>> {
        let paginator = PageNumberPaginator::new(self.config.max_pages);
        let mut state = paginator.start(start_page);
        let mut flights = Vec::new();

        while let Some(records) = self
            .fetch_page(Entity::Flight, &paginator, &mut state)
            .await?
        {
            for record in &records {
                let mut flight = Flight::from_json(record)?;
                if hydrate {
                    self.hydrate(&mut flight).await?;
                }
                flights.push(flight);
            }
        }

        info!(
            "Listed {} flights over {} pages",
            state.total_fetched,
            state.pages_fetched
        );
        Ok(flights)
    }

    /// Fetch all drones
    pub async fn get_drones(&self) -> Result<Vec<Drone>> {
        self.list_records(Entity::Drone, 1, Drone::from_json).await
    }

    /// Fetch all places
    pub async fn get_places(&self) -> Result<Vec<Place>> {
        self.list_records(Entity::Place, 1, Place::from_json).await
    }

    /// Fetch all equipment
    pub async fn get_all_equipment(&self) -> Result<Vec<Equipment>> {
        self.list_records(Entity::Equipment, 1, Equipment::from_json)
            .await
    }

    /// Fetch all equipment that is a scoop
    pub async fn get_scoops(&self) -> Result<Vec<Equipment>> {
        let mut equipment = self.get_all_equipment().await?;
        equipment.retain(Equipment::is_scoop);
        Ok(equipment)
    }
}

impl fmt::Debug for DroneLogBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroneLogBook")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
