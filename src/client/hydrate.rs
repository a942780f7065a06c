//! Resolving a flight's related records

use super::DroneLogBook;
use crate::error::{Error, Relation, Result};
use crate::models::Flight;
use tracing::debug;

impl DroneLogBook {
    /// Fetch the drone, place, project and equipment a flight refers to
    ///
    /// Relations are resolved in that order. The first failure is
    /// returned as `Error::Hydration` naming the relation, and the flight
    /// is left untouched. Absent references leave their field `None`.
    pub async fn hydrate(&self, flight: &mut Flight) -> Result<()> {
        debug!("Hydrating flight {}", flight.guid);

        let drone = self
            .get_drone(flight.drone_guid.as_deref())
            .await
            .map_err(|e| Error::hydration(Relation::Drone, e))?;

        let place = self
            .get_place(flight.place_guid.as_deref())
            .await
            .map_err(|e| Error::hydration(Relation::Place, e))?;

        let project = self
            .get_project(flight.project_guid.as_deref())
            .await
            .map_err(|e| Error::hydration(Relation::Project, e))?;

        let mut equipment = Vec::with_capacity(flight.equipment_guids.len());
        for guid in &flight.equipment_guids {
            let item = self.get_equipment(Some(guid.as_str())).await.map_err(|e| {
                Error::hydration(Relation::Equipment { guid: guid.clone() }, e)
            })?;
            equipment.extend(item);
        }

        flight.drone = drone;
        flight.place = place;
        flight.project = project;
        flight.equipment = equipment;
        Ok(())
    }
}
