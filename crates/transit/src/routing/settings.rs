//! Routing parameters.

use crate::models::types::{Result, TransitError};

const METERS_PER_KILOMETER: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Fixed boarding wait and bus speed used to weight the routing graph
///
/// Build one with [`RoutingSettings::new`], or deserialize and then call
/// [`RoutingSettings::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding
    pub bus_wait_time: u32,
    /// Bus speed in km/h
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Result<Self> {
        let settings = Self {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bus_wait_time == 0 {
            return Err(TransitError::InvalidConfiguration(
                "bus_wait_time must be positive".into(),
            ));
        }

        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(TransitError::InvalidConfiguration(format!(
                "bus_velocity must be a positive number, got {}",
                self.bus_velocity
            )));
        }

        Ok(())
    }

    /// Wait time as an edge weight, in minutes
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride `meters` at the configured speed
    pub fn ride_minutes(&self, meters: u64) -> f64 {
        meters as f64 / (self.bus_velocity * METERS_PER_KILOMETER / MINUTES_PER_HOUR)
    }
}
