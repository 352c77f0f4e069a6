use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every placeable fixture or device a room can hold.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "door")]
    Door,
    #[serde(rename = "window")]
    Window,
    #[serde(rename = "heater")]
    Heater,
    #[serde(rename = "lamp")]
    Lamp,
    #[serde(rename = "plug")]
    Plug,
    #[serde(rename = "siren")]
    Siren,
    #[serde(rename = "sensor_6in1")]
    Sensor6In1,
    #[serde(rename = "sensor_9in1")]
    Sensor9In1,
    #[serde(rename = "sensor_co2")]
    SensorCo2,
    #[serde(rename = "data_table")]
    DataTable,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 10] = [
        ObjectKind::Door,
        ObjectKind::Window,
        ObjectKind::Heater,
        ObjectKind::Lamp,
        ObjectKind::Plug,
        ObjectKind::Siren,
        ObjectKind::Sensor6In1,
        ObjectKind::Sensor9In1,
        ObjectKind::SensorCo2,
        ObjectKind::DataTable,
    ];

    /// Wire and log name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Door => "door",
            ObjectKind::Window => "window",
            ObjectKind::Heater => "heater",
            ObjectKind::Lamp => "lamp",
            ObjectKind::Plug => "plug",
            ObjectKind::Siren => "siren",
            ObjectKind::Sensor6In1 => "sensor_6in1",
            ObjectKind::Sensor9In1 => "sensor_9in1",
            ObjectKind::SensorCo2 => "sensor_co2",
            ObjectKind::DataTable => "data_table",
        }
    }

    /// SQL table holding objects of this kind.
    pub fn table(&self) -> &'static str {
        match self {
            ObjectKind::Door => "doors",
            ObjectKind::Window => "windows",
            ObjectKind::Heater => "heaters",
            ObjectKind::Lamp => "lamps",
            ObjectKind::Plug => "plugs",
            ObjectKind::Siren => "sirens",
            ObjectKind::Sensor6In1 => "sensors_6in1",
            ObjectKind::Sensor9In1 => "sensors_9in1",
            ObjectKind::SensorCo2 => "sensors_co2",
            ObjectKind::DataTable => "data_tables",
        }
    }

    /// Path segment under `/api`.
    pub fn route(&self) -> &'static str {
        match self {
            ObjectKind::Door => "doors",
            ObjectKind::Window => "windows",
            ObjectKind::Heater => "heaters",
            ObjectKind::Lamp => "lamps",
            ObjectKind::Plug => "plugs",
            ObjectKind::Siren => "sirens",
            ObjectKind::Sensor6In1 => "sensors-6in1",
            ObjectKind::Sensor9In1 => "sensors-9in1",
            ObjectKind::SensorCo2 => "sensors-co2",
            ObjectKind::DataTable => "data-tables",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Door => "Doors",
            ObjectKind::Window => "Windows",
            ObjectKind::Heater => "Heaters",
            ObjectKind::Lamp => "Lamps",
            ObjectKind::Plug => "Plugs",
            ObjectKind::Siren => "Sirens",
            ObjectKind::Sensor6In1 => "6-in-1 Sensors",
            ObjectKind::Sensor9In1 => "9-in-1 Sensors",
            ObjectKind::SensorCo2 => "CO2 Sensors",
            ObjectKind::DataTable => "Data Tables",
        }
    }

    /// Whether objects of this kind carry a size block next to their position.
    pub fn has_size(&self) -> bool {
        matches!(
            self,
            ObjectKind::Door | ObjectKind::Window | ObjectKind::Heater | ObjectKind::DataTable
        )
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.route() == s)
            .ok_or_else(|| format!("unknown object kind: {s}"))
    }
}
