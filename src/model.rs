//! Park resource: a named location with embedded coordinates.

use serde::{Deserialize, Serialize};
use sqlx::{ColumnIndex, Decode, FromRow, Row, Type};
use uuid::Uuid;

/// Table holding one row per park.
pub const PARKS_TABLE: &str = "parks";

/// Latitude/longitude pair. Values are stored as given; no range checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Park {
    /// Absent until the park has been saved once.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub coordinates: Coordinates,
}

impl Park {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Park {
            id: None,
            name: name.into(),
            coordinates,
        }
    }

    /// Overwrite name and coordinates from another park, keeping this park's id.
    pub fn overwrite_from(&mut self, other: Park) {
        self.name = other.name;
        self.coordinates = other.coordinates;
    }
}

/// Rows are flat; coordinates live in `coordinates_latitude` / `coordinates_longitude`.
impl<'r, R> FromRow<'r, R> for Park
where
    R: Row,
    &'r str: ColumnIndex<R>,
    Uuid: Decode<'r, R::Database> + Type<R::Database>,
    String: Decode<'r, R::Database> + Type<R::Database>,
    f64: Decode<'r, R::Database> + Type<R::Database>,
{
    fn from_row(row: &'r R) -> Result<Self, sqlx::Error> {
        Ok(Park {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            coordinates: Coordinates {
                latitude: row.try_get("coordinates_latitude")?,
                longitude: row.try_get("coordinates_longitude")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_payload_without_id() {
        let park: Park = serde_json::from_value(json!({
            "name": "Stromovka",
            "coordinates": { "latitude": 50.105849, "longitude": 14.413999 }
        }))
        .unwrap();
        assert_eq!(park.id, None);
        assert_eq!(park.name, "Stromovka");
        assert_eq!(park.coordinates.latitude, 50.105849);
    }

    #[test]
    fn encodes_missing_id_as_null() {
        let park = Park::new("Letná", Coordinates { latitude: 50.09, longitude: 14.42 });
        let v = serde_json::to_value(&park).unwrap();
        assert_eq!(v["id"], serde_json::Value::Null);
        assert_eq!(v["coordinates"]["longitude"], json!(14.42));
    }

    #[test]
    fn overwrite_keeps_id() {
        let id = Uuid::new_v4();
        let mut park = Park {
            id: Some(id),
            ..Park::new("Old", Coordinates::default())
        };
        park.overwrite_from(Park {
            id: Some(Uuid::new_v4()),
            ..Park::new("New", Coordinates { latitude: 1.0, longitude: 2.0 })
        });
        assert_eq!(park.id, Some(id));
        assert_eq!(park.name, "New");
        assert_eq!(park.coordinates, Coordinates { latitude: 1.0, longitude: 2.0 });
    }
}
