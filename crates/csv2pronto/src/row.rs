//! Typed access to one CSV record.
//!
//! All CSV values are strings. Empty values are dropped when the [`Row`] is
//! built, so an empty cell and a missing column read the same way.

use std::collections::HashMap;
use std::fmt;

/// Columns the converter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Site,
    ListingId,
    Url,
    Title,
    Description,
    Transaction,
    AdvertiserId,
    AdvertiserName,
    DateExtracted,
    DatePublished,
    Price,
    Currency,
    MaintenanceFee,
    MaintenanceFeeCurrency,
    Address,
    Latitude,
    Longitude,
    YearBuilt,
    IsNewProperty,
    IsFinished,
    IsStudioApartment,
    Luminosity,
    Orientation,
    Disposition,
    PropertyType,
    Features,
    RoomAmnt,
    BathAmnt,
    GarageAmnt,
    BedAmnt,
    ToiletteAmnt,
    Province,
    District,
    Neighborhood,
}

impl Field {
    /// Column name in the CSV header.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Site => "site",
            Field::ListingId => "listing_id",
            Field::Url => "url",
            Field::Title => "title",
            Field::Description => "description",
            Field::Transaction => "transaction",
            Field::AdvertiserId => "advertiser_id",
            Field::AdvertiserName => "advertiser_name",
            Field::DateExtracted => "date_extracted",
            Field::DatePublished => "date_published",
            Field::Price => "price",
            Field::Currency => "currency",
            Field::MaintenanceFee => "maintenance_fee",
            Field::MaintenanceFeeCurrency => "maintenance_fee_currency",
            Field::Address => "address",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::YearBuilt => "year_built",
            Field::IsNewProperty => "is_new_property",
            Field::IsFinished => "is_finished",
            Field::IsStudioApartment => "is_studio_apartment",
            Field::Luminosity => "luminosity",
            Field::Orientation => "orientation",
            Field::Disposition => "disposition",
            Field::PropertyType => "property_type",
            Field::Features => "features",
            Field::RoomAmnt => "room_amnt",
            Field::BathAmnt => "bath_amnt",
            Field::GarageAmnt => "garage_amnt",
            Field::BedAmnt => "bed_amnt",
            Field::ToiletteAmnt => "toilette_amnt",
            Field::Province => "province",
            Field::District => "district",
            Field::Neighborhood => "neighborhood",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required column was absent (or empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub Field);

/// One input record with empty values removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    pub fn new(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.column(field.as_str())
    }

    /// Look up a required field, reporting which one is missing.
    pub fn require(&self, field: Field) -> Result<&str, MissingField> {
        self.get(field).ok_or(MissingField(field))
    }

    /// Look up a column by raw name, for columns built from a pattern
    /// such as `reconstructed_total_surface_unit`.
    pub fn column(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(field.as_str());
        } else {
            self.values.insert(field.as_str().to_string(), value);
        }
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.values.remove(field.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { values }
    }
}

impl From<HashMap<String, String>> for Row {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_read_as_missing() {
        let row: Row = [("site", "zonaprop"), ("title", "")].into_iter().collect();
        assert_eq!(row.get(Field::Site), Some("zonaprop"));
        assert_eq!(row.get(Field::Title), None);
        assert_eq!(row.require(Field::Title), Err(MissingField(Field::Title)));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn set_empty_removes() {
        let mut row: Row = [("url", "http://x")].into_iter().collect();
        row.set(Field::Url, "");
        assert!(row.is_empty());
    }
}
