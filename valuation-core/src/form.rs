//! The editable form record.
//!
//! Every value is kept as the text the user typed, regardless of semantic
//! type; conversion to numbers happens once, at submit time (see
//! [`crate::request`]). The record lives for the whole app session and is
//! mutated field by field as the user edits.

use tracing::debug;

use crate::fields::FieldId;

/// The complete set of user-entered property attributes for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyForm {
    pub area: String,
    pub asset_level: String,
    pub east_border: String,
    pub asset_type: String,
    pub latitude: String,
    pub length_from_east: String,
    pub length_from_north: String,
    pub length_from_south: String,
    pub length_from_west: String,
    pub longitude: String,
    pub north_border: String,
    pub city: String,
    pub neighborhood: String,
    pub region: String,
    pub south_border: String,
    pub street_width: String,
    pub west_border: String,
}

impl PropertyForm {
    /// A fresh record with the stock example values the form starts from.
    ///
    /// Each call returns an independent instance; there is no shared
    /// default record.
    pub fn new() -> Self {
        Self {
            area: "1050".to_string(),
            asset_level: "C".to_string(),
            east_border: "قطعة رقم 615".to_string(),
            asset_type: "Housing Land".to_string(),
            latitude: "24.32".to_string(),
            length_from_east: "30.14".to_string(),
            length_from_north: "38.45".to_string(),
            length_from_south: "28.46".to_string(),
            length_from_west: "30.13".to_string(),
            longitude: "39.25".to_string(),
            north_border: "قطعة رقم بدون".to_string(),
            city: "Madinah".to_string(),
            neighborhood: "العزيزية".to_string(),
            region: "Madinah".to_string(),
            south_border: "قطعة رقم 162وشارع عرض 12 م".to_string(),
            street_width: "12".to_string(),
            west_border: "قطعة رقم 163".to_string(),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Area => &self.area,
            FieldId::AssetLevel => &self.asset_level,
            FieldId::EastBorder => &self.east_border,
            FieldId::AssetType => &self.asset_type,
            FieldId::Latitude => &self.latitude,
            FieldId::LengthFromEast => &self.length_from_east,
            FieldId::LengthFromNorth => &self.length_from_north,
            FieldId::LengthFromSouth => &self.length_from_south,
            FieldId::LengthFromWest => &self.length_from_west,
            FieldId::Longitude => &self.longitude,
            FieldId::NorthBorder => &self.north_border,
            FieldId::City => &self.city,
            FieldId::Neighborhood => &self.neighborhood,
            FieldId::Region => &self.region,
            FieldId::SouthBorder => &self.south_border,
            FieldId::StreetWidth => &self.street_width,
            FieldId::WestBorder => &self.west_border,
        }
    }

    /// Sets a field value, maintaining the cascade invariant: changing the
    /// region invalidates the chosen city, so the city is cleared.
    ///
    /// Select fields must be mutated through here; text inputs may bind
    /// [`Self::field_mut`] directly.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        if field == FieldId::Region && self.region != value && !self.city.is_empty() {
            debug!(from = %self.region, to = %value, "region changed, clearing city");
            self.city.clear();
        }
        *self.field_mut(field) = value;
    }

    /// Direct mutable access for text-input bindings. Does not run the
    /// region→city cascade; select fields go through [`Self::set`].
    pub fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Area => &mut self.area,
            FieldId::AssetLevel => &mut self.asset_level,
            FieldId::EastBorder => &mut self.east_border,
            FieldId::AssetType => &mut self.asset_type,
            FieldId::Latitude => &mut self.latitude,
            FieldId::LengthFromEast => &mut self.length_from_east,
            FieldId::LengthFromNorth => &mut self.length_from_north,
            FieldId::LengthFromSouth => &mut self.length_from_south,
            FieldId::LengthFromWest => &mut self.length_from_west,
            FieldId::Longitude => &mut self.longitude,
            FieldId::NorthBorder => &mut self.north_border,
            FieldId::City => &mut self.city,
            FieldId::Neighborhood => &mut self.neighborhood,
            FieldId::Region => &mut self.region,
            FieldId::SouthBorder => &mut self.south_border,
            FieldId::StreetWidth => &mut self.street_width,
            FieldId::WestBorder => &mut self.west_border,
        }
    }
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self::new()
    }
}
