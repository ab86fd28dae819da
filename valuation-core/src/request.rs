//! Wire types and submit-time normalization.
//!
//! The upstream prediction API takes one flat JSON object whose keys are
//! the model's feature names. Numeric-tagged fields travel as JSON numbers;
//! everything else stays text, including `AssetLevelId`, which is an
//! enumerated letter, not a number.

use serde::{Deserialize, Serialize};

use crate::fields::FieldId;
use crate::form::PropertyForm;
use crate::validate::{self, ValidationError};

/// The JSON body POSTed to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    #[serde(rename = "Area")]
    pub area: f64,
    #[serde(rename = "AssetLevelId")]
    pub asset_level: String,
    #[serde(rename = "East_order")]
    pub east_border: String,
    #[serde(rename = "EvaluationAssetTypeName")]
    pub asset_type: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "LengthFromEast")]
    pub length_from_east: f64,
    #[serde(rename = "LengthFromNorth")]
    pub length_from_north: f64,
    #[serde(rename = "LengthFromSouth")]
    pub length_from_south: f64,
    #[serde(rename = "LengthFromWest")]
    pub length_from_west: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "NorthBorder")]
    pub north_border: String,
    #[serde(rename = "PropAssetCityName")]
    pub city: String,
    #[serde(rename = "PropAssetNeighborhoodName")]
    pub neighborhood: String,
    #[serde(rename = "PropAssetRegionName")]
    pub region: String,
    #[serde(rename = "SouthBorder")]
    pub south_border: String,
    #[serde(rename = "StreetWidth")]
    pub street_width: f64,
    #[serde(rename = "WestBorder")]
    pub west_border: String,
}

/// A successful prediction from the valuation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub prediction: f64,
}

impl PropertyForm {
    /// Validates the record and normalizes it into the wire payload.
    pub fn to_request(&self) -> Result<ValuationRequest, ValidationError> {
        validate::validate(self)?;

        Ok(ValuationRequest {
            area: self.number(FieldId::Area)?,
            asset_level: self.asset_level.clone(),
            east_border: self.east_border.clone(),
            asset_type: self.asset_type.clone(),
            latitude: self.number(FieldId::Latitude)?,
            length_from_east: self.number(FieldId::LengthFromEast)?,
            length_from_north: self.number(FieldId::LengthFromNorth)?,
            length_from_south: self.number(FieldId::LengthFromSouth)?,
            length_from_west: self.number(FieldId::LengthFromWest)?,
            longitude: self.number(FieldId::Longitude)?,
            north_border: self.north_border.clone(),
            city: self.city.clone(),
            neighborhood: self.neighborhood.clone(),
            region: self.region.clone(),
            south_border: self.south_border.clone(),
            street_width: self.number(FieldId::StreetWidth)?,
            west_border: self.west_border.clone(),
        })
    }

    fn number(&self, field: FieldId) -> Result<f64, ValidationError> {
        validate::parse_number(self.get(field)).ok_or(ValidationError::Invalid(field))
    }
}
