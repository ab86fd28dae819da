//! Field descriptors for the valuation form.
//!
//! Every attribute the form collects is identified by a [`FieldId`]. The
//! descriptor carries everything the rest of the system needs to know about
//! a field: its wire name, its localized label, and how it is entered and
//! checked ([`FieldKind`]). Nothing downstream matches on field-name
//! strings.

/// Identifies one of the 17 attributes collected for a valuation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Area,
    AssetLevel,
    EastBorder,
    AssetType,
    Latitude,
    LengthFromEast,
    LengthFromNorth,
    LengthFromSouth,
    LengthFromWest,
    Longitude,
    NorthBorder,
    City,
    Neighborhood,
    Region,
    SouthBorder,
    StreetWidth,
    WestBorder,
}

/// How a field is entered and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; only the required-field check applies.
    Text,
    /// Numeric text; parsed and range-checked before submission.
    Number,
    /// One value out of a fixed option set.
    Select(Options),
}

/// Where a select field's option set comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Options {
    Regions,
    /// Cities of the currently selected region; empty until one is chosen.
    CitiesOfRegion,
    AssetTypes,
    AssetLevels,
}

impl FieldId {
    /// Every field, in the order the required-field check runs.
    pub const REQUIRED: [FieldId; 17] = [
        FieldId::Area,
        FieldId::AssetLevel,
        FieldId::EastBorder,
        FieldId::AssetType,
        FieldId::Latitude,
        FieldId::LengthFromEast,
        FieldId::LengthFromNorth,
        FieldId::LengthFromSouth,
        FieldId::LengthFromWest,
        FieldId::Longitude,
        FieldId::NorthBorder,
        FieldId::City,
        FieldId::Neighborhood,
        FieldId::Region,
        FieldId::SouthBorder,
        FieldId::StreetWidth,
        FieldId::WestBorder,
    ];

    /// Numeric fields, in the order the numeric check runs. The order is
    /// fixed and independent of [`Self::REQUIRED`].
    pub const NUMERIC: [FieldId; 8] = [
        FieldId::Area,
        FieldId::LengthFromNorth,
        FieldId::LengthFromSouth,
        FieldId::LengthFromEast,
        FieldId::LengthFromWest,
        FieldId::StreetWidth,
        FieldId::Latitude,
        FieldId::Longitude,
    ];

    /// The exact JSON object key used on the wire. These are the upstream
    /// model's feature names and must not be renamed.
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldId::Area => "Area",
            FieldId::AssetLevel => "AssetLevelId",
            FieldId::EastBorder => "East_order",
            FieldId::AssetType => "EvaluationAssetTypeName",
            FieldId::Latitude => "Latitude",
            FieldId::LengthFromEast => "LengthFromEast",
            FieldId::LengthFromNorth => "LengthFromNorth",
            FieldId::LengthFromSouth => "LengthFromSouth",
            FieldId::LengthFromWest => "LengthFromWest",
            FieldId::Longitude => "Longitude",
            FieldId::NorthBorder => "NorthBorder",
            FieldId::City => "PropAssetCityName",
            FieldId::Neighborhood => "PropAssetNeighborhoodName",
            FieldId::Region => "PropAssetRegionName",
            FieldId::SouthBorder => "SouthBorder",
            FieldId::StreetWidth => "StreetWidth",
            FieldId::WestBorder => "WestBorder",
        }
    }

    /// Localized label, used on screen and in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Area => "المساحة (متر مربع)",
            FieldId::AssetLevel => "مستوى العقار",
            FieldId::EastBorder => "الحد الشرقي",
            FieldId::AssetType => "نوع العقار",
            FieldId::Latitude => "خط العرض",
            FieldId::LengthFromEast => "الطول من الشرق (متر)",
            FieldId::LengthFromNorth => "الطول من الشمال (متر)",
            FieldId::LengthFromSouth => "الطول من الجنوب (متر)",
            FieldId::LengthFromWest => "الطول من الغرب (متر)",
            FieldId::Longitude => "خط الطول",
            FieldId::NorthBorder => "الحد الشمالي",
            FieldId::City => "المدينة",
            FieldId::Neighborhood => "الحي",
            FieldId::Region => "المنطقة",
            FieldId::SouthBorder => "الحد الجنوبي",
            FieldId::StreetWidth => "عرض الشارع (متر)",
            FieldId::WestBorder => "الحد الغربي",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Region => FieldKind::Select(Options::Regions),
            FieldId::City => FieldKind::Select(Options::CitiesOfRegion),
            FieldId::AssetType => FieldKind::Select(Options::AssetTypes),
            FieldId::AssetLevel => FieldKind::Select(Options::AssetLevels),
            FieldId::Area
            | FieldId::StreetWidth
            | FieldId::Latitude
            | FieldId::Longitude
            | FieldId::LengthFromEast
            | FieldId::LengthFromNorth
            | FieldId::LengthFromSouth
            | FieldId::LengthFromWest => FieldKind::Number,
            FieldId::EastBorder
            | FieldId::NorthBorder
            | FieldId::SouthBorder
            | FieldId::WestBorder
            | FieldId::Neighborhood => FieldKind::Text,
        }
    }
}

/// One titled section of the form.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub title: &'static str,
    pub fields: &'static [FieldId],
}

/// Screen layout: the form renders these groups top to bottom.
pub const GROUPS: [FieldGroup; 4] = [
    FieldGroup {
        title: "معلومات الموقع",
        fields: &[
            FieldId::Region,
            FieldId::City,
            FieldId::Neighborhood,
            FieldId::Latitude,
            FieldId::Longitude,
        ],
    },
    FieldGroup {
        title: "معلومات العقار",
        fields: &[
            FieldId::Area,
            FieldId::AssetLevel,
            FieldId::AssetType,
            FieldId::StreetWidth,
        ],
    },
    FieldGroup {
        title: "قياسات العقار",
        fields: &[
            FieldId::LengthFromNorth,
            FieldId::LengthFromSouth,
            FieldId::LengthFromEast,
            FieldId::LengthFromWest,
        ],
    },
    FieldGroup {
        title: "حدود العقار",
        fields: &[
            FieldId::NorthBorder,
            FieldId::SouthBorder,
            FieldId::EastBorder,
            FieldId::WestBorder,
        ],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn required_covers_all_seventeen_fields() {
        assert_eq!(FieldId::REQUIRED.len(), 17);

        // No duplicates.
        let mut seen = std::collections::HashSet::new();
        for field in FieldId::REQUIRED {
            assert!(seen.insert(field), "{field:?} listed twice");
        }
    }

    #[test]
    fn numeric_order_is_fixed() {
        assert_eq!(
            FieldId::NUMERIC,
            [
                FieldId::Area,
                FieldId::LengthFromNorth,
                FieldId::LengthFromSouth,
                FieldId::LengthFromEast,
                FieldId::LengthFromWest,
                FieldId::StreetWidth,
                FieldId::Latitude,
                FieldId::Longitude,
            ]
        );
    }

    #[test]
    fn numeric_fields_are_number_kind() {
        for field in FieldId::NUMERIC {
            assert_eq!(field.kind(), FieldKind::Number, "{field:?}");
        }
    }

    #[test]
    fn groups_cover_every_field_exactly_once() {
        let mut seen = std::collections::HashSet::new();
        for group in GROUPS {
            for &field in group.fields {
                assert!(seen.insert(field), "{field:?} appears in two groups");
            }
        }
        assert_eq!(seen.len(), FieldId::REQUIRED.len());
    }

    #[test]
    fn wire_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for field in FieldId::REQUIRED {
            assert!(seen.insert(field.wire_name()));
        }
    }
}
