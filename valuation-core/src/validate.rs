//! Submission-gate validation.
//!
//! Two passes over the record, never interleaved: first every field is
//! checked for presence (fixed [`FieldId::REQUIRED`] order), then the
//! numeric fields are parsed and range-checked (fixed [`FieldId::NUMERIC`]
//! order). The first failing field aborts with a single localized message;
//! errors are not aggregated.

use thiserror::Error;

use crate::fields::FieldId;
use crate::form::PropertyForm;

/// Why a record may not be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("يرجى ملء حقل {}", .0.label())]
    Missing(FieldId),
    /// A numeric field holds text that fails to parse or is out of range.
    #[error("قيمة غير صالحة في حقل {}", .0.label())]
    Invalid(FieldId),
}

impl ValidationError {
    pub fn field(&self) -> FieldId {
        match self {
            Self::Missing(field) | Self::Invalid(field) => *field,
        }
    }
}

/// Decides whether the record may be submitted.
pub fn validate(form: &PropertyForm) -> Result<(), ValidationError> {
    for field in FieldId::REQUIRED {
        if form.get(field).is_empty() {
            return Err(ValidationError::Missing(field));
        }
    }

    for field in FieldId::NUMERIC {
        let in_range = parse_number(form.get(field)).is_some_and(|n| range_ok(field, n));
        if !in_range {
            return Err(ValidationError::Invalid(field));
        }
    }

    Ok(())
}

/// Parses user-entered numeric text.
///
/// Surrounding whitespace is tolerated; an empty or whitespace-only value
/// is a parse failure (a whitespace-only field passes the required check
/// and is then reported as invalid, not missing). `NaN` is rejected here
/// so it can never satisfy a range rule.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn range_ok(field: FieldId, n: f64) -> bool {
    match field {
        FieldId::Area | FieldId::StreetWidth => n > 0.0,
        FieldId::LengthFromNorth
        | FieldId::LengthFromSouth
        | FieldId::LengthFromEast
        | FieldId::LengthFromWest => n >= 0.0,
        FieldId::Latitude => (-90.0..=90.0).contains(&n),
        FieldId::Longitude => (-180.0..=180.0).contains(&n),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> PropertyForm {
        PropertyForm::new()
    }

    // =========================================================================
    // required pass
    // =========================================================================

    #[test]
    fn default_record_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn each_required_field_blocks_submission_when_empty() {
        for field in FieldId::REQUIRED {
            let mut form = valid_form();
            form.field_mut(field).clear();

            assert_eq!(
                validate(&form),
                Err(ValidationError::Missing(field)),
                "{field:?} should be reported missing"
            );
        }
    }

    #[test]
    fn missing_message_names_the_field() {
        let mut form = valid_form();
        form.neighborhood.clear();

        let err = validate(&form).unwrap_err();

        assert_eq!(err.to_string(), format!("يرجى ملء حقل {}", FieldId::Neighborhood.label()));
    }

    #[test]
    fn required_pass_runs_before_numeric_pass() {
        // Area is numerically invalid AND a later required field is empty:
        // the missing field wins because the required pass completes first.
        let mut form = valid_form();
        form.area = "abc".to_string();
        form.west_border.clear();

        assert_eq!(validate(&form), Err(ValidationError::Missing(FieldId::WestBorder)));
    }

    // =========================================================================
    // numeric pass
    // =========================================================================

    #[test]
    fn whitespace_only_is_invalid_not_missing() {
        let mut form = valid_form();
        form.latitude = "   ".to_string();

        assert_eq!(validate(&form), Err(ValidationError::Invalid(FieldId::Latitude)));
    }

    #[test]
    fn unparseable_number_is_invalid() {
        let mut form = valid_form();
        form.street_width = "wide".to_string();

        let err = validate(&form).unwrap_err();

        assert_eq!(err, ValidationError::Invalid(FieldId::StreetWidth));
        assert_eq!(
            err.to_string(),
            format!("قيمة غير صالحة في حقل {}", FieldId::StreetWidth.label())
        );
    }

    #[test]
    fn nan_never_satisfies_a_range_rule() {
        let mut form = valid_form();
        form.length_from_north = "NaN".to_string();

        assert_eq!(
            validate(&form),
            Err(ValidationError::Invalid(FieldId::LengthFromNorth))
        );
    }

    #[test]
    fn area_must_be_strictly_positive() {
        let mut form = valid_form();

        form.area = "0".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Invalid(FieldId::Area)));

        form.area = "-5".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Invalid(FieldId::Area)));

        form.area = "0.01".to_string();
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn street_width_must_be_strictly_positive() {
        let mut form = valid_form();

        form.street_width = "0".to_string();
        assert_eq!(
            validate(&form),
            Err(ValidationError::Invalid(FieldId::StreetWidth))
        );

        form.street_width = "0.01".to_string();
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn lengths_accept_zero_but_not_negative() {
        for field in [
            FieldId::LengthFromNorth,
            FieldId::LengthFromSouth,
            FieldId::LengthFromEast,
            FieldId::LengthFromWest,
        ] {
            let mut form = valid_form();

            *form.field_mut(field) = "0".to_string();
            assert_eq!(validate(&form), Ok(()), "{field:?} should accept 0");

            *form.field_mut(field) = "-0.1".to_string();
            assert_eq!(
                validate(&form),
                Err(ValidationError::Invalid(field)),
                "{field:?} should reject negatives"
            );
        }
    }

    #[test]
    fn latitude_bounds_are_inclusive() {
        let mut form = valid_form();

        form.latitude = "-90".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.latitude = "90".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.latitude = "90.0001".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Invalid(FieldId::Latitude)));

        form.latitude = "-90.0001".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Invalid(FieldId::Latitude)));
    }

    #[test]
    fn longitude_bounds_are_inclusive() {
        let mut form = valid_form();

        form.longitude = "-180".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.longitude = "180".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.longitude = "180.5".to_string();
        assert_eq!(
            validate(&form),
            Err(ValidationError::Invalid(FieldId::Longitude))
        );
    }

    #[test]
    fn first_numeric_failure_wins() {
        // Both Area and Longitude are bad; Area comes first in NUMERIC order.
        let mut form = valid_form();
        form.area = "-1".to_string();
        form.longitude = "999".to_string();

        assert_eq!(validate(&form), Err(ValidationError::Invalid(FieldId::Area)));
    }

    #[test]
    fn numbers_tolerate_surrounding_whitespace() {
        let mut form = valid_form();
        form.area = " 1050 ".to_string();

        assert_eq!(validate(&form), Ok(()));
    }
}
