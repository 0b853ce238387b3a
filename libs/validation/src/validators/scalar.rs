//! Validators for single-valued fields: mode, hazmat and truck profile

use argos_config::limits::{KG_PER_TON, MAX_TRUCK_WEIGHT_TONS, MIN_AXLE_LOAD};
use argos_types::{Field, Result, TravelMode, ValidationError};

use super::require_flexible;
use crate::parsers::{parse_hazmat_types, parse_truck_size};

/// `mode` must be `car` or `truck`, matched exactly
pub fn validate_mode(mode: Option<&str>) -> Result<()> {
    match mode {
        None | Some("") => Ok(()),
        Some(token) => TravelMode::from_token(token)
            .map(|_| ())
            .ok_or_else(|| ValidationError::Unsupported {
                field: Field::Mode,
                token: token.to_string(),
            }),
    }
}

/// `hazmat_type` is flex-only; every `|` token must be a known class
pub fn validate_hazmat_type(hazmat_type: Option<&str>, flexible: bool) -> Result<()> {
    let value = match hazmat_type {
        None | Some("") => return Ok(()),
        Some(value) => value,
    };
    require_flexible(Field::HazmatType, flexible)?;
    parse_hazmat_types(value).map(|_| ())
}

/// `truck_weight` is flex-only, given in kilograms, at most 100 tons
pub fn validate_truck_weight(truck_weight: Option<u64>, flexible: bool) -> Result<()> {
    let Some(kilograms) = truck_weight else {
        return Ok(());
    };
    require_flexible(Field::TruckWeight, flexible)?;

    let tons = kilograms as f64 / KG_PER_TON;
    if tons > MAX_TRUCK_WEIGHT_TONS {
        return Err(ValidationError::OutOfRange {
            field: Field::TruckWeight,
            value: tons,
        });
    }
    Ok(())
}

/// `truck_size` is flex-only: `height,width,length` in centimeters
pub fn validate_truck_size(truck_size: Option<&str>, flexible: bool) -> Result<()> {
    let value = match truck_size {
        None | Some("") => return Ok(()),
        Some(value) => value,
    };
    require_flexible(Field::TruckSize, flexible)?;
    parse_truck_size(value).map(|_| ())
}

/// `truck_axle_load` is flex-only and must not be negative
pub fn validate_truck_axle_load(truck_axle_load: Option<f64>, flexible: bool) -> Result<()> {
    let Some(load) = truck_axle_load else {
        return Ok(());
    };
    require_flexible(Field::TruckAxleLoad, flexible)?;

    // Written as a negated >= so NaN is rejected too
    if !(load >= MIN_AXLE_LOAD) {
        return Err(ValidationError::OutOfRange {
            field: Field::TruckAxleLoad,
            value: load,
        });
    }
    Ok(())
}
