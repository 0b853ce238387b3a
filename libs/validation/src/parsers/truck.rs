//! Truck dimension parsing

use argos_config::limits::{
    delimiters, CM_PER_METER, MAX_TRUCK_HEIGHT_M, MAX_TRUCK_LENGTH_M, MAX_TRUCK_WIDTH_M,
    TRUCK_SIZE_COMPONENTS,
};
use argos_types::{Field, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Truck outline in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckDimensions {
    pub height_m: f64,
    pub width_m: f64,
    pub length_m: f64,
}

impl TruckDimensions {
    /// Check every dimension against its accepted range
    ///
    /// NaN fails the range test like any other out-of-range value.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.height_m, MAX_TRUCK_HEIGHT_M),
            (self.width_m, MAX_TRUCK_WIDTH_M),
            (self.length_m, MAX_TRUCK_LENGTH_M),
        ];

        for (value, max) in checks {
            if !(0.0..=max).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: Field::TruckSize,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Parse `height,width,length` in centimeters into checked meters
pub fn parse_truck_size(value: &str) -> Result<TruckDimensions> {
    let fields: Vec<&str> = value.split(delimiters::COMPONENT).collect();
    if fields.len() != TRUCK_SIZE_COMPONENTS {
        return Err(ValidationError::WrongArity {
            field: Field::TruckSize,
            expected: TRUCK_SIZE_COMPONENTS,
            found: fields.len(),
        });
    }

    let mut meters = [0.0_f64; TRUCK_SIZE_COMPONENTS];
    for (slot, raw) in meters.iter_mut().zip(&fields) {
        let token = raw.trim();
        let centimeters: f64 = token.parse().map_err(|_| ValidationError::InvalidNumber {
            field: Field::TruckSize,
            token: token.to_string(),
        })?;
        *slot = centimeters / CM_PER_METER;
    }

    let [height_m, width_m, length_m] = meters;
    let dimensions = TruckDimensions {
        height_m,
        width_m,
        length_m,
    };
    dimensions.validate()?;
    Ok(dimensions)
}
