use crate::utils::error::{PlannerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_length<T>(field_name: &str, values: &[T], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: values.len().to_string(),
            reason: format!("Exactly {} values are required", expected),
        });
    }
    Ok(())
}

/// Age breaks must be positive and strictly increasing.
pub fn validate_strictly_increasing(field_name: &str, values: &[u32]) -> Result<()> {
    let mut previous = 0;
    for &value in values {
        if value <= previous {
            return Err(PlannerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("{:?}", values),
                reason: format!("Break {} is not greater than {}", value, previous),
            });
        }
        previous = value;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.people", "people.csv").is_ok());
        assert!(validate_path("input.people", "").is_err());
        assert!(validate_path("input.people", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("hubs.doctors", 5, 1).is_ok());
        assert!(validate_positive_number("hubs.doctors", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("schedule.hours", 12, 0, 12).is_ok());
        assert!(validate_range("schedule.hours", 13, 0, 12).is_err());
    }

    #[test]
    fn test_validate_strictly_increasing() {
        assert!(validate_strictly_increasing("intervals.breaks", &[]).is_ok());
        assert!(validate_strictly_increasing("intervals.breaks", &[40, 60]).is_ok());
        assert!(validate_strictly_increasing("intervals.breaks", &[40, 40]).is_err());
        assert!(validate_strictly_increasing("intervals.breaks", &[60, 40]).is_err());
        assert!(validate_strictly_increasing("intervals.breaks", &[0, 40]).is_err());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("schedule.hours", &[0; 7], 7).is_ok());
        assert!(validate_length("schedule.hours", &[0; 6], 7).is_err());
    }
}
