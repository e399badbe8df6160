use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PlateRequest {
    /// Ingredients separated by commas or new lines.
    #[schema(example = "brie, crackers, grapes, honey")]
    #[validate(length(
        min = 1,
        max = 2000,
        message = "ingredients must be between 1 and 2000 characters"
    ))]
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct IllustratePlateRequest {
    #[schema(example = "hummus, pita, olives")]
    #[validate(length(
        min = 1,
        max = 2000,
        message = "ingredients must be between 1 and 2000 characters"
    ))]
    pub ingredients: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_request_length_bounds() {
        let empty = PlateRequest {
            ingredients: String::new(),
        };
        let huge = PlateRequest {
            ingredients: "a".repeat(2001),
        };
        let ok = PlateRequest {
            ingredients: "brie".to_string(),
        };

        assert!(empty.validate().is_err());
        assert!(huge.validate().is_err());
        assert!(ok.validate().is_ok());
    }
}
