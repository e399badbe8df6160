use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestDinnerRequest {
    #[schema(example = "brie, honey")]
    #[validate(length(
        min = 1,
        max = 2000,
        message = "ingredients must be between 1 and 2000 characters"
    ))]
    pub ingredients: String,
}
