use std::future::Future;

use crate::domain::{
    collaborators::PlateVerdict,
    common::entities::app_errors::CoreError,
    dinner::DinnerMatch,
    plating::{
        entities::{PlateIllustration, PlatingOutcome},
        value_objects::{IllustratePlateInput, JudgePlateInput, PlateInput, SuggestDinnerInput},
    },
    template::Template,
};

/// Service trait for plating business logic
#[cfg_attr(test, mockall::automock)]
pub trait PlatingService: Send + Sync {
    fn plate(
        &self,
        input: PlateInput,
    ) -> impl Future<Output = Result<PlatingOutcome, CoreError>> + Send;

    /// Dinner name, tip and affirmation. Written by the text collaborator
    /// when it answers, otherwise taken from the curated table.
    fn suggest_dinner(
        &self,
        input: SuggestDinnerInput,
    ) -> impl Future<Output = Result<DinnerMatch, CoreError>> + Send;

    fn illustrate_plate(
        &self,
        input: IllustratePlateInput,
    ) -> impl Future<Output = Result<PlateIllustration, CoreError>> + Send;

    fn judge_plate(
        &self,
        input: JudgePlateInput,
    ) -> impl Future<Output = Result<PlateVerdict, CoreError>> + Send;

    fn templates(&self) -> impl Future<Output = Result<Vec<Template>, CoreError>> + Send;
}
