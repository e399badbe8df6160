use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, warn};

use crate::domain::{
    collaborators::{
        DinnerCopy, Illustration, JudgeContext, LLMClient, PlateVerdict, RawPlateVerdict,
        helpers::{
            PLACEHOLDER_ITEMS, clamp_verdict, dinner_copy_prompt, judge_prompt,
            parse_llm_response, placeholder_svg,
        },
        schema::{get_dinner_copy_schema, get_plate_verdict_schema},
    },
    common::{entities::app_errors::CoreError, ports::RandomSource, services::Service},
    dinner::{DinnerMatch, MatchSource, match_parsed_dinner},
    ingredient::parse_ingredients,
    plating::{
        entities::{PlateIllustration, PlatingOutcome},
        pipeline::plate_ingredients,
        ports::PlatingService,
        value_objects::{IllustratePlateInput, JudgePlateInput, PlateInput, SuggestDinnerInput},
    },
    template::{Template, TemplateId},
};

impl<LLM, RS> PlatingService for Service<LLM, RS>
where
    LLM: LLMClient,
    RS: RandomSource,
{
    async fn plate(&self, input: PlateInput) -> Result<PlatingOutcome, CoreError> {
        Ok(plate_ingredients(
            &input.ingredients,
            &self.taxonomy,
            &self.config,
            &self.random,
        ))
    }

    async fn suggest_dinner(&self, input: SuggestDinnerInput) -> Result<DinnerMatch, CoreError> {
        let parsed = parse_ingredients(&input.ingredients, self.config.max_items);
        let matched = match_parsed_dinner(&parsed, &self.taxonomy, &self.random);

        if parsed.is_empty() {
            return Ok(matched);
        }

        let prompt = dinner_copy_prompt(&parsed.as_strings().join(", "));
        let written = match self
            .llm_client
            .generate_with_text(prompt, get_dinner_copy_schema())
            .await
        {
            Ok(raw) => parse_llm_response::<DinnerCopy>(&raw),
            Err(e) => Err(e),
        };

        match written {
            Ok(copy) if !copy.name.trim().is_empty() && !copy.tip.trim().is_empty() => {
                debug!(name = %copy.name, "dinner copy written by collaborator");
                Ok(DinnerMatch {
                    name: copy.name,
                    tip: copy.tip,
                    template: matched.template,
                    validation: if copy.validation.trim().is_empty() {
                        matched.validation
                    } else {
                        copy.validation
                    },
                    source: MatchSource::Generated,
                    matched_key: None,
                })
            }
            Ok(_) => {
                warn!("dinner copy came back blank, using curated table");
                Ok(matched)
            }
            Err(e) => {
                warn!(error = %e, "dinner writer failed, using curated table");
                Ok(matched)
            }
        }
    }

    async fn illustrate_plate(
        &self,
        input: IllustratePlateInput,
    ) -> Result<PlateIllustration, CoreError> {
        let outcome = plate_ingredients(
            &input.ingredients,
            &self.taxonomy,
            &self.config,
            &self.random,
        );

        let result = match outcome {
            PlatingOutcome::Plated(result) | PlatingOutcome::Mixed(result) => result,
            other => {
                let message = other.message().unwrap_or_default().to_string();
                return Err(CoreError::Invalid(message));
            }
        };

        let illustration = match self.llm_client.generate_image(result.prompt.clone()).await {
            Ok(image) => Illustration::Generated {
                mime_type: image.mime_type,
                data: general_purpose::STANDARD.encode(&image.data),
            },
            Err(e) => {
                warn!(error = %e, "image generation failed, using placeholder");
                let names = result
                    .primary_items
                    .iter()
                    .take(PLACEHOLDER_ITEMS)
                    .collect::<Vec<_>>();
                Illustration::Placeholder {
                    svg: placeholder_svg(result.template, &names),
                }
            }
        };

        Ok(PlateIllustration {
            template: result.template,
            prompt: result.prompt,
            primary_items: result.primary_items,
            illustration,
        })
    }

    async fn judge_plate(&self, input: JudgePlateInput) -> Result<PlateVerdict, CoreError> {
        if input.photo.is_empty() {
            return Err(CoreError::Invalid("photo is empty".to_string()));
        }

        let context = JudgeContext {
            dinner_name: input.dinner_name,
            ingredients: input.ingredients,
            rules_applied: input.rules_applied,
        };

        let raw_response = self
            .llm_client
            .generate_with_image(
                judge_prompt(&context),
                input.photo,
                get_plate_verdict_schema(),
            )
            .await?;

        let raw = parse_llm_response::<RawPlateVerdict>(&raw_response)?;
        let verdict = clamp_verdict(raw, self.config.score_floor);
        debug!(score = verdict.score, "plate judged");

        Ok(verdict)
    }

    async fn templates(&self) -> Result<Vec<Template>, CoreError> {
        Ok(TemplateId::ALL.iter().map(TemplateId::template).collect())
    }
}
