use serde::de::DeserializeOwned;

use crate::domain::{
    collaborators::entities::{JudgeContext, PlateVerdict, RawPlateVerdict},
    common::entities::app_errors::CoreError,
    template::TemplateId,
};

/// Number of display names drawn on the placeholder board.
pub const PLACEHOLDER_ITEMS: usize = 4;

const MAX_SCORE: u8 = 100;

/// Slots for the placeholder's item circles, clockwise from the top left.
const SLOTS: [(u32, u32); PLACEHOLDER_ITEMS] = [(130, 150), (270, 150), (270, 270), (130, 270)];

pub fn dinner_copy_prompt(ingredients: &str) -> String {
    format!(
        "You name snack boards. Given these ingredients: {ingredients}\n\
         Reply with a short playful board name (at most five words), one upbeat \
         sentence validating the choice, and one practical plating tip."
    )
}

pub fn judge_prompt(context: &JudgeContext) -> String {
    let rules = if context.rules_applied.is_empty() {
        "none".to_string()
    } else {
        context.rules_applied.join(", ")
    };

    format!(
        "You are a warm but honest judge of home plating. The photo shows \"{}\" \
         made from: {}. Plating rules the cook aimed for: {rules}.\n\
         Score the plate from 0 to 100, give it a short rank title, one specific \
         compliment, a one or two word sticker, and optionally one improvement.",
        context.dinner_name, context.ingredients
    )
}

/// Parses a JSON reply from the LLM collaborator.
pub fn parse_llm_response<T: DeserializeOwned>(raw: &str) -> Result<T, CoreError> {
    serde_json::from_str(raw.trim()).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })
}

/// Rounds the score and pulls it into `[floor, 100]`. A non-finite score
/// lands on the floor.
pub fn clamp_score(score: f64, floor: u8) -> u8 {
    let floor = floor.min(MAX_SCORE);
    if !score.is_finite() {
        return floor;
    }

    score.round().clamp(f64::from(floor), f64::from(MAX_SCORE)) as u8
}

pub fn clamp_verdict(raw: RawPlateVerdict, floor: u8) -> PlateVerdict {
    PlateVerdict {
        score: clamp_score(raw.score, floor),
        rank: raw.rank,
        compliment: raw.compliment,
        sticker: raw.sticker,
        improvement: raw.improvement.filter(|text| !text.trim().is_empty()),
    }
}

/// Deterministic SVG stand-in for a generated image: the template name and
/// up to [`PLACEHOLDER_ITEMS`] display names on a plain board.
pub fn placeholder_svg<S: AsRef<str>>(template: TemplateId, names: &[S]) -> String {
    let (board, accent) = palette(template);
    let mut svg = String::new();

    svg.push_str(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400">"#,
    );
    svg.push_str(&format!(
        r#"<rect width="400" height="400" fill="{board}"/><rect x="40" y="80" width="320" height="280" rx="24" fill="none" stroke="{accent}" stroke-width="4"/>"#
    ));
    svg.push_str(&format!(
        r#"<text x="200" y="50" font-family="sans-serif" font-size="24" text-anchor="middle" fill="{accent}">{}</text>"#,
        escape_xml(template.display_name())
    ));

    for (name, (x, y)) in names.iter().take(PLACEHOLDER_ITEMS).zip(SLOTS) {
        svg.push_str(&format!(
            r#"<circle cx="{x}" cy="{y}" r="44" fill="{accent}" fill-opacity="0.2"/><text x="{x}" y="{}" font-family="sans-serif" font-size="14" text-anchor="middle" fill="{accent}">{}</text>"#,
            y + 5,
            escape_xml(name.as_ref())
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn palette(template: TemplateId) -> (&'static str, &'static str) {
    match template {
        TemplateId::Minimalist => ("#f5f3ef", "#3d3d3d"),
        TemplateId::WildGraze => ("#efe4d2", "#7a4b27"),
        TemplateId::Bento => ("#f2ede4", "#2f4f4f"),
        TemplateId::Mediterranean => ("#f4efe1", "#2c5d8a"),
        TemplateId::SnackAttack => ("#fff2d6", "#c2410c"),
        TemplateId::PizzaNight => ("#fbe9e1", "#a32020"),
        TemplateId::Casual => ("#f3eadb", "#5b4636"),
    }
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
