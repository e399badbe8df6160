use serde_json::json;

/// Returns the JSON schema for dinner copy responses
pub fn get_dinner_copy_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "validation": { "type": "string" },
            "tip": { "type": "string" }
        },
        "required": ["name", "validation", "tip"]
    })
}

/// Returns the JSON schema for plate judging responses
pub fn get_plate_verdict_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "score": { "type": "number" },
            "rank": { "type": "string" },
            "compliment": { "type": "string" },
            "sticker": { "type": "string" },
            "improvement": { "type": "string" }
        },
        "required": ["score", "rank", "compliment", "sticker"]
    })
}
