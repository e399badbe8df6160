#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateInput {
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllustratePlateInput {
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestDinnerInput {
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgePlateInput {
    pub photo: Vec<u8>,
    pub dinner_name: String,
    pub ingredients: String,
    pub rules_applied: Vec<String>,
}
