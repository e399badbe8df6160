use std::collections::{HashMap, HashSet};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    ingredient::contains_phrase,
    taxonomy::{
        data,
        entities::{
            AmbiguousItem, CuratedDinner, IngredientEntry, NonFoodPatterns, Role, SnarkNoun,
        },
    },
};

#[derive(Debug, Clone, Error)]
pub enum TaxonomyError {
    #[error("entry `{0}` has no synonyms")]
    MissingSynonyms(&'static str),

    #[error("synonym `{synonym}` of `{entry}` must be lowercase and trimmed")]
    MalformedSynonym {
        entry: &'static str,
        synonym: &'static str,
    },

    #[error("synonym `{0}` is claimed by more than one entry")]
    DuplicateSynonym(&'static str),

    #[error("entry `{0}` uses the filler role, which is reserved for unknown items")]
    ReservedRole(&'static str),

    #[error("curated key `{0}` is not sorted, deduplicated and comma-joined")]
    NonCanonicalKey(&'static str),

    #[error("curated key `{0}` appears more than once")]
    DuplicateKey(&'static str),

    #[error("{0} must not be empty")]
    EmptyTable(&'static str),

    #[error("invalid pattern for {family}: {source}")]
    Pattern {
        family: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// The raw tables a [`Taxonomy`] is built from.
#[derive(Debug, Clone)]
pub struct TaxonomySeed {
    pub ingredients: &'static [IngredientEntry],
    pub dangerous_words: &'static [&'static str],
    pub dangerous_message: &'static str,
    pub snark_nouns: &'static [SnarkNoun],
    pub ambiguous_items: &'static [AmbiguousItem],
    pub non_food_patterns: &'static [NonFoodPatterns],
    pub mediterranean_indicators: &'static [&'static str],
    pub snack_indicators: &'static [&'static str],
    pub pizza_indicators: &'static [&'static str],
    pub affirmations: &'static [&'static str],
    pub curated_dinners: &'static [CuratedDinner],
}

impl TaxonomySeed {
    pub fn builtin() -> Self {
        Self {
            ingredients: data::INGREDIENTS,
            dangerous_words: data::DANGEROUS_WORDS,
            dangerous_message: data::DANGEROUS_MESSAGE,
            snark_nouns: data::SNARK_NOUNS,
            ambiguous_items: data::AMBIGUOUS_ITEMS,
            non_food_patterns: data::NON_FOOD_PATTERNS,
            mediterranean_indicators: data::MEDITERRANEAN_INDICATORS,
            snack_indicators: data::SNACK_INDICATORS,
            pizza_indicators: data::PIZZA_INDICATORS,
            affirmations: data::AFFIRMATIONS,
            curated_dinners: data::CURATED_DINNERS,
        }
    }
}

#[derive(Debug)]
struct CompiledNonFood {
    patterns: &'static NonFoodPatterns,
    regex: Regex,
}

/// Immutable reference data, validated once at startup and shared read-only.
#[derive(Debug)]
pub struct Taxonomy {
    seed: TaxonomySeed,
    dangerous: Regex,
    non_food: Vec<CompiledNonFood>,
    dinner_index: HashMap<&'static str, usize>,
}

impl Taxonomy {
    /// Builds the taxonomy from the built-in tables.
    pub fn load() -> Result<Self, TaxonomyError> {
        Self::from_seed(TaxonomySeed::builtin())
    }

    pub fn from_seed(seed: TaxonomySeed) -> Result<Self, TaxonomyError> {
        if seed.ingredients.is_empty() {
            return Err(TaxonomyError::EmptyTable("ingredients"));
        }
        if seed.affirmations.is_empty() {
            return Err(TaxonomyError::EmptyTable("affirmations"));
        }

        let mut synonyms = HashSet::new();
        for entry in seed.ingredients {
            if entry.role == Role::Filler {
                return Err(TaxonomyError::ReservedRole(entry.name));
            }
            if entry.synonyms.is_empty() {
                return Err(TaxonomyError::MissingSynonyms(entry.name));
            }
            for &synonym in entry.synonyms {
                if synonym.is_empty()
                    || synonym != synonym.trim()
                    || synonym.to_lowercase() != synonym
                {
                    return Err(TaxonomyError::MalformedSynonym {
                        entry: entry.name,
                        synonym,
                    });
                }
                if !synonyms.insert(synonym) {
                    return Err(TaxonomyError::DuplicateSynonym(synonym));
                }
            }
        }

        let dangerous = compile_word_pattern("dangerous", seed.dangerous_words)?;

        let mut non_food = Vec::with_capacity(seed.non_food_patterns.len());
        for patterns in seed.non_food_patterns {
            if patterns.responses.is_empty() {
                return Err(TaxonomyError::EmptyTable(patterns.family.as_str()));
            }
            non_food.push(CompiledNonFood {
                patterns,
                regex: compile_word_pattern(patterns.family.as_str(), patterns.words)?,
            });
        }

        for item in seed.ambiguous_items {
            if item.valid_forms.is_empty() {
                return Err(TaxonomyError::EmptyTable(item.word));
            }
        }

        let mut dinner_index = HashMap::new();
        for (index, dinner) in seed.curated_dinners.iter().enumerate() {
            if !is_canonical_key(dinner.key) {
                return Err(TaxonomyError::NonCanonicalKey(dinner.key));
            }
            if dinner_index.insert(dinner.key, index).is_some() {
                return Err(TaxonomyError::DuplicateKey(dinner.key));
            }
        }

        debug!(
            entries = seed.ingredients.len(),
            synonyms = synonyms.len(),
            curated_dinners = dinner_index.len(),
            "taxonomy loaded"
        );

        Ok(Self {
            seed,
            dangerous,
            non_food,
            dinner_index,
        })
    }

    /// Entries of one role, in definition order.
    pub fn entries_for(&self, role: Role) -> impl Iterator<Item = &IngredientEntry> {
        self.seed.ingredients.iter().filter(move |entry| entry.role == role)
    }

    pub fn is_dangerous(&self, token: &str) -> bool {
        self.dangerous.is_match(token)
    }

    pub fn dangerous_message(&self) -> &'static str {
        self.seed.dangerous_message
    }

    /// First curated non-food noun contained in the token, in table order.
    pub fn snark_for(&self, token: &str) -> Option<&SnarkNoun> {
        self.seed
            .snark_nouns
            .iter()
            .find(|snark| contains_phrase(token, snark.noun))
    }

    /// The ambiguous word the token uses without any of its valid specific forms.
    pub fn ambiguity_for(&self, token: &str) -> Option<&AmbiguousItem> {
        self.seed.ambiguous_items.iter().find(|item| {
            contains_phrase(token, item.word)
                && !item.valid_forms.iter().any(|form| token.contains(form))
        })
    }

    pub fn non_food_for(&self, token: &str) -> Option<&NonFoodPatterns> {
        self.non_food
            .iter()
            .find(|compiled| compiled.regex.is_match(token))
            .map(|compiled| compiled.patterns)
    }

    pub fn mediterranean_indicators(&self) -> &'static [&'static str] {
        self.seed.mediterranean_indicators
    }

    pub fn snack_indicators(&self) -> &'static [&'static str] {
        self.seed.snack_indicators
    }

    pub fn pizza_indicators(&self) -> &'static [&'static str] {
        self.seed.pizza_indicators
    }

    pub fn affirmations(&self) -> &'static [&'static str] {
        self.seed.affirmations
    }

    /// Curated combinations in definition order.
    pub fn curated_dinners(&self) -> &'static [CuratedDinner] {
        self.seed.curated_dinners
    }

    pub fn curated_dinner(&self, key: &str) -> Option<&'static CuratedDinner> {
        self.dinner_index
            .get(key)
            .map(|index| &self.seed.curated_dinners[*index])
    }
}

fn compile_word_pattern(
    family: &'static str,
    words: &'static [&'static str],
) -> Result<Regex, TaxonomyError> {
    if words.is_empty() {
        return Err(TaxonomyError::EmptyTable(family));
    }

    let alternatives = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"\b(?:{alternatives})\b"))
        .map_err(|source| TaxonomyError::Pattern { family, source })
}

fn is_canonical_key(key: &str) -> bool {
    let parts: Vec<&str> = key.split(',').collect();
    let mut seen = HashSet::new();

    parts
        .iter()
        .all(|part| !part.is_empty() && *part == part.trim() && seen.insert(*part))
        && parts.windows(2).all(|pair| pair[0] < pair[1])
}
