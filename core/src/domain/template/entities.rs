use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::ClassifiedIngredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TemplateId {
    Minimalist,
    WildGraze,
    Bento,
    Mediterranean,
    SnackAttack,
    PizzaNight,
    Casual,
}

impl TemplateId {
    /// Every template, in selection priority order.
    pub const ALL: [TemplateId; 7] = [
        TemplateId::Minimalist,
        TemplateId::Bento,
        TemplateId::WildGraze,
        TemplateId::PizzaNight,
        TemplateId::Mediterranean,
        TemplateId::SnackAttack,
        TemplateId::Casual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Minimalist => "minimalist",
            TemplateId::WildGraze => "wildGraze",
            TemplateId::Bento => "bento",
            TemplateId::Mediterranean => "mediterranean",
            TemplateId::SnackAttack => "snackAttack",
            TemplateId::PizzaNight => "pizzaNight",
            TemplateId::Casual => "casual",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Minimalist => "Minimalist",
            TemplateId::WildGraze => "Wild Graze",
            TemplateId::Bento => "Bento",
            TemplateId::Mediterranean => "Mediterranean",
            TemplateId::SnackAttack => "Snack Attack",
            TemplateId::PizzaNight => "Pizza Night",
            TemplateId::Casual => "Casual",
        }
    }

    /// Layout description spliced into the generation prompt.
    pub fn layout(&self) -> &'static str {
        match self {
            TemplateId::Minimalist => {
                "a minimalist slate board with a few pieces set well apart and generous negative space"
            }
            TemplateId::WildGraze => {
                "an abundant grazing table where ingredients cascade edge to edge in loose rivers"
            }
            TemplateId::Bento => {
                "a bento-style board divided into neat compartments, one ingredient group per section"
            }
            TemplateId::Mediterranean => {
                "a rustic Mediterranean mezze platter with dips in shallow bowls at the center"
            }
            TemplateId::SnackAttack => {
                "a playful snack spread with bowls of dip surrounded by generous piles of chips"
            }
            TemplateId::PizzaNight => {
                "a pizza night spread on a wooden peel with extra toppings scattered around it"
            }
            TemplateId::Casual => {
                "a relaxed wooden board with ingredients grouped casually in small clusters"
            }
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            TemplateId::Minimalist => 1,
            TemplateId::Bento => 2,
            TemplateId::WildGraze => 3,
            TemplateId::PizzaNight => 4,
            TemplateId::Mediterranean => 5,
            TemplateId::SnackAttack => 6,
            TemplateId::Casual => 7,
        }
    }

    pub fn template(&self) -> Template {
        Template {
            id: *self,
            name: self.display_name().to_string(),
            layout: self.layout().to_string(),
            priority: self.priority(),
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub layout: String,
    pub priority: u8,
}

/// Decision table row that produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
    TooFewItems,
    Chaos,
    PizzaFamily,
    MediterraneanVocabulary,
    SnackVocabulary,
    SmallSet,
    LargeSet,
    FlowHeavy,
    Default,
}

/// Themed signals detected on the usable items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialCases {
    pub pizza: bool,
    pub mediterranean: bool,
    pub snack: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSelection {
    pub template: TemplateId,
    pub rule: SelectionRule,
    pub rationale: String,
    /// Items shown on the board. Equal to the input unless chaos handling ran.
    pub primary: Vec<ClassifiedIngredient>,
    pub overflow: Vec<ClassifiedIngredient>,
}
