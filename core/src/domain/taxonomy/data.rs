//! Built-in reference data. Entry order inside a role matters: the classifier
//! takes the first entry whose synonym hits, so specific entries ("goat cheese",
//! "grape leaves") sit before the generic ones they contain ("cheese", "grape").

use crate::domain::{
    taxonomy::entities::{
        AmbiguousItem, Category, CuratedDinner, IngredientEntry, IngredientFlags, NonFoodFamily,
        NonFoodPatterns, Role, SnarkNoun, Tone,
    },
    template::entities::TemplateId,
};

const PLAIN: IngredientFlags = IngredientFlags::NONE;
const LARGE: IngredientFlags = PLAIN.with_large();
const SMALL_ROUND: IngredientFlags = PLAIN.with_small_round();
const LONG: IngredientFlags = PLAIN.with_long();
const SPREAD: IngredientFlags = PLAIN.with_spreadable();
const DIP: IngredientFlags = PLAIN.with_spreadable().with_container();

const fn entry(
    name: &'static str,
    synonyms: &'static [&'static str],
    role: Role,
    category: Category,
    flags: IngredientFlags,
    tone: Option<Tone>,
) -> IngredientEntry {
    IngredientEntry {
        name,
        synonyms,
        role,
        category,
        flags,
        tone,
    }
}

const WARM: Option<Tone> = Some(Tone::Warm);
const COOL: Option<Tone> = Some(Tone::Cool);
const NEUTRAL: Option<Tone> = None;

pub const INGREDIENTS: &[IngredientEntry] = &[
    // anchors
    entry("Brie", &["brie"], Role::Anchor, Category::SoftCheese, LARGE, NEUTRAL),
    entry("Camembert", &["camembert"], Role::Anchor, Category::SoftCheese, LARGE, NEUTRAL),
    entry("Burrata", &["burrata", "mozzarella"], Role::Anchor, Category::SoftCheese, LARGE, NEUTRAL),
    entry("Goat Cheese", &["goat cheese", "chevre"], Role::Anchor, Category::SoftCheese, SPREAD, NEUTRAL),
    entry("Feta", &["feta"], Role::Anchor, Category::SoftCheese, PLAIN, NEUTRAL),
    entry("Blue Cheese", &["blue cheese", "gorgonzola", "roquefort", "stilton"], Role::Anchor, Category::BlueCheese, PLAIN, COOL),
    entry("Cream Cheese", &["cream cheese"], Role::Anchor, Category::Dip, DIP, NEUTRAL),
    entry("Cheddar", &["cheddar"], Role::Anchor, Category::HardCheese, PLAIN, WARM),
    entry("Gouda", &["gouda"], Role::Anchor, Category::HardCheese, LARGE, WARM),
    entry("Manchego", &["manchego"], Role::Anchor, Category::HardCheese, PLAIN, WARM),
    entry("Parmesan", &["parmesan", "parmigiano"], Role::Anchor, Category::HardCheese, LARGE, WARM),
    entry("Gruyère", &["gruyere", "gruyère", "comte", "comté"], Role::Anchor, Category::HardCheese, PLAIN, WARM),
    entry("Cheese", &["cheese"], Role::Anchor, Category::HardCheese, PLAIN, WARM),
    entry("Hummus", &["hummus"], Role::Anchor, Category::Dip, DIP, WARM),
    entry("Guacamole", &["guacamole", "guac"], Role::Anchor, Category::Dip, DIP, COOL),
    entry("Salsa", &["salsa", "pico de gallo"], Role::Anchor, Category::Dip, PLAIN.with_container(), WARM),
    entry("Queso", &["queso"], Role::Anchor, Category::Dip, DIP, WARM),
    entry("Tzatziki", &["tzatziki"], Role::Anchor, Category::Dip, DIP, COOL),
    entry("Baba Ganoush", &["baba ganoush", "baba ghanoush"], Role::Anchor, Category::Dip, DIP, NEUTRAL),
    entry("Ranch", &["ranch"], Role::Anchor, Category::Dip, DIP, NEUTRAL),
    // flow / vehicles
    entry("Crackers", &["crackers", "cracker"], Role::Flow, Category::Cracker, PLAIN, NEUTRAL),
    entry("Breadsticks", &["breadsticks", "breadstick", "grissini"], Role::Flow, Category::Bread, LONG, WARM),
    entry("Baguette", &["baguette", "crostini", "bread", "sourdough"], Role::Flow, Category::Bread, LONG, WARM),
    entry("Pita", &["pita", "naan"], Role::Flow, Category::Bread, PLAIN, WARM),
    entry("Tortilla Chips", &["tortilla chips", "tortilla", "chips", "nachos"], Role::Flow, Category::Chip, PLAIN, WARM),
    entry("Pretzels", &["pretzels", "pretzel"], Role::Flow, Category::Chip, PLAIN, WARM),
    entry("Prosciutto", &["prosciutto", "parma ham", "serrano"], Role::Flow, Category::CuredMeat, PLAIN, WARM),
    entry("Salami", &["salami", "pepperoni", "soppressata", "chorizo"], Role::Flow, Category::CuredMeat, PLAIN, WARM),
    entry("Carrots", &["carrots", "carrot"], Role::Flow, Category::Vegetable, LONG, WARM),
    entry("Celery", &["celery"], Role::Flow, Category::Vegetable, LONG, COOL),
    entry("Cucumber", &["cucumber", "cucumbers"], Role::Flow, Category::Vegetable, PLAIN, COOL),
    entry("Bell Peppers", &["bell pepper", "bell peppers"], Role::Flow, Category::Vegetable, LONG, WARM),
    // pops
    entry("Grape Leaves", &["grape leaves", "dolmas", "dolmades"], Role::Pop, Category::Vegetable, LONG, COOL),
    entry("Melon", &["melon", "cantaloupe", "honeydew", "watermelon"], Role::Pop, Category::Fruit, PLAIN, WARM),
    entry("Honey", &["honey", "honeycomb"], Role::Pop, Category::Condiment, DIP, WARM),
    entry("Fig Jam", &["fig jam", "jam", "preserves", "marmalade", "chutney"], Role::Pop, Category::Condiment, DIP, WARM),
    entry("Mustard", &["mustard", "dijon"], Role::Pop, Category::Condiment, DIP, WARM),
    entry("Citrus", &["grapefruit", "orange", "oranges", "clementine", "clementines"], Role::Pop, Category::Fruit, PLAIN, WARM),
    entry("Grapes", &["grapes", "grape"], Role::Pop, Category::Fruit, SMALL_ROUND, COOL),
    entry("Olives", &["olives", "olive", "kalamata", "castelvetrano"], Role::Pop, Category::Olive, SMALL_ROUND, COOL),
    entry("Nuts", &["almonds", "almond", "walnuts", "pecans", "cashews", "pistachios", "nuts"], Role::Pop, Category::Nut, SMALL_ROUND, WARM),
    entry("Blueberries", &["blueberries", "blackberries"], Role::Pop, Category::Berry, SMALL_ROUND, COOL),
    entry("Strawberries", &["strawberries", "strawberry", "raspberries", "berries"], Role::Pop, Category::Berry, SMALL_ROUND, WARM),
    entry("Cherry Tomatoes", &["cherry tomatoes", "tomatoes", "tomato"], Role::Pop, Category::Vegetable, SMALL_ROUND, WARM),
    entry("Pomegranate", &["pomegranate"], Role::Pop, Category::Fruit, SMALL_ROUND, WARM),
    entry("Figs", &["figs", "fig"], Role::Pop, Category::Fruit, PLAIN, WARM),
    entry("Pineapple", &["pineapple"], Role::Pop, Category::Fruit, PLAIN, WARM),
    entry("Apples", &["apples", "apple"], Role::Pop, Category::Fruit, PLAIN, WARM),
    entry("Pears", &["pears", "pear"], Role::Pop, Category::Fruit, PLAIN, COOL),
    entry("Dried Apricots", &["apricots", "apricot"], Role::Pop, Category::Fruit, PLAIN, WARM),
    entry("Cornichons", &["cornichons", "pickles", "gherkins"], Role::Pop, Category::Pickle, PLAIN, COOL),
    entry("Fresh Herbs", &["rosemary", "thyme", "basil", "mint", "dill"], Role::Pop, Category::Herb, PLAIN, COOL),
    entry("Edible Flowers", &["edible flowers", "nasturtium"], Role::Pop, Category::Herb, PLAIN, WARM),
    entry("Chocolate", &["chocolate", "truffles"], Role::Pop, Category::Sweet, PLAIN, WARM),
    // special
    entry("Pizza", &["pizza", "calzone"], Role::Special, Category::Pizza, LARGE, WARM),
];

pub const DANGEROUS_WORDS: &[&str] = &[
    "bleach",
    "ammonia",
    "antifreeze",
    "gasoline",
    "kerosene",
    "lighter fluid",
    "acetone",
    "nail polish remover",
    "paint thinner",
    "turpentine",
    "rat poison",
    "poison",
    "pesticide",
    "insecticide",
    "weed killer",
    "drain cleaner",
    "lye",
    "arsenic",
    "cyanide",
    "mercury",
    "detergent",
    "tide pods",
    "laundry pods",
    "cocaine",
    "heroin",
    "fentanyl",
    "meth",
    "drugs",
];

pub const DANGEROUS_MESSAGE: &str =
    "That's not food and could genuinely hurt someone. Please keep it far away from anything you eat.";

pub const SNARK_NOUNS: &[SnarkNoun] = &[
    SnarkNoun {
        noun: "keys",
        line: "Keys unlock doors, not flavor. Back in the pocket they go.",
    },
    SnarkNoun {
        noun: "phone",
        line: "Your phone is not a cracker, no matter how flat it is.",
    },
    SnarkNoun {
        noun: "brick",
        line: "A brick is a building material. Even the crunchiest board has limits.",
    },
    SnarkNoun {
        noun: "laptop",
        line: "That's a hard drive, not a hard cheese.",
    },
    SnarkNoun {
        noun: "wallet",
        line: "Your wallet pays for the cheese. It does not become the cheese.",
    },
    SnarkNoun {
        noun: "homework",
        line: "The dog can eat your homework. Your guests cannot.",
    },
    SnarkNoun {
        noun: "socks",
        line: "Socks pair with shoes, not with wine.",
    },
    SnarkNoun {
        noun: "shoes",
        line: "Shoes belong by the door, not on the board.",
    },
    SnarkNoun {
        noun: "remote",
        line: "The remote stays on the couch where it belongs.",
    },
    SnarkNoun {
        noun: "stapler",
        line: "Staplers hold paper together. Let the brie hold the board together.",
    },
    SnarkNoun {
        noun: "crayons",
        line: "Crayons come in a lot of colors. None of them are flavors.",
    },
    SnarkNoun {
        noun: "candle",
        line: "Candles set the mood next to the board, not on it.",
    },
    SnarkNoun {
        noun: "cardboard",
        line: "Cardboard is what the crackers came in.",
    },
    SnarkNoun {
        noun: "lego",
        line: "Stepping on one is painful enough.",
    },
    SnarkNoun {
        noun: "glue",
        line: "Glue holds things together. That's the cream cheese's job.",
    },
];

pub const AMBIGUOUS_ITEMS: &[AmbiguousItem] = &[
    AmbiguousItem {
        word: "grass",
        question: "Which grass? Lemongrass and wheatgrass are welcome; the lawn is not.",
        valid_forms: &["lemongrass", "wheatgrass", "grass-fed"],
    },
    AmbiguousItem {
        word: "flowers",
        question: "Which flowers? Only edible ones like nasturtiums or squash blossoms belong on a board.",
        valid_forms: &["edible flowers", "squash flowers", "zucchini flowers"],
    },
    AmbiguousItem {
        word: "ice",
        question: "Ice as in ice cream, or just... ice?",
        valid_forms: &["ice cream", "shaved ice", "ice pops"],
    },
    AmbiguousItem {
        word: "leaves",
        question: "Which leaves? Grape leaves and basil leaves, yes. Yard leaves, no.",
        valid_forms: &[
            "grape leaves",
            "bay leaves",
            "basil leaves",
            "mint leaves",
            "curry leaves",
            "lettuce leaves",
        ],
    },
];

pub const NON_FOOD_PATTERNS: &[NonFoodPatterns] = &[
    NonFoodPatterns {
        family: NonFoodFamily::Object,
        words: &[
            "chair",
            "sofa",
            "couch",
            "furniture",
            "pencil",
            "pen",
            "book",
            "plastic",
            "toy",
            "toys",
            "coin",
            "coins",
            "money",
            "pebbles",
            "television",
        ],
        responses: &[
            "That's furniture-adjacent, not food-adjacent.",
            "I admire the creativity, but objects stay off the board.",
            "Can't plate that. It would chip a tooth and my reputation.",
        ],
    },
    NonFoodPatterns {
        family: NonFoodFamily::BodyPart,
        words: &[
            "hair",
            "toenail",
            "toenails",
            "fingernail",
            "fingernails",
            "teeth",
            "tooth",
            "elbow",
            "knee",
            "eyeball",
        ],
        responses: &[
            "Let's keep body parts attached to bodies.",
            "That's a hard no from the health inspector.",
            "Gross. Next ingredient, please.",
        ],
    },
    NonFoodPatterns {
        family: NonFoodFamily::AbstractConcept,
        words: &[
            "love",
            "happiness",
            "sadness",
            "time",
            "dreams",
            "hope",
            "regret",
            "vibes",
            "friendship",
            "existential dread",
            "nothing",
            "everything",
        ],
        responses: &[
            "Beautiful sentiment. Terrible texture.",
            "You can't slice that, and believe me, I've tried.",
            "I can plate feelings metaphorically, but not literally.",
        ],
    },
    NonFoodPatterns {
        family: NonFoodFamily::DangerousMaterial,
        words: &[
            "broken glass",
            "glass shards",
            "nails",
            "screws",
            "batteries",
            "battery",
            "asbestos",
            "lead",
            "sand",
            "dirt",
            "mud",
            "gravel",
        ],
        responses: &[
            "That could actually hurt someone. Off the board it goes.",
            "Hard pass. That belongs in a hardware store, not a snack spread.",
            "Let's not. Safety first, snacks second.",
        ],
    },
];

pub const MEDITERRANEAN_INDICATORS: &[&str] =
    &["hummus", "pita", "feta", "tzatziki", "olive", "cucumber"];

pub const SNACK_INDICATORS: &[&str] = &["chips", "salsa", "guacamole", "queso", "tortilla"];

pub const PIZZA_INDICATORS: &[&str] = &["pizza", "calzone"];

pub const AFFIRMATIONS: &[&str] = &[
    "Chef's kiss. This one works.",
    "Certified board-worthy.",
    "Your guests are going to hover.",
    "Bold choices. Delicious ones.",
    "This spread has main-character energy.",
    "Approved by the snack council.",
];

pub const DEFAULT_DINNER_NAME: &str = "The Spread";

pub const DEFAULT_DINNER_TIP: &str = "Start with your biggest item, work outward, and fill every gap with something small and colorful.";

pub const CURATED_DINNERS: &[CuratedDinner] = &[
    CuratedDinner {
        key: "brie,crackers",
        name: "The Classic Duo",
        tip: "Warm the brie for ten minutes so it slumps just enough to invite the first cracker.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "brie,crackers,grapes",
        name: "The French Picnic",
        tip: "Cluster the grapes on the vine beside the brie and fan the crackers in a loose arc.",
        template: TemplateId::Casual,
    },
    CuratedDinner {
        key: "brie,honey",
        name: "Golden Hour",
        tip: "Drizzle the honey right before serving so it pools in the cut edge of the brie.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "cheese,crackers",
        name: "Cheese & Crackers, Elevated",
        tip: "Slice the cheese into mixed shapes: cubes, triangles and thin planks keep it interesting.",
        template: TemplateId::Casual,
    },
    CuratedDinner {
        key: "crackers,salami",
        name: "The Snack Stack",
        tip: "Fold the salami into quarters so it stands up like little roses between the crackers.",
        template: TemplateId::Casual,
    },
    CuratedDinner {
        key: "hummus,pita",
        name: "Pita Party",
        tip: "Swirl the hummus with the back of a spoon and finish with olive oil and paprika.",
        template: TemplateId::Mediterranean,
    },
    CuratedDinner {
        key: "hummus,olives,pita",
        name: "Mezze Moment",
        tip: "Warm the pita, cut it into wedges and tuck the olives into a small bowl beside the hummus.",
        template: TemplateId::Mediterranean,
    },
    CuratedDinner {
        key: "feta,olives,tomatoes",
        name: "Greek Island",
        tip: "Crumble the feta over halved tomatoes and let the olives roll wherever they like.",
        template: TemplateId::Mediterranean,
    },
    CuratedDinner {
        key: "chips,salsa",
        name: "Salsa Night",
        tip: "Put the salsa in the middle and fan the chips around it like a sunburst.",
        template: TemplateId::SnackAttack,
    },
    CuratedDinner {
        key: "chips,guacamole,salsa",
        name: "Fiesta Board",
        tip: "Two bowls, one pile of chips: set the dips at opposite ends so everyone can reach.",
        template: TemplateId::SnackAttack,
    },
    CuratedDinner {
        key: "queso,tortilla chips",
        name: "Queso Fiesta",
        tip: "Keep the queso warm in a small skillet and stand the chips upright around the rim.",
        template: TemplateId::SnackAttack,
    },
    CuratedDinner {
        key: "pizza",
        name: "Pizza Night In",
        tip: "Cut the pizza into strips instead of wedges so it can snake across the board.",
        template: TemplateId::PizzaNight,
    },
    CuratedDinner {
        key: "apples,cheddar",
        name: "Orchard Board",
        tip: "Slice the apples thin and shingle them against a wedge of sharp cheddar.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "melon,prosciutto",
        name: "Italian Summer",
        tip: "Wrap each melon wedge in a ribbon of prosciutto and line them up like piano keys.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "figs,goat cheese",
        name: "The Fig Affair",
        tip: "Halve the figs and press a spoonful of goat cheese into each one.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "blue cheese,honey,walnuts",
        name: "Bold & Golden",
        tip: "Crumble the blue cheese, scatter the walnuts and finish with a slow honey drizzle.",
        template: TemplateId::Casual,
    },
    CuratedDinner {
        key: "cheddar,mustard,pretzels",
        name: "Beer Garden",
        tip: "Serve the mustard in a ramekin and pile the pretzels high for a pub-style board.",
        template: TemplateId::Casual,
    },
    CuratedDinner {
        key: "carrots,celery,ranch",
        name: "Crudité Crunch",
        tip: "Stand the carrots and celery upright in a glass so they tower over the ranch.",
        template: TemplateId::Casual,
    },
    CuratedDinner {
        key: "chocolate,strawberries",
        name: "Date Night Dessert",
        tip: "Melt half the chocolate for dipping and shave the rest over the berries.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "basil,burrata,tomatoes",
        name: "Caprese Dream",
        tip: "Tear the burrata open at the table and scatter basil over everything.",
        template: TemplateId::Mediterranean,
    },
    CuratedDinner {
        key: "chorizo,manchego",
        name: "Tapas Time",
        tip: "Cut the manchego into triangles and alternate them with thin coins of chorizo.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "grapes",
        name: "Grape Expectations",
        tip: "Keep the grapes on the vine and drape them over the edge of the board.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "olives",
        name: "Olive You",
        tip: "Warm the olives with orange zest and rosemary before serving.",
        template: TemplateId::Minimalist,
    },
    CuratedDinner {
        key: "cheese",
        name: "Say Cheese",
        tip: "Let the cheese come to room temperature; cold cheese hides its flavor.",
        template: TemplateId::Minimalist,
    },
];
