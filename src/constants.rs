// Element tags that are shaped into documents
pub const SHAPED_ELEMENTS: &[&str] = &["node", "way"];

// Elements the reader materializes with their children; everything else is skipped
pub const OSM_PRIMITIVES: &[&str] = &["node", "way", "relation"];

// Child element carrying a k/v pair
pub const TAG_ELEMENT: &str = "tag";

// Provenance attributes copied into the `created` block
pub const CREATED_FIELDS: &[&str] = &["uid", "version", "changeset", "timestamp", "user"];

// Tag key prefixes
pub const ADDRESS_PREFIX: &str = "addr:";
pub const NESTED_STREET_PREFIX: &str = "street:";
pub const STREET_FIELD: &str = "street";

// Street suffix abbreviations. "Ct." and "Cir." are left out on purpose.
pub const DEFAULT_STREET_MAPPING: &[(&str, &str)] = &[
    ("St", "Street"),
    ("St.", "Street"),
    ("Ave", "Avenue"),
    ("Rd", "Road"),
    ("Rd.", "Road"),
    ("Ln", "Lane"),
    ("Dr", "Drive"),
    ("Ct", "Court"),
    ("Cir", "Circle"),
    ("Blvd", "Boulevard"),
    ("Blvd.", "Boulevard"),
];

// Output file naming
pub const OUTPUT_EXTENSION: &str = "json";

// Document store defaults
pub const DEFAULT_DATABASE: &str = "opendata";
pub const DEFAULT_COLLECTION: &str = "aurora_il";
pub const DEFAULT_MATCH_FIELD: &str = "NHD:way_id";
pub const MEMORY_STORE_ADDRESS: &str = "memory:";
