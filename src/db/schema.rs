//! SQL DDL for the reference collections.

/// SQLite schema with:
/// - `cards`: keyed by the catalog `id` (not autoincremented, the seeder supplies it)
/// - `combinations`: keyed by `id`; the `(c1id, c2id, c3id)` triple is
///   deliberately NOT unique, duplicates are all lookup candidates
/// - a plain index over the triple for the draw lookup
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    image TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS combinations (
    id INTEGER PRIMARY KEY,
    c1id INTEGER NOT NULL,
    c2id INTEGER NOT NULL,
    c3id INTEGER NOT NULL,
    result TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_combinations_draw ON combinations(c1id, c2id, c3id);
"#;
