use heck::{ToLowerCamelCase, ToSnakeCase};

// ============================================================================
// String inflection used for titles and naming variables
// ============================================================================

/// `BlogPosts` → `blog_posts`
pub fn underscore(word: &str) -> String {
    word.to_snake_case()
}

/// `blog_posts` → `Blog Posts`. Only the first letter of each word is
/// touched.
pub fn humanize(word: &str) -> String {
    word.split('_')
        .filter(|w| !w.is_empty())
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `BlogPosts` → `blogPosts`
pub fn variable(word: &str) -> String {
    word.to_lower_camel_case()
}

/// Singular form of the last word, keeping the rest of the string intact:
/// `BlogPosts` → `BlogPost`, `blog_categories` → `blog_category`.
pub fn singularize(word: &str) -> String {
    inflect_last_word(word, singular_of)
}

/// Plural form of the last word: `BlogPost` → `BlogPosts`.
pub fn pluralize(word: &str) -> String {
    inflect_last_word(word, plural_of)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split at the start of the last word (after `_`, or at the last capital
/// letter of a camel-cased word) and inflect that word only.
fn inflect_last_word(word: &str, inflect: fn(&str) -> String) -> String {
    if word.is_empty() {
        return String::new();
    }

    let split = word
        .char_indices()
        .skip(1)
        .filter(|(i, c)| c.is_uppercase() || word[..*i].ends_with('_'))
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0);

    let (head, last) = word.split_at(split);
    let lower = last.to_lowercase();
    let inflected = inflect(&lower);

    let starts_upper = last.chars().next().is_some_and(char::is_uppercase);
    let all_upper = last.len() > 1 && last.chars().all(|c| !c.is_lowercase());
    let tail = if all_upper {
        inflected.to_uppercase()
    } else if starts_upper {
        upper_first(&inflected)
    } else {
        inflected
    };

    format!("{}{}", head, tail)
}

const UNCOUNTABLE: &[&str] = &[
    "data", "equipment", "feedback", "information", "media", "metadata", "money", "news",
    "series", "sheep", "species", "status",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("matrix", "matrices"),
    ("criterion", "criteria"),
    ("analysis", "analyses"),
    ("axis", "axes"),
];

/// Latin plurals that singularize but are never produced by `plural_of`.
const SINGULAR_ONLY: &[(&str, &str)] = &[("indices", "index"), ("vertices", "vertex")];

/// Words ending in `-oes` whose singular keeps the `e`.
const OE_WORDS: &[&str] = &["canoes", "floes", "oboes", "shoes", "toes"];

/// Words ending in `-o` that pluralize with `-es`.
const O_ES_WORDS: &[&str] = &["echo", "hero", "potato", "tomato", "veto"];

fn singular_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return singular.to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
        return word.to_string();
    }
    if let Some((_, singular)) = SINGULAR_ONLY.iter().find(|(plural, _)| *plural == word) {
        return singular.to_string();
    }

    // `-ouse`, `-ause`, `-ovie` and `-oe` nouns only drop the final `s`
    if word.ends_with("ouses") || word.ends_with("auses") || word.ends_with("ovies") {
        return word[..word.len() - 1].to_string();
    }
    if OE_WORDS.iter().any(|w| word.ends_with(w)) {
        return word[..word.len() - 1].to_string();
    }
    for suffix in ["iases", "lenses", "oes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes", "uses"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn plural_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return plural.to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let vowel_before = stem.ends_with(['a', 'e', 'i', 'o', 'u']);
        if !stem.is_empty() && !vowel_before {
            return format!("{}ies", stem);
        }
    }
    if O_ES_WORDS.iter().any(|w| word.ends_with(w)) {
        return format!("{}es", word);
    }
    for suffix in ["ss", "sh", "ch", "x", "z", "us", "ias", "lens"] {
        if word.ends_with(suffix) {
            return format!("{}es", word);
        }
    }
    if word.ends_with('s') {
        return word.to_string();
    }
    format!("{}s", word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_word_split_respects_camel_case() {
        assert_eq!(singularize("BlogCategories"), "BlogCategory");
        assert_eq!(pluralize("user_address"), "user_addresses");
    }

    #[test]
    fn single_word_keeps_case() {
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("tags"), "tag");
    }

    #[test]
    fn words_that_only_drop_the_final_s() {
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("Warehouses"), "Warehouse");
        assert_eq!(singularize("causes"), "cause");
        assert_eq!(singularize("movies"), "movie");
        assert_eq!(singularize("shoes"), "shoe");
    }

    #[test]
    fn es_plurals_of_s_and_o_endings() {
        assert_eq!(singularize("aliases"), "alias");
        assert_eq!(singularize("lenses"), "lens");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("potatoes"), "potato");
        assert_eq!(singularize("buses"), "bus");

        assert_eq!(pluralize("alias"), "aliases");
        assert_eq!(pluralize("hero"), "heroes");
        assert_eq!(pluralize("warehouse"), "warehouses");
        assert_eq!(pluralize("movie"), "movies");
    }

    #[test]
    fn index_pluralizes_regularly() {
        assert_eq!(pluralize("index"), "indexes");
        assert_eq!(singularize("indexes"), "index");
        assert_eq!(singularize("indices"), "index");
    }
}
