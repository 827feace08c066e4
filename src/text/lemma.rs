// Noun lemmatization — WordNet-morphy-style suffix detachment.
//
// Reduces plural nouns to a dictionary base form without part-of-speech
// disambiguation. A small irregular table handles the common ablaut
// plurals; everything else goes through ordered suffix rules. Tokens
// reaching this point are already lowercase and alphabetic.

const IRREGULAR: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
];

/// Reduce a lowercase token to its noun base form.
pub fn lemmatize(token: &str) -> String {
    for (plural, base) in IRREGULAR {
        if token == *plural {
            return (*base).to_string();
        }
    }

    if !token.ends_with('s') || token.len() <= 3 {
        return token.to_string();
    }

    // Words ending in these are usually already singular
    // ("glass", "virus", "basis").
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }

    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }

    // Longer stems only: "leaves" -> "leaf", but "loves" falls through
    // to the plain rule and stays "love".
    if let Some(stem) = token.strip_suffix("ves") {
        if stem.len() > 2 {
            return format!("{stem}f");
        }
    }

    // Sibilant stems pluralize with "es": boxes, buses, churches.
    if let Some(stem) = token.strip_suffix("es") {
        if ["ch", "sh", "ss", "x", "z", "s"]
            .iter()
            .any(|suffix| stem.ends_with(suffix))
        {
            return stem.to_string();
        }
    }

    // Plain plural: drop the trailing s.
    token[..token.len() - 1].to_string()
}
