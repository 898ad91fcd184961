use crate::domain::attributes::clamp_unit;
use crate::domain::RandomSource;

pub const BUSINESS_NAME_PLACEHOLDER: &str = "{businessName}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";

pub const HEADLINE_TEMPLATES: [&str; 10] = [
    "Why {businessName} is {location}'s Hidden Gem in 2025",
    "The Ultimate Guide to {businessName} in {location}",
    "{businessName}: Your Go-To Destination in {location}",
    "Discover Why {businessName} is {location}'s Best Kept Secret",
    "Experience Excellence at {businessName} in {location}",
    "{businessName} - Where Quality Meets Service in {location}",
    "Top Reasons to Visit {businessName} in {location} Today",
    "Why {businessName} is {location}'s Premier Choice",
    "{businessName}: Setting New Standards in {location}",
    "The Story Behind {location}'s Favorite - {businessName}",
];

/// Picks a template uniformly and fills in every placeholder occurrence.
///
/// `name` and `location` are inserted as-is, with no escaping.
pub fn generate_headline(random: &dyn RandomSource, name: &str, location: &str) -> String {
    let count = HEADLINE_TEMPLATES.len();
    let index = ((clamp_unit(random.next_unit()) * count as f64) as usize).min(count - 1);
    fill_template(HEADLINE_TEMPLATES[index], name, location)
}

/// Single pass over `template`, so placeholder text inside `name` or
/// `location` is copied verbatim rather than expanded again.
pub fn fill_template(template: &str, name: &str, location: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + location.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        out.push_str(head);

        if let Some(after) = tail.strip_prefix(BUSINESS_NAME_PLACEHOLDER) {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(LOCATION_PLACEHOLDER) {
            out.push_str(location);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
