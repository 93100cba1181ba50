/// Slugs of the services offered on the quote form.
pub const KNOWN_SERVICE_TYPES: [&str; 4] = [
    "last-mile",
    "driver-dispatch",
    "route-optimization",
    "full-logistics",
];

/// The requested service, as submitted. Any non-empty slug is kept; slugs
/// outside the form's options are still forwarded to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceType(String);

impl ServiceType {
    pub fn new(slug: String) -> ServiceType {
        Self(slug)
    }

    /// The slug used on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug is one of the options offered on the quote form.
    pub fn is_known(&self) -> bool {
        KNOWN_SERVICE_TYPES.contains(&self.0.as_str())
    }

    /// Human-readable name, e.g. `Last Mile`.
    pub fn display_name(&self) -> String {
        title_case_slug(&self.0)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Capitalise every hyphen-separated word and join the words with spaces.
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
