use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_CATEGORY: &str = "general";

/// Country and category filters as they travel to the upstream API.
///
/// Values are plain strings on purpose: whatever the caller supplied is
/// forwarded as-is, and the fixed lists below only drive the UI and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineQuery {
    pub country: String,
    pub category: String,
}

impl HeadlineQuery {
    /// Builds a query from optional request parameters, falling back to
    /// `us` / `general` independently. Empty strings count as absent.
    pub fn from_params(country: Option<String>, category: Option<String>) -> Self {
        Self {
            country: country
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            category: category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

impl Default for HeadlineQuery {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

impl fmt::Display for HeadlineQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.country, self.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Capitalized form used for buttons and terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

/// Regional editions offered by the country dropdown and the CLI. The
/// upstream API accepts more codes than these; requests are never checked
/// against this list.
pub const COUNTRIES: [Country; 14] = [
    Country { code: "us", name: "United States" },
    Country { code: "ae", name: "United Arab Emirates" },
    Country { code: "ar", name: "Argentina" },
    Country { code: "au", name: "Australia" },
    Country { code: "ca", name: "Canada" },
    Country { code: "cn", name: "China" },
    Country { code: "de", name: "Germany" },
    Country { code: "fr", name: "France" },
    Country { code: "gb", name: "United Kingdom" },
    Country { code: "in", name: "India" },
    Country { code: "jp", name: "Japan" },
    Country { code: "ru", name: "Russia" },
    Country { code: "sa", name: "Saudi Arabia" },
    Country { code: "za", name: "South Africa" },
];

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|c| c.code == code).map(|c| c.name)
}
