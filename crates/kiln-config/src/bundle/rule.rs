use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

static SCRIPTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.jsx?$").expect("static pattern"));
static STYLESHEETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.css$").expect("static pattern"));

/// File-name pattern selecting which modules a rule applies to.
///
/// Serialized as the regular expression source.
#[derive(Clone)]
pub struct FileMatcher {
    regex: Regex,
}

impl FileMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// `.js` and `.jsx` sources
    pub fn scripts() -> Self {
        Self {
            regex: SCRIPTS.clone(),
        }
    }

    /// `.css` stylesheets
    pub fn stylesheets() -> Self {
        Self {
            regex: STYLESHEETS.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }
}

impl PartialEq for FileMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FileMatcher {}

impl fmt::Debug for FileMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for FileMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        FileMatcher::new(&pattern).map_err(serde::de::Error::custom)
    }
}

/// One stage of a rule's processing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum Loader {
    /// Language-downleveling transform
    Babel {
        /// Reuse transform results between runs (OS default cache directory)
        #[serde(rename = "cacheDirectory")]
        cache_directory: bool,
    },
    /// Inject styles into the DOM at runtime
    Style,
    /// Resolve `@import` and `url()` in stylesheets
    Css,
    /// Pull styles out into standalone files, using `fallback` when a chunk
    /// cannot be extracted
    ExtractCss { fallback: Box<Loader> },
}

impl Loader {
    pub fn name(&self) -> &'static str {
        match self {
            Loader::Babel { .. } => "babel",
            Loader::Style => "style",
            Loader::Css => "css",
            Loader::ExtractCss { .. } => "extract-css",
        }
    }
}

/// A transform rule: which files, through which loaders, from where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: FileMatcher,
    pub loaders: Vec<Loader>,
    /// Only files under this directory are processed by the rule
    pub include: PathBuf,
}

impl ModuleRule {
    pub fn new(test: FileMatcher, loaders: Vec<Loader>, include: impl Into<PathBuf>) -> Self {
        Self {
            test,
            loaders,
            include: include.into(),
        }
    }

    /// Whether the bundler would route `path` through this rule.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{FileMatcher, Loader, ModuleRule};
    /// use std::path::Path;
    ///
    /// let rule = ModuleRule::new(FileMatcher::stylesheets(), vec![Loader::Css], "/app");
    /// assert!(rule.applies_to(Path::new("/app/main.css")));
    /// assert!(!rule.applies_to(Path::new("/node_modules/x/index.css")));
    /// ```
    pub fn applies_to(&self, path: &Path) -> bool {
        path.starts_with(&self.include) && self.test.is_match(path)
    }

    /// Loader names in pipeline order, e.g. `style!css`
    pub fn pipeline(&self) -> String {
        self.loaders
            .iter()
            .map(Loader::name)
            .collect::<Vec<_>>()
            .join("!")
    }
}
