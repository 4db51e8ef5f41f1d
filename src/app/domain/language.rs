use serde::{Deserialize, Serialize};

/// The fixed set of languages the converter accepts.
///
/// This is the lookup table between user-facing tags and syntect syntax
/// tokens. Parsing is fail-closed: a tag outside this set never reaches the
/// highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    Python,
    Java,
    JavaScript,
    C,
    Cpp,
    Html,
    Css,
    Php,
    Ruby,
}

impl Language {
    /// Parse a language tag as shown in the selector. Case-insensitive;
    /// "cpp" is accepted as an alias for "c++".
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.to_ascii_lowercase().as_str() {
            "python" => Some(Self::Python),
            "java" => Some(Self::Java),
            "javascript" => Some(Self::JavaScript),
            "c" => Some(Self::C),
            "c++" | "cpp" => Some(Self::Cpp),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "php" => Some(Self::Php),
            "ruby" => Some(Self::Ruby),
            _ => None,
        }
    }

    /// Map a file extension to a language, for auto-selecting the language
    /// when a source file is opened.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_ascii_lowercase().as_str() {
            "py" | "pyw" => Some(Self::Python),
            "java" => Some(Self::Java),
            "js" | "jsx" | "mjs" => Some(Self::JavaScript),
            "c" | "h" => Some(Self::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(Self::Cpp),
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            "php" => Some(Self::Php),
            "rb" => Some(Self::Ruby),
            _ => None,
        }
    }

    /// The tag shown in the language selector.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::C => "c",
            Self::Cpp => "c++",
            Self::Html => "html",
            Self::Css => "css",
            Self::Php => "php",
            Self::Ruby => "ruby",
        }
    }

    /// Token used to look up the syntect syntax definition.
    pub fn syntect_token(&self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Java => "java",
            Self::JavaScript => "js",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Html => "html",
            Self::Css => "css",
            Self::Php => "php",
            Self::Ruby => "rb",
        }
    }

    /// Get all supported languages, in selector order.
    pub fn all() -> &'static [Language] {
        &[
            Self::Python,
            Self::Java,
            Self::JavaScript,
            Self::C,
            Self::Cpp,
            Self::Html,
            Self::Css,
            Self::Php,
            Self::Ruby,
        ]
    }
}
