use serde::{Deserialize, Serialize};

/// A programming language from the fixed translation catalog.
///
/// Every entry carries a canonical display name and a unique, non-empty
/// file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    CSharp,
    Cpp,
    Ruby,
    Go,
    VisualBasic,
    Php,
    Swift,
}

/// Extension used when a target language is missing from the catalog.
pub const FALLBACK_EXTENSION: &str = "txt";

/// Lowercase tokens models commonly put on the first line of a fenced block
/// as a syntax-highlighting tag.
pub const LANGUAGE_HINTS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "csharp",
    "cpp",
    "ruby",
    "go",
    "vb",
    "php",
    "swift",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All catalog entries, in display order.
    pub const ALL: [Language; 10] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::CSharp,
        Language::Cpp,
        Language::Ruby,
        Language::Go,
        Language::VisualBasic,
        Language::Php,
        Language::Swift,
    ];

    /// Canonical display name, as used inside prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Cpp => "C++",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::VisualBasic => "Visual Basic",
            Language::Php => "PHP",
            Language::Swift => "Swift",
        }
    }

    /// Canonical file extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::Cpp => "cpp",
            Language::Ruby => "rb",
            Language::Go => "go",
            Language::VisualBasic => "vb",
            Language::Php => "php",
            Language::Swift => "swift",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    /// Case-insensitive parse accepting the display name and common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            "c#" | "csharp" => Ok(Language::CSharp),
            "c++" | "cpp" => Ok(Language::Cpp),
            "ruby" => Ok(Language::Ruby),
            "go" | "golang" => Ok(Language::Go),
            "visual basic" | "visualbasic" | "vb" => Ok(Language::VisualBasic),
            "php" => Ok(Language::Php),
            "swift" => Ok(Language::Swift),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_extensions_are_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for lang in Language::ALL {
            let ext = lang.extension();
            assert!(!ext.is_empty(), "{} has an empty extension", lang);
            assert!(seen.insert(ext), "duplicate extension: {}", ext);
        }
    }

    #[test]
    fn test_parse_display_names() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PYTHON".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("c#".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("Visual Basic".parse::<Language>().unwrap(), Language::VisualBasic);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("cobol".to_string()));
    }
}
