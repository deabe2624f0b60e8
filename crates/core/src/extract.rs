use crate::catalog::LANGUAGE_HINTS;

const FENCE: &str = "```";

/// Extract clean code from a model response, removing markdown and explanations.
///
/// Responses without any fence marker are treated as raw code and returned
/// trimmed. Otherwise the first non-empty fenced block wins; later blocks are
/// discarded. If every fenced block is empty, returns an empty string, which
/// callers must treat as extraction failure.
pub fn extract_code(response: &str) -> String {
    if !response.contains(FENCE) {
        return response.trim().to_string();
    }

    let segments: Vec<&str> = response.split(FENCE).collect();

    // Odd-indexed segments sit between fence markers.
    for segment in segments.iter().skip(1).step_by(2) {
        let block = segment.trim();
        if block.is_empty() {
            continue;
        }
        return strip_language_tag(block);
    }

    String::new()
}

/// Drop a leading syntax-highlighting tag line if present.
fn strip_language_tag(block: &str) -> String {
    let mut lines = block.lines();

    if let Some(first) = lines.next() {
        let lowered = first.to_lowercase();
        if LANGUAGE_HINTS.iter().any(|hint| lowered.contains(hint)) {
            return lines.collect::<Vec<_>>().join("\n").trim().to_string();
        }
    }

    block.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fence_returns_trimmed_input() {
        let response = "  fmt.Println(1)\n";
        assert_eq!(extract_code(response), "fmt.Println(1)");
    }

    #[test]
    fn test_language_tag_line_is_dropped() {
        let response = "```go\nfmt.Println(1)\n```";
        assert_eq!(extract_code(response), "fmt.Println(1)");
    }

    #[test]
    fn test_untagged_fence_is_kept_whole() {
        let response = "```\nputs 'hi'\n```";
        assert_eq!(extract_code(response), "puts 'hi'");
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let response = "```Python\nprint(1)\n```";
        assert_eq!(extract_code(response), "print(1)");
    }

    #[test]
    fn test_surrounding_prose_is_discarded() {
        let response = "Here is the translation:\n```go\nfmt.Println(1)\n```\nLet me know!";
        assert_eq!(extract_code(response), "fmt.Println(1)");
    }

    #[test]
    fn test_first_non_empty_block_wins() {
        let response = "```go\nfirst()\n```\nAnd an alternative:\n```go\nsecond()\n```";
        assert_eq!(extract_code(response), "first()");
    }

    #[test]
    fn test_empty_block_is_skipped_for_the_next_one() {
        let response = "```\n   \n```\n```go\nreal()\n```";
        assert_eq!(extract_code(response), "real()");
    }

    #[test]
    fn test_all_blocks_empty_returns_empty_string() {
        let response = "Nothing to see.\n```\n\n```\n```\n   \n```";
        assert_eq!(extract_code(response), "");
    }

    #[test]
    fn test_multiline_block_preserves_interior() {
        let response = "```csharp\nclass A\n{\n    void M() {}\n}\n```";
        assert_eq!(extract_code(response), "class A\n{\n    void M() {}\n}");
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(extract_code(""), "");
        assert_eq!(extract_code("   "), "");
    }
}
