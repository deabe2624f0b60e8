use crate::catalog::Language;
use crate::job::TranslationJob;

/// Token a role can emit to end the exchange early.
pub const TERMINATION_SENTINEL: &str = "TERMINATE";

/// Build the task prompt handed to the translator for one file.
pub fn translation_task(job: &TranslationJob) -> String {
    format!(
        "Translate the following {source} code to {target}.

File: {path}

IMPORTANT INSTRUCTIONS:
1. Maintain exact functionality of the original code
2. Use modern {target} idioms and best practices
3. Preserve all comments and documentation
4. Maintain proper error handling
5. Keep the same code structure and organization
6. Ensure proper type safety where applicable
7. Handle edge cases appropriately

SOURCE CODE:
{source_code}

Provide only the translated code without explanations, wrapped in triple backticks \
with the appropriate language identifier.",
        source = job.source_language,
        target = job.target_language,
        path = job.relative_path.display(),
        source_code = job.source_text,
    )
}

/// System message for the translator role. Languages are fixed for a whole
/// run, so the preambles take them directly rather than a per-file job.
pub fn translator_preamble(source: Language, target: Language) -> String {
    format!(
        "You are an expert programmer specializing in translating from {source} to {target}.
Follow these strict guidelines:
1. Maintain exact functionality and behavior
2. Use idiomatic {target} patterns and modern best practices
3. Preserve all comments and documentation
4. Implement proper error handling
5. Use appropriate type annotations where applicable
6. Follow {target} naming conventions strictly
7. Optimize for readability and maintainability
8. Preserve the original code structure",
    )
}

/// System message for the critic role.
pub fn critic_preamble(target: Language) -> String {
    format!(
        "You are a senior code review expert specializing in {target}.
Thoroughly verify that the translated code:
1. Maintains identical functionality to the source
2. Uses idiomatic {target} patterns correctly
3. Follows all {target} best practices and conventions
4. Includes proper error handling
5. Has appropriate type safety
6. Maintains code organization and structure
7. Preserves all comments and documentation
8. Is optimized for performance where possible
Provide specific, actionable feedback if any improvements are needed, or reply \
with {sentinel} if the translation needs no changes.",
        sentinel = TERMINATION_SENTINEL,
    )
}

/// Wrap the translator's latest output for the critic's review turn.
pub fn reflection_message(translation: &str) -> String {
    format!(
        "Review the following code translation for correctness and best practices:\n\n{translation}"
    )
}

/// Wrap the critic's feedback for the translator's revision turn.
pub fn revision_message(feedback: &str) -> String {
    format!(
        "A reviewer left the following feedback on your translation. Apply it and \
output the complete revised translation, wrapped in triple backticks:\n\n{feedback}"
    )
}

/// Whether a message carries the termination sentinel.
pub fn is_terminated(message: &str) -> bool {
    message.contains(TERMINATION_SENTINEL)
}

/// Remove sentinel occurrences so they never leak into output files.
pub fn strip_sentinel(message: &str) -> String {
    message.replace(TERMINATION_SENTINEL, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Language;
    use crate::job::TranslationJob;

    fn job() -> TranslationJob {
        TranslationJob::new(
            "pkg/util.py",
            "print(1)\n",
            Language::Python,
            Language::Go,
        )
    }

    #[test]
    fn test_task_embeds_languages_path_and_source() {
        let task = translation_task(&job());
        assert!(task.contains("Translate the following Python code to Go."));
        assert!(task.contains("File: pkg/util.py"));
        assert!(task.contains("print(1)"));
        assert!(task.contains("7. Handle edge cases appropriately"));
    }

    #[test]
    fn test_preambles_name_the_languages() {
        let preamble = translator_preamble(Language::Python, Language::Go);
        assert!(preamble.contains("from Python to Go"));
        assert!(critic_preamble(Language::Go).contains("specializing in Go"));
    }

    #[test]
    fn test_reflection_message_embeds_translation() {
        let msg = reflection_message("fmt.Println(1)");
        assert!(msg.starts_with("Review the following code translation"));
        assert!(msg.ends_with("fmt.Println(1)"));
    }

    #[test]
    fn test_termination_detection() {
        assert!(is_terminated("Looks great. TERMINATE"));
        assert!(!is_terminated("Needs more work."));
    }

    #[test]
    fn test_sentinel_is_stripped() {
        assert_eq!(strip_sentinel("fmt.Println(1)\nTERMINATE"), "fmt.Println(1)");
    }
}
