use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::domain::entities::Tag;
use crate::domain::search::{TagSuggestion, TagSuggestionProvider};

/// A service that performs fuzzy searching using the Skim algorithm.
#[derive(Clone)]
pub struct FuzzySearcher {
    matcher: Arc<SkimMatcherV2>,
}

impl Default for FuzzySearcher {
    fn default() -> Self {
        Self {
            matcher: Arc::new(SkimMatcherV2::default().ignore_case()),
        }
    }
}

impl FuzzySearcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self, choice: &str, pattern: &str) -> Option<i64> {
        self.matcher.fuzzy_match(choice, pattern)
    }
}

/// Suggests tags from a fixed vocabulary for partially typed input.
pub struct FuzzyTagSuggester {
    vocabulary: Vec<Tag>,
    searcher: FuzzySearcher,
}

impl FuzzyTagSuggester {
    /// Creates a suggester over the given tags; blank and repeated entries are dropped.
    #[must_use]
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<Tag> = Vec::new();
        for tag in vocabulary.into_iter().filter_map(|s| Tag::parse(s.as_ref())) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self {
            vocabulary: tags,
            searcher: FuzzySearcher::new(),
        }
    }
}

impl TagSuggestionProvider for FuzzyTagSuggester {
    fn suggest(&self, input: &str) -> Vec<TagSuggestion> {
        let pattern = input.trim();
        if pattern.is_empty() {
            return self
                .vocabulary
                .iter()
                .map(|tag| TagSuggestion {
                    tag: tag.clone(),
                    score: 0,
                })
                .collect();
        }

        let mut results: Vec<TagSuggestion> = self
            .vocabulary
            .iter()
            .filter_map(|tag| {
                self.searcher
                    .score(tag.as_str(), pattern)
                    .map(|score| TagSuggestion {
                        tag: tag.clone(),
                        score,
                    })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.tag.cmp(&b.tag)));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester() -> FuzzyTagSuggester {
        FuzzyTagSuggester::new([
            "abstract",
            "geometric",
            "minimal",
            "colorful",
            "typography",
            "vintage",
            "nature",
            "pop art",
        ])
    }

    #[test]
    fn test_prefix_ranks_first() {
        let results = suggester().suggest("geo");
        assert_eq!(results[0].tag.as_str(), "geometric");
    }

    #[test]
    fn test_case_insensitive() {
        let results = suggester().suggest("VINT");
        assert_eq!(results[0].tag.as_str(), "vintage");
    }

    #[test]
    fn test_no_match() {
        assert!(suggester().suggest("xyzzy").is_empty());
    }

    #[test]
    fn test_empty_input_lists_vocabulary_in_order() {
        let results = suggester().suggest("  ");
        assert_eq!(results.len(), 8);
        assert_eq!(results[0].tag.as_str(), "abstract");
        assert_eq!(results[7].tag.as_str(), "pop art");
    }

    #[test]
    fn test_vocabulary_is_normalized_and_deduplicated() {
        let suggester = FuzzyTagSuggester::new(["Retro", "retro", " ", "wave"]);
        assert_eq!(suggester.suggest("").len(), 2);
    }
}
