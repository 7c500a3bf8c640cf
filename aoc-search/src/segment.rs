//! Counting the ways to split a string into vocabulary entries

use crate::error::SearchError;

/// A set of non-empty patterns, checked once and reused for many targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    patterns: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicates
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidInput` if any pattern is empty, since an
    /// empty piece would allow infinitely many segmentations.
    pub fn new<I, S>(patterns: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.iter().any(String::is_empty) {
            return Err(SearchError::InvalidInput(
                "vocabulary contains an empty pattern".to_string(),
            ));
        }
        patterns.sort_unstable();
        patterns.dedup();
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of ordered ways to write `target` as a concatenation of patterns
    ///
    /// `ways[i]` counts the segmentations of the first `i` bytes; each pattern
    /// that ends at `i` contributes `ways[i - len]`. The empty target has
    /// exactly one segmentation.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Overflow` when the count does not fit in a `u64`.
    pub fn count(&self, target: &str) -> Result<u64, SearchError> {
        let target = target.as_bytes();
        let mut ways = vec![0u64; target.len() + 1];
        ways[0] = 1;

        for end in 1..=target.len() {
            let prefix = &target[..end];
            let mut total = 0u64;
            for pattern in &self.patterns {
                let pattern = pattern.as_bytes();
                if prefix.ends_with(pattern) {
                    total = total.checked_add(ways[end - pattern.len()]).ok_or_else(|| {
                        SearchError::Overflow(format!(
                            "segmentation count of the first {end} bytes exceeds u64"
                        ))
                    })?;
                }
            }
            ways[end] = total;
        }

        Ok(ways[target.len()])
    }

    /// Whether `target` has at least one segmentation
    pub fn can_build(&self, target: &str) -> Result<bool, SearchError> {
        Ok(self.count(target)? > 0)
    }
}

/// One-shot form of [`Vocabulary::count`]
///
/// # Example
///
/// ```
/// use aoc_search::count_segmentations;
///
/// assert_eq!(count_segmentations("ab", ["a", "ab", "b"]).unwrap(), 2);
/// assert_eq!(count_segmentations("abc", ["a", "ab", "b"]).unwrap(), 0);
/// ```
pub fn count_segmentations<I, S>(target: &str, vocabulary: I) -> Result<u64, SearchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Vocabulary::new(vocabulary)?.count(target)
}

/// One-shot form of [`Vocabulary::can_build`]
pub fn can_segment<I, S>(target: &str, vocabulary: I) -> Result<bool, SearchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Vocabulary::new(vocabulary)?.can_build(target)
}
