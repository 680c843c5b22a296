use regex::Regex;

/// An ordered set of regular expressions matched against whole strings
///
/// Each pattern must match the entire candidate, not just a substring of it:
/// `".*\\.pdf"` matches `"https://example.com/a.pdf"` but `"example"` does not
/// match `"https://example.com/"`.
///
/// # Examples
///
/// ```
/// use word_crawler::url::PatternSet;
///
/// let patterns = PatternSet::new(&[".*\\.pdf".to_string()]).unwrap();
/// assert!(patterns.matches("https://example.com/report.pdf"));
/// assert!(!patterns.matches("https://example.com/report.pdf.html"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compiles every pattern, anchoring it at both ends
    ///
    /// # Returns
    ///
    /// * `Ok(PatternSet)` - All patterns compiled
    /// * `Err(regex::Error)` - The first pattern that failed to compile
    pub fn new(patterns: &[String]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(&format!("^(?:{})$", pattern)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if any pattern matches the whole candidate
    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(candidate))
    }

    /// Number of patterns in the set
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
