use regex::Regex;

use crate::classify::{MatchMode, build_not_found_pattern, structured_not_found};
use crate::error::Error;

/// Not-found test for a single instance name, compiled once.
#[derive(Debug, Clone)]
pub struct NotFoundMatcher {
    instance: String,
    mode: MatchMode,
    regex: Regex,
}

impl NotFoundMatcher {
    pub fn new(instance: impl Into<String>, mode: MatchMode) -> Result<Self, Error> {
        let instance = instance.into();
        let pattern = build_not_found_pattern(&instance, mode);
        let regex = Regex::new(&pattern).map_err(|source| {
            tracing::warn!(
                instance = %instance,
                %mode,
                pattern = %pattern,
                "not-found pattern failed to compile"
            );
            Error::Pattern { pattern, source }
        })?;

        Ok(Self {
            instance,
            mode,
            regex,
        })
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn matches(&self, message: &str) -> bool {
        let matched = self.regex.is_match(message);
        tracing::debug!(
            instance = %self.instance,
            mode = %self.mode,
            matched,
            structured = false,
            "classified error message"
        );
        matched
    }

    /// Structured [`crate::CellError::InstanceNotFound`] anywhere in the source chain
    /// wins; otherwise the top-level message is matched.
    pub fn matches_error(&self, err: &(dyn std::error::Error + 'static)) -> bool {
        if let Some(instance) = structured_not_found(err) {
            let matched = instance == self.instance;
            tracing::debug!(
                instance = %self.instance,
                mode = %self.mode,
                matched,
                structured = true,
                "classified error"
            );
            return matched;
        }
        self.matches(&err.to_string())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::NotFoundMatcher;
    use crate::cell::{CellError, GatewayApiVersionMismatch};
    use crate::classify::MatchMode;
    use crate::error::Error;

    #[test]
    fn exposes_compiled_pattern() {
        let matcher = NotFoundMatcher::new("emp-inst", MatchMode::Pattern).unwrap();
        assert_eq!(matcher.pattern(), "cell(.)+(emp-inst)(.)+not found");
        assert_eq!(matcher.instance(), "emp-inst");
        assert_eq!(matcher.mode(), MatchMode::Pattern);

        let literal = NotFoundMatcher::new("a.b", MatchMode::Literal).unwrap();
        assert_eq!(literal.pattern(), r"cell(.)+(a\.b)(.)+not found");
    }

    #[test]
    fn reuses_one_compilation_across_messages() {
        let matcher = NotFoundMatcher::new("hr", MatchMode::Literal).unwrap();
        let messages = [
            ("Error from server (NotFound): cells.mesh.cellery.io \"hr\" not found", true),
            ("cell instance hr not found", true),
            ("cell instance stock not found", false),
            ("cell hr is running", false),
            ("hr cell not found", false),
        ];
        for (message, expected) in messages {
            assert_eq!(matcher.matches(message), expected, "message: {message}");
        }
    }

    #[test]
    fn compile_failure_reports_pattern() {
        let err = NotFoundMatcher::new("bad(", MatchMode::Pattern).unwrap_err();
        assert!(
            matches!(&err, Error::Pattern { pattern, .. } if pattern == "cell(.)+(bad()(.)+not found"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn structured_error_decides_before_text() {
        let matcher = NotFoundMatcher::new("emp-inst", MatchMode::Pattern).unwrap();
        assert!(matcher.matches_error(&CellError::instance_not_found("emp-inst")));
        assert!(!matcher.matches_error(&CellError::instance_not_found("stock-inst")));

        let mismatch: CellError =
            GatewayApiVersionMismatch::new("emp-inst", "emp-inst-2", "employee", "1.0.0").into();
        assert!(!matcher.matches_error(&mismatch));
    }
}
