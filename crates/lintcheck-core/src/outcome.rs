use lintcheck_types::{NOTICE_LINT_ERRORS, NOTICE_LINT_WARNINGS, Verdict};

/// What the process reports once the check run has been published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exit 0 silently.
    Clean,
    /// Exit 0 with a warning notice. The hosted runtime has no neutral exit
    /// code, so warnings never fail the job.
    Warned(String),
    /// Exit 1 with an error notice.
    Failed(String),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Clean | Outcome::Warned(_) => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

pub fn outcome_for(verdict: &Verdict) -> Outcome {
    if verdict.total_errors > 0 {
        return Outcome::Failed(NOTICE_LINT_ERRORS.to_string());
    }

    if verdict.total_warnings > 0 {
        return Outcome::Warned(NOTICE_LINT_WARNINGS.to_string());
    }

    Outcome::Clean
}

#[cfg(test)]
mod tests {
    use lintcheck_types::Conclusion;

    use super::*;

    fn verdict(warnings: u32, errors: u32) -> Verdict {
        let (conclusion, summary_lines) = crate::conclude(warnings, errors);
        Verdict {
            total_warnings: warnings,
            total_errors: errors,
            conclusion,
            summary_lines,
        }
    }

    #[test]
    fn exit_semantics() {
        assert_eq!(outcome_for(&verdict(0, 0)), Outcome::Clean);
        assert_eq!(outcome_for(&verdict(0, 0)).exit_code(), 0);

        let warned = outcome_for(&verdict(3, 0));
        assert_eq!(warned, Outcome::Warned(NOTICE_LINT_WARNINGS.to_string()));
        assert_eq!(warned.exit_code(), 0);

        let failed = outcome_for(&verdict(2, 1));
        assert_eq!(failed, Outcome::Failed(NOTICE_LINT_ERRORS.to_string()));
        assert_eq!(failed.exit_code(), 1);
    }

    #[test]
    fn outcome_agrees_with_conclusion() {
        for (w, e) in [(0, 0), (1, 0), (0, 1), (5, 5)] {
            let v = verdict(w, e);
            let expected_exit = u8::from(v.conclusion == Conclusion::Failure);
            assert_eq!(outcome_for(&v).exit_code(), expected_exit);
        }
    }
}
