//! Incremental validity checking for candidate role sequences.

use crate::error::TransitionError;
use crate::role::Role;

/// State machine that accepts one role at a time and rejects the first
/// illegal adjacent pair.
///
/// The machine starts in the sequence-initial state; the only state it
/// carries is the most recent role, since legality depends on nothing else.
/// Steps are counted from 1: the first `push` checks the opening transition,
/// and [`finish`](Self::finish) checks the closing transition into the
/// sequence-final state.
#[derive(Debug, Clone)]
pub struct SequenceValidator {
    prev: Role,
    step: usize,
}

impl SequenceValidator {
    pub fn new() -> Self {
        Self {
            prev: Role::Start,
            step: 0,
        }
    }

    /// Roles that may legally appear next. Useful for greedy constrained
    /// decoding, where the caller masks everything else before picking.
    pub fn valid_next_roles(&self) -> Vec<Role> {
        Role::PREDICTABLE
            .into_iter()
            .filter(|&role| self.prev.may_precede(role))
            .collect()
    }

    /// Whether the sequence may legally end here.
    pub fn can_finish(&self) -> bool {
        self.prev.may_precede(Role::End)
    }

    /// Number of roles accepted so far.
    pub fn len(&self) -> usize {
        self.step
    }

    pub fn is_empty(&self) -> bool {
        self.step == 0
    }

    /// Feed the next role of the candidate sequence.
    pub fn push(&mut self, role: Role) -> Result<(), TransitionError> {
        self.step += 1;
        if !self.prev.may_precede(role) {
            return Err(TransitionError::Disallowed {
                step: self.step,
                from: self.prev,
                to: role,
            });
        }
        self.prev = role;
        Ok(())
    }

    /// Check the closing transition and consume the validator.
    pub fn finish(self) -> Result<(), TransitionError> {
        if !self.prev.may_precede(Role::End) {
            return Err(TransitionError::Disallowed {
                step: self.step + 1,
                from: self.prev,
                to: Role::End,
            });
        }
        Ok(())
    }
}

impl Default for SequenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a complete candidate sequence, reporting the first illegal step.
pub fn validate_sequence<I>(roles: I) -> Result<(), TransitionError>
where
    I: IntoIterator<Item = Role>,
{
    let mut validator = SequenceValidator::new();
    for role in roles {
        validator.push(role)?;
    }
    validator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Role::*;

    #[test]
    fn test_valid_sequence() {
        // O B o I_ closes a gappy strong expression and may end.
        assert_eq!(validate_sequence([Out, Begin, GapOut, InStrong]), Ok(()));
    }

    #[test]
    fn test_gap_sequence() {
        // B b i_ I~ spells a weak continuation after a gap.
        assert_eq!(
            validate_sequence([Out, Begin, GapBegin, GapInStrong, InStrong]),
            Ok(())
        );
    }

    #[test]
    fn test_failure_step_reported() {
        // o may open gap material but not jump into a gap continuation, so
        // the fourth transition is the offender.
        assert_eq!(
            validate_sequence([Out, Begin, GapOut, GapInStrong, InStrong]),
            Err(TransitionError::Disallowed {
                step: 4,
                from: GapOut,
                to: GapInStrong,
            })
        );
    }

    #[test]
    fn test_bad_opening() {
        assert_eq!(
            validate_sequence([GapOut]),
            Err(TransitionError::Disallowed {
                step: 1,
                from: Start,
                to: GapOut,
            })
        );
    }

    #[test]
    fn test_bad_closing() {
        assert_eq!(
            validate_sequence([Out, Begin]),
            Err(TransitionError::Disallowed {
                step: 3,
                from: Begin,
                to: End,
            })
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(
            validate_sequence([]),
            Err(TransitionError::Disallowed {
                step: 1,
                from: Start,
                to: End,
            })
        );
    }

    #[test]
    fn test_valid_next_roles_at_start() {
        let validator = SequenceValidator::new();
        assert_eq!(validator.valid_next_roles(), vec![Out, Begin]);
        assert!(!validator.can_finish());
    }

    #[test]
    fn test_valid_next_roles_after_gap_begin() {
        let mut validator = SequenceValidator::new();
        validator.push(Out).unwrap();
        validator.push(Begin).unwrap();
        validator.push(GapBegin).unwrap();
        assert_eq!(validator.valid_next_roles(), vec![GapInStrong, GapInWeak]);
        assert!(!validator.can_finish());
    }

    #[test]
    fn test_can_finish_tracks_state() {
        let mut validator = SequenceValidator::new();
        validator.push(Out).unwrap();
        assert!(validator.can_finish());
        validator.push(Begin).unwrap();
        assert!(!validator.can_finish());
        validator.push(InStrong).unwrap();
        assert!(validator.can_finish());
        assert_eq!(validator.len(), 3);
        validator.finish().unwrap();
    }
}
