//! Keyword-triggered override rules used by the default generators.
//!
//! A rule fires when the lower-cased input text contains any of its
//! keywords, and then overwrites fields on the target record. Rules are
//! grouped; a group either stops at its first matching rule or applies
//! every matching rule in order.

/// A single (predicate, override) pair.
pub struct Rule<T> {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub apply: fn(&mut T),
}

impl<T> Rule<T> {
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Only the first matching rule in list order fires.
    FirstMatch,
    /// Every matching rule fires, in list order.
    AllMatches,
}

/// An ordered list of rules evaluated against one input field.
pub struct RuleGroup<T: 'static> {
    pub name: &'static str,
    pub mode: MatchMode,
    pub rules: &'static [Rule<T>],
}

impl<T: 'static> RuleGroup<T> {
    /// Apply the group to `target`, returning the names of the rules that fired.
    pub fn apply(&self, text: &str, target: &mut T) -> Vec<&'static str> {
        let mut fired = Vec::new();
        for rule in self.rules {
            if !rule.matches(text) {
                continue;
            }
            (rule.apply)(target);
            fired.push(rule.name);
            if self.mode == MatchMode::FirstMatch {
                break;
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_one(v: &mut Vec<u8>) {
        v.push(1);
    }
    fn set_two(v: &mut Vec<u8>) {
        v.push(2);
    }

    static RULES: &[Rule<Vec<u8>>] = &[
        Rule {
            name: "one",
            keywords: &["alpha"],
            apply: set_one,
        },
        Rule {
            name: "two",
            keywords: &["alpha", "beta"],
            apply: set_two,
        },
    ];

    #[test]
    fn test_first_match_stops() {
        let group = RuleGroup {
            name: "g",
            mode: MatchMode::FirstMatch,
            rules: RULES,
        };
        let mut target = Vec::new();
        assert_eq!(group.apply("ALPHA beta", &mut target), vec!["one"]);
        assert_eq!(target, vec![1]);
    }

    #[test]
    fn test_all_matches_apply_in_order() {
        let group = RuleGroup {
            name: "g",
            mode: MatchMode::AllMatches,
            rules: RULES,
        };
        let mut target = Vec::new();
        assert_eq!(group.apply("alpha", &mut target), vec!["one", "two"]);
        assert_eq!(target, vec![1, 2]);

        let mut untouched = Vec::new();
        assert!(group.apply("gamma", &mut untouched).is_empty());
        assert!(untouched.is_empty());
    }
}
