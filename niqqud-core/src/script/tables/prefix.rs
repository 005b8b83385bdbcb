//! Attached-prefix rules
//!
//! An ordered list of `{ letter, patterns }` rules. Patterns are regular
//! expressions anchored at the start of the pronunciation; the first one
//! that matches a non-empty prefix wins.

use regex::Regex;

use crate::error::ConfigError;
use crate::script::config::PrefixRuleConfig;

/// Compiled rule for one prefix letter
#[derive(Debug, Clone)]
pub struct PrefixRule {
    letter: char,
    name: String,
    patterns: Vec<Regex>,
}

impl PrefixRule {
    /// Compile a rule; every pattern is anchored at the start
    pub fn new(letter: char, name: impl Into<String>, patterns: &[String]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(&format!("^(?:{pattern})")).map_err(|e| ConfigError::InvalidPattern {
                    letter,
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            letter,
            name: name.into(),
            patterns,
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source patterns, without the added anchor
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .map(|re| {
                let src = re.as_str();
                src.strip_prefix("^(?:")
                    .and_then(|s| s.strip_suffix(')'))
                    .unwrap_or(src)
            })
            .collect()
    }

    /// The leading part of `pronunciation` claimed by this prefix
    pub fn match_start<'p>(&self, pronunciation: &'p str) -> Option<&'p str> {
        self.patterns
            .iter()
            .filter_map(|re| re.find(pronunciation))
            .find(|m| !m.is_empty())
            .map(|m| m.as_str())
    }
}

/// Ordered prefix rule list
#[derive(Debug, Clone, Default)]
pub struct PrefixRules {
    rules: Vec<PrefixRule>,
}

impl PrefixRules {
    /// Compile from configuration, keeping configuration order
    pub fn from_config(configs: &[PrefixRuleConfig]) -> Result<Self, ConfigError> {
        let rules = configs
            .iter()
            .map(|c| PrefixRule::new(c.letter()?, c.name.clone(), &c.patterns))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Rule for a letter, if it is a prefix letter
    pub fn rule_for(&self, letter: char) -> Option<&PrefixRule> {
        self.rules.iter().find(|r| r.letter == letter)
    }

    /// True when `letter` can be an attached prefix
    pub fn is_prefix_letter(&self, letter: char) -> bool {
        self.rule_for(letter).is_some()
    }

    /// Rules in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, PrefixRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(letter: char, patterns: &[&str]) -> PrefixRule {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        PrefixRule::new(letter, "test", &patterns).unwrap()
    }

    #[test]
    fn test_match_is_anchored() {
        let bet = rule('ב', &["bə", "be"]);
        assert_eq!(bet.match_start("bəreˈʃit"), Some("bə"));
        assert_eq!(bet.match_start("beˈjit"), Some("be"));
        assert_eq!(bet.match_start("abəra"), None);
    }

    #[test]
    fn test_first_pattern_wins() {
        let he = rule('ה', &["ha", "h"]);
        assert_eq!(he.match_start("haˈbajit"), Some("ha"));
        assert_eq!(he.match_start("hoˈlex"), Some("h"));
    }

    #[test]
    fn test_empty_match_ignored() {
        let vav = rule('ו', &["x?", "ve"]);
        assert_eq!(vav.match_start("veˈzot"), Some("ve"));
        assert_eq!(vav.match_start("uˈvajit"), None);
    }

    #[test]
    fn test_regex_patterns_allowed() {
        let mem = rule('מ', &["m[əei]"]);
        assert_eq!(mem.match_start("miˈkan"), Some("mi"));
        assert_eq!(mem.patterns(), vec!["m[əei]"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PrefixRule::new('ל', "to", &["(".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { letter: 'ל', .. }));
    }

    #[test]
    fn test_rule_lookup() {
        let configs = vec![
            PrefixRuleConfig {
                letter: "ו".into(),
                name: "and".into(),
                patterns: vec!["və".into()],
            },
            PrefixRuleConfig {
                letter: "ה".into(),
                name: "the".into(),
                patterns: vec!["ha".into()],
            },
        ];
        let rules = PrefixRules::from_config(&configs).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.is_prefix_letter('ו'));
        assert!(!rules.is_prefix_letter('ר'));
        assert_eq!(rules.rule_for('ה').map(|r| r.name()), Some("the"));
        let order: Vec<char> = rules.iter().map(|r| r.letter()).collect();
        assert_eq!(order, vec!['ו', 'ה']);
    }
}
