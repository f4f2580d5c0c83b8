//! Address usage classification.
//!
//! Maps addresses to well-known usage labels by evaluating an ordered
//! rule table per address family. Rules are plain data records matched
//! against the canonical text rendering of the address; the first
//! matching rule wins, and each table ends in a catch-all so evaluation
//! always yields exactly one label.

mod v4;
mod v6;

pub use v4::IPV4_RULES;
pub use v6::IPV6_RULES;

use std::net::{Ipv4Addr, Ipv6Addr};

/// Pattern of a usage rule, checked against canonical address text.
#[derive(Debug, Clone, Copy)]
pub enum UsagePattern {
    /// Text starts with the given prefix
    Prefix(&'static str),
    /// Text starts with any of the given prefixes
    OneOf(&'static [&'static str]),
    /// Matches everything; used as the final default rule
    CatchAll,
}

impl UsagePattern {
    /// Check if the canonical address text matches this pattern
    pub fn matches(&self, text: &str) -> bool {
        match self {
            UsagePattern::Prefix(prefix) => text.starts_with(prefix),
            UsagePattern::OneOf(prefixes) => prefixes.iter().any(|p| text.starts_with(p)),
            UsagePattern::CatchAll => true,
        }
    }
}

/// A single classification rule: pattern plus usage label.
#[derive(Debug, Clone, Copy)]
pub struct UsageRule {
    pub pattern: UsagePattern,
    pub label: &'static str,
}

/// First-match-wins evaluation over an ordered rule table.
///
/// Table order is part of the contract: later entries may overlap
/// earlier ones, and the earlier entry must win.
fn first_label(rules: &[UsageRule], text: &str) -> &'static str {
    for rule in rules {
        if rule.pattern.matches(text) {
            return rule.label;
        }
    }
    // Tables end in CatchAll; unreachable for well-formed tables
    "Unclassified"
}

/// Classify an IPv4 address by its well-known usage.
pub fn ipv4_common_uses(ip: &Ipv4Addr) -> Vec<String> {
    vec![first_label(IPV4_RULES, &ip.to_string()).to_string()]
}

/// Classify an IPv6 address by its well-known usage.
pub fn ipv6_common_uses(ip: &Ipv6Addr) -> Vec<String> {
    vec![first_label(IPV6_RULES, &ip.to_string()).to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_pattern() {
        let pattern = UsagePattern::Prefix("192.168.");
        assert!(pattern.matches("192.168.1.1"));
        assert!(!pattern.matches("192.169.1.1"));
    }

    #[test]
    fn test_one_of_pattern() {
        let pattern = UsagePattern::OneOf(&["fc00:", "fd00:"]);
        assert!(pattern.matches("fc00::1"));
        assert!(pattern.matches("fd00::1"));
        assert!(!pattern.matches("fe80::1"));
    }

    #[test]
    fn test_catch_all_pattern() {
        assert!(UsagePattern::CatchAll.matches("anything"));
        assert!(UsagePattern::CatchAll.matches(""));
    }

    #[test]
    fn test_first_match_wins() {
        let rules: &[UsageRule] = &[
            UsageRule {
                pattern: UsagePattern::Prefix("10."),
                label: "first",
            },
            UsageRule {
                pattern: UsagePattern::Prefix("10.0."),
                label: "second",
            },
            UsageRule {
                pattern: UsagePattern::CatchAll,
                label: "default",
            },
        ];

        // Both prefix rules match; the earlier one must win
        assert_eq!(first_label(rules, "10.0.0.1"), "first");
        assert_eq!(first_label(rules, "11.0.0.1"), "default");
    }

    #[test]
    fn test_tables_end_in_catch_all() {
        assert!(matches!(
            IPV4_RULES.last().unwrap().pattern,
            UsagePattern::CatchAll
        ));
        assert!(matches!(
            IPV6_RULES.last().unwrap().pattern,
            UsagePattern::CatchAll
        ));
    }

    #[test]
    fn test_exactly_one_label() {
        assert_eq!(ipv4_common_uses(&"8.8.8.8".parse().unwrap()).len(), 1);
        assert_eq!(ipv6_common_uses(&"2607:f8b0::1".parse().unwrap()).len(), 1);
    }
}
