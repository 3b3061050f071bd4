//! Ordered rewrite rule tables
//!
//! A conversion target is an ordered list of named rules. Each rule pairs a
//! regular expression with a rewrite function and is applied as one full
//! `replace_all` pass over the buffer, so later rules see the output of earlier
//! ones. Order matters: each format's tests pin it through `rule_names`.

use regex::{Captures, Regex};

/// Rewrite function: builds the replacement text for one match.
pub type Rewrite<C> = fn(&Captures<'_>, &C) -> String;

/// A single named match rule.
pub struct RewriteRule<C> {
    name: &'static str,
    regex: Regex,
    rewrite: Rewrite<C>,
}

impl<C> RewriteRule<C> {
    /// Compile a rule. Panics on an invalid pattern, which is a programming error
    /// in a built-in table.
    pub fn new(name: &'static str, pattern: &str, rewrite: Rewrite<C>) -> Self {
        RewriteRule {
            name,
            regex: Regex::new(pattern).unwrap(),
            rewrite,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run this rule alone over `text`.
    pub fn apply(&self, text: &str, context: &C) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| (self.rewrite)(caps, context))
            .into_owned()
    }
}

/// Rules applied in insertion order.
pub struct RuleTable<C> {
    rules: Vec<RewriteRule<C>>,
}

impl<C> RuleTable<C> {
    pub fn new(rules: Vec<RewriteRule<C>>) -> Self {
        RuleTable { rules }
    }

    /// Apply every rule, each as a full pass over the previous pass's output.
    pub fn apply(&self, text: &str, context: &C) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |buffer, rule| rule.apply(&buffer, context))
    }

    /// Look up a rule by name, for running it in isolation.
    pub fn get(&self, name: &str) -> Option<&RewriteRule<C>> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
