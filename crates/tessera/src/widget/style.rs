//! Style lookup for widgets.
//!
//! Stylesheet parsing and cascading belong to the host. A widget only asks a
//! [`StyleResolver`] for individual property values, identified by a
//! [`StyleSelector`] built from its type name, style class and pseudo-class.
//! [`StyleRules`] is a small in-memory resolver for hosts without a
//! stylesheet engine.

use parking_lot::RwLock;

use super::geometry::Padding;

/// Gap between a widget's sub-elements, as an integer.
pub const SPACING: &str = "spacing";
/// Icon size in pixels, as an integer.
pub const ICON_SIZE: &str = "icon-size";
/// Resource uri of a decorative marker image.
pub const MARKER_IMAGE: &str = "marker-image";
/// Widget padding.
pub const PADDING: &str = "padding";

/// Identifies the element a style lookup is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSelector {
    /// Short widget type name, e.g. `"ComboBox"`.
    pub type_name: &'static str,
    /// Style class, if any.
    pub class: Option<String>,
    /// Pseudo-class, if any (e.g. `"focus"`).
    pub pseudo_class: Option<String>,
}

impl StyleSelector {
    /// Selector matching only the type name.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            class: None,
            pseudo_class: None,
        }
    }
}

/// A resolved style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Whole number.
    Integer(i32),
    /// Resource uri of an image.
    Image(String),
    /// Box padding.
    Padding(Padding),
}

/// Resolves style properties for widgets.
pub trait StyleResolver: Send + Sync {
    /// Look up `property` for the element described by `selector`.
    fn lookup(&self, selector: &StyleSelector, property: &str) -> Option<StyleValue>;

    /// Look up an integer property, falling back to `default`.
    ///
    /// Negative values are rejected in favour of the default.
    fn integer(&self, selector: &StyleSelector, property: &str, default: u32) -> u32 {
        match self.lookup(selector, property) {
            Some(StyleValue::Integer(value)) => u32::try_from(value).unwrap_or(default),
            _ => default,
        }
    }

    /// Look up an image uri property.
    fn image(&self, selector: &StyleSelector, property: &str) -> Option<String> {
        match self.lookup(selector, property) {
            Some(StyleValue::Image(uri)) => Some(uri),
            _ => None,
        }
    }

    /// Look up a padding property.
    fn padding(&self, selector: &StyleSelector, property: &str) -> Option<Padding> {
        match self.lookup(selector, property) {
            Some(StyleValue::Padding(padding)) => Some(padding),
            _ => None,
        }
    }
}

/// One `selector { property: value }` declaration.
#[derive(Debug, Clone)]
pub struct StyleRule {
    type_name: Option<String>,
    class: Option<String>,
    pseudo_class: Option<String>,
    property: String,
    value: StyleValue,
}

impl StyleRule {
    /// A rule for `property` that applies to every element.
    pub fn new(property: impl Into<String>, value: StyleValue) -> Self {
        Self {
            type_name: None,
            class: None,
            pseudo_class: None,
            property: property.into(),
            value,
        }
    }

    /// Restrict the rule to a widget type.
    pub fn for_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Restrict the rule to a style class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Restrict the rule to a pseudo-class.
    pub fn with_pseudo_class(mut self, pseudo_class: impl Into<String>) -> Self {
        self.pseudo_class = Some(pseudo_class.into());
        self
    }

    /// Number of constrained selector parts, or `None` if it does not match.
    fn specificity(&self, selector: &StyleSelector, property: &str) -> Option<usize> {
        if self.property != property {
            return None;
        }

        let mut specificity = 0;
        if let Some(type_name) = &self.type_name {
            if type_name != selector.type_name {
                return None;
            }
            specificity += 1;
        }
        if let Some(class) = &self.class {
            if selector.class.as_ref() != Some(class) {
                return None;
            }
            specificity += 1;
        }
        if let Some(pseudo_class) = &self.pseudo_class {
            if selector.pseudo_class.as_ref() != Some(pseudo_class) {
                return None;
            }
            specificity += 1;
        }
        Some(specificity)
    }
}

/// An in-memory, ordered rule list.
///
/// The most specific matching rule wins; among equally specific rules the
/// one added last wins.
#[derive(Debug, Default)]
pub struct StyleRules {
    rules: RwLock<Vec<StyleRule>>,
}

impl StyleRules {
    /// Create an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule using builder pattern.
    pub fn with_rule(self, rule: StyleRule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Add a rule.
    pub fn add_rule(&self, rule: StyleRule) {
        self.rules.write().push(rule);
    }

    /// Remove every rule.
    pub fn clear(&self) {
        self.rules.write().clear();
    }
}

impl StyleResolver for StyleRules {
    fn lookup(&self, selector: &StyleSelector, property: &str) -> Option<StyleValue> {
        let rules = self.rules.read();
        let mut best: Option<(usize, &StyleRule)> = None;
        for rule in rules.iter() {
            if let Some(specificity) = rule.specificity(selector, property)
                && best.is_none_or(|(current, _)| specificity >= current)
            {
                best = Some((specificity, rule));
            }
        }
        best.map(|(_, rule)| rule.value.clone())
    }
}
