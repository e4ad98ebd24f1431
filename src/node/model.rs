use std::collections::BTreeMap;

use crate::{
    animation::motion::Inset,
    foundation::core::{Affine, Vec2},
};

/// One element of the frame description handed to the host rasterizer.
///
/// Trees are built fresh for every frame and never mutated after [`crate::Evaluator`] returns
/// them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualNode {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NodeKind {
    /// Block box laying out its children.
    Container,
    /// Inline run of text.
    Text,
    /// Host-resolved asset; `src` is opaque to this crate.
    Image { src: String },
    /// Host-decoded video, played in step with the composition frame.
    Video { src: String },
}

impl VisualNode {
    pub fn container(style: Style) -> Self {
        Self {
            kind: NodeKind::Container,
            style,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>, style: Style) -> Self {
        Self {
            kind: NodeKind::Text,
            style,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn image(src: impl Into<String>, style: Style) -> Self {
        Self {
            kind: NodeKind::Image { src: src.into() },
            style,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn video(src: impl Into<String>, style: Style) -> Self {
        Self {
            kind: NodeKind::Video { src: src.into() },
            style,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first, pre-order concatenation of every text run in the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(t) = &self.text {
            out.push_str(t);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Number of nodes in the subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Computed style: property name to value, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, StyleValue>);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StyleValue {
    /// Unitless number (opacity, flex, font weight, line height, z-index).
    Number(f64),
    /// Length in pixels.
    Px(f64),
    /// Percentage of the containing box.
    Percent(f64),
    /// Any other CSS token: colors, gradients, shadows, alignment keywords, paddings.
    Keyword(String),
    /// Transform list, applied left to right.
    Transform(Vec<TransformOp>),
    /// Clip inset in percent.
    Inset(Inset),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TransformOp {
    Translate(Vec2),
    Scale(f64),
}

impl TransformOp {
    pub fn to_affine(self) -> Affine {
        match self {
            Self::Translate(v) => Affine::translate(v),
            Self::Scale(s) => Affine::scale(s),
        }
    }
}

/// Compose a transform list into one affine, CSS order (the first op is outermost).
pub fn transform_to_affine(ops: &[TransformOp]) -> Affine {
    ops.iter().fold(Affine::IDENTITY, |acc, op| acc * op.to_affine())
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.remove(key)
    }

    pub fn set(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn num(self, key: impl Into<String>, v: f64) -> Self {
        self.set(key, StyleValue::Number(v))
    }

    pub fn px(self, key: impl Into<String>, v: f64) -> Self {
        self.set(key, StyleValue::Px(v))
    }

    pub fn pct(self, key: impl Into<String>, v: f64) -> Self {
        self.set(key, StyleValue::Percent(v))
    }

    pub fn kw(self, key: impl Into<String>, v: impl Into<String>) -> Self {
        self.set(key, StyleValue::Keyword(v.into()))
    }

    /// Set `key` only when `v` is present.
    pub fn kw_opt(self, key: impl Into<String>, v: Option<impl Into<String>>) -> Self {
        match v {
            Some(v) => self.kw(key, v),
            None => self,
        }
    }

    /// Set `transform`, skipping identity-only lists.
    pub fn transform(self, ops: Vec<TransformOp>) -> Self {
        let identity = ops.iter().all(|op| match op {
            TransformOp::Translate(v) => *v == Vec2::ZERO,
            TransformOp::Scale(s) => *s == 1.0,
        });
        if identity {
            return self;
        }
        self.set("transform", StyleValue::Transform(ops))
    }

    /// Overlay `other` on top of `self`; keys present in both take `other`'s value.
    pub fn merge(mut self, other: &Style) -> Self {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
        self
    }

    /// Numeric payload of `key` for `Number`, `Px` and `Percent` values.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            StyleValue::Number(v) | StyleValue::Px(v) | StyleValue::Percent(v) => Some(*v),
            _ => None,
        }
    }

    /// String payload of `key` for `Keyword` values.
    pub fn keyword(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            StyleValue::Keyword(s) => Some(s),
            _ => None,
        }
    }
}

impl FromIterator<(String, StyleValue)> for Style {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/node/model.rs"]
mod tests;
