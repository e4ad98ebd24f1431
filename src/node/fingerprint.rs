use xxhash_rust::xxh3::Xxh3;

use crate::node::model::{NodeKind, Style, StyleValue, TransformOp, VisualNode};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit digest of a node tree.
///
/// Floats are hashed by bit pattern, so two trees share a fingerprint only when every value is
/// bit-identical. Used to check determinism and to count distinct frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint(node: &VisualNode) -> NodeFingerprint {
    let mut h = StableHasher::new();
    write_node(&mut h, node);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> NodeFingerprint {
        let v = self.inner.digest128();
        NodeFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &VisualNode) {
    match &node.kind {
        NodeKind::Container => h.write_u8(0),
        NodeKind::Text => h.write_u8(1),
        NodeKind::Image { src } => {
            h.write_u8(2);
            h.write_str(src);
        }
        NodeKind::Video { src } => {
            h.write_u8(3);
            h.write_str(src);
        }
    }

    write_style(h, &node.style);

    match &node.text {
        None => h.write_u8(0),
        Some(t) => {
            h.write_u8(1);
            h.write_str(t);
        }
    }

    h.write_u32(node.children.len() as u32);
    for child in &node.children {
        write_node(h, child);
    }
}

fn write_style(h: &mut StableHasher, style: &Style) {
    h.write_u32(style.len() as u32);
    for (key, value) in style.iter() {
        h.write_str(key);
        write_value(h, value);
    }
}

fn write_value(h: &mut StableHasher, v: &StyleValue) {
    match v {
        StyleValue::Number(n) => {
            h.write_u8(0);
            h.write_f64(*n);
        }
        StyleValue::Px(n) => {
            h.write_u8(1);
            h.write_f64(*n);
        }
        StyleValue::Percent(n) => {
            h.write_u8(2);
            h.write_f64(*n);
        }
        StyleValue::Keyword(s) => {
            h.write_u8(3);
            h.write_str(s);
        }
        StyleValue::Transform(ops) => {
            h.write_u8(4);
            h.write_u32(ops.len() as u32);
            for op in ops {
                match op {
                    TransformOp::Translate(d) => {
                        h.write_u8(0);
                        h.write_f64(d.x);
                        h.write_f64(d.y);
                    }
                    TransformOp::Scale(s) => {
                        h.write_u8(1);
                        h.write_f64(*s);
                    }
                }
            }
        }
        StyleValue::Inset(i) => {
            h.write_u8(5);
            for side in [i.top, i.right, i.bottom, i.left] {
                h.write_f64(side);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/node/fingerprint.rs"]
mod tests;
