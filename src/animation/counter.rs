/// How a counting number is rendered as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// Fixed decimals, no grouping (`1234.5`).
    Plain,
    /// Fixed decimals with en-US thousands separators (`1,234.5`).
    #[default]
    Grouped,
    /// One-decimal `K`/`M`/`B` suffixes above a thousand (`1.2K`).
    Compact,
}

/// Counter value at eased progress `value`: `target * value`.
pub fn counter_value(target: f64, value: f64) -> f64 {
    target * value
}

/// Format `n` in `style` with `decimals` fraction digits. `Compact` ignores `decimals`.
pub fn format_number(n: f64, decimals: usize, style: NumberStyle) -> String {
    match style {
        NumberStyle::Plain => fixed(n, decimals),
        NumberStyle::Grouped => group_thousands(&fixed(n, decimals)),
        NumberStyle::Compact => format_compact(n),
    }
}

/// `1_500` → `1.5K`, `2_000_000` → `2.0M`; values below a thousand are rounded to integers.
pub fn format_compact(n: f64) -> String {
    const STEPS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];
    for (scale, suffix) in STEPS {
        if n >= scale {
            return format!("{:.1}{suffix}", n / scale);
        }
    }
    fixed(n, 0)
}

fn fixed(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return "0".to_owned();
    }
    if decimals == 0 {
        // `{:.0}` rounds half to even; counters round half away from zero.
        let r = n.round();
        return format!("{}", if r == 0.0 { 0.0 } else { r });
    }
    format!("{n:.decimals$}")
}

fn group_thousands(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = format!("{sign}{grouped}");
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/counter.rs"]
mod tests;
