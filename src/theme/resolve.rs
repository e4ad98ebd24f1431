use crate::theme::model::Theme;

/// Layered lookup: `explicit ?? theme ?? fallback`.
///
/// Explicit props win over the active theme, which wins over the global token default. A miss
/// at every layer is never an error.
pub fn resolve<T>(explicit: Option<T>, theme: Option<T>, fallback: T) -> T {
    explicit.or(theme).unwrap_or(fallback)
}

/// [`resolve`] with the theme layer read through `pick`, which runs only when there is no
/// explicit value and a theme is active.
pub fn resolve_from<'t, T>(
    explicit: Option<T>,
    theme: Option<&'t Theme>,
    pick: impl FnOnce(&'t Theme) -> Option<T>,
    fallback: T,
) -> T {
    match explicit {
        Some(v) => v,
        None => theme.and_then(pick).unwrap_or(fallback),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/resolve.rs"]
mod tests;
