#![forbid(unsafe_code)]

//! Position indicators.
//!
//! Indicators hold no state of their own: they are rebuilt from the panel
//! count and the active index on every render, and a press on indicator `i`
//! is exactly `Carousel::press(i)`.

/// Default indicator glyph.
pub const DEFAULT_INDICATOR_ICON: &str = "●";

/// Glyphs used for indicators.
///
/// A single glyph is used for every indicator. A list assigns glyphs by
/// position; positions past the end of the list reuse the first glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorIcons {
    icons: Vec<String>,
}

impl Default for IndicatorIcons {
    fn default() -> Self {
        Self::single(DEFAULT_INDICATOR_ICON)
    }
}

impl IndicatorIcons {
    /// One glyph for every indicator.
    #[must_use]
    pub fn single(icon: impl Into<String>) -> Self {
        Self {
            icons: vec![icon.into()],
        }
    }

    /// Per-position glyphs. An empty list falls back to the default glyph.
    #[must_use]
    pub fn per_panel<I, S>(icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let icons: Vec<String> = icons.into_iter().map(Into::into).collect();
        if icons.is_empty() {
            return Self::default();
        }
        Self { icons }
    }

    /// Glyph for position `index`.
    #[must_use]
    pub fn icon_for(&self, index: usize) -> &str {
        self.icons
            .get(index)
            .or_else(|| self.icons.first())
            .map_or(DEFAULT_INDICATOR_ICON, String::as_str)
    }
}

/// One indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    /// Panel this indicator jumps to.
    pub index: usize,
    /// Whether it marks the active panel.
    pub active: bool,
    /// Accessible label, `"{base} {index + 1}"`.
    pub label: String,
    /// Glyph to draw.
    pub icon: String,
}

/// The indicator row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicators {
    /// Number of indicators (the panel count).
    pub length: usize,
    /// Active panel index.
    pub active: usize,
    /// One view per panel.
    pub items: Vec<IndicatorView>,
}

impl Indicators {
    /// Build the row for `length` panels.
    #[must_use]
    pub fn build(length: usize, active: usize, label: &str, icons: &IndicatorIcons) -> Self {
        let items = (0..length)
            .map(|i| IndicatorView {
                index: i,
                active: i == active,
                label: format!("{label} {}", i + 1),
                icon: icons.icon_for(i).to_owned(),
            })
            .collect();
        Self {
            length,
            active,
            items,
        }
    }

    /// The indicator marking the active panel, if it is in range.
    #[must_use]
    pub fn active_item(&self) -> Option<&IndicatorView> {
        self.items.get(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        let row = Indicators::build(3, 1, "carousel indicator", &IndicatorIcons::default());
        let labels: Vec<_> = row.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["carousel indicator 1", "carousel indicator 2", "carousel indicator 3"]
        );
    }

    #[test]
    fn exactly_the_active_item_is_marked() {
        let row = Indicators::build(4, 2, "x", &IndicatorIcons::default());
        let active: Vec<_> = row.items.iter().filter(|i| i.active).map(|i| i.index).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(row.active_item().map(|i| i.index), Some(2));
    }

    #[test]
    fn out_of_range_active_marks_nothing() {
        let row = Indicators::build(3, 10, "x", &IndicatorIcons::default());
        assert!(row.items.iter().all(|i| !i.active));
        assert!(row.active_item().is_none());
    }

    #[test]
    fn short_icon_list_reuses_first_icon() {
        let icons = IndicatorIcons::per_panel(["a", "b"]);
        let row = Indicators::build(4, 0, "x", &icons);
        let glyphs: Vec<_> = row.items.iter().map(|i| i.icon.as_str()).collect();
        assert_eq!(glyphs, vec!["a", "b", "a", "a"]);
    }

    #[test]
    fn empty_icon_list_falls_back_to_default() {
        let icons = IndicatorIcons::per_panel(Vec::<String>::new());
        assert_eq!(icons.icon_for(5), DEFAULT_INDICATOR_ICON);
    }

    #[test]
    fn empty_carousel_has_no_indicators() {
        let row = Indicators::build(0, 0, "x", &IndicatorIcons::default());
        assert_eq!(row.length, 0);
        assert!(row.items.is_empty());
    }
}
