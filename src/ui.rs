//! Style selector backing the mode control at the UI boundary.

use crate::draw::{StrokeStyle, UnknownStyle};

/// Selection state for the stroke style control.
///
/// The option list is populated from [`StrokeStyle::ALL`] once at
/// startup; labels exist only at this boundary, the rest of the pipeline
/// works with the typed style. The current value selects the curve
/// generator for every subsequently drawn segment.
#[derive(Debug, Clone, Copy)]
pub struct StyleSelector {
    current: StrokeStyle,
}

impl StyleSelector {
    /// Creates a selector with `initial` selected.
    pub fn new(initial: StrokeStyle) -> Self {
        Self { current: initial }
    }

    /// Display labels for the selector options, in registry order.
    pub fn options(&self) -> impl Iterator<Item = &'static str> {
        StrokeStyle::ALL.into_iter().map(StrokeStyle::label)
    }

    /// The currently selected style.
    pub fn current(&self) -> StrokeStyle {
        self.current
    }

    /// Selects a style directly.
    pub fn select(&mut self, style: StrokeStyle) {
        self.current = style;
    }

    /// Selects by display label, as driven by the UI control.
    ///
    /// Fails only for labels the registry never produced, which a
    /// control populated via [`options`](Self::options) cannot emit.
    pub fn select_label(&mut self, label: &str) -> Result<StrokeStyle, UnknownStyle> {
        let style = label.parse::<StrokeStyle>()?;
        self.current = style;
        Ok(style)
    }
}

impl Default for StyleSelector {
    fn default() -> Self {
        Self::new(StrokeStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_registry_order() {
        let selector = StyleSelector::default();
        let labels: Vec<_> = selector.options().collect();
        assert_eq!(labels, vec!["line", "arc", "wobble", "swirl", "super-swirl"]);
    }

    #[test]
    fn select_label_updates_current() {
        let mut selector = StyleSelector::default();
        assert_eq!(selector.select_label("swirl"), Ok(StrokeStyle::Swirl));
        assert_eq!(selector.current(), StrokeStyle::Swirl);
    }

    #[test]
    fn select_label_rejects_unknown_and_keeps_current() {
        let mut selector = StyleSelector::new(StrokeStyle::Wobble);
        assert!(selector.select_label("zigzag").is_err());
        assert_eq!(selector.current(), StrokeStyle::Wobble);
    }
}
