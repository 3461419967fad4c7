//! Factory whose themes can be swapped after they were handed out.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

use super::kind::ThemeKind;
use super::theme::{build_theme, Theme};
use crate::registry::WeakRegistry;
use crate::slot::Slot;

/// Shared handle to a theme that the issuing factory may replace.
pub type ThemeSlot = Slot<Rc<dyn Theme>>;

/// Hands out [`ThemeSlot`]s and can rewrite all of them at once.
///
/// Holders read the current theme through the slot; after
/// [`ReplaceableThemeFactory::replace_theme`] they see the new one on their
/// next read. There is no notification.
///
/// # Example
///
/// ```rust
/// use factory_patterns::ReplaceableThemeFactory;
///
/// let mut factory = ReplaceableThemeFactory::new();
/// let magic_theme = factory.create_theme(true);
/// assert_eq!(magic_theme.get().background_color(), "dark gray");
///
/// factory.replace_theme(false);
/// assert_eq!(magic_theme.get().background_color(), "white");
/// ```
#[derive(Debug, Default)]
pub struct ReplaceableThemeFactory {
    slots: WeakRegistry<RefCell<Rc<dyn Theme>>>,
}

impl ReplaceableThemeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a theme, wraps it in a slot and records the slot.
    pub fn create_theme(&mut self, dark: bool) -> ThemeSlot {
        let kind = ThemeKind::from_dark(dark);
        let slot = Slot::new(build_theme(kind));
        self.slots.register(slot.cell());
        debug!("replaceable factory issued {kind} theme slot (#{})", self.slots.len());
        slot
    }

    /// Issues a slot holding a theme of the kind reported by [`ThemeKind::detect`].
    pub fn create_preferred_theme(&mut self) -> ThemeSlot {
        self.create_theme(ThemeKind::detect().is_dark())
    }

    /// Puts a fresh theme of the requested kind into every live slot.
    ///
    /// Slots dropped by all holders are skipped. Returns the number of
    /// slots rewritten.
    pub fn replace_theme(&mut self, dark: bool) -> usize {
        let kind = ThemeKind::from_dark(dark);
        let mut replaced = 0;
        for cell in self.slots.live() {
            let slot = Slot::from_cell(cell);
            let previous = slot.set(build_theme(kind));
            trace!("slot {} -> {kind}", previous.kind());
            replaced += 1;
        }
        debug!(
            "replaced {replaced} of {} issued slots with {kind} themes",
            self.slots.len()
        );
        replaced
    }

    /// Number of issued slots still held somewhere.
    pub fn live_count(&self) -> usize {
        self.slots.live_count()
    }

    /// Forgets slots that have been dropped, returning how many were removed.
    pub fn prune(&mut self) -> usize {
        self.slots.prune()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_replace_swaps_contents() {
        let mut factory = ReplaceableThemeFactory::new();
        let slot = factory.create_theme(true);
        assert_eq!(slot.get().background_color(), "dark gray");

        assert_eq!(factory.replace_theme(false), 1);
        assert_eq!(slot.get().background_color(), "white");
        assert_eq!(slot.get().text_color(), "black");
    }

    #[test]
    fn test_all_holders_observe_replacement() {
        let mut factory = ReplaceableThemeFactory::new();
        let slot = factory.create_theme(false);
        let other_holder = slot.clone();

        factory.replace_theme(true);
        assert_eq!(other_holder.get().kind(), ThemeKind::Dark);
        assert!(slot.ptr_eq(&other_holder));
    }

    #[test]
    fn test_replace_installs_fresh_theme() {
        let mut factory = ReplaceableThemeFactory::new();
        let slot = factory.create_theme(true);
        let before = slot.get();

        factory.replace_theme(true);
        let after = slot.get();
        assert_eq!(after.kind(), ThemeKind::Dark);
        assert!(!Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_replace_while_holder_keeps_current_theme() {
        let mut factory = ReplaceableThemeFactory::new();
        let slot = factory.create_theme(true);
        let current = slot.get();

        assert_eq!(factory.replace_theme(false), 1);
        assert_eq!(current.background_color(), "dark gray");
        assert_eq!(slot.get().background_color(), "white");
    }

    #[test]
    fn test_dropped_slots_are_skipped() {
        let mut factory = ReplaceableThemeFactory::new();
        let kept = factory.create_theme(true);
        let dropped = factory.create_theme(true);
        let weak = dropped.downgrade();
        drop(dropped);

        assert_eq!(factory.replace_theme(false), 1);
        assert!(weak.upgrade().is_none());
        assert_eq!(kept.get().kind(), ThemeKind::Light);
        assert_eq!(factory.live_count(), 1);
    }

    #[test]
    fn test_dropped_slots_do_not_accumulate() {
        let mut factory = ReplaceableThemeFactory::new();
        let kept = factory.create_theme(false);
        for _ in 0..10_000 {
            drop(factory.create_theme(true));
        }

        assert!(factory.slots.len() <= 16);
        assert_eq!(factory.replace_theme(true), 1);
        assert_eq!(kept.get().kind(), ThemeKind::Dark);
    }

    #[test]
    fn test_replace_without_slots() {
        let mut factory = ReplaceableThemeFactory::new();
        assert_eq!(factory.replace_theme(true), 0);
    }

    #[test]
    fn test_slot_keeps_original_until_replaced() {
        let mut factory = ReplaceableThemeFactory::new();
        let slot = factory.create_theme(false);
        assert_eq!(slot.get().kind(), ThemeKind::Light);
        assert_eq!(slot.get().background_color(), "white");
    }

    #[test]
    fn test_prune() {
        let mut factory = ReplaceableThemeFactory::new();
        let _kept = factory.create_theme(true);
        drop(factory.create_theme(false));

        assert_eq!(factory.prune(), 1);
        assert_eq!(factory.live_count(), 1);
    }

    #[test]
    #[serial]
    fn test_create_preferred_theme_follows_detector() {
        crate::theme::set_theme_detector(|| ThemeKind::Dark);
        let mut factory = ReplaceableThemeFactory::new();
        let slot = factory.create_preferred_theme();
        assert_eq!(slot.get().kind(), ThemeKind::Dark);
        crate::theme::set_theme_detector(|| ThemeKind::Light);
    }
}
