mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_within_bounds() {
        let viewport = Size::new(800, 600);
        let panel = Size::new(200, 100);
        assert!(OverlayPosition::new(0, 0).is_within(viewport, panel));
        assert!(OverlayPosition::new(600, 500).is_within(viewport, panel));
        assert!(!OverlayPosition::new(601, 0).is_within(viewport, panel));
        assert!(!OverlayPosition::new(0, -1).is_within(viewport, panel));
    }

    #[test]
    fn oversized_panel_only_fits_at_origin() {
        let viewport = Size::new(100, 100);
        let panel = Size::new(300, 50);
        assert!(OverlayPosition::new(0, 10).is_within(viewport, panel));
        assert!(!OverlayPosition::new(1, 10).is_within(viewport, panel));
    }

    #[test]
    fn context_id_display() {
        assert_eq!(ContextId(7).to_string(), "context-7");
    }

    #[test]
    fn position_serialization() {
        let pos = OverlayPosition::new(20, 40);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"x":20,"y":40}"#);
    }
}
