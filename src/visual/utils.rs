// ============================================================================
// EASING FUNCTIONS for smooth animations
// ============================================================================

use bevy::math::{Rect, Vec2};
use bevy::ui::{ComputedNode, UiGlobalTransform};

/// Ease-out cubic: fast at start, decelerates at end
/// Good for "arriving" animations - the button visibly leaves at once
pub fn ease_out_cubic(t: f32) -> f32 {
    let x = 1.0 - t;
    1.0 - x * x * x
}

// ============================================================================
// LAYOUT MEASUREMENTS - Bevy UI reports physical pixels, the widget thinks in logical ones
// ============================================================================

/// Logical size of a laid-out node, `None` until layout has run
pub fn logical_size(node: &ComputedNode) -> Option<Vec2> {
    to_logical_size(node.size(), node.inverse_scale_factor())
}

/// Logical rectangle of a laid-out node (top-left origin, y down)
pub fn logical_rect(node: &ComputedNode, transform: &UiGlobalTransform) -> Option<Rect> {
    to_logical_rect(
        node.size(),
        transform.translation,
        node.inverse_scale_factor(),
    )
}

fn to_logical_size(physical_size: Vec2, inverse_scale_factor: f32) -> Option<Vec2> {
    let size = physical_size * inverse_scale_factor;
    (size.x > 0.0 && size.y > 0.0).then_some(size)
}

fn to_logical_rect(
    physical_size: Vec2,
    physical_center: Vec2,
    inverse_scale_factor: f32,
) -> Option<Rect> {
    let size = to_logical_size(physical_size, inverse_scale_factor)?;
    Some(Rect::from_center_size(
        physical_center * inverse_scale_factor,
        size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_unlaid_node_has_no_size() {
        assert_eq!(to_logical_size(Vec2::ZERO, 1.0), None);
        assert_eq!(to_logical_size(Vec2::new(80.0, 0.0), 1.0), None);
    }

    #[test]
    fn test_logical_rect_on_hidpi() {
        // 2x display: 120x80 physical centered at (360, 300)
        let rect = to_logical_rect(Vec2::new(120.0, 80.0), Vec2::new(360.0, 300.0), 0.5)
            .expect("node has a size");

        assert_eq!(rect.min, Vec2::new(150.0, 130.0));
        assert_eq!(rect.width(), 60.0);
        assert_eq!(rect.height(), 40.0);
    }
}
