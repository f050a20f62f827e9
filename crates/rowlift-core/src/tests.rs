#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::geometry::*;
    use std::sync::Arc;
    use web_time::{Duration, Instant};

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 30.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 70.0)));
    }

    #[test]
    fn test_rect_centered_at() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        let moved = rect.centered_at(100.0, 50.0);

        assert_eq!(moved, Rect::new(80.0, 40.0, 40.0, 20.0));
        assert_eq!(moved.center_y(), 50.0);
    }

    #[test]
    fn test_transform_scales_about_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        let t = Transform::scale(1.1, 1.1);
        let out = t.apply_to_rect(r);

        assert!((out.w - 110.0).abs() < 0.001);
        assert!((out.x + 5.0).abs() < 0.001);
        assert!(Transform::identity().apply_to_rect(r) == r);
    }

    #[test]
    fn test_interpolate_rect_and_transform() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 20.0, 30.0, 10.0);
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid, Rect::new(5.0, 10.0, 20.0, 10.0));

        let lifted = Transform::scale(1.1, 1.1);
        let back = lifted.interpolate(&Transform::identity(), 1.0);
        assert!(back.is_identity());
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!((easing.interpolate(0.0)).abs() < 0.001);
            assert!((easing.interpolate(1.0) - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        let clock = Arc::new(ManualClock::new(t0));
        set_clock(clock.clone());

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        assert!(a.is_animating());

        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update();
        assert!(!cont);
        assert!(!a.is_animating());
        assert!((*a.get() - 10.0).abs() < 0.001);

        // Idle values report no further frames needed.
        assert!(!a.update());
    }

    #[test]
    fn test_snap_to_skips_animation() {
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::default());
        a.snap_to(7.0);
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 7.0);
    }

    #[test]
    fn test_row_error_message() {
        let err = crate::error::RowError::IndexOutOfBounds { index: 9, len: 3 };
        assert_eq!(err.to_string(), "row index 9 out of bounds (len 3)");
    }
}
