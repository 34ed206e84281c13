//! Circular hit-testing
//!
//! Every entity exposes a center point and a hitbox radius; two entities
//! collide iff the distance between their centers is strictly less than
//! the sum of their radii. Touching circles do not count.

use glam::Vec2;

/// Positioned-circular capability shared by all collidable entities
pub trait Hitbox {
    fn pos(&self) -> Vec2;
    fn hitbox_radius(&self) -> f32;
}

/// Circle overlap test, strict inequality. No side effects.
#[inline]
pub fn collided<A: Hitbox + ?Sized, B: Hitbox + ?Sized>(a: &A, b: &B) -> bool {
    a.pos().distance(b.pos()) < a.hitbox_radius() + b.hitbox_radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Circle {
        pos: Vec2,
        radius: f32,
    }

    impl Hitbox for Circle {
        fn pos(&self) -> Vec2 {
            self.pos
        }
        fn hitbox_radius(&self) -> f32 {
            self.radius
        }
    }

    fn circle(x: f32, y: f32, radius: f32) -> Circle {
        Circle {
            pos: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_overlapping_circles_collide() {
        let a = circle(0.0, 0.0, 10.0);
        let b = circle(15.0, 0.0, 10.0);
        assert!(collided(&a, &b));
        assert!(collided(&b, &a));
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        // Distance exactly equals the radius sum
        let a = circle(0.0, 0.0, 10.0);
        let b = circle(25.0, 0.0, 15.0);
        assert!(!collided(&a, &b));
    }

    #[test]
    fn test_distant_circles_do_not_collide() {
        let a = circle(0.0, 0.0, 10.0);
        let b = circle(100.0, 100.0, 10.0);
        assert!(!collided(&a, &b));
    }

    #[test]
    fn test_concentric_circles_collide() {
        let a = circle(50.0, 50.0, 5.0);
        let b = circle(50.0, 50.0, 1.0);
        assert!(collided(&a, &b));
    }

    proptest! {
        /// collided == (d < r1 + r2), away from the float boundary
        #[test]
        fn prop_matches_distance_rule(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            r1 in 0.0f32..100.0,
            r2 in 0.0f32..100.0,
        ) {
            let a = circle(ax, ay, r1);
            let b = circle(bx, by, r2);
            let d = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
            // Skip the knife edge where two sqrt formulations may disagree
            if (d - (r1 + r2)).abs() > 1e-3 {
                prop_assert_eq!(collided(&a, &b), d < r1 + r2);
            }
        }

        /// The test is symmetric in its arguments
        #[test]
        fn prop_symmetric(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            r1 in 0.0f32..100.0,
            r2 in 0.0f32..100.0,
        ) {
            let a = circle(ax, ay, r1);
            let b = circle(bx, by, r2);
            prop_assert_eq!(collided(&a, &b), collided(&b, &a));
        }
    }
}
