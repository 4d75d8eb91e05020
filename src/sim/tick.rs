//! Per-frame simulation step
//!
//! One call per display refresh. Velocities are in px per frame, so there is
//! no timestep parameter.

use super::collision::{badge_contact, reflect_walls, resolve_contact};
use super::layout::Layout;
use super::state::{FieldEvent, FloatField};

/// Advance every badge by one frame.
///
/// 1. Integrate position and bounce off the container walls.
/// 2. Resolve every overlapping pair `(i, j)`, `i < j`, in index order.
/// 3. Pull badges pushed out by separation back inside (velocity untouched).
pub fn step<L: Layout + ?Sized>(field: &mut FloatField, layout: &L) {
    let bounds = layout.container_size();
    field.events.clear();
    field.frame += 1;

    for badge in &mut field.badges {
        badge.pos += badge.vel;
        let hits = reflect_walls(badge, bounds);
        if hits.any() {
            log::trace!("Badge {} bounced at ({:.1}, {:.1})", badge.id, badge.pos.x, badge.pos.y);
            for wall in hits.iter() {
                field.events.push(FieldEvent::WallBounce { id: badge.id, wall });
            }
        }
    }

    let count = field.badges.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = field.badges.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);

            if let Some(contact) = badge_contact(a, b) {
                resolve_contact(a, b, &contact);
                field.events.push(FieldEvent::Collision {
                    a: a.id,
                    b: b.id,
                    overlap: contact.overlap,
                });
            }
        }
    }

    for badge in &mut field.badges {
        badge.clamp_into(bounds);
    }

    if !field.events.is_empty() {
        log::trace!("Frame {}: {} events", field.frame, field.events.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Badge, FixedLayout, Wall, resolve_contact};
    use glam::Vec2;
    use proptest::prelude::*;

    const BADGE: Vec2 = Vec2::new(40.0, 20.0);

    fn field_of(badges: &[(f32, f32, f32, f32)]) -> FloatField {
        FloatField::from_badges(
            badges
                .iter()
                .enumerate()
                .map(|(id, &(x, y, vx, vy))| Badge::new(id, Vec2::new(x, y), Vec2::new(vx, vy), BADGE))
                .collect(),
        )
    }

    fn layout(count: usize) -> FixedLayout {
        FixedLayout::uniform(Vec2::new(400.0, 200.0), BADGE, count)
    }

    #[test]
    fn test_left_edge_example() {
        let mut field = field_of(&[(0.0, 100.0, -0.5, 0.0)]);
        step(&mut field, &layout(1));

        assert_eq!(field.badges[0].pos.x, 0.0);
        assert_eq!(field.badges[0].vel.x, 0.5);
        assert_eq!(
            field.events,
            vec![FieldEvent::WallBounce { id: 0, wall: Wall::Left }]
        );
    }

    #[test]
    fn test_corner_bounce_reports_both_walls() {
        let mut field = field_of(&[(359.5, 179.5, 1.0, 1.0)]);
        step(&mut field, &layout(1));

        assert_eq!(field.badges[0].pos, Vec2::new(360.0, 180.0));
        assert_eq!(field.badges[0].vel, Vec2::new(-1.0, -1.0));
        assert_eq!(
            field.events,
            vec![
                FieldEvent::WallBounce { id: 0, wall: Wall::Right },
                FieldEvent::WallBounce { id: 0, wall: Wall::Bottom },
            ]
        );
    }

    #[test]
    fn test_free_flight() {
        let mut field = field_of(&[(100.0, 50.0, 1.0, -0.5)]);
        step(&mut field, &layout(1));
        assert_eq!(field.badges[0].pos, Vec2::new(101.0, 49.5));
        assert!(field.events.is_empty());
        assert_eq!(field.frame, 1);
    }

    #[test]
    fn test_head_on_collision_swaps() {
        // Centers 30 apart after integration, threshold 40
        let mut field = field_of(&[(100.0, 50.0, 0.5, 0.0), (131.0, 50.0, -0.5, 0.0)]);
        step(&mut field, &layout(2));

        let (a, b) = (&field.badges[0], &field.badges[1]);
        assert_eq!(a.vel, Vec2::new(-0.5, 0.0));
        assert_eq!(b.vel, Vec2::new(0.5, 0.0));
        assert!((a.center().distance(b.center()) - 40.0).abs() < 1e-4);
        assert_eq!(field.collisions().count(), 1);
    }

    #[test]
    fn test_separation_near_wall_stays_inside() {
        // Separation pushes badge 0 through the left wall; it must be pulled back
        let mut field = field_of(&[(1.0, 50.0, 0.0, 0.0), (5.0, 50.0, 0.0, 0.0)]);
        let layout = layout(2);
        step(&mut field, &layout);

        for badge in &field.badges {
            assert!(badge.is_inside(layout.container));
        }
        assert!(field.badges[1].pos.x > field.badges[0].pos.x);
    }

    #[test]
    fn test_container_shrink_pulls_badges_in() {
        let mut field = field_of(&[(350.0, 170.0, 0.0, 0.0)]);
        let mut layout = layout(1);
        layout.resize(Vec2::new(200.0, 100.0));
        step(&mut field, &layout);
        assert_eq!(field.badges[0].pos, Vec2::new(160.0, 80.0));
    }

    #[test]
    fn test_long_run_stays_inside() {
        let layout = FixedLayout::new(
            Vec2::new(500.0, 260.0),
            vec![
                Vec2::new(72.0, 28.0),
                Vec2::new(96.0, 28.0),
                Vec2::new(54.0, 28.0),
                Vec2::new(110.0, 28.0),
                Vec2::new(66.0, 28.0),
                Vec2::new(80.0, 28.0),
            ],
        );
        let settings = Settings {
            float_speed: 6.0,
            ..Default::default()
        };
        let mut field = FloatField::spawn(&layout, &settings, 7);
        let mut collisions = 0;
        for _ in 0..5_000 {
            step(&mut field, &layout);
            collisions += field.collisions().count();
            for badge in &field.badges {
                assert!(badge.is_inside(layout.container));
            }
        }
        assert!(collisions > 0);
        assert_eq!(field.frame, 5_000);
    }

    fn arb_badge(id: usize) -> impl Strategy<Value = Badge> {
        (0.0f32..360.0, 0.0f32..180.0, -3.0f32..3.0, -3.0f32..3.0)
            .prop_map(move |(x, y, vx, vy)| Badge::new(id, Vec2::new(x, y), Vec2::new(vx, vy), BADGE))
    }

    proptest! {
        #[test]
        fn prop_positions_stay_in_bounds(
            badges in prop::collection::vec(arb_badge(0), 0..12),
            frames in 1usize..40,
        ) {
            let badges = badges
                .into_iter()
                .enumerate()
                .map(|(id, b)| Badge { id, ..b })
                .collect::<Vec<_>>();
            let layout = layout(badges.len());
            let mut field = FloatField::from_badges(badges);
            for _ in 0..frames {
                step(&mut field, &layout);
                for badge in &field.badges {
                    prop_assert!(badge.is_inside(layout.container));
                }
            }
        }

        #[test]
        fn prop_response_never_pulls_pair_together(a in arb_badge(0), b in arb_badge(1)) {
            let bounds = Vec2::new(400.0, 200.0);
            let (mut a, mut b) = (a, b);
            if let Some(contact) = crate::sim::badge_contact(&a, &b) {
                let before = a.center().distance(b.center());
                let (va, vb) = (a.vel, b.vel);

                resolve_contact(&mut a, &mut b, &contact);
                a.clamp_into(bounds);
                b.clamp_into(bounds);

                prop_assert!(a.center().distance(b.center()) >= before - 1e-3);
                prop_assert_eq!(a.vel, vb);
                prop_assert_eq!(b.vel, va);
            }
        }
    }
}
