use proptest::prelude::*;

use crate::{
    display::{self, DisplayInfo},
    flip::Flip,
    geom::{Rect, approx_eq},
    offsets::OffsetSet,
    policy::ResizePolicy,
};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -4000.0f64..4000.0,
        -4000.0f64..4000.0,
        1.0f64..3000.0,
        1.0f64..3000.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn primary_strategy() -> impl Strategy<Value = DisplayInfo> {
    (200.0f64..6000.0, 200.0f64..4000.0).prop_map(|(w, h)| {
        let full = Rect::new(0.0, 0.0, w, h);
        DisplayInfo::new(0, full, full)
    })
}

/// Percent value away from the subnormal range around zero.
fn percent() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.001f64..200.0, -200.0f64..-0.001]
}

proptest! {
    #[test]
    fn invert_round_trips(r in rect_strategy(), primary in primary_strategy()) {
        let flip = Flip::from_displays(&[primary]).unwrap();
        let back = flip.invert(&flip.invert(&r));
        prop_assert!(approx_eq(back.y, r.y, 1e-6));
        prop_assert_eq!(back.x, r.x);
        prop_assert_eq!(back.w, r.w);
        prop_assert_eq!(back.h, r.h);
    }
}

proptest! {
    #[test]
    fn ordered_offsets_map_to_positive_extent(
        usable in rect_strategy(),
        x1 in percent(),
        y1 in percent(),
        dx in 0.01f64..150.0,
        dy in 0.01f64..150.0,
    ) {
        let set = OffsetSet::new(x1, y1, x1 + dx, y1 + dy).unwrap();
        let m = set.map(&usable);
        prop_assert!(m.w > 0.0);
        prop_assert!(m.h > 0.0);
        prop_assert_eq!(m.x >= usable.x, x1 >= 0.0);
    }
}

proptest! {
    #[test]
    fn contained_window_selects_containing_display(
        fx in 0.0f64..0.5,
        fy in 0.0f64..0.5,
        fw in 0.01f64..0.5,
        fh in 0.01f64..0.5,
        target in 0usize..3,
    ) {
        let displays = [
            DisplayInfo::new(0, Rect::new(0.0, 0.0, 1440.0, 900.0), Rect::new(0.0, 0.0, 1440.0, 875.0)),
            DisplayInfo::new(1, Rect::new(1440.0, -180.0, 1920.0, 1080.0), Rect::new(1440.0, -180.0, 1920.0, 1080.0)),
            DisplayInfo::new(2, Rect::new(-2560.0, 0.0, 2560.0, 1440.0), Rect::new(-2560.0, 0.0, 2560.0, 1440.0)),
        ];
        let full = displays[target].full;
        let win = Rect::new(
            full.x + fx * full.w,
            full.y + fy * full.h,
            fw * full.w,
            fh * full.h,
        );
        let chosen = display::select(&win, &displays).map(|d| d.id);
        prop_assert_eq!(chosen, Some(target));
    }
}

proptest! {
    #[test]
    fn fixed_policy_preserves_size_and_center(mapped in rect_strategy(), cur in rect_strategy()) {
        let p = ResizePolicy::Fixed.resolve(&mapped, &cur);
        prop_assert!(!p.set_size);
        prop_assert_eq!(p.rect.w, cur.w);
        prop_assert_eq!(p.rect.h, cur.h);
        prop_assert!(approx_eq(p.rect.cx(), mapped.cx(), 1e-6));
        prop_assert!(approx_eq(p.rect.cy(), mapped.cy(), 1e-6));
    }
}
