//! Property tests for the backlight to candela map.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use panel::CandelaLuxMap;
use proptest::prelude::*;

/// Contiguous ranges covering 0..=255, one per generated candela.
fn partition() -> impl Strategy<Value = Vec<[u32; 4]>> {
    prop::collection::vec(1u32..400, 1..40).prop_map(|cds| {
        let n = cds.len() as u32;
        let width = 256 / n;
        cds.iter()
            .enumerate()
            .map(|(i, &cd)| {
                let i = i as u32;
                let from = i * width;
                let till = if i + 1 == n { 255 } else { from + width - 1 };
                [i, from, till, cd]
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_level_maps_into_its_range(quads in partition()) {
        let map = CandelaLuxMap::from_quadruples(&quads).unwrap();
        for bl in 0..=255u8 {
            let step = map.step(bl);
            let quad = quads
                .iter()
                .find(|q| (q[1]..=q[2]).contains(&u32::from(bl)))
                .unwrap();
            prop_assert_eq!(u32::from(step.cmd_idx), quad[0]);
            prop_assert_eq!(u32::from(step.candela), quad[3]);
        }
    }

    #[test]
    fn lux_table_follows_entry_order(quads in partition()) {
        let map = CandelaLuxMap::from_quadruples(&quads).unwrap();
        let want: Vec<u16> = quads.iter().map(|q| q[3] as u16).collect();
        prop_assert_eq!(map.lux_table(), &want[..]);
    }
}
