//! House room and community buff contributions.
//!
//! Both sources use the same accumulation rule: a buff at upgrade level `L`
//! grants `flatBoost + flatBoostLevelBonus * (L - 1)`. Level 0 means the room
//! is not built (or the community buff is inactive).

use crate::bonus::Bonuses;
use crate::config::PlayerConfig;
use crate::data::{Buff, GameData};

fn accumulate<'a>(bonuses: &mut Bonuses, buffs: impl IntoIterator<Item = &'a Buff>, level: u32) {
    for buff in buffs {
        bonuses.add_hrid(&buff.type_hrid, buff.flat_at_level(level));
    }
}

/// Bonuses from every built house room usable in the action type.
///
/// Both the room's action-scoped buffs and its global buffs count.
pub fn house_bonuses(data: &GameData, config: &PlayerConfig, action_type: &str) -> Bonuses {
    let mut bonuses = Bonuses::zero();

    for room in data.house_room_detail_map.values() {
        let level = config.house_room_level(&room.hrid);
        if level == 0 || !room.is_usable_in(action_type) {
            continue;
        }
        accumulate(&mut bonuses, room.action_buffs.iter().chain(&room.global_buffs), level);
    }

    bonuses
}

/// Bonuses from every active community buff usable in the action type.
pub fn community_bonuses(data: &GameData, config: &PlayerConfig, action_type: &str) -> Bonuses {
    let mut bonuses = Bonuses::zero();

    for community in data.community_buff_type_detail_map.values() {
        let level = config.community_buff_level(&community.hrid);
        if level == 0 || !community.is_usable_in(action_type) {
            continue;
        }
        accumulate(&mut bonuses, [&community.buff], level);
    }

    bonuses
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::bonus::BuffType;
    use crate::data::{CommunityBuffDetail, HouseRoomDetail, hrid};

    fn data() -> GameData {
        let mut data = GameData::default();
        data.house_room_detail_map.insert(
            "/house_rooms/dairy_barn".to_string(),
            HouseRoomDetail {
                hrid: "/house_rooms/dairy_barn".to_string(),
                name: "Dairy Barn".to_string(),
                usable_in_action_type_map: BTreeMap::from([(hrid::MILKING.to_string(), true)]),
                action_buffs: vec![Buff::flat("/buff_types/efficiency", 0.015, 0.015)],
                global_buffs: vec![Buff::flat("/buff_types/wisdom", 0.0005, 0.0005)],
                ..HouseRoomDetail::default()
            },
        );
        data.community_buff_type_detail_map.insert(
            "/community_buff_types/production_efficiency".to_string(),
            CommunityBuffDetail {
                hrid: "/community_buff_types/production_efficiency".to_string(),
                name: "Production Efficiency".to_string(),
                usable_in_action_type_map: BTreeMap::from([
                    (hrid::COOKING.to_string(), true),
                    (hrid::MILKING.to_string(), false),
                ]),
                buff: Buff::flat("/buff_types/efficiency", 0.14, 0.003),
                sort_index: 0,
            },
        );
        data
    }

    #[test]
    fn house_room_accumulates_action_and_global_buffs() {
        let data = data();
        let config = PlayerConfig::new().with_house_room("/house_rooms/dairy_barn", 4);

        let bonuses = house_bonuses(&data, &config, hrid::MILKING);
        assert!((bonuses[BuffType::Efficiency] - (0.015 + 0.015 * 3.0)).abs() < 1e-12);
        assert!((bonuses[BuffType::Wisdom] - (0.0005 + 0.0005 * 3.0)).abs() < 1e-12);
    }

    #[test]
    fn unbuilt_or_unusable_rooms_contribute_nothing() {
        let data = data();
        assert!(house_bonuses(&data, &PlayerConfig::new(), hrid::MILKING).is_zero());

        let config = PlayerConfig::new().with_house_room("/house_rooms/dairy_barn", 2);
        assert!(house_bonuses(&data, &config, hrid::COOKING).is_zero());
    }

    #[test]
    fn community_buff_scales_with_level() {
        let data = data();
        let config =
            PlayerConfig::new().with_community_buff("/community_buff_types/production_efficiency", 11);

        let cooking = community_bonuses(&data, &config, hrid::COOKING);
        assert!((cooking[BuffType::Efficiency] - (0.14 + 0.003 * 10.0)).abs() < 1e-12);
        assert!(community_bonuses(&data, &config, hrid::MILKING).is_zero());
    }
}
