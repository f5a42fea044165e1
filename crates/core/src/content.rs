//! Read-only reference tables: room label pools and encounter stat blocks.

use serde::Serialize;

use crate::types::{Environment, RoomKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Encounter {
    pub name: &'static str,
    pub creatures: &'static str,
    pub armor_class: u8,
    pub hit_points: u16,
    pub challenge: &'static str,
    pub xp: u32,
    pub tactics: &'static str,
}

type LabelTable = [&'static [&'static str]; 7];

const DUNGEON_LABELS: LabelTable = [
    &["Entrance Hall", "Gateway", "Vestibule"],
    &["Guard Room", "Arena", "Barracks"],
    &["Vault", "Treasury", "Hoard Room"],
    &["Trapped Hall", "Gauntlet", "Dead End"],
    &["Throne Room", "Inner Sanctum", "Lair"],
    &["Side Chamber", "Storeroom", "Alcove"],
    &["Library", "Ritual Chamber", "Observatory"],
];

const WILDERNESS_LABELS: LabelTable = [
    &["Camp", "Clearing", "Trail Head"],
    &["Ambush Point", "Den", "Hunting Ground"],
    &["Hidden Cache", "Ruins", "Shrine"],
    &["Quicksand", "Snare Field", "Deadfall"],
    &["Sacred Grove", "Hilltop", "Ancient Circle"],
    &["Meadow", "Stream", "Thicket"],
    &["Stone Circle", "Fairy Ring", "Old Well"],
];

const URBAN_LABELS: LabelTable = [
    &["Main Door", "Lobby", "Foyer"],
    &["Guard Post", "Tavern Brawl", "Back Alley"],
    &["Vault", "Safe Room", "Noble Chamber"],
    &["Trapped Corridor", "Rigged Door", "Alarm Room"],
    &["Master Suite", "War Room", "Grand Hall"],
    &["Side Room", "Storage Closet", "Courtyard"],
    &["Study", "Archive", "Gallery"],
];

const SPECIAL_LABELS: LabelTable = [
    &["Cavern Mouth", "Lava Tube", "Obsidian Gate"],
    &["Magma Chamber", "Fire Pit", "Scorched Arena"],
    &["Treasure Hoard", "Crystal Vault", "Gold Mountain"],
    &["Unstable Floor", "Gas Vent", "Lava Flow"],
    &["Dragon's Perch", "Central Lair", "Throne of Flame"],
    &["Cooling Chamber", "Obsidian Hall", "Ash Room"],
    &["Rune Chamber", "Elemental Seal", "Ancient Forge"],
];

/// Label pool for one room kind; indexed in `RoomKind::ALL` order.
pub fn room_labels(environment: Environment, kind: RoomKind) -> &'static [&'static str] {
    let table = match environment {
        Environment::Dungeon => &DUNGEON_LABELS,
        Environment::Wilderness => &WILDERNESS_LABELS,
        Environment::Urban => &URBAN_LABELS,
        Environment::Special => &SPECIAL_LABELS,
    };
    let slot = match kind {
        RoomKind::Entrance => 0,
        RoomKind::Combat => 1,
        RoomKind::Treasure => 2,
        RoomKind::Trap => 3,
        RoomKind::Boss => 4,
        RoomKind::Empty => 5,
        RoomKind::Puzzle => 6,
    };
    table[slot]
}

const fn encounter(
    name: &'static str,
    creatures: &'static str,
    armor_class: u8,
    hit_points: u16,
    challenge: &'static str,
    xp: u32,
    tactics: &'static str,
) -> Encounter {
    Encounter { name, creatures, armor_class, hit_points, challenge, xp, tactics }
}

static DUNGEON_ENCOUNTERS: [Encounter; 8] = [
    encounter(
        "Skeletons",
        "4-6 Skeletons",
        13,
        13,
        "1/4",
        50,
        "Attack in groups. Focus weakest-looking PC. Immune to exhaustion, poison.",
    ),
    encounter(
        "Zombies",
        "3-4 Zombies",
        8,
        22,
        "1/4",
        50,
        "Slow but relentless. Undead Fortitude: DC 5+dmg Con save to stay at 1 HP.",
    ),
    encounter(
        "Goblins",
        "5-8 Goblins",
        15,
        7,
        "1/4",
        50,
        "Use Nimble Escape to Disengage/Hide as bonus action. Fight dirty, set traps.",
    ),
    encounter(
        "Bugbear",
        "1-2 Bugbears",
        16,
        27,
        "1",
        200,
        "Ambush predator. Surprise Attack: +2d6 damage on first hit. Uses stealth.",
    ),
    encounter(
        "Mimic",
        "1 Mimic",
        12,
        58,
        "2",
        450,
        "Disguises as a chest/door. Adhesive: grapples on hit. Bite deals 1d8+3 piercing.",
    ),
    encounter(
        "Wraith",
        "1 Wraith",
        13,
        67,
        "5",
        1800,
        "Incorporeal. Life Drain reduces max HP. Resistant to nonmagical attacks. Create specters from kills.",
    ),
    encounter(
        "Gelatinous Cube",
        "1 Gelatinous Cube",
        6,
        84,
        "2",
        450,
        "Nearly invisible (DC 15 Perception). Engulfs creatures on hit. 3d6 acid per turn inside.",
    ),
    encounter(
        "Giant Spiders",
        "2-3 Giant Spiders",
        14,
        26,
        "1",
        200,
        "Web attacks (restrained). Climb walls. Bite is venomous: 2d8 poison, DC 11 Con save.",
    ),
];

static WILDERNESS_ENCOUNTERS: [Encounter; 6] = [
    encounter(
        "Wolves",
        "4-6 Wolves",
        13,
        11,
        "1/4",
        50,
        "Pack Tactics: advantage when ally is adjacent. Bite can knock prone (DC 11 Str save).",
    ),
    encounter(
        "Owlbear",
        "1 Owlbear",
        13,
        59,
        "3",
        700,
        "Charge and multiattack (beak + claws). Very territorial. Won't flee from its nest.",
    ),
    encounter(
        "Dire Wolves",
        "2-3 Dire Wolves",
        14,
        37,
        "1",
        200,
        "Pack Tactics. Knockdown bite (DC 13 Str save). Work with intelligent masters.",
    ),
    encounter(
        "Twig Blights",
        "6-8 Twig Blights",
        13,
        4,
        "1/8",
        25,
        "Ambush from undergrowth. Vulnerable to fire. Weakness: low HP, easily dispatched in groups.",
    ),
    encounter(
        "Will-o'-Wisps",
        "1-2 Will-o'-Wisps",
        19,
        22,
        "2",
        450,
        "Lure into hazards. Invisible at will. Immune to many conditions. Shock deals 2d8 lightning.",
    ),
    encounter(
        "Green Hag",
        "1 Green Hag",
        17,
        82,
        "3",
        700,
        "Illusory Appearance, Invisible Passage. Mimicry to lure. Claws deal 2d8+4 slashing.",
    ),
];

static URBAN_ENCOUNTERS: [Encounter; 6] = [
    encounter(
        "Bandits",
        "4-6 Bandits",
        12,
        11,
        "1/8",
        25,
        "Fight with improvised weapons. Surrender at half HP. Have a leader (Bandit Captain).",
    ),
    encounter(
        "Bandit Captain",
        "1 Bandit Captain + 2 Bandits",
        15,
        65,
        "2",
        450,
        "Multiattack (3 attacks). Parry reaction (+2 AC). Commands others to focus fire.",
    ),
    encounter(
        "Thugs",
        "3-4 Thugs",
        11,
        32,
        "1/2",
        100,
        "Pack Tactics. Multiattack. Use heavy crossbows from cover, then close to melee.",
    ),
    encounter(
        "Guards",
        "4-6 Guards",
        16,
        11,
        "1/8",
        25,
        "Fight in formation with shields. Call for reinforcements. Won't pursue beyond their post.",
    ),
    encounter(
        "Animated Armor",
        "2 Animated Armor",
        18,
        33,
        "1",
        200,
        "Immune to poison, psychic. Multiattack. Don't speak or flee. Activate on trigger.",
    ),
    encounter(
        "Spy",
        "1 Spy",
        12,
        27,
        "1",
        200,
        "Sneak Attack 2d6. Cunning Action. May prefer to flee and report rather than fight.",
    ),
];

static SPECIAL_ENCOUNTERS: [Encounter; 4] = [
    encounter(
        "Fire Elementals",
        "1-2 Fire Elementals",
        13,
        102,
        "5",
        1800,
        "Ignites flammables on touch. Water Susceptibility: 1 cold dmg per 5 ft water. Fire Form: pass through narrow spaces.",
    ),
    encounter(
        "Young Red Dragon",
        "1 Young Red Dragon",
        18,
        178,
        "10",
        5900,
        "Breath Weapon (12d6 fire, 30-ft cone, DC 17 Dex). Multiattack (bite + 2 claws). Flies.",
    ),
    encounter(
        "Kobold Swarm",
        "8-12 Kobolds",
        12,
        5,
        "1/8",
        25,
        "Pack Tactics with adjacent allies. Sling attacks from distance. Set traps. Sunlight Sensitivity.",
    ),
    encounter(
        "Hell Hounds",
        "2-3 Hell Hounds",
        15,
        45,
        "3",
        700,
        "Fire Breath (6d6, 15-ft cone, DC 12 Dex). Immune to fire. Pack Tactics.",
    ),
];

pub fn encounters(environment: Environment) -> &'static [Encounter] {
    match environment {
        Environment::Dungeon => &DUNGEON_ENCOUNTERS,
        Environment::Wilderness => &WILDERNESS_ENCOUNTERS,
        Environment::Urban => &URBAN_ENCOUNTERS,
        Environment::Special => &SPECIAL_ENCOUNTERS,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_environment_has_three_labels_per_room_kind() {
        for environment in Environment::ALL {
            for kind in RoomKind::ALL {
                let labels = room_labels(environment, kind);
                assert_eq!(labels.len(), 3, "{environment:?}/{kind:?} label pool size");
                let unique: BTreeSet<_> = labels.iter().collect();
                assert_eq!(unique.len(), 3, "{environment:?}/{kind:?} has duplicate labels");
            }
        }
    }

    #[test]
    fn encounter_catalog_sizes_match_environment() {
        assert_eq!(encounters(Environment::Dungeon).len(), 8);
        assert_eq!(encounters(Environment::Wilderness).len(), 6);
        assert_eq!(encounters(Environment::Urban).len(), 6);
        assert_eq!(encounters(Environment::Special).len(), 4);
    }

    #[test]
    fn encounter_names_are_unique_within_each_catalog() {
        for environment in Environment::ALL {
            let names: BTreeSet<_> =
                encounters(environment).iter().map(|encounter| encounter.name).collect();
            assert_eq!(names.len(), encounters(environment).len());
        }
    }

    #[test]
    fn dungeon_boss_labels_differ_from_wilderness() {
        assert_eq!(room_labels(Environment::Dungeon, RoomKind::Boss)[0], "Throne Room");
        assert_eq!(room_labels(Environment::Wilderness, RoomKind::Boss)[0], "Sacred Grove");
    }
}
