//! Battle-wide invariants checked over randomly painted armies.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use paintbattle_sim::core::components::UnitId;
use paintbattle_sim::core::enums::BattlePhase;
use paintbattle_sim::core::state::BattleSnapshot;
use paintbattle_sim::core::types::TeamColor;
use paintbattle_sim::{BattleEngine, SimConfig};

const PALETTE: [&str; 3] = ["#FF0000", "#0000FF", "#00FF00"];

const MAX_TICKS: u64 = 50_000;

fn army() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((10.0f64..790.0, 10.0f64..590.0), 1..6)
}

/// Spawn every army with its own palette color, start the battle and run it.
fn run_battle(armies: &[Vec<(f64, f64)>]) -> (BattleEngine, Vec<BattleSnapshot>) {
    let mut engine = BattleEngine::new(SimConfig::default());
    for (team, units) in armies.iter().enumerate() {
        for &(x, y) in units {
            engine
                .spawn_unit(x, y, TeamColor::from(PALETTE[team]))
                .unwrap();
        }
    }
    engine.start_battle().unwrap();

    let mut snapshots = Vec::new();
    for _ in 0..MAX_TICKS {
        let snap = engine.tick();
        let done = snap.phase != BattlePhase::Battle;
        snapshots.push(snap);
        if done {
            break;
        }
    }
    (engine, snapshots)
}

/// Health only ever goes down, and a unit that vanished never comes back.
fn check_unit_invariants(snapshots: &[BattleSnapshot]) {
    let mut last_health: HashMap<UnitId, i32> = HashMap::new();
    let mut previous: HashSet<UnitId> = HashSet::new();
    let mut gone: HashSet<UnitId> = HashSet::new();

    for snap in snapshots {
        let current: HashSet<UnitId> = snap.units.iter().map(|u| u.id).collect();
        for unit in &snap.units {
            assert!(unit.health > 0, "Dead unit {:?} was reported", unit.id);
            assert!(!gone.contains(&unit.id), "Unit {:?} came back", unit.id);
            if let Some(&before) = last_health.get(&unit.id) {
                assert!(
                    unit.health <= before,
                    "Unit {:?} healed from {before} to {}",
                    unit.id,
                    unit.health
                );
            }
            last_health.insert(unit.id, unit.health);
        }
        gone.extend(previous.difference(&current).copied());
        previous = current;
    }
}

/// Elimination order has no duplicates and matches the per-team live counts.
fn check_team_invariants(snapshots: &[BattleSnapshot]) {
    let mut seen_eliminated = 0;
    for snap in snapshots {
        let unique: HashSet<&TeamColor> = snap.elimination_order.iter().collect();
        assert_eq!(unique.len(), snap.elimination_order.len());
        assert!(snap.elimination_order.len() >= seen_eliminated);
        seen_eliminated = snap.elimination_order.len();

        for team in &snap.teams {
            assert_eq!(
                team.eliminated,
                team.alive_count == 0,
                "Team {} eliminated flag out of sync with its live count",
                team.color
            );
        }
        assert_eq!(snap.status.eliminated_count as usize, snap.elimination_order.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn two_team_battles_always_finish(a in army(), b in army()) {
        let armies = vec![a, b];
        let (engine, snapshots) = run_battle(&armies);

        prop_assert_eq!(engine.phase(), BattlePhase::Ended);
        check_unit_invariants(&snapshots);
        check_team_invariants(&snapshots);

        let standings = engine.standings();
        prop_assert_eq!(standings.len(), 2);
        prop_assert_eq!(standings[0].rank, 1);
        prop_assert!(standings[0].survived_count > 0);
        prop_assert_eq!(standings[1].survived_count, 0);
        for standing in standings {
            let team = PALETTE.iter().position(|c| *c == standing.color.as_str()).unwrap();
            prop_assert_eq!(standing.initial_count as usize, armies[team].len());
        }
    }

    #[test]
    fn three_team_standings_cover_every_color(a in army(), b in army(), c in army()) {
        let armies = vec![a, b, c];
        let (engine, snapshots) = run_battle(&armies);

        check_unit_invariants(&snapshots);
        check_team_invariants(&snapshots);

        if engine.phase() == BattlePhase::Ended {
            let colors: HashSet<&str> =
                engine.standings().iter().map(|s| s.color.as_str()).collect();
            prop_assert_eq!(engine.standings().len(), 3);
            prop_assert_eq!(colors, PALETTE.iter().copied().collect::<HashSet<_>>());
            let ranks: Vec<u32> = engine.standings().iter().map(|s| s.rank).collect();
            prop_assert_eq!(ranks, vec![1, 2, 3]);
        }
    }
}
