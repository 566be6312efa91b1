//! Unit agent: one unit's behavior for one tick.
//!
//! Seek the nearest enemy, then either close the distance or attack.
//! Units are updated one at a time, so a unit sees the same-tick damage and
//! movement of every unit updated before it.

use hecs::{Entity, World};

use paintbattle_core::components::{Attack, Health, Mobility, UnitId};
use paintbattle_core::events::BattleEvent;
use paintbattle_core::state::AttackView;
use paintbattle_core::types::{ArenaBounds, Position, TeamColor};

use super::combat;
use super::movement;
use super::targeting::{self, Target};

/// Advance a single unit by one tick. No-op for dead or missing units.
pub fn update(
    world: &mut World,
    roster: &[Entity],
    arena: &ArenaBounds,
    entity: Entity,
    attacks: &mut Vec<AttackView>,
    events: &mut Vec<BattleEvent>,
) {
    // Copy our own state out first: the target lives in the same archetype,
    // so no component borrow may be held while we touch its health.
    let (id, color, position, mobility, mut attack, target) = {
        let Ok(mut query) = world.query_one::<(
            &UnitId,
            &TeamColor,
            &Position,
            &Mobility,
            &Attack,
            &Health,
            &Target,
        )>(entity) else {
            return;
        };
        let Some((id, color, position, mobility, attack, health, target)) = query.get() else {
            return;
        };
        if !health.is_alive() {
            return;
        }
        (*id, color.clone(), *position, *mobility, *attack, *target)
    };

    let target = match target.0 {
        Some(current) if targeting::is_valid_target(world, current) => Some(current),
        _ => targeting::find_nearest_enemy(world, roster, &color, &position),
    };

    let target_position = target.and_then(|t| world.get::<&Position>(t).ok().map(|p| *p));

    let mut new_position = position;
    if let (Some(target_entity), Some(target_position)) = (target, target_position) {
        let dist = position.distance_to(&target_position);
        if dist > attack.range {
            new_position = movement::step_toward(
                position,
                target_position,
                mobility.speed,
                mobility.radius,
                arena,
            );
        } else if let Some(strike) = combat::try_strike(world, &mut attack, target_entity) {
            let target_id = world
                .get::<&UnitId>(target_entity)
                .map(|target_id| *target_id)
                .unwrap_or(id);
            attacks.push(AttackView {
                attacker: id,
                target: target_id,
                from: position,
                to: target_position,
                color: color.clone(),
            });
            if strike.killed {
                let victim_color = world
                    .get::<&TeamColor>(target_entity)
                    .map(|c| (*c).clone())
                    .unwrap_or_else(|_| color.clone());
                events.push(BattleEvent::UnitKilled {
                    unit: target_id,
                    color: victim_color,
                    killer: id,
                });
            }
        }
    }

    combat::decay_cooldown(&mut attack);

    if let Ok((pos, atk, tgt)) =
        world.query_one_mut::<(&mut Position, &mut Attack, &mut Target)>(entity)
    {
        *pos = new_position;
        *atk = attack;
        *tgt = Target(target);
    }
}
