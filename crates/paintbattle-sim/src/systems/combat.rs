//! Attack resolution and cooldown bookkeeping.

use hecs::{Entity, World};

use paintbattle_core::components::{Attack, Health};

/// Outcome of a landed attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// The blow took the target from alive to dead.
    pub killed: bool,
}

/// Hit `target` if the attacker is off cooldown. Resets the cooldown on success.
///
/// Returns `None` when the attack is still cooling down or the target is gone.
pub fn try_strike(world: &World, attack: &mut Attack, target: Entity) -> Option<Strike> {
    if attack.cooldown > 0 {
        return None;
    }

    let mut health = world.get::<&mut Health>(target).ok()?;
    let was_alive = health.is_alive();
    health.current -= attack.damage;
    attack.cooldown = attack.attack_speed;

    Some(Strike {
        killed: was_alive && !health.is_alive(),
    })
}

/// Count the cooldown down by one tick.
pub fn decay_cooldown(attack: &mut Attack) {
    attack.cooldown = attack.cooldown.saturating_sub(1);
}
