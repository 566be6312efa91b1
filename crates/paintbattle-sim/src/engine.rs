//! Simulation engine - the core of the game.
//!
//! `BattleEngine` owns the hecs world, the roster, team bookkeeping and the
//! elimination order. It processes player commands, runs all systems, and
//! produces `BattleSnapshot`s. Completely headless (no rendering dependency),
//! enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use paintbattle_core::commands::PlayerCommand;
use paintbattle_core::components::UnitId;
use paintbattle_core::constants::*;
use paintbattle_core::enums::BattlePhase;
use paintbattle_core::error::BattleError;
use paintbattle_core::events::BattleEvent;
use paintbattle_core::state::*;
use paintbattle_core::types::*;

use crate::brush;
use crate::standings;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::teams::{EliminationOrder, TeamRegistry};
use crate::world_setup;

/// Configuration for a new simulation. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for brush jitter. Same seed = same painted armies.
    pub seed: u64,
    pub arena: ArenaBounds,
    /// Stats every spawned unit starts with.
    pub unit: UnitStats,
    /// Initial brush settings.
    pub brush: BrushSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            arena: ArenaBounds::default(),
            unit: UnitStats::default(),
            brush: BrushSettings::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON, e.g. `{"seed": 7, "arena": {"width": 1024, "height": 768}}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The simulation engine. Owns the ECS world and all battle state.
pub struct BattleEngine {
    config: SimConfig,
    world: World,
    /// Live units in population order. Defines update and scan order.
    roster: Vec<Entity>,
    teams: TeamRegistry,
    elimination_order: EliminationOrder,
    standings: Vec<StandingView>,
    time: SimTime,
    phase: BattlePhase,
    brush: BrushSettings,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    message: String,
    status: BattleStatus,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<BattleEvent>,
}

impl BattleEngine {
    /// Create a new engine in the `Drawing` phase.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            roster: Vec::new(),
            teams: TeamRegistry::default(),
            elimination_order: EliminationOrder::default(),
            standings: Vec::new(),
            time: SimTime::default(),
            phase: BattlePhase::default(),
            brush: config.brush,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit_id: 0,
            message: MSG_WELCOME.to_string(),
            status: BattleStatus::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, advance the battle by one tick if it is running,
    /// and return the resulting snapshot.
    pub fn tick(&mut self) -> BattleSnapshot {
        self.process_commands();

        let mut attacks = Vec::new();
        let units = if self.phase == BattlePhase::Battle {
            let units = self.run_systems(&mut attacks);
            self.time.advance();
            units
        } else {
            systems::snapshot::unit_views(&self.world, &self.roster)
        };

        let alive = systems::census::count_alive(&self.world, &self.roster);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(SnapshotInputs {
            time: self.time,
            phase: self.phase,
            message: &self.message,
            status: self.status,
            units,
            attacks,
            teams: &self.teams,
            alive: &alive,
            elimination_order: &self.elimination_order,
            standings: &self.standings,
            events,
        })
    }

    // --- Painting ---

    /// Spawn one unit at exactly `(x, y)`. Only while drawing.
    pub fn spawn_unit(
        &mut self,
        x: f64,
        y: f64,
        color: TeamColor,
    ) -> Result<UnitId, BattleError> {
        let result = self
            .require_phase(BattlePhase::Drawing)
            .map(|()| self.insert_unit(Position::new(x, y), color));
        self.report(result)
    }

    /// Brush press at `(x, y)`. Returns the number of units spawned.
    pub fn paint_dab(&mut self, x: f64, y: f64, color: TeamColor) -> Result<usize, BattleError> {
        let result = self.require_phase(BattlePhase::Drawing).map(|()| {
            let points = brush::dab(&mut self.rng, Position::new(x, y), &self.brush);
            self.insert_units(points, &color)
        });
        self.report(result)
    }

    /// Brush drag from `from` to `to`. Returns the number of units spawned.
    pub fn paint_stroke(
        &mut self,
        from: Position,
        to: Position,
        color: TeamColor,
    ) -> Result<usize, BattleError> {
        let result = self.require_phase(BattlePhase::Drawing).map(|()| {
            let points = brush::stroke(&mut self.rng, from, to, &self.brush);
            self.insert_units(points, &color)
        });
        self.report(result)
    }

    /// Set the brush diameter (at least 1 pixel).
    pub fn set_brush_size(&mut self, size: f64) {
        self.brush.size = size.max(1.0);
    }

    /// Set the unit density (at least 1).
    pub fn set_unit_density(&mut self, density: u32) {
        self.brush.density = density.max(1);
    }

    /// Remove every painted unit and forget all teams. Only while drawing.
    pub fn clear_armies(&mut self) -> Result<(), BattleError> {
        let result = self.require_phase(BattlePhase::Drawing).map(|()| {
            self.world.clear();
            self.roster.clear();
            self.teams.clear();
            self.message = MSG_CLEARED.to_string();
            debug!("Armies cleared");
        });
        self.report(result)
    }

    // --- Battle control ---

    /// Start the battle. Needs at least one unit and at least two teams.
    pub fn start_battle(&mut self) -> Result<(), BattleError> {
        let result = self.check_can_start().map(|teams| {
            self.phase = BattlePhase::Battle;
            self.status = BattleStatus {
                remaining_teams: teams,
                total_units: self.roster.len() as u32,
                eliminated_count: 0,
            };
            self.message = format!("Battle started! {teams} teams are fighting!");
            self.events.push(BattleEvent::BattleStarted { teams });
            info!(
                "Battle started: {teams} teams, {} units",
                self.roster.len()
            );
        });
        self.report(result)
    }

    /// Throw away all state and return to drawing with a freshly seeded RNG.
    /// Pending queued commands are kept.
    pub fn reset(&mut self) {
        let pending = std::mem::take(&mut self.command_queue);
        *self = Self::new(self.config.clone());
        self.command_queue = pending;
        debug!("Engine reset");
    }

    // --- Accessors ---

    /// Get the current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current status-line text.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn brush(&self) -> BrushSettings {
        self.brush
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Live units in population order.
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    pub fn teams(&self) -> &TeamRegistry {
        &self.teams
    }

    /// Eliminated colors, first one out first.
    pub fn elimination_order(&self) -> &[TeamColor] {
        self.elimination_order.as_slice()
    }

    /// Final standings. Empty until the battle has ended.
    pub fn standings(&self) -> &[StandingView] {
        &self.standings
    }

    /// Look up a live unit by id.
    pub fn unit(&self, id: UnitId) -> Option<UnitView> {
        self.roster
            .iter()
            .filter_map(|&entity| systems::snapshot::unit_view(&self.world, entity))
            .find(|view| view.id == id)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Failures are already reported in the status line.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SpawnUnit { x, y, color } => {
                let _ = self.spawn_unit(x, y, color);
            }
            PlayerCommand::PaintDab { x, y, color } => {
                let _ = self.paint_dab(x, y, color);
            }
            PlayerCommand::PaintStroke { from, to, color } => {
                let _ = self.paint_stroke(from, to, color);
            }
            PlayerCommand::SetBrushSize { size } => self.set_brush_size(size),
            PlayerCommand::SetUnitDensity { density } => self.set_unit_density(density),
            PlayerCommand::ClearArmies => {
                let _ = self.clear_armies();
            }
            PlayerCommand::StartBattle => {
                let _ = self.start_battle();
            }
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Run one battle tick. Returns the unit views captured right after each
    /// unit's own update, in population order.
    fn run_systems(&mut self, attacks: &mut Vec<AttackView>) -> Vec<UnitView> {
        // 1. Update then capture every unit, in population order
        let mut units = Vec::with_capacity(self.roster.len());
        for &entity in &self.roster {
            systems::agent::update(
                &mut self.world,
                &self.roster,
                &self.config.arena,
                entity,
                attacks,
                &mut self.events,
            );
            if let Some(view) = systems::snapshot::unit_view(&self.world, entity) {
                units.push(view);
            }
        }
        // 2. Prune the dead
        systems::cleanup::run(&mut self.world, &mut self.roster, &mut self.despawn_buffer);
        // 3. Active-team census
        let alive = systems::census::count_alive(&self.world, &self.roster);
        // 4. Elimination detection
        systems::census::detect_eliminations(
            &self.teams,
            &alive,
            &mut self.elimination_order,
            &mut self.events,
        );
        // 5. Status line
        self.status = BattleStatus {
            remaining_teams: alive.len() as u32,
            total_units: self.roster.len() as u32,
            eliminated_count: self.elimination_order.len() as u32,
        };
        self.message = format!(
            "{} team(s) remaining | {} units alive | {} eliminated",
            self.status.remaining_teams, self.status.total_units, self.status.eliminated_count
        );
        // 6. Termination
        if alive.len() <= 1 {
            self.end_battle(&alive);
        }

        units
    }

    fn end_battle(&mut self, alive: &HashMap<TeamColor, u32>) {
        self.phase = BattlePhase::Ended;
        self.standings = standings::compute(&self.teams, &self.elimination_order, alive);
        self.message = MSG_BATTLE_COMPLETE.to_string();

        let winner = standings::winner(alive).map(|(color, _)| color.clone());
        match &winner {
            Some(color) => info!(
                "Battle ended at tick {}: {color} wins",
                self.time.tick + 1
            ),
            None => info!("Battle ended at tick {}: no survivors", self.time.tick + 1),
        }
        self.events.push(BattleEvent::BattleEnded { winner });
    }

    fn check_can_start(&self) -> Result<u32, BattleError> {
        self.require_phase(BattlePhase::Drawing)?;
        if self.roster.is_empty() {
            return Err(BattleError::NoUnits);
        }
        let teams = self.teams.len() as u32;
        if teams < 2 {
            return Err(BattleError::NotEnoughTeams { teams });
        }
        Ok(teams)
    }

    fn require_phase(&self, expected: BattlePhase) -> Result<(), BattleError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(BattleError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Surface a failure in the status line, leaving everything else untouched.
    fn report<T>(&mut self, result: Result<T, BattleError>) -> Result<T, BattleError> {
        if let Err(err) = &result {
            warn!("Rejected: {err}");
            self.message = err.to_string();
        }
        result
    }

    fn insert_units(&mut self, points: Vec<Position>, color: &TeamColor) -> usize {
        let count = points.len();
        for point in points {
            self.insert_unit(point, color.clone());
        }
        debug!("Painted {count} {color} units");
        count
    }

    fn insert_unit(&mut self, position: Position, color: TeamColor) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        self.teams.register(&color);
        let entity = world_setup::spawn_unit(&mut self.world, &self.config.unit, id, position, color);
        self.roster.push(entity);
        id
    }
}
