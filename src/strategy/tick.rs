//! Per-tick decision loop
//!
//! Each call to [`Strategy::decide`] takes one snapshot, re-evaluates food,
//! viruses and rivals around our lightest fragment, and returns one command.

use rand::SeedableRng;
use rand::{Rng, RngCore};
use rand_pcg::Pcg32;

use super::quadrant::{flee_exclusions, quadrant_of, random_quadrant};
use super::search::{find_object, representative_fragment};
use super::state::{Action, BodyFragment, Command, EngineState, MapConfig, ObjectKind, VisibleObject};
use crate::error::StrategyError;
use crate::settings::Settings;
use crate::{angle_deg, distance};

/// The decision engine. Owns all state that survives between ticks.
pub struct Strategy<R: Rng = Pcg32> {
    settings: Settings,
    state: EngineState,
    rng: R,
}

impl Strategy<Pcg32> {
    /// Create an engine seeded from `settings.seed`, or from entropy if unset
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::seed_from_u64(rand::rng().next_u64()),
        };
        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> Strategy<R> {
    /// Create an engine drawing quadrant choices from `rng`
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        let state = EngineState::new(settings.reset_action_interval);
        Self {
            settings,
            state,
            rng,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    fn trace(&self, step: &str, message: std::fmt::Arguments<'_>) {
        log::debug!("{}({}): {}", self.state.tick, step, message);
    }

    /// Decide the command for one tick
    pub fn decide(
        &mut self,
        fragments: &[BodyFragment],
        map: MapConfig,
        objects: &[VisibleObject],
    ) -> Result<Command, StrategyError> {
        self.state.tick += 1;

        let Some(mine) = representative_fragment(fragments).copied() else {
            self.trace("decide", format_args!("no fragments left"));
            return Ok(Command::Died);
        };

        self.state.map = Some(map);
        self.check_reset(&mine);

        if self.state.current_action.is_calm() {
            self.check_food(&mine, objects);
        }
        self.check_virus(&mine, &map, objects)?;
        let rival = self.check_player(&mine, &map, objects)?;

        let split = self.should_split(&mine, rival);

        if self.state.current_action == Action::None {
            let quadrant = random_quadrant(&mut self.rng, quadrant_of(mine.pos, &map), &[])?;
            self.trace("decide", format_args!("roam to {quadrant}"));
            self.state.aim_at_quadrant(quadrant, &map);
            self.state.current_action = Action::MoveToPoint;
        }

        self.trace("decide", format_args!("new action - {}", self.state.current_action));

        Ok(Command::Move {
            target: self.state.next_aim,
            split,
        })
    }

    /// Drop the current action on schedule, or once the aim point is reached
    fn check_reset(&mut self, mine: &BodyFragment) {
        let tick = self.state.tick;
        if let Some(reset_at) = self.state.next_reset_tick.filter(|at| tick > *at) {
            self.state.current_action = Action::None;
            self.state.next_reset_tick = self
                .settings
                .reset_action_interval
                .filter(|n| *n > 0)
                .map(|interval| reset_at + interval);
            self.trace("check_reset", format_args!("scheduled reset"));
        } else if distance(mine.pos, self.state.next_aim) < mine.radius {
            self.state.current_action = Action::None;
        }
    }

    fn check_food(&mut self, mine: &BodyFragment, objects: &[VisibleObject]) {
        if let Some(food) = find_object(objects, ObjectKind::Food, Some(mine.pos)) {
            self.state.next_aim = food.pos;
            self.state.current_action = Action::MoveToFood;
        }
    }

    /// Steer away from a nearby virus we are heavy enough to be popped by
    fn check_virus(
        &mut self,
        mine: &BodyFragment,
        map: &MapConfig,
        objects: &[VisibleObject],
    ) -> Result<(), StrategyError> {
        let Some(virus) = find_object(objects, ObjectKind::Virus, Some(mine.pos)) else {
            return Ok(());
        };

        let fresh = self.state.current_action == Action::None || self.state.is_new_target(&virus.id);
        if mine.mass > virus.mass && fresh && distance(mine.pos, virus.pos) < mine.radius {
            self.trace(
                "check_virus",
                format_args!(
                    "big virus - {} > {}({}:{})",
                    mine.mass, virus.mass, virus.pos.x, virus.pos.y
                ),
            );
            let quadrant = random_quadrant(&mut self.rng, quadrant_of(virus.pos, map), &[])?;
            self.state.aim_at_quadrant(quadrant, map);
            self.state.target_id = Some(virus.id.clone());
            self.state.current_action = Action::MoveFromVirus;
        }
        Ok(())
    }

    /// Chase a clearly smaller rival or flee a bigger one.
    ///
    /// Returns the nearest rival whatever was decided.
    fn check_player<'a>(
        &mut self,
        mine: &BodyFragment,
        map: &MapConfig,
        objects: &'a [VisibleObject],
    ) -> Result<Option<&'a VisibleObject>, StrategyError> {
        let Some(rival) = find_object(objects, ObjectKind::Player, Some(mine.pos)) else {
            return Ok(None);
        };

        if mine.radius > rival.radius + self.settings.safe_attack_radius {
            self.state.next_aim = rival.pos;
            self.state.current_action = Action::MoveToPlayer;
        } else if rival.radius > mine.radius
            && (self.state.is_new_target(&rival.id) || self.state.current_action == Action::None)
        {
            self.trace(
                "check_player",
                format_args!(
                    "old enemy - {}, new enemy - {}",
                    self.state.target_id.as_deref().unwrap_or("none"),
                    rival.id
                ),
            );

            let mine_quadrant = quadrant_of(mine.pos, map);
            let rival_quadrant = quadrant_of(rival.pos, map);
            let angle = angle_deg(mine.pos, rival.pos);
            self.trace("check_player", format_args!("enemy angle - {angle}"));
            self.trace("check_player", format_args!("enemy square - {rival_quadrant}"));

            let except = flee_exclusions(mine_quadrant, angle);
            let quadrant = random_quadrant(&mut self.rng, rival_quadrant, &except)?;
            self.trace("check_player", format_args!("flee to {quadrant}, except {except:?}"));

            self.state.aim_at_quadrant(quadrant, map);
            self.state.target_id = Some(rival.id.clone());
            self.state.current_action = Action::MoveFromPlayer;
        }

        Ok(Some(rival))
    }

    /// Split once big enough, unless fleeing or foraging
    fn should_split(&self, mine: &BodyFragment, rival: Option<&VisibleObject>) -> bool {
        let action = self.state.current_action;
        let busy = matches!(action, Action::MoveFromPlayer | Action::MoveToFood);
        let safe_attack = action == Action::MoveToPlayer
            && rival.is_some_and(|r| mine.radius * 2.0 + self.settings.safe_attack_radius > r.radius);

        mine.mass > self.settings.split_mass && (!busy || safe_attack)
    }
}
