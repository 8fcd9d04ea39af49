//! Session context
//!
//! Owns the world, score, timer and history for one page. The host drives it
//! with `tick` (once per animation frame) and `sample_timer` (on its own
//! interval); both are no-ops unless a run is active.

use std::time::Duration;

use hecs::{Entity, World};

use crate::fsm::{SessionAction, SessionFsm, SessionState};
use crate::systems::{set_left_paddle_target, step_ai};
use crate::{
    advance, create_ball, create_paddle, format_elapsed, reset_ball, Ball, Clock,
    CollisionOutcome, Config, Difficulty, Display, ElapsedTimer, Events, GameMap, GameMode,
    GameRng, HistoryRecord, MatchHistory, MatchSettings, Paddle, Renderer, Score, Side, Speeds,
};

/// What a single `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No run is active; nothing moved
    Inactive,
    Continue,
    /// A point was scored and the ball was served again
    Scored(Side),
    /// The point ended the match; the session is now `Ended`
    MatchOver { winner: Side },
}

pub struct Session {
    clock: Box<dyn Clock>,
    display: Box<dyn Display>,
    world: World,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
    map: GameMap,
    config: Config,
    mode: GameMode,
    fsm: SessionFsm,
    score: Score,
    events: Events,
    rng: GameRng,
    timer: ElapsedTimer,
    settings: MatchSettings,
    speeds: Speeds,
    history: MatchHistory,
    epoch: u32,
    ticks: u64,
}

impl Session {
    pub fn new(
        config: Config,
        mode: GameMode,
        seed: u64,
        clock: Box<dyn Clock>,
        mut display: Box<dyn Display>,
    ) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();

        let spawn_y = map.paddle_spawn_y(config.paddle_height);
        let left_paddle = create_paddle(&mut world, &map, &config, Side::Left, spawn_y);
        let right_paddle = create_paddle(&mut world, &map, &config, Side::Right, spawn_y);
        let ball = create_ball(
            &mut world,
            map.ball_spawn(),
            glam::Vec2::ZERO,
            config.ball_radius,
        );

        display.set_scores(0, 0);
        if mode == GameMode::Match {
            display.set_elapsed(&format_elapsed(Duration::ZERO));
            display.render_history(&[]);
        }

        let settings = MatchSettings::default();
        let speeds = config.speeds(settings.difficulty);

        Self {
            clock,
            display,
            world,
            left_paddle,
            right_paddle,
            ball,
            map,
            config,
            mode,
            fsm: SessionFsm::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            timer: ElapsedTimer::new(),
            settings,
            speeds,
            history: MatchHistory::new(),
            epoch: 0,
            ticks: 0,
        }
    }

    /// Begin a new run. Returns false (and changes nothing) if one is
    /// already running.
    pub fn start(&mut self, settings: MatchSettings) -> bool {
        let result = self.fsm.transition(SessionAction::Start);
        if !result.success {
            log::debug!("start ignored in {:?}", result.from_state);
            return false;
        }

        self.speeds = self.config.speeds(settings.difficulty);
        self.settings = settings;
        self.score = Score::new();
        self.events.clear();

        let spawn_y = self.map.paddle_spawn_y(self.config.paddle_height);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = spawn_y;
            paddle.dy = 0.0;
        }

        let serve = self.rng.serve_side();
        reset_ball(
            &mut self.world,
            &self.map,
            serve.direction(),
            self.speeds.ball,
            &mut self.rng,
        );

        self.timer.reset();
        self.timer.start(self.clock.now_ms());
        self.epoch = self.epoch.wrapping_add(1);
        self.ticks = 0;

        self.display.set_scores(0, 0);
        self.display.set_elapsed(&format_elapsed(Duration::ZERO));
        self.display.set_inputs_enabled(false);

        log::info!(
            "{:?} -> {:?}: {:?} run #{} ({}, {})",
            result.from_state,
            result.to_state,
            self.mode,
            self.epoch,
            self.settings.player_name,
            self.settings.difficulty.label()
        );
        true
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) -> TickOutcome {
        if !self.fsm.is_running() {
            return TickOutcome::Inactive;
        }
        self.ticks += 1;

        let collision = advance(&mut self.world, &self.map, &self.config, &mut self.events);
        if self.events.ball_hit_wall {
            log::debug!("wall bounce at tick {}", self.ticks);
        }
        if self.events.ball_hit_paddle {
            log::debug!("paddle return at tick {}", self.ticks);
        }

        let mut outcome = TickOutcome::Continue;
        if let CollisionOutcome::ScoredBy(scorer) = collision {
            self.score.increment(scorer);
            self.display.set_scores(self.score.left, self.score.right);
            log::debug!(
                "{:?} scored at tick {}: {}-{}",
                scorer,
                self.ticks,
                self.score.left,
                self.score.right
            );

            if self.mode == GameMode::Match {
                if let Some(winner) = self.score.has_winner(self.config.win_score) {
                    self.end(true);
                    return TickOutcome::MatchOver { winner };
                }
            }

            reset_ball(
                &mut self.world,
                &self.map,
                scorer.opponent().direction(),
                self.speeds.ball,
                &mut self.rng,
            );
            outcome = TickOutcome::Scored(scorer);
        }

        step_ai(&mut self.world, self.speeds.paddle, &self.map);
        outcome
    }

    /// Player-initiated stop. Nothing is recorded.
    pub fn stop(&mut self) -> bool {
        self.end(false)
    }

    /// Finish the current run, optionally adding it to the history
    pub fn end(&mut self, record: bool) -> bool {
        let action = if record {
            SessionAction::Finish
        } else {
            SessionAction::Stop
        };
        let result = self.fsm.transition(action);
        if !result.success {
            log::debug!("{:?} ignored in {:?}", action, result.from_state);
            return false;
        }

        let now = self.clock.now_ms();
        self.timer.stop(now);
        self.display.set_elapsed(&format_elapsed(self.timer.elapsed(now)));
        self.display.set_inputs_enabled(true);

        if record {
            let entry = HistoryRecord::new(
                self.settings.player_name.clone(),
                self.score.left,
                self.score.right,
                format_elapsed(self.timer.elapsed(now)),
                self.settings.difficulty.label(),
            );
            log::info!("match recorded: {}", entry.line());
            self.history.record(entry.clone());
            self.display.render_history(self.history.records());
            self.display.show_summary(&entry);
        } else {
            log::info!(
                "{:?} -> {:?} after {} ticks",
                result.from_state,
                result.to_state,
                self.ticks
            );
        }
        true
    }

    /// Move the player's paddle so its center follows the pointer
    pub fn set_left_paddle_target(&mut self, desired_center_y: f32) {
        if self.fsm.is_running() {
            set_left_paddle_target(&mut self.world, &self.map, desired_center_y);
        }
    }

    /// Push the formatted elapsed time to the display while running
    pub fn sample_timer(&mut self) -> Option<String> {
        if !self.fsm.is_running() {
            return None;
        }
        let formatted = format_elapsed(self.elapsed());
        self.display.set_elapsed(&formatted);
        Some(formatted)
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.clear();
        renderer.draw_center_line();
        if let Some(paddle) = self.paddle(Side::Left) {
            renderer.draw_paddle(&paddle);
        }
        if let Some(paddle) = self.paddle(Side::Right) {
            renderer.draw_paddle(&paddle);
        }
        if let Some(ball) = self.ball() {
            renderer.draw_ball(&ball);
        }
    }

    pub fn state(&self) -> SessionState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Incremented on every successful `start`
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn speeds(&self) -> Speeds {
        self.speeds
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed(self.clock.now_ms())
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    /// Direct access to the entities, for hosts and tests that need to
    /// place the ball
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ball_entity(&self) -> Entity {
        self.ball
    }
}
