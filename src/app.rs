use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::client::{PoolClient, PoolData};
use crate::config::Config;
use crate::event::{self, AppEvent};
use crate::gauge::interaction::InteractionController;
use crate::gauge::interp::{Easing, Interpolator};
use crate::gauge::{GaugeConfig, GaugeState};
use crate::pool::{self, History, PoolType, POOL_TYPES};
use crate::ui::tabs::Tab;

/// Both dials render a 320-unit face with an 18-unit stroke, matching
/// the controller's wall panel.
const GAUGE_SIZE: f64 = 320.0;
const GAUGE_STROKE: f64 = 18.0;

/// Per-tick sweep of the animated dot, radians.
const ANGLE_STEP: f64 = 0.25;
/// Per-tick drift of the center temperature readout, °C.
const READOUT_STEP: f64 = 0.5;

/// Current and target count as matched once the animated readout is
/// within this many degrees of the setpoint.
const MATCH_EPSILON: f64 = 0.15;

pub struct App {
    pub running: bool,
    pub current_tab: Tab,
    pub client: PoolClient,

    pub current_temp: f64,
    pub target_temp: f64,
    pub ph: f64,
    pub orp: f64,
    pub outside_temp: f64,
    /// Center readout eases toward `current_temp` instead of jumping.
    pub animated_temp: f64,
    pub temp_history: History,

    pub monitor_config: GaugeConfig,
    pub monitor_state: GaugeState,
    monitor_interp: Interpolator,
    monitor_interaction: InteractionController,

    pub temp_config: GaugeConfig,
    pub temp_state: GaugeState,
    temp_interp: Interpolator,
    temp_interaction: InteractionController,

    pub pool_type_index: usize,
    pub show_help: bool,
    pub tick_rate: Duration,
    last_tick: Instant,
    last_frame_area: Rect,
}

impl App {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        // 270° dial with the gap on the left, sweeping clockwise from
        // min at upper left to max at lower left
        let monitor_config = GaugeConfig::new(
            pool::TEMP_MIN,
            pool::TEMP_MAX,
            GAUGE_SIZE,
            GAUGE_STROKE,
            -135.0,
            270.0,
        )?;
        let temp_config =
            GaugeConfig::full_circle(pool::TEMP_MIN, pool::TEMP_MAX, GAUGE_SIZE, GAUGE_STROKE)?;

        let current_temp = 28.0;
        let target_temp = 28.0;

        Ok(Self {
            running: true,
            current_tab: Tab::Monitor,
            client: PoolClient::new(
                config.url.clone(),
                Duration::from_millis(config.poll_interval),
            ),
            current_temp,
            target_temp,
            ph: 7.2,
            orp: 700.0,
            outside_temp: 18.0,
            animated_temp: current_temp,
            temp_history: History::new(),
            monitor_state: GaugeState::new(target_temp, &monitor_config),
            monitor_interp: Interpolator::new(Easing::Snap),
            monitor_interaction: InteractionController::new(monitor_config),
            monitor_config,
            temp_state: GaugeState::new(current_temp, &temp_config),
            temp_interp: Interpolator::new(Easing::Step { step: ANGLE_STEP }),
            temp_interaction: InteractionController::new(temp_config),
            temp_config,
            pool_type_index: 0,
            show_help: false,
            tick_rate: Duration::from_millis(config.tick_rate),
            last_tick: Instant::now(),
            last_frame_area: Rect::default(),
        })
    }

    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> color_eyre::Result<()> {
        while self.running {
            terminal.draw(|frame| {
                self.last_frame_area = frame.area();
                crate::ui::render(frame, self);
            })?;

            // The poll timeout doubles as the animation tick
            match event::poll_event(self.tick_rate)? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
                AppEvent::Resize => {}
                AppEvent::Tick => {}
            }

            self.maybe_advance();
            self.client.maybe_poll();
            let updates = self.client.drain();
            for data in updates {
                self.apply(data);
            }
        }

        Ok(())
    }

    /// Fold one controller reading into the app. Null fields keep the
    /// last known value.
    fn apply(&mut self, data: PoolData) {
        if let Some(v) = data.current_temp {
            self.current_temp = v;
            self.temp_state.current_value = v;
            self.temp_history.push(v);
        }
        if let Some(v) = data.target_temp {
            self.target_temp = v;
            self.monitor_state.current_value = v;
        }
        if let Some(v) = data.ph {
            self.ph = v;
        }
        if let Some(v) = data.orp {
            self.orp = v;
        }
        if let Some(v) = data.outside_temp {
            self.outside_temp = v;
        }
    }

    /// Advance the animations only once a full tick has elapsed. Input
    /// events wake the loop ahead of the poll timeout, so an unguarded
    /// advance would let key autorepeat or mouse moves speed the
    /// easing up.
    fn maybe_advance(&mut self) {
        if self.last_tick.elapsed() < self.tick_rate {
            return;
        }
        self.last_tick = Instant::now();
        self.advance_animation();
    }

    fn advance_animation(&mut self) {
        let diff = self.current_temp - self.animated_temp;
        if diff.abs() <= READOUT_STEP {
            self.animated_temp = self.current_temp;
        } else {
            self.animated_temp += READOUT_STEP.copysign(diff);
        }
        self.monitor_interp.tick(&mut self.monitor_state, &self.monitor_config);
        self.temp_interp.tick(&mut self.temp_state, &self.temp_config);
    }

    pub fn temps_match(&self) -> bool {
        (self.animated_temp - self.target_temp).abs() < MATCH_EPSILON
    }

    pub fn pool_type(&self) -> &'static PoolType {
        &POOL_TYPES[self.pool_type_index % POOL_TYPES.len()]
    }

    /// Adopt a new setpoint locally and push it to the controller.
    /// Fires on every pick, including re-picks of the current value.
    pub fn set_target(&mut self, value: f64) {
        let value = value.round().clamp(pool::TEMP_MIN, pool::TEMP_MAX);
        self.target_temp = value;
        self.monitor_state.current_value = value;
        self.client.push_target(value);
    }

    fn nudge_target(&mut self, delta: f64) {
        self.set_target(self.target_temp + delta);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char('1') => self.current_tab = Tab::Monitor,
            KeyCode::Char('2') => self.current_tab = Tab::Temperature,
            KeyCode::Char('3') => self.current_tab = Tab::Advanced,

            KeyCode::Tab => self.current_tab = self.current_tab.next(),
            KeyCode::BackTab => self.current_tab = self.current_tab.prev(),

            KeyCode::F(n) if (1..=3).contains(&n) => {
                if let Some(tab) = Tab::from_index(n as usize - 1) {
                    self.current_tab = tab;
                }
            }

            KeyCode::Char('k') | KeyCode::Up if self.on_gauge_tab() => self.nudge_target(1.0),
            KeyCode::Char('j') | KeyCode::Down if self.on_gauge_tab() => self.nudge_target(-1.0),

            KeyCode::Char('p') if self.current_tab == Tab::Temperature => {
                self.pool_type_index = (self.pool_type_index + 1) % POOL_TYPES.len();
            }

            KeyCode::Char('r') => self.client.poll_now(),

            _ => {}
        }
    }

    fn on_gauge_tab(&self) -> bool {
        matches!(self.current_tab, Tab::Monitor | Tab::Temperature)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.show_help = false;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp if self.on_gauge_tab() => self.nudge_target(1.0),
            MouseEventKind::ScrollDown if self.on_gauge_tab() => self.nudge_target(-1.0),
            MouseEventKind::Down(MouseButton::Left) => {
                // Tab bar sits on row 1, the second header row
                if mouse.row == 1 {
                    self.handle_tab_click(mouse.column);
                } else {
                    self.handle_gauge_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    fn handle_tab_click(&mut self, col: u16) {
        // Tab bar format: " N:Label  N:Label  ..."
        let mut x: u16 = 1;
        for tab in &Tab::ALL {
            let label = format!(" {}:{} ", tab.index() + 1, tab.label());
            let width = label.len() as u16;
            if col >= x && col < x + width {
                self.current_tab = *tab;
                return;
            }
            x += width + 1;
        }
    }

    fn handle_gauge_click(&mut self, column: u16, row: u16) {
        // Geometry is recomputed from the last drawn frame so a click
        // right after a resize cannot land on stale coordinates.
        let body = crate::ui::layout::compute_layout(self.last_frame_area).body;
        let (controller, area) = match self.current_tab {
            Tab::Monitor => (
                self.monitor_interaction,
                crate::ui::tabs::monitor::gauge_area(body),
            ),
            Tab::Temperature => (
                self.temp_interaction,
                crate::ui::tabs::temperature::gauge_area(body),
            ),
            Tab::Advanced => return,
        };

        let mut picked = None;
        controller.handle_click(column, row, area, |value| picked = Some(value));
        if let Some(value) = picked {
            self.set_target(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn app() -> App {
        let config = Config::parse_from(["poolmon"]);
        App::new(&config).unwrap()
    }

    #[test]
    fn readout_eases_onto_new_reading() {
        let mut app = app();
        app.apply(PoolData {
            current_temp: Some(31.0),
            ..PoolData::default()
        });
        assert_eq!(app.animated_temp, 28.0);
        for _ in 0..100 {
            app.advance_animation();
        }
        assert_eq!(app.animated_temp, 31.0);
        assert_eq!(app.temp_history.as_u64_vec(10), vec![310]);
    }

    #[test]
    fn animation_waits_for_the_tick() {
        let mut app = app();
        app.apply(PoolData {
            current_temp: Some(31.0),
            ..PoolData::default()
        });

        // the loop can wake well inside a tick (key autorepeat, mouse
        // moves); the readout must not move until the tick elapses
        app.last_tick = Instant::now();
        app.maybe_advance();
        assert_eq!(app.animated_temp, 28.0);

        app.last_tick = Instant::now() - app.tick_rate;
        app.maybe_advance();
        assert_eq!(app.animated_temp, 28.5);
    }

    #[test]
    fn null_reading_keeps_last_value() {
        let mut app = app();
        app.apply(PoolData::default());
        assert_eq!(app.current_temp, 28.0);
        assert!(app.temp_history.is_empty());
    }

    #[test]
    fn set_target_rounds_and_clamps() {
        let mut app = app();
        app.set_target(31.4);
        assert_eq!(app.target_temp, 31.0);
        app.set_target(100.0);
        assert_eq!(app.target_temp, pool::TEMP_MAX);
        app.set_target(-10.0);
        assert_eq!(app.target_temp, pool::TEMP_MIN);
    }

    #[test]
    fn match_badge_tracks_animated_readout() {
        let mut app = app();
        assert!(app.temps_match());
        app.apply(PoolData {
            current_temp: Some(35.0),
            ..PoolData::default()
        });
        // reading moved but the readout has not caught up yet, and the
        // target is still 28, so the badge flips to adjusting
        app.advance_animation();
        assert!(!app.temps_match());
    }

    #[test]
    fn tab_bar_click_hits_second_tab() {
        let mut app = app();
        // " 1:Monitor " occupies columns 1..12, gap at 12, next tab after
        app.handle_tab_click(14);
        assert_eq!(app.current_tab, Tab::Temperature);
    }

    #[test]
    fn pool_preset_cycles_past_the_end() {
        let mut app = app();
        for _ in 0..POOL_TYPES.len() {
            app.pool_type_index = (app.pool_type_index + 1) % POOL_TYPES.len();
        }
        assert_eq!(app.pool_type().id, "recreational");
    }
}
