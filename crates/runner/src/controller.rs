//! Controller - the single owner of widget state
//!
//! Applies input events and periodic ticks one at a time:
//! - Preference changes re-render the clock panes immediately
//! - Stopwatch/timer transitions register or drop their tick handle together
//!   with the state change
//! - Ticks from a dropped registration are ignored

use horae_core::{ClockPreferences, Tab};
use horae_engine::{ClockEngine, CountdownTimer, Stopwatch, TimerTick};
use horae_ports::{Clock, Controls, Notification, Notifier, RenderSink, TimeFormatter};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;

use crate::config::WidgetConfig;
use crate::input::InputEvent;
use crate::scheduler::{Tick, TickHandle, TickScheduler, TickSource};

/// Shown when a countdown reaches zero
const TIMER_COMPLETE_MESSAGE: &str = "Timer Complete!";

pub struct WidgetController<S: RenderSink> {
    config: WidgetConfig,
    prefs: ClockPreferences,
    active_tab: Tab,

    clock_engine: ClockEngine,
    stopwatch: Stopwatch,
    timer: CountdownTimer,

    sink: S,
    notifier: Arc<dyn Notifier>,

    scheduler: TickScheduler,
    ticks_rx: Receiver<Tick>,
    clock_ticks: Option<TickHandle>,
    stopwatch_ticks: Option<TickHandle>,
    timer_ticks: Option<TickHandle>,
}

impl<S: RenderSink> WidgetController<S> {
    pub fn new(
        config: WidgetConfig,
        clock: Arc<dyn Clock>,
        formatter: Arc<dyn TimeFormatter>,
        sink: S,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (scheduler, ticks_rx) = TickScheduler::new();
        let clock_engine = ClockEngine::new(clock.clone(), formatter, config.cities.clone());

        Self {
            prefs: config.preferences.clone(),
            config,
            active_tab: Tab::default(),
            clock_engine,
            stopwatch: Stopwatch::new(clock.clone()),
            timer: CountdownTimer::new(clock),
            sink,
            notifier,
            scheduler,
            ticks_rx,
            clock_ticks: None,
            stopwatch_ticks: None,
            timer_ticks: None,
        }
    }

    pub fn preferences(&self) -> &ClockPreferences {
        &self.prefs
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Whether a periodic task is currently registered for `source`
    pub fn is_ticking(&self, source: TickSource) -> bool {
        self.handle(source).is_some()
    }

    /// Render everything and start the clock ticks
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        self.render_all();
        if self.clock_ticks.is_none() {
            self.clock_ticks = Some(
                self.scheduler
                    .start(TickSource::Clock, self.config.clock_interval()),
            );
        }
        log::info!(
            "Widget started ({}h, {}, {} theme)",
            self.prefs.time_format,
            self.prefs.timezone.label(),
            self.prefs.theme.as_str()
        );
    }

    /// Drop every tick registration
    pub fn stop(&mut self) {
        self.clock_ticks = None;
        self.stopwatch_ticks = None;
        self.timer_ticks = None;
    }

    /// Wait for the next tick from any registration, stale or not
    pub async fn next_tick(&mut self) -> Option<Tick> {
        self.ticks_rx.recv().await
    }

    /// Process inputs and ticks until `Quit` or the input channel closes
    ///
    /// Returns the sink so callers can inspect what was rendered.
    pub async fn run(mut self, mut inputs: Receiver<InputEvent>) -> S {
        self.start();

        loop {
            tokio::select! {
                event = inputs.recv() => match event {
                    Some(InputEvent::Quit) | None => break,
                    Some(event) => self.handle_input(event),
                },
                Some(tick) = self.ticks_rx.recv() => {
                    self.handle_tick(tick);
                }
            }
        }

        self.stop();
        log::info!("Widget stopped");
        self.sink
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        log::debug!("Input: {:?}", event);

        match event {
            InputEvent::SetTimeFormat(format) => {
                self.prefs.time_format = format;
                self.sink.set_time_format(format);
                self.render_clock();
            }
            InputEvent::SetTimezone(zone) => {
                self.prefs.timezone = zone;
                self.render_clock();
            }
            InputEvent::ToggleTheme => {
                self.prefs.theme = self.prefs.theme.toggle();
                self.sink.set_theme(self.prefs.theme);
            }
            InputEvent::SelectTab(tab) => {
                self.active_tab = tab;
                self.sink.set_active_tab(tab);
            }

            InputEvent::StopwatchStart => {
                if self.stopwatch.start() {
                    self.stopwatch_ticks = Some(
                        self.scheduler
                            .start(TickSource::Stopwatch, self.config.stopwatch_interval()),
                    );
                    self.sink.set_stopwatch_controls(Controls::running(true));
                }
            }
            InputEvent::StopwatchPause => {
                if self.stopwatch.pause() {
                    self.stopwatch_ticks = None;
                    self.sink.render_stopwatch(&self.stopwatch.digits());
                    self.sink.set_stopwatch_controls(Controls::stopped());
                }
            }
            InputEvent::StopwatchReset => {
                self.stopwatch.reset();
                self.stopwatch_ticks = None;
                self.sink.render_stopwatch(&self.stopwatch.digits());
                self.sink.render_laps(&[]);
                self.sink.set_stopwatch_controls(Controls::stopped());
            }
            InputEvent::StopwatchLap => {
                if self.stopwatch.lap().is_some() {
                    self.sink.render_laps(&self.stopwatch.formatted_laps());
                }
            }

            InputEvent::TimerField(field, raw) => {
                if self.timer.set_input(field, &raw) {
                    self.sink.render_timer(&self.timer.display());
                }
            }
            InputEvent::TimerStart => match self.timer.start() {
                Ok(true) => {
                    self.timer_ticks = Some(
                        self.scheduler
                            .start(TickSource::Timer, self.config.timer_interval()),
                    );
                    self.sink.render_timer(&self.timer.display());
                    self.sink.set_timer_controls(Controls::running(false));
                }
                Ok(false) => {}
                Err(e) => {
                    log::debug!("Timer start rejected: {}", e);
                    self.sink.show_message(&e.to_string());
                }
            },
            InputEvent::TimerPause => {
                if self.timer.pause() {
                    self.timer_ticks = None;
                    self.sink.render_timer(&self.timer.display());
                    self.sink.set_timer_controls(Controls::stopped());
                }
            }
            InputEvent::TimerReset => {
                self.timer.reset();
                self.timer_ticks = None;
                self.sink.render_timer(&self.timer.display());
                self.sink.set_timer_controls(Controls::stopped());
            }

            InputEvent::Quit => self.stop(),
        }
    }

    /// Apply a tick. Returns false if it came from a dropped registration.
    pub fn handle_tick(&mut self, tick: Tick) -> bool {
        let current = self.handle(tick.source).is_some_and(|h| h.accepts(&tick));
        if !current {
            log::trace!("Ignoring stale {:?} tick #{}", tick.source, tick.generation);
            return false;
        }

        match tick.source {
            TickSource::Clock => self.render_clock(),
            TickSource::Stopwatch => {
                self.stopwatch.tick();
                self.sink.render_stopwatch(&self.stopwatch.digits());
            }
            TickSource::Timer => match self.timer.tick() {
                TimerTick::Remaining(_) => self.sink.render_timer(&self.timer.display()),
                TimerTick::Completed => self.complete_timer(),
                TimerTick::Idle => {}
            },
        }
        true
    }

    /// Re-render every surface from current state
    pub fn render_all(&mut self) {
        self.sink.set_theme(self.prefs.theme);
        self.sink.set_time_format(self.prefs.time_format);
        self.sink.set_active_tab(self.active_tab);
        self.render_clock();

        self.sink.render_stopwatch(&self.stopwatch.digits());
        self.sink.render_laps(&self.stopwatch.formatted_laps());
        self.sink.set_stopwatch_controls(if self.stopwatch.is_running() {
            Controls::running(true)
        } else {
            Controls::stopped()
        });

        self.sink.render_timer(&self.timer.display());
        self.sink.set_timer_controls(if self.timer.is_running() {
            Controls::running(false)
        } else {
            Controls::stopped()
        });
    }

    fn render_clock(&mut self) {
        let snapshot = self.clock_engine.snapshot(&self.prefs);
        self.sink.render_clock(&snapshot.clock);
        self.sink.render_world_clock(&snapshot.cities);
    }

    fn complete_timer(&mut self) {
        self.timer_ticks = None;
        self.sink.render_timer(&self.timer.display());
        self.sink.set_timer_controls(Controls::stopped());

        if let Err(e) = self.notifier.notify(&Notification::timer_complete()) {
            log::warn!("{} could not deliver notification: {}", self.notifier.name(), e);
        }
        self.sink.show_message(TIMER_COMPLETE_MESSAGE);
    }

    fn handle(&self, source: TickSource) -> Option<&TickHandle> {
        match source {
            TickSource::Clock => self.clock_ticks.as_ref(),
            TickSource::Stopwatch => self.stopwatch_ticks.as_ref(),
            TickSource::Timer => self.timer_ticks.as_ref(),
        }
    }
}
