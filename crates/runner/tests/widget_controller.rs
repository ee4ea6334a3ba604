//! Widget Controller Integration Test
//!
//! Drives the controller end to end with:
//! - A manual clock (engine time)
//! - Paused tokio time (tick scheduling)
//! - A recording render sink and a counting notifier

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use horae_clock::{ManualClock, TzFormatter};
use horae_core::{
    DurationField, ElapsedDigits, Tab, Theme, TimeFormat, ZoneSelection,
};
use horae_engine::{StopwatchStatus, TimerStatus};
use horae_ports::{
    CityView, ClockView, Controls, Notification, Notifier, NotifyError, NotifyResult, RenderSink,
};
use horae_runner::{InputEvent, Tick, TickSource, WidgetConfig, WidgetController};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

#[derive(Default)]
struct RecordingSink {
    clock: Option<ClockView>,
    cities: Vec<CityView>,
    stopwatch: ElapsedDigits,
    laps: Vec<String>,
    timer: String,
    stopwatch_controls: Controls,
    timer_controls: Controls,
    tab: Tab,
    format: TimeFormat,
    theme: Theme,
    messages: Vec<String>,
}

impl RenderSink for RecordingSink {
    fn render_clock(&mut self, view: &ClockView) {
        self.clock = Some(view.clone());
    }

    fn render_world_clock(&mut self, cities: &[CityView]) {
        self.cities = cities.to_vec();
    }

    fn render_stopwatch(&mut self, digits: &ElapsedDigits) {
        self.stopwatch = *digits;
    }

    fn render_laps(&mut self, laps: &[String]) {
        self.laps = laps.to_vec();
    }

    fn render_timer(&mut self, display: &str) {
        self.timer = display.to_string();
    }

    fn set_stopwatch_controls(&mut self, controls: Controls) {
        self.stopwatch_controls = controls;
    }

    fn set_timer_controls(&mut self, controls: Controls) {
        self.timer_controls = controls;
    }

    fn set_active_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    fn set_time_format(&mut self, format: TimeFormat) {
        self.format = format;
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[derive(Default)]
struct CountingNotifier {
    calls: AtomicUsize,
    fail: bool,
}

impl Notifier for CountingNotifier {
    fn notify(&self, _notification: &Notification) -> NotifyResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(NotifyError::PermissionDenied)
        } else {
            Ok(())
        }
    }
}

struct Harness {
    clock: Arc<ManualClock>,
    notifier: Arc<CountingNotifier>,
    controller: WidgetController<RecordingSink>,
}

fn harness_with(notifier: CountingNotifier) -> Harness {
    let _ = env_logger::try_init();

    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 13, 4, 5).unwrap());
    let notifier = Arc::new(notifier);
    let controller = WidgetController::new(
        WidgetConfig::default(),
        clock.clone(),
        Arc::new(TzFormatter::with_local_zone(Tz::UTC)),
        RecordingSink::default(),
        notifier.clone(),
    );

    Harness {
        clock,
        notifier,
        controller,
    }
}

fn harness() -> Harness {
    harness_with(CountingNotifier::default())
}

/// Wait for the next tick from `source`, applying any other ticks on the way
async fn next_tick_from(
    controller: &mut WidgetController<RecordingSink>,
    source: TickSource,
) -> Tick {
    loop {
        let tick = controller.next_tick().await.expect("tick channel closed");
        if tick.source == source {
            return tick;
        }
        controller.handle_tick(tick);
    }
}

/// Wait for and apply the next tick from `source`
async fn pump(controller: &mut WidgetController<RecordingSink>, source: TickSource) -> bool {
    let tick = next_tick_from(controller, source).await;
    controller.handle_tick(tick)
}

#[tokio::test(start_paused = true)]
async fn test_start_renders_every_pane() {
    let mut h = harness();
    h.controller.start();

    let sink = h.controller.sink();
    let clock = sink.clock.as_ref().unwrap();
    assert_eq!(clock.time, "01:04:05");
    assert_eq!(clock.meridiem, Some("PM"));
    assert_eq!(clock.zone_label, "Local Time");
    assert_eq!(clock.day_of_year, "Day 291 of 365");
    assert_eq!(sink.cities.len(), 4);
    assert_eq!(sink.timer, "00:00:00");
    assert_eq!(sink.stopwatch_controls, Controls::stopped());
    assert!(h.controller.is_ticking(TickSource::Clock));
    assert!(!h.controller.is_ticking(TickSource::Stopwatch));
}

#[tokio::test(start_paused = true)]
async fn test_clock_ticks_follow_the_clock() {
    let mut h = harness();
    h.controller.start();

    h.clock.advance_millis(1_000);
    assert!(pump(&mut h.controller, TickSource::Clock).await);
    assert_eq!(h.controller.sink().clock.as_ref().unwrap().time, "01:04:06");
}

#[tokio::test(start_paused = true)]
async fn test_format_change_rerenders_immediately() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::SetTimeFormat(TimeFormat::TwentyFour));

    let sink = h.controller.sink();
    let clock = sink.clock.as_ref().unwrap();
    assert_eq!(sink.format, TimeFormat::TwentyFour);
    assert_eq!(clock.time, "13:04:05");
    assert_eq!(clock.meridiem, None);
    assert_eq!(sink.cities[1].time, "14:04:05"); // London is on BST in October
}

#[tokio::test(start_paused = true)]
async fn test_timezone_change() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::SetTimezone(ZoneSelection::named("Asia/Tokyo")));

    let clock = h.controller.sink().clock.clone().unwrap();
    assert_eq!(clock.time, "10:04:05");
    assert_eq!(clock.meridiem, Some("PM"));
    assert_eq!(clock.zone_label, "Asia/Tokyo");
}

#[tokio::test(start_paused = true)]
async fn test_unknown_timezone_degrades_to_placeholders() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::SetTimezone(ZoneSelection::named("Moon/Tranquility")));

    let sink = h.controller.sink();
    let clock = sink.clock.as_ref().unwrap();
    assert_eq!(clock.time, "--:--:--");
    assert_eq!(clock.date, "--");
    // World clock is unaffected
    assert!(sink.cities.iter().all(|c| c.time != "--:--:--"));
}

#[tokio::test(start_paused = true)]
async fn test_theme_and_tabs() {
    let mut h = harness();
    h.controller.start();
    h.controller.handle_input(InputEvent::ToggleTheme);
    h.controller.handle_input(InputEvent::SelectTab(Tab::Timer));

    assert_eq!(h.controller.sink().theme, Theme::Dark);
    assert_eq!(h.controller.sink().tab, Tab::Timer);
    assert_eq!(h.controller.active_tab(), Tab::Timer);

    h.controller.handle_input(InputEvent::ToggleTheme);
    assert_eq!(h.controller.preferences().theme, Theme::Light);
}

#[tokio::test(start_paused = true)]
async fn test_stopwatch_pause_and_resume() {
    let mut h = harness();
    h.controller.start();

    h.controller.handle_input(InputEvent::StopwatchStart);
    assert_eq!(h.controller.sink().stopwatch_controls, Controls::running(true));
    h.clock.advance_millis(2_000);
    assert!(pump(&mut h.controller, TickSource::Stopwatch).await);
    assert_eq!(h.controller.sink().stopwatch.seconds, 2);

    h.controller.handle_input(InputEvent::StopwatchPause);
    assert!(!h.controller.is_ticking(TickSource::Stopwatch));

    // Paused time is not counted
    h.clock.advance_millis(30_000);
    h.controller.handle_input(InputEvent::StopwatchStart);
    h.clock.advance_millis(1_500);
    h.controller.handle_input(InputEvent::StopwatchPause);

    let digits = h.controller.sink().stopwatch;
    assert_eq!((digits.seconds, digits.centiseconds), (3, 50));
    assert_eq!(h.controller.stopwatch().status(), StopwatchStatus::Paused);
    assert_eq!(h.controller.sink().stopwatch_controls, Controls::stopped());
}

#[tokio::test(start_paused = true)]
async fn test_stale_stopwatch_tick_is_noop() {
    let mut h = harness();
    h.controller.start();
    h.controller.handle_input(InputEvent::StopwatchStart);
    h.clock.advance_millis(1_000);
    let stale = next_tick_from(&mut h.controller, TickSource::Stopwatch).await;

    h.controller.handle_input(InputEvent::StopwatchPause);
    let frozen = h.controller.sink().stopwatch;

    h.clock.advance_millis(5_000);
    assert!(!h.controller.handle_tick(stale));
    assert_eq!(h.controller.sink().stopwatch, frozen);

    // Still stale after a fresh registration
    h.controller.handle_input(InputEvent::StopwatchStart);
    assert!(!h.controller.handle_tick(stale));
}

#[tokio::test(start_paused = true)]
async fn test_laps_and_reset() {
    let mut h = harness();
    h.controller.start();

    h.controller.handle_input(InputEvent::StopwatchLap);
    assert!(h.controller.sink().laps.is_empty());

    h.controller.handle_input(InputEvent::StopwatchStart);
    h.clock.advance_millis(1_230);
    h.controller.handle_input(InputEvent::StopwatchLap);
    h.clock.advance_millis(1_000);
    h.controller.handle_input(InputEvent::StopwatchLap);
    assert_eq!(h.controller.sink().laps, ["00:00:02.23", "00:00:01.23"]);

    h.controller.handle_input(InputEvent::StopwatchReset);
    let sink = h.controller.sink();
    assert!(sink.laps.is_empty());
    assert_eq!(sink.stopwatch, ElapsedDigits::default());
    assert_eq!(sink.stopwatch_controls, Controls::stopped());
    assert!(!h.controller.is_ticking(TickSource::Stopwatch));
}

#[tokio::test(start_paused = true)]
async fn test_zero_duration_timer_is_rejected() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Minutes, "zero".to_string()));
    h.controller.handle_input(InputEvent::TimerStart);

    assert_eq!(h.controller.sink().messages, ["Please set a timer duration"]);
    assert_eq!(h.controller.timer().status(), TimerStatus::Idle);
    assert!(!h.controller.is_ticking(TickSource::Timer));
}

#[tokio::test(start_paused = true)]
async fn test_oversized_timer_is_rejected() {
    let mut h = harness();
    h.controller.start();
    h.controller.handle_input(InputEvent::TimerField(
        DurationField::Hours,
        "4294967295".to_string(),
    ));
    h.controller.handle_input(InputEvent::TimerStart);

    assert_eq!(h.controller.sink().messages, ["Timer duration is too long"]);
    assert_eq!(h.controller.timer().status(), TimerStatus::Idle);
    assert!(!h.controller.is_ticking(TickSource::Timer));
}

#[tokio::test(start_paused = true)]
async fn test_field_edits_ignored_while_running() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Seconds, "30".to_string()));
    h.controller.handle_input(InputEvent::TimerStart);
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Minutes, "5".to_string()));

    assert_eq!(h.controller.sink().timer, "00:00:30");
    assert_eq!(h.controller.timer().input().minutes, 0);

    h.clock.advance_millis(1_000);
    pump(&mut h.controller, TickSource::Timer).await;
    h.controller.handle_input(InputEvent::TimerPause);
    assert_eq!(h.controller.sink().timer, "00:00:29");
}

#[tokio::test(start_paused = true)]
async fn test_field_edits_update_display() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Hours, "1".to_string()));
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Seconds, "5".to_string()));
    assert_eq!(h.controller.sink().timer, "01:00:05");
}

#[tokio::test(start_paused = true)]
async fn test_timer_completes_exactly_once() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Seconds, "2".to_string()));
    h.controller.handle_input(InputEvent::TimerStart);
    assert_eq!(h.controller.sink().timer_controls, Controls::running(false));

    let mut ticks = 0;
    while h.controller.is_ticking(TickSource::Timer) {
        h.clock.advance_millis(100);
        pump(&mut h.controller, TickSource::Timer).await;
        ticks += 1;
        assert!(ticks <= 25, "timer never completed");
    }

    let sink = h.controller.sink();
    assert_eq!(ticks, 20);
    assert_eq!(sink.timer, "00:00:00");
    assert_eq!(sink.messages, ["Timer Complete!"]);
    assert_eq!(sink.timer_controls, Controls::stopped());
    assert_eq!(h.controller.timer().status(), TimerStatus::Completed);
    assert_eq!(h.notifier.calls.load(Ordering::SeqCst), 1);

    // Nothing fires again while completed
    h.clock.advance_millis(3_000);
    for _ in 0..3 {
        pump(&mut h.controller, TickSource::Clock).await;
    }
    assert_eq!(h.controller.sink().messages.len(), 1);
    assert_eq!(h.notifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_notification_failure_does_not_block_completion() {
    let mut h = harness_with(CountingNotifier {
        fail: true,
        ..Default::default()
    });
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Seconds, "1".to_string()));
    h.controller.handle_input(InputEvent::TimerStart);

    h.clock.advance_millis(1_000);
    pump(&mut h.controller, TickSource::Timer).await;

    assert_eq!(h.controller.timer().status(), TimerStatus::Completed);
    assert_eq!(h.controller.sink().messages, ["Timer Complete!"]);
    assert_eq!(h.notifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_timer_pause_resumes_from_display() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Minutes, "1".to_string()));
    h.controller.handle_input(InputEvent::TimerStart);

    h.clock.advance_millis(10_400);
    pump(&mut h.controller, TickSource::Timer).await;
    assert_eq!(h.controller.sink().timer, "00:00:49");

    h.controller.handle_input(InputEvent::TimerPause);
    assert!(!h.controller.is_ticking(TickSource::Timer));
    assert_eq!(h.controller.sink().timer, "00:00:49");

    h.clock.advance_millis(60_000);
    h.controller.handle_input(InputEvent::TimerStart);
    assert_eq!(h.controller.sink().timer, "00:00:49");
}

#[tokio::test(start_paused = true)]
async fn test_timer_reset_clears_inputs() {
    let mut h = harness();
    h.controller.start();
    h.controller
        .handle_input(InputEvent::TimerField(DurationField::Seconds, "30".to_string()));
    h.controller.handle_input(InputEvent::TimerStart);
    h.controller.handle_input(InputEvent::TimerReset);

    assert_eq!(h.controller.sink().timer, "00:00:00");
    assert!(h.controller.timer().input().is_zero());
    assert!(!h.controller.is_ticking(TickSource::Timer));
}

#[tokio::test(start_paused = true)]
async fn test_run_loop_until_quit() {
    let h = harness();
    let (tx, rx) = mpsc::channel(16);
    tx.send(InputEvent::ToggleTheme).await.unwrap();
    tx.send(InputEvent::SelectTab(Tab::World)).await.unwrap();
    tx.send(InputEvent::StopwatchStart).await.unwrap();
    tx.send(InputEvent::Quit).await.unwrap();

    let sink = h.controller.run(rx).await;
    assert_eq!(sink.theme, Theme::Dark);
    assert_eq!(sink.tab, Tab::World);
    assert_eq!(sink.stopwatch_controls, Controls::running(true));
}
