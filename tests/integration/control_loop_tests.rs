//! ControlLoop orchestration tests against mock adapters.

use enclosure_cooler::app::events::AppEvent;
use enclosure_cooler::app::service::ControlLoop;
use enclosure_cooler::config::ControllerConfig;
use enclosure_cooler::control::{FanState, PumpState};
use enclosure_cooler::error::Fault;

use crate::mock_hw::{
    ActuatorCall, MockClock, MockHardware, RecordingDelay, RecordingPresenter, RecordingSink,
};

fn make_loop() -> ControlLoop<RecordingPresenter> {
    ControlLoop::new(ControllerConfig::default(), Some(RecordingPresenter::default()))
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_drives_outputs_low_and_announces() {
    let mut app = make_loop();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();

    app.start(&mut hw, &mut sink);

    assert_eq!(hw.calls, vec![ActuatorCall::AllOff]);
    assert_eq!(sink.events, vec![AppEvent::Started]);
    assert_eq!(app.fan_state(), FanState::Off);
    assert_eq!(app.pump_state(), PumpState::Idle);
}

// ── Cycle body ────────────────────────────────────────────────

#[test]
fn outputs_rewritten_every_cycle() {
    let mut app = make_loop();
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    for _ in 0..4 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
    }

    let fan_writes = hw
        .calls
        .iter()
        .filter(|c| matches!(c, ActuatorCall::Fan(_)))
        .count();
    assert_eq!(fan_writes, 4);
    assert_eq!(hw.pump_writes(), 4);
    assert_eq!(hw.temperature_reads, 4);
    assert_eq!(hw.float_reads, 4);
}

#[test]
fn fan_written_before_pump() {
    let mut app = make_loop();
    let mut hw = MockHardware::with_temperatures(&[27.0]);
    hw.set_floats(true, true);
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    app.tick(&mut hw, &clock, &mut sink);

    assert_eq!(
        hw.calls,
        vec![ActuatorCall::Fan(true), ActuatorCall::Pump(true)]
    );
}

#[test]
fn cycle_sleeps_for_the_configured_period() {
    let config = ControllerConfig {
        control_period_ms: 250,
        ..ControllerConfig::default()
    };
    let mut app: ControlLoop<RecordingPresenter> = ControlLoop::new(config, None);
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(0);
    let mut delay = RecordingDelay::default();
    let mut sink = RecordingSink::new();

    app.cycle(&mut hw, &clock, &mut delay, &mut sink);
    app.cycle(&mut hw, &clock, &mut delay, &mut sink);

    assert_eq!(delay.slept_ms, vec![250, 250]);
    assert_eq!(app.period_ms(), 250);
}

#[test]
fn presenter_sees_every_cycle() {
    let mut app = make_loop();
    let mut hw = MockHardware::with_temperatures(&[25.0, 26.5, 26.0]);
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    let mut returned = Vec::new();
    for _ in 0..3 {
        returned.push(app.tick(&mut hw, &clock, &mut sink));
        clock.advance(1_000);
    }

    let frames = &app.presenter().unwrap().frames;
    assert_eq!(frames.len(), 3);
    assert_eq!(frames, &returned);
    assert_eq!(frames[0].cycle, 1);
    assert_eq!(frames[1].temperature_c, Some(26.5));
    assert_eq!(frames[1].fan, FanState::On);
}

#[test]
fn runs_without_a_presenter() {
    let mut app: ControlLoop<RecordingPresenter> =
        ControlLoop::new(ControllerConfig::default(), None);
    let mut hw = MockHardware::with_temperatures(&[30.0]);
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    let status = app.tick(&mut hw, &clock, &mut sink);

    assert!(!app.has_presenter());
    assert_eq!(status.fan, FanState::On);
    assert!(hw.fan_on());
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn fan_change_emitted_only_on_transition() {
    let mut app = make_loop();
    let mut hw = MockHardware::with_temperatures(&[26.0, 27.0, 25.0, 24.0]);
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    for _ in 0..4 {
        app.tick(&mut hw, &clock, &mut sink);
    }

    let changes: Vec<_> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::FanChanged(s) => Some(*s),
            _ => None,
        })
        .collect();
    assert_eq!(changes, vec![FanState::On, FanState::Off]);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::TemperatureSampled(_))), 4);
}

#[test]
fn pump_stop_reports_runtime() {
    let mut app = make_loop();
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(10_000);
    let mut sink = RecordingSink::new();

    hw.set_floats(true, true);
    app.tick(&mut hw, &clock, &mut sink);
    clock.advance(3_000);
    hw.set_floats(false, true);
    app.tick(&mut hw, &clock, &mut sink);

    assert_eq!(sink.count(|e| *e == AppEvent::PumpStarted), 1);
    assert_eq!(
        sink.count(|e| *e == AppEvent::PumpStopped { runtime_ms: 3_000 }),
        1
    );
    assert!(!hw.pump_on());
}

#[test]
fn single_float_never_starts_pump() {
    let mut app = make_loop();
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    for i in 0..20 {
        hw.set_floats(i % 2 == 0, i % 2 == 1);
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
        assert_eq!(app.pump_state(), PumpState::Idle);
    }

    assert!(
        hw.calls
            .iter()
            .all(|c| *c != ActuatorCall::Pump(true))
    );
    assert_eq!(sink.count(|e| *e == AppEvent::PumpStarted), 0);
}

#[test]
fn lockout_survives_floats_clearing() {
    let mut app = make_loop();
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    hw.set_floats(true, true);
    for _ in 0..7 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
    }
    assert_eq!(app.pump_state(), PumpState::LockedOut);

    hw.set_floats(false, false);
    for _ in 0..5 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
    }
    hw.set_floats(true, true);
    app.tick(&mut hw, &clock, &mut sink);

    assert_eq!(app.pump_state(), PumpState::LockedOut);
    assert!(app.state().is_locked_out());
    assert!(!hw.pump_on());
    assert_eq!(sink.count(|e| matches!(e, AppEvent::FaultDetected(_))), 1);
    assert_eq!(sink.count(|e| *e == AppEvent::PumpStarted), 1);
}

#[test]
fn lockout_across_clock_wraparound() {
    let mut app = make_loop();
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(u32::MAX - 500);
    let mut sink = RecordingSink::new();
    hw.set_floats(true, true);

    // Runtime after cycle k is (k - 1) * 1000 ms; 6000 > 5000 at k = 7.
    for cycle in 1..=6 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
        assert!(
            app.pump_state().is_running(),
            "pump should still run at cycle {cycle}"
        );
    }
    app.tick(&mut hw, &clock, &mut sink);

    assert_eq!(app.pump_state(), PumpState::LockedOut);
    assert_eq!(
        sink.count(|e| *e
            == AppEvent::FaultDetected(Fault::PumpOverrun { runtime_ms: 6_000 })),
        1
    );
}

#[test]
fn custom_runtime_limit_is_honoured() {
    let config = ControllerConfig {
        max_pump_runtime_ms: 2_000,
        ..ControllerConfig::default()
    };
    let mut app: ControlLoop<RecordingPresenter> = ControlLoop::new(config, None);
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();
    hw.set_floats(true, true);

    for _ in 0..3 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
    }
    assert!(app.pump_state().is_running());

    app.tick(&mut hw, &clock, &mut sink);
    assert!(app.pump_state().is_locked_out());
}

#[test]
fn runs_against_the_log_sink() {
    use enclosure_cooler::adapters::log_sink::LogEventSink;
    use enclosure_cooler::error::SensorError;

    let mut app = make_loop();
    let mut hw = MockHardware::with_temperatures(&[27.0, 23.0]);
    hw.fallback = Err(SensorError::ConversionFailed);
    hw.set_floats(true, true);
    let clock = MockClock::starting_at(0);
    let mut sink = LogEventSink::new();

    app.start(&mut hw, &mut sink);
    for _ in 0..8 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
    }

    assert!(app.pump_state().is_locked_out());
    assert_eq!(app.fan_state(), FanState::Off);
}
