//! Status presenter tests: panel detection, frames and degraded operation.

use enclosure_cooler::adapters::presenter::{LogPresenter, PanelPresenter};
use enclosure_cooler::app::events::AppEvent;
use enclosure_cooler::app::ports::StatusPresenter;
use enclosure_cooler::app::service::ControlLoop;
use enclosure_cooler::config::ControllerConfig;
use enclosure_cooler::control::FanState;
use enclosure_cooler::error::DisplayError;

use crate::mock_hw::{MockClock, MockHardware, MockPanel, RecordingPresenter, RecordingSink};

#[test]
fn missing_panel_reports_and_loop_continues() {
    let mut sink = RecordingSink::new();
    let presenter = PanelPresenter::connect(MockPanel::absent(), &mut sink);

    assert!(presenter.is_none());
    assert_eq!(
        sink.events,
        vec![AppEvent::PresenterUnavailable(DisplayError::NotFound)]
    );

    let mut app = ControlLoop::new(ControllerConfig::default(), presenter);
    let mut hw = MockHardware::with_temperatures(&[28.0]);
    let clock = MockClock::starting_at(0);
    app.tick(&mut hw, &clock, &mut sink);

    assert!(!app.has_presenter());
    assert_eq!(app.fan_state(), FanState::On);
    assert!(hw.fan_on());
}

#[test]
fn connected_panel_draws_splash_then_frames() {
    let mut sink = RecordingSink::new();
    let presenter = PanelPresenter::connect(MockPanel::present(), &mut sink);
    assert!(sink.events.is_empty());

    let mut app = ControlLoop::new(ControllerConfig::default(), presenter);
    let mut hw = MockHardware::with_temperatures(&[25.5]);
    let clock = MockClock::starting_at(0);
    app.tick(&mut hw, &clock, &mut sink);

    let presenter = app.presenter().unwrap();
    let draws = &presenter.panel().draws;
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].0, vec!["Display Initialized"]);
    assert_eq!(draws[1].0, vec!["Temp: 25.50 C", "Fan: OFF", "Pump: OFF"]);
    assert_eq!(draws[1].1, None);
    assert_eq!(presenter.frames(), 1);
}

#[test]
fn lockout_banner_is_highlighted() {
    let mut sink = RecordingSink::new();
    let presenter = PanelPresenter::connect(MockPanel::present(), &mut sink);
    let mut app = ControlLoop::new(ControllerConfig::default(), presenter);
    let mut hw = MockHardware::new();
    hw.set_floats(true, true);
    let clock = MockClock::starting_at(0);

    for _ in 0..7 {
        app.tick(&mut hw, &clock, &mut sink);
        clock.advance(1_000);
    }

    let (rows, highlight) = app.presenter().unwrap().panel().draws.last().unwrap();
    assert_eq!(rows[2], "Pump: OFF");
    assert_eq!(rows[3], "*** LOCKOUT ***");
    assert_eq!(rows[4], "CHECK TANK");
    assert_eq!(*highlight, Some(3));
}

#[test]
fn draw_failures_do_not_stop_control() {
    let mut sink = RecordingSink::new();
    let mut panel = MockPanel::present();
    panel.failing = true;
    // Splash fails too, but the panel answered init so it is kept.
    let presenter = PanelPresenter::connect(panel, &mut sink);
    assert!(presenter.is_some());

    let mut app = ControlLoop::new(ControllerConfig::default(), presenter);
    let mut hw = MockHardware::with_temperatures(&[30.0, 30.0, 23.0]);
    let clock = MockClock::starting_at(0);
    for _ in 0..3 {
        app.tick(&mut hw, &clock, &mut sink);
    }

    let presenter = app.presenter().unwrap();
    assert_eq!(presenter.frames(), 0);
    assert!(presenter.panel().draws.is_empty());
    assert_eq!(app.fan_state(), FanState::Off);
    assert_eq!(app.status().cycle, 3);
}

#[test]
fn paired_presenters_both_render() {
    let presenter = (LogPresenter::new(), RecordingPresenter::default());
    let mut app = ControlLoop::new(ControllerConfig::default(), Some(presenter));
    let mut hw = MockHardware::new();
    let clock = MockClock::starting_at(0);
    let mut sink = RecordingSink::new();

    app.tick(&mut hw, &clock, &mut sink);
    app.tick(&mut hw, &clock, &mut sink);

    let (_, recorder) = app.presenter().unwrap();
    assert_eq!(recorder.frames.len(), 2);
    assert_eq!(recorder.frames[1].cycle, 2);
}

#[test]
fn log_presenter_accepts_failed_reading() {
    let mut presenter = LogPresenter::new();
    let mut sink = RecordingSink::new();
    let mut app: ControlLoop<RecordingPresenter> =
        ControlLoop::new(ControllerConfig::default(), None);
    let mut hw = MockHardware::new();
    hw.fallback = Err(enclosure_cooler::error::SensorError::Disconnected);

    let status = app.tick(&mut hw, &MockClock::starting_at(0), &mut sink);
    presenter.render(&status);
    assert!(status.temperature_c.is_none());
}

#[test]
fn absent_panel_leaves_its_pair_rendering() {
    let mut sink = RecordingSink::new();
    let panel = PanelPresenter::connect(MockPanel::absent(), &mut sink);
    let presenter = (RecordingPresenter::default(), panel);
    let mut app = ControlLoop::new(ControllerConfig::default(), Some(presenter));
    let mut hw = MockHardware::with_temperatures(&[26.5, 25.0]);
    let clock = MockClock::starting_at(0);

    app.start(&mut hw, &mut sink);
    app.tick(&mut hw, &clock, &mut sink);
    app.tick(&mut hw, &clock, &mut sink);

    let (recorder, panel) = app.presenter().unwrap();
    assert!(panel.is_none());
    assert_eq!(recorder.frames.len(), 2);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::PresenterUnavailable(_))),
        1
    );
    assert_eq!(app.fan_state(), FanState::On);
}
