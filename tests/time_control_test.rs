//! Integration test: byo-yomi clocks driven through session ticks

use stoneplay::{
    format_clock, EndReason, GameError, GameEvent, GameMode, GamePhase, GameResult, GameSession,
    GameSettings, Stone,
};

fn session_with_clock(main_time: u32, byo_yomi_time: u32, byo_yomi_periods: u32) -> GameSession {
    let settings = GameSettings {
        main_time,
        byo_yomi_time,
        byo_yomi_periods,
        ..GameSettings::default()
    };
    GameSession::with_settings(GameMode::Go, settings).unwrap()
}

fn time(black_seconds: u32, white_seconds: u32) -> GameEvent {
    GameEvent::TimeUpdated {
        black_seconds,
        white_seconds,
    }
}

#[test]
fn test_tick_charges_side_to_move() {
    let mut session = session_with_clock(10, 5, 1);

    assert_eq!(session.tick().unwrap(), vec![time(9, 10)]);
    session.submit_move(3, 3).unwrap();
    assert_eq!(session.tick().unwrap(), vec![time(9, 9)]);
}

#[test]
fn test_main_time_runs_into_byo_yomi() {
    let mut session = session_with_clock(2, 3, 1);

    session.tick().unwrap();
    let events = session.tick().unwrap();

    // Clock face switches to the period
    assert_eq!(events, vec![time(3, 2)]);
    assert!(session.is_in_byo_yomi(Stone::Black));
    assert!(!session.is_in_byo_yomi(Stone::White));
    assert_eq!(session.byo_yomi_periods(Stone::Black), 1);
}

#[test]
fn test_move_in_byo_yomi_renews_period() {
    let mut session = session_with_clock(1, 3, 1);
    session.tick().unwrap();
    session.tick().unwrap();
    assert_eq!(session.remaining_time(Stone::Black), 2);

    let events = session.submit_move(3, 3).unwrap();

    assert_eq!(events, vec![GameEvent::BoardUpdated, time(3, 1)]);
    assert_eq!(session.remaining_time(Stone::Black), 3);
}

#[test]
fn test_last_period_expiring_loses_on_time() {
    let mut session = session_with_clock(1, 2, 1);

    session.tick().unwrap();
    session.tick().unwrap();
    let events = session.tick().unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::GameOver {
                winner: Some(Stone::White)
            },
            GameEvent::GamePhaseChanged(GamePhase::Finished),
            time(0, 1),
        ]
    );
    assert_eq!(session.result(), Some(GameResult::WhiteWin));
    assert_eq!(session.outcome().unwrap().reason, EndReason::Timeout);
    assert_eq!(
        session.tick(),
        Err(GameError::NotPlaying(GamePhase::Finished))
    );
}

#[test]
fn test_periods_are_consumed_one_by_one() {
    let mut session = session_with_clock(0, 2, 3);

    for _ in 0..2 {
        session.tick().unwrap();
    }
    assert_eq!(session.byo_yomi_periods(Stone::Black), 2);
    assert_eq!(session.remaining_time(Stone::Black), 2);
    assert_eq!(session.phase(), GamePhase::Playing);
}

#[test]
fn test_without_periods_main_time_is_final() {
    let mut session = session_with_clock(2, 30, 0);

    session.tick().unwrap();
    session.tick().unwrap();

    assert_eq!(session.phase(), GamePhase::Finished);
    assert_eq!(session.outcome().unwrap().reason, EndReason::Timeout);
}

#[test]
fn test_white_times_out() {
    let mut session = session_with_clock(1, 0, 0);
    session.submit_move(3, 3).unwrap();

    session.tick().unwrap();

    assert_eq!(session.result(), Some(GameResult::BlackWin));
}

#[test]
fn test_settings_locked_after_a_tick() {
    let mut session = GameSession::new(GameMode::Go);
    session.tick().unwrap();

    assert_eq!(
        session.set_game_settings(GameSettings::default()),
        Err(GameError::SettingsLocked)
    );
}

#[test]
fn test_settings_rederive_clocks_before_start() {
    let mut session = GameSession::new(GameMode::Go);
    let settings = GameSettings {
        main_time: 300,
        ..GameSettings::default()
    };

    let events = session.set_game_settings(settings).unwrap();

    assert_eq!(events, vec![time(300, 300)]);
    assert_eq!(format_clock(session.remaining_time(Stone::White)), "05:00");
}

#[test]
fn test_clock_stops_when_game_ends() {
    let mut session = session_with_clock(10, 5, 1);
    session.tick().unwrap();
    session.request_draw().unwrap();

    assert_eq!(session.remaining_time(Stone::Black), 9);
    session.reset_game();
    assert_eq!(session.remaining_time(Stone::Black), 10);
    assert_eq!(session.tick().unwrap(), vec![time(9, 10)]);
}
