//! Tests for the session registry.

use std::thread;
use tictactoe::{GameStatus, Mark, SessionError, SessionManager, TurnOutcome};

#[test]
fn test_sessions_are_independent() {
    let manager = SessionManager::new();
    manager.create_session("a", "Ada", "Grace").unwrap();
    manager.create_session("b", "Alan", "Edsger").unwrap();

    for index in [0, 3, 1, 4, 2] {
        manager.play_turn("a", index).unwrap();
    }
    manager.play_turn("b", 4).unwrap();

    let a = manager.view("a").unwrap();
    let b = manager.view("b").unwrap();
    assert_eq!(*a.status(), GameStatus::Won(Mark::X));
    assert_eq!(a.scores().wins(Mark::X), 1);
    assert_eq!(*b.status(), GameStatus::InProgress);
    assert_eq!(b.scores().rounds(), 0);
    assert_eq!(b.board().occupied_count(), 1);
    assert_eq!(b.player_a(), "Alan");
}

#[test]
fn test_duplicate_session_rejected() {
    let manager = SessionManager::new();
    manager.create_session("a", "Ada", "Grace").unwrap();
    assert_eq!(
        manager.create_session("a", "X", "Y"),
        Err(SessionError::SessionExists("a".to_string()))
    );
    assert_eq!(manager.view("a").unwrap().player_a(), "Ada");
}

#[test]
fn test_unknown_session() {
    let manager = SessionManager::new();
    assert_eq!(
        manager.play_turn("missing", 0),
        Err(SessionError::SessionNotFound("missing".to_string()))
    );
    assert!(manager.reset_game("missing").is_err());
    assert!(manager.view("missing").is_err());
}

#[test]
fn test_invalid_index_is_wrapped() {
    let manager = SessionManager::new();
    manager.create_session("a", "Ada", "Grace").unwrap();
    let err = manager.play_turn("a", 11).unwrap_err();
    assert!(matches!(err, SessionError::InvalidIndex(e) if e.index() == 11));
    assert!(err.to_string().contains("11"));
}

#[test]
fn test_reset_and_remove() {
    let manager = SessionManager::new();
    manager.create_session("b", "Ada", "Grace").unwrap();
    manager.create_session("a", "Ada", "Grace").unwrap();
    for index in [0, 3, 1, 4, 2] {
        manager.play_turn("a", index).unwrap();
    }
    manager.reset_game("a").unwrap();

    let view = manager.view("a").unwrap();
    assert_eq!(view.board().occupied_count(), 0);
    assert_eq!(view.scores().wins(Mark::X), 1);

    assert_eq!(manager.session_ids().unwrap(), vec!["a", "b"]);
    assert_eq!(manager.remove_session("a"), Ok(true));
    assert_eq!(manager.remove_session("a"), Ok(false));
    assert_eq!(manager.session_ids().unwrap(), vec!["b"]);
}

#[test]
fn test_concurrent_moves_are_serialized() {
    let manager = SessionManager::new();
    manager.create_session("shared", "Ada", "Grace").unwrap();

    // Every thread races for every cell; each cell is claimed exactly once.
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let manager = manager.clone();
            thread::spawn(move || {
                (0..9)
                    .map(|i| manager.play_turn("shared", i).unwrap())
                    .filter(|o| o.is_accepted())
                    .count()
            })
        })
        .collect();

    let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    let view = manager.view("shared").unwrap();
    assert_eq!(accepted, view.board().occupied_count());
    assert!(view.status().is_over());
}

#[test]
fn test_view_serializes() {
    let manager = SessionManager::new();
    manager.create_session("a", "Ada", "Grace").unwrap();
    assert_eq!(
        manager.play_turn("a", 4).unwrap(),
        TurnOutcome::Accepted(GameStatus::InProgress)
    );

    let json = serde_json::to_value(manager.view("a").unwrap()).unwrap();
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["current"], "O");
    assert_eq!(json["player_a"], "Ada");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
}
