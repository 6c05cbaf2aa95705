//! Skins scenarios played through a full round.

use golf_scorecard::games::SkinsHoleOutcome;
use golf_scorecard::{
    Course, CourseDraft, Hole, HoleNumber, Player, PlayerId, Round, RoundConfig, SkinsMode,
};

/// Par-4 course with stroke index equal to the hole number.
fn course() -> Course {
    let holes = (0..18)
        .map(|i| Hole::new(HoleNumber::from_index(i), 4, 400, i as u8 + 1))
        .collect();
    CourseDraft::new("Test Links", holes).validate(0).course
}

fn round(handicaps: &[i32], mode: SkinsMode) -> Round {
    let players = handicaps
        .iter()
        .enumerate()
        .map(|(i, &h)| Player::new(format!("P{i}"), h))
        .collect();
    let config = RoundConfig::default().with_skins_mode(mode);
    Round::with_course("skins", config, players, course()).unwrap()
}

fn enter(round: &mut Round, player: u8, scores: &[u8]) {
    for (i, s) in scores.iter().enumerate() {
        round
            .enter_score(PlayerId::new(player), i as u8 + 1, &s.to_string())
            .unwrap();
    }
}

/// Two scratch players, push mode, holes 1-3.
#[test]
fn test_push_mode_two_players() {
    let mut r = round(&[0, 0], SkinsMode::Push);
    enter(&mut r, 0, &[4, 5, 4]);
    enter(&mut r, 1, &[4, 5, 5]);

    let skins = r.summary().skins.unwrap();
    assert_eq!(skins.holes[0].outcome, SkinsHoleOutcome::Pushed);
    assert_eq!(skins.holes[1].outcome, SkinsHoleOutcome::Pushed);
    assert_eq!(skins.holes[2].winner, Some(PlayerId::new(0)));
    assert_eq!(skins.totals[PlayerId::new(0)], 1);
    assert_eq!(skins.totals[PlayerId::new(1)], 0);
    assert_eq!(skins.final_carryover, 0);
}

/// Handicap strokes decide skins: a net win despite a worse gross.
#[test]
fn test_net_scores_decide_skins() {
    // Player 1 gets a stroke on holes 1-10.
    let mut r = round(&[0, 10], SkinsMode::Push);
    enter(&mut r, 0, &[4, 4]);
    enter(&mut r, 1, &[4, 5]);

    let skins = r.summary().skins.unwrap();
    assert_eq!(skins.holes[0].winner, Some(PlayerId::new(1)));
    assert_eq!(skins.holes[0].low_net, Some(3));
    assert_eq!(skins.holes[1].outcome, SkinsHoleOutcome::Pushed);
}

/// Carryover grows across ties and pays out on the next outright win.
#[test]
fn test_carryover_pays_to_next_winner() {
    let mut r = round(&[0, 0, 0], SkinsMode::Carryover);
    enter(&mut r, 0, &[4, 4, 4, 5]);
    enter(&mut r, 1, &[4, 4, 5, 4]);
    enter(&mut r, 2, &[5, 4, 5, 5]);

    let skins = r.summary().skins.unwrap();
    assert_eq!(skins.holes[2].value, 3);
    assert_eq!(skins.holes[2].winner, Some(PlayerId::new(0)));
    assert_eq!(skins.holes[3].value, 1);
    assert_eq!(skins.holes[3].winner, Some(PlayerId::new(1)));
    assert_eq!(skins.totals.as_slice(), &[3, 1, 0]);
}

/// Switching the mode mid-round re-evaluates every hole under the new mode.
#[test]
fn test_mode_change_recomputes() {
    let mut r = round(&[0, 0], SkinsMode::Push);
    enter(&mut r, 0, &[4, 3]);
    enter(&mut r, 1, &[4, 4]);
    assert_eq!(r.summary().skins.unwrap().totals[PlayerId::new(0)], 1);

    r.set_skins_mode(SkinsMode::Carryover).unwrap();
    assert_eq!(r.summary().skins.unwrap().totals[PlayerId::new(0)], 2);

    r.set_skins_mode(SkinsMode::Null).unwrap();
    let skins = r.summary().skins.unwrap();
    assert_eq!(skins.holes[0].outcome, SkinsHoleOutcome::Voided);
    assert_eq!(skins.totals[PlayerId::new(0)], 1);
}

/// A solo round never resolves a skin.
#[test]
fn test_single_player_round() {
    let mut r = round(&[5], SkinsMode::Carryover);
    enter(&mut r, 0, &[3; 18]);

    let skins = r.summary().skins.unwrap();
    assert!(skins.holes.iter().all(|h| h.outcome == SkinsHoleOutcome::Pending));
    assert_eq!(skins.final_carryover, 0);
    assert_eq!(skins.skins_awarded(), 0);
}
