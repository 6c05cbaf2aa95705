//! Session-level behavior: full rounds, remote records, and totals.

use golf_scorecard::course::CourseStatus;
use golf_scorecard::scoring::ScoreLabel;
use golf_scorecard::{
    CourseDraft, GameRecord, Hole, HoleNumber, NineRange, Player, PlayerId, Round, RoundConfig,
    ScorecardError, ScorecardEvent, SkinsMode, WolfChoice,
};

fn draft(stroke_index: impl Fn(usize) -> u8) -> CourseDraft {
    let pars = [4, 5, 3, 4, 4, 3, 4, 5, 4, 4, 4, 3, 5, 4, 4, 3, 5, 4];
    let holes = pars
        .iter()
        .enumerate()
        .map(|(i, &par)| {
            let yardage = match par {
                3 => 160 + i as u32 * 3,
                4 => 370 + i as u32 * 4,
                _ => 520 + i as u32 * 2,
            };
            Hole::new(HoleNumber::from_index(i), par, yardage, stroke_index(i))
        })
        .collect();
    CourseDraft::new("Heritage", holes).with_location("Dublin")
}

fn foursome(config: RoundConfig) -> Round {
    let players = vec![
        Player::new("Ann", 4),
        Player::new("Bo", 12),
        Player::new("Cy", 18),
        Player::new("Di", 27),
    ];
    Round::new("round-1", config, players, draft(|i| i as u8 + 1)).unwrap()
}

#[test]
fn test_full_round_totals() {
    let mut r = foursome(RoundConfig::default());
    for h in 1..=18 {
        r.enter_score(PlayerId(0), h, "4").unwrap();
        r.enter_score(PlayerId(3), h, "6").unwrap();
    }

    let ann = r.player_totals(PlayerId(0)).unwrap();
    assert_eq!(ann.total.gross, 72);
    assert_eq!(ann.total.net, 68);
    assert_eq!(ann.total.par, 72);
    assert_eq!(ann.total.gross_to_par, "E");
    assert_eq!(ann.total.net_to_par, "-4");
    assert_eq!(ann.front.gross + ann.back.gross, ann.total.gross);

    let di = r.player_totals(PlayerId(3)).unwrap();
    assert_eq!(di.total.gross, 108);
    assert_eq!(di.total.net, 81);
    assert_eq!(r.ledger().net_total(PlayerId(3), NineRange::Front), 54 - 18);

    assert_eq!(r.player_totals(PlayerId(4)), Err(ScorecardError::UnknownPlayer(4)));
}

#[test]
fn test_hole_detail_labels() {
    let mut r = foursome(RoundConfig::default());
    r.enter_score(PlayerId(1), 2, "4").unwrap();
    let detail = r.ledger().hole_detail(PlayerId(1), HoleNumber::new(2).unwrap());
    assert_eq!(detail.par, 5);
    assert_eq!(detail.label, Some(ScoreLabel::Birdie));
    assert_eq!(detail.strokes_received, 1);
    assert_eq!(detail.net, Some(3));
}

#[test]
fn test_repaired_course_round() {
    let r = Round::new(
        "repaired",
        RoundConfig::default(),
        vec![Player::new("Solo", 10)],
        draft(|_| 3),
    )
    .unwrap();
    assert_eq!(r.course_status(), CourseStatus::Repaired);
    assert_eq!(r.course().name(), "Heritage");
    let mut indices: Vec<u8> = r.course().holes().iter().map(|h| h.stroke_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (1..=18).collect::<Vec<u8>>());
}

#[test]
fn test_events_apply_through_one_entry_point() {
    let mut r = foursome(RoundConfig::default().with_wolf(true).with_tens(true));
    let h1 = HoleNumber::FIRST;

    assert!(r
        .apply(ScorecardEvent::SetScore { player: PlayerId(2), hole: h1, gross: Some(5) })
        .unwrap());
    assert_eq!(
        r.apply(ScorecardEvent::SetScore { player: PlayerId(2), hole: h1, gross: Some(0) }),
        Err(ScorecardError::InvalidScore("0".to_string()))
    );
    assert!(r
        .apply(ScorecardEvent::ChooseWolf { hole: h1, choice: WolfChoice::Lone { is_blind: true } })
        .unwrap());
    assert!(r.apply(ScorecardEvent::SetSkinsMode(SkinsMode::Null)).unwrap());

    let sequences: Vec<u64> = r.history().iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
}

#[test]
fn test_record_sync_last_write_wins() {
    let config = RoundConfig::default().with_tens(true);
    let mut alice = foursome(config.clone());
    let mut bob = foursome(config);

    alice.enter_score(PlayerId(0), 5, "4").unwrap();
    bob.enter_score(PlayerId(0), 5, "6").unwrap();
    bob.toggle_tens(PlayerId(1), 5).unwrap();

    // Alice receives Bob's later write; her own edit is overwritten.
    let json = bob.to_record().to_json().unwrap();
    alice.apply_record(GameRecord::from_json(&json).unwrap()).unwrap();

    let h5 = HoleNumber::new(5).unwrap();
    assert_eq!(alice.scores().get(PlayerId(0), h5), Some(6));
    assert!(alice.tens_selections().picks(PlayerId(1)).contains(h5));
    assert_eq!(alice.summary(), bob.summary());
}

#[test]
fn test_record_with_bad_roster_rejected() {
    let mut r = foursome(RoundConfig::default());
    let mut record = r.to_record();
    record.players.clear();
    assert_eq!(r.apply_record(record), Err(ScorecardError::InvalidRoster(0)));
    assert_eq!(r.players().player_count(), 4);
}

/// Round-trip a record through JSON with one edit applied on the way.
fn edited_record(r: &Round, edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut value: serde_json::Value = serde_json::from_str(&r.to_record().to_json().unwrap()).unwrap();
    edit(&mut value);
    value.to_string()
}

fn assert_record_refused(json: &str) {
    assert!(matches!(
        GameRecord::from_json(json),
        Err(ScorecardError::RecordDecode(_))
    ));

    // Bypassing decode, replacement still refuses and leaves the round alone.
    let record: GameRecord = serde_json::from_str(json).unwrap();
    let mut r = foursome(RoundConfig::default().with_tens(true));
    let before = r.summary();
    assert!(matches!(r.apply_record(record), Err(ScorecardError::RecordDecode(_))));
    assert_eq!(r.summary(), before);
}

#[test]
fn test_record_with_handicap_above_limit_rejected() {
    let r = foursome(RoundConfig::default());
    let json = edited_record(&r, |v| v["players"][0]["handicap"] = 200.into());
    assert_record_refused(&json);
}

#[test]
fn test_record_with_out_of_range_score_rejected() {
    let r = foursome(RoundConfig::default());
    assert_record_refused(&edited_record(&r, |v| v["scores"]["rows"]["data"][1][0] = 0.into()));
    assert_record_refused(&edited_record(&r, |v| v["scores"]["rows"]["data"][2][17] = 16.into()));
}

#[test]
fn test_record_with_off_card_tens_picks_rejected() {
    let r = foursome(RoundConfig::default().with_tens(true));
    // Ten bits above hole 18: would otherwise count as a complete pick set.
    let json = edited_record(&r, |v| v["tens"]["picks"]["data"][0] = 0x0FFC_0000u32.into());
    assert_record_refused(&json);
}

#[test]
fn test_record_with_short_tens_table_rejected() {
    let r = foursome(RoundConfig::default().with_tens(true));
    let json = edited_record(&r, |v| {
        if let Some(rows) = v["tens"]["picks"]["data"].as_array_mut() {
            rows.truncate(2);
        }
    });
    assert_record_refused(&json);
}

#[test]
fn test_record_with_short_course_rejected() {
    let r = foursome(RoundConfig::default());
    let json = edited_record(&r, |v| {
        if let Some(holes) = v["course"]["holes"].as_array_mut() {
            holes.truncate(9);
        }
    });
    assert_record_refused(&json);
}

#[test]
fn test_unvalidated_course_is_replaced() {
    let source = foursome(RoundConfig::default());
    let mut value = serde_json::to_value(source.course()).unwrap();
    if let Some(holes) = value["holes"].as_array_mut() {
        holes.truncate(9);
    }
    let course: golf_scorecard::Course = serde_json::from_value(value).unwrap();
    let raw = Player { name: "Ed".to_string(), handicap: 99 };

    let mut r = Round::with_course("direct", RoundConfig::default(), vec![raw], course).unwrap();
    assert_eq!(r.course_status(), CourseStatus::Substituted);
    assert_eq!(r.course().holes().len(), 18);
    assert_eq!(r.players()[PlayerId(0)].handicap, 54);

    r.enter_score(PlayerId(0), 18, "5").unwrap();
    let summary = r.summary();
    assert_eq!(summary.totals[0].total.gross, 5);
    assert_eq!(summary.totals[0].total.net, 5 - 3);
}

#[test]
fn test_roster_edit_clamps_handicap() {
    let mut r = foursome(RoundConfig::default());
    let raw = Player { name: "  Flo ".to_string(), handicap: 80 };
    assert!(r.update_player(PlayerId(1), raw).unwrap());
    assert_eq!(r.players()[PlayerId(1)], Player::new("Flo", 54));
}
