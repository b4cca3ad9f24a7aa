use tactics_content::{Order, ScenarioLoader};
use tactics_core::{CombatConfig, Position, TeamId};
use tactics_runtime::{OrderOutcome, RuntimeError, Skirmish, TacticianStatus};

const BORDER: &str = r#"
    (
        name: "Border",
        teams: [(id: 0, name: "Blue"), (id: 1, name: "Red")],
        units: [
            (label: "lord", kind: "hero", team: 0, hit_points: 40, movement: 3,
             position: (x: 0, y: 0),
             items: [(kind: "spear", name: "Lance", power: 20, min_range: 1, max_range: 1)],
             equipped: Some(0)),
            (label: "mule", kind: "alpaca", team: 0, hit_points: 20, movement: 4,
             position: (x: 1, y: 1),
             items: [(kind: "staff", name: "Mend", power: 10, min_range: 1, max_range: 2)]),
            (label: "priest", kind: "cleric", team: 0, hit_points: 25, movement: 3,
             position: (x: 2, y: 1)),
            (label: "boss", kind: "hero", team: 1, hit_points: 45, movement: 3,
             position: (x: 4, y: 0),
             items: [(kind: "spear", name: "Pike", power: 5, min_range: 1, max_range: 1)],
             equipped: Some(0)),
        ],
        orders: [
            Give(giver: "mule", receiver: "priest", item: "Mend"),
            Equip(unit: "priest", item: "Mend"),
            Move(unit: "lord", to: (x: 3, y: 0)),
            Attack(attacker: "lord", target: "boss"),
            Attack(attacker: "boss", target: "lord"),
            Attack(attacker: "priest", target: "lord"),
            Attack(attacker: "lord", target: "boss"),
            Attack(attacker: "lord", target: "boss"),
            Move(unit: "lord", to: (x: 0, y: 0)),
        ],
    )
"#;

fn skirmish() -> Skirmish {
    let config = CombatConfig::default();
    let scenario = ScenarioLoader::parse(BORDER)
        .unwrap()
        .build(&config)
        .unwrap();
    Skirmish::new(config, scenario)
}

#[test]
fn scripted_match_runs_to_a_winner() {
    let mut skirmish = skirmish();
    let boss = skirmish.scenario().unit_id("boss").unwrap();
    let lord = skirmish.scenario().unit_id("lord").unwrap();

    let summary = skirmish.play_all();

    // Boss hit points: 45, 25 after the first strike, 5 after its own attack
    // is countered, then the healed lord finishes it
    assert_eq!(summary.removed, [boss]);
    assert_eq!(summary.played, 7);
    assert_eq!(summary.rejected, 0);
    // The final attack and move are never played
    assert_eq!(summary.skipped, 2);

    assert!(!skirmish.battlefield().contains(boss));
    assert_eq!(skirmish.battlefield().unit(lord).unwrap().location(), Position::new(3, 0));
    let red = skirmish.game().tactician(TeamId(1)).unwrap();
    assert_eq!(red.status(), TacticianStatus::Defeated);
    assert_eq!(skirmish.winner().map(|t| t.name()), Some("Blue"));
}

#[test]
fn rejected_orders_are_skipped() {
    let mut skirmish = skirmish();
    let lord = skirmish.scenario().unit_id("lord").unwrap();

    // Still four cells away
    let err = skirmish
        .play_order(&Order::Attack {
            attacker: "lord".into(),
            target: "boss".into(),
        })
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Attack(_)));

    let err = skirmish
        .play_order(&Order::Equip {
            unit: "lord".into(),
            item: "Excalibur".into(),
        })
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownItem { unit, .. } if unit == lord));

    let err = skirmish
        .play_order(&Order::Move {
            unit: "nobody".into(),
            to: Position::new(1, 0),
        })
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownLabel(_)));

    // An alpaca carries the staff but cannot wield it
    let err = skirmish
        .play_order(&Order::Equip {
            unit: "mule".into(),
            item: "Mend".into(),
        })
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Equip(_)));
}

#[test]
fn retired_tactician_cannot_act() {
    let mut skirmish = skirmish();

    let outcome = skirmish.play_order(&Order::Retire { team: 1 }).unwrap();
    assert!(matches!(outcome, OrderOutcome::Retired));
    assert!(skirmish.game().is_over());

    let err = skirmish
        .play_order(&Order::Move {
            unit: "boss".into(),
            to: Position::new(4, 1),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::TacticianInactive {
            status: TacticianStatus::Retired,
            ..
        }
    ));
}

#[test]
fn recovery_through_the_script() {
    let mut skirmish = skirmish();
    for order in [
        Order::Give {
            giver: "mule".into(),
            receiver: "priest".into(),
            item: "Mend".into(),
        },
        Order::Equip {
            unit: "priest".into(),
            item: "Mend".into(),
        },
    ] {
        skirmish.play_order(&order).unwrap();
    }

    let outcome = skirmish
        .play_order(&Order::Attack {
            attacker: "priest".into(),
            target: "priest".into(),
        })
        .unwrap();
    let OrderOutcome::Attack(report) = outcome else {
        panic!("expected an attack report");
    };
    // Already at full health
    assert!(report.outcome.is_recovery());
    assert_eq!(report.outcome.recovered, 0);
}
