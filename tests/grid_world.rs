extern crate float_eq;
extern crate gridmdp;
mod common;

use assertor::*;
use common::*;
use float_eq::*;
use gridmdp::*;
use rstest::rstest;

const LEFT: Discrete = 0;
const DOWN: Discrete = 1;
const RIGHT: Discrete = 2;
const UP: Discrete = 3;

#[test]
fn reset_state_is_start_cell() {
    let gw = reference_world();

    assert_that!(locate(gw.layout(), Cell::Start).unwrap()).is_equal_to((4, 0));
    assert_that!(gw.reset_state()).is_equal_to(20);
}

#[rstest]
#[case::hazard_ignores_action(10, LEFT, (10, 0., false))]
#[case::hazard_ignores_action_up(10, UP, (10, 0., false))]
#[case::terminal_loops(4, DOWN, (4, 0., true))]
#[case::white_into_terminal(5, UP, (0, -1., true))]
#[case::white_into_hazard(15, UP, (20, -20., false))]
#[case::white_bounces_off_edge(24, RIGHT, (24, -1., false))]
#[case::white_moves(22, UP, (17, -1., false))]
#[case::start_bounces_off_edge(20, LEFT, (20, -1., false))]
#[case::start_moves(20, RIGHT, (21, -1., false))]
fn reference_outcomes(
    #[case] s: Discrete,
    #[case] a: Discrete,
    #[case] expected: (Discrete, Continous, bool),
) {
    let gw = reference_world();

    let ts = gw.outcomes(s, a).unwrap();

    assert_that!(ts.len()).is_equal_to(1);
    assert_float_eq!(ts[0].probability, 1., abs <= 0.);
    assert_eq!(ts[0].next_state, expected.0);
    assert_float_eq!(ts[0].reward, expected.1, abs <= 0.);
    assert_eq!(ts[0].done, expected.2);
}

#[test]
fn hazard_self_loops_for_every_action() {
    let gw = reference_world();

    for s in [10, 11, 13, 14] {
        for a in 0..gw.n_a() {
            assert_eq!(
                gw.outcomes(s, a).unwrap(),
                &[Transition::certain(s, 0., false)]
            );
        }
    }
}

#[rstest]
#[case(GridConfig::reference())]
#[case(GridConfig {
    layout: vec!["TWR".into(), "WWW".into(), "BWW".into()],
    actions: Action::reference(),
})]
#[case(GridConfig {
    layout: vec!["B".into()],
    actions: vec![Action::new("stay", 0, 0), Action::new("jump", 2, 2)],
})]
fn probabilities_sum_to_one_and_states_stay_in_range(#[case] cfg: GridConfig) {
    let gw = GridWorld::new(cfg).unwrap();
    let n_s = gw.n_s();

    for ((s, a), ts) in gw.transitions().iter() {
        let total: Continous = ts.iter().map(|t| t.probability).sum();
        assert_float_eq!(total, 1., abs <= 1e-12, "({s}, {a})");
        for t in ts {
            assert!(t.next_state < n_s, "({s}, {a}) -> {}", t.next_state);
        }
    }
    assert_that!(gw.transitions().len()).is_equal_to(n_s * gw.n_a());
}

#[test]
fn build_is_deterministic() {
    let layout = Layout::parse(&REFERENCE_MAP).unwrap();
    let actions = Action::reference();

    let m1 = build(&layout, 5, 5, &actions).unwrap();
    let m2 = build(&layout, 5, 5, &actions).unwrap();

    assert_eq!(m1, m2);
    assert_eq!(m1.to_json().unwrap(), m2.to_json().unwrap());
}

#[test]
fn errors_abort_construction() {
    let missing_start = GridConfig {
        layout: vec!["TW".into(), "WW".into()],
        actions: Action::reference(),
    };
    let bad_marker = GridConfig {
        layout: vec!["TW".into(), "BG".into()],
        actions: Action::reference(),
    };

    assert!(matches!(
        GridWorld::new(missing_start),
        Err(GridError::NotFound { marker: 'B' })
    ));
    assert!(matches!(
        GridWorld::new(bad_marker),
        Err(GridError::InvalidGridValue { value: 'G', .. })
    ));
}

#[test]
fn json_export_round_trips_through_gym_layout() {
    let gw = reference_world();

    let val = gw.model().to_json().unwrap();
    assert_eq!(val["15"]["3"], serde_json::json!([[1.0, 20, -20.0, false]]));

    let ts = transitions_from_json(&val).unwrap();
    assert_eq!(ts, *gw.transitions());
}

#[test]
fn reference_table() {
    insta::assert_snapshot!(render_table(&reference_world()), @r###"
    00 T | 00:+0*  00:+0*  00:+0*  00:+0*
    01 W | 00:-1*  06:-1  02:-1  01:-1
    02 W | 01:-1  07:-1  03:-1  02:-1
    03 W | 02:-1  08:-1  04:-1*  03:-1
    04 T | 04:+0*  04:+0*  04:+0*  04:+0*
    05 W | 05:-1  20:-20  06:-1  00:-1*
    06 W | 05:-1  20:-20  07:-1  01:-1
    07 W | 06:-1  12:-1  08:-1  02:-1
    08 W | 07:-1  20:-20  09:-1  03:-1
    09 W | 08:-1  20:-20  09:-1  04:-1*
    10 R | 10:+0  10:+0  10:+0  10:+0
    11 R | 11:+0  11:+0  11:+0  11:+0
    12 W | 20:-20  17:-1  20:-20  07:-1
    13 R | 13:+0  13:+0  13:+0  13:+0
    14 R | 14:+0  14:+0  14:+0  14:+0
    15 W | 15:-1  20:-1  16:-1  20:-20
    16 W | 15:-1  21:-1  17:-1  20:-20
    17 W | 16:-1  22:-1  18:-1  12:-1
    18 W | 17:-1  23:-1  19:-1  20:-20
    19 W | 18:-1  24:-1  19:-1  20:-20
    20 B | 20:-1  20:-1  21:-1  15:-1
    21 W | 20:-1  21:-1  22:-1  16:-1
    22 W | 21:-1  22:-1  23:-1  17:-1
    23 W | 22:-1  23:-1  24:-1  18:-1
    24 W | 23:-1  24:-1  24:-1  19:-1
    "###);
}
