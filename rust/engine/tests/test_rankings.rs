use felt_engine::player::{Controller, Player};
use felt_engine::rankings::standings;

fn seats(specs: &[(&str, u32)]) -> Vec<Player> {
    specs
        .iter()
        .map(|&(name, chips)| Player::with_chips(name, Controller::Human, chips))
        .collect()
}

#[test]
fn standings_order_is_chips_descending() {
    let roster = seats(&[("Mid", 500), ("Top", 2000), ("Bottom", 10)]);
    let rows = standings(&roster);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Top", "Mid", "Bottom"]);
}

#[test]
fn equal_stacks_keep_roster_order() {
    let roster = seats(&[("First", 300), ("Second", 300), ("Third", 300)]);
    let rows = standings(&roster);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn snapshot_does_not_touch_the_roster() {
    let roster = seats(&[("A", 1), ("B", 2)]);
    let _ = standings(&roster);
    assert_eq!(roster[0].name(), "A");
    assert_eq!(roster[1].name(), "B");
}
