use crate::player::Player;

/// One row of a standings snapshot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Standing {
    pub name: String,
    pub chips: u32,
}

/// Chip-ordered standings, rebuilt from scratch for every display and
/// discarded afterwards. The sort is stable: equal stacks keep their
/// roster order.
pub fn standings(roster: &[Player]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = roster
        .iter()
        .map(|p| Standing {
            name: p.name().to_string(),
            chips: p.chips(),
        })
        .collect();
    rows.sort_by_key(|row| std::cmp::Reverse(row.chips));
    rows
}
