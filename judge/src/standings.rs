use std::fmt::Write;

/// The results of all games between two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: [usize; 2],
    /// Games lost by forfeit. These are also counted as wins of the opponent.
    pub illegal_actions: [usize; 2],
    pub ties: usize,
}

/// One player's totals over a whole tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub forfeits: usize,
}

impl Standing {
    /// Two points for a win, one for a tie.
    pub fn points(&self) -> usize {
        2 * self.wins + self.ties
    }
}

/// Sums up the matches of every player, best player first.
///
/// `matches` holds the indices into `names` of both players of a match,
/// in the same order as the entries of their [`MatchScore`].
pub fn standings(names: &[String], matches: &[((usize, usize), MatchScore)]) -> Vec<Standing> {
    let mut table: Vec<Standing> = names
        .iter()
        .map(|name| Standing {
            name: name.clone(),
            ..Standing::default()
        })
        .collect();
    for &((i1, i2), score) in matches {
        for (side, idx) in [i1, i2].into_iter().enumerate() {
            let standing = &mut table[idx];
            standing.wins += score.wins[side];
            standing.losses += score.wins[1 - side];
            standing.ties += score.ties;
            standing.forfeits += score.illegal_actions[side];
        }
    }
    // Stable, so players with equal points keep their command line order
    table.sort_by_key(|standing| std::cmp::Reverse(standing.points()));
    table
}

pub fn format_standings(table: &[Standing]) -> String {
    let width = table
        .iter()
        .map(|standing| standing.name.len())
        .max()
        .unwrap_or(0)
        .max("player".len());
    let mut result = format!(
        "{:<width$}  points  wins  losses  ties  forfeits\n",
        "player"
    );
    for standing in table {
        // Writing to a String cannot fail
        let _ = writeln!(
            result,
            "{:<width$}  {:>6}  {:>4}  {:>6}  {:>4}  {:>8}",
            standing.name,
            standing.points(),
            standing.wins,
            standing.losses,
            standing.ties,
            standing.forfeits
        );
    }
    result
}
