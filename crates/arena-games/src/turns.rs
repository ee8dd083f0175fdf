//! Round-robin turn schedule shared by the team prompt games.

use serde::Serialize;

/// One team's turn with its prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// Round number, starting at 1.
    pub round: u32,
    /// Team index, starting at 0.
    pub team: u32,
    /// The word or phrase to act out or draw.
    pub prompt: String,
}

/// Lays prompts out round by round. Within a round, teams play in order
/// starting from `starting_team`; turn `k` of round `r` takes
/// `prompts[r * teams + k]`.
#[must_use]
pub fn schedule(prompts: Vec<String>, teams: u32, starting_team: u32) -> Vec<Turn> {
    let per_round = teams.max(1) as usize;
    prompts
        .into_iter()
        .enumerate()
        .map(|(index, prompt)| {
            #[allow(clippy::cast_possible_truncation)]
            let (round, offset) = ((index / per_round) as u32, (index % per_round) as u32);
            Turn {
                round: round + 1,
                team: (starting_team + offset) % teams.max(1),
                prompt,
            }
        })
        .collect()
}
