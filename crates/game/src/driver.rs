//! Greedy steering used in place of a player for headless runs.

use std::collections::{HashSet, VecDeque};

use glam::IVec2;

use crate::snake::{Board, Direction};
use crate::state::Session;

/// Pick a heading for the next move: never reverse, avoid immediate death,
/// prefer the move with more reachable space, then the one closer to the apple.
pub fn choose_direction(session: &Session) -> Option<Direction> {
    let snake = session.snake();
    let board = session.board();
    let head = snake.head();
    // The tail cell frees up as the snake moves (unless it is growing, which we ignore).
    let blocked: HashSet<IVec2> = snake
        .body()
        .iter()
        .take(snake.len().saturating_sub(1))
        .copied()
        .collect();

    Direction::ALL
        .into_iter()
        .filter(|&d| d != snake.direction().opposite())
        .map(|d| (d, head + d.delta()))
        .filter(|&(_, cell)| board.contains(cell) && !blocked.contains(&cell))
        .map(|(d, cell)| {
            let room = reachable_cells(board, &blocked, cell, snake.len());
            let distance = session
                .apple()
                .map(|apple| (apple - cell).abs().element_sum())
                .unwrap_or(0);
            (d, room, distance)
        })
        .max_by(|a, b| a.1.cmp(&b.1).then(b.2.cmp(&a.2)))
        .map(|(d, _, _)| d)
}

/// Flood fill from `start`, stopping once `limit` cells are found.
fn reachable_cells(board: Board, blocked: &HashSet<IVec2>, start: IVec2, limit: usize) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        if seen.len() >= limit {
            break;
        }
        for d in Direction::ALL {
            let next = cell + d.delta();
            if board.contains(next) && !blocked.contains(&next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len().min(limit)
}
