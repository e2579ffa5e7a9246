#![allow(dead_code)]

use gridtoy::{Board, Cell};
use std::collections::{HashMap, VecDeque};

/// Board scenario parsed from a text map
#[derive(Debug, Clone)]
pub struct MapTest {
    pub board: Board,
    pub start: Cell,
    pub target: Cell,
}

/// Parse a text map. The first line is the top row (highest y).
///
/// Format:
/// - A: start cell
/// - B: target cell
/// - X: blocked cell
/// - o: free cell
pub fn parse_map(text: &str) -> Result<MapTest, String> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.is_empty() {
        return Err("No map rows found".into());
    }

    let width = rows[0].len() as i32;
    let height = rows.len() as i32;
    if rows.iter().any(|row| row.len() as i32 != width) {
        return Err("Map rows have different widths".into());
    }

    let mut board = Board::new(width, height);
    let mut start = None;
    let mut target = None;

    for (row_index, row) in rows.iter().enumerate() {
        let y = height - 1 - row_index as i32;
        for (x, ch) in row.iter().enumerate() {
            let x = x as i32;
            match ch {
                'A' => start = Some(Cell::new(x, y)),
                'B' => target = Some(Cell::new(x, y)),
                'X' => {
                    board.block(x, y);
                }
                'o' => {}
                other => return Err(format!("Unexpected map character {:?}", other)),
            }
        }
    }

    Ok(MapTest {
        board,
        start: start.ok_or("No start 'A' found in map")?,
        target: target.ok_or("No target 'B' found in map")?,
    })
}

fn flip_cell(cell: Cell, width: i32, height: i32, horizontal: bool, vertical: bool) -> Cell {
    let x = if horizontal { width - 1 - cell.x } else { cell.x };
    let y = if vertical { height - 1 - cell.y } else { cell.y };
    Cell::new(x, y)
}

fn flip(test: &MapTest, horizontal: bool, vertical: bool) -> MapTest {
    let (w, h) = (test.board.width(), test.board.height());
    let mut board = Board::new(w, h);
    for cell in test.board.blocked_cells() {
        let flipped = flip_cell(cell, w, h, horizontal, vertical);
        board.block(flipped.x, flipped.y);
    }
    MapTest {
        board,
        start: flip_cell(test.start, w, h, horizontal, vertical),
        target: flip_cell(test.target, w, h, horizontal, vertical),
    }
}

/// Original, mirrored left-right, mirrored top-bottom, and both
pub fn variants(test: &MapTest) -> Vec<(&'static str, MapTest)> {
    vec![
        ("original", test.clone()),
        ("h_flip", flip(test, true, false)),
        ("v_flip", flip(test, false, true)),
        ("hv_flip", flip(test, true, true)),
    ]
}

/// Reference breadth-first distance, independent of the crate's graph
pub fn bfs_distance(board: &Board, start: Cell, target: Cell) -> Option<usize> {
    if !board.is_open(start.x, start.y) || !board.is_open(target.x, target.y) {
        return None;
    }

    let mut dist: HashMap<Cell, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == target {
            return dist.get(&cell).copied();
        }
        let d = dist[&cell];
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = Cell::new(cell.x + dx, cell.y + dy);
            if board.is_open(next.x, next.y) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

/// A route is valid if it starts and ends in the right place and every
/// step is one cell onto an open cell
pub fn is_valid_path(board: &Board, path: &[Cell], start: Cell, target: Cell) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&target)
        && path.iter().all(|c| board.is_open(c.x, c.y))
        && path.windows(2).all(|pair| pair[0].distance(pair[1]) == 1)
}

/// Draw a path on the board, top row first
pub fn visualize_path(board: &Board, path: &[Cell]) -> String {
    let mut result = String::new();
    for y in (0..board.height()).rev() {
        for x in 0..board.width() {
            let cell = Cell::new(x, y);
            let symbol = if path.first() == Some(&cell) {
                'A'
            } else if path.last() == Some(&cell) {
                'B'
            } else if path.contains(&cell) {
                '*'
            } else if board.is_blocked(x, y) {
                'X'
            } else {
                '.'
            };
            result.push(symbol);
        }
        result.push('\n');
    }
    result
}

/// Route warnings to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("gridtoy=debug")
        .with_test_writer()
        .try_init();
}
