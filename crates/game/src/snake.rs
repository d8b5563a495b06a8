//! Grid snake: body cells, heading, growth, collisions, and its wireframe cubes.

use std::collections::VecDeque;

use glam::{IVec2, Vec3};
use renderer::{Color, PerspectiveCamera, RenderResult, Solid, Surface};

/// Segments at the start of a game.
pub const STARTING_LENGTH: i32 = 3;

/// Heading on the board. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Board geometry shared by the snake and apple placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub columns: i32,
    pub rows: i32,
    pub cell_size: f32,
}

impl Board {
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.columns && cell.y >= 0 && cell.y < self.rows
    }

    /// Center of a cell on the z = 0 play plane.
    pub fn cell_center(&self, cell: IVec2) -> Vec3 {
        let half = self.cell_size / 2.0;
        Vec3::new(
            cell.x as f32 * self.cell_size + half,
            cell.y as f32 * self.cell_size + half,
            0.0,
        )
    }

    /// Head cell at the start of a game: the middle of the board.
    pub fn start_cell(&self) -> IVec2 {
        IVec2::new(self.columns / 2, self.rows / 2)
    }

    /// Whether the starting body and its first move fit on the board.
    pub fn fits_start(&self) -> bool {
        let head = self.start_cell();
        self.rows > 0 && head.x >= STARTING_LENGTH - 1 && head.x + 1 < self.columns
    }

    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| IVec2::new(x, y)))
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    board: Board,
    cube_size: f32,
    /// Head first.
    body: VecDeque<IVec2>,
    direction: Direction,
    next_direction: Direction,
    grow_pending: u32,
    cubes: Vec<Solid>,
}

impl Snake {
    pub fn new(board: Board, cube_size: f32) -> RenderResult<Self> {
        let mut snake = Self {
            board,
            cube_size,
            body: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            grow_pending: 0,
            cubes: Vec::new(),
        };
        snake.reset()?;
        Ok(snake)
    }

    /// Back to the starting cells, heading right.
    pub fn reset(&mut self) -> RenderResult<()> {
        let head = self.board.start_cell();
        self.body = (0..STARTING_LENGTH)
            .map(|i| head - IVec2::new(i, 0))
            .collect();
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.grow_pending = 0;
        self.rebuild_cubes()
    }

    pub fn head(&self) -> IVec2 {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<IVec2> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn cubes(&self) -> &[Solid] {
        &self.cubes
    }

    pub fn occupies(&self, cell: IVec2) -> bool {
        self.body.contains(&cell)
    }

    /// Queue a heading for the next move. Reversing onto the neck is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.next_direction = direction;
        }
    }

    /// Advance one cell in the queued heading.
    pub fn move_forward(&mut self) -> RenderResult<()> {
        self.direction = self.next_direction;
        let new_head = self.head() + self.direction.delta();
        self.body.push_front(new_head);

        if self.grow_pending > 0 {
            self.grow_pending -= 1;
        } else {
            self.body.pop_back();
        }
        self.rebuild_cubes()
    }

    /// Grow by one segment on the next move.
    pub fn grow(&mut self) {
        self.grow_pending += 1;
    }

    /// Head left the board or ran into the body.
    pub fn check_collision(&self) -> bool {
        let head = self.head();
        !self.board.contains(head) || self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Segment cubes are rebuilt wholesale rather than patched.
    fn rebuild_cubes(&mut self) -> RenderResult<()> {
        self.cubes = self
            .body
            .iter()
            .map(|&cell| Solid::cube(self.board.cell_center(cell), self.cube_size))
            .collect::<RenderResult<_>>()?;
        Ok(())
    }

    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        camera: &PerspectiveCamera,
        color: Color,
        line_width: u32,
    ) {
        for cube in &self.cubes {
            cube.render(surface, camera, color, line_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board {
            columns: 20,
            rows: 15,
            cell_size: 40.0,
        }
    }

    fn snake() -> Snake {
        Snake::new(board(), 20.0).unwrap()
    }

    fn cells(s: &Snake) -> Vec<(i32, i32)> {
        s.body().iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn starts_with_three_segments_heading_right() {
        let s = snake();
        assert_eq!(cells(&s), vec![(10, 7), (9, 7), (8, 7)]);
        assert_eq!(s.direction(), Direction::Right);
        assert_eq!(s.cubes().len(), 3);
        assert_eq!(s.cubes()[0].position(), Vec3::new(420.0, 300.0, 0.0));
    }

    #[test]
    fn move_shifts_body_and_cubes() {
        let mut s = snake();
        s.move_forward().unwrap();
        assert_eq!(cells(&s), vec![(11, 7), (10, 7), (9, 7)]);
        assert_eq!(s.cubes()[0].position(), Vec3::new(460.0, 300.0, 0.0));
        assert_eq!(s.cubes().len(), s.len());
    }

    #[test]
    fn reversal_is_ignored() {
        let mut s = snake();
        s.set_direction(Direction::Left);
        s.move_forward().unwrap();
        assert_eq!(s.direction(), Direction::Right);
        s.set_direction(Direction::Up);
        s.move_forward().unwrap();
        assert_eq!(s.head(), IVec2::new(11, 6));
    }

    #[test]
    fn growth_applies_on_following_moves() {
        let mut s = snake();
        s.grow();
        s.grow();
        s.move_forward().unwrap();
        assert_eq!(s.len(), 4);
        s.move_forward().unwrap();
        assert_eq!(s.len(), 5);
        s.move_forward().unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.cubes().len(), 5);
    }

    #[test]
    fn wall_collision() {
        let mut s = snake();
        for _ in 0..9 {
            s.move_forward().unwrap();
            assert!(!s.check_collision());
        }
        assert_eq!(s.head(), IVec2::new(19, 7));
        s.move_forward().unwrap();
        assert!(s.check_collision());
    }

    #[test]
    fn self_collision() {
        let mut s = snake();
        for _ in 0..3 {
            s.grow();
        }
        for d in [
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ] {
            s.set_direction(d);
            s.move_forward().unwrap();
        }
        assert!(s.check_collision());
    }

    #[test]
    fn opposite_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.delta() + d.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn reset_restores_start() {
        let mut s = snake();
        s.grow();
        s.set_direction(Direction::Down);
        s.move_forward().unwrap();
        s.reset().unwrap();
        assert_eq!(cells(&s), vec![(10, 7), (9, 7), (8, 7)]);
        assert_eq!(s.direction(), Direction::Right);
    }

    #[test]
    fn start_cell_is_board_middle() {
        assert_eq!(board().start_cell(), IVec2::new(10, 7));
        let small = Board {
            columns: 8,
            rows: 6,
            cell_size: 10.0,
        };
        assert_eq!(small.start_cell(), IVec2::new(4, 3));
        assert!(small.fits_start());

        let mut s = Snake::new(small, 5.0).unwrap();
        assert_eq!(cells(&s), vec![(4, 3), (3, 3), (2, 3)]);
        s.move_forward().unwrap();
        assert!(!s.check_collision());
    }

    #[test]
    fn tiny_boards_do_not_fit_the_start() {
        for (columns, rows) in [(3, 5), (4, 0), (0, 0)] {
            let b = Board {
                columns,
                rows,
                cell_size: 10.0,
            };
            assert!(!b.fits_start(), "{}x{}", columns, rows);
        }
        let narrowest = Board {
            columns: 4,
            rows: 1,
            cell_size: 10.0,
        };
        assert!(narrowest.fits_start());
    }

    #[test]
    fn board_cells_cover_grid() {
        let b = board();
        assert_eq!(b.cells().count(), 300);
        assert!(b.contains(IVec2::new(19, 14)));
        assert!(!b.contains(IVec2::new(20, 0)));
        assert!(!b.contains(IVec2::new(0, -1)));
    }
}
