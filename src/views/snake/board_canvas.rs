//! Canvas drawing of the snake board.
use iced::{
    mouse,
    widget::canvas::{self, Frame, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};

use crate::{
    app::Message,
    models::snake::{
        direction::Direction,
        grid::Cell,
        renderer::{self, BoardSnapshot},
    },
};

const BACKGROUND: Color = Color::from_rgb(0.06, 0.06, 0.12);
const GRID_LINE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.02);
const SNAKE_HEAD: Color = Color::from_rgb(0.0, 0.831, 1.0);
const SNAKE_BODY: Color = Color::from_rgb(0.0, 0.6, 0.8);
const SNAKE_BODY_ALT: Color = Color::from_rgb(0.0, 0.4, 0.533);
const FOOD: Color = Color::from_rgb(1.0, 0.42, 0.42);
const FOOD_GLOW: Color = Color::from_rgba(1.0, 0.42, 0.42, 0.4);
const FOOD_HIGHLIGHT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);
const EYE: Color = Color::from_rgb(0.102, 0.102, 0.18);

const EYE_OFFSET: f32 = 4.0;
const EYE_RADIUS: f32 = 3.0;
const HEAD_RADIUS: f32 = 8.0;
const BODY_RADIUS: f32 = 5.0;

/// Draws whatever board it was last handed.
#[derive(Clone, Debug)]
pub struct BoardCanvas {
    cell_pixels: f32,
    snapshot: Option<BoardSnapshot>,
}

impl BoardCanvas {
    #[must_use]
    pub fn new(cell_pixels: f32) -> Self {
        Self {
            cell_pixels,
            snapshot: None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.snapshot.as_ref()
    }

    #[allow(clippy::cast_precision_loss)]
    fn origin(&self, cell: Cell) -> Point {
        Point::new(
            cell.x as f32 * self.cell_pixels,
            cell.y as f32 * self.cell_pixels,
        )
    }

    fn center(&self, cell: Cell) -> Point {
        let origin = self.origin(cell);
        let half = self.cell_pixels / 2.0;
        Point::new(origin.x + half, origin.y + half)
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_grid(&self, frame: &mut Frame, grid_size: i32) {
        let extent = grid_size as f32 * self.cell_pixels;
        for i in 0..=grid_size {
            let offset = i as f32 * self.cell_pixels;
            frame.stroke(
                &Path::line(Point::new(offset, 0.0), Point::new(offset, extent)),
                grid_stroke(),
            );
            frame.stroke(
                &Path::line(Point::new(0.0, offset), Point::new(extent, offset)),
                grid_stroke(),
            );
        }
    }

    fn draw_food(&self, frame: &mut Frame, food: Cell) {
        let center = self.center(food);
        let radius = self.cell_pixels / 2.0 - 2.0;
        frame.fill(&Path::circle(center, radius + 3.0), FOOD_GLOW);
        frame.fill(&Path::circle(center, radius), FOOD);
        frame.fill(
            &Path::circle(
                Point::new(center.x - 3.0, center.y - 3.0),
                self.cell_pixels / 6.0,
            ),
            FOOD_HIGHLIGHT,
        );
    }

    fn draw_snake(&self, frame: &mut Frame, snake: &[Cell], direction: Direction) {
        let size = self.cell_pixels - 2.0;
        for (index, segment) in snake.iter().enumerate() {
            let origin = self.origin(*segment);
            let top_left = Point::new(origin.x + 1.0, origin.y + 1.0);
            let radius = if index == 0 { HEAD_RADIUS } else { BODY_RADIUS };
            let shape = rounded_rect(top_left, Size::new(size, size), radius);
            frame.fill(&shape, segment_color(index));
        }
        if let Some(head) = snake.first() {
            let center = self.center(*head);
            for (dx, dy) in eye_offsets(direction) {
                frame.fill(
                    &Path::circle(Point::new(center.x + dx, center.y + dy), EYE_RADIUS),
                    EYE,
                );
            }
        }
    }
}

impl renderer::Renderer for BoardCanvas {
    fn draw(&mut self, snapshot: &BoardSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }
}

impl canvas::Program<Message> for BoardCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);
        if let Some(snapshot) = &self.snapshot {
            self.draw_grid(&mut frame, snapshot.grid_size);
            if let Some(food) = snapshot.food {
                self.draw_food(&mut frame, food);
            }
            self.draw_snake(&mut frame, &snapshot.snake, snapshot.direction);
        }
        vec![frame.into_geometry()]
    }
}

fn grid_stroke() -> Stroke<'static> {
    Stroke::default().with_color(GRID_LINE).with_width(1.0)
}

/// Head colour first, then the body alternates starting from the darker shade
/// on odd segments.
#[must_use]
pub fn segment_color(index: usize) -> Color {
    if index == 0 {
        SNAKE_HEAD
    } else if index % 2 == 0 {
        SNAKE_BODY
    } else {
        SNAKE_BODY_ALT
    }
}

/// Offsets of the two eyes from the head centre, placed on the leading edge.
#[must_use]
pub fn eye_offsets(direction: Direction) -> [(f32, f32); 2] {
    match direction {
        Direction::Right => [(EYE_OFFSET, -EYE_OFFSET), (EYE_OFFSET, EYE_OFFSET)],
        Direction::Left => [(-EYE_OFFSET, -EYE_OFFSET), (-EYE_OFFSET, EYE_OFFSET)],
        Direction::Up => [(-EYE_OFFSET, -EYE_OFFSET), (EYE_OFFSET, -EYE_OFFSET)],
        Direction::Down => [(-EYE_OFFSET, EYE_OFFSET), (EYE_OFFSET, EYE_OFFSET)],
    }
}

/// Rectangle with corners rounded by quadratic curves.
#[must_use]
pub fn rounded_rect(top_left: Point, size: Size, radius: f32) -> Path {
    let radius = radius.min(size.width / 2.0).min(size.height / 2.0);
    let (x, y, w, h) = (top_left.x, top_left.y, size.width, size.height);
    Path::new(|b| {
        b.move_to(Point::new(x + radius, y));
        b.line_to(Point::new(x + w - radius, y));
        b.quadratic_curve_to(Point::new(x + w, y), Point::new(x + w, y + radius));
        b.line_to(Point::new(x + w, y + h - radius));
        b.quadratic_curve_to(
            Point::new(x + w, y + h),
            Point::new(x + w - radius, y + h),
        );
        b.line_to(Point::new(x + radius, y + h));
        b.quadratic_curve_to(Point::new(x, y + h), Point::new(x, y + h - radius));
        b.line_to(Point::new(x, y + radius));
        b.quadratic_curve_to(Point::new(x, y), Point::new(x + radius, y));
        b.close();
    })
}
