use super::Style;
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;
use std::collections::HashSet;

/// A vertex on the honeycomb lattice, in steps of half a hexagon's width across and a
/// quarter of its height down.
type Vertex = (i64, i64);

/// An undirected edge between two lattice vertices, smaller first
type Edge = (Vertex, Vertex);

/// Corners of a pointy-top hexagon relative to its centre, in lattice steps, starting
/// at 30° and going round in 60° steps
const CORNERS: [Vertex; 6] = [(1, 1), (0, 2), (-1, 1), (-1, -1), (0, -2), (1, -1)];

fn edge(a: Vertex, b: Vertex) -> Edge {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Honeycomb: pointy-top hexagons whose flat-to-flat width equals the spacing.
///
/// Centres are swept one hexagon past every edge of the area so the cells on the
/// border are drawn in part; clipping is left to whatever displays the surface. Every
/// edge shared by two neighbouring cells is emitted once.
///
/// Corners are placed on an integer lattice before being scaled to millimetres, so two
/// cells sharing a corner agree on it exactly and shared edges are found without any
/// rounding tolerance.
pub fn hexagons(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    let (width, height) = (*area.width, *area.height);
    let stroke = style.stroke_width();

    let radius = *style.spacing / 3f64.sqrt();
    let hex_width = 3f64.sqrt() * radius;
    let hex_height = 2.0 * radius;
    let row_pitch = hex_height * 3.0 / 4.0;
    let (step_x, step_y) = (hex_width / 2.0, radius / 2.0);
    let position = |(x, y): Vertex| (x as f64 * step_x, y as f64 * step_y);

    let mut drawn: HashSet<Edge> = HashSet::new();
    let mut skipped = 0usize;

    for row in (0i64..).take_while(|&y| y as f64 * row_pitch < height + hex_height) {
        for column in (-1i64..).take_while(|&x| x as f64 * hex_width < width + hex_width) {
            // odd rows sit half a hexagon to the right
            let centre = (2 * column + row % 2, 3 * row);
            let corners = CORNERS.map(|(dx, dy)| (centre.0 + dx, centre.1 + dy));

            for i in 0..corners.len() {
                let (a, b) = (corners[i], corners[(i + 1) % corners.len()]);
                if !drawn.insert(edge(a, b)) {
                    skipped += 1;
                    continue;
                }
                out.line(position(a), position(b), stroke, style.colour)?;
            }
        }
    }

    log::trace!(
        "hexagons: {} segments, {skipped} shared edges skipped",
        drawn.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;
    use crate::units::Mm;
    use std::collections::HashMap;

    const TOLERANCE: f64 = 1e-6;

    fn run(width: f64, height: f64, spacing: f64) -> Vec<Primitive> {
        let mut out = Primitives::default();
        let style = Style::new(Mm(spacing)).with_line_thickness(0.05);
        hexagons(Area::new(width, height), &style, &mut out).unwrap();
        out.into_vec()
    }

    type Point = (f64, f64);

    /// Endpoints with the upper one first; no hexagon edge is horizontal
    fn ends(a: Point, b: Point) -> (Point, Point) {
        if a.1 <= b.1 {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Segments bucketed by midpoint, for lookups within [TOLERANCE]
    #[derive(Default)]
    struct Segments {
        buckets: HashMap<(i64, i64), Vec<(Point, Point)>>,
    }

    impl Segments {
        const CELL: f64 = 0.01;

        fn cell((a, b): (Point, Point)) -> (i64, i64) {
            (
                ((a.0 + b.0) / 2.0 / Self::CELL).floor() as i64,
                ((a.1 + b.1) / 2.0 / Self::CELL).floor() as i64,
            )
        }

        fn count_near(&self, a: Point, b: Point) -> usize {
            let target = ends(a, b);
            let (cx, cy) = Self::cell(target);
            let close = |p: Point, q: Point| {
                (p.0 - q.0).abs() < TOLERANCE && (p.1 - q.1).abs() < TOLERANCE
            };
            (cx - 1..=cx + 1)
                .flat_map(|x| (cy - 1..=cy + 1).map(move |y| (x, y)))
                .filter_map(|k| self.buckets.get(&k))
                .flatten()
                .filter(|(p, q)| close(*p, target.0) && close(*q, target.1))
                .count()
        }

        fn insert(&mut self, a: Point, b: Point) {
            let segment = ends(a, b);
            self.buckets.entry(Self::cell(segment)).or_default().push(segment);
        }
    }

    fn endpoints(p: &Primitive) -> (Point, Point) {
        match *p {
            Primitive::Line { x1, y1, x2, y2, .. } => ((x1, y1), (x2, y2)),
            Primitive::Circle { .. } => panic!("hexagons are made of lines"),
        }
    }

    /// Segments that geometrically coincide with one emitted earlier
    fn duplicates(segments: &[Primitive]) -> usize {
        let mut seen = Segments::default();
        let mut duplicates = 0;
        for (a, b) in segments.iter().map(endpoints) {
            if seen.count_near(a, b) > 0 {
                duplicates += 1;
            }
            seen.insert(a, b);
        }
        duplicates
    }

    #[test]
    fn edges_ignore_direction() {
        assert_eq!(edge((1, 2), (3, 4)), edge((3, 4), (1, 2)));
        assert_ne!(edge((1, 2), (3, 4)), edge((1, 2), (3, 5)));
    }

    #[test]
    fn corners_close_the_hexagon() {
        let sum = CORNERS.iter().fold((0, 0), |s, c| (s.0 + c.0, s.1 + c.1));
        assert_eq!(sum, (0, 0));
        // pointy top: the 90° and 270° corners sit straight below and above the centre
        assert_eq!(CORNERS[1], (0, 2));
        assert_eq!(CORNERS[4], (0, -2));
    }

    #[test]
    fn no_edge_is_drawn_twice_at_any_spacing() {
        // includes spacings whose shared corners land halfway between hundredths of a mm
        for i in 1..400 {
            let spacing = 1.0 + i as f64 * 0.0137;
            let segments = run(40.0, 40.0, spacing);
            assert_eq!(duplicates(&segments), 0, "spacing {spacing}");
        }
    }

    #[test]
    fn shared_corner_at_a_rounding_boundary_is_drawn_once() {
        let segments = run(100.0, 100.0, 2.0275);
        assert_eq!(duplicates(&segments), 0);
    }

    #[test]
    fn shared_edges_are_not_lost() {
        // every edge of every swept hexagon, placed with plain trigonometry, must be
        // among the emitted segments exactly once
        for spacing in [10.0, 7.3, 2.0275] {
            let (width, height) = (30.0, 20.0);
            let mut emitted = Segments::default();
            for (a, b) in run(width, height, spacing).iter().map(endpoints) {
                emitted.insert(a, b);
            }

            let radius = spacing / 3f64.sqrt();
            let hex_width = 3f64.sqrt() * radius;
            let row_pitch = 1.5 * radius;
            let mut row = 0u32;
            while row as f64 * row_pitch < height + 2.0 * radius {
                let shift = if row % 2 == 1 { hex_width / 2.0 } else { 0.0 };
                let mut column = -1i64;
                while column as f64 * hex_width < width + hex_width {
                    let (cx, cy) = (column as f64 * hex_width + shift, row as f64 * row_pitch);
                    let corner = |i: usize| {
                        let angle = (60.0 * i as f64 + 30.0).to_radians();
                        (cx + radius * angle.cos(), cy + radius * angle.sin())
                    };
                    for i in 0..6 {
                        let (a, b) = (corner(i), corner((i + 1) % 6));
                        assert_eq!(
                            emitted.count_near(a, b),
                            1,
                            "spacing {spacing}, {a:?} to {b:?}"
                        );
                    }
                    column += 1;
                }
                row += 1;
            }
        }
    }

    #[test]
    fn interior_edges_are_shared() {
        // far fewer than six segments per hexagon once neighbours share edges
        let segments = run(100.0, 100.0, 10.0);
        let radius = 10.0 / 3f64.sqrt();
        let hex_width = 3f64.sqrt() * radius;
        let row_pitch = 2.0 * radius * 3.0 / 4.0;
        let rows = (0u32..)
            .take_while(|&y| y as f64 * row_pitch < 100.0 + 2.0 * radius)
            .count();
        let columns = (-1i64..)
            .take_while(|&x| x as f64 * hex_width < 100.0 + hex_width)
            .count();
        assert!(segments.len() < rows * columns * 6);
        assert!(segments.len() > rows * columns * 3);
    }

    #[test]
    fn segments_are_one_radius_long_with_uniform_stroke() {
        let radius = 6.0 / 3f64.sqrt();
        for p in run(40.0, 40.0, 6.0) {
            let Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                ..
            } = p
            else {
                unreachable!()
            };
            let length = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
            assert!((length - radius).abs() < 1e-9);
            assert!((stroke_width - 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn overscan_is_at_most_one_cell() {
        let spacing = 8.0;
        let radius = spacing / 3f64.sqrt();
        let (width, height) = (50.0, 30.0);
        for p in run(width, height, spacing) {
            let (min_x, min_y, max_x, max_y) = p.bounds();
            assert!(min_x >= -1.5 * spacing - 1e-9 && max_x <= width + 2.0 * spacing + 1e-9);
            assert!(min_y >= -radius - 1e-9 && max_y <= height + 3.0 * radius + 1e-9);
        }
    }
}
