use super::*;

fn spec(a: &str, b: &str, width: u32, height: u32) -> GridSpec<char> {
    GridSpec::from_text(a, b, Canvas { width, height }, Margin::default()).unwrap()
}

#[test]
fn counts_match_sequence_lengths() {
    // m=7, n=5 -> (m+1)(n+1) vertices, m+n+2 boundary lines.
    let model = spec("GATTACA", "ATTAC", 900, 800).build().unwrap();
    assert_eq!(model.points.len(), 8 * 6);
    assert_eq!(model.lines.len(), 7 + 5 + 2);
}

#[test]
fn concrete_two_by_two_scenario() {
    let model = spec("AB", "AC", 300, 300).build().unwrap();
    assert_eq!(
        model.cell,
        CellSize {
            width: 50.0,
            height: 50.0
        }
    );
    assert_eq!(model.points.len(), 9);
    assert_eq!(model.lines.len(), 6);

    let at = |i: u32, j: u32| model.points.iter().find(|p| p.i == i && p.j == j).unwrap();

    let origin = at(0, 0);
    assert_eq!(origin.pos, Point::new(0.0, 0.0));
    assert!(origin.diagonal_match);

    let center = at(1, 1);
    assert_eq!(center.pos, Point::new(50.0, 50.0));
    assert!(!center.diagonal_match);

    assert!(!at(2, 2).diagonal_match);

    let matches = model.points.iter().filter(|p| p.diagonal_match).count();
    assert_eq!(matches, 1);
}

#[test]
fn boundary_vertices_never_match() {
    // Both sequences end in 'B'; the far corner indexes past both and must
    // still report no match.
    let model = spec("AB", "BB", 300, 300).build().unwrap();
    for p in model.points.iter().filter(|p| p.i == 2 || p.j == 2) {
        assert!(!p.diagonal_match, "boundary vertex ({}, {})", p.i, p.j);
    }
}

#[test]
fn lines_are_horizontals_then_verticals_at_full_extent() {
    let model = spec("AB", "AC", 300, 300).build().unwrap();
    let (horizontals, verticals) = model.lines.split_at(3);

    for (j, line) in horizontals.iter().enumerate() {
        assert_eq!(line.orientation, Orientation::Horizontal);
        assert_eq!(line.from, Point::new(0.0, j as f64 * 50.0));
        assert_eq!(line.to, Point::new(100.0, j as f64 * 50.0));
    }
    for (i, line) in verticals.iter().enumerate() {
        assert_eq!(line.orientation, Orientation::Vertical);
        assert_eq!(line.from, Point::new(i as f64 * 50.0, 0.0));
        assert_eq!(line.to, Point::new(i as f64 * 50.0, 100.0));
    }
}

#[test]
fn build_is_deterministic() {
    let s = spec("Akash", "Batash", 640, 480);
    assert_eq!(s.build().unwrap(), s.build().unwrap());
}

#[test]
fn empty_sequences_are_rejected() {
    let canvas = Canvas {
        width: 300,
        height: 300,
    };
    let err = GridSpec::from_text("", "AC", canvas, Margin::default()).unwrap_err();
    assert!(matches!(err, GridError::InvalidDimension(_)));
    assert!(GridSpec::from_text("AB", "", canvas, Margin::default()).is_err());
}

#[test]
fn margin_swallowing_canvas_is_rejected() {
    let canvas = Canvas {
        width: 200,
        height: 300,
    };
    let err = GridSpec::from_text("AB", "AC", canvas, Margin::default()).unwrap_err();
    assert!(matches!(err, GridError::InvalidDimension(_)));
}

#[test]
fn cell_size_uses_drawable_area() {
    let s = spec("ABCD", "AC", 500, 300);
    assert_eq!(
        s.cell_size(),
        CellSize {
            width: 75.0,
            height: 50.0
        }
    );
}

#[test]
fn generic_sequences_use_element_equality() {
    let s = GridSpec::new(
        vec![3u32, 1, 4],
        vec![1u32, 5],
        Canvas {
            width: 500,
            height: 500,
        },
        Margin::default(),
    )
    .unwrap();
    let model = s.build().unwrap();
    let matched: Vec<(u32, u32)> = model
        .points
        .iter()
        .filter(|p| p.diagonal_match)
        .map(|p| (p.i, p.j))
        .collect();
    assert_eq!(matched, vec![(1, 0)]);
}
