use super::*;
use crate::{
    foundation::core::{Canvas, Vec2},
    model::geometry::{GridModel, GridSpec},
    scene::{retained::RetainedScene, surface::Attr},
};

fn margin50() -> Margin {
    Margin {
        horizontal: 50.0,
        vertical: 50.0,
    }
}

fn build_model(a: &str, b: &str, width: u32, height: u32) -> GridModel {
    GridSpec::from_text(a, b, Canvas { width, height }, margin50())
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn render_points_is_idempotent() {
    let model = build_model("AB", "AC", 300, 300);
    let mut scene = RetainedScene::new();
    let mut manager = SceneManager::new(margin50());

    manager.render_points(&mut scene, &model.points).unwrap();
    manager.render_points(&mut scene, &model.points).unwrap();

    assert_eq!(scene.len(), 9);
    assert_eq!(scene.translate(), Some(Vec2::new(50.0, 50.0)));
    let el = scene.get(&ElementKey::Point { i: 1, j: 1 }).unwrap();
    assert_eq!(el.attr(Attr::Cx), Some(100.0));
    assert_eq!(el.attr(Attr::Cy), Some(100.0));
    assert_eq!(el.attr(Attr::R), Some(POINT_RADIUS));
}

#[test]
fn render_lines_is_idempotent() {
    let model = build_model("AB", "AC", 300, 300);
    let mut scene = RetainedScene::new();
    let mut manager = SceneManager::new(margin50());

    manager.render_lines(&mut scene, &model.lines).unwrap();
    manager.render_lines(&mut scene, &model.lines).unwrap();

    assert_eq!(scene.len(), 6);
}

#[test]
fn with_radius_overrides_point_size() {
    let model = build_model("AB", "AC", 300, 300);
    let mut scene = RetainedScene::new();
    let mut manager = SceneManager::new(margin50()).with_radius(4.0);

    manager.render_points(&mut scene, &model.points).unwrap();
    let el = scene.get(&ElementKey::Point { i: 0, j: 0 }).unwrap();
    assert_eq!(el.attr(Attr::R), Some(4.0));
}

#[test]
fn shrunken_model_removes_exactly_stale_points() {
    // "AB" on a 300px canvas and "A" on 200px share the same cell size, so
    // surviving vertices keep their positions across the diff.
    let before = build_model("AB", "AC", 300, 300);
    let after = build_model("A", "AC", 200, 300);
    let mut scene = RetainedScene::new();
    let mut manager = SceneManager::new(margin50());

    manager.render_points(&mut scene, &before.points).unwrap();
    let kept = ElementKey::Point { i: 1, j: 1 };
    let pos_before = scene.resolve(&kept).unwrap();

    manager.render_points(&mut scene, &after.points).unwrap();

    assert_eq!(scene.len(), 6);
    for j in 0..=2 {
        assert!(!scene.contains(&ElementKey::Point { i: 2, j }));
    }
    assert_eq!(scene.resolve(&kept), Some(pos_before));
}

#[test]
fn shrunken_model_removes_stale_lines() {
    let before = build_model("AB", "AC", 300, 300);
    let after = build_model("A", "AC", 200, 300);
    let mut scene = RetainedScene::new();
    let mut manager = SceneManager::new(margin50());

    manager.render_lines(&mut scene, &before.lines).unwrap();
    assert_eq!(scene.len(), 6);

    manager.render_lines(&mut scene, &after.lines).unwrap();
    assert_eq!(scene.len(), 5);
    assert!(!scene.contains(&ElementKey::Line {
        orientation: Orientation::Vertical,
        index: 2
    }));
}

#[test]
fn keyed_lines_index_per_orientation() {
    let model = build_model("AB", "AC", 300, 300);
    let keys: Vec<ElementKey> = keyed_lines(&model.lines).map(|(key, _)| key).collect();
    let expected: Vec<ElementKey> = (0..3)
        .map(|index| ElementKey::Line {
            orientation: Orientation::Horizontal,
            index,
        })
        .chain((0..3).map(|index| ElementKey::Line {
            orientation: Orientation::Vertical,
            index,
        }))
        .collect();
    assert_eq!(keys, expected);
}
