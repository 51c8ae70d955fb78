use std::collections::BTreeMap;

use crate::game::{Canvas, Marker, Position, TextSlot};

/// Retained copy of everything the controller has drawn.
///
/// The renderer turns this into a frame; markers are keyed so a segment
/// index keeps its drawable across ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    board: Option<(i32, i32)>,
    markers: BTreeMap<Marker, (Position, String)>,
    texts: BTreeMap<TextSlot, String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board side and cell size, if the outline is drawn
    pub fn board(&self) -> Option<(i32, i32)> {
        self.board
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    pub fn marker(&self, marker: Marker) -> Option<(Position, &str)> {
        self.markers
            .get(&marker)
            .map(|(pos, color)| (*pos, color.as_str()))
    }

    pub fn food(&self) -> Option<Position> {
        self.marker(Marker::Food).map(|(pos, _)| pos)
    }

    /// Segment positions in index order
    pub fn segments(&self) -> Vec<Position> {
        self.markers
            .iter()
            .filter(|(marker, _)| matches!(marker, Marker::Segment(_)))
            .map(|(_, (pos, _))| *pos)
            .collect()
    }

    /// All markers, segments first in index order
    pub fn markers(&self) -> impl Iterator<Item = (Marker, Position, &str)> {
        self.markers
            .iter()
            .map(|(marker, (pos, color))| (*marker, *pos, color.as_str()))
    }
}

impl Canvas for Scene {
    fn reset(&mut self) {
        self.board = None;
        self.markers.clear();
        self.texts.clear();
    }

    fn clear_overlay(&mut self) {
        self.board = None;
        self.texts.clear();
    }

    fn draw_board(&mut self, side: i32, cell: i32) {
        self.board = Some((side, cell));
    }

    fn place(&mut self, marker: Marker, position: Position, color: &str) {
        self.markers.insert(marker, (position, color.to_string()));
    }

    fn write(&mut self, slot: TextSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_replaces_marker() {
        let mut scene = Scene::new();
        scene.place(Marker::Segment(0), Position::new(15, 15), "green");
        scene.place(Marker::Segment(0), Position::new(45, 15), "green");

        assert_eq!(scene.segments(), vec![Position::new(45, 15)]);
        assert_eq!(
            scene.marker(Marker::Segment(0)),
            Some((Position::new(45, 15), "green"))
        );
    }

    #[test]
    fn test_segments_in_index_order() {
        let mut scene = Scene::new();
        scene.place(Marker::Food, Position::new(75, 75), "red");
        scene.place(Marker::Segment(1), Position::new(15, 15), "green");
        scene.place(Marker::Segment(0), Position::new(45, 15), "green");

        assert_eq!(
            scene.segments(),
            vec![Position::new(45, 15), Position::new(15, 15)]
        );
        assert_eq!(scene.food(), Some(Position::new(75, 75)));
    }

    #[test]
    fn test_clear_overlay_keeps_markers() {
        let mut scene = Scene::new();
        scene.draw_board(600, 30);
        scene.write(TextSlot::Score, "Score: 3");
        scene.place(Marker::Food, Position::new(75, 75), "red");

        scene.clear_overlay();

        assert_eq!(scene.board(), None);
        assert_eq!(scene.text(TextSlot::Score), None);
        assert_eq!(scene.food(), Some(Position::new(75, 75)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut scene = Scene::new();
        scene.draw_board(600, 30);
        scene.write(TextSlot::Title, "SNAKE GAME");
        scene.place(Marker::Segment(0), Position::new(15, 15), "green");

        scene.reset();

        assert_eq!(scene, Scene::new());
    }

    #[test]
    fn test_markers_order() {
        let mut scene = Scene::new();
        scene.place(Marker::Food, Position::new(15, 15), "red");
        scene.place(Marker::Segment(1), Position::new(45, 15), "green");
        scene.place(Marker::Segment(0), Position::new(15, 15), "green");

        let found: Vec<_> = scene.markers().map(|(marker, _, _)| marker).collect();
        assert_eq!(
            found,
            vec![Marker::Segment(0), Marker::Segment(1), Marker::Food]
        );
    }
}
