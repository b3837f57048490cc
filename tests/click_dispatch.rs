use std::cell::RefCell;
use std::rc::Rc;

use canvas_annotate::event::{AnnotateEvent, EventHandler};
use canvas_annotate::shape::{Circle, Rectangle, Shape};
use canvas_annotate::{Annotator, AnnotatorConfig, ShapeSpec};
use egui::{Color32, Pos2, Vec2};

const DEFAULT: Color32 = Color32::BLUE;
const HIT: Color32 = Color32::RED;

// Two overlapping rectangles and a separate circle
fn create_test_annotator() -> Annotator {
    let config = AnnotatorConfig {
        image_path: None,
        default_color: [0, 0, 255, 255],
        hit_color: [255, 0, 0, 255],
        shapes: vec![
            ShapeSpec::Rectangle {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0,
            },
            ShapeSpec::Rectangle {
                x: 50.0,
                y: 50.0,
                width: 100.0,
                height: 100.0,
            },
            ShapeSpec::Circle {
                x: 300.0,
                y: 300.0,
                radius: 40.0,
            },
        ],
        ..AnnotatorConfig::default()
    };
    Annotator::new(config).unwrap()
}

fn ids(annotator: &Annotator) -> Vec<usize> {
    annotator.shapes().iter().map(Shape::id).collect()
}

fn fills(annotator: &Annotator) -> Vec<Color32> {
    annotator.shapes().iter().map(Shape::fill).collect()
}

struct Recorder(Rc<RefCell<Vec<AnnotateEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &AnnotateEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn test_click_inside_rectangle_sets_hit_color() {
    let mut annotator = create_test_annotator();
    let ids = ids(&annotator);

    let hits = annotator.handle_click(Pos2::new(10.0, 10.0));

    assert_eq!(hits, vec![ids[0]]);
    assert_eq!(fills(&annotator), vec![HIT, DEFAULT, DEFAULT]);
}

#[test]
fn test_click_outside_reverts_to_default() {
    let mut annotator = create_test_annotator();

    annotator.handle_click(Pos2::new(10.0, 10.0));
    assert_eq!(annotator.shapes()[0].fill(), HIT);

    let hits = annotator.handle_click(Pos2::new(500.0, 10.0));
    assert!(hits.is_empty());
    assert_eq!(fills(&annotator), vec![DEFAULT, DEFAULT, DEFAULT]);
}

#[test]
fn test_overlapping_shapes_all_receive_click() {
    let mut annotator = create_test_annotator();
    let ids = ids(&annotator);

    let hits = annotator.handle_click(Pos2::new(75.0, 75.0));

    assert_eq!(hits, vec![ids[0], ids[1]]);
    assert_eq!(fills(&annotator), vec![HIT, HIT, DEFAULT]);
}

#[test]
fn test_exactly_containing_shapes_receive_callback() {
    let mut annotator = create_test_annotator();
    let received = Rc::new(RefCell::new(Vec::new()));

    for id in ids(&annotator) {
        let received = Rc::clone(&received);
        annotator
            .shape_mut(id)
            .unwrap()
            .add_click_listener(Box::new(move |event, _| {
                received.borrow_mut().push(event.shape_id)
            }));
    }

    let points = [
        Pos2::new(10.0, 10.0),
        Pos2::new(75.0, 75.0),
        Pos2::new(140.0, 140.0),
        Pos2::new(300.0, 330.0),
        Pos2::new(335.0, 335.0),
        Pos2::new(600.0, 10.0),
    ];
    for point in points {
        received.borrow_mut().clear();
        let hits = annotator.handle_click(point);
        assert_eq!(*received.borrow(), annotator.shapes_at(point), "at {:?}", point);
        assert_eq!(hits, annotator.shapes_at(point), "at {:?}", point);
    }
}

#[test]
fn test_listener_receives_click_position() {
    let mut annotator = create_test_annotator();
    let circle = Circle::new(Pos2::new(600.0, 100.0), 10.0).unwrap();
    let mut shape = Shape::new(circle, Color32::GRAY);
    let seen = Rc::new(RefCell::new(None));
    {
        let seen = Rc::clone(&seen);
        shape.add_click_listener(Box::new(move |event, fill| {
            *seen.borrow_mut() = Some(event.position);
            *fill = Color32::YELLOW;
        }));
    }
    let id = annotator.add_shape(shape);

    annotator.handle_click(Pos2::new(605.0, 100.0));

    assert_eq!(*seen.borrow(), Some(Pos2::new(605.0, 100.0)));
    assert_eq!(annotator.shape(id).unwrap().fill(), Color32::YELLOW);
}

#[test]
fn test_detached_handler_ignores_clicks() {
    let mut annotator = create_test_annotator();
    annotator.detach();

    let hits = annotator.handle_click(Pos2::new(10.0, 10.0));
    assert!(hits.is_empty());
    assert_eq!(fills(&annotator), vec![DEFAULT, DEFAULT, DEFAULT]);

    annotator.attach();
    let hits = annotator.handle_click(Pos2::new(10.0, 10.0));
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_click_emits_event() {
    let mut annotator = create_test_annotator();
    let events = Rc::new(RefCell::new(Vec::new()));
    annotator
        .event_bus()
        .subscribe(Box::new(Recorder(Rc::clone(&events))));

    let hits = annotator.handle_click(Pos2::new(300.0, 300.0));

    assert_eq!(
        *events.borrow(),
        vec![AnnotateEvent::Clicked {
            position: Pos2::new(300.0, 300.0),
            hits,
        }]
    );
}

#[test]
fn test_removed_shape_no_longer_hit() {
    let mut annotator = create_test_annotator();
    let first = ids(&annotator)[0];

    let removed = annotator.remove_shape(first).unwrap();
    assert_eq!(removed.id(), first);
    assert!(annotator.remove_shape(first).is_none());

    assert!(annotator.handle_click(Pos2::new(10.0, 10.0)).is_empty());
}

#[test]
fn test_added_rectangle_without_listener_keeps_fill() {
    let mut annotator = create_test_annotator();
    let rect = Rectangle::new(Pos2::new(400.0, 0.0), Vec2::new(20.0, 20.0)).unwrap();
    let id = annotator.add_shape(Shape::new(rect, Color32::GREEN));

    assert_eq!(annotator.handle_click(Pos2::new(410.0, 10.0)), vec![id]);
    assert_eq!(annotator.shape(id).unwrap().fill(), Color32::GREEN);
}
