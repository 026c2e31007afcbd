use super::*;

fn model() -> ShapeModel {
    // Mount defaults: radius 100, size 50, offset (25, 25).
    ShapeModel::default()
}

#[test]
fn offset_fields_clamp_on_store() {
    let mut m = model();
    assert_eq!(m.set_square_x(200.0), 75.0);
    assert_eq!(m.set_square_x(-200.0), -75.0);
    assert_eq!(m.set_square_y(200.0), 75.0);
    assert_eq!(m.set_square_y(40.0), 40.0);
}

#[test]
fn radius_and_size_store_without_reclamping_offsets() {
    let mut m = model();
    m.set_square_x(75.0);
    m.set_radius(50.0);
    // Stored offset now lies outside the shrunken disc and stays there.
    assert_eq!(m.square.offset_x, 75.0);

    m.set_square_size(120.0);
    assert_eq!(m.square.size, 120.0);
    assert_eq!(m.square.offset_x, 75.0);
}

#[test]
fn press_at_center_always_starts_a_drag() {
    let mut m = model();
    assert!(m.pointer_down(0.0, 0.0));
    assert!(m.dragging());
}

#[test]
fn press_beyond_reach_never_starts_a_drag() {
    let mut m = model();
    assert!(!m.pointer_down(80.0, 0.0));
    assert_eq!(m.drag, DragState::Idle);
    assert!(!m.pointer_down(60.0, 60.0));
    assert!(!m.dragging());
}

#[test]
fn drag_records_grab_point_and_tracks_pointer() {
    let mut m = model();
    // Press on the square: grab = pointer - square offset.
    assert!(m.pointer_down(30.0, 30.0));
    assert_eq!(
        m.drag,
        DragState::Dragging {
            grab_x: 5.0,
            grab_y: 5.0
        }
    );
    assert!(m.pointer_move(40.0, 35.0));
    assert_eq!(m.square.offset_x, 35.0);
    assert_eq!(m.square.offset_y, 30.0);
}

#[test]
fn move_outside_reach_leaves_square_in_place() {
    let mut m = model();
    assert!(m.pointer_down(25.0, 25.0));
    assert!(!m.pointer_move(100.0, 0.0));
    assert_eq!(m.square.offset_x, 25.0);
    assert_eq!(m.square.offset_y, 25.0);
    // Coming back within reach resumes tracking.
    assert!(m.pointer_move(50.0, 25.0));
    assert_eq!(m.square.offset_x, 50.0);
}

#[test]
fn move_without_active_drag_is_ignored() {
    let mut m = model();
    assert!(!m.pointer_move(10.0, 10.0));
    assert_eq!(m.square.offset_x, 25.0);
}

#[test]
fn drag_offsets_stay_clamped() {
    let mut m = model();
    // Grab the square dead center of the disc with a large grab offset.
    assert!(m.pointer_down(0.0, 0.0));
    let DragState::Dragging { grab_x, grab_y } = m.drag else {
        panic!("expected an active drag");
    };
    assert_eq!((grab_x, grab_y), (-25.0, -25.0));
    // Pointer near the rim: raw target 70 - (-25) = 95, clamped to 75.
    assert!(m.pointer_move(70.0, 0.0));
    assert_eq!(m.square.offset_x, 75.0);
    assert_eq!(m.square.offset_y, 25.0);
}

#[test]
fn release_ends_the_gesture() {
    let mut m = model();
    assert!(m.pointer_down(0.0, 0.0));
    m.pointer_up();
    assert_eq!(m.drag, DragState::Idle);
    assert!(!m.pointer_move(10.0, 10.0));
}
