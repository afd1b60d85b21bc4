use fleet_sheets::{lookup, Board, Layout, Orientation, RandomSource, Segment, ShipClass};

/// Replays a fixed list of draws.
struct Scripted(Vec<usize>);

impl RandomSource for Scripted {
    fn next_below(&mut self, bound: usize) -> usize {
        self.0.remove(0) % bound
    }
}

fn board_from(layout: &Layout, draws: Vec<usize>) -> Board {
    let gen = Board::generate("P", layout, &mut Scripted(draws)).unwrap();
    assert!(gen.is_complete());
    gen.board
}

#[test]
fn test_horizontal_segments() {
    // Length 4 horizontal at (1, 0).
    let layout = Layout::new(4, 5, vec![ShipClass::new("ship", "Ship", 4, 1)]);
    let board = board_from(&layout, vec![0, 1, 0]);

    let front = lookup(&board, 1, 0).unwrap();
    assert_eq!(front.ship_id, "ship");
    assert_eq!(front.segment, Segment::Front);
    assert_eq!(front.orientation, Orientation::Horizontal);
    assert_eq!(lookup(&board, 1, 1).unwrap().segment, Segment::Middle);
    assert_eq!(lookup(&board, 1, 2).unwrap().segment, Segment::Middle);
    assert_eq!(lookup(&board, 1, 3).unwrap().segment, Segment::Back);
    assert!(lookup(&board, 1, 4).is_none());
    assert!(lookup(&board, 0, 0).is_none());
}

#[test]
fn test_vertical_segments() {
    // Length 2 vertical at (2, 3).
    let layout = Layout::new(4, 5, vec![ShipClass::new("bote", "Bote", 2, 1)]);
    let board = board_from(&layout, vec![1, 2, 3]);

    let front = lookup(&board, 2, 3).unwrap();
    assert_eq!(front.segment, Segment::Front);
    assert_eq!(front.orientation, Orientation::Vertical);
    assert_eq!(lookup(&board, 3, 3).unwrap().segment, Segment::Back);
    assert!(lookup(&board, 1, 3).is_none());
    assert!(lookup(&board, 2, 2).is_none());
}

#[test]
fn test_single_cell_ship_is_front() {
    let layout = Layout::new(2, 2, vec![ShipClass::new("dot", "Dot", 1, 1)]);
    let board = board_from(&layout, vec![0, 1, 1]);
    let info = lookup(&board, 1, 1).unwrap();
    assert_eq!(info.segment, Segment::Front);
}

#[test]
fn test_out_of_grid_lookup_is_none() {
    let layout = Layout::new(2, 2, vec![ShipClass::new("dot", "Dot", 1, 1)]);
    let board = board_from(&layout, vec![0, 0, 0]);
    assert!(lookup(&board, 0, 0).is_some());
    assert!(lookup(&board, 2, 0).is_none());
    assert!(lookup(&board, 0, 2).is_none());
    assert!(lookup(&board, usize::MAX, usize::MAX).is_none());
}

#[test]
fn test_classify() {
    assert_eq!(Segment::classify(0, 1), Segment::Front);
    assert_eq!(Segment::classify(0, 3), Segment::Front);
    assert_eq!(Segment::classify(1, 3), Segment::Middle);
    assert_eq!(Segment::classify(2, 3), Segment::Back);
}
