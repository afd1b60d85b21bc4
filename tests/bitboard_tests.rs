use fleet_sheets::{BitBoard, BitBoardError, OccupancyMask};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    assert!(BitBoard::<u64>::try_new(8, 8).is_ok());
    assert!(OccupancyMask::try_new(10, 11).is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8>::try_new(3, 3);
    assert!(matches!(
        err,
        Err(BitBoardError::SizeTooLarge { cells: 9, capacity: 8 })
    ));

    let err = OccupancyMask::try_new(usize::MAX, 2);
    assert!(matches!(
        err,
        Err(BitBoardError::SizeTooLarge {
            cells: usize::MAX,
            capacity: 128
        })
    ));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16>::try_new(3, 5).unwrap();
    assert!(bb.is_empty());

    bb.set(2, 4).unwrap();
    assert!(bb.get(2, 4).unwrap());
    assert!(bb.get(4, 2).is_err());
    assert_eq!((bb.rows(), bb.cols()), (3, 5));
    assert_eq!(bb.count_ones(), 1);

    bb.clear(2, 4).unwrap();
    assert!(bb.is_empty());
}

#[test]
fn test_bounds_follow_rectangle() {
    let mut bb = BitBoard::<u32>::try_new(2, 6).unwrap();
    assert!(bb.set(1, 5).is_ok());
    assert_eq!(
        bb.set(2, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 2, col: 0 })
    );
    assert_eq!(
        bb.set(0, 6),
        Err(BitBoardError::IndexOutOfBounds { row: 0, col: 6 })
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16>::from_cells(4, 3, [(0, 1), (3, 2)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 2)]);
}

#[test]
fn test_intersects() {
    let a = OccupancyMask::from_cells(10, 11, [(0, 0), (0, 1), (0, 2)]).unwrap();
    let b = OccupancyMask::from_cells(10, 11, [(0, 2), (1, 2)]).unwrap();
    let c = OccupancyMask::from_cells(10, 11, [(5, 5)]).unwrap();
    assert!(a.intersects(&b).unwrap());
    assert!(!a.intersects(&c).unwrap());
    assert_eq!((a | c).count_ones(), 4);
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(0, 2)]);

    let other = OccupancyMask::try_new(6, 7).unwrap();
    assert_eq!(a.intersects(&other), Err(BitBoardError::DimensionMismatch));
}

#[test]
fn test_last_cell_of_full_mask() {
    // 128 cells fill a u128 exactly.
    let mut bb = OccupancyMask::try_new(8, 16).unwrap();
    bb.set(7, 15).unwrap();
    assert_eq!(bb.iter_set_bits().collect::<Vec<_>>(), vec![(7, 15)]);
}
