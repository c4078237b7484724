//! Integration tests for the front desk actor.

use std::collections::HashSet;

use hotelforge_alloc::AllocError;
use hotelforge_building::{Layout, OccupancyRange, RoomNumber};
use hotelforge_desk::{DeskConfig, DeskError, DeskHandle, spawn_desk};

// =========================================================================
// Helpers
// =========================================================================

fn seeded(seed: u64) -> DeskHandle {
    spawn_desk(DeskConfig {
        seed: Some(seed),
        ..DeskConfig::default()
    })
}

fn numbers(rooms: &[hotelforge_building::Room]) -> Vec<u16> {
    rooms.iter().map(|r| r.number.0).collect()
}

// =========================================================================
// Booking
// =========================================================================

#[tokio::test]
async fn test_fresh_desk_lists_97_free_rooms() {
    let desk = seeded(1);
    let rooms = desk.list_rooms().await.unwrap();
    assert_eq!(rooms.len(), 97);
    assert!(rooms.iter().all(|r| !r.occupied));
}

#[tokio::test]
async fn test_book_three_on_fresh_building() {
    let desk = seeded(1);
    let selection = desk.book(3).await.unwrap();
    assert_eq!(numbers(&selection.rooms), vec![101, 102, 103]);
    assert_eq!(selection.travel_time, 2);

    let stats = desk.stats().await.unwrap();
    assert_eq!(stats.available, 94);
    assert_eq!(stats.occupied, 3);
}

#[tokio::test]
async fn test_booked_rooms_are_marked_occupied() {
    let desk = seeded(1);
    desk.book(2).await.unwrap();
    let rooms = desk.list_rooms().await.unwrap();
    let occupied: Vec<u16> = rooms
        .iter()
        .filter(|r| r.occupied)
        .map(|r| r.number.0)
        .collect();
    assert_eq!(occupied, vec![101, 102]);
}

#[tokio::test]
async fn test_consecutive_bookings_move_along_the_floor() {
    let desk = seeded(1);
    desk.book(5).await.unwrap();
    let second = desk.book(5).await.unwrap();
    assert_eq!(numbers(&second.rooms), vec![106, 107, 108, 109, 110]);

    // Floor 1 is now full.
    let third = desk.book(2).await.unwrap();
    assert_eq!(numbers(&third.rooms), vec![201, 202]);
}

#[tokio::test]
async fn test_insufficient_rooms_leaves_table_unchanged() {
    let desk = spawn_desk(DeskConfig {
        layout: Layout::new(vec![2]).unwrap(),
        seed: Some(1),
        ..DeskConfig::default()
    });
    desk.book(1).await.unwrap();

    let err = desk.book(2).await.unwrap_err();
    assert_eq!(
        err,
        DeskError::Alloc(AllocError::InsufficientRooms {
            requested: 2,
            available: 1
        })
    );
    assert_eq!(desk.stats().await.unwrap().available, 1);
}

#[tokio::test]
async fn test_zero_rooms_rejected() {
    let desk = seeded(1);
    assert_eq!(
        desk.book(0).await.unwrap_err(),
        DeskError::Alloc(AllocError::EmptyRequest)
    );
}

#[tokio::test]
async fn test_concurrent_bookings_never_double_book() {
    let desk = seeded(1);

    let mut tasks = Vec::new();
    for _ in 0..19 {
        let desk = desk.clone();
        tasks.push(tokio::spawn(async move { desk.book(5).await }));
    }

    let mut seen: HashSet<RoomNumber> = HashSet::new();
    for task in tasks {
        let selection = task.await.unwrap().unwrap();
        for number in selection.numbers() {
            assert!(seen.insert(number), "room {number} booked twice");
        }
    }
    assert_eq!(seen.len(), 95);

    let stats = desk.stats().await.unwrap();
    assert_eq!(stats.available, 2);
    assert!(matches!(
        desk.book(3).await,
        Err(DeskError::Alloc(AllocError::InsufficientRooms { available: 2, .. }))
    ));
}

// =========================================================================
// Reset and random fill
// =========================================================================

#[tokio::test]
async fn test_reset_twice_equals_reset_once() {
    let desk = seeded(1);
    desk.book(4).await.unwrap();

    desk.reset().await.unwrap();
    let once = desk.list_rooms().await.unwrap();
    desk.reset().await.unwrap();
    let twice = desk.list_rooms().await.unwrap();

    assert_eq!(once, twice);
    assert!(twice.iter().all(|r| !r.occupied));
}

#[tokio::test]
async fn test_randomize_within_range() {
    let desk = seeded(9);
    for _ in 0..10 {
        let fill = desk.randomize().await.unwrap();
        assert!((30..=70).contains(&fill.percent));
        assert_eq!(fill.occupied, 97 * usize::from(fill.percent) / 100);
        assert_eq!(desk.stats().await.unwrap().occupied, fill.occupied);
    }
}

#[tokio::test]
async fn test_randomize_is_reproducible_with_seed() {
    let a = seeded(1234);
    let b = seeded(1234);
    let fill_a = a.randomize().await.unwrap();
    let fill_b = b.randomize().await.unwrap();
    assert_eq!(fill_a, fill_b);
    assert_eq!(a.list_rooms().await.unwrap(), b.list_rooms().await.unwrap());
}

#[tokio::test]
async fn test_custom_occupancy_range() {
    let desk = spawn_desk(DeskConfig {
        occupancy: OccupancyRange::new(100, 100).unwrap(),
        seed: Some(5),
        ..DeskConfig::default()
    });
    let fill = desk.randomize().await.unwrap();
    assert_eq!(fill.occupied, 97);
    assert!(desk.book(1).await.is_err());
}

#[tokio::test]
async fn test_revision_increases() {
    let desk = seeded(1);
    let r0 = desk.stats().await.unwrap().revision;
    desk.book(1).await.unwrap();
    let r1 = desk.stats().await.unwrap().revision;
    desk.reset().await.unwrap();
    let r2 = desk.stats().await.unwrap().revision;
    assert!(r0 < r1 && r1 < r2);
}

// =========================================================================
// Shutdown
// =========================================================================

#[tokio::test]
async fn test_requests_after_shutdown_fail() {
    let desk = seeded(1);
    desk.shutdown().await.unwrap();
    assert_eq!(desk.book(1).await.unwrap_err(), DeskError::Unavailable);
    assert_eq!(desk.list_rooms().await.unwrap_err(), DeskError::Unavailable);
}
