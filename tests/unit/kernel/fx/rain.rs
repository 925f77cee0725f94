use super::*;

#[test]
fn column_count_follows_cell_width() {
    let surface = RainSurface::with_seed(40, 10, 1);
    assert_eq!(surface.cols(), 40);
    assert_eq!(RainSurface::for_area(41, 10).cols(), 20);
}

#[test]
fn drops_start_above_the_surface() {
    let surface = RainSurface::with_seed(30, 10, 7);
    assert!(surface.drops().iter().all(|d| (-20..0).contains(d)));
}

#[test]
fn every_tick_advances_each_drop() {
    let mut surface = RainSurface::with_seed(8, 1000, 3);
    let before = surface.drops().to_vec();
    surface.tick();
    for (a, b) in before.iter().zip(surface.drops()) {
        assert_eq!(*b, a + 1);
    }
}

#[test]
fn visible_drop_paints_a_bright_glyph() {
    let mut surface = RainSurface::with_seed(4, 50, 11);
    for _ in 0..25 {
        surface.tick();
    }
    let painted = (0..surface.cols())
        .flat_map(|c| (0..surface.rows()).map(move |r| (c, r)))
        .filter_map(|(c, r)| surface.cell(c, r))
        .filter(|cell| cell.brightness == 255)
        .count();
    assert_eq!(painted, surface.cols() as usize);
}

#[test]
fn painted_glyph_dims_each_tick() {
    let mut surface = RainSurface::with_seed(1, 100, 5);
    for _ in 0..21 {
        surface.tick();
    }
    let row = (surface.drops()[0] - 1) as u16;
    assert_eq!(surface.cell(0, row).unwrap().brightness, 255);
    surface.tick();
    assert_eq!(surface.cell(0, row).unwrap().brightness, 255 - 13);
}

#[test]
fn drops_past_bottom_eventually_reset() {
    let mut surface = RainSurface::with_seed(16, 2, 9);
    let mut reset_seen = false;
    for _ in 0..2000 {
        let before = surface.drops().to_vec();
        surface.tick();
        if before.iter().zip(surface.drops()).any(|(a, b)| b < a) {
            assert!(before.iter().zip(surface.drops()).all(|(a, b)| b < a || *b == a + 1));
            reset_seen = true;
        }
    }
    assert!(reset_seen);
}

#[test]
fn resize_rebuilds_dimensions() {
    let mut surface = RainSurface::with_seed(10, 10, 2);
    surface.resize(40, 6);
    assert_eq!(surface.cols(), 20);
    assert_eq!(surface.rows(), 6);
    assert_eq!(surface.drops().len(), 20);
    assert!(surface.cell(19, 5).is_none());
}
