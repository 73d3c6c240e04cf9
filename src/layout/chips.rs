use crate::units::Pt;

/// Where a chip ends up: which row, and how far from the start of that row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipSlot {
    pub row: usize,
    pub x: Pt,
}

/// Greedily packs chips of the given widths into rows `row_width` wide, with
/// `gap` between neighbours. A chip moves to a new row when it would cross
/// the end of the current one; a chip wider than a whole row still gets a row
/// to itself rather than leaving an empty one behind.
pub fn pack_chips(widths: &[Pt], row_width: Pt, gap: Pt) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(widths.len());
    let mut row = 0;
    let mut x = Pt(0.0);
    let mut row_is_empty = true;

    for &width in widths {
        if !row_is_empty && x + width > row_width {
            row += 1;
            x = Pt(0.0);
        }
        slots.push(ChipSlot { row, x });
        x += width + gap;
        row_is_empty = false;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_fifty_wide_chips_fit_in_a_row_of_140() {
        let slots = pack_chips(&[Pt(50.0); 4], Pt(140.0), Pt(8.0));
        assert_eq!(
            slots,
            vec![
                ChipSlot { row: 0, x: Pt(0.0) },
                ChipSlot { row: 0, x: Pt(58.0) },
                ChipSlot { row: 1, x: Pt(0.0) },
                ChipSlot { row: 1, x: Pt(58.0) },
            ]
        );
    }

    #[test]
    fn a_chip_can_end_exactly_at_the_edge() {
        let slots = pack_chips(&[Pt(60.0), Pt(72.0)], Pt(140.0), Pt(8.0));
        assert_eq!(slots[1], ChipSlot { row: 0, x: Pt(68.0) });
    }

    #[test]
    fn oversized_chips_do_not_leave_empty_rows() {
        let slots = pack_chips(&[Pt(200.0), Pt(20.0), Pt(300.0)], Pt(140.0), Pt(8.0));
        let rows: Vec<usize> = slots.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
        assert!(slots.iter().all(|s| s.x == Pt(0.0)));
    }

    #[test]
    fn no_chips_no_slots() {
        assert!(pack_chips(&[], Pt(140.0), Pt(8.0)).is_empty());
    }
}
