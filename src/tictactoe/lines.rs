//! Winning line analysis for Tic-Tac-Toe

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Bit pattern of a line under the one-bit-per-cell encoding
pub const fn line_mask(line: [usize; 3]) -> u16 {
    let mut mask = 0;
    let mut i = 0;
    while i < line.len() {
        mask |= 1u16 << line[i] as u32;
        i += 1;
    }
    mask
}

/// Masks of every line in `lines`, in the same order
pub const fn line_masks(lines: &[[usize; 3]; 8]) -> [u16; 8] {
    let mut masks = [0; 8];
    let mut i = 0;
    while i < lines.len() {
        masks[i] = line_mask(lines[i]);
        i += 1;
    }
    masks
}

/// Cell-by-cell three-in-a-row check, kept as an oracle for the bitmask
/// evaluator.
#[cfg(test)]
pub(crate) fn has_won(cells: &[super::Cell; 9], mark: super::Mark) -> bool {
    let target = mark.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
