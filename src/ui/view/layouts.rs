//! 布局计算
//!
//! 分类网格的列数和单元格位置

use ratatui::layout::Rect;

/// 分类卡片的最小宽度
pub const CARD_WIDTH: u16 = 24;
/// 分类卡片高度（含边框）
pub const CARD_HEIGHT: u16 = 3;

/// 根据可用宽度计算网格列数，至少一列
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// 区域内能完整显示的行数，至少一行
pub fn visible_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// 让选中行保持可见的首行
pub fn first_visible_row(selected: usize, columns: usize, rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(rows.saturating_sub(1))
}

/// 计算每张卡片的位置，返回 (卡片序号, 区域)
///
/// 从右向左排版时每一行镜像排列。
pub fn grid_cells(
    area: Rect,
    count: usize,
    columns: usize,
    first_row: usize,
    rtl: bool,
) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let cell_width = area.width / columns as u16;
    let mut cells = Vec::new();

    for (visible_row, row) in (first_row..).enumerate() {
        let y = area.y + visible_row as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }

        for col in 0..columns {
            let index = row * columns + col;
            if index >= count {
                return cells;
            }
            let slot = if rtl { columns - 1 - col } else { col };
            let x = area.x + slot as u16 * cell_width;
            cells.push((index, Rect::new(x, y, cell_width, CARD_HEIGHT)));
        }
    }

    cells
}
