//! Breadth-first flood fill used as the reference partition.

use std::collections::VecDeque;

/// Components of a mask as found by flood fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct FloodFill {
    /// Component index per cell in row-major order; `None` for background.
    pub components: Vec<Option<usize>>,
    /// Cell count per component, in discovery order.
    pub sizes: Vec<u64>,
}

/// Labels 4-connected components in raster discovery order.
pub(super) fn flood_fill(rows: &[Vec<u8>]) -> FloodFill {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    let foreground = |x: usize, y: usize| rows[y][x] != 0;

    let mut components = vec![None; width * height];
    let mut sizes = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..width * height {
        let (sx, sy) = (start % width, start / width);
        if !foreground(sx, sy) || components[start].is_some() {
            continue;
        }

        let component = sizes.len();
        let mut size = 0;
        components[start] = Some(component);
        queue.push_back((sx, sy));
        while let Some((x, y)) = queue.pop_front() {
            size += 1;
            let neighbours = [
                (x.checked_sub(1), Some(y)),
                ((x + 1 < width).then_some(x + 1), Some(y)),
                (Some(x), y.checked_sub(1)),
                (Some(x), (y + 1 < height).then_some(y + 1)),
            ];
            for (nx, ny) in neighbours {
                let (Some(nx), Some(ny)) = (nx, ny) else {
                    continue;
                };
                let index = ny * width + nx;
                if foreground(nx, ny) && components[index].is_none() {
                    components[index] = Some(component);
                    queue.push_back((nx, ny));
                }
            }
        }
        sizes.push(size);
    }

    FloodFill { components, sizes }
}
