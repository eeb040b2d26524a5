// 2D sample grid: row-major Vec<Vec<f32>> of size N*N
// access as `grid[y][x]`
pub type NoiseGrid2D = Vec<Vec<f32>>;

// flatten a 2D grid (row-major) into a single Vec<f32>,
// the layout texture bakers and pixel-buffer packers expect
pub fn flatten2(grid: &NoiseGrid2D) -> Vec<f32> {
    grid.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Rescale a grid into [0, 1] by its own min/max
pub fn normalize2(grid: &mut NoiseGrid2D) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in grid.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = (max - min).max(0.001); // prevent zero-division
    for row in grid.iter_mut() {
        for val in row.iter_mut() {
            *val = (*val - min) / range;
        }
    }
}
