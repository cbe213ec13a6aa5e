//! PNG rendering of partitions and distance heatmaps.
use std::path::Path;

use glam::DVec2;
use hetero_voronoi::prelude::{Labels, LocationSet};
use image::{Rgb, RgbImage};
use tracing::info;

/// Color for locations claimed by more than one agent.
pub const TIE_COLOR: [u8; 3] = [30, 30, 30];

const AGENT_COLORS: [[u8; 3]; 8] = [
    [230, 25, 75],
    [60, 180, 75],
    [0, 130, 200],
    [245, 130, 48],
    [145, 30, 180],
    [70, 240, 240],
    [240, 50, 230],
    [210, 245, 60],
];

/// Blue to red ramp sampled by [`heatmap_color`].
const HEAT_RAMP: [[f64; 3]; 5] = [
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
];

/// Image size and the world rectangle mapped onto it.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub world_min: DVec2,
    pub world_max: DVec2,
    pub background: [u8; 3],
    /// Half side length of the square drawn per location, in pixels.
    pub point_radius: i32,
    /// Radius of the agent markers, in pixels.
    pub agent_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), world_min: DVec2, world_max: DVec2) -> Self {
        Self {
            image_size,
            world_min,
            world_max,
            background: [255, 255, 255],
            point_radius: 3,
            agent_radius: 6,
        }
    }

    /// Fits the view to the bounds of `locations`.
    pub fn fit(image_size: (u32, u32), locations: &LocationSet) -> Self {
        let (lo, hi) = locations.bounds().unwrap_or((DVec2::ZERO, DVec2::ONE));
        Self::new(image_size, lo, hi)
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_radius(mut self, point_radius: i32) -> Self {
        self.point_radius = point_radius;
        self
    }

    fn world_to_pixel(&self, p: DVec2) -> (i64, i64) {
        let span = (self.world_max - self.world_min).max(DVec2::splat(f64::EPSILON));
        let margin = f64::from(self.agent_radius.max(self.point_radius));
        let w = f64::from(self.image_size.0) - 2.0 * margin;
        let h = f64::from(self.image_size.1) - 2.0 * margin;
        let t = (p - self.world_min) / span;
        let x = margin + t.x * w;
        // Image rows grow downwards.
        let y = margin + (1.0 - t.y) * h;
        (x.round() as i64, y.round() as i64)
    }
}

/// Distinct color per agent, cycling after eight agents.
pub fn agent_color(agent: usize) -> [u8; 3] {
    AGENT_COLORS[agent % AGENT_COLORS.len()]
}

/// Maps `norm` in `[0, 1]` onto the blue to red ramp, clamping outside values.
pub fn heatmap_color(norm: f64) -> [u8; 3] {
    let last = HEAT_RAMP.len() - 1;
    let (lo, hi, frac) = if norm.is_nan() || norm <= 0.0 {
        (0, 0, 0.0)
    } else if norm >= 1.0 {
        (last, last, 0.0)
    } else {
        let scaled = norm * last as f64;
        let lo = scaled.floor() as usize;
        (lo, lo + 1, scaled - lo as f64)
    };
    let mut rgb = [0u8; 3];
    for (c, out) in rgb.iter_mut().enumerate() {
        let v = HEAT_RAMP[lo][c] + (HEAT_RAMP[hi][c] - HEAT_RAMP[lo][c]) * frac;
        *out = (v * 255.0).round() as u8;
    }
    rgb
}

/// Min-max normalizes `values` for display. NaN entries, and every entry when all values
/// are equal, map to zero.
pub fn normalize_for_display(values: &[f64]) -> Vec<f64> {
    let present = values.iter().copied().filter(|v| !v.is_nan());
    let lo = present.clone().fold(f64::INFINITY, f64::min);
    let hi = present.fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;

    values
        .iter()
        .map(|&v| {
            if v.is_nan() || range.is_nan() || range <= 0.0 {
                0.0
            } else {
                (v - lo) / range
            }
        })
        .collect()
}

/// Draws every location in its owning agent's color, then the agents on top.
pub fn render_labels_to_png(
    locations: &LocationSet,
    labels: &Labels,
    agents: &[DVec2],
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = blank(rc);
    for (agent, cell) in labels.iter() {
        for &i in cell {
            if let Some(p) = locations.get(i) {
                fill_square(&mut img, rc, p, agent_color(agent));
            }
        }
    }
    draw_agents(&mut img, rc, agents);
    save(img, path)
}

/// Draws per-agent cells. Locations present in several cells use [`TIE_COLOR`].
pub fn render_cells_to_png(
    locations: &LocationSet,
    cells: &[Vec<DVec2>],
    agents: &[DVec2],
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = blank(rc);
    for p in locations.iter() {
        let owners: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.contains(&p))
            .map(|(agent, _)| agent)
            .collect();
        let color = match owners.as_slice() {
            [] => continue,
            [agent] => agent_color(*agent),
            _ => TIE_COLOR,
        };
        fill_square(&mut img, rc, p, color);
    }
    draw_agents(&mut img, rc, agents);
    save(img, path)
}

/// Draws one scalar per location using [`heatmap_color`] after display normalization.
pub fn render_heatmap_to_png(
    locations: &LocationSet,
    values: &[f64],
    agents: &[DVec2],
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        values.len() == locations.len(),
        "expected {} values, got {}",
        locations.len(),
        values.len()
    );
    let mut img = blank(rc);
    for (p, norm) in locations.iter().zip(normalize_for_display(values)) {
        fill_square(&mut img, rc, p, heatmap_color(norm));
    }
    draw_agents(&mut img, rc, agents);
    save(img, path)
}

fn blank(rc: &RenderConfig) -> RgbImage {
    RgbImage::from_pixel(rc.image_size.0, rc.image_size.1, Rgb(rc.background))
}

fn fill_square(img: &mut RgbImage, rc: &RenderConfig, p: DVec2, color: [u8; 3]) {
    let (cx, cy) = rc.world_to_pixel(p);
    let r = i64::from(rc.point_radius);
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            put(img, x, y, color);
        }
    }
}

fn draw_agents(img: &mut RgbImage, rc: &RenderConfig, agents: &[DVec2]) {
    let r = i64::from(rc.agent_radius);
    for &p in agents {
        let (cx, cy) = rc.world_to_pixel(p);
        for y in cy - r..=cy + r {
            for x in cx - r..=cx + r {
                let d2 = (x - cx).pow(2) + (y - cy).pow(2);
                if d2 <= r * r {
                    let ring = d2 >= (r - 2).max(0).pow(2);
                    put(img, x, y, if ring { [0, 0, 0] } else { [255, 255, 255] });
                }
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    img.put_pixel(x as u32, y as u32, Rgb(color));
}

fn save(img: RgbImage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    img.save(path)?;
    info!("Wrote {}.", path.display());
    Ok(())
}
