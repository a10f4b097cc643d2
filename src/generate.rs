//! The generation driver: everything between a seed and a finished image.
//!
//! Seeds a partition tree with an initial polygon, pours uniformly sampled
//! points into it until the target visual density is reached, and renders
//! the result to a [`Surface`]. All randomness flows from one generator
//! seeded by the image seed, so a seed fully determines the image.

use crate::color::{Color, to_hex};
use crate::errors::ValidationError;
use crate::float_types::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI, Real};
use crate::polygon::{Point, Polygon};
use crate::traits::Surface;
use crate::tree::PolyTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The stock palettes, `0xRRGGBBAA` per entry.
pub const PALETTES: [&[Color]; 5] = [
    &[Color(0xE317_0AFF), Color(0x2D1E_2FFF), Color(0xF7B3_2BFF)],
    &[
        Color(0x0A10_45FF),
        Color(0xF9E9_00FF),
        Color(0x00C2_D1FF),
        Color(0xED33_B9FF),
    ],
    &[Color(0x0000_00FF), Color(0xFFFF_FFFF)],
    &[
        Color(0x204E_4AFF),
        Color(0x2970_45FF),
        Color(0x2E93_3CFF),
        Color(0x81C1_4BFF),
    ],
    &[
        Color(0x0D3B_66FF),
        Color(0xFAF0_CAFF),
        Color(0xF4D3_5EFF),
        Color(0xEE96_4BFF),
        Color(0xF957_38FF),
    ],
];

/// Edge counts the single-shape modes pick the seed polygon from.
pub const POLYGON_TYPES: [usize; 4] = [3, 4, 5, 6];

/// Node capacity for single-shape images.
const DEFAULT_CAPACITY: usize = 3;
/// Node capacity for clustered images.
const CLUSTER_CAPACITY: usize = 4;

/// Canvas geometry shared by every mode.
#[derive(Debug, Clone, Copy)]
pub struct CanvasSize {
    pub width: Real,
    pub height: Real,
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize {
            width: 1080.0,
            height: 1080.0,
        }
    }
}

/// The image styles the driver can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A fractured n-gon on a plain background.
    Filled,
    /// A fractured full-canvas backdrop with an intact n-gon on top, so
    /// the center looks uncracked.
    Inverted,
    /// [`Mode::Inverted`] with a [`Mode::Filled`] pass over it, both from
    /// the same seed so the shapes line up.
    Overlay,
    /// A grid of fractured n-gons sharing one point stream.
    Cluster,
}

/// Generate one image for `seed` onto `surface`, rotating at random among
/// the single-shape modes. Returns the mode that was drawn.
pub fn generate<S: Surface>(
    seed: u64,
    canvas: CanvasSize,
    surface: &mut S,
) -> Result<Mode, ValidationError> {
    let mode = match StdRng::seed_from_u64(seed).gen_range(0..3u8) {
        0 => Mode::Filled,
        1 => Mode::Inverted,
        _ => Mode::Overlay,
    };
    render(seed, mode, canvas, surface)?;
    Ok(mode)
}

/// Render `seed` in a specific `mode`.
pub fn render<S: Surface>(
    seed: u64,
    mode: Mode,
    canvas: CanvasSize,
    surface: &mut S,
) -> Result<(), ValidationError> {
    log::info!("seed: {}", to_hex(seed, 10));
    match mode {
        Mode::Filled => generate_filled(seed, canvas, surface, true),
        Mode::Inverted => generate_inverted(seed, canvas, surface, true),
        Mode::Overlay => {
            generate_inverted(seed, canvas, surface, true)?;
            generate_filled(seed, canvas, surface, false)
        },
        Mode::Cluster => generate_cluster(seed, canvas, surface, true),
    }
}

/// A single fractured n-gon centered on the canvas.
///
/// With `background` false the surface is not cleared first, letting the
/// shape land on whatever is already there (used by [`Mode::Overlay`]).
pub fn generate_filled<S: Surface>(
    seed: u64,
    canvas: CanvasSize,
    surface: &mut S,
    background: bool,
) -> Result<(), ValidationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let palette = palette(&mut rng);
    let mut colors = palette.to_vec();

    let sides = pick(&mut rng, &POLYGON_TYPES);
    let radius = canvas.width / 4.0;
    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
    let rotation = starting_rotation(&mut rng);
    let fill = take_color(&mut rng, &mut colors);
    let stroke = take_color(&mut rng, &mut colors);

    let bounds = Polygon::regular_ngon(sides, radius, center, rotation, fill, stroke)?;
    let mut tree = PolyTree::new(bounds, DEFAULT_CAPACITY)?;
    scatter(&mut rng, &mut tree, center, radius);

    if background {
        surface.clear(pick(&mut rng, palette));
    }
    tree.draw(surface, rng.r#gen::<Real>() * 3.0 + 1.0, 1.0);
    Ok(())
}

/// The negative: fracture a full-canvas backdrop around the shape, then
/// draw the intact n-gon over the cracks.
pub fn generate_inverted<S: Surface>(
    seed: u64,
    canvas: CanvasSize,
    surface: &mut S,
    background: bool,
) -> Result<(), ValidationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let palette = palette(&mut rng);
    let mut colors = palette.to_vec();

    let sides = pick(&mut rng, &POLYGON_TYPES);
    let radius = canvas.width / 4.0;
    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
    let rotation = starting_rotation(&mut rng);
    let fill = take_color(&mut rng, &mut colors);
    let stroke = take_color(&mut rng, &mut colors);
    let background_color = pick(&mut rng, palette);

    let shape = Polygon::regular_ngon(sides, radius, center, rotation, stroke, stroke)?;
    let backdrop = Polygon::rectangle(canvas.width, canvas.height, fill, stroke)?;
    let mut tree = PolyTree::new(backdrop, DEFAULT_CAPACITY)?;
    scatter(&mut rng, &mut tree, center, radius);

    if background {
        surface.clear(background_color);
    }
    tree.draw(surface, rng.r#gen::<Real>() * 3.0 + 1.0, 1.0);
    surface.polygon(&shape, 2.0);
    Ok(())
}

/// A 2x3 grid of fractured n-gons with increasing edge counts, fed from
/// one point stream sampled over the whole canvas.
pub fn generate_cluster<S: Surface>(
    seed: u64,
    canvas: CanvasSize,
    surface: &mut S,
    background: bool,
) -> Result<(), ValidationError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let palette = palette(&mut rng);
    let mut colors = palette.to_vec();

    let rows = 2usize;
    let cols = 3usize;
    let cell = canvas.width / (4.0 * cols as Real);
    let radius = rng.r#gen::<Real>() / 2.0 * cell + cell;
    let fill = take_color(&mut rng, &mut colors);
    let stroke = take_color(&mut rng, &mut colors);

    let mut trees = Vec::with_capacity(rows * cols);
    for sides in 3..3 + rows * cols {
        let index = sides - 3;
        let dy = index % rows;
        let dx = index / rows;
        let center = Point::new(
            (canvas.width / cols as Real) * dx as Real + canvas.width / ((rows * cols) as Real),
            (canvas.height / rows as Real) * dy as Real + canvas.height / ((rows * cols) as Real),
        );
        let rotation = starting_rotation(&mut rng);
        let shape = Polygon::regular_ngon(sides, radius, center, rotation, fill, stroke)?;
        trees.push(PolyTree::new(shape, CLUSTER_CAPACITY)?);
    }

    let count = ((rng.r#gen::<Real>() * 5000.0 + 100.0) * (rows * cols) as Real) as usize;
    for _ in 0..count {
        let point = Point::new(
            rng.gen_range(0.0..canvas.width),
            rng.gen_range(0.0..canvas.height),
        );
        for tree in &mut trees {
            tree.insert(point, &mut rng);
        }
    }

    if background {
        surface.clear(pick(&mut rng, palette));
    }
    for tree in &trees {
        tree.draw(surface, rng.r#gen::<Real>() * 3.0 + 1.0, 1.0);
    }
    Ok(())
}

/// Pour uniformly sampled points from the bounding square of the shape's
/// circumcircle into the tree until the target density is reached; density
/// scales inversely with the radius.
fn scatter<R: Rng + ?Sized>(rng: &mut R, tree: &mut PolyTree, center: Point, radius: Real) {
    let count = (rng.r#gen::<Real>() * 5000.0 / radius + 100.0) as usize;
    for _ in 0..count {
        let point = Point::new(
            rng.gen_range(center.x - radius..center.x + radius),
            rng.gen_range(center.y - radius..center.y + radius),
        );
        tree.insert(point, rng);
    }
}

/// Uniform pick of one of the stock palettes.
fn palette<R: Rng + ?Sized>(rng: &mut R) -> &'static [Color] {
    PALETTES[rng.gen_range(0..PALETTES.len())]
}

/// Uniform pick from a non-empty fixed set.
fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, set: &[T]) -> T {
    set[rng.gen_range(0..set.len())]
}

/// Draw a color without replacement, keeping fill, stroke and background
/// distinct while the palette has enough entries.
fn take_color<R: Rng + ?Sized>(rng: &mut R, colors: &mut Vec<Color>) -> Color {
    colors.remove(rng.gen_range(0..colors.len()))
}

/// Starting rotations the seed polygon cycles between.
fn starting_rotation<R: Rng + ?Sized>(rng: &mut R) -> Real {
    pick(rng, &[PI, FRAC_PI_2, FRAC_PI_4, FRAC_PI_8])
}
