use crate::print::*;
use crate::screen::{Layout, ScreenPrinter};
use rotmath::math::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scene {
    /// Identity, conjugate, inverse, normalize, multiply and norm of two fixed quaternions
    Basics,
    /// One rotation applied to a point by quaternion and by matrix
    Rotation,
    /// Slerp samples between two axis-angle rotations
    Slerp,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Basics, Scene::Rotation, Scene::Slerp];

    /// Draws the scene with its first row at `y` and returns how many rows it took.
    pub fn draw(self, printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32) -> Result<i32, QuatError> {
        match self {
            Scene::Basics => draw_basics(printer, layout, x, y),
            Scene::Rotation => Ok(draw_rotation(printer, layout, x, y)),
            Scene::Slerp => Ok(draw_slerp(printer, layout, x, y)),
        }
    }
}

/// Draws `scenes` top to bottom with an empty row between them.
pub fn draw_scenes(printer: &mut impl ScreenPrinter, layout: &Layout, scenes: &[Scene]) -> Result<(), QuatError> {
    let mut y = 0;
    for scene in scenes {
        tracing::debug!(?scene, y, "drawing scene");
        let rows = scene.draw(printer, layout, 0, y)?;
        y += (rows + 1) * layout.row_height;
    }
    Ok(())
}

fn draw_basics(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32) -> Result<i32, QuatError> {
    let q1 = Quat::new(2.0, 3.0, 4.0, 1.0);
    let q2 = Quat::new(1.0, 3.0, 5.0, 2.0);
    let identity = Quat::identity();
    let conj = q1.conjugate();
    let inv = q1.inverse()?;
    let normal = q1.normalized()?;
    let mul1 = q1 * q2;
    let mul2 = q2 * q1;
    let norm = q1.norm();

    let row = |i: i32| y + layout.row_height * i;
    quaternion_screen_printf(printer, layout, x, row(0), identity, "   : Identity");
    quaternion_screen_printf(printer, layout, x, row(1), conj, "   : Conjugate");
    quaternion_screen_printf(printer, layout, x, row(2), inv, "   : Inverse");
    quaternion_screen_printf(printer, layout, x, row(3), normal, "   : Normalize");
    quaternion_screen_printf(printer, layout, x, row(4), mul1, "   : Multiply(q1, q2)");
    quaternion_screen_printf(printer, layout, x, row(5), mul2, "   : Multiply(q2, q1)");
    scalar_screen_printf(printer, layout, x, row(6), norm, "   : Norm");
    Ok(7)
}

fn draw_rotation(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32) -> i32 {
    let rotation = Quat::from_axis_angle(Vec3::new(1.0, 0.4, -0.2).normalized(), 0.45);
    let point_y = Vec3::new(2.1, -0.9, 1.3);
    let rotate_matrix = make_rotate_matrix(rotation);
    let rotate_by_quaternion = rotate_vector(point_y, rotation);
    let rotate_by_matrix = transform(point_y, &rotate_matrix);

    let row = |i: i32| y + layout.row_height * i;
    quaternion_screen_printf(printer, layout, x, row(0), rotation, "   : rotation");
    matrix_screen_printf(printer, layout, x, row(1), &rotate_matrix, "rotateMatrix");
    vector_screen_printf(printer, layout, x, row(6), rotate_by_quaternion, "   : rotateByQuaternion");
    vector_screen_printf(printer, layout, x, row(7), rotate_by_matrix, "   : rotateByMatrix");
    8
}

fn draw_slerp(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32) -> i32 {
    let rotation0 = Quat::from_axis_angle(Vec3::new(0.71, 0.71, 0.0), 0.3);
    let rotation1 = Quat::from_axis_angle(Vec3::new(0.71, 0.0, 0.71), 3.141592);

    let samples = [0.0f32, 0.3, 0.5, 0.7, 1.0];
    for (i, t) in samples.iter().enumerate() {
        let interpolated = slerp(rotation0, rotation1, *t);
        let label = format!("   : interpolate{}, Slerp(q0, q1, {:.1})", i, t);
        quaternion_screen_printf(printer, layout, x, y + layout.row_height * i as i32, interpolated, &label);
    }
    samples.len() as i32
}
