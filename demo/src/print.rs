use crate::screen::{Layout, ScreenPrinter};
use rotmath::math::*;

pub fn scalar_screen_printf(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32, value: f32, label: &str) {
    printer.screen_printf(x, y, &format!("{:.2}", value));
    printer.screen_printf(x + layout.column_width * 4, y, label);
}

pub fn vector_screen_printf(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32, v: Vec3, label: &str) {
    for (i, value) in v.as_array().iter().enumerate() {
        printer.screen_printf(x + layout.column_width * i as i32, y, &format!("{:.2}", value));
    }
    printer.screen_printf(x + layout.column_width * 3, y, label);
}

pub fn quaternion_screen_printf(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32, q: Quat, label: &str) {
    for (i, value) in q.as_array().iter().enumerate() {
        printer.screen_printf(x + layout.column_width * i as i32, y, &format!("{:.2}", value));
    }
    printer.screen_printf(x + layout.column_width * 4, y, label);
}

// Label on its own line, rows below it.
pub fn matrix_screen_printf(printer: &mut impl ScreenPrinter, layout: &Layout, x: i32, y: i32, m: &Mat44, label: &str) {
    printer.screen_printf(x, y, label);
    for (row, values) in m.rows().iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            printer.screen_printf(
                x + column as i32 * layout.column_width,
                y + (row as i32 + 1) * layout.row_height,
                &format!("{:6.3}", value),
            );
        }
    }
}
