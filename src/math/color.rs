/// Convert HSV (all components in [0, 1]) to linear RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn pure_red() {
        let rgb = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!(close(rgb[0], 1.0) && close(rgb[1], 0.0) && close(rgb[2], 0.0));
    }

    #[test]
    fn pure_green() {
        let rgb = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(close(rgb[0], 0.0) && close(rgb[1], 1.0) && close(rgb[2], 0.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let rgb = hsv_to_rgb(0.7, 0.0, 0.5);
        assert!(close(rgb[0], 0.5) && close(rgb[1], 0.5) && close(rgb[2], 0.5));
    }

    #[test]
    fn zero_value_is_black() {
        let rgb = hsv_to_rgb(0.2, 1.0, 0.0);
        assert!(close(rgb[0], 0.0) && close(rgb[1], 0.0) && close(rgb[2], 0.0));
    }
}
