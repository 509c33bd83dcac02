use approx::assert_relative_eq;
use msise00::model::ModelOutput;

pub fn assert_output_close(
    case: usize,
    actual: &ModelOutput,
    expected_d: &[f64; 9],
    expected_t: &[f64; 2],
    epsilon: f64,
) {
    for (slot, (&value, &expected)) in actual.densities.iter().zip(expected_d).enumerate() {
        if expected == 0.0 {
            assert_eq!(value, 0.0, "case {case}, density slot {slot}");
        } else {
            assert_relative_eq!(value, expected, max_relative = epsilon);
        }
    }
    for (&value, &expected) in actual.temperatures.iter().zip(expected_t) {
        assert_relative_eq!(value, expected, max_relative = epsilon);
    }
}
