/// Fills both operand matrices from the flattened row-major index:
/// `a[i] = i * 2` and `b[i] = i + 2`.
///
/// The fill is deterministic, so repeated runs multiply identical inputs
/// and stay comparable across sizes and thread counts.
pub fn fill_operands(a: &mut [usize], b: &mut [usize]) {
    for (i, value) in a.iter_mut().enumerate() {
        *value = i * 2;
    }
    for (i, value) in b.iter_mut().enumerate() {
        *value = i + 2;
    }
}
