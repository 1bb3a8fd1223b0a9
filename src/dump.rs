//! Non-interactive output: one evaluation written as a table.

use std::io::{self, Write};

use ndarray::ArrayView1;

/// Write `x` and `y` columns separated by a tab, one sample per line,
/// after an `x\ty` header.
pub fn write_samples<W: Write>(
    mut out: W,
    xs: ArrayView1<'_, f64>,
    ys: ArrayView1<'_, f64>,
) -> io::Result<()> {
    writeln!(out, "x\ty")?;
    for (x, y) in xs.iter().zip(ys.iter()) {
        writeln!(out, "{}\t{}", x, y)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_table_format() {
        let mut out = Vec::new();
        let xs = array![-1.0, 0.0, 0.5];
        let ys = array![f64::NAN, f64::INFINITY, 0.25];
        write_samples(&mut out, xs.view(), ys.view()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x\ty\n-1\tNaN\n0\tinf\n0.5\t0.25\n"
        );
    }
}
