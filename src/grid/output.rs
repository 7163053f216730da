use crate::domain::Point3;
use std::io::{self, Write};

/// Write one `"<x> <y> <z>"` line per point.
///
/// `precision` fixes the number of decimals; `None` prints the shortest
/// representation that round-trips.
///
/// # Returns
/// * Number of lines written
pub fn write_points<W, I>(writer: &mut W, points: I, precision: Option<usize>) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Point3>,
{
    let mut count = 0;

    for p in points {
        match precision {
            Some(d) => writeln!(writer, "{:.d$} {:.d$} {:.d$}", p.x, p.y, p.z, d = d)?,
            None => writeln!(writer, "{} {} {}", p.x, p.y, p.z)?,
        }
        count += 1;
    }

    writer.flush()?;

    Ok(count)
}
