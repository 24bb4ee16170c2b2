//! Text representation of vectors.

use crate::{error::VectorError, mask::BoolVector, vector::Vector};
use std::fmt::{self, Write};

/// Conventions for rendering vectors as text.
///
/// A vector is rendered as its components enclosed in `<` and `>`, with the
/// list separator followed by a space between components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorFormat {
    list_separator: char,
    decimal_separator: char,
    precision: Option<usize>,
}

/// A vector paired with the format to display it with. Created by
/// [`Vector::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct FormattedVector<'a, const N: usize> {
    vector: &'a Vector<N>,
    format: VectorFormat,
}

/// Writer replacing the `.` of formatted numbers with another decimal
/// separator.
struct DecimalSeparatorWriter<'a, W> {
    inner: &'a mut W,
    separator: char,
}

/// Writer filling a byte buffer, failing when it runs out of space.
struct SliceWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl VectorFormat {
    /// `<1.5, 2.5>`
    pub const INVARIANT: Self = Self::new(',', '.');

    /// `<1,5; 2,5>`
    pub const DECIMAL_COMMA: Self = Self::new(';', ',');

    /// Creates a format with the given separators and shortest round-trip
    /// precision.
    pub const fn new(list_separator: char, decimal_separator: char) -> Self {
        Self {
            list_separator,
            decimal_separator,
            precision: None,
        }
    }

    /// Returns this format with each component rendered with the given
    /// number of decimals.
    pub const fn with_precision(self, precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..self
        }
    }

    pub const fn list_separator(&self) -> char {
        self.list_separator
    }

    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub const fn precision(&self) -> Option<usize> {
        self.precision
    }
}

impl Default for VectorFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl<const N: usize> Vector<N> {
    /// Returns an object that displays this vector with the given format.
    pub fn display_with(&self, format: &VectorFormat) -> FormattedVector<'_, N> {
        FormattedVector {
            vector: self,
            format: *format,
        }
    }

    /// Renders this vector with the given format.
    pub fn format_with(&self, format: &VectorFormat) -> String {
        self.display_with(format).to_string()
    }

    /// Writes this vector as UTF-8 text with the given format into the
    /// given buffer and returns the number of bytes written.
    ///
    /// # Errors
    /// Returns [`VectorError::BufferTooSmall`] if the text does not fit. The
    /// content of the buffer is unspecified in that case.
    pub fn try_format_into(
        &self,
        buffer: &mut [u8],
        format: &VectorFormat,
    ) -> Result<usize, VectorError> {
        let capacity = buffer.len();
        let mut writer = SliceWriter { buffer, written: 0 };

        if write!(writer, "{}", self.display_with(format)).is_ok() {
            return Ok(writer.written);
        }

        let required = self.format_with(format).len();
        log::debug!(
            "Buffer of {capacity} bytes too small for formatted vector of {required} bytes"
        );
        Err(VectorError::BufferTooSmall { capacity, required })
    }
}

impl<const N: usize> FormattedVector<'_, N> {
    fn write_components(&self, out: &mut impl Write, precision: Option<usize>) -> fmt::Result {
        out.write_char('<')?;
        for (i, component) in self.vector.iter().enumerate() {
            if i > 0 {
                out.write_char(self.format.list_separator)?;
                out.write_char(' ')?;
            }
            let mut writer = DecimalSeparatorWriter {
                inner: &mut *out,
                separator: self.format.decimal_separator,
            };
            match precision {
                Some(precision) => write!(writer, "{component:.precision$}")?,
                None => write!(writer, "{component}")?,
            }
        }
        out.write_char('>')
    }
}

/// Honours the formatter's precision for each component, and its width, fill
/// and alignment for the rendered vector as a whole.
impl<const N: usize> fmt::Display for FormattedVector<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.format.precision.or(f.precision());

        let Some(width) = f.width() else {
            return self.write_components(f, precision);
        };

        let mut rendered = String::new();
        self.write_components(&mut rendered, precision)?;

        let padding = width.saturating_sub(rendered.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };

        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&rendered)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&VectorFormat::INVARIANT), f)
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&type_name("Double", N))
            .field(self.as_array())
            .finish()
    }
}

impl<const N: usize> fmt::Display for BoolVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        for (i, component) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{component}")?;
        }
        f.write_char('>')
    }
}

impl<const N: usize> fmt::Debug for BoolVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&type_name("Bool", N))
            .field(&self.to_array())
            .finish()
    }
}

impl<W: fmt::Write> fmt::Write for DecimalSeparatorWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.separator == '.' {
            return self.inner.write_str(s);
        }
        for (i, part) in s.split('.').enumerate() {
            if i > 0 {
                self.inner.write_char(self.separator)?;
            }
            self.inner.write_str(part)?;
        }
        Ok(())
    }
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.written + s.len();
        let target = self.buffer.get_mut(self.written..end).ok_or(fmt::Error)?;
        target.copy_from_slice(s.as_bytes());
        self.written = end;
        Ok(())
    }
}

fn type_name(scalar: &str, arity: usize) -> String {
    if (2..=4).contains(&arity) {
        format!("{scalar}{arity}")
    } else {
        format!("{scalar}Vector<{arity}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Double2, Double3, Double4};

    #[test]
    fn default_display_brackets_and_separates_components() {
        assert_eq!(Double2::new(1.5, 2.5).to_string(), "<1.5, 2.5>");
        assert_eq!(Double3::new(1.0, -2.0, 0.25).to_string(), "<1, -2, 0.25>");
        assert_eq!(
            Double4::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "<1, 2, 3, 4>"
        );
    }

    #[test]
    fn display_honours_formatter_precision() {
        assert_eq!(
            format!("{:.2}", Double2::new(1.0, 2.346)),
            "<1.00, 2.35>"
        );
    }

    #[test]
    fn display_pads_whole_vector_to_requested_width() {
        let v = Double2::new(1.5, 2.5);
        assert_eq!(format!("{v:>14}"), "    <1.5, 2.5>");
        assert_eq!(format!("{v:14}"), "<1.5, 2.5>    ");
        assert_eq!(format!("{v:*^14}"), "**<1.5, 2.5>**");
        assert_eq!(format!("{v:4}"), "<1.5, 2.5>");
        assert_eq!(format!("{:>12.1}", Double2::new(1.0, 2.0)), "  <1.0, 2.0>");
    }

    #[test]
    fn display_renders_non_finite_components() {
        let v = Double3::new(f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(v.to_string(), "<inf, -inf, NaN>");
    }

    #[test]
    fn decimal_comma_format_works() {
        let v = Double2::new(1.5, 2.5);
        assert_eq!(v.format_with(&VectorFormat::DECIMAL_COMMA), "<1,5; 2,5>");
        assert_eq!(
            v.format_with(&VectorFormat::DECIMAL_COMMA.with_precision(2)),
            "<1,50; 2,50>"
        );
        assert_eq!(
            format!("{}", v.display_with(&VectorFormat::new('|', '.'))),
            "<1.5| 2.5>"
        );
    }

    #[test]
    fn format_precision_overrides_formatter_precision() {
        let format = VectorFormat::INVARIANT.with_precision(1);
        let v = Double2::new(1.26, 2.0);
        assert_eq!(format!("{:.3}", v.display_with(&format)), "<1.3, 2.0>");
    }

    #[test]
    fn format_accessors_work() {
        let format = VectorFormat::DECIMAL_COMMA.with_precision(3);
        assert_eq!(format.list_separator(), ';');
        assert_eq!(format.decimal_separator(), ',');
        assert_eq!(format.precision(), Some(3));
        assert_eq!(VectorFormat::default(), VectorFormat::INVARIANT);
    }

    #[test]
    fn formatting_into_large_enough_buffer_works() {
        let mut buffer = [0; 32];
        let written = Double2::new(1.5, 2.5)
            .try_format_into(&mut buffer, &VectorFormat::INVARIANT)
            .unwrap();
        assert_eq!(&buffer[..written], b"<1.5, 2.5>");

        let mut exact = [0; 10];
        assert_eq!(
            Double2::new(1.5, 2.5).try_format_into(&mut exact, &VectorFormat::INVARIANT),
            Ok(10)
        );
    }

    #[test]
    fn formatting_into_too_small_buffer_fails() {
        let mut buffer = [0; 4];
        assert_eq!(
            Double3::new(1.0, 2.0, 3.0).try_format_into(&mut buffer, &VectorFormat::INVARIANT),
            Err(VectorError::BufferTooSmall {
                capacity: 4,
                required: 9
            })
        );
    }

    #[test]
    fn debug_names_the_type() {
        assert_eq!(
            format!("{:?}", Double3::new(1.0, 2.0, 3.0)),
            "Double3([1.0, 2.0, 3.0])"
        );
        let mask = Double2::new(1.0, 2.0).cmpgt(1.5);
        assert_eq!(format!("{mask:?}"), "Bool2([false, true])");
        assert_eq!(mask.to_string(), "<false, true>");
    }
}
