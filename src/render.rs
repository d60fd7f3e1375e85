use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::rule_set::Rule;
use crate::world::World;
use crate::world::validate_steps;

/// Header line of a plain PBM image.
///
/// See: https://netpbm.sourceforge.net/doc/pbm.html
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Header {
    pub width: usize,
    pub height: usize,
}

impl Header {
    pub fn for_world(world: &World) -> Self {
        Self {
            width: world.width(),
            height: world.height(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P1 {} {}", self.width, self.height)
    }
}

/// Run `rule` for `steps` generations, writing the image to `out`.
///
/// Each line, header included, ends with exactly one `\n`. Rows already written stay written if
/// `out` fails part way through.
pub fn write_image<W: Write>(out: &mut W, rule: Rule, steps: usize) -> Result<()> {
    let mut world = World::new(rule, steps)?;
    write_world(out, &mut world)?;

    debug!(%rule, steps, "wrote image");

    Ok(())
}

/// Write the header and every row of a freshly created `world`, evolving it as rows are written.
///
/// A failed write stops the world where it is.
pub fn write_world<W: Write>(out: &mut W, world: &mut World) -> Result<()> {
    writeln!(out, "{}", Header::for_world(world))?;

    world.run(|row| writeln!(out, "{row}").map_err(Error::from))
}

/// Render the image for `rule` and `steps` as a string.
///
/// Both arguments are validated before anything is rendered.
pub fn generate(rule: i64, steps: i64) -> Result<String> {
    let rule = Rule::try_from(rule)?;
    let steps = validate_steps(steps)?;

    let mut buf = Vec::new();
    write_image(&mut buf, rule, steps)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod test {
    use std::io;
    use std::io::Write;

    use super::generate;
    use super::write_image;
    use super::write_world;
    use crate::error::DomainError;
    use crate::error::Error;
    use crate::rule_set::RULE_30;
    use crate::world::World;

    #[test]
    fn zero_steps() {
        assert_eq!(generate(30, 0).unwrap(), "P1 1 1\n1\n");
    }

    #[test]
    fn one_step_rule_30() {
        assert_eq!(generate(30, 1).unwrap(), "P1 3 2\n0 1 0\n1 1 1\n");
    }

    /// Accepts `n` lines, then fails
    struct FailAfter {
        lines: usize,
        buf: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            if self.lines == 0 {
                return Err(io::Error::other("sink closed"));
            }

            self.lines -= bytes.iter().filter(|&&b| b == b'\n').count();
            self.buf.extend_from_slice(bytes);

            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_error_keeps_written_rows() {
        let mut out = FailAfter {
            lines: 2,
            buf: Vec::new(),
        };

        let err = write_image(&mut out, RULE_30, 3).unwrap_err();

        assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
        assert_eq!(out.buf, b"P1 7 4\n0 0 0 1 0 0 0\n");
    }

    #[test]
    fn io_error_stops_evolving() {
        let mut out = FailAfter {
            lines: 2,
            buf: Vec::new(),
        };
        let mut world = World::new(RULE_30, 4000).unwrap();

        let err = write_world(&mut out, &mut world).unwrap_err();

        assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
        assert_eq!(world.generation, 1);
    }

    #[test]
    fn too_many_steps() {
        let res = generate(30, i64::MAX);

        assert!(
            matches!(res, Err(Error::Domain(DomainError::TooManySteps(_)))),
            "unexpected result {res:?}"
        );
    }
}
