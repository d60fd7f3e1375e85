use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Stdout;
use std::io::Write;
use std::path::Path;

use tracing::debug;

/// Where the image goes. Either standard output or a file, behind one `Write` impl so rendering
/// doesn't care which.
///
/// Both variants are buffered. Dropping an `Output` flushes it on a best effort basis, call
/// [`Output::finish`] to see flush errors.
pub enum Output {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout(BufWriter::new(io::stdout()))
    }

    /// Create (or truncate) the file at `path`.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "opened output file");

        Ok(Output::File(BufWriter::new(file)))
    }

    /// Stdout if `path` is `None`, otherwise the file at `path`.
    pub fn open(path: Option<&Path>) -> io::Result<Self> {
        match path {
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Flush everything and release the sink.
    pub fn finish(mut self) -> io::Result<()> {
        self.flush()?;

        if let Output::File(w) = self {
            w.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        }

        Ok(())
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::Output;

    #[test]
    fn file_output_round_trip() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("cellular-io-{}.pbm", std::process::id()));

        let mut out = Output::open(Some(&path))?;
        writeln!(out, "P1 1 1")?;
        writeln!(out, "1")?;
        out.finish()?;

        let written = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(written, "P1 1 1\n1\n");

        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        let path = std::env::temp_dir()
            .join("cellular-does-not-exist")
            .join("out.pbm");

        assert!(Output::open(Some(&path)).is_err());
    }
}
