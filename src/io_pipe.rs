use std::{io::Read, path::PathBuf};

use anyhow::{bail, Context, Result};
use folksonomy::{Folksonomy, Outline, TagCount};
use indexmap::IndexMap;

use crate::IoArgs;

/// Structure that abstracts the input and output of subcommands.
pub struct IoPipe {
    source: Source,
    dest: PathBuf,
}

impl IoPipe {
    pub fn read_text(&self) -> &str {
        match self.source {
            Source::Stdin(ref content) => content,
            Source::File { ref content, .. } => content,
        }
    }

    pub fn read_outline(&self) -> Result<Outline> {
        Ok(idm::from_str(self.read_text())?)
    }

    /// Read tag counts, either IDM lines of `tag count` or CSV with a
    /// `tag,count` header.
    ///
    /// CSV is used if `csv` is set or the input file has a `.csv`
    /// extension.
    pub fn read_counts(&self, csv: bool) -> Result<Folksonomy> {
        let content = self.read_text();

        if csv || self.is_csv() {
            let mut rdr = csv::Reader::from_reader(content.as_bytes());
            let counts: Vec<TagCount> = rdr
                .deserialize()
                .collect::<Result<_, _>>()
                .context("read_counts: bad CSV input")?;
            return Ok(Folksonomy(counts));
        }

        let counts: IndexMap<String, u32> = idm::from_str(content)
            .context("read_counts: expected lines of `tag count`")?;
        Ok(counts.into())
    }

    pub fn write_text(&self, output: impl AsRef<str>) -> Result<()> {
        if self.dest.to_str() == Some("-") {
            print!("{}", output.as_ref());
        } else if self.dest.is_dir() {
            bail!("Cannot write text to a directory");
        } else {
            std::fs::write(&self.dest, output.as_ref())?;
        }
        Ok(())
    }

    fn is_csv(&self) -> bool {
        match &self.source {
            Source::File { path, .. } => {
                path.extension().is_some_and(|e| e == "csv")
            }
            Source::Stdin(_) => false,
        }
    }
}

impl TryFrom<IoArgs> for IoPipe {
    type Error = anyhow::Error;

    fn try_from(value: IoArgs) -> Result<Self> {
        let source = if value.input.to_str() == Some("-") {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Source::Stdin(input)
        } else if value.input.is_file() {
            let content = std::fs::read_to_string(&value.input)?;
            Source::File {
                path: value.input.clone(),
                content,
            }
        } else {
            bail!("Input {:?} is not a file", value.input);
        };

        let dest = value.output.unwrap_or_else(|| PathBuf::from("-"));

        Ok(IoPipe { source, dest })
    }
}

enum Source {
    Stdin(String),
    File { path: PathBuf, content: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe(dir: &tempfile::TempDir, name: &str, content: &str) -> IoPipe {
        let input = dir.path().join(name);
        std::fs::write(&input, content).unwrap();
        IoPipe::try_from(IoArgs {
            input,
            output: Some(dir.path().join("out.html")),
        })
        .unwrap()
    }

    #[test]
    fn test_read_idm_counts() {
        let dir = tempfile::tempdir().unwrap();
        let io = pipe(&dir, "counts.idm", "rust 12\ngo 3\n");
        assert_eq!(
            *io.read_counts(false).unwrap(),
            vec![TagCount::new("rust", 12), TagCount::new("go", 3)]
        );
    }

    #[test]
    fn test_read_csv_counts() {
        let dir = tempfile::tempdir().unwrap();
        let content = "tag,count\nrust,12\n\"c,c++\",3\n";

        let io = pipe(&dir, "counts.csv", content);
        assert_eq!(
            *io.read_counts(false).unwrap(),
            vec![TagCount::new("rust", 12), TagCount::new("c,c++", 3)]
        );

        // Explicitly requested CSV regardless of extension.
        let io = pipe(&dir, "counts.txt", content);
        assert_eq!(io.read_counts(true).unwrap().len(), 2);
    }

    #[test]
    fn test_bad_csv() {
        let dir = tempfile::tempdir().unwrap();
        let io = pipe(&dir, "counts.csv", "tag,count\nrust,lots\n");
        assert!(io.read_counts(false).is_err());
    }

    #[test]
    fn test_write_text() {
        let dir = tempfile::tempdir().unwrap();
        let io = pipe(&dir, "counts.idm", "rust 1\n");
        io.write_text("<ul></ul>").unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("out.html")).unwrap(),
            "<ul></ul>"
        );
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = IoArgs {
            input: dir.path().join("nope.idm"),
            output: None,
        };
        assert!(IoPipe::try_from(args).is_err());
    }
}
