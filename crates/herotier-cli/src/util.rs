use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use herotier_identity::IdentityTable;
use herotier_model::{Dataset, HeroTable, MapTable};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            log::info!("report written to {}", path.display());
        }
        Ok(())
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self)
            .with_context(|| format!("Failed to write newline to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads the hero and map tables and validates them as one dataset.
pub fn read_dataset<P, Q>(heroes_path: P, maps_path: Q) -> anyhow::Result<Dataset>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let heroes: HeroTable = read_json_file("hero", &heroes_path)?;
    let maps: MapTable = read_json_file("map", &maps_path)?;
    let dataset = Dataset::from_tables(heroes, maps).with_context(|| {
        format!(
            "Invalid dataset: {} / {}",
            heroes_path.as_ref().display(),
            maps_path.as_ref().display()
        )
    })?;
    log::info!(
        "loaded {} heroes and {} maps",
        dataset.heroes().len(),
        dataset.maps().len()
    );
    Ok(dataset)
}

pub fn read_identity_file<P>(path: P) -> anyhow::Result<IdentityTable>
where
    P: AsRef<Path>,
{
    let table: IdentityTable = read_json_file("hero identity", &path)?;
    table
        .validate()
        .with_context(|| format!("Invalid identity table: {}", path.as_ref().display()))?;
    log::info!("loaded {} hero identities", table.heroes.len());
    Ok(table)
}
